//! Averaged results and their table rendering.

use std::fmt;
use std::time::Duration;

use super::record::{Algorithm, TrialRecord};
use crate::error::{GreedyError, Result};

/// Mean results for one (dimension, algorithm) pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialSummary {
    /// Problem dimensionality.
    pub dimension: usize,
    /// Algorithm that produced the runs.
    pub algorithm: Algorithm,
    /// Number of averaged runs.
    pub runs: usize,
    /// Mean final objective value.
    pub mean_cost: f64,
    /// Mean wall-clock time per run.
    pub mean_elapsed: Duration,
}

impl TrialSummary {
    /// Reduces a record to its means.
    ///
    /// # Errors
    ///
    /// [`GreedyError::ZeroTests`] if the record holds no runs.
    pub fn from_record(
        dimension: usize,
        algorithm: Algorithm,
        record: &TrialRecord,
    ) -> Result<Self> {
        let (Some(mean_cost), Some(mean_elapsed)) = (record.mean_cost(), record.mean_elapsed())
        else {
            return Err(GreedyError::ZeroTests);
        };
        Ok(Self {
            dimension,
            algorithm,
            runs: record.runs,
            mean_cost,
            mean_elapsed,
        })
    }
}

/// All summaries of one experiment, in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialReport {
    /// One row per (dimension, algorithm), dimension-major.
    pub rows: Vec<TrialSummary>,
}

impl TrialReport {
    /// Rows for a single dimensionality.
    pub fn rows_for(&self, dimension: usize) -> impl Iterator<Item = &TrialSummary> {
        self.rows.iter().filter(move |r| r.dimension == dimension)
    }

    /// The row with the lowest mean cost at `dimension`.
    pub fn best_for(&self, dimension: usize) -> Option<&TrialSummary> {
        self.rows_for(dimension)
            .min_by(|a, b| a.mean_cost.total_cmp(&b.mean_cost))
    }
}

/// Renders the report as a markdown table.
///
/// Mean cost is printed with four decimals; mean time in whole
/// milliseconds.
impl fmt::Display for TrialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "| Dimensions | Algorithm                    | Average Result | Average Time (ms) |"
        )?;
        writeln!(
            f,
            "|------------|------------------------------|----------------|-------------------|"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "| {:<10} | {:<28} | {:<14.4} | {:<17} |",
                row.dimension,
                row.algorithm.name(),
                row.mean_cost,
                row.mean_elapsed.as_millis()
            )?;
        }
        Ok(())
    }
}
