//! Algorithm identifiers and per-configuration accumulators.

use std::fmt;
use std::time::Duration;

/// The three compared heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// [`GreedyRunner`](crate::greedy::GreedyRunner)
    BasicGreedy,
    /// [`MultiStartRunner`](crate::multistart::MultiStartRunner)
    MultiStartGreedy,
    /// [`VngRunner`](crate::vng::VngRunner)
    VariableNeighborhoodGreedy,
}

impl Algorithm {
    /// Execution order within one trial.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BasicGreedy,
        Algorithm::MultiStartGreedy,
        Algorithm::VariableNeighborhoodGreedy,
    ];

    /// Human-readable name used in the results table.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BasicGreedy => "Basic Greedy",
            Algorithm::MultiStartGreedy => "Multi-Start Greedy",
            Algorithm::VariableNeighborhoodGreedy => "Variable Neighborhood Greedy",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Running sums for one (dimension, algorithm) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialRecord {
    /// Sum of final objective values.
    pub cost_sum: f64,
    /// Sum of wall-clock durations.
    pub elapsed_sum: Duration,
    /// Number of recorded runs.
    pub runs: usize,
}

impl TrialRecord {
    /// Adds one finished run.
    pub fn record(&mut self, cost: f64, elapsed: Duration) {
        self.cost_sum += cost;
        self.elapsed_sum += elapsed;
        self.runs += 1;
    }

    /// Arithmetic mean of the recorded costs, `None` before any run.
    pub fn mean_cost(&self) -> Option<f64> {
        (self.runs > 0).then(|| self.cost_sum / self.runs as f64)
    }

    /// Arithmetic mean of the recorded durations, `None` before any run.
    pub fn mean_elapsed(&self) -> Option<Duration> {
        (self.runs > 0).then(|| {
            let nanos = self.elapsed_sum.as_nanos() / self.runs as u128;
            Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
        })
    }
}
