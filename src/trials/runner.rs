//! Repeated-trial execution.
//!
//! For each dimensionality the harness runs every selected algorithm
//! `number_of_tests` times, timing each run together with the final
//! objective evaluation, and reduces the runs to mean cost and mean
//! wall-clock time. Accumulators are rebuilt for every dimensionality.

use rand::Rng;
use std::time::Instant;
use tracing::{debug, info};

use super::config::TrialConfig;
use super::record::{Algorithm, TrialRecord};
use super::report::{TrialReport, TrialSummary};
use crate::error::{GreedyError, Result};
use crate::greedy::GreedyRunner;
use crate::multistart::MultiStartRunner;
use crate::objective::rastrigin;
use crate::random::create_rng;
use crate::vng::VngRunner;

/// Trial harness runner.
pub struct TrialRunner;

impl TrialRunner {
    /// Runs the experiment with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_greedy::trials::{TrialConfig, TrialRunner};
    ///
    /// let config = TrialConfig::default()
    ///     .with_dimensions(vec![2])
    ///     .with_number_of_tests(1)
    ///     .with_max_iterations(50)
    ///     .with_max_starts(5)
    ///     .with_seed(42);
    /// let report = TrialRunner::run(&config).unwrap();
    /// assert_eq!(report.rows.len(), 3);
    /// ```
    pub fn run(config: &TrialConfig) -> Result<TrialReport> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs the experiment drawing every trial from the supplied generator.
    pub fn run_with_rng<R: Rng>(config: &TrialConfig, rng: &mut R) -> Result<TrialReport> {
        if config.number_of_tests == 0 {
            return Err(GreedyError::ZeroTests);
        }
        config.validate().map_err(GreedyError::InvalidConfig)?;

        let algorithms: Vec<Algorithm> = Algorithm::ALL
            .into_iter()
            .filter(|a| config.algorithms.contains(a))
            .collect();
        let mut rows = Vec::with_capacity(config.dimensions.len() * algorithms.len());

        for &dimension in &config.dimensions {
            let mut records = vec![TrialRecord::default(); algorithms.len()];

            for test in 0..config.number_of_tests {
                for (algorithm, record) in algorithms.iter().zip(records.iter_mut()) {
                    let start = Instant::now();
                    let best = run_once(*algorithm, config, dimension, rng)?;
                    let cost = rastrigin(&best);
                    let elapsed = start.elapsed();

                    debug!(dimension, test, %algorithm, cost, ?elapsed, "trial finished");
                    record.record(cost, elapsed);
                }
            }

            for (algorithm, record) in algorithms.iter().zip(records) {
                let summary = TrialSummary::from_record(dimension, *algorithm, &record)?;
                info!(
                    dimension,
                    %algorithm,
                    mean_cost = summary.mean_cost,
                    mean_ms = summary.mean_elapsed.as_millis() as u64,
                    "configuration summarized"
                );
                rows.push(summary);
            }
        }

        Ok(TrialReport { rows })
    }
}

/// Runs one algorithm once and returns its final vector.
fn run_once<R: Rng>(
    algorithm: Algorithm,
    config: &TrialConfig,
    dimension: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    Ok(match algorithm {
        Algorithm::BasicGreedy => GreedyRunner::run_with_rng(&config.greedy(dimension), rng)?.best,
        Algorithm::MultiStartGreedy => {
            MultiStartRunner::run_with_rng(&config.multi_start(dimension), rng)?.best
        }
        Algorithm::VariableNeighborhoodGreedy => {
            VngRunner::run_with_rng(&config.vng(dimension), rng)?.best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vng::VngTermination;

    fn small_config() -> TrialConfig {
        TrialConfig::default()
            .with_dimensions(vec![2, 3])
            .with_number_of_tests(2)
            .with_max_iterations(100)
            .with_max_starts(10)
            .with_seed(42)
    }

    #[test]
    fn test_rows_in_dimension_then_algorithm_order() {
        let report = TrialRunner::run(&small_config()).unwrap();

        let keys: Vec<(usize, Algorithm)> =
            report.rows.iter().map(|r| (r.dimension, r.algorithm)).collect();
        assert_eq!(
            keys,
            vec![
                (2, Algorithm::BasicGreedy),
                (2, Algorithm::MultiStartGreedy),
                (2, Algorithm::VariableNeighborhoodGreedy),
                (3, Algorithm::BasicGreedy),
                (3, Algorithm::MultiStartGreedy),
                (3, Algorithm::VariableNeighborhoodGreedy),
            ]
        );
        assert!(report.rows.iter().all(|r| r.runs == 2));
    }

    #[test]
    fn test_single_test_gives_finite_means() {
        let config = small_config().with_number_of_tests(1);
        let report = TrialRunner::run(&config).unwrap();

        for row in &report.rows {
            assert_eq!(row.runs, 1);
            assert!(row.mean_cost.is_finite() && row.mean_cost >= 0.0);
        }
    }

    #[test]
    fn test_seeded_costs_reproducible() {
        let a = TrialRunner::run(&small_config()).unwrap();
        let b = TrialRunner::run(&small_config()).unwrap();

        let costs = |r: &TrialReport| r.rows.iter().map(|s| s.mean_cost).collect::<Vec<_>>();
        assert_eq!(costs(&a), costs(&b));
    }

    #[test]
    fn test_algorithm_subset_keeps_canonical_order() {
        let config = small_config().with_algorithms(vec![
            Algorithm::VariableNeighborhoodGreedy,
            Algorithm::BasicGreedy,
        ]);
        let report = TrialRunner::run(&config).unwrap();

        let algorithms: Vec<Algorithm> = report.rows.iter().map(|r| r.algorithm).collect();
        assert_eq!(
            algorithms,
            vec![
                Algorithm::BasicGreedy,
                Algorithm::VariableNeighborhoodGreedy,
                Algorithm::BasicGreedy,
                Algorithm::VariableNeighborhoodGreedy,
            ]
        );
    }

    #[test]
    fn test_fixed_iteration_vng_mode() {
        let config = small_config()
            .with_vng_termination(VngTermination::FixedIterations)
            .with_algorithms(vec![Algorithm::VariableNeighborhoodGreedy]);
        let report = TrialRunner::run(&config).unwrap();
        assert_eq!(report.rows.len(), 2);
    }

    #[test]
    fn test_zero_tests_rejected() {
        let err = TrialRunner::run(&small_config().with_number_of_tests(0)).unwrap_err();
        assert_eq!(err, GreedyError::ZeroTests);
    }

    #[test]
    fn test_invalid_dimension_rejected() {
        let err = TrialRunner::run(&small_config().with_dimensions(vec![0])).unwrap_err();
        assert!(err.is_config_error());
    }
}
