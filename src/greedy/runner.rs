//! Basic greedy execution loop.
//!
//! # Algorithm
//!
//! 1. Draw x uniformly from the domain
//! 2. Repeat `max_iterations` times:
//!    a. Sample `batch_size` perturbations of x
//!    b. Select the cheapest candidate x'
//!    c. If f(x') < f(x), set x = x'
//! 3. Return x
//!
//! There is no early exit: a stagnating run still spends its whole budget.

use rand::Rng;
use tracing::{debug, trace};

use super::config::GreedyConfig;
use crate::error::{GreedyError, Result};
use crate::neighborhood::sample_batch;
use crate::random::create_rng;
use crate::selection::select_best;
use crate::solution::Solution;

/// Result of a basic greedy run.
#[derive(Debug, Clone)]
pub struct GreedyResult {
    /// Final solution vector.
    pub best: Vec<f64>,
    /// Objective value of `best`.
    pub best_cost: f64,
    /// Iterations executed (always `max_iterations`).
    pub iterations: usize,
    /// Number of accepted moves.
    pub improving_moves: usize,
    /// Objective evaluations, including the initial point.
    pub evaluations: usize,
    /// Cost of the current solution after each accepted move, starting
    /// with the initial cost. Strictly decreasing.
    pub improvement_history: Vec<f64>,
}

/// Basic greedy runner.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs basic greedy with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_greedy::greedy::{GreedyConfig, GreedyRunner};
    ///
    /// let config = GreedyConfig::new(2).with_max_iterations(200).with_seed(42);
    /// let result = GreedyRunner::run(&config).unwrap();
    /// assert_eq!(result.best.len(), 2);
    /// assert_eq!(result.iterations, 200);
    /// ```
    pub fn run(config: &GreedyConfig) -> Result<GreedyResult> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs basic greedy drawing from the supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(config: &GreedyConfig, rng: &mut R) -> Result<GreedyResult> {
        if config.dimension == 0 {
            return Err(GreedyError::ZeroDimension);
        }
        config.validate().map_err(GreedyError::InvalidConfig)?;

        debug!(
            dimension = config.dimension,
            max_iterations = config.max_iterations,
            batch_size = config.batch_size,
            perturbation = %config.perturbation,
            "basic greedy started"
        );

        let mut current = Solution::evaluate(config.domain.sample(config.dimension, rng)?);
        let mut improvement_history = vec![current.cost()];
        let mut evaluations = 1;

        for iteration in 0..config.max_iterations {
            let batch = sample_batch(
                current.point(),
                config.batch_size,
                config.perturbation,
                config.spread,
                rng,
            )?;
            evaluations += batch.len();
            let candidate = select_best(batch)?;

            if candidate.improves_on(&current) {
                trace!(iteration, cost = candidate.cost(), "accepted");
                current = candidate;
                improvement_history.push(current.cost());
            }
        }

        let best_cost = current.cost();
        debug!(best_cost, evaluations, "basic greedy finished");

        Ok(GreedyResult {
            best: current.into_point(),
            best_cost,
            iterations: config.max_iterations,
            improving_moves: improvement_history.len() - 1,
            evaluations,
            improvement_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use crate::neighborhood::Perturbation;
    use crate::objective::rastrigin;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_greedy_converges_in_two_dimensions() {
        let config = GreedyConfig::new(2).with_seed(42);
        let result = GreedyRunner::run(&config).unwrap();

        assert!(
            result.best_cost < 5.0,
            "expected a low basin, got {}",
            result.best_cost
        );
    }

    #[test]
    fn test_best_cost_matches_vector() {
        let config = GreedyConfig::new(4).with_max_iterations(300).with_seed(3);
        let result = GreedyRunner::run(&config).unwrap();
        assert_eq!(result.best_cost, rastrigin(&result.best));
    }

    #[test]
    fn test_history_strictly_decreasing() {
        for perturbation in Perturbation::ALL {
            let config = GreedyConfig::new(3)
                .with_max_iterations(500)
                .with_perturbation(perturbation)
                .with_seed(11);
            let result = GreedyRunner::run(&config).unwrap();

            for window in result.improvement_history.windows(2) {
                assert!(
                    window[1] < window[0],
                    "{perturbation}: accepted a non-improving move {} -> {}",
                    window[0],
                    window[1]
                );
            }
            assert_eq!(result.improving_moves, result.improvement_history.len() - 1);
            assert_eq!(
                *result.improvement_history.last().unwrap(),
                result.best_cost
            );
        }
    }

    #[test]
    fn test_full_budget_spent() {
        let config = GreedyConfig::new(2)
            .with_max_iterations(123)
            .with_batch_size(4)
            .with_seed(42);
        let result = GreedyRunner::run(&config).unwrap();

        assert_eq!(result.iterations, 123);
        assert_eq!(result.evaluations, 1 + 123 * 4);
    }

    #[test]
    fn test_zero_iterations_returns_initial_point() {
        let config = GreedyConfig::new(3).with_max_iterations(0).with_seed(42);
        let result = GreedyRunner::run(&config).unwrap();

        assert_eq!(result.improving_moves, 0);
        assert!(result.best.iter().all(|&x| Domain::default().contains(x)));
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let config = GreedyConfig::new(5).with_max_iterations(400).with_seed(99);
        let a = GreedyRunner::run(&config).unwrap();
        let b = GreedyRunner::run(&config).unwrap();

        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a.best), bits(&b.best));
        assert_eq!(a.best_cost.to_bits(), b.best_cost.to_bits());
    }

    #[test]
    fn test_injected_rng_overrides_seed() {
        let config = GreedyConfig::new(2).with_max_iterations(50).with_seed(1);
        let mut rng = StdRng::seed_from_u64(2);
        let injected = GreedyRunner::run_with_rng(&config, &mut rng).unwrap();
        let seeded = GreedyRunner::run(&config.clone().with_seed(2)).unwrap();
        assert_eq!(injected.best, seeded.best);
    }

    #[test]
    fn test_zero_dimension_is_input_error() {
        let err = GreedyRunner::run(&GreedyConfig::new(0)).unwrap_err();
        assert_eq!(err, GreedyError::ZeroDimension);
        assert!(err.is_input_error());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let err = GreedyRunner::run(&GreedyConfig::new(2).with_batch_size(0)).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_overflowing_uniform_spread_is_error() {
        let config = GreedyConfig::new(2)
            .with_perturbation(Perturbation::Uniform)
            .with_spread(1e308)
            .with_max_iterations(10)
            .with_seed(42);
        let err = GreedyRunner::run(&config).unwrap_err();
        assert_eq!(err, GreedyError::InvalidSpread { spread: 1e308 });
    }

    #[test]
    fn test_overflowing_domain_is_error() {
        let config = GreedyConfig::new(2)
            .with_domain(Domain::new(-f64::MAX, f64::MAX))
            .with_seed(42);
        assert!(config.validate().is_err());
        assert!(GreedyRunner::run(&config).unwrap_err().is_config_error());
    }
}
