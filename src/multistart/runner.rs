//! Multi-start greedy execution engine.
//!
//! # Algorithm
//!
//! 1. For each of `max_starts` restarts:
//!    a. Draw x uniformly from the domain
//!    b. **Descent**: sample a batch around x, select the cheapest x'.
//!    If f(x') < f(x), set x = x' and repeat; otherwise x is a local
//!    optimum and the descent stops
//!    c. If f(x) beats the best restart so far, keep x as the global best
//! 2. Return the global best
//!
//! Restarts run one at a time. Each descent owns its working solution and
//! hands it over by move when it becomes the global best, so the retained
//! best never shares storage with a later restart.

use rand::Rng;
use tracing::{debug, trace};

use super::config::MultiStartConfig;
use crate::error::{GreedyError, Result};
use crate::neighborhood::sample_batch;
use crate::random::create_rng;
use crate::selection::select_best;
use crate::solution::Solution;

/// Summary of one restart's descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestartOutcome {
    /// Cost of the restart's initial point.
    pub initial_cost: f64,
    /// Cost of the local optimum the descent stopped at.
    pub final_cost: f64,
    /// Batches drawn, including the final non-improving one.
    pub steps: usize,
    /// Accepted moves.
    pub improving_moves: usize,
}

/// Result of a multi-start greedy run.
#[derive(Debug, Clone)]
pub struct MultiStartResult {
    /// Best vector across all restarts.
    pub best: Vec<f64>,
    /// Objective value of `best`.
    pub best_cost: f64,
    /// Index of the restart that produced `best`.
    pub best_restart: usize,
    /// One entry per restart, in execution order.
    pub restarts: Vec<RestartOutcome>,
    /// Total descent steps over all restarts.
    pub iterations: usize,
    /// Objective evaluations, including each restart's initial point.
    pub evaluations: usize,
}

/// A finished local descent.
#[derive(Debug, Clone)]
pub(crate) struct Descent {
    pub solution: Solution,
    pub steps: usize,
    pub improvement_history: Vec<f64>,
}

/// Multi-start greedy runner.
pub struct MultiStartRunner;

impl MultiStartRunner {
    /// Runs multi-start greedy with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_greedy::multistart::{MultiStartConfig, MultiStartRunner};
    ///
    /// let config = MultiStartConfig::new(2).with_max_starts(20).with_seed(42);
    /// let result = MultiStartRunner::run(&config).unwrap();
    /// assert_eq!(result.restarts.len(), 20);
    /// ```
    pub fn run(config: &MultiStartConfig) -> Result<MultiStartResult> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs multi-start greedy drawing from the supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        config: &MultiStartConfig,
        rng: &mut R,
    ) -> Result<MultiStartResult> {
        if config.dimension == 0 {
            return Err(GreedyError::ZeroDimension);
        }
        config.validate().map_err(GreedyError::InvalidConfig)?;

        debug!(
            dimension = config.dimension,
            max_starts = config.max_starts,
            batch_size = config.batch_size,
            perturbation = %config.perturbation,
            "multi-start greedy started"
        );

        let mut best: Option<(usize, Solution)> = None;
        let mut restarts = Vec::with_capacity(config.max_starts);
        let mut iterations = 0;
        let mut evaluations = 0;

        for restart in 0..config.max_starts {
            let start = Solution::evaluate(config.domain.sample(config.dimension, rng)?);
            let initial_cost = start.cost();
            let descent = descend(start, config, rng)?;

            iterations += descent.steps;
            evaluations += 1 + descent.steps * config.batch_size;
            restarts.push(RestartOutcome {
                initial_cost,
                final_cost: descent.solution.cost(),
                steps: descent.steps,
                improving_moves: descent.improvement_history.len() - 1,
            });

            let replace = match &best {
                None => true,
                Some((_, incumbent)) => descent.solution.improves_on(incumbent),
            };
            if replace {
                trace!(restart, cost = descent.solution.cost(), "new global best");
                best = Some((restart, descent.solution));
            }
        }

        let (best_restart, best) = best.ok_or_else(|| {
            GreedyError::InvalidConfig("max_starts must be at least 1".into())
        })?;
        let best_cost = best.cost();
        debug!(best_cost, best_restart, evaluations, "multi-start greedy finished");

        Ok(MultiStartResult {
            best: best.into_point(),
            best_cost,
            best_restart,
            restarts,
            iterations,
            evaluations,
        })
    }
}

/// Greedy descent from `start` until a batch brings no strict improvement.
pub(crate) fn descend<R: Rng>(
    start: Solution,
    config: &MultiStartConfig,
    rng: &mut R,
) -> Result<Descent> {
    let mut current = start;
    let mut improvement_history = vec![current.cost()];
    let mut steps = 0;

    loop {
        let batch = sample_batch(
            current.point(),
            config.batch_size,
            config.perturbation,
            config.spread,
            rng,
        )?;
        steps += 1;
        let candidate = select_best(batch)?;

        if !candidate.improves_on(&current) {
            break;
        }
        current = candidate;
        improvement_history.push(current.cost());
    }

    Ok(Descent {
        solution: current,
        steps,
        improvement_history,
    })
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
    fn test_global_best_not_worse_than_any_restart() {
        let config = MultiStartConfig::new(3).with_max_starts(100).with_seed(42);
        let result = MultiStartRunner::run(&config).unwrap();

        for outcome in &result.restarts {
            assert!(
                result.best_cost <= outcome.final_cost,
                "global best {} worse than restart {}",
                result.best_cost,
                outcome.final_cost
            );
        }
        assert_eq!(
            result.restarts[result.best_restart].final_cost,
            result.best_cost
        );
        assert_eq!(result.best_cost, rastrigin(&result.best));
    }

    #[test]
    fn test_best_restart_is_first_minimum() {
        let config = MultiStartConfig::new(2).with_max_starts(60).with_seed(5);
        let result = MultiStartRunner::run(&config).unwrap();

        let first_min = result
            .restarts
            .iter()
            .position(|o| o.final_cost == result.best_cost)
            .unwrap();
        assert_eq!(first_min, result.best_restart);
    }

    #[test]
    fn test_descent_strictly_decreasing() {
        let config = MultiStartConfig::new(4);
        let mut rng = StdRng::seed_from_u64(42);

        for perturbation in Perturbation::ALL {
            let config = config.clone().with_perturbation(perturbation);
            let start = Solution::evaluate(config.domain.sample(4, &mut rng).unwrap());
            let descent = descend(start, &config, &mut rng).unwrap();

            for window in descent.improvement_history.windows(2) {
                assert!(window[1] < window[0], "{perturbation}: {window:?}");
            }
            assert_eq!(descent.steps, descent.improvement_history.len());
        }
    }

    #[test]
    fn test_restart_outcomes_consistent() {
        let config = MultiStartConfig::new(2).with_max_starts(30).with_seed(8);
        let result = MultiStartRunner::run(&config).unwrap();

        let steps: usize = result.restarts.iter().map(|o| o.steps).sum();
        assert_eq!(steps, result.iterations);
        for outcome in &result.restarts {
            assert!(outcome.final_cost <= outcome.initial_cost);
            assert_eq!(outcome.steps, outcome.improving_moves + 1);
        }
    }

    #[test]
    fn test_zero_spread_stops_immediately() {
        let config = MultiStartConfig::new(2)
            .with_max_starts(5)
            .with_spread(0.0)
            .with_seed(42);
        let result = MultiStartRunner::run(&config).unwrap();

        for outcome in &result.restarts {
            assert_eq!(outcome.steps, 1);
            assert_eq!(outcome.final_cost, outcome.initial_cost);
        }
    }

    #[test]
    fn test_offset_domain_still_descends() {
        let config = MultiStartConfig::new(2)
            .with_max_starts(20)
            .with_domain(Domain::offset())
            .with_seed(42);
        let result = MultiStartRunner::run(&config).unwrap();

        let worst_start = result
            .restarts
            .iter()
            .map(|o| o.initial_cost)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(result.best_cost < worst_start);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let config = MultiStartConfig::new(3).with_max_starts(25).with_seed(77);
        let a = MultiStartRunner::run(&config).unwrap();
        let b = MultiStartRunner::run(&config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.restarts, b.restarts);
    }

    #[test]
    fn test_zero_dimension_is_input_error() {
        let err = MultiStartRunner::run(&MultiStartConfig::new(0)).unwrap_err();
        assert_eq!(err, GreedyError::ZeroDimension);
        assert!(err.is_input_error());
    }
}
