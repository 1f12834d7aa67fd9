//! Variable-neighborhood greedy execution engine.
//!
//! # Algorithm
//!
//! 1. Draw x uniformly from the domain, set k = 1
//! 2. While the termination rule allows:
//!    a. **Shaking**: sample one x' around x with spread
//!    `min(k * change_rate, max_spread)`
//!    b. **Move or not**: if f(x') < f(x), set x = x' and k = 1;
//!    otherwise k = k + 1
//! 3. Return x
//!
//! Failures widen the neighborhood, success snaps it back to the
//! smallest one.

use rand::Rng;
use tracing::{debug, trace};

use super::config::{VngConfig, VngTermination};
use crate::error::{GreedyError, Result};
use crate::neighborhood::sample_batch;
use crate::random::create_rng;
use crate::selection::select_best;
use crate::solution::Solution;

/// Result of a variable-neighborhood greedy run.
#[derive(Debug, Clone)]
pub struct VngResult {
    /// Final solution vector.
    pub best: Vec<f64>,
    /// Objective value of `best`.
    pub best_cost: f64,
    /// Samples drawn.
    pub iterations: usize,
    /// Accepted moves.
    pub improving_moves: usize,
    /// Objective evaluations, including the initial point.
    pub evaluations: usize,
    /// Longest run of consecutive non-improving samples.
    pub longest_stagnation: usize,
    /// Cost after each accepted move, starting with the initial cost.
    pub improvement_history: Vec<f64>,
}

/// Variable-neighborhood greedy runner.
pub struct VngRunner;

impl VngRunner {
    /// Runs variable-neighborhood greedy with a generator seeded from
    /// `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_greedy::vng::{VngConfig, VngRunner, VngTermination};
    ///
    /// let config = VngConfig::new(2)
    ///     .with_max_iterations(300)
    ///     .with_termination(VngTermination::FixedIterations)
    ///     .with_seed(42);
    /// let result = VngRunner::run(&config).unwrap();
    /// assert_eq!(result.iterations, 300);
    /// ```
    pub fn run(config: &VngConfig) -> Result<VngResult> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs variable-neighborhood greedy drawing from the supplied
    /// generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(config: &VngConfig, rng: &mut R) -> Result<VngResult> {
        if config.dimension == 0 {
            return Err(GreedyError::ZeroDimension);
        }
        config.validate().map_err(GreedyError::InvalidConfig)?;

        debug!(
            dimension = config.dimension,
            max_iterations = config.max_iterations,
            change_rate = config.change_rate,
            termination = %config.termination,
            perturbation = %config.perturbation,
            "variable-neighborhood greedy started"
        );

        let mut current = Solution::evaluate(config.domain.sample(config.dimension, rng)?);
        let mut improvement_history = vec![current.cost()];
        let mut k = 1usize;
        let mut iterations = 0usize;
        let mut longest_stagnation = 0usize;

        loop {
            let exhausted = match config.termination {
                VngTermination::Stagnation => k > config.max_iterations,
                VngTermination::FixedIterations => iterations >= config.max_iterations,
            };
            if exhausted {
                break;
            }

            let spread = config.spread_at(k);
            let batch = sample_batch(current.point(), 1, config.perturbation, spread, rng)?;
            let candidate = select_best(batch)?;
            iterations += 1;

            if candidate.improves_on(&current) {
                trace!(iterations, k, spread, cost = candidate.cost(), "accepted");
                current = candidate;
                improvement_history.push(current.cost());
                k = 1;
            } else {
                longest_stagnation = longest_stagnation.max(k);
                k += 1;
            }
        }

        let best_cost = current.cost();
        debug!(best_cost, iterations, "variable-neighborhood greedy finished");

        Ok(VngResult {
            best: current.into_point(),
            best_cost,
            iterations,
            improving_moves: improvement_history.len() - 1,
            evaluations: 1 + iterations,
            longest_stagnation,
            improvement_history,
        })
    }
}
