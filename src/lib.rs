//! Stochastic greedy local search on the Rastrigin benchmark.
//!
//! Three hill-climbing heuristics share one set of building blocks and
//! differ only in their control loop:
//!
//! - **Basic Greedy**: fixed iteration budget, batch sampling, fixed spread.
//! - **Multi-Start Greedy**: repeated descents to a local optimum from
//!   fresh random starts, keeping the best.
//! - **Variable-Neighborhood Greedy**: single-candidate steps whose spread
//!   grows with consecutive failures and resets on success.
//!
//! All three accept a move only on strict improvement. The perturbation
//! law (Gaussian, uniform, Cauchy) and the initialization interval are
//! configuration axes shared by every algorithm.
//!
//! # Architecture
//!
//! Leaves first: [`objective`] evaluates, [`neighborhood`] samples
//! candidate batches, [`selection`] picks the cheapest, [`domain`] draws
//! starting points. The algorithm modules compose these, and [`trials`]
//! runs repeated comparisons.
//!
//! Every runner takes either a seed in its config or an explicit
//! generator through `run_with_rng`; no global random state is used.

pub mod domain;
pub mod error;
pub mod greedy;
pub mod multistart;
pub mod neighborhood;
pub mod objective;
pub mod random;
pub mod selection;
pub mod solution;
pub mod trials;
pub mod vng;

pub use error::{GreedyError, Result};
