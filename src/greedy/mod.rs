//! Basic greedy hill climbing.
//!
//! A fixed-budget, batch-sampled hill climber. Every iteration draws a
//! batch of perturbations around the current point, keeps the cheapest,
//! and moves only on strict improvement. Worsening and sideways moves are
//! never taken.

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::{GreedyResult, GreedyRunner};
