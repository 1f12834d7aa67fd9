//! Multi-start greedy hill climbing.
//!
//! Repeats an independent greedy descent from fresh random starting
//! points and keeps the best local optimum. Each descent runs until one
//! full batch fails to improve on the current point.
//!
//! # References
//!
//! - Martí, R. (2003). "Multi-start methods", in *Handbook of
//!   Metaheuristics*, 355-368.

mod config;
mod runner;

pub use config::MultiStartConfig;
pub use runner::{MultiStartResult, MultiStartRunner, RestartOutcome};
