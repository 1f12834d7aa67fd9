//! Repeated-trial comparison harness.
//!
//! Sweeps a list of dimensionalities, runs each algorithm a fixed number
//! of times per dimensionality, and reports the mean final cost and mean
//! wall-clock time of every (dimension, algorithm) pair.
//!
//! Trials run sequentially on one thread. With a seed, the whole
//! experiment draws from a single generator in a fixed order, so the
//! reported costs are reproducible; timings never are.

mod config;
mod record;
mod report;
mod runner;

pub use config::TrialConfig;
pub use record::{Algorithm, TrialRecord};
pub use report::{TrialReport, TrialSummary};
pub use runner::TrialRunner;
