//! Error types for the greedy search engine.
//!
//! Every error here is a composition mistake (an empty batch, a zero
//! dimension, a malformed configuration) rather than a runtime condition
//! the search could recover from. Runners return them instead of
//! degrading silently.

use thiserror::Error;

/// Errors raised while composing or running a search.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GreedyError {
    /// The selector was handed a batch with no candidates.
    #[error("candidate batch is empty")]
    EmptyBatch,

    /// A vector or configuration declared zero dimensions.
    #[error("dimension must be at least 1")]
    ZeroDimension,

    /// A sampler was asked for zero candidates.
    #[error("batch size must be at least 1")]
    ZeroBatchSize,

    /// The sampling interval is empty, reversed, or not finite.
    #[error("invalid domain [{lo}, {hi}]")]
    InvalidDomain {
        /// Lower bound of the interval
        lo: f64,
        /// Upper bound of the interval
        hi: f64,
    },

    /// The spread is negative or not finite.
    #[error("invalid spread: {spread} (must be finite and >= 0)")]
    InvalidSpread {
        /// The rejected spread value
        spread: f64,
    },

    /// A run configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The trial harness was asked to run zero tests per configuration.
    #[error("number of tests must be at least 1")]
    ZeroTests,
}

/// A specialized `Result` type for search operations.
pub type Result<T> = std::result::Result<T, GreedyError>;

impl GreedyError {
    /// Returns `true` for errors caused by malformed vectors or batches.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GreedyError::EmptyBatch
                | GreedyError::ZeroDimension
                | GreedyError::ZeroBatchSize
                | GreedyError::InvalidSpread { .. }
        )
    }

    /// Returns `true` for errors caused by run or harness configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GreedyError::InvalidConfig(_)
                | GreedyError::InvalidDomain { .. }
                | GreedyError::ZeroTests
        )
    }
}
