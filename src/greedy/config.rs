//! Basic greedy configuration.

use crate::domain::Domain;
use crate::neighborhood::Perturbation;

/// Configuration for [`GreedyRunner`](super::GreedyRunner).
///
/// # Examples
///
/// ```
/// use u_greedy::greedy::GreedyConfig;
/// use u_greedy::neighborhood::Perturbation;
///
/// let config = GreedyConfig::new(5)
///     .with_max_iterations(2000)
///     .with_batch_size(20)
///     .with_perturbation(Perturbation::Uniform)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Problem dimensionality `n`.
    pub dimension: usize,

    /// Number of batch-select-accept iterations. The run always uses the
    /// full budget.
    pub max_iterations: usize,

    /// Candidates generated per iteration.
    pub batch_size: usize,

    /// Perturbation scale, held fixed for the whole run.
    pub spread: f64,

    /// Perturbation law.
    pub perturbation: Perturbation,

    /// Initialization interval.
    pub domain: Domain,

    /// Random seed (None for a fresh entropy seed).
    pub seed: Option<u64>,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            dimension: 3,
            max_iterations: 1000,
            batch_size: 10,
            spread: 1.0,
            perturbation: Perturbation::default(),
            domain: Domain::default(),
            seed: None,
        }
    }
}

impl GreedyConfig {
    /// Default configuration for the given dimensionality.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    pub fn with_perturbation(mut self, perturbation: Perturbation) -> Self {
        self.perturbation = perturbation;
        self
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.dimension == 0 {
            return Err("dimension must be at least 1".into());
        }
        if self.batch_size == 0 {
            return Err("batch_size must be at least 1".into());
        }
        if !self.spread.is_finite() || self.spread < 0.0 {
            return Err(format!("spread must be finite and >= 0, got {}", self.spread));
        }
        self.domain.validate().map_err(|e| e.to_string())
    }
}
