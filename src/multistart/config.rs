//! Multi-start greedy configuration.

use crate::domain::Domain;
use crate::neighborhood::Perturbation;

/// Configuration for [`MultiStartRunner`](super::MultiStartRunner).
///
/// # Examples
///
/// ```
/// use u_greedy::multistart::MultiStartConfig;
///
/// let config = MultiStartConfig::new(3).with_max_starts(50).with_seed(1);
/// assert_eq!(config.max_starts, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiStartConfig {
    /// Problem dimensionality `n`.
    pub dimension: usize,

    /// Number of independent restarts.
    pub max_starts: usize,

    /// Candidates generated per descent step.
    pub batch_size: usize,

    /// Perturbation scale, fixed for every restart.
    pub spread: f64,

    /// Perturbation law.
    pub perturbation: Perturbation,

    /// Initialization interval for each restart.
    pub domain: Domain,

    /// Random seed (None for a fresh entropy seed).
    pub seed: Option<u64>,
}

impl Default for MultiStartConfig {
    fn default() -> Self {
        Self {
            dimension: 3,
            max_starts: 1000,
            batch_size: 10,
            spread: 1.0,
            perturbation: Perturbation::default(),
            domain: Domain::default(),
            seed: None,
        }
    }
}

impl MultiStartConfig {
    /// Default configuration for the given dimensionality.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    pub fn with_max_starts(mut self, n: usize) -> Self {
        self.max_starts = n;
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
        if self.max_starts == 0 {
            return Err("max_starts must be at least 1".into());
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
