//! Variable-neighborhood greedy configuration.

use std::fmt;

use crate::domain::Domain;
use crate::neighborhood::Perturbation;

/// How the iteration budget bounds a variable-neighborhood run.
///
/// The two rules give very different run lengths. Under
/// [`Stagnation`](Self::Stagnation) every improvement resets the clock, so
/// a run that keeps improving can go far beyond `max_iterations` total
/// samples. Under [`FixedIterations`](Self::FixedIterations) the run always
/// draws exactly `max_iterations` samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VngTermination {
    /// Stop once the stagnation counter `k` exceeds `max_iterations`,
    /// i.e. after `max_iterations` consecutive non-improving samples.
    #[default]
    Stagnation,

    /// Stop after `max_iterations` samples regardless of `k`.
    FixedIterations,
}

impl fmt::Display for VngTermination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VngTermination::Stagnation => f.write_str("stagnation"),
            VngTermination::FixedIterations => f.write_str("fixed-iterations"),
        }
    }
}

/// Configuration for [`VngRunner`](super::VngRunner).
///
/// The spread at stagnation count `k` is `min(k * change_rate, max_spread)`.
///
/// # Examples
///
/// ```
/// use u_greedy::vng::{VngConfig, VngTermination};
///
/// let config = VngConfig::new(5)
///     .with_change_rate(0.05)
///     .with_termination(VngTermination::FixedIterations);
/// assert!((config.spread_at(4) - 0.2).abs() < 1e-12);
/// assert!((config.spread_at(1000) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VngConfig {
    /// Problem dimensionality `n`.
    pub dimension: usize,

    /// Iteration budget, interpreted according to `termination`.
    pub max_iterations: usize,

    /// Spread added per consecutive failure.
    pub change_rate: f64,

    /// Upper cap on the spread.
    pub max_spread: f64,

    /// Perturbation law.
    pub perturbation: Perturbation,

    /// Initialization interval.
    pub domain: Domain,

    /// Stopping rule.
    pub termination: VngTermination,

    /// Random seed (None for a fresh entropy seed).
    pub seed: Option<u64>,
}

impl Default for VngConfig {
    fn default() -> Self {
        Self {
            dimension: 3,
            max_iterations: 1000,
            change_rate: 0.1,
            max_spread: 1.0,
            perturbation: Perturbation::default(),
            domain: Domain::default(),
            termination: VngTermination::default(),
            seed: None,
        }
    }
}

impl VngConfig {
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

    pub fn with_change_rate(mut self, rate: f64) -> Self {
        self.change_rate = rate;
        self
    }

    pub fn with_max_spread(mut self, spread: f64) -> Self {
        self.max_spread = spread;
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

    pub fn with_termination(mut self, termination: VngTermination) -> Self {
        self.termination = termination;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Spread used when the stagnation counter is `k`.
    pub fn spread_at(&self, k: usize) -> f64 {
        (k as f64 * self.change_rate).min(self.max_spread)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.dimension == 0 {
            return Err("dimension must be at least 1".into());
        }
        if !self.change_rate.is_finite() || self.change_rate <= 0.0 {
            return Err(format!(
                "change_rate must be finite and positive, got {}",
                self.change_rate
            ));
        }
        if !self.max_spread.is_finite() || self.max_spread < self.change_rate {
            return Err(format!(
                "max_spread must be finite and >= change_rate, got {}",
                self.max_spread
            ));
        }
        // Under the stagnation rule the run ends once k > max_iterations,
        // which a counter of type usize can never reach at usize::MAX.
        if self.termination == VngTermination::Stagnation && self.max_iterations == usize::MAX {
            return Err(
                "max_iterations must be below usize::MAX under stagnation termination".into(),
            );
        }
        self.domain.validate().map_err(|e| e.to_string())
    }
}
