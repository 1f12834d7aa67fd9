//! Trial harness configuration.

use super::record::Algorithm;
use crate::domain::Domain;
use crate::greedy::GreedyConfig;
use crate::multistart::MultiStartConfig;
use crate::neighborhood::Perturbation;
use crate::vng::{VngConfig, VngTermination};

/// Parameters for a full comparison experiment.
///
/// One value drives all three algorithms; the per-algorithm run
/// configurations are derived from it for each dimensionality.
///
/// # Examples
///
/// ```
/// use u_greedy::trials::TrialConfig;
///
/// let config = TrialConfig::default()
///     .with_dimensions(vec![2, 4, 8])
///     .with_number_of_tests(3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialConfig {
    /// Dimensionalities to sweep, in order.
    pub dimensions: Vec<usize>,

    /// Independent runs per (dimension, algorithm) pair.
    pub number_of_tests: usize,

    /// Iteration budget for basic greedy and variable-neighborhood greedy.
    pub max_iterations: usize,

    /// Restart budget for multi-start greedy.
    pub max_starts: usize,

    /// Batch size for basic and multi-start greedy.
    pub batch_size: usize,

    /// Fixed spread for basic and multi-start greedy.
    pub spread: f64,

    /// Spread growth per failure for variable-neighborhood greedy.
    pub change_rate: f64,

    /// Spread cap for variable-neighborhood greedy.
    pub max_spread: f64,

    /// Perturbation law shared by all algorithms.
    pub perturbation: Perturbation,

    /// Initialization interval shared by all algorithms.
    pub domain: Domain,

    /// Stopping rule for variable-neighborhood greedy.
    pub vng_termination: VngTermination,

    /// Algorithms to include. They always run in [`Algorithm::ALL`] order.
    pub algorithms: Vec<Algorithm>,

    /// Seed for the whole experiment (None for a fresh entropy seed).
    pub seed: Option<u64>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            dimensions: vec![3, 5],
            number_of_tests: 10,
            max_iterations: 1000,
            max_starts: 1000,
            batch_size: 10,
            spread: 1.0,
            change_rate: 0.1,
            max_spread: 1.0,
            perturbation: Perturbation::default(),
            domain: Domain::default(),
            vng_termination: VngTermination::default(),
            algorithms: Algorithm::ALL.to_vec(),
            seed: None,
        }
    }
}

impl TrialConfig {
    pub fn with_dimensions(mut self, dimensions: Vec<usize>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_number_of_tests(mut self, n: usize) -> Self {
        self.number_of_tests = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
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

    pub fn with_vng_termination(mut self, termination: VngTermination) -> Self {
        self.vng_termination = termination;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Basic greedy configuration for one dimensionality.
    pub fn greedy(&self, dimension: usize) -> GreedyConfig {
        GreedyConfig {
            dimension,
            max_iterations: self.max_iterations,
            batch_size: self.batch_size,
            spread: self.spread,
            perturbation: self.perturbation,
            domain: self.domain,
            seed: None,
        }
    }

    /// Multi-start greedy configuration for one dimensionality.
    pub fn multi_start(&self, dimension: usize) -> MultiStartConfig {
        MultiStartConfig {
            dimension,
            max_starts: self.max_starts,
            batch_size: self.batch_size,
            spread: self.spread,
            perturbation: self.perturbation,
            domain: self.domain,
            seed: None,
        }
    }

    /// Variable-neighborhood greedy configuration for one dimensionality.
    pub fn vng(&self, dimension: usize) -> VngConfig {
        VngConfig {
            dimension,
            max_iterations: self.max_iterations,
            change_rate: self.change_rate,
            max_spread: self.max_spread,
            perturbation: self.perturbation,
            domain: self.domain,
            termination: self.vng_termination,
            seed: None,
        }
    }

    /// Validates the experiment and every derived run configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.number_of_tests == 0 {
            return Err("number_of_tests must be at least 1".into());
        }
        if self.dimensions.is_empty() {
            return Err("at least one dimension is required".into());
        }
        if self.algorithms.is_empty() {
            return Err("at least one algorithm is required".into());
        }
        for &dimension in &self.dimensions {
            for algorithm in &self.algorithms {
                let checked = match algorithm {
                    Algorithm::BasicGreedy => self.greedy(dimension).validate(),
                    Algorithm::MultiStartGreedy => self.multi_start(dimension).validate(),
                    Algorithm::VariableNeighborhoodGreedy => self.vng(dimension).validate(),
                };
                checked.map_err(|e| format!("{algorithm} (n = {dimension}): {e}"))?;
            }
        }
        Ok(())
    }
}
