//! Candidate generation around a reference point.
//!
//! A batch is built by perturbing every component of the reference vector
//! independently. The perturbation law is a [`Perturbation`] variant and
//! its scale is a single `spread` value; both are chosen by the caller so
//! any algorithm can run with any law.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;
use std::fmt;

use crate::error::{GreedyError, Result};

/// Distribution of the per-component step.
///
/// # Examples
///
/// ```
/// use u_greedy::neighborhood::Perturbation;
///
/// assert_eq!(Perturbation::default(), Perturbation::Gaussian);
/// assert_eq!(Perturbation::Cauchy.to_string(), "cauchy");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Perturbation {
    /// `Normal(0, spread)`: `spread` is the standard deviation.
    #[default]
    Gaussian,

    /// `Uniform(-spread, +spread)`: `spread` is the step half-width.
    Uniform,

    /// `spread · tan(π·(U − 0.5))` with `U ~ Uniform(0, 1)`.
    ///
    /// Heavy-tailed: no mean or variance, with occasional very long
    /// jumps that can leave a deep basin.
    Cauchy,
}

impl Perturbation {
    /// All perturbation laws.
    pub const ALL: [Perturbation; 3] = [
        Perturbation::Gaussian,
        Perturbation::Uniform,
        Perturbation::Cauchy,
    ];

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Perturbation::Gaussian => "gaussian",
            Perturbation::Uniform => "uniform",
            Perturbation::Cauchy => "cauchy",
        }
    }
}

impl fmt::Display for Perturbation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A perturbation law bound to a concrete spread.
enum Step {
    Gaussian(Normal<f64>),
    Uniform(f64),
    Cauchy(f64),
}

impl Step {
    fn new(perturbation: Perturbation, spread: f64) -> Result<Self> {
        if !spread.is_finite() || spread < 0.0 {
            return Err(GreedyError::InvalidSpread { spread });
        }
        Ok(match perturbation {
            Perturbation::Gaussian => Step::Gaussian(
                Normal::new(0.0, spread).map_err(|_| GreedyError::InvalidSpread { spread })?,
            ),
            Perturbation::Uniform => {
                // The sampled range is 2·spread wide and must stay finite.
                if !(2.0 * spread).is_finite() {
                    return Err(GreedyError::InvalidSpread { spread });
                }
                Step::Uniform(spread)
            }
            Perturbation::Cauchy => Step::Cauchy(spread),
        })
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            Step::Gaussian(ref normal) => normal.sample(rng),
            Step::Uniform(half_width) => rng.random_range(-half_width..=half_width),
            Step::Cauchy(scale) => {
                let u: f64 = rng.random();
                scale * (PI * (u - 0.5)).tan()
            }
        }
    }
}

/// Generates `count` perturbed copies of `reference`.
///
/// Each component of each candidate is `reference[j] + step`, with every
/// step drawn independently. The reference itself is never modified and
/// no candidate shares storage with it.
///
/// # Errors
///
/// - [`GreedyError::ZeroDimension`] if `reference` is empty
/// - [`GreedyError::ZeroBatchSize`] if `count == 0`
/// - [`GreedyError::InvalidSpread`] if `spread` is negative or not finite,
///   or (for [`Perturbation::Uniform`]) so large that `2 * spread` overflows
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_greedy::neighborhood::{sample_batch, Perturbation};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let batch = sample_batch(&[0.0, 1.0], 4, Perturbation::Uniform, 0.5, &mut rng).unwrap();
/// assert_eq!(batch.len(), 4);
/// assert!(batch.iter().all(|c| (c[1] - 1.0).abs() <= 0.5));
/// ```
pub fn sample_batch<R: Rng>(
    reference: &[f64],
    count: usize,
    perturbation: Perturbation,
    spread: f64,
    rng: &mut R,
) -> Result<Vec<Vec<f64>>> {
    if reference.is_empty() {
        return Err(GreedyError::ZeroDimension);
    }
    if count == 0 {
        return Err(GreedyError::ZeroBatchSize);
    }
    let step = Step::new(perturbation, spread)?;

    Ok((0..count)
        .map(|_| reference.iter().map(|&x| x + step.draw(rng)).collect())
        .collect())
}
