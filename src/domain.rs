//! Sampling interval for initial solutions.
//!
//! Every algorithm starts from a point drawn uniformly from a box
//! `[lo, hi]^n`. The box is only used for initialization; the search
//! itself is unbounded, and the optimum need not lie inside it.

use rand::Rng;

use crate::error::{GreedyError, Result};

/// Lower bound of the offset interval, the edge of the usual Rastrigin box.
pub const OFFSET_LO: f64 = 5.12;

/// Upper bound of the offset interval.
pub const OFFSET_HI: f64 = 15.36;

/// A closed interval used as the per-component initialization range.
///
/// # Examples
///
/// ```
/// use u_greedy::domain::Domain;
///
/// let centered = Domain::default();
/// assert_eq!((centered.lo, centered.hi), (-5.0, 5.0));
///
/// let offset = Domain::offset();
/// assert!(!offset.contains(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    /// Lower bound (inclusive).
    pub lo: f64,
    /// Upper bound (inclusive).
    pub hi: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self::centered(5.0)
    }
}

impl Domain {
    /// Creates `[lo, hi]` without validation.
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// `[-half_width, half_width]`, which contains the global optimum.
    pub fn centered(half_width: f64) -> Self {
        Self {
            lo: -half_width,
            hi: half_width,
        }
    }

    /// `[5.12, 15.36]`, which excludes the global optimum.
    pub fn offset() -> Self {
        Self {
            lo: OFFSET_LO,
            hi: OFFSET_HI,
        }
    }

    /// Returns `true` if `x` lies in the interval.
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Checks that the bounds are ordered and the width is finite.
    pub fn validate(&self) -> Result<()> {
        if !self.lo.is_finite()
            || !self.hi.is_finite()
            || self.lo > self.hi
            || !(self.hi - self.lo).is_finite()
        {
            return Err(GreedyError::InvalidDomain {
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }

    /// Draws a vector of length `dimension` with each component uniform
    /// in `[lo, hi]`.
    pub fn sample<R: Rng>(&self, dimension: usize, rng: &mut R) -> Result<Vec<f64>> {
        if dimension == 0 {
            return Err(GreedyError::ZeroDimension);
        }
        self.validate()?;

        Ok((0..dimension)
            .map(|_| rng.random_range(self.lo..=self.hi))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for domain in [Domain::default(), Domain::offset()] {
            let x = domain.sample(50, &mut rng).unwrap();
            assert_eq!(x.len(), 50);
            assert!(x.iter().all(|&xi| domain.contains(xi)), "{x:?}");
        }
    }

    #[test]
    fn test_offset_excludes_optimum() {
        let mut rng = StdRng::seed_from_u64(7);
        let x = Domain::offset().sample(20, &mut rng).unwrap();
        assert!(x.iter().all(|&xi| xi >= OFFSET_LO));
    }

    #[test]
    fn test_degenerate_interval() {
        let mut rng = StdRng::seed_from_u64(42);
        let x = Domain::new(2.0, 2.0).sample(3, &mut rng).unwrap();
        assert_eq!(x, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            Domain::default().sample(0, &mut rng),
            Err(GreedyError::ZeroDimension)
        );
    }

    #[test]
    fn test_reversed_interval_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = Domain::new(1.0, -1.0).sample(2, &mut rng).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_overflowing_width_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let domain = Domain::new(-f64::MAX, f64::MAX);
        assert!(domain.validate().is_err());
        assert_eq!(
            domain.sample(2, &mut rng),
            Err(GreedyError::InvalidDomain {
                lo: -f64::MAX,
                hi: f64::MAX
            })
        );
        assert!(Domain::new(0.0, f64::MAX).validate().is_ok());
    }

    #[test]
    fn test_non_finite_interval_rejected() {
        assert!(Domain::new(f64::NEG_INFINITY, 0.0).validate().is_err());
        assert!(Domain::new(0.0, f64::NAN).validate().is_err());
    }
}
