//! The Rastrigin benchmark function.
//!
//! `f(x) = 10n + Σ (x_i² − 10·cos(2π·x_i))`
//!
//! Highly multimodal, with a regular lattice of local minima and a single
//! global minimum `f(0) = 0`. Every term `x_i² − 10·cos(2π·x_i) + 10` is
//! non-negative, so `f(x) ≥ 0` everywhere.
//!
//! # Reference
//!
//! Rastrigin, L. A. (1974). *Systems of Extremal Control*. Mir, Moscow.

use std::f64::consts::PI;

/// Evaluates the Rastrigin function.
///
/// An empty slice evaluates to `0.0`. Non-finite components propagate
/// into the result unchanged.
///
/// # Examples
///
/// ```
/// use u_greedy::objective::rastrigin;
///
/// assert_eq!(rastrigin(&[0.0, 0.0, 0.0]), 0.0);
/// assert!(rastrigin(&[1.0, -2.5]) > 0.0);
/// ```
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    x.iter()
        .fold(10.0 * n, |sum, &xi| sum + xi * xi - 10.0 * (2.0 * PI * xi).cos())
}
