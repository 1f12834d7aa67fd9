//! A point in the search space paired with its objective value.

use crate::objective::rastrigin;

/// A candidate vector and its Rastrigin cost.
///
/// The cost is computed on construction and the point cannot be mutated
/// afterwards, so `cost() == rastrigin(point())` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    point: Vec<f64>,
    cost: f64,
}

impl Solution {
    /// Evaluates `point` and takes ownership of it.
    pub fn evaluate(point: Vec<f64>) -> Self {
        let cost = rastrigin(&point);
        Self { point, cost }
    }

    /// The solution vector.
    pub fn point(&self) -> &[f64] {
        &self.point
    }

    /// Objective value of [`point`](Self::point).
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of components.
    pub fn dimension(&self) -> usize {
        self.point.len()
    }

    /// Returns `true` if `self` is strictly better than `other`.
    ///
    /// Equal costs never count as an improvement, and neither does a NaN
    /// cost on either side.
    pub fn improves_on(&self, other: &Solution) -> bool {
        self.cost < other.cost
    }

    /// Consumes the solution, returning the vector.
    pub fn into_point(self) -> Vec<f64> {
        self.point
    }
}
