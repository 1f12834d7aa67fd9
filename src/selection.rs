//! Best-of-batch selection.

use crate::error::{GreedyError, Result};
use crate::solution::Solution;

/// Evaluates every candidate and returns the one with the lowest cost.
///
/// Ties go to the candidate that appears first. The batch is consumed and
/// the winner is moved out of it, so the returned solution owns its
/// vector outright.
///
/// # Errors
///
/// [`GreedyError::EmptyBatch`] if `batch` has no candidates.
///
/// # Examples
///
/// ```
/// use u_greedy::selection::select_best;
///
/// let best = select_best(vec![vec![1.0], vec![0.0], vec![-1.0]]).unwrap();
/// assert_eq!(best.point(), &[0.0]);
/// ```
pub fn select_best(batch: Vec<Vec<f64>>) -> Result<Solution> {
    let mut scored = batch.into_iter().map(Solution::evaluate);
    let first = scored.next().ok_or(GreedyError::EmptyBatch)?;

    Ok(scored.fold(first, |best, candidate| {
        if candidate.improves_on(&best) {
            candidate
        } else {
            best
        }
    }))
}
