//! Variable-neighborhood greedy search.
//!
//! A single-candidate hill climber whose neighborhood radius grows with
//! each consecutive failure and collapses back to the smallest radius on
//! every success. Small radii intensify the search around a fresh
//! improvement; growing radii diversify once the current basin seems
//! exhausted.
//!
//! The iteration budget can bound either consecutive failures or total
//! samples; see [`VngTermination`].
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.

mod config;
mod runner;

pub use config::{VngConfig, VngTermination};
pub use runner::{VngResult, VngRunner};
