//! Random source construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator for one run.
///
/// A fixed seed gives a reproducible stream; `None` seeds from the
/// process entropy source.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
