//! Run-scoped random source.
//!
//! Every stochastic operator takes `&mut R: Rng`; the engine owns exactly one
//! [`StdRng`] so a seeded run is fully reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from the operating system, or from `seed`
/// when one is given.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => StdRng::from_os_rng(),
    }
}
