//! Seedable random source.
//!
//! Every stochastic operation in the crate takes an explicit `&mut R: Rng`.
//! [`create_rng`] is the one place a concrete generator is chosen.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from the operating system.
pub fn entropy_rng() -> StdRng {
    create_rng(rand::random())
}
