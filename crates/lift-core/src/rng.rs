//! Seeded randomness for event sources.
//!
//! Dispatch never draws random numbers.  Only synthetic traffic does, and it
//! must replay exactly for a given seed.

use rand::rngs::SmallRng;
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::{Rng, SeedableRng};

/// Small, fast, reproducible RNG.  Not for anything security-related.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.0.gen_range(range)
    }

    /// `true` with probability `p`.  Out-of-range rates are clamped, so a
    /// misconfigured generator degrades to "never" or "always".  NaN is
    /// "never".
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
