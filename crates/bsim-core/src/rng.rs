//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! A run owns one root `SimRng` seeded from `SimConfig::seed`.  Each consumer
//! (the broadcast scheduler, the scan-decision driver) takes its own child
//! stream:
//!
//!   child_seed = parent.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets across the seed space.  Consumers never
//! share RNG state, so changing how often one of them draws does not shift
//! the other's sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Used only from the single simulation thread.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    /// For `f64` this is uniform in `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform in `[0, upper)`; returns `0.0` when `upper` is not positive.
    #[inline]
    pub fn uniform_below(&mut self, upper: f64) -> f64 {
        if upper > 0.0 {
            self.gen_range(0.0..upper)
        } else {
            0.0
        }
    }

    /// Broadcast timing jitter, uniform in `[0, JITTER_MAX)`.
    #[inline]
    pub fn jitter(&mut self) -> f64 {
        self.uniform_below(crate::JITTER_MAX)
    }
}
