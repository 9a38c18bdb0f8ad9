//! Deterministic match-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! All randomness in a match (map generation, fleet placement) flows from one
//! `MatchRng` seeded by the configured master seed.  Decision engines take no
//! RNG at all — their choices are pure functions of the round state — so a
//! seed fully determines a match.  Derived generators come from
//! [`MatchRng::child`], which mixes the parent stream with a caller-supplied
//! offset so sub-systems never share or reorder each other's draws.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Match-level deterministic RNG.
///
/// Used only in single-threaded setup contexts (there is no randomness inside
/// the round loop).  If two sub-systems need independent streams, derive one
/// `child` per sub-system instead of sharing.
pub struct MatchRng(SmallRng);

impl MatchRng {
    pub fn new(seed: u64) -> Self {
        MatchRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `MatchRng` with a different seed offset — useful for
    /// giving map generation and fleet placement independent streams.
    pub fn child(&mut self, offset: u64) -> MatchRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        MatchRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
