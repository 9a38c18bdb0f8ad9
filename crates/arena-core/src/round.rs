//! Match time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Round` counter.  The host announces
//! each round boundary exactly once, before any per-robot decision in that
//! round; everything that needs "what round is it" either receives that
//! signal or counts it locally.  Using an integer round as the canonical time
//! unit keeps all gating arithmetic exact and comparisons O(1).

use std::fmt;

// ── Round ─────────────────────────────────────────────────────────────────────

/// An absolute round counter.
///
/// Stored as `u32`: tournament matches run a few hundred rounds, so the
/// headroom is effectively unlimited.  The counter is never reset for the
/// life of an engine instance.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u32);

impl Round {
    pub const ZERO: Round = Round(0);

    /// The round after `self`.
    #[inline]
    pub fn next(self) -> Round {
        Round(self.0 + 1)
    }

    /// Rounds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Round) -> u32 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u32> for Round {
    type Output = Round;
    #[inline]
    fn add(self, rhs: u32) -> Round {
        Round(self.0 + rhs)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

// ── MatchConfig ───────────────────────────────────────────────────────────────

/// Top-level match configuration.
///
/// Owned by the host; the decision engines never read it.  All energy rules
/// the host applies (harvest yield, spawn cost, combat levy) live here so a
/// match is fully described by one value plus the map seed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Total rounds to play.
    pub rounds_total: u32,

    /// Master RNG seed for map generation and fleet placement.  The same
    /// seed always produces an identical match.
    pub seed: u64,

    /// Energy credited per successful harvest action.
    pub harvest_yield: u32,

    /// Energy the parent pays to clone itself.
    pub spawn_cost: u32,

    /// Energy a freshly cloned robot starts with.
    pub spawn_energy: u32,

    /// Flat energy surcharge the attacker pays on top of the move cost.
    pub attack_overhead: u32,

    /// Combat levy divisor: the attacker takes `victim_energy / divisor`
    /// from the victim.  A divisor of 20 is a 5 % levy, floored.
    pub attack_levy_divisor: u32,

    /// Emit a roster snapshot every N rounds.  0 disables snapshots.
    pub report_interval_rounds: u32,
}

impl MatchConfig {
    /// The round at which the match ends (exclusive upper bound).
    #[inline]
    pub fn end_round(&self) -> Round {
        Round(self.rounds_total)
    }
}
