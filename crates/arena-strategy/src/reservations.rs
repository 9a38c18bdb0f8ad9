//! Per-round station claims shared by one fleet.

use arena_core::Position;
use rustc_hash::FxHashSet;

/// The set of station positions this owner's fleet has already committed to
/// during the current round.
///
/// One instance lives inside each decision engine.  Entries are added only
/// when a robot commits to move to (or attack) a station, and are never
/// removed individually — the set is bulk-cleared at every round boundary.
/// Combined with the host's sequential per-owner decision order, this is
/// what stops two robots of one fleet converging on the same station in a
/// single round.
#[derive(Debug, Default)]
pub struct ReservationSet {
    inner: FxHashSet<Position>,
}

impl ReservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a commitment to `station`.  Claiming the same position twice
    /// is harmless (the set is idempotent), but the selector's filter means
    /// it does not happen in practice.
    #[inline]
    pub fn claim(&mut self, station: Position) {
        self.inner.insert(station);
    }

    /// `true` if some robot of this fleet already committed to `station`
    /// this round.
    #[inline]
    pub fn is_claimed(&self, station: Position) -> bool {
        self.inner.contains(&station)
    }

    /// Bulk-clear all claims.  Called at every round boundary.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
