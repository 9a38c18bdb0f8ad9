//! Structure-of-Arrays robot storage.
//!
//! Every `Vec` field has exactly `len()` elements; a `RobotId` is the index
//! into all of them:
//!
//! ```ignore
//! let pos = roster.positions[robot.index()];  // O(1), cache-friendly
//! ```
//!
//! Robots are appended by [`Roster::spawn`] and never removed, so IDs stay
//! stable for the life of a match.  Decision engines receive the roster
//! read-only; only the host mutates it between decisions.

use arena_core::{OwnerId, Position, RobotId};

/// SoA storage for all robots in a match, across every competitor.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    /// Competitor label per robot.
    pub owners: Vec<OwnerId>,
    /// Current cell per robot.
    pub positions: Vec<Position>,
    /// Current energy per robot.  Non-negative; the host saturates at zero.
    pub energies: Vec<u32>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a robot and return its stable ID.
    pub fn spawn(&mut self, owner: OwnerId, position: Position, energy: u32) -> RobotId {
        let id = RobotId(self.owners.len() as u32);
        self.owners.push(owner);
        self.positions.push(position);
        self.energies.push(energy);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Iterator over all `RobotId`s in ascending index order.
    pub fn robot_ids(&self) -> impl Iterator<Item = RobotId> + '_ {
        (0..self.owners.len() as u32).map(RobotId)
    }

    // ── Per-robot accessors ───────────────────────────────────────────────

    #[inline]
    pub fn owner(&self, robot: RobotId) -> OwnerId {
        self.owners[robot.index()]
    }

    #[inline]
    pub fn position(&self, robot: RobotId) -> Position {
        self.positions[robot.index()]
    }

    #[inline]
    pub fn energy(&self, robot: RobotId) -> u32 {
        self.energies[robot.index()]
    }

    #[inline]
    pub fn set_position(&mut self, robot: RobotId, position: Position) {
        self.positions[robot.index()] = position;
    }

    /// Add `amount` to a robot's energy.
    #[inline]
    pub fn credit(&mut self, robot: RobotId, amount: u32) {
        self.energies[robot.index()] += amount;
    }

    /// Subtract `amount` from a robot's energy, saturating at zero.
    #[inline]
    pub fn debit(&mut self, robot: RobotId, amount: u32) {
        let e = &mut self.energies[robot.index()];
        *e = e.saturating_sub(amount);
    }

    // ── Occupancy queries ─────────────────────────────────────────────────

    /// The first robot (in ascending ID order) standing on `position`.
    ///
    /// The scan order is load-bearing: occupancy classification keys off
    /// whichever robot is found first, matching roster enumeration order.
    pub fn robot_at(&self, position: Position) -> Option<RobotId> {
        self.positions
            .iter()
            .position(|&p| p == position)
            .map(|i| RobotId(i as u32))
    }

    /// How many live robots `owner` fields.
    pub fn owned_count(&self, owner: OwnerId) -> usize {
        self.owners.iter().filter(|&&o| o == owner).count()
    }
}
