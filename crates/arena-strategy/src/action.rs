//! Robot actions — what a decision resolves to each turn.

use arena_core::Position;

/// The single action a robot takes this turn.
///
/// Produced by [`Strategy::decide`][crate::Strategy::decide] and consumed by
/// the host's round loop.  Exactly one action is returned per robot per
/// round; the host only needs to distinguish the kind and read the one
/// optional destination field.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    /// Clone: create a new robot for the same owner.  Placement and energy
    /// cost rules are owned by the host, not the deciding engine.
    Spawn,

    /// Collect energy from the station under the robot.  Only meaningful
    /// while standing exactly on a station cell.
    Harvest,

    /// Relocate to `to`.  Moving onto a cell held by a rival robot
    /// constitutes an attack; the host resolves the combat outcome.
    Move { to: Position },

    /// Explicit no-op: no valid action this turn.  Never an error.
    Idle,
}

impl Action {
    /// The destination of a `Move`, if this is one.
    #[inline]
    pub fn destination(self) -> Option<Position> {
        match self {
            Action::Move { to } => Some(to),
            _ => None,
        }
    }
}
