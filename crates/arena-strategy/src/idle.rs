//! A do-nothing strategy — its robots never act.

use arena_core::RobotId;

use crate::{Action, Strategy, TurnContext};

/// A [`Strategy`] that always returns [`Action::Idle`].
///
/// Useful as a placeholder in tests or for "passive" fleets that simply
/// occupy space without acting.
pub struct IdleStrategy;

impl Strategy for IdleStrategy {
    fn decide(&mut self, _robot: RobotId, _ctx: &TurnContext<'_>) -> Action {
        Action::Idle
    }
}
