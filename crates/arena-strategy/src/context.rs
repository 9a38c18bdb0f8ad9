//! Read-only round state passed to every decision.

use arena_world::{GameMap, Roster};

/// A read-only snapshot of the match state passed to every
/// [`Strategy`][crate::Strategy] call.
///
/// Built by the host once per decision and shared immutably; the strategy
/// never creates, deletes, or mutates robots through it.
///
/// # Lifetimes
///
/// All borrows live for the duration of one decision.  The host never allows
/// mutable access to the roster or map while a `TurnContext` is live.
pub struct TurnContext<'a> {
    /// The arena: bounds and the station registry, in enumeration order.
    pub map: &'a GameMap,

    /// Every live robot across all competitors.
    pub roster: &'a Roster,
}

impl<'a> TurnContext<'a> {
    /// Build a context for one decision.
    #[inline]
    pub fn new(map: &'a GameMap, roster: &'a Roster) -> Self {
        Self { map, roster }
    }
}
