//! The `Strategy` trait — the main extension point for competitor code.

use arena_core::RobotId;

use crate::{Action, TurnContext};

/// Pluggable per-competitor decision logic.
///
/// Implement this trait to define how one fleet's robots act each round.
/// The host constructs one instance per competitor and calls it only for
/// that competitor's robots.
///
/// # Contract
///
/// - [`on_round_start`][Self::on_round_start] is invoked exactly once per
///   round, before any `decide` call in that round.  The default is a no-op
///   for stateless strategies.
/// - [`decide`][Self::decide] is invoked once per live robot per round, in
///   ascending `RobotId` order, and must return exactly one [`Action`]
///   (`Action::Idle` for "nothing to do" — never panic, never error).
///
/// # Threading
///
/// Decisions for one owner's robots are strictly sequential within a round —
/// that ordering is the correctness precondition for per-round state such as
/// station reservations, so `decide` takes `&mut self` and the trait requires
/// no `Send`/`Sync`.
///
/// # Example
///
/// ```rust,ignore
/// struct CampFirstStation;
///
/// impl Strategy for CampFirstStation {
///     fn decide(&mut self, robot: RobotId, ctx: &TurnContext<'_>) -> Action {
///         match ctx.map.stations().first() {
///             Some(s) => Action::Move { to: s.position },
///             None => Action::Idle,
///         }
///     }
/// }
/// ```
pub trait Strategy {
    /// Called exactly once at every round boundary, before any decision in
    /// that round.  Reset per-round state here.
    fn on_round_start(&mut self) {}

    /// Choose this robot's one action for the current round.
    fn decide(&mut self, robot: RobotId, ctx: &TurnContext<'_>) -> Action;
}
