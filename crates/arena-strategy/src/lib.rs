//! `arena-strategy` — per-turn decision logic for the `rust_arena` framework.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                         |
//! |------------------|------------------------------------------------------------------|
//! | [`action`]       | `Action` enum (`Spawn`, `Harvest`, `Move`, `Idle`)               |
//! | [`context`]      | `TurnContext<'a>` — read-only round snapshot shared by all robots |
//! | [`strategy`]     | `Strategy` trait                                                 |
//! | [`idle`]         | `IdleStrategy` — placeholder that never acts                     |
//! | [`reservations`] | `ReservationSet` — per-round station claims                      |
//! | [`target`]       | `Occupancy`, `Target`, station selection scans                   |
//! | [`harvester`]    | `HarvesterStrategy` — the full decision engine                   |
//!
//! # Design notes
//!
//! The host's round loop works as follows:
//!
//! 1. **Round start**: `Strategy::on_round_start` is called exactly once per
//!    strategy, before any decision in that round.  Engines reset their
//!    per-round state here.
//!
//! 2. **Decision phase** (sequential): for every live robot, in ascending
//!    `RobotId` order, the host calls `decide` on the robot's owner's
//!    strategy.  All reads go through `&TurnContext`; the roster and map are
//!    never mutated mid-decision.
//!
//! Strategies take `&mut self` because a decision may commit per-round state
//! (station reservations) that later decisions in the same round must see.
//! The host never interleaves two robots of the same owner concurrently —
//! that sequencing, not a lock, is what keeps one fleet off a single station.

pub mod action;
pub mod context;
pub mod harvester;
pub mod idle;
pub mod reservations;
pub mod strategy;
pub mod target;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use context::TurnContext;
pub use harvester::HarvesterStrategy;
pub use idle::IdleStrategy;
pub use reservations::ReservationSet;
pub use strategy::Strategy;
pub use target::{Occupancy, Target, first_fallback, nearest_unclaimed, occupancy_at};
