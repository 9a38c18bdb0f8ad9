//! `arena-match` — round loop orchestrator for the rust_arena framework.
//!
//! # Round loop
//!
//! ```text
//! for round in 1..=config.rounds_total:
//!   ① Signal   — every strategy gets on_round_start() exactly once,
//!                before any decision in the round.
//!   ② Decide   — for each live robot in ascending RobotId order, call
//!                decide() on its owner's strategy (strictly sequential).
//!   ③ Apply    — the returned action is applied immediately:
//!                  Spawn      → parent pays, child joins next round
//!                  Harvest    → credit yield while on a station
//!                  Move{to}   → pay distance; onto a rival = attack
//!                  Idle       → nothing
//! ```
//!
//! Decisions and application interleave per robot (call-and-return), so each
//! decision sees every earlier robot's action already applied — the same
//! contract the reservation logic in `arena-strategy` depends on.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use arena_match::{MatchBuilder, NoopObserver};
//! use arena_strategy::HarvesterStrategy;
//!
//! let mut runner = MatchBuilder::new(config, map)
//!     .strategy(red, HarvesterStrategy::new())
//!     .robot(red, Position::new(0, 0), 300)
//!     .build()?;
//! runner.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod runner;


pub use builder::MatchBuilder;
pub use error::{MatchError, MatchResult};
pub use observer::{MatchObserver, NoopObserver};
pub use runner::{MatchRunner, OwnerStanding, RoundStats};
