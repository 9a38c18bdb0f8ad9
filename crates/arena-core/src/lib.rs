//! `arena-core` — foundational types for the `rust_arena` contest framework.
//!
//! This crate is a dependency of every other `arena-*` crate.  It intentionally
//! has no `arena-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `RobotId`, `StationId`, `OwnerId`                 |
//! | [`grid`]   | `Position`, grid distance, unit stepping          |
//! | [`round`]  | `Round` counter, `MatchConfig`                    |
//! | [`rng`]    | `MatchRng` (seeded, deterministic)                |
//! | [`error`]  | `ArenaError`, `ArenaResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod round;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ArenaError, ArenaResult};
pub use grid::Position;
pub use ids::{OwnerId, RobotId, StationId};
pub use rng::MatchRng;
pub use round::{MatchConfig, Round};
