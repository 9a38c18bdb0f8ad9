//! `arena-world` — map registry and robot roster for the `rust_arena` framework.
//!
//! # Crate layout
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`map`]    | `Station`, `GameMap` (bounds + registry + generator)   |
//! | [`roster`] | `Roster` — SoA robot storage and occupancy queries     |
//! | [`error`]  | `WorldError`, `WorldResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod error;
pub mod map;
pub mod roster;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WorldError, WorldResult};
pub use map::{GameMap, Station};
pub use roster::Roster;
