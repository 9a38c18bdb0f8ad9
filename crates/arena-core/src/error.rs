//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `ArenaError` via `From` impls, or keep them separate and wrap `ArenaError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::{RobotId, StationId};

/// The top-level error type for `arena-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("robot {0} not found")]
    RobotNotFound(RobotId),

    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `arena-*` crates.
pub type ArenaResult<T> = Result<T, ArenaError>;
