//! World-construction error type.

use thiserror::Error;

use arena_core::Position;

/// Errors produced while building a map or placing fleets.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("map dimensions {width}x{height} enclose no cells")]
    EmptyMap { width: i32, height: i32 },

    #[error("station at {position} is outside the {width}x{height} arena")]
    StationOutOfBounds {
        position: Position,
        width: i32,
        height: i32,
    },

    #[error("duplicate station at {0}")]
    DuplicateStation(Position),

    #[error("{requested} stations requested but the map holds at most {capacity}")]
    TooManyStations { requested: usize, capacity: usize },
}

pub type WorldResult<T> = Result<T, WorldError>;
