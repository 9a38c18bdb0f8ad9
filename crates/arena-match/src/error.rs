use arena_core::{OwnerId, Position, RobotId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("match configuration error: {0}")]
    Config(String),

    #[error("a strategy for {0} was registered twice")]
    DuplicateStrategy(OwnerId),

    #[error("no strategy registered for {0}")]
    MissingStrategy(OwnerId),

    #[error("robot {robot} starts at {position}, outside the arena")]
    RobotOutOfBounds { robot: RobotId, position: Position },
}

pub type MatchResult<T> = Result<T, MatchError>;
