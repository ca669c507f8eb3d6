use thiserror::Error;

use crate::direction::Direction;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid direction code {0}, expected 0..=3")]
    InvalidDirection(u8),

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("move {direction:?} does not change board {board:#018x}")]
    IllegalMove { direction: Direction, board: u64 },
}
