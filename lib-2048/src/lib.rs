pub use core_2048::*;

pub mod board;
pub mod direction;
pub mod error;
pub mod game;
pub mod logic;
pub mod tables;

pub use board::Board;
pub use direction::Direction;
pub use error::{EngineError, GameError};
pub use game::{Game, GameConfig, GameMode};
pub use logic::{apply_move, apply_move_code, board_score, row_score};
