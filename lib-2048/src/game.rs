use serde::{Deserialize, Serialize};

use crate::{board::Board, direction::Direction, error::GameError, logic};

/// How a [`Game`] treats a move that would not change the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Fail with [`GameError::IllegalMove`].
    #[default]
    Strict,
    /// Ignore the move.
    Lenient,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Packed starting position, one rank per nibble.
    pub initial_board: u64,
}

/// A single game session over a [`Board`].
///
/// Tracks the points earned by merges. Placing new tiles between moves is up to
/// the caller, through [`Game::place_tile`].
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    mode: GameMode,
    score: u32,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::from_raw(config.initial_board),
            mode: config.mode,
            score: 0,
        }
    }

    /// Plays `direction`. Returns whether the board changed.
    pub fn play(&mut self, direction: Direction) -> Result<bool, GameError> {
        let before = self.board.raw();
        let Some(after) = logic::try_move(before, direction) else {
            return match self.mode {
                GameMode::Strict => Err(GameError::IllegalMove {
                    direction,
                    board: before,
                }),
                GameMode::Lenient => {
                    log::debug!("ignoring move {direction} on {:?}", self.board);
                    Ok(false)
                }
            };
        };

        let points = logic::move_points(before, after.get());
        self.score += points;
        self.board = Board::from_raw(after.get());

        log::trace!("played {direction} for {points} points: {:?}", self.board);

        Ok(true)
    }

    /// Sets an empty cell. Returns false if `index` is already occupied.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Board::with_tile`].
    pub fn place_tile(&mut self, index: usize, rank: u8) -> bool {
        if self.board.tile_rank(index) != 0 {
            return false;
        }

        self.board = self.board.with_tile(index, rank);
        true
    }

    pub fn possible_moves(&self) -> Vec<Direction> {
        self.board.possible_moves().collect()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Points earned by merges so far.
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(mode: GameMode, initial_board: u64) -> Game {
        Game::new(&GameConfig {
            mode,
            initial_board,
        })
    }

    #[test]
    fn strict_game_rejects_no_op_move() {
        let mut game = game(GameMode::Strict, 0x0011);

        assert_eq!(
            game.play(Direction::Up),
            Err(GameError::IllegalMove {
                direction: Direction::Up,
                board: 0x0011,
            })
        );
        assert_eq!(game.board().raw(), 0x0011);
    }

    #[test]
    fn lenient_game_ignores_no_op_move() {
        let mut game = game(GameMode::Lenient, 0x0011);

        assert_eq!(game.play(Direction::Up), Ok(false));
        assert_eq!(game.board().raw(), 0x0011);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn accumulates_points() {
        let mut game = game(GameMode::Strict, 0x1111);

        assert_eq!(game.play(Direction::Left), Ok(true));
        assert_eq!(game.board().raw(), 0x0022);
        assert_eq!(game.score(), 8);

        assert_eq!(game.play(Direction::Right), Ok(true));
        assert_eq!(game.board().raw(), 0x3000);
        assert_eq!(game.score(), 16);
    }

    #[test]
    fn place_tile_only_fills_empty_cells() {
        let mut game = game(GameMode::Strict, 0x0001);

        assert!(!game.place_tile(0, 2));
        assert!(game.place_tile(1, 1));
        assert_eq!(game.board().raw(), 0x0011);
        assert_eq!(
            game.possible_moves(),
            [Direction::Down, Direction::Right, Direction::Left]
        );
    }

    #[test]
    fn empty_game_is_over() {
        let game = Game::new(&GameConfig::default());

        assert!(game.is_over());
        assert_eq!(game.mode(), GameMode::Strict);
    }
}
