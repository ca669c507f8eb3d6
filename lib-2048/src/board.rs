use std::fmt;

use core_2048::{rank_value, MAX_RANK};

use crate::{direction::Direction, logic};

/// A 4x4 board packed into a `u64`, one rank per nibble.
///
/// Cell `i` is at row `i / 4`, column `i % 4`. Moving mutates the stored value;
/// use [`Board::shifted`] for a copy instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board(u64);

impl Board {
    pub const EMPTY: Board = Board(0);

    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Builds a board from 16 ranks in row-major order.
    ///
    /// Ranks above [`MAX_RANK`] are clamped so they cannot spill into the
    /// neighbouring cell.
    pub fn from_ranks(ranks: [u8; 16]) -> Self {
        let raw = ranks
            .iter()
            .enumerate()
            .fold(0, |raw, (i, &rank)| raw | (u64::from(rank.min(MAX_RANK)) << (i * 4)));

        Self(raw)
    }

    /// Returns a copy with cell `index` set to `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16` or `rank > MAX_RANK`.
    pub fn with_tile(self, index: usize, rank: u8) -> Self {
        assert!(index < 16, "cell index {index} out of range");
        assert!(rank <= MAX_RANK, "rank {rank} does not fit in a nibble");

        let shift = index * 4;
        Self((self.0 & !(0xf_u64 << shift)) | (u64::from(rank) << shift))
    }

    /// Moves toward `direction` in place. Returns whether anything moved.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let new_board = logic::apply_move(self.0, direction);
        let moved = new_board != self.0;

        self.0 = new_board;

        moved
    }

    #[inline]
    pub fn shifted(self, direction: Direction) -> Self {
        Self(logic::apply_move(self.0, direction))
    }

    pub fn possible_moves(self) -> impl Iterator<Item = Direction> {
        logic::legal_moves(self.0)
    }

    #[inline]
    pub fn is_game_over(self) -> bool {
        logic::is_game_over(self.0)
    }

    #[inline]
    pub fn score(self) -> u32 {
        logic::board_score(self.0)
    }

    #[inline]
    pub fn tile_rank(self, index: usize) -> u8 {
        core_2048::tile_rank(self.0, index as u32)
    }

    /// Tile value at `index`: 0 when empty, otherwise `2^rank`.
    #[inline]
    pub fn tile_value(self, index: usize) -> u32 {
        rank_value(self.tile_rank(index))
    }

    /// Ranks in row-major order.
    pub fn tiles(self) -> impl Iterator<Item = u8> {
        (0..16).map(move |i| core_2048::tile_rank(self.0, i))
    }

    pub fn rows(self) -> [[u8; 4]; 4] {
        [0, 1, 2, 3].map(|r| [0, 1, 2, 3].map(|c| self.tile_rank(r * 4 + c)))
    }

    #[inline]
    pub fn count_empty(self) -> u32 {
        core_2048::count_empty_cells(self.0)
    }

    #[inline]
    pub fn count_tiles(self) -> u32 {
        core_2048::count_tiles(self.0)
    }

    pub fn max_rank(self) -> u8 {
        self.tiles().max().unwrap_or(0)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:#018x})", self.0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().into_iter().enumerate() {
            if r != 0 {
                writeln!(f, "-------+-------+-------+-------")?;
            }

            for (c, &rank) in row.iter().enumerate() {
                if c != 0 {
                    f.write_str("|")?;
                }

                match rank_value(rank) {
                    0 => f.write_str("       ")?,
                    value => write!(f, "{value:^7}")?,
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

impl From<u64> for Board {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Board> for u64 {
    fn from(board: Board) -> Self {
        board.raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ranks_is_row_major() {
        let board = Board::from_ranks([1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 4]);

        assert_eq!(board.raw(), 0x4000_0300_0020_0001);
        assert_eq!(board.rows()[2], [0, 0, 3, 0]);
    }

    #[test]
    fn with_tile_replaces_cell() {
        let board = Board::from_raw(0xffff).with_tile(1, 2).with_tile(15, 11);

        assert_eq!(board.raw(), 0xb000_0000_0000_ff2f);
        assert_eq!(board.tile_value(15), 2048);
        assert_eq!(board.tile_value(1), 4);
        assert_eq!(board.tile_value(4), 0);
    }

    #[test]
    #[should_panic]
    fn with_tile_rejects_large_rank() {
        let _ = Board::EMPTY.with_tile(0, 16);
    }

    #[test]
    fn slide_reports_change() {
        let mut board = Board::from_raw(0x0011);

        assert!(board.slide(Direction::Left));
        assert_eq!(board, Board::from_raw(0x0002));
        assert!(!board.slide(Direction::Left));
        assert_eq!(board, Board::from_raw(0x0002));
    }

    #[test]
    fn shifted_leaves_original() {
        let board = Board::from_raw(0x0101);

        assert_eq!(board.shifted(Direction::Right), Board::from_raw(0x2000));
        assert_eq!(board, Board::from_raw(0x0101));
    }

    #[test]
    fn counts_and_max() {
        let board = Board::from_raw(0x0123_4567_89ab_cdef);

        assert_eq!(board.count_tiles(), 15);
        assert_eq!(board.count_empty(), 1);
        assert_eq!(board.max_rank(), 15);
        assert_eq!(Board::EMPTY.max_rank(), 0);
        assert!(Board::EMPTY.is_game_over());
    }

    #[test]
    fn display_shows_values() {
        let board = Board::EMPTY.with_tile(0, 1).with_tile(5, 11);
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "   2   |       |       |       ");
        assert_eq!(lines[2], "       | 2048  |       |       ");
        assert_eq!(format!("{board:?}"), "Board(0x0000000000b00001)");
    }
}
