//! Bit primitives for a 4x4 2048 board packed into a `u64`.
//!
//! Cell `i` lives in bits `[4 * i, 4 * i + 4)`, so row `r` is the 16-bit slice
//! at `16 * r` and column `c` is nibble `c` of every row. A nibble holds the
//! tile's rank: 0 is empty, otherwise the tile is worth `2^rank`.

pub mod cell;

pub use cell::{rank_score, rank_value, MAX_RANK};

pub const ROW_MASK: u64 = 0xffff;
pub const COLUMN_MASK: u64 = 0x000f_000f_000f_000f;

/// Reverses the nibble order within each row.
pub const fn mirror_board(board: u64) -> u64 {
    let board = ((board << 4) & 0xf0f0_f0f0_f0f0_f0f0) | ((board >> 4) & 0x0f0f_0f0f_0f0f_0f0f);
    ((board << 8) & 0xff00_ff00_ff00_ff00) | ((board >> 8) & 0x00ff_00ff_00ff_00ff)
}

/// Swaps rows and columns. Nibbles 0, 5, 10 and 15 stay put.
pub const fn transpose_board(board: u64) -> u64 {
    let keep = board & 0xf0f0_0f0f_f0f0_0f0f;
    let left = board & 0x0000_f0f0_0000_f0f0;
    let right = board & 0x0f0f_0000_0f0f_0000;
    let board = keep | (left << 12) | (right >> 12);

    let keep = board & 0xff00_ff00_00ff_00ff;
    let left = board & 0x0000_0000_ff00_ff00;
    let right = board & 0x00ff_00ff_0000_0000;

    keep | (left << 24) | (right >> 24)
}

pub const fn reverse_row(row: u16) -> u16 {
    (row >> 12) | ((row >> 4) & 0x00f0) | ((row << 4) & 0x0f00) | (row << 12)
}

/// Spreads the four nibbles of `row` onto nibble 0 of each board row, giving
/// the layout of column 0.
pub const fn unpack_column(row: u16) -> u64 {
    let row = row as u64;

    (row | (row << 12) | (row << 24) | (row << 36)) & COLUMN_MASK
}

pub const fn row(board: u64, index: u32) -> u16 {
    ((board >> (index * 16)) & ROW_MASK) as u16
}

pub const fn tile_rank(board: u64, index: u32) -> u8 {
    ((board >> (index * 4)) & 0xf) as u8
}

/// Sets bit 0 of every empty nibble.
pub const fn mark_empty_cells(board: u64) -> u64 {
    let table = board | (board >> 1);
    let table = table | (table >> 2);

    !table & 0x1111_1111_1111_1111
}

pub const fn count_empty_cells(board: u64) -> u32 {
    mark_empty_cells(board).count_ones()
}

pub const fn count_tiles(board: u64) -> u32 {
    16 - count_empty_cells(board)
}
