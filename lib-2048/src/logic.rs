use std::num::NonZeroU64;

use crate::{
    direction::Direction,
    error::EngineError,
    tables::{self, MoveTables},
};

const MOVE_FUNCTIONS: [fn(u64) -> u64; 4] = [move_up, move_down, move_right, move_left];

/// Slides and merges every row or column of `board` toward `direction`.
///
/// Comparing the result with `board` tells whether the move was legal.
#[inline]
pub fn apply_move(board: u64, direction: Direction) -> u64 {
    MOVE_FUNCTIONS[direction as usize](board)
}

/// Like [`apply_move`], for callers holding a raw direction code.
pub fn apply_move_code(board: u64, code: u8) -> Result<u64, EngineError> {
    let direction = Direction::try_from(code)?;

    Ok(apply_move(board, direction))
}

#[inline]
pub fn row_score(row: u16) -> u32 {
    tables::tables().score(row)
}

/// Sum of every merge that produced the tiles on `board`, counting from 2s.
pub fn board_score(board: u64) -> u32 {
    let tables = tables::tables();

    (0..4).map(|i| tables.score(core_2048::row(board, i))).sum()
}

/// Points earned by the merges that turned `before` into `after`.
pub fn move_points(before: u64, after: u64) -> u32 {
    board_score(after).saturating_sub(board_score(before))
}

fn shift_rows(board: u64, lookup: impl Fn(&MoveTables, u16) -> u16) -> u64 {
    let tables = tables::tables();

    (0..4).fold(board, |new_board, i| {
        let row = core_2048::row(board, i);

        new_board ^ (u64::from(lookup(tables, row)) << (i * 16))
    })
}

fn shift_columns(board: u64, lookup: impl Fn(&MoveTables, u16) -> u64) -> u64 {
    let tables = tables::tables();
    let transposed = core_2048::transpose_board(board);

    // Column deltas are already in board layout, so they go straight onto the
    // untransposed board.
    (0..4).fold(board, |new_board, i| {
        let column = core_2048::row(transposed, i);

        new_board ^ (lookup(tables, column) << (i * 4))
    })
}

fn move_up(board: u64) -> u64 {
    shift_columns(board, MoveTables::column_up)
}

fn move_down(board: u64) -> u64 {
    shift_columns(board, MoveTables::column_down)
}

fn move_right(board: u64) -> u64 {
    shift_rows(board, MoveTables::row_right)
}

fn move_left(board: u64) -> u64 {
    shift_rows(board, MoveTables::row_left)
}

/// Returns the new board if moving toward `direction` changes anything.
pub fn try_move(board: u64, direction: Direction) -> Option<NonZeroU64> {
    let new_board = apply_move(board, direction);

    (new_board != board)
        .then_some(NonZeroU64::new(new_board))
        .flatten()
}

/// Every move from `board`, indexed by `Direction as usize`, with the points
/// it earns.
pub fn try_all_moves(board: u64) -> [Option<(NonZeroU64, u32)>; 4] {
    Direction::ALL.map(|direction| {
        try_move(board, direction).map(|new_board| (new_board, move_points(board, new_board.get())))
    })
}

pub fn legal_moves(board: u64) -> impl Iterator<Item = Direction> {
    Direction::iter().filter(move |&direction| try_move(board, direction).is_some())
}

pub fn is_game_over(board: u64) -> bool {
    legal_moves(board).next().is_none()
}
