//! Transition tables for every possible 16-bit row.
//!
//! A row or column slides independently of the rest of the board, so the
//! result of sliding each of the 2^16 patterns is computed once and looked up
//! afterwards. Entries are XOR deltas: `row ^ delta` is the slid row, which
//! lets a move patch the live board in place instead of rebuilding it.
//!
//! The column tables hold the same deltas already spread into column layout
//! (one nibble per board row), so they apply to the untransposed board.
//!
//! Tables are built on first use behind a `OnceLock` and are read-only after
//! that. Call [`init`] to pay the build cost up front.

use std::{sync::OnceLock, time::Instant};

use core_2048::{rank_score, reverse_row, unpack_column, MAX_RANK};

pub const TABLE_SIZE: usize = 1 << 16;

pub struct MoveTables {
    row_left: Box<[u16]>,
    row_right: Box<[u16]>,
    column_up: Box<[u64]>,
    column_down: Box<[u64]>,
    score: Box<[u32]>,
}

static TABLES: OnceLock<MoveTables> = OnceLock::new();

/// Builds the tables if needed. Safe to call any number of times.
pub fn init() {
    tables();
}

#[inline]
pub fn tables() -> &'static MoveTables {
    TABLES.get_or_init(MoveTables::build)
}

impl MoveTables {
    fn build() -> Self {
        let start = Instant::now();

        let mut row_left = vec![0u16; TABLE_SIZE];
        let mut row_right = vec![0u16; TABLE_SIZE];
        let mut column_up = vec![0u64; TABLE_SIZE];
        let mut column_down = vec![0u64; TABLE_SIZE];
        let mut score = vec![0u32; TABLE_SIZE];

        for row in 0..=u16::MAX {
            let result = slide_row_left(row);

            let rev_row = reverse_row(row);
            let rev_result = reverse_row(result);

            score[usize::from(row)] = score_row(row);

            row_left[usize::from(row)] = row ^ result;
            row_right[usize::from(rev_row)] = rev_row ^ rev_result;
            column_up[usize::from(row)] = unpack_column(row) ^ unpack_column(result);
            column_down[usize::from(rev_row)] =
                unpack_column(rev_row) ^ unpack_column(rev_result);
        }

        log::debug!("built move tables in {:?}", start.elapsed());

        Self {
            row_left: row_left.into_boxed_slice(),
            row_right: row_right.into_boxed_slice(),
            column_up: column_up.into_boxed_slice(),
            column_down: column_down.into_boxed_slice(),
            score: score.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn row_left(&self, row: u16) -> u16 {
        self.row_left[usize::from(row)]
    }

    #[inline]
    pub fn row_right(&self, row: u16) -> u16 {
        self.row_right[usize::from(row)]
    }

    /// Delta for column 0 of the board, indexed by the column read top to bottom.
    #[inline]
    pub fn column_up(&self, column: u16) -> u64 {
        self.column_up[usize::from(column)]
    }

    #[inline]
    pub fn column_down(&self, column: u16) -> u64 {
        self.column_down[usize::from(column)]
    }

    #[inline]
    pub fn score(&self, row: u16) -> u32 {
        self.score[usize::from(row)]
    }
}

fn decode_row(row: u16) -> [u8; 4] {
    [0, 4, 8, 12].map(|shift| ((row >> shift) & 0xf) as u8)
}

fn encode_row(line: [u8; 4]) -> u16 {
    line.iter()
        .rev()
        .fold(0, |row, &rank| (row << 4) | u16::from(rank))
}

fn score_row(row: u16) -> u32 {
    decode_row(row).into_iter().map(rank_score).sum()
}

/// Slides `row` toward nibble 0, merging each equal pair at most once.
///
/// A tile that came out of a merge does not merge again in the same move, and
/// tiles at [`MAX_RANK`] never merge.
pub fn slide_row_left(row: u16) -> u16 {
    let mut line = decode_row(row);
    let mut i = 0;

    while i < 3 {
        let Some(j) = (i + 1..4).find(|&j| line[j] != 0) else {
            break;
        };

        if line[i] == 0 {
            line[i] = line[j];
            line[j] = 0;
            // The gap is filled; look again for a tile to merge into it.
            continue;
        }

        if line[i] == line[j] && line[i] != MAX_RANK {
            line[i] += 1;
            line[j] = 0;
        }

        i += 1;
    }

    encode_row(line)
}
