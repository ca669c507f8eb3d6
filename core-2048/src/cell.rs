/// Largest rank a nibble can hold. Tiles at this rank no longer merge.
pub const MAX_RANK: u8 = 0xf;

/// Points accumulated to build a tile of this rank from 2s.
pub const fn rank_score(rank: u8) -> u32 {
    if rank >= 2 {
        (rank as u32 - 1) * (1 << rank)
    } else {
        0
    }
}

pub const fn rank_value(rank: u8) -> u32 {
    if rank == 0 {
        0
    } else {
        1 << rank
    }
}
