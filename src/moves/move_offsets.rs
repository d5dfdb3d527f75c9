//! Movement patterns expressed as `(d_rank, d_file)` offsets.
//!
//! Shared by the pseudolegal generator (projecting moves outward from a piece)
//! and the check detector (probing outward from a king).

use crate::board::chess_types::{file_of, rank_of, square_at, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Square reached from `square` by `(d_rank, d_file)`, or `None` off the board.
#[inline]
pub const fn offset_square(square: Square, d_rank: i8, d_file: i8) -> Option<Square> {
    let rank = rank_of(square) as i8 + d_rank;
    let file = file_of(square) as i8 + d_file;
    if rank < 0 || rank > 7 || file < 0 || file > 7 {
        return None;
    }
    Some(square_at(rank as u8, file as u8))
}

/// Iterator over the squares of one ray, nearest first, stopping at the edge.
pub fn ray(square: Square, direction: (i8, i8)) -> impl Iterator<Item = Square> {
    let (d_rank, d_file) = direction;
    std::iter::successors(offset_square(square, d_rank, d_file), move |&current| {
        offset_square(current, d_rank, d_file)
    })
}
