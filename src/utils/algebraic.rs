//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the board's
//! square indices. The mapping is a bijection over `a1..h8`; anything else is a
//! `ParseError`, never a silently wrong square.

use crate::board::chess_types::{file_of, rank_of, square_at, Square};
use crate::errors::ParseError;

/// Convert algebraic notation (for example: "e4") to a square index.
///
/// The file letter is case-insensitive.
pub fn algebraic_to_square(square: &str) -> Result<Square, ParseError> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ParseError::WrongLength(square.to_owned()));
    };

    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return Err(ParseError::OutOfRange(square.to_owned()));
    }

    let file_index = file as u8 - b'a';
    let rank_index = rank as u8 - b'1';
    Ok(square_at(rank_index, file_index))
}

/// Convert a square index (`0..=63`) to algebraic notation.
pub fn square_to_algebraic(square: Square) -> Result<String, ParseError> {
    if square > 63 {
        return Err(ParseError::OutOfRange(square.to_string()));
    }
    Ok(square_name(square))
}

/// Algebraic name of an on-board square; out-of-range indices render as `-`.
pub fn square_name(square: Square) -> String {
    if square > 63 {
        return "-".to_owned();
    }
    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    format!("{file_char}{rank_char}")
}
