//! Canonical chess-rule constants.
//!
//! Starting layout, home squares used by castling, and the promotion order used
//! when perft expands a pawn advance to the last rank.

use crate::board::chess_types::{Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Promotion choices in the order perft and divide enumerate them.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub const WHITE_KING_HOME: Square = 4;
pub const BLACK_KING_HOME: Square = 60;

pub const WHITE_QUEENSIDE_ROOK_HOME: Square = 0;
pub const WHITE_KINGSIDE_ROOK_HOME: Square = 7;
pub const BLACK_QUEENSIDE_ROOK_HOME: Square = 56;
pub const BLACK_KINGSIDE_ROOK_HOME: Square = 63;

#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::White => WHITE_KING_HOME,
        Color::Black => BLACK_KING_HOME,
    }
}

#[inline]
pub const fn kingside_rook_home(color: Color) -> Square {
    match color {
        Color::White => WHITE_KINGSIDE_ROOK_HOME,
        Color::Black => BLACK_KINGSIDE_ROOK_HOME,
    }
}

#[inline]
pub const fn queenside_rook_home(color: Color) -> Square {
    match color {
        Color::White => WHITE_QUEENSIDE_ROOK_HOME,
        Color::Black => BLACK_QUEENSIDE_ROOK_HOME,
    }
}
