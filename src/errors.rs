//! Errors used throughout the board engine.
//!
//! `ChessError` is the single error type returned by the position API. Parsing
//! problems (algebraic squares, board-notation strings, move labels) are kept in
//! the nested `ParseError` so callers can tell malformed input apart from
//! rejected game actions.
//!
//! Every variant is recoverable: a failed operation never leaves a `Position`
//! partially mutated, so callers may retry, prompt again, or give up.

use thiserror::Error;

use crate::board::chess_types::{Color, PieceKind, Square};
use crate::utils::algebraic::square_name;

pub type ChessResult<T> = Result<T, ChessError>;

/// Malformed textual input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An algebraic square that is not exactly two characters long.
    #[error("algebraic square '{0}' must be exactly two characters")]
    WrongLength(String),

    /// An algebraic square whose file or rank falls outside `a..h` / `1..8`.
    #[error("algebraic square '{0}' is off the board")]
    OutOfRange(String),

    #[error("board notation is missing the {0} field")]
    MissingField(&'static str),

    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unexpected character '{0}' in board layout")]
    InvalidFenToken(char),

    #[error("invalid side-to-move field '{0}'")]
    InvalidSideToMove(String),

    #[error("no {0:?} king on the board")]
    MissingKing(Color),

    /// Strict mode only: rank count or file sums are wrong, or kings are duplicated.
    #[error("malformed board layout: {0}")]
    MalformedBoard(String),

    /// Strict mode only.
    #[error("invalid castling rights character '{0}'")]
    InvalidCastling(char),

    /// Strict mode only.
    #[error("board notation has extra trailing fields")]
    ExtraFields,

    #[error("invalid promotion letter '{0}'")]
    InvalidPromotion(String),
}

/// Why a make-move request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    NoPieceToMove,
    NotInLegalMoves,
    InvalidPromotion(PieceKind),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(
        "illegal move: {} on {} -> {} ({})",
        describe_piece(.piece),
        square_label(.from),
        square_label(.to),
        describe_reason(.reason)
    )]
    IllegalMove {
        from: Square,
        to: Square,
        piece: Option<(Color, PieceKind)>,
        reason: IllegalMoveReason,
    },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("perft depth must not be negative, got {0}")]
    NegativeDepth(i64),
}

fn square_label(square: &Square) -> String {
    square_name(*square)
}

fn describe_piece(piece: &Option<(Color, PieceKind)>) -> String {
    match *piece {
        Some((color, kind)) => format!("{color:?} {kind:?}"),
        None => "empty square".to_owned(),
    }
}

fn describe_reason(reason: &IllegalMoveReason) -> String {
    match *reason {
        IllegalMoveReason::NoPieceToMove => "no piece of the side to move there".to_owned(),
        IllegalMoveReason::NotInLegalMoves => "not a legal target".to_owned(),
        IllegalMoveReason::InvalidPromotion(kind) => format!("cannot promote to {kind:?}"),
    }
}
