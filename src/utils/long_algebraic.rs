//! Coordinate move labels (`e2e4`, `e7e8Q`).
//!
//! Used as divide keys and as the move syntax of the console.

use std::fmt;
use std::str::FromStr;

use crate::board::chess_types::{PieceKind, Square};
use crate::errors::ParseError;
use crate::utils::algebraic::{algebraic_to_square, square_name};

/// A move written as origin, destination and optional promotion letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveLabel {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveLabel {
    pub const fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }
}

impl fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from), square_name(self.to))?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

impl FromStr for MoveLabel {
    type Err = ParseError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if !label.is_ascii() || (label.len() != 4 && label.len() != 5) {
            return Err(ParseError::WrongLength(label.to_owned()));
        }

        let from = algebraic_to_square(&label[0..2])?;
        let to = algebraic_to_square(&label[2..4])?;
        let promotion = match label.get(4..) {
            Some(letter) if !letter.is_empty() => Some(parse_promotion(letter)?),
            _ => None,
        };

        Ok(Self::new(from, to, promotion))
    }
}

/// Parse a promotion letter (`q`, `r`, `b`, `n`, either case).
pub fn parse_promotion(letter: &str) -> Result<PieceKind, ParseError> {
    let mut chars = letter.chars();
    match (chars.next().and_then(PieceKind::from_letter), chars.next()) {
        (Some(kind), None) if kind.is_promotion_choice() => Ok(kind),
        _ => Err(ParseError::InvalidPromotion(letter.to_owned())),
    }
}
