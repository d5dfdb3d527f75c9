//! Checkmate and stalemate detection from the legal-move cache.

use std::fmt;

use crate::board::chess_types::Color;
use crate::board::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check with no legal move.
    Checkmate,
    /// The side to move is not in check and has no legal move.
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

impl Position {
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    pub fn side_to_move_in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    pub fn is_checkmate(&self) -> bool {
        self.legal_moves.is_empty() && self.side_to_move_in_check()
    }

    pub fn is_stalemate(&self) -> bool {
        self.legal_moves.is_empty() && !self.side_to_move_in_check()
    }

    pub fn game_status(&self) -> GameStatus {
        if !self.legal_moves.is_empty() {
            GameStatus::Ongoing
        } else if self.side_to_move_in_check() {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }
}
