//! Perft and divide: exhaustive leaf counting over the legal-move tree.
//!
//! The cached legal moves hold one entry per pawn advance to the last rank, so
//! such moves are expanded here into the four promotion choices.

use std::collections::BTreeMap;

use log::debug;

use crate::board::chess_rules::PROMOTION_KINDS;
use crate::board::chess_types::*;
use crate::board::position::Position;
use crate::errors::{ChessError, ChessResult};
use crate::utils::long_algebraic::MoveLabel;

/// Convert a caller-supplied depth, rejecting negative values.
pub fn validate_depth(depth: i64) -> ChessResult<u32> {
    if depth < 0 {
        return Err(ChessError::NegativeDepth(depth));
    }
    Ok(u32::try_from(depth).unwrap_or(u32::MAX))
}

impl Position {
    /// Number of leaf nodes `depth` plies below this position.
    ///
    /// The position is walked in place and is identical on return.
    pub fn perft(&mut self, depth: u32) -> u64 {
        match depth {
            0 => 1,
            1 => self
                .legal_moves
                .iter()
                .map(|&(from, to)| {
                    if self.is_promotion_move(from, to) {
                        PROMOTION_KINDS.len() as u64
                    } else {
                        1
                    }
                })
                .sum(),
            _ => {
                let moves = self.legal_moves.clone();
                let mut nodes = 0;
                for (from, to) in moves {
                    for promotion in self.promotion_choices(from, to) {
                        nodes += self.play_and_count(from, to, promotion.unwrap_or(PieceKind::Queen), depth - 1);
                    }
                }
                nodes
            }
        }
    }

    /// Per-root-move perft counts, keyed by coordinate label.
    ///
    /// Depth 0 has no root moves and yields an empty map.
    pub fn divide(&mut self, depth: u32) -> BTreeMap<MoveLabel, u64> {
        let mut counts = BTreeMap::new();
        if depth == 0 {
            return counts;
        }

        let moves = self.legal_moves.clone();
        for (from, to) in moves {
            for promotion in self.promotion_choices(from, to) {
                let nodes = self.play_and_count(from, to, promotion.unwrap_or(PieceKind::Queen), depth - 1);
                counts.insert(MoveLabel::new(from, to, promotion), nodes);
            }
        }

        debug!(
            "divide({depth}): {} root moves, {} nodes",
            counts.len(),
            counts.values().sum::<u64>()
        );
        counts
    }

    /// `None` for an ordinary move, one entry per promotion piece otherwise.
    fn promotion_choices(&self, from: Square, to: Square) -> Vec<Option<PieceKind>> {
        if self.is_promotion_move(from, to) {
            PROMOTION_KINDS.iter().copied().map(Some).collect()
        } else {
            vec![None]
        }
    }

    fn play_and_count(&mut self, from: Square, to: Square, promotion: PieceKind, depth: u32) -> u64 {
        let Cell::Occupied(color, kind) = self.cell(from) else {
            return 0;
        };
        self.play(from, to, color, kind, promotion);
        let nodes = self.perft(depth);
        if let Some(record) = self.undo_stack.pop() {
            self.take_back(record);
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_is_one_node() {
        let mut position = Position::new_game();
        assert_eq!(position.perft(0), 1);
        assert!(position.divide(0).is_empty());
    }

    #[test]
    fn shallow_start_position_counts() {
        let mut position = Position::new_game();
        let before = position.clone();
        assert_eq!(position.perft(1), 20);
        assert_eq!(position.perft(2), 400);
        assert_eq!(position.perft(3), 8902);
        assert_eq!(position, before);
    }

    #[test]
    fn promotions_count_four_times() {
        let mut position =
            Position::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        // b7-b8 x4, five king moves.
        assert_eq!(position.perft(1), 9);

        let counts = position.divide(1);
        assert_eq!(counts.len(), 9);
        let label: MoveLabel = "b7b8n".parse().expect("label should parse");
        assert_eq!(counts.get(&label), Some(&1));
        assert!(counts.keys().any(|label| label.to_string() == "b7b8Q"));
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut position = Position::new_game();
        let counts = position.divide(3);
        assert_eq!(counts.len(), 20);
        assert_eq!(counts.values().sum::<u64>(), 8902);
        let e2e4: MoveLabel = "e2e4".parse().expect("label should parse");
        assert_eq!(counts.get(&e2e4), Some(&600));
    }

    #[test]
    fn negative_depth_is_rejected() {
        assert_eq!(validate_depth(-1), Err(ChessError::NegativeDepth(-1)));
        assert_eq!(validate_depth(4), Ok(4));
    }
}
