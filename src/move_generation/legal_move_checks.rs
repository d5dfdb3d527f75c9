//! Attack probing from a target square outward.
//!
//! Instead of generating every enemy move, each attacker type is looked for on
//! the squares it would have to stand on: pawn diagonals, king and knight
//! offsets, then the diagonal and orthogonal rays up to the first occupied cell.

use crate::board::chess_types::*;
use crate::board::position::Position;
use crate::moves::move_offsets::{
    offset_square, ray, DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS,
};

/// True if `color`'s king is attacked.
#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    is_square_attacked(position, position.king_square(color), color.opposite())
}

/// True if any piece of `attacker` attacks `square`.
///
/// Enemy king adjacency counts as an attack, which keeps the two kings from
/// ever standing next to each other.
pub fn is_square_attacked(position: &Position, square: Square, attacker: Color) -> bool {
    // An attacking pawn sits one rank behind the square from its own point of view.
    let pawn_rank = -attacker.forward();
    for d_file in [-1, 1] {
        if let Some(from) = offset_square(square, pawn_rank, d_file) {
            if position.cell(from).holds(attacker, PieceKind::Pawn) {
                return true;
            }
        }
    }

    if any_on_offsets(position, square, &KING_OFFSETS, attacker, PieceKind::King) {
        return true;
    }

    if any_on_offsets(position, square, &KNIGHT_OFFSETS, attacker, PieceKind::Knight) {
        return true;
    }

    if any_on_rays(position, square, &DIAGONAL_DIRECTIONS, attacker, PieceKind::Bishop) {
        return true;
    }

    any_on_rays(position, square, &ORTHOGONAL_DIRECTIONS, attacker, PieceKind::Rook)
}

fn any_on_offsets(
    position: &Position,
    square: Square,
    offsets: &[(i8, i8)],
    attacker: Color,
    kind: PieceKind,
) -> bool {
    offsets
        .iter()
        .filter_map(|&(d_rank, d_file)| offset_square(square, d_rank, d_file))
        .any(|from| position.cell(from).holds(attacker, kind))
}

/// Rays find `slider` or a queen as the first occupied cell.
fn any_on_rays(
    position: &Position,
    square: Square,
    directions: &[(i8, i8)],
    attacker: Color,
    slider: PieceKind,
) -> bool {
    directions.iter().any(|&direction| {
        ray(square, direction)
            .map(|from| position.cell(from))
            .find(|cell| !cell.is_empty())
            .is_some_and(|cell| cell.holds(attacker, slider) || cell.holds(attacker, PieceKind::Queen))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_check(fen: &str) -> bool {
        let position = Position::from_fen(fen).expect("FEN should parse");
        is_king_in_check(&position, position.side_to_move())
    }

    /// Swap colors, mirror ranks, and hand the move to the other side.
    fn mirror(fen: &str) -> String {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let board: Vec<String> = fields[0]
            .split('/')
            .rev()
            .map(|rank| {
                rank.chars()
                    .map(|ch| {
                        if ch.is_ascii_uppercase() {
                            ch.to_ascii_lowercase()
                        } else {
                            ch.to_ascii_uppercase()
                        }
                    })
                    .collect()
            })
            .collect();
        let side = if fields[1] == "w" { "b" } else { "w" };
        format!("{} {} - - 0 1", board.join("/"), side)
    }

    #[test]
    fn start_position_is_not_check() {
        assert!(!in_check(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        ));
    }

    #[test]
    fn each_attacker_type_is_detected() {
        // pawn
        assert!(in_check("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1"));
        // pawn behind the king does not attack
        assert!(!in_check("4k3/8/8/8/8/8/8/3pK3 w - - 0 1"));
        // knight
        assert!(in_check("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1"));
        // bishop
        assert!(in_check("4k3/8/8/b7/8/8/8/4K3 w - - 0 1"));
        // rook
        assert!(in_check("4k3/8/8/8/8/8/8/r3K3 w - - 0 1"));
        // queen on a file
        assert!(in_check("4q3/8/8/8/8/8/8/k3K3 w - - 0 1"));
        // blocked ray
        assert!(!in_check("4k3/8/8/b7/8/8/3P4/4K3 w - - 0 1"));
        // adjacent king
        assert!(in_check("8/8/8/8/8/8/3k4/4K3 w - - 0 1"));
    }

    #[test]
    fn check_detection_is_mirror_invariant() {
        let cases = [
            "4k3/8/8/8/8/8/3p4/4K3 w - - 0 1",
            "4k3/8/8/8/8/5n2/8/4K3 w - - 0 1",
            "4k3/8/8/b7/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/b7/8/8/3P4/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/r3K3 w - - 0 1",
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        ];
        for fen in cases {
            assert_eq!(in_check(fen), in_check(&mirror(fen)), "mirror mismatch for {fen}");
        }
    }

    #[test]
    fn square_attacks_are_reported_per_color() {
        let position = Position::new_game();
        // f3 is covered by White's g1 knight and e2/g2 pawns.
        assert!(is_square_attacked(&position, 21, Color::White));
        assert!(!is_square_attacked(&position, 21, Color::Black));
        // e4 is not attacked by anyone in the start position.
        assert!(!is_square_attacked(&position, 28, Color::White));
        assert!(!is_square_attacked(&position, 28, Color::Black));
    }
}
