//! Pseudolegal move projection for a single square.
//!
//! Dispatches on the piece standing on the square. Results obey movement and
//! occupancy rules but may leave the mover's own king attacked; the legal
//! filter removes those.

use crate::board::chess_types::*;
use crate::board::position::Position;
use crate::move_generation::pseudo_moves_leapers::{generate_king_targets, generate_knight_targets};
use crate::move_generation::pseudo_moves_pawn::generate_pawn_targets;
use crate::move_generation::pseudo_moves_sliders::generate_slider_targets;

/// Append the pseudolegal destinations from `from` to `out`.
///
/// Nothing is appended for an empty square or a piece of the side not to move.
pub fn pseudolegal_targets(position: &Position, from: Square, out: &mut Vec<Square>) {
    let Cell::Occupied(color, kind) = position.cell(from) else {
        return;
    };
    if color != position.side_to_move() {
        return;
    }

    match kind {
        PieceKind::Pawn => generate_pawn_targets(position, from, color, out),
        PieceKind::Knight => generate_knight_targets(position, from, color, out),
        PieceKind::King => generate_king_targets(position, from, color, out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_slider_targets(position, from, color, kind, out)
        }
    }
}
