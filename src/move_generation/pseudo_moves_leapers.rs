//! Knight and king projection over fixed offsets, plus castling pseudo-targets.

use crate::board::chess_rules::{king_home, kingside_rook_home, queenside_rook_home};
use crate::board::chess_types::*;
use crate::board::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_offsets::{offset_square, KING_OFFSETS, KNIGHT_OFFSETS};

pub fn generate_knight_targets(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    push_offset_targets(position, from, color, &KNIGHT_OFFSETS, out);
}

pub fn generate_king_targets(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    push_offset_targets(position, from, color, &KING_OFFSETS, out);
    generate_castling_targets(position, from, color, out);
}

fn push_offset_targets(
    position: &Position,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_rank, d_file) in offsets {
        let Some(to) = offset_square(from, d_rank, d_file) else {
            continue;
        };
        if position.cell(to).color() != Some(color) {
            out.push(to);
        }
    }
}

/// Castling destinations two files away from the king.
///
/// Only emptiness of the squares between king and rook is checked here; the
/// transit square is tested by the legal filter.
fn generate_castling_targets(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    let rights = position.castling_rights();
    if from != king_home(color) || !(rights.kingside(color) || rights.queenside(color)) {
        return;
    }

    // Cannot castle out of check.
    if is_king_in_check(position, color) {
        return;
    }

    let empty = |square: Square| position.cell(square).is_empty();
    let own_rook = |square: Square| position.cell(square).holds(color, PieceKind::Rook);

    if rights.kingside(color) && own_rook(kingside_rook_home(color)) && empty(from + 1) && empty(from + 2) {
        out.push(from + 2);
    }

    if rights.queenside(color)
        && own_rook(queenside_rook_home(color))
        && empty(from - 1)
        && empty(from - 2)
        && empty(from - 3)
    {
        out.push(from - 2);
    }
}
