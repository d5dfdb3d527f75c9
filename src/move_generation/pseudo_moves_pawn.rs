//! Pawn move projection: single push, double push from the home rank, and the
//! two diagonal captures (ordinary or onto the en-passant target).

use crate::board::chess_types::*;
use crate::board::position::Position;
use crate::moves::move_offsets::offset_square;

pub fn generate_pawn_targets(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    let forward = color.forward();

    // A blocked single push also blocks the double push.
    if let Some(one_step) = offset_square(from, forward, 0) {
        if position.cell(one_step).is_empty() {
            out.push(one_step);

            if rank_of(from) == color.pawn_home_rank() {
                if let Some(two_step) = offset_square(from, 2 * forward, 0) {
                    if position.cell(two_step).is_empty() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(to) = offset_square(from, forward, d_file) else {
            continue;
        };
        match position.cell(to) {
            Cell::Occupied(target_color, _) if target_color != color => out.push(to),
            Cell::Empty if position.en_passant_square() == Some(to) => out.push(to),
            _ => {}
        }
    }
}
