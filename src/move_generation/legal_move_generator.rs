//! Legal move filtering.
//!
//! Every pseudolegal destination is tried on the board with `move_piece`, the
//! mover's king is tested for attacks, and the trial is reverted with
//! `unmove_piece`. Castling also rejects a king that would pass through an
//! attacked square.

use crate::board::chess_rules::king_home;
use crate::board::chess_types::*;
use crate::board::position::Position;
use crate::move_generation::legal_move_apply::{move_piece, unmove_piece};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudolegal_moves::pseudolegal_targets;

/// Legal destinations of the piece on `from` for the side to move.
///
/// The position is mutated during the trials but is identical on return.
pub fn legal_targets(position: &mut Position, from: Square) -> Vec<Square> {
    let mut pseudo = Vec::with_capacity(28);
    pseudolegal_targets(position, from, &mut pseudo);

    let Some((color, kind)) = position.cell(from).occupant() else {
        return pseudo;
    };

    pseudo.retain(|&to| {
        // Kings are never captured, even when the opponent was left in check.
        if position.cell(to).piece() == Some(PieceKind::King) {
            return false;
        }
        if kind == PieceKind::King && from == king_home(color) && from.abs_diff(to) == 2 {
            let transit = if to > from { from + 1 } else { from - 1 };
            if leaves_king_attacked(position, from, transit, color, kind) {
                return false;
            }
        }
        !leaves_king_attacked(position, from, to, color, kind)
    });
    pseudo
}

/// Every legal `(from, to)` pair for the side to move, in square order.
pub fn all_legal_moves(position: &mut Position) -> Vec<MovePair> {
    let side = position.side_to_move();
    let mut moves = Vec::with_capacity(64);

    for from in 0..64u8 {
        if position.cell(from).color() != Some(side) {
            continue;
        }
        moves.extend(legal_targets(position, from).into_iter().map(|to| (from, to)));
    }
    moves
}

fn leaves_king_attacked(
    position: &mut Position,
    from: Square,
    to: Square,
    color: Color,
    kind: PieceKind,
) -> bool {
    let (move_class, captured) = move_piece(position, from, to, color, kind, PieceKind::Queen);
    let in_check = is_king_in_check(position, color);
    unmove_piece(position, from, to, color, kind, captured, move_class);
    in_check
}
