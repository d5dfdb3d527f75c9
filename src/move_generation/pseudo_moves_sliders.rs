//! Bishop, rook and queen projection by ray casting.

use crate::board::chess_types::*;
use crate::board::position::Position;
use crate::moves::move_offsets::{ray, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

pub fn generate_slider_targets(
    position: &Position,
    from: Square,
    color: Color,
    kind: PieceKind,
    out: &mut Vec<Square>,
) {
    let diagonal = matches!(kind, PieceKind::Bishop | PieceKind::Queen);
    let orthogonal = matches!(kind, PieceKind::Rook | PieceKind::Queen);

    if diagonal {
        for direction in DIAGONAL_DIRECTIONS {
            push_ray_targets(position, from, color, direction, out);
        }
    }
    if orthogonal {
        for direction in ORTHOGONAL_DIRECTIONS {
            push_ray_targets(position, from, color, direction, out);
        }
    }
}

fn push_ray_targets(
    position: &Position,
    from: Square,
    color: Color,
    direction: (i8, i8),
    out: &mut Vec<Square>,
) {
    for to in ray(from, direction) {
        match position.cell(to) {
            Cell::Empty => out.push(to),
            Cell::Occupied(target_color, _) => {
                if target_color != color {
                    out.push(to);
                }
                break;
            }
        }
    }
}
