use crate::board::chess_types::*;

/// Single undo record for `make_move` / `undo_move`.
///
/// Holds the pre-move legal-move cache so undo restores it instead of
/// regenerating moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub from: Square,
    pub to: Square,
    pub moved_piece: PieceKind,
    pub captured_piece: Option<PieceKind>,
    pub move_class: MoveClass,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u32,
    pub prev_fullmove_number: u32,
    pub prev_legal_moves: Vec<MovePair>,
}
