//! In-place make/undo.
//!
//! `move_piece`/`unmove_piece` are the single-ply movers shared by the legal
//! filter (trial moves) and by `make_move`/`undo_move` (permanent moves, which
//! also handle rights, clocks, history and the legal-move cache).

use log::{debug, info};

use crate::board::chess_rules::{
    king_home, BLACK_KING_HOME, BLACK_KINGSIDE_ROOK_HOME, BLACK_QUEENSIDE_ROOK_HOME,
    WHITE_KING_HOME, WHITE_KINGSIDE_ROOK_HOME, WHITE_QUEENSIDE_ROOK_HOME,
};
use crate::board::chess_types::*;
use crate::board::position::Position;
use crate::board::undo_state::UndoState;
use crate::errors::{ChessError, ChessResult, IllegalMoveReason};
use crate::move_generation::game_end::GameStatus;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::utils::long_algebraic::MoveLabel;

/// Rook relocation for a castling king move, as `(rook_from, rook_to)`.
#[inline]
fn castling_rook_squares(king_from: Square, king_to: Square) -> (Square, Square) {
    if king_to > king_from {
        (king_from + 3, king_from + 1)
    } else {
        (king_from - 4, king_from - 1)
    }
}

/// Square of the pawn removed by an en-passant capture.
#[inline]
fn en_passant_victim(from: Square, to: Square) -> Square {
    square_at(rank_of(from), file_of(to))
}

/// Physically move `kind` of `color` from `from` to `to`.
///
/// Relocates the rook when castling, substitutes `promotion` on the last rank,
/// and removes the bypassed pawn for en passant. Returns the move class and the
/// captured piece kind.
pub(crate) fn move_piece(
    position: &mut Position,
    from: Square,
    to: Square,
    color: Color,
    kind: PieceKind,
    promotion: PieceKind,
) -> (MoveClass, Option<PieceKind>) {
    let target = position.cell(to);
    let mut captured = target.piece();

    let move_class = if kind == PieceKind::King && from == king_home(color) && from.abs_diff(to) == 2 {
        let (rook_from, rook_to) = castling_rook_squares(from, to);
        position.put(rook_to, Cell::Occupied(color, PieceKind::Rook));
        position.put(rook_from, Cell::Empty);
        MoveClass::Castle
    } else if kind == PieceKind::Pawn && rank_of(to) == color.promotion_rank() {
        MoveClass::Promotion(promotion)
    } else if kind == PieceKind::Pawn
        && target.is_empty()
        && file_of(from) != file_of(to)
        && position.en_passant_square == Some(to)
        && position
            .cell(en_passant_victim(from, to))
            .holds(color.opposite(), PieceKind::Pawn)
    {
        position.put(en_passant_victim(from, to), Cell::Empty);
        captured = Some(PieceKind::Pawn);
        MoveClass::EnPassant
    } else {
        MoveClass::Normal
    };

    let placed = match move_class {
        MoveClass::Promotion(promoted) => promoted,
        _ => kind,
    };
    position.put(to, Cell::Occupied(color, placed));
    position.put(from, Cell::Empty);

    (move_class, captured)
}

/// Exact inverse of [`move_piece`].
pub(crate) fn unmove_piece(
    position: &mut Position,
    from: Square,
    to: Square,
    color: Color,
    kind: PieceKind,
    captured: Option<PieceKind>,
    move_class: MoveClass,
) {
    let enemy = color.opposite();

    match move_class {
        MoveClass::Castle => {
            let (rook_from, rook_to) = castling_rook_squares(from, to);
            position.put(rook_to, Cell::Empty);
            position.put(rook_from, Cell::Occupied(color, PieceKind::Rook));
            position.put(to, Cell::Empty);
        }
        MoveClass::EnPassant => {
            position.put(to, Cell::Empty);
            position.put(
                en_passant_victim(from, to),
                Cell::Occupied(enemy, PieceKind::Pawn),
            );
        }
        MoveClass::Normal | MoveClass::Promotion(_) => {
            let restored = match captured {
                Some(captured_kind) => Cell::Occupied(enemy, captured_kind),
                None => Cell::Empty,
            };
            position.put(to, restored);
        }
    }

    position.put(from, Cell::Occupied(color, kind));
}

/// Clear rights whose king or rook home square the move leaves or lands on.
fn update_castling_rights(rights: &mut CastlingRights, from: Square, to: Square) {
    for square in [from, to] {
        match square {
            WHITE_KING_HOME => rights.clear_color(Color::White),
            BLACK_KING_HOME => rights.clear_color(Color::Black),
            WHITE_QUEENSIDE_ROOK_HOME => rights.white_queenside = false,
            WHITE_KINGSIDE_ROOK_HOME => rights.white_kingside = false,
            BLACK_QUEENSIDE_ROOK_HOME => rights.black_queenside = false,
            BLACK_KINGSIDE_ROOK_HOME => rights.black_kingside = false,
            _ => {}
        }
    }
}

impl Position {
    /// Make a permanent move for the side to move.
    ///
    /// The move must be in the cached legal-move list; otherwise nothing is
    /// changed and `ChessError::IllegalMove` is returned. `promotion` is used
    /// only when a pawn reaches its last rank.
    pub fn make_move(&mut self, from: Square, to: Square, promotion: PieceKind) -> ChessResult<GameStatus> {
        let occupant = self.cell(from).occupant();
        let illegal = |reason| ChessError::IllegalMove {
            from,
            to,
            piece: occupant,
            reason,
        };

        let Some((color, kind)) = occupant.filter(|(color, _)| *color == self.side_to_move) else {
            return Err(illegal(IllegalMoveReason::NoPieceToMove));
        };
        if !self.is_legal_move(from, to) {
            return Err(illegal(IllegalMoveReason::NotInLegalMoves));
        }
        let promotes = self.is_promotion_move(from, to);
        if promotes && !promotion.is_promotion_choice() {
            return Err(illegal(IllegalMoveReason::InvalidPromotion(promotion)));
        }

        self.play(from, to, color, kind, promotion);

        let status = self.game_status();
        debug!(
            "{:?} played {} ({} legal replies)",
            color,
            MoveLabel::new(from, to, promotes.then_some(promotion)),
            self.legal_moves.len()
        );
        match status {
            GameStatus::Checkmate => info!("checkmate, {:?} wins", color),
            GameStatus::Stalemate => info!("stalemate"),
            GameStatus::Ongoing => {}
        }
        Ok(status)
    }

    /// Parse a coordinate label such as `e2e4` or `e7e8n` and make the move.
    pub fn make_move_algebraic(&mut self, label: &str) -> ChessResult<GameStatus> {
        let label: MoveLabel = label.parse()?;
        self.make_move(
            label.from,
            label.to,
            label.promotion.unwrap_or(PieceKind::Queen),
        )
    }

    /// Revert the most recent move, restoring every field and the move cache.
    pub fn undo_move(&mut self) -> ChessResult<()> {
        let record = self.undo_stack.pop().ok_or(ChessError::NothingToUndo)?;
        debug!("undid {}", MoveLabel::new(record.from, record.to, None));
        self.take_back(record);
        Ok(())
    }

    /// Reverse the move described by `record`, which must be the one just
    /// popped from the history.
    pub(crate) fn take_back(&mut self, record: UndoState) {
        let mover = self.side_to_move.opposite();

        unmove_piece(
            self,
            record.from,
            record.to,
            mover,
            record.moved_piece,
            record.captured_piece,
            record.move_class,
        );

        self.castling_rights = record.prev_castling_rights;
        self.en_passant_square = record.prev_en_passant_square;
        self.halfmove_clock = record.prev_halfmove_clock;
        self.fullmove_number = record.prev_fullmove_number;
        self.side_to_move = mover;
        self.legal_moves = record.prev_legal_moves;
        self.debug_assert_kings();
    }

    /// Apply an already validated move, push its undo record, and refresh the
    /// legal-move cache.
    pub(crate) fn play(&mut self, from: Square, to: Square, color: Color, kind: PieceKind, promotion: PieceKind) {
        let prev_castling_rights = self.castling_rights;
        let prev_en_passant_square = self.en_passant_square;
        let prev_halfmove_clock = self.halfmove_clock;
        let prev_fullmove_number = self.fullmove_number;

        let (move_class, captured_piece) = move_piece(self, from, to, color, kind, promotion);

        update_castling_rights(&mut self.castling_rights, from, to);

        if kind == PieceKind::Pawn || captured_piece.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.en_passant_square = if kind == PieceKind::Pawn && from.abs_diff(to) == 16 {
            Some((from + to) / 2)
        } else {
            None
        };

        self.side_to_move = color.opposite();
        self.debug_assert_kings();

        let prev_legal_moves = std::mem::take(&mut self.legal_moves);
        self.undo_stack.push(UndoState {
            from,
            to,
            moved_piece: kind,
            captured_piece,
            move_class,
            prev_castling_rights,
            prev_en_passant_square,
            prev_halfmove_clock,
            prev_fullmove_number,
            prev_legal_moves,
        });

        self.legal_moves = all_legal_moves(self);
    }
}
