//! Mailbox board state.
//!
//! `Position` is the aggregate root of the engine: 64 cells, side to move,
//! castling rights, en-passant target, clocks, cached king squares, the
//! make/undo history stack, and the cached list of legal moves for the side to
//! move. The cache is recomputed after set-position and make-move, and restored
//! from the history record on undo.

use log::debug;

use crate::board::chess_rules::{BLACK_KING_HOME, STARTING_POSITION_FEN, WHITE_KING_HOME};
use crate::board::chess_types::*;
use crate::board::undo_state::UndoState;
use crate::errors::ChessResult;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::utils::fen_generator::{generate_fen, generate_fen_with, EnPassantExport};
use crate::utils::fen_parser::{parse_fen, parse_fen_with, FenOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) cells: [Cell; 64],

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,

    // [White, Black]
    pub(crate) king_squares: [Square; 2],

    pub(crate) undo_stack: Vec<UndoState>,
    pub(crate) legal_moves: Vec<MovePair>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Board with no pieces and no cached moves; only the parser builds on this.
    pub(crate) fn new_empty() -> Self {
        Self {
            cells: [Cell::Empty; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_squares: [WHITE_KING_HOME, BLACK_KING_HOME],
            undo_stack: Vec::new(),
            legal_moves: Vec::new(),
        }
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Permissive import, see [`FenOptions`].
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(parse_fen(fen)?)
    }

    pub fn from_fen_with(fen: &str, options: FenOptions) -> ChessResult<Self> {
        Ok(parse_fen_with(fen, options)?)
    }

    /// Export with the historical en-passant behavior (target always written).
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    pub fn get_fen_with(&self, en_passant: EnPassantExport) -> String {
        generate_fen_with(self, en_passant)
    }

    /// Populate the legal-move cache once the board fields are in place.
    pub(crate) fn finish_setup(&mut self) {
        self.undo_stack.clear();
        self.legal_moves = all_legal_moves(self);
        debug!(
            "position set: {} ({} legal moves)",
            self.get_fen(),
            self.legal_moves.len()
        );
    }

    /// Contents of `square`; off-board indices read as empty.
    #[inline]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells.get(square as usize).copied().unwrap_or_default()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; 64] {
        &self.cells
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Number of moves that can currently be undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Most recent history record, if any.
    pub fn last_move(&self) -> Option<&UndoState> {
        self.undo_stack.last()
    }

    /// Cached legal moves of the side to move, as `(from, to)` pairs.
    #[inline]
    pub fn legal_moves(&self) -> &[MovePair] {
        &self.legal_moves
    }

    /// Cached legal destinations from `from` (empty for other squares).
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        self.legal_moves
            .iter()
            .filter(|(move_from, _)| *move_from == from)
            .map(|(_, to)| *to)
            .collect()
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        self.legal_moves.contains(&(from, to))
    }

    /// True for a pawn of the side to move advancing to its last rank.
    pub fn is_promotion_move(&self, from: Square, to: Square) -> bool {
        match self.cell(from) {
            Cell::Occupied(color, PieceKind::Pawn) => rank_of(to) == color.promotion_rank(),
            _ => false,
        }
    }

    /// Place `cell` on `square`, keeping the king cache in sync.
    pub(crate) fn put(&mut self, square: Square, cell: Cell) {
        if let Cell::Occupied(color, PieceKind::King) = cell {
            self.king_squares[color.index()] = square;
        }
        self.cells[square as usize] = cell;
    }

    /// Debug check that the cached king squares match the board.
    #[inline]
    pub(crate) fn debug_assert_kings(&self) {
        debug_assert!(
            self.cell(self.king_squares[0]).holds(Color::White, PieceKind::King),
            "white king cache out of sync"
        );
        debug_assert!(
            self.cell(self.king_squares[1]).holds(Color::Black, PieceKind::King),
            "black king cache out of sync"
        );
    }
}
