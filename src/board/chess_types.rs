//! Core value types for the mailbox board.
//!
//! Squares are plain indices (`rank * 8 + file`, `0 == a1`, `63 == h8`).
//! Every cell holds a `Cell`, replaced wholesale whenever it changes.

/// Board square index (`0..=63`).
pub type Square = u8;

/// A `(from, to)` pair as stored in the legal-move cache.
pub type MovePair = (Square, Square);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a pawn push for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank (0-based) on which this color's pawns start.
    #[inline]
    pub const fn pawn_home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank (0-based) on which this color's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase board-notation letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Inverse of [`PieceKind::letter`], case-insensitive.
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Color, PieceKind),
}

impl Cell {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color, _) => Some(color),
        }
    }

    #[inline]
    pub const fn piece(self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(_, kind) => Some(kind),
        }
    }

    #[inline]
    pub const fn occupant(self) -> Option<(Color, PieceKind)> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color, kind) => Some((color, kind)),
        }
    }

    /// True if the cell holds `kind` of `color`.
    #[inline]
    pub fn holds(self, color: Color, kind: PieceKind) -> bool {
        self == Cell::Occupied(color, kind)
    }

    /// Board-notation letter (uppercase for White), `None` when empty.
    pub fn fen_char(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(Color::White, kind) => Some(kind.letter().to_ascii_uppercase()),
            Cell::Occupied(Color::Black, kind) => Some(kind.letter()),
        }
    }

    /// Parse a single board-notation piece letter.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Cell::Occupied(color, kind))
    }
}

/// The four castling permissions (K, Q, k, q).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: Self = Self {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: Self = Self {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn clear_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        !(self.white_kingside || self.white_queenside || self.black_kingside || self.black_queenside)
    }
}

/// How a move was physically carried out; drives undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveClass {
    /// Quiet moves and ordinary captures.
    Normal,
    Castle,
    EnPassant,
    Promotion(PieceKind),
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_at(rank: u8, file: u8) -> Square {
    rank * 8 + file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_letters_round_trip_through_cells() {
        for ch in "pnbrqkPNBRQK".chars() {
            let cell = Cell::from_fen_char(ch).expect("piece letter should parse");
            assert_eq!(cell.fen_char(), Some(ch));
        }
        assert_eq!(Cell::from_fen_char('x'), None);
        assert_eq!(Cell::Empty.fen_char(), None);
    }

    #[test]
    fn clearing_one_color_keeps_the_other() {
        let mut rights = CastlingRights::ALL;
        rights.clear_color(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(!rights.queenside(Color::White));
        assert!(rights.kingside(Color::Black));
        assert!(rights.queenside(Color::Black));
        assert!(!rights.is_empty());
    }
}
