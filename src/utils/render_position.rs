//! Terminal-oriented board renderer.
//!
//! Draws the board from White's point of view for the console, tests and
//! diagnostics. Squares passed as `highlights` are marked, which is how the
//! console shows the legal targets of a piece.

use crate::board::chess_types::*;
use crate::board::position::Position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Unicode glyphs, `·` for empty squares, `*`/`x` for highlighted
    /// empty/occupied squares.
    #[default]
    Unicode,
    /// Board letters on ANSI colored backgrounds.
    Ansi,
}

const ANSI_RESET: &str = "\x1b[0m";

// Indexed by text color: [White pieces, Black pieces and empty squares].
const ANSI_LIGHT_SQUARE: [&str; 2] = ["\x1b[0;37;46m", "\x1b[0;30;46m"];
const ANSI_DARK_SQUARE: [&str; 2] = ["\x1b[0;37;44m", "\x1b[0;30;44m"];
const ANSI_HIGHLIGHT_SQUARE: [&str; 2] = ["\x1b[0;37;45m", "\x1b[0;30;45m"];

/// Render the board to a string for terminal output.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_position(position: &Position, style: RenderStyle, highlights: &[Square]) -> String {
    match style {
        RenderStyle::Unicode => render_unicode(position, highlights),
        RenderStyle::Ansi => render_ansi(position, highlights),
    }
}

fn render_unicode(position: &Position, highlights: &[Square]) -> String {
    let cells = position.cells();
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let square = square_at(rank, file);
            let cell = cells[square as usize];
            let glyph = match (highlights.contains(&square), cell) {
                (true, Cell::Empty) => '*',
                (true, Cell::Occupied(..)) => 'x',
                (false, Cell::Empty) => '·',
                (false, Cell::Occupied(color, kind)) => piece_to_unicode(color, kind),
            };
            out.push(glyph);

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn render_ansi(position: &Position, highlights: &[Square]) -> String {
    let cells = position.cells();
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        for file in 0..8u8 {
            let square = square_at(rank, file);
            let cell = cells[square as usize];
            let text = match cell.color() {
                Some(Color::White) => 0,
                _ => 1,
            };

            // a8 is a light square.
            let palette = if highlights.contains(&square) {
                &ANSI_HIGHLIGHT_SQUARE
            } else if (rank + file) % 2 == 1 {
                &ANSI_LIGHT_SQUARE
            } else {
                &ANSI_DARK_SQUARE
            };

            out.push_str(palette[text]);
            out.push(cell.fen_char().unwrap_or(' '));
            out.push(' ');
            out.push_str(ANSI_RESET);
        }

        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_board_has_labels_and_glyphs() {
        let rendered = render_position(&Position::new_game(), RenderStyle::Unicode, &[]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn highlights_mark_targets() {
        let position = Position::from_fen("4k3/8/8/3p4/4N3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let rendered = render_position(&position, RenderStyle::Unicode, &position.legal_targets(28));
        let lines: Vec<&str> = rendered.lines().collect();
        // Rank 6: d6 and f6 are knight targets.
        assert_eq!(lines[3], "6 · · · * · * · · 6");
        // c5 and g5 are targets; the d5 pawn is not.
        assert_eq!(lines[4], "5 · · * ♟ · · * · 5");
    }

    #[test]
    fn ansi_board_colors_every_square() {
        let rendered = render_position(&Position::new_game(), RenderStyle::Ansi, &[12]);
        assert_eq!(rendered.matches(ANSI_RESET).count(), 64);
        assert!(rendered.contains("\x1b[0;37;45mP "));
        assert!(rendered.starts_with("\x1b[0;30;46mr "));
        assert!(rendered.ends_with("a b c d e f g h"));
    }

    #[test]
    fn board_follows_the_cell_array() {
        let mut position = Position::new_game();
        position.make_move_algebraic("e2e4").expect("e2e4 is legal");
        assert_eq!(position.cells()[28], Cell::Occupied(Color::White, PieceKind::Pawn));

        let rendered = render_position(&position, RenderStyle::Unicode, &[]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[5], "4 · · · · ♙ · · · 4");
        assert_eq!(lines[7], "2 ♙ ♙ ♙ ♙ · ♙ ♙ ♙ 2");
    }
}
