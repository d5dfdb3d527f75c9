//! FEN-to-Position parser.
//!
//! Builds a fully populated `Position` (cells, rights, clocks, king cache and
//! legal-move cache) from a Forsyth-Edwards Notation string. The default is
//! permissive: it accepts the 4-field legacy form and tolerates structural
//! sloppiness in the board field. `FenOptions { strict: true }` rejects it.

use crate::board::chess_types::*;
use crate::board::position::Position;
use crate::errors::ParseError;
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FenOptions {
    /// Require 8 ranks of exactly 8 files, one king per color, `KQkq`-only
    /// castling letters, and exactly 4 or 6 fields.
    pub strict: bool,
}

impl FenOptions {
    pub const STRICT: Self = Self { strict: true };
}

pub fn parse_fen(fen: &str) -> Result<Position, ParseError> {
    parse_fen_with(fen, FenOptions::default())
}

pub fn parse_fen_with(fen: &str, options: FenOptions) -> Result<Position, ParseError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();

    let board_part = *fields.first().ok_or(ParseError::MissingField("board layout"))?;
    let side_part = *fields.get(1).ok_or(ParseError::MissingField("side to move"))?;
    let castling_part = *fields.get(2).ok_or(ParseError::MissingField("castling rights"))?;
    let en_passant_part = *fields.get(3).ok_or(ParseError::MissingField("en-passant square"))?;

    if options.strict {
        match fields.len() {
            4 | 6 => {}
            5 => return Err(ParseError::MissingField("fullmove number")),
            _ => return Err(ParseError::ExtraFields),
        }
    }

    let mut position = Position::new_empty();

    parse_board(board_part, options, &mut position)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.castling_rights = parse_castling_rights(castling_part, options)?;
    position.en_passant_square = parse_en_passant_square(en_passant_part)?;
    position.halfmove_clock = parse_counter(fields.get(4).copied(), "halfmove clock", 0)?;
    position.fullmove_number = parse_counter(fields.get(5).copied(), "fullmove number", 1)?;

    position.finish_setup();
    Ok(position)
}

fn parse_board(board_part: &str, options: FenOptions, position: &mut Position) -> Result<(), ParseError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if options.strict && ranks.len() != 8 {
        return Err(ParseError::MalformedBoard(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut king_counts = [0usize; 2];

    // Ranks beyond the eighth are ignored in permissive mode.
    for (fen_rank_idx, rank_str) in ranks.iter().take(8).enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u32;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if options.strict && !(1..=8).contains(&empty_count) {
                    return Err(ParseError::MalformedBoard(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count;
                continue;
            }

            let cell = Cell::from_fen_char(ch).ok_or(ParseError::InvalidFenToken(ch))?;

            if file < 8 {
                if let Cell::Occupied(color, PieceKind::King) = cell {
                    king_counts[color.index()] += 1;
                }
                position.put(square_at(rank, file as u8), cell);
            } else if options.strict {
                return Err(ParseError::MalformedBoard(format!(
                    "rank {} has more than 8 files",
                    rank + 1
                )));
            }
            file += 1;
        }

        if options.strict && file != 8 {
            return Err(ParseError::MalformedBoard(format!(
                "rank {} spans {file} files",
                rank + 1
            )));
        }
    }

    for color in [Color::White, Color::Black] {
        match king_counts[color.index()] {
            0 => return Err(ParseError::MissingKing(color)),
            1 => {}
            _ if options.strict => {
                return Err(ParseError::MalformedBoard(format!("more than one {color:?} king")))
            }
            _ => {}
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ParseError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ParseError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str, options: FenOptions) -> Result<CastlingRights, ParseError> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ if options.strict => return Err(ParseError::InvalidCastling(ch)),
            _ => {}
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ParseError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

fn parse_counter(part: Option<&str>, field: &'static str, default: u32) -> Result<u32, ParseError> {
    let Some(part) = part else {
        return Ok(default);
    };
    part.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
        field,
        value: part.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::render_position::{render_position, RenderStyle};

    #[test]
    fn parse_starting_fen_and_render_board() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_position(&position, RenderStyle::Unicode, &[]));

        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.cell(3), Cell::Occupied(Color::White, PieceKind::Queen));
        assert_eq!(position.cell(59), Cell::Occupied(Color::Black, PieceKind::Queen));
        assert_eq!(position.legal_moves().len(), 20);
    }

    #[test]
    fn legacy_four_field_form_defaults_the_clocks() {
        let position =
            parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3").expect("4-field FEN should parse");
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(position.en_passant_square(), Some(20));
        assert_eq!(position.side_to_move(), Color::Black);

        assert!(parse_fen_with("4k3/8/8/8/8/8/8/4K3 w - -", FenOptions::STRICT).is_ok());
    }

    #[test]
    fn unrepresentable_input_is_rejected() {
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w -").map(|_| ()),
            Err(ParseError::MissingField("en-passant square"))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/8 w - - 0 1").map(|_| ()),
            Err(ParseError::MissingKing(Color::White))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1").map(|_| ()),
            Err(ParseError::InvalidFenToken('X'))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").map(|_| ()),
            Err(ParseError::InvalidSideToMove("x".to_owned()))
        );
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
            Err(ParseError::InvalidNumber { field: "halfmove clock", .. })
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - e9 0 1"),
            Err(ParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn permissive_mode_tolerates_sloppy_layouts() {
        // Short rank, overlong rank, unknown castling letter, trailing junk.
        let position = parse_fen("4k3/8/8/8/8/8/PPPPPPPPPP/4K2 w KX - 0 1 extra")
            .expect("permissive FEN should parse");
        assert_eq!(position.cell(15), Cell::Occupied(Color::White, PieceKind::Pawn));
        assert!(position.castling_rights().white_kingside);
        assert!(!position.castling_rights().white_queenside);
    }

    #[test]
    fn strict_mode_rejects_sloppy_layouts() {
        let strict = FenOptions::STRICT;
        assert!(matches!(
            parse_fen_with("4k3/8/8/8/8/8/4K3 w - - 0 1", strict),
            Err(ParseError::MalformedBoard(_))
        ));
        assert!(matches!(
            parse_fen_with("4k3/8/8/8/8/8/8/4K2 w - - 0 1", strict),
            Err(ParseError::MalformedBoard(_))
        ));
        assert!(matches!(
            parse_fen_with("4k3/8/8/8/8/8/8/3KK3 w - - 0 1", strict),
            Err(ParseError::MalformedBoard(_))
        ));
        assert_eq!(
            parse_fen_with("4k3/8/8/8/8/8/8/4K3 w KX - 0 1", strict).map(|_| ()),
            Err(ParseError::InvalidCastling('X'))
        );
        assert_eq!(
            parse_fen_with("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra", strict).map(|_| ()),
            Err(ParseError::ExtraFields)
        );
    }
}
