use crate::board::chess_types::*;
use crate::board::position::Position;
use crate::utils::algebraic::square_to_algebraic;

/// How the en-passant field is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnPassantExport {
    /// Write the target whenever one is set, even if no pawn can capture
    /// there. Matches the historical output used by golden tests.
    #[default]
    Always,
    /// Write the target only when the side to move has a legal en-passant
    /// capture onto it.
    OnlyWhenCapturable,
}

pub fn generate_fen(position: &Position) -> String {
    generate_fen_with(position, EnPassantExport::default())
}

pub fn generate_fen_with(position: &Position, en_passant: EnPassantExport) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights());
    let en_passant = generate_en_passant_field(position, en_passant);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        position.halfmove_clock(),
        position.fullmove_number()
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            if let Some(ch) = position.cell(square_at(rank, file)).fen_char() {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(ch);
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights.white_kingside {
        out.push('K');
    }
    if rights.white_queenside {
        out.push('Q');
    }
    if rights.black_kingside {
        out.push('k');
    }
    if rights.black_queenside {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(position: &Position, mode: EnPassantExport) -> String {
    let Some(square) = position.en_passant_square() else {
        return "-".to_owned();
    };

    if mode == EnPassantExport::OnlyWhenCapturable && !has_en_passant_capture(position, square) {
        return "-".to_owned();
    }

    square_to_algebraic(square).unwrap_or_else(|_| "-".to_owned())
}

fn has_en_passant_capture(position: &Position, target: Square) -> bool {
    position.legal_moves().iter().any(|&(from, to)| {
        to == target && position.cell(from).piece() == Some(PieceKind::Pawn) && file_of(from) != file_of(to)
    })
}
