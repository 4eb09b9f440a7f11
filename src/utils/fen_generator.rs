//! GameState-to-FEN generator.
//!
//! Castling rights are read back from unmoved kings and rooks on their home
//! squares. No halfmove clock is tracked, so that field is always `0`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(&game_state.board);
    let en_passant = game_state
        .en_passant_target
        .map_or_else(|| "-".to_owned(), square_to_algebraic);

    format!(
        "{} {} {} {} 0 {}",
        board, side_to_move, castling, en_passant, game_state.fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            if let Some(piece) = board.get(Square::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    match piece.color {
        Color::White => piece.kind.letter(),
        Color::Black => piece.kind.letter().to_ascii_lowercase(),
    }
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();

    for color in [Color::White, Color::Black] {
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            if castling_available(board, color, side) {
                let letter = match side {
                    CastleSide::Kingside => 'k',
                    CastleSide::Queenside => 'q',
                };
                out.push(match color {
                    Color::White => letter.to_ascii_uppercase(),
                    Color::Black => letter,
                });
            }
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn castling_available(board: &Board, color: Color, side: CastleSide) -> bool {
    let row = color.home_row();
    let unmoved = |square: Square, kind: PieceKind| {
        board
            .get(square)
            .is_some_and(|piece| piece.kind == kind && piece.color == color && !piece.has_moved)
    };

    unmoved(Square::new(row, 4), PieceKind::King)
        && unmoved(Square::new(row, side.rook_from_col()), PieceKind::Rook)
}
