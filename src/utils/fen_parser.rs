//! FEN-to-GameState parser.
//!
//! Pieces do not store castling rights directly, so the castling field is
//! folded into the `has_moved` flags of kings and rooks on their home squares.
//! The halfmove clock is validated and otherwise ignored.

use crate::chess_errors::FenError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CastlingField {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl CastlingField {
    fn allows(self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.white_kingside,
            (Color::White, CastleSide::Queenside) => self.white_queenside,
            (Color::Black, CastleSide::Kingside) => self.black_kingside,
            (Color::Black, CastleSide::Queenside) => self.black_queenside,
        }
    }
}

/// Parse a full FEN record. The halfmove and fullmove counters may be
/// omitted; the fullmove number then defaults to 1 and is never below 1.
pub fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side-to-move"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en-passant square"))?;
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    let mut game_state = GameState::new_empty();

    game_state.board = parse_board_placement(board_part)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    let castling = parse_castling_rights(castling_part)?;
    apply_castling_rights(&mut game_state.board, castling);
    game_state.en_passant_target =
        parse_en_passant_square(en_passant_part, &game_state.board, game_state.side_to_move)?;

    if let Some(halfmove) = halfmove_part {
        halfmove
            .parse::<u16>()
            .map_err(|_| FenError::InvalidCounter(halfmove.to_owned()))?;
    }
    if let Some(fullmove) = fullmove_part {
        // Some published test positions write a fullmove number of 0.
        game_state.fullmove_number = fullmove
            .parse::<u16>()
            .map_err(|_| FenError::InvalidCounter(fullmove.to_owned()))?
            .max(1);
    }

    Ok(game_state)
}

/// Parse only the piece-placement field. Every piece is marked unmoved.
pub fn parse_board_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - row;
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::RankWidth { rank });
                }
                col += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
            if col >= 8 {
                return Err(FenError::RankWidth { rank });
            }

            board.set(Square::new(row as u8, col as u8), Some(Piece::new(kind, color)));
            col += 1;
        }

        if col != 8 {
            return Err(FenError::RankWidth { rank });
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingField, FenError> {
    let mut rights = CastlingField::default();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(FenError::InvalidCastling(ch)),
        }
    }

    Ok(rights)
}

/// Kings and rooks count as unmoved only where a castling right keeps them
/// so. A king keeps its flag if either side is still available.
fn apply_castling_rights(board: &mut Board, castling: CastlingField) {
    let home_king = |color: Color| Square::new(color.home_row(), 4);
    let home_rook =
        |color: Color, side: CastleSide| Square::new(color.home_row(), side.rook_from_col());

    let placed: Vec<(Square, Piece)> = board.all_pieces().collect();
    for (square, piece) in placed {
        let unmoved = match piece.kind {
            PieceKind::King if square == home_king(piece.color) => {
                castling.allows(piece.color, CastleSide::Kingside)
                    || castling.allows(piece.color, CastleSide::Queenside)
            }
            PieceKind::King => false,
            PieceKind::Rook => [CastleSide::Kingside, CastleSide::Queenside]
                .into_iter()
                .any(|side| {
                    square == home_rook(piece.color, side) && castling.allows(piece.color, side)
                }),
            _ => true,
        };
        if !unmoved {
            board.set(square, Some(piece.moved()));
        }
    }
}

/// The target must be the empty square a pawn of the side not to move just
/// skipped, with that pawn standing right behind it.
fn parse_en_passant_square(
    en_passant_part: &str,
    board: &Board,
    side_to_move: Color,
) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let expected_row = match side_to_move {
        Color::White => 2,
        Color::Black => 5,
    };
    let pushed_pawn = target
        .offset(-side_to_move.forward(), 0)
        .and_then(|square| board.get(square));
    let victim_ok = matches!(
        pushed_pawn,
        Some(piece) if piece.kind == PieceKind::Pawn && piece.color != side_to_move
    );

    if target.row != expected_row || !board.is_empty_at(target) || !victim_ok {
        return Err(FenError::InvalidEnPassant(en_passant_part.to_owned()));
    }
    Ok(Some(target))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}
