//! King steps and castling.
//!
//! Unlike the other generators, king destinations are filtered against the
//! attack oracle here: a step is kept only if the king would not stand on an
//! attacked square after taking it, and castling requires an unattacked path.

use crate::game_state::chess_rules::AttackRules;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_in_check, is_square_attacked};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacent on-board squares, regardless of occupancy.
#[inline]
pub fn king_steps(from: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

pub fn king_moves(
    board: &Board,
    from: Square,
    king: Piece,
    attacks: AttackRules,
    out: &mut Vec<Square>,
) {
    for to in king_steps(from) {
        if board.color_at(to) == Some(king.color) {
            continue;
        }

        let mut scratch = *board;
        scratch.set(from, None);
        scratch.set(to, Some(king.moved()));
        if !is_square_attacked(&scratch, to, king.color, attacks) {
            out.push(to);
        }
    }

    if king.has_moved || is_in_check(board, king.color, attacks) {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if can_castle(board, king.color, side, attacks) {
            out.push(Square::new(from.row, side.king_to_col()));
        }
    }
}

#[inline]
pub fn can_castle_kingside(board: &Board, color: Color, attacks: AttackRules) -> bool {
    can_castle(board, color, CastleSide::Kingside, attacks)
}

#[inline]
pub fn can_castle_queenside(board: &Board, color: Color, attacks: AttackRules) -> bool {
    can_castle(board, color, CastleSide::Queenside, attacks)
}

/// King and rook unmoved on their home squares, the squares between them
/// empty, and every square the king occupies or crosses unattacked.
pub fn can_castle(board: &Board, color: Color, side: CastleSide, attacks: AttackRules) -> bool {
    let row = color.home_row();
    let king_square = Square::new(row, 4);
    let rook_square = Square::new(row, side.rook_from_col());

    let home_piece_ready = |square: Square, kind: PieceKind| {
        matches!(
            board.get(square),
            Some(piece) if piece.kind == kind && piece.color == color && !piece.has_moved
        )
    };
    if !home_piece_ready(king_square, PieceKind::King)
        || !home_piece_ready(rook_square, PieceKind::Rook)
    {
        return false;
    }

    let (low, high) = match side {
        CastleSide::Kingside => (5, 7),
        CastleSide::Queenside => (1, 4),
    };
    if (low..high).any(|col| !board.is_empty_at(Square::new(row, col))) {
        return false;
    }

    let (path_low, path_high) = match side {
        CastleSide::Kingside => (4, 6),
        CastleSide::Queenside => (2, 4),
    };
    (path_low..=path_high)
        .all(|col| !is_square_attacked(board, Square::new(row, col), color, attacks))
}
