//! Pawn pushes, captures and en-passant targets.

use crate::game_state::chess_types::*;

pub fn pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    en_passant_target: Option<Square>,
    out: &mut Vec<Square>,
) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);

            if from.row == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for to in pawn_attacks(from, color).into_iter().flatten() {
        let enemy_there = matches!(board.color_at(to), Some(owner) if owner != color);
        if enemy_there || en_passant_target == Some(to) {
            out.push(to);
        }
    }
}

/// The two forward diagonals, whether or not anything stands on them.
#[inline]
pub fn pawn_attacks(from: Square, color: Color) -> [Option<Square>; 2] {
    let forward = color.forward();
    [from.offset(forward, -1), from.offset(forward, 1)]
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
pub fn en_passant_victim(from: Square, to: Square) -> Square {
    Square::new(from.row, to.col)
}

#[cfg(test)]
mod tests {
    use super::{en_passant_victim, pawn_attacks, pawn_moves};
    use crate::game_state::chess_types::*;

    #[test]
    fn pawn_on_start_row_can_step_once_or_twice() {
        let board = Board::starting_position();
        let e2 = Square::new(6, 4);
        let mut out = Vec::new();
        pawn_moves(&board, e2, Color::White, None, &mut out);
        assert_eq!(out, vec![Square::new(5, 4), Square::new(4, 4)]);
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let mut board = Board::starting_position();
        board.set(Square::new(4, 4), Some(Piece::new(PieceKind::Knight, Color::Black)));
        let mut out = Vec::new();
        pawn_moves(&board, Square::new(6, 4), Color::White, None, &mut out);
        assert_eq!(out, vec![Square::new(5, 4)]);

        board.set(Square::new(5, 4), Some(Piece::new(PieceKind::Knight, Color::Black)));
        out.clear();
        pawn_moves(&board, Square::new(6, 4), Color::White, None, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn black_pawns_move_down_the_board() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        pawn_moves(&board, Square::new(1, 3), Color::Black, None, &mut out);
        assert_eq!(out, vec![Square::new(2, 3), Square::new(3, 3)]);
    }

    #[test]
    fn diagonal_needs_enemy_or_en_passant_target() {
        let mut board = Board::empty();
        let e5 = Square::new(3, 4);
        board.set(e5, Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(Square::new(2, 5), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(Square::new(3, 3), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let mut out = Vec::new();
        pawn_moves(&board, e5, Color::White, None, &mut out);
        assert_eq!(out, vec![Square::new(2, 4)]);

        out.clear();
        pawn_moves(&board, e5, Color::White, Some(Square::new(2, 3)), &mut out);
        assert_eq!(out, vec![Square::new(2, 4), Square::new(2, 3)]);
    }

    #[test]
    fn edge_pawn_attacks_one_square() {
        let attacks = pawn_attacks(Square::new(6, 0), Color::White);
        assert_eq!(attacks, [None, Some(Square::new(5, 1))]);
    }

    #[test]
    fn en_passant_victim_sits_beside_the_capturer() {
        let victim = en_passant_victim(Square::new(3, 4), Square::new(2, 3));
        assert_eq!(victim, Square::new(3, 3));
    }
}
