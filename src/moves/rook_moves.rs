//! Rook move generation and the shared ray walker used by every slider.

use crate::game_state::chess_types::*;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in ROOK_DIRECTIONS {
        trace_ray(board, from, color, d_row, d_col, out);
    }
}

/// Walk from `from` in one direction. Empty squares are pushed, an enemy
/// blocker is pushed and ends the ray, a friendly blocker ends it unpushed.
pub fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<Square>,
) {
    let mut cursor = from.offset(d_row, d_col);
    while let Some(square) = cursor {
        match board.color_at(square) {
            None => out.push(square),
            Some(owner) => {
                if owner != color {
                    out.push(square);
                }
                break;
            }
        }
        cursor = square.offset(d_row, d_col);
    }
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_on_empty_board_reaches_fourteen_squares() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3);
        board.set(d4, Some(Piece::new(PieceKind::Rook, Color::White)));

        let mut out = Vec::new();
        rook_moves(&board, d4, Color::White, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn blockers_stop_the_ray() {
        let mut board = Board::empty();
        let a1 = Square::new(7, 0);
        board.set(a1, Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(Square::new(4, 0), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        board.set(Square::new(7, 2), Some(Piece::new(PieceKind::Knight, Color::White)));

        let mut out = Vec::new();
        rook_moves(&board, a1, Color::White, &mut out);

        assert!(out.contains(&Square::new(4, 0)), "enemy blocker is capturable");
        assert!(!out.contains(&Square::new(3, 0)), "ray stops at the enemy");
        assert!(out.contains(&Square::new(7, 1)));
        assert!(!out.contains(&Square::new(7, 2)), "friendly blocker is excluded");
        assert_eq!(out.len(), 4);
    }
}
