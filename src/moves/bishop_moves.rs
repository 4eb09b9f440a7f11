use crate::game_state::chess_types::*;
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in BISHOP_DIRECTIONS {
        trace_ray(board, from, color, d_row, d_col, out);
    }
}
