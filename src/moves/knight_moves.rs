use crate::game_state::chess_types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.color_at(to) != Some(color) {
            out.push(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn knight_on_d4_has_eight_targets() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3);
        board.set(d4, Some(Piece::new(PieceKind::Knight, Color::White)));

        let mut out = Vec::new();
        knight_moves(&board, d4, Color::White, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn knight_skips_friendly_squares() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        knight_moves(&board, Square::new(7, 1), Color::White, &mut out);
        out.sort();
        assert_eq!(out, vec![Square::new(5, 0), Square::new(5, 2)]);
    }
}
