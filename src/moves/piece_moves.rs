//! Per-kind dispatch for pseudo-legal destination generation.

use crate::game_state::chess_rules::AttackRules;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Destinations for `piece` standing on `from`, ignoring the safety of the
/// mover's own king (king steps and castling excepted).
pub fn pseudo_legal_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
    attacks: AttackRules,
) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, en_passant_target, &mut out),
        PieceKind::Knight => knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => king_moves(board, from, piece, attacks, &mut out),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::game_state::chess_rules::AttackRules;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_has_twenty_pseudo_legal_moves_for_white() {
        let board = Board::starting_position();
        let total: usize = board
            .pieces_of(Color::White)
            .map(|(sq, piece)| {
                pseudo_legal_moves(&board, sq, piece, None, AttackRules::STANDARD).len()
            })
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn pseudo_legal_moves_ignore_pins() {
        // White bishop d2 is pinned by the rook on d8 against the king on d1.
        let mut board = Board::empty();
        board.set(Square::new(7, 3), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(Square::new(6, 3), Some(Piece::new(PieceKind::Bishop, Color::White)));
        board.set(Square::new(0, 3), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set(Square::new(0, 7), Some(Piece::new(PieceKind::King, Color::Black)));

        let bishop = board.get(Square::new(6, 3)).expect("bishop should be on d2");
        let moves =
            pseudo_legal_moves(&board, Square::new(6, 3), bishop, None, AttackRules::STANDARD);
        assert!(!moves.is_empty());
    }
}
