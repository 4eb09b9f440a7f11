//! Attack and check queries.
//!
//! These never generate king moves, so king move generation may call them
//! freely. How the attacking king and pawns contribute is chosen by
//! [`AttackRules`].

use crate::game_state::chess_rules::{AttackRules, KingReach, PawnReach};
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_steps;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::{pawn_attacks, pawn_moves};
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// False when `color` has no king on the board.
#[inline]
pub fn is_in_check(board: &Board, color: Color, attacks: AttackRules) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color, attacks)
}

/// Whether any piece of `defender`'s opponent attacks `square`.
pub fn is_square_attacked(
    board: &Board,
    square: Square,
    defender: Color,
    attacks: AttackRules,
) -> bool {
    board
        .pieces_of(defender.opposite())
        .any(|(from, piece)| attacks_square(board, from, piece, square, attacks))
}

fn attacks_square(
    board: &Board,
    from: Square,
    piece: Piece,
    target: Square,
    attacks: AttackRules,
) -> bool {
    let mut reach = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => match attacks.pawn_reach {
            PawnReach::Diagonals => return pawn_attacks(from, piece.color).contains(&Some(target)),
            // En-passant captures never land on an occupied square.
            PawnReach::Moves => pawn_moves(board, from, piece.color, None, &mut reach),
        },
        PieceKind::King => {
            return match attacks.king_reach {
                KingReach::Excluded => false,
                KingReach::Adjacent => king_steps(from).any(|sq| sq == target),
            }
        }
        PieceKind::Knight => knight_moves(board, from, piece.color, &mut reach),
        PieceKind::Bishop => bishop_moves(board, from, piece.color, &mut reach),
        PieceKind::Rook => rook_moves(board, from, piece.color, &mut reach),
        PieceKind::Queen => queen_moves(board, from, piece.color, &mut reach),
    }
    reach.contains(&target)
}

#[cfg(test)]
mod tests {
    use super::{is_in_check, is_square_attacked};
    use crate::game_state::chess_rules::AttackRules;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_board_placement;

    fn board(placement: &str) -> Board {
        parse_board_placement(placement).expect("test placement should parse")
    }

    #[test]
    fn nothing_is_in_check_at_the_start() {
        let board = Board::starting_position();
        for attacks in [AttackRules::MOVE_SETS, AttackRules::STANDARD] {
            assert!(!is_in_check(&board, Color::White, attacks));
            assert!(!is_in_check(&board, Color::Black, attacks));
        }
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = board("8/8/8/8/8/8/8/R6K");
        assert!(!is_in_check(&board, Color::Black, AttackRules::MOVE_SETS));
    }

    #[test]
    fn standard_pawns_attack_diagonals_not_pushes() {
        let board = board("4k3/8/8/8/8/8/4P3/4K3");
        let e3 = Square::new(5, 4);
        let d3 = Square::new(5, 3);
        let f3 = Square::new(5, 5);
        assert!(!is_square_attacked(&board, e3, Color::Black, AttackRules::STANDARD));
        assert!(is_square_attacked(&board, d3, Color::Black, AttackRules::STANDARD));
        assert!(is_square_attacked(&board, f3, Color::Black, AttackRules::STANDARD));
    }

    #[test]
    fn move_set_pawns_attack_pushes_and_occupied_diagonals() {
        let board = board("4k3/8/8/8/8/3n4/4P3/4K3");
        let e3 = Square::new(5, 4);
        let e4 = Square::new(4, 4);
        let d3 = Square::new(5, 3);
        let f3 = Square::new(5, 5);
        assert!(is_square_attacked(&board, e3, Color::Black, AttackRules::MOVE_SETS));
        assert!(is_square_attacked(&board, e4, Color::Black, AttackRules::MOVE_SETS));
        assert!(is_square_attacked(&board, d3, Color::Black, AttackRules::MOVE_SETS));
        assert!(!is_square_attacked(&board, f3, Color::Black, AttackRules::MOVE_SETS));
    }

    #[test]
    fn pawn_diagonal_checks_under_both_models() {
        let board = board("8/8/8/8/8/3k4/4P3/4K3");
        for attacks in [AttackRules::MOVE_SETS, AttackRules::STANDARD] {
            assert!(is_in_check(&board, Color::Black, attacks));
        }
    }

    #[test]
    fn sliders_are_blocked() {
        let board = board("4k3/8/8/8/4p3/8/8/4R2K");
        let e4 = Square::new(4, 4);
        let e5 = Square::new(3, 4);
        assert!(is_square_attacked(&board, e4, Color::Black, AttackRules::MOVE_SETS));
        assert!(!is_square_attacked(&board, e5, Color::Black, AttackRules::MOVE_SETS));
    }

    #[test]
    fn king_reach_controls_king_contribution() {
        let board = board("8/8/8/3k4/8/8/8/7K");
        let d4 = Square::new(4, 3);
        assert!(is_square_attacked(&board, d4, Color::White, AttackRules::STANDARD));
        assert!(!is_square_attacked(&board, d4, Color::White, AttackRules::MOVE_SETS));
    }

    #[test]
    fn knight_and_rook_both_check() {
        // Black king e8 attacked by the rook on e1 and the knight on d6.
        let both = board("4k3/8/3N4/8/8/8/8/4R2K");
        assert!(is_in_check(&both, Color::Black, AttackRules::MOVE_SETS));

        let without_rook = board("4k3/8/3N4/8/8/8/8/7K");
        assert!(is_in_check(&without_rook, Color::Black, AttackRules::MOVE_SETS));
    }
}
