//! Legal move generation.
//!
//! Every pseudo-legal destination is played on a scratch board and dropped
//! if the mover's own king is attacked afterwards. The same filter answers
//! selection queries, checkmate and stalemate detection, and perft.

use crate::game_state::chess_rules::{AttackRules, Rules};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{is_promotion_move, simulate_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::piece_moves::pseudo_legal_moves;

/// One fully specified move, promotions expanded per piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// Legal destinations for the piece on `square`. Empty when the square is
/// empty, holds a piece of the side not to move, or the game is over.
pub fn legal_moves(game_state: &GameState, square: Square) -> Vec<Square> {
    if game_state.is_terminal() {
        return Vec::new();
    }
    match game_state.board.get(square) {
        Some(piece) if piece.color == game_state.side_to_move => legal_destinations(
            &game_state.board,
            square,
            piece,
            game_state.en_passant_target,
            &game_state.rules,
        ),
        _ => Vec::new(),
    }
}

/// Destinations for `piece` on `from`, filtered for king safety unless the
/// rules turn that filter off.
pub fn legal_destinations(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
    rules: &Rules,
) -> Vec<Square> {
    if rules.enforce_king_safety {
        safe_destinations(board, from, piece, en_passant_target, rules.attacks)
    } else {
        pseudo_legal_moves(board, from, piece, en_passant_target, rules.attacks)
    }
}

/// Pseudo-legal destinations that leave the mover's king unattacked.
pub fn safe_destinations(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
    attacks: AttackRules,
) -> Vec<Square> {
    let mut moves = pseudo_legal_moves(board, from, piece, en_passant_target, attacks);
    moves.retain(|&to| {
        let after = simulate_move(board, from, to, en_passant_target);
        !is_in_check(&after, piece.color, attacks)
    });
    moves
}

/// Every legal move for the side to move, in row-major order of origin.
pub fn all_legal_moves(game_state: &GameState) -> Vec<CandidateMove> {
    let mut out = Vec::with_capacity(64);
    if game_state.is_terminal() {
        return out;
    }

    for (from, piece) in game_state.board.pieces_of(game_state.side_to_move) {
        for to in legal_destinations(
            &game_state.board,
            from,
            piece,
            game_state.en_passant_target,
            &game_state.rules,
        ) {
            if is_promotion_move(&game_state.board, from, to) {
                for kind in PROMOTION_CHOICES {
                    out.push(CandidateMove {
                        from,
                        to,
                        promotion: Some(kind),
                    });
                }
            } else {
                out.push(CandidateMove {
                    from,
                    to,
                    promotion: None,
                });
            }
        }
    }

    out
}

pub fn has_any_legal_move(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
    attacks: AttackRules,
) -> bool {
    board.pieces_of(color).any(|(from, piece)| {
        !safe_destinations(board, from, piece, en_passant_target, attacks).is_empty()
    })
}

/// In check with no move that escapes it. En-passant captures count as
/// escapes.
pub fn is_checkmate(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
    attacks: AttackRules,
) -> bool {
    is_in_check(board, color, attacks)
        && !has_any_legal_move(board, color, en_passant_target, attacks)
}

pub fn is_stalemate(
    board: &Board,
    color: Color,
    en_passant_target: Option<Square>,
    attacks: AttackRules,
) -> bool {
    !is_in_check(board, color, attacks)
        && !has_any_legal_move(board, color, en_passant_target, attacks)
}

#[cfg(test)]
mod tests {
    use super::{all_legal_moves, is_checkmate, is_stalemate, legal_moves};
    use crate::game_state::chess_rules::{AttackRules, Rules};
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_apply::simulate_move;
    use crate::move_generation::legal_move_checks::is_in_check;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn state(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn twenty_legal_moves_from_the_start() {
        assert_eq!(all_legal_moves(&GameState::new_game()).len(), 20);
    }

    #[test]
    fn selection_is_empty_for_empty_or_enemy_squares() {
        let game = GameState::new_game();
        assert!(legal_moves(&game, sq(4, 4)).is_empty());
        assert!(legal_moves(&game, sq(1, 4)).is_empty());
        assert_eq!(legal_moves(&game, sq(6, 4)).len(), 2);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // White bishop d2 pinned against the king on d1 by the rook on d8.
        let game = state("3r3k/8/8/8/8/8/3B4/3K4 w - - 0 1");
        assert!(legal_moves(&game, sq(6, 3)).is_empty());
    }

    #[test]
    fn only_check_resolving_moves_are_offered() {
        // Rook e8 checks the king on e1; the knight on c3 can only block on e2 or e4.
        let game = state("4r2k/8/8/8/8/2N5/8/4K3 w - - 0 1");
        let mut knight = legal_moves(&game, sq(5, 2));
        knight.sort();
        assert_eq!(knight, vec![sq(4, 4), sq(6, 4)]);
    }

    #[test]
    fn legal_moves_never_leave_the_king_attacked() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        for rules in [Rules::default(), Rules::standard()] {
            let game =
                GameState::from_fen_with_rules(fen, rules).expect("test FEN should parse");
            for mv in all_legal_moves(&game) {
                let after = simulate_move(&game.board, mv.from, mv.to, game.en_passant_target);
                assert!(
                    !is_in_check(&after, Color::White, rules.attacks),
                    "{} -> {} leaves the king attacked",
                    mv.from,
                    mv.to
                );
            }
        }
    }

    #[test]
    fn kingside_castle_is_offered_on_a_clear_home_rank() {
        let game = state("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(legal_moves(&game, sq(7, 4)).contains(&sq(7, 6)));
    }

    #[test]
    fn promotions_expand_to_four_candidates() {
        let game = state("8/P6k/8/8/8/8/8/4K3 w - - 0 1");
        let promotions: Vec<_> = all_legal_moves(&game)
            .into_iter()
            .filter(|mv| mv.from == sq(1, 0))
            .collect();
        assert_eq!(promotions.len(), 4);
        assert!(promotions.iter().all(|mv| mv.to == sq(0, 0)));
    }

    #[test]
    fn en_passant_capture_can_escape_checkmate() {
        // After ...b7-b5+ the only way out for the king on a4 is axb6 e.p.
        let game = state("7k/8/2p5/Pp6/K7/8/8/1rb5 w - b6 0 2");
        for attacks in [AttackRules::MOVE_SETS, AttackRules::STANDARD] {
            assert!(is_in_check(&game.board, Color::White, attacks));
            assert!(!is_checkmate(&game.board, Color::White, game.en_passant_target, attacks));
            assert!(is_checkmate(&game.board, Color::White, None, attacks));
        }

        let moves = all_legal_moves(&game);
        assert_eq!(moves.len(), 1);
        assert_eq!((moves[0].from, moves[0].to), (sq(3, 0), sq(2, 1)));
    }

    #[test]
    fn stalemate_is_recognised_but_not_checkmate() {
        // Black king h8 boxed in by the queen on g6 without being attacked.
        let game = state("7k/8/6Q1/8/8/8/8/K7 b - - 0 1");
        assert!(is_stalemate(&game.board, Color::Black, None, AttackRules::MOVE_SETS));
        assert!(!is_checkmate(&game.board, Color::Black, None, AttackRules::MOVE_SETS));
    }

    #[test]
    fn disabling_king_safety_exposes_pseudo_legal_moves() {
        let rules = Rules {
            enforce_king_safety: false,
            ..Rules::default()
        };
        let game = GameState::from_fen_with_rules("3r3k/8/8/8/8/8/3B4/3K4 w - - 0 1", rules)
            .expect("test FEN should parse");
        assert!(!legal_moves(&game, sq(6, 3)).is_empty());
    }
}
