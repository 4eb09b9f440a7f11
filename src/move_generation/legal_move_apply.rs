//! Board relocation shared by simulation and commit, and the full commit
//! that turns one `GameState` into the next.

use crate::chess_errors::MoveRejected;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Outcome;
use crate::game_state::move_record::{MoveRecord, Notice};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{is_checkmate, is_stalemate, legal_moves};
use crate::moves::pawn_moves::en_passant_victim;

/// What a relocation did besides moving the piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveEffects {
    pub captured: Option<Piece>,
    pub en_passant: bool,
    pub castle: Option<CastleSide>,
}

/// Move the piece on `from` to `to`, resolving captures (including en
/// passant) and the rook hop of a castle. Both moved pieces are marked as
/// having moved. Promotion is not applied here.
pub fn relocate(
    board: &mut Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> MoveEffects {
    let Some(piece) = board.take(from) else {
        return MoveEffects::default();
    };
    let mut effects = MoveEffects::default();

    if piece.kind == PieceKind::Pawn && en_passant_target == Some(to) && board.is_empty_at(to) {
        let victim = en_passant_victim(from, to);
        let is_enemy_pawn = matches!(
            board.get(victim),
            Some(other) if other.kind == PieceKind::Pawn && other.color != piece.color
        );
        if is_enemy_pawn {
            effects.captured = board.take(victim);
            effects.en_passant = true;
        }
    }

    if let Some(taken) = board.take(to) {
        effects.captured = Some(taken);
    }
    board.set(to, Some(piece.moved()));

    if piece.kind == PieceKind::King {
        effects.castle = CastleSide::from_king_step(from, to);
        if let Some(side) = effects.castle {
            let rook_from = Square::new(from.row, side.rook_from_col());
            let rook_to = Square::new(from.row, side.rook_to_col());
            let rook = board.take(rook_from);
            board.set(rook_to, rook.map(Piece::moved));
        }
    }

    effects
}

/// Scratch copy of `board` with the move played on it.
#[inline]
pub fn simulate_move(
    board: &Board,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> Board {
    let mut scratch = *board;
    relocate(&mut scratch, from, to, en_passant_target);
    scratch
}

/// Whether moving the piece on `from` to `to` lands a pawn on its last rank.
#[inline]
pub fn is_promotion_move(board: &Board, from: Square, to: Square) -> bool {
    matches!(
        board.get(from),
        Some(piece) if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row()
    )
}

/// Validate and play one move, returning the resulting state.
///
/// The input state is never modified. A legal promoting move without a
/// `promotion` choice is refused with [`MoveRejected::PromotionRequired`].
pub fn apply_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<GameState, MoveRejected> {
    if game_state.is_terminal() {
        return Err(MoveRejected::GameOver(game_state.status()));
    }

    let piece = game_state
        .board
        .get(from)
        .ok_or(MoveRejected::EmptySquare(from))?;
    if piece.color != game_state.side_to_move {
        return Err(MoveRejected::NotSideToMove {
            square: from,
            owner: piece.color,
        });
    }
    if !legal_moves(game_state, from).contains(&to) {
        return Err(MoveRejected::IllegalDestination { from, to });
    }

    let promotes = is_promotion_move(&game_state.board, from, to);
    match (promotes, promotion) {
        (true, None) => return Err(MoveRejected::PromotionRequired { from, to }),
        (false, Some(kind)) => return Err(MoveRejected::UnexpectedPromotion(kind)),
        (true, Some(kind)) if !kind.is_promotion_choice() => {
            return Err(MoveRejected::InvalidPromotionPiece(kind))
        }
        _ => {}
    }

    let mover = piece.color;
    let mut next = game_state.clone();
    let effects = relocate(&mut next.board, from, to, game_state.en_passant_target);

    if let Some(kind) = promotion {
        next.board.set(to, Some(Piece::new(kind, mover).moved()));
    }

    if let Some(captured) = effects.captured {
        match captured.color {
            Color::White => next.captured_white.push(captured.kind),
            Color::Black => next.captured_black.push(captured.kind),
        }
    }

    next.en_passant_target = if piece.kind == PieceKind::Pawn && from.row.abs_diff(to.row) == 2 {
        Some(Square::new((from.row + to.row) / 2, from.col))
    } else {
        None
    };

    let mut record = MoveRecord {
        number: game_state.fullmove_number,
        side: mover,
        kind: piece.kind,
        from,
        to,
        captured: effects.captured.map(|p| p.kind),
        promotion,
        castle: effects.castle,
        en_passant: effects.en_passant,
        notices: Vec::new(),
    };

    if mover == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.outcome = evaluate_outcome(&next, mover, &mut record.notices);
    if next.outcome.is_none() {
        next.side_to_move = mover.opposite();
    }
    next.history.push(record);

    Ok(next)
}

/// Win by capture first, then check, then checkmate (and stalemate when the
/// rules ask for it). Notices are appended in that order.
fn evaluate_outcome(next: &GameState, mover: Color, notices: &mut Vec<Notice>) -> Option<Outcome> {
    let white_king = next.board.find_king(Color::White);
    let black_king = next.board.find_king(Color::Black);
    let captured_winner = match (white_king, black_king) {
        (None, _) => Some(Color::Black),
        (_, None) => Some(Color::White),
        _ => None,
    };
    if let Some(winner) = captured_winner {
        notices.push(Notice::KingCaptured { winner });
        return Some(Outcome::KingCaptured { winner });
    }

    let opponent = mover.opposite();
    let board = &next.board;
    let ep = next.en_passant_target;
    let attacks = next.rules.attacks;

    if is_in_check(board, opponent, attacks) {
        notices.push(Notice::Check(opponent));
    }
    if is_checkmate(board, opponent, ep, attacks) {
        notices.push(Notice::Checkmate { winner: mover });
        return Some(Outcome::Checkmate { winner: mover });
    }
    if next.rules.declare_stalemate && is_stalemate(board, opponent, ep, attacks) {
        notices.push(Notice::Stalemate(opponent));
        return Some(Outcome::Stalemate {
            stalemated: opponent,
        });
    }

    None
}
