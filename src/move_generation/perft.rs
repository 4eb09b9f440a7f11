//! Perft: exhaustive leaf counts of the legal move tree.
//!
//! Counts at fixed depths from well-known positions pin down every special
//! rule at once, so these numbers double as the engine's regression suite.
//! Published reference counts assume [`Rules::standard`] attack geometry.
//!
//! [`Rules::standard`]: crate::game_state::chess_rules::Rules::standard

use crate::chess_errors::MoveRejected;
use crate::game_state::chess_types::GameState;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{all_legal_moves, CandidateMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, record: &MoveRecord) {
        self.nodes += 1;
        if record.captured.is_some() {
            self.captures += 1;
        }
        if record.en_passant {
            self.en_passant += 1;
        }
        if record.castle.is_some() {
            self.castles += 1;
        }
        if record.promotion.is_some() {
            self.promotions += 1;
        }
        if record.gives_check() {
            self.checks += 1;
        }
        if record.is_checkmate() {
            self.checkmates += 1;
        }
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> Result<PerftCounts, MoveRejected> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves(game_state) {
        total.merge(perft_child(game_state, mv, depth)?);
    }
    Ok(total)
}

/// Per-root-move breakdown, for locating a miscounting branch.
pub fn perft_divide(
    game_state: &GameState,
    depth: u8,
) -> Result<Vec<(CandidateMove, PerftCounts)>, MoveRejected> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    all_legal_moves(game_state)
        .into_iter()
        .map(|mv| perft_child(game_state, mv, depth).map(|counts| (mv, counts)))
        .collect()
}

fn perft_child(
    game_state: &GameState,
    mv: CandidateMove,
    depth: u8,
) -> Result<PerftCounts, MoveRejected> {
    let mut next = apply_move(game_state, mv.from, mv.to, mv.promotion)?;

    if depth == 1 {
        let mut leaf = PerftCounts::default();
        if let Some(record) = next.history.last() {
            leaf.record_leaf(record);
        }
        return Ok(leaf);
    }

    // The log is not needed below the root and only grows the clones.
    next.history.clear();
    perft(&next, depth - 1)
}
