//! Turn-by-turn game driver.
//!
//! `Game` owns the live `GameState`, the undo stack and the promotion
//! checkpoint. Each commit builds the next state off to the side and swaps it
//! in, so callers only ever observe whole positions.

use tracing::{debug, info};

use crate::chess_errors::{FenError, MoveRejected};
use crate::game_state::chess_rules::Rules;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameStatus;
use crate::game_state::undo_state::UndoHistory;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;

/// A legal pawn move to the last rank waiting for its piece choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played; the status of the resulting position.
    Committed(GameStatus),
    /// Nothing was played yet; call [`Game::complete_promotion`].
    PromotionPending(PendingPromotion),
}

#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
    undo: UndoHistory,
    pending: Option<PendingPromotion>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self::from_state(GameState::with_rules(rules))
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_state(GameState::from_fen(fen)?))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            undo: UndoHistory::new(),
            pending: None,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending
    }

    /// Number of moves that can currently be undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo.len()
    }

    /// Legal destinations for the piece on `square`; empty while a promotion
    /// choice is outstanding.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        if self.pending.is_some() {
            return Vec::new();
        }
        legal_moves(&self.state, square)
    }

    /// Play `from -> to`. A promoting move without `promotion` parks the move
    /// at the promotion checkpoint instead of being rejected.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, MoveRejected> {
        if self.pending.is_some() {
            debug!(%from, %to, "move refused while a promotion is pending");
            return Err(MoveRejected::PromotionPending);
        }

        match self.commit(from, to, promotion) {
            Err(MoveRejected::PromotionRequired { from, to }) => {
                let pending = PendingPromotion {
                    from,
                    to,
                    color: self.state.side_to_move,
                };
                debug!(%from, %to, "awaiting promotion choice");
                self.pending = Some(pending);
                Ok(MoveOutcome::PromotionPending(pending))
            }
            other => other,
        }
    }

    pub fn complete_promotion(&mut self, kind: PieceKind) -> Result<MoveOutcome, MoveRejected> {
        let pending = self.pending.ok_or(MoveRejected::NoPromotionPending)?;
        if !kind.is_promotion_choice() {
            return Err(MoveRejected::InvalidPromotionPiece(kind));
        }

        let outcome = self.commit(pending.from, pending.to, Some(kind))?;
        self.pending = None;
        Ok(outcome)
    }

    /// Resolve the outstanding promotion with [`DEFAULT_PROMOTION`], for front
    /// ends that time out or cannot ask.
    pub fn complete_promotion_default(&mut self) -> Result<MoveOutcome, MoveRejected> {
        self.complete_promotion(DEFAULT_PROMOTION)
    }

    /// Drop the outstanding promotion; the position is unchanged.
    pub fn cancel_promotion(&mut self) -> Option<PendingPromotion> {
        self.pending.take()
    }

    /// Step back one move. A pending promotion is cancelled instead, since
    /// its move was never played. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(pending) = self.pending.take() {
            debug!(from = %pending.from, to = %pending.to, "pending promotion cancelled by undo");
            return true;
        }

        match self.undo.pop() {
            Some(frame) => {
                self.state = frame.restore();
                info!(remaining = self.undo.len(), "move undone");
                true
            }
            None => false,
        }
    }

    /// Back to the starting position, keeping the configured rules.
    pub fn restart(&mut self) {
        self.state = GameState::with_rules(self.state.rules);
        self.undo.clear();
        self.pending = None;
        info!("game restarted");
    }

    fn commit(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, MoveRejected> {
        let next = match apply_move(&self.state, from, to, promotion) {
            Ok(next) => next,
            Err(rejected) => {
                if !matches!(rejected, MoveRejected::PromotionRequired { .. }) {
                    debug!(%from, %to, reason = %rejected, "move rejected");
                }
                return Err(rejected);
            }
        };

        self.undo.push(UndoFrame::capture(&self.state));
        self.state = next;

        let status = self.state.status();
        if let Some(record) = self.state.history.last() {
            debug!(record = %record, "move committed");
        }
        if status.is_terminal() {
            info!(%status, "game over");
        }
        Ok(MoveOutcome::Committed(status))
    }
}
