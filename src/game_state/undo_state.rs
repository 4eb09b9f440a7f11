//! Snapshot-based undo stack.

use crate::game_state::game_state::GameState;

/// Full copy of the game state taken immediately before a move is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoFrame {
    pub state: GameState,
}

impl UndoFrame {
    #[inline]
    pub fn capture(state: &GameState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// The saved state, always playable: any terminal outcome is cleared.
    #[inline]
    pub fn restore(self) -> GameState {
        let mut state = self.state;
        state.outcome = None;
        state
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoHistory {
    frames: Vec<UndoFrame>,
}

impl UndoHistory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, frame: UndoFrame) {
        self.frames.push(frame);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<UndoFrame> {
        self.frames.pop()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
