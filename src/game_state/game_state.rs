//! Complete position plus the bookkeeping a game carries between moves.
//!
//! `GameState` is a plain value: cloning it yields an independent snapshot,
//! which is what undo frames and move simulation rely on.

use std::fmt;

use crate::chess_errors::FenError;
use crate::game_state::chess_rules::{Rules, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Why a game stopped accepting moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    KingCaptured { winner: Color },
    Checkmate { winner: Color },
    Stalemate { stalemated: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    InCheck(Color),
    WonByCapture(Color),
    WonByCheckmate(Color),
    /// Only reported when [`Rules::declare_stalemate`] is on.
    Stalemate(Color),
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::WonByCapture(_) | GameStatus::WonByCheckmate(_) | GameStatus::Stalemate(_)
        )
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::WonByCapture(color) | GameStatus::WonByCheckmate(color) => Some(color),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::InCheck(color) => write!(f, "{color} is in check"),
            GameStatus::WonByCapture(color) => write!(f, "{color} won by capturing the king"),
            GameStatus::WonByCheckmate(color) => write!(f, "{color} won by checkmate"),
            GameStatus::Stalemate(color) => write!(f, "{color} is stalemated"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub en_passant_target: Option<Square>,
    pub fullmove_number: u16,

    pub history: Vec<MoveRecord>,
    /// White pieces taken by Black.
    pub captured_white: Vec<PieceKind>,
    /// Black pieces taken by White.
    pub captured_black: Vec<PieceKind>,

    pub outcome: Option<Outcome>,
    pub rules: Rules,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Empty board, White to move. Useful for composing test positions.
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            board: Board::empty(),
            ..Self::new_game()
        }
    }

    pub fn new_game() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Color::White,
            en_passant_target: None,
            fullmove_number: 1,
            history: Vec::new(),
            captured_white: Vec::new(),
            captured_black: Vec::new(),
            outcome: None,
            rules,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    pub fn from_fen_with_rules(fen: &str, rules: Rules) -> Result<Self, FenError> {
        let mut state = parse_fen(fen)?;
        state.rules = rules;
        Ok(state)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn is_starting_position(&self) -> bool {
        self.get_fen() == STARTING_POSITION_FEN
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome {
            Some(Outcome::KingCaptured { winner }) => GameStatus::WonByCapture(winner),
            Some(Outcome::Checkmate { winner }) => GameStatus::WonByCheckmate(winner),
            Some(Outcome::Stalemate { stalemated }) => GameStatus::Stalemate(stalemated),
            None if is_in_check(&self.board, self.side_to_move, self.rules.attacks) => {
                GameStatus::InCheck(self.side_to_move)
            }
            None => GameStatus::Ongoing,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        legal_moves(self, square)
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, GameStatus, Outcome};
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_is_the_canonical_start() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move, Color::White);
        assert_eq!(game.en_passant_target, None);
        assert!(game.history.is_empty());
        assert!(game.captured_white.is_empty() && game.captured_black.is_empty());
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert!(game.is_starting_position());
    }

    #[test]
    fn status_reports_check_for_the_side_to_move() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4R2K b - - 0 1")
            .expect("test FEN should parse");
        assert_eq!(game.status(), GameStatus::InCheck(Color::Black));
    }

    #[test]
    fn outcome_takes_priority_over_check() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/4R2K b - - 0 1")
            .expect("test FEN should parse");
        game.outcome = Some(Outcome::Checkmate {
            winner: Color::White,
        });
        assert_eq!(game.status(), GameStatus::WonByCheckmate(Color::White));
        assert!(game.status().is_terminal());
        assert_eq!(game.status().winner(), Some(Color::White));
    }

    #[test]
    fn clones_are_independent_snapshots() {
        let game = GameState::new_game();
        let mut copy = game.clone();
        copy.board.set(Square::new(6, 4), None);
        copy.captured_white.push(PieceKind::Pawn);
        assert!(game.board.get(Square::new(6, 4)).is_some());
        assert!(game.captured_white.is_empty());
    }
}
