//! Errors surfaced by the rules engine.
//!
//! `MoveRejected` covers every recoverable refusal of a move request: the
//! position is left untouched whenever one is returned. `FenError` covers
//! position setup from text. A missing king is never an error; it is how a
//! game won by capture is represented.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("the piece on {square} belongs to {owner}, who is not to move")]
    NotSideToMove { square: Square, owner: Color },

    #[error("{from} -> {to} is not a legal move")]
    IllegalDestination { from: Square, to: Square },

    /// The move is legal but promotes, and no piece kind was supplied.
    #[error("{from} -> {to} promotes and needs a promotion choice")]
    PromotionRequired { from: Square, to: Square },

    #[error("a promotion to {0:?} was supplied for a move that does not promote")]
    UnexpectedPromotion(PieceKind),

    #[error("a pawn cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),

    #[error("the game is over: {0}")]
    GameOver(GameStatus),

    #[error("a promotion choice is still pending")]
    PromotionPending,

    #[error("no promotion is pending")]
    NoPromotionPending,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN is missing the {0} field")]
    MissingField(&'static str),

    #[error("FEN has extra trailing fields")]
    TrailingFields,

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPiece(char),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character: {0}")]
    InvalidCastling(char),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid en-passant target: {0}")]
    InvalidEnPassant(String),

    #[error("invalid move counter: {0}")]
    InvalidCounter(String),
}
