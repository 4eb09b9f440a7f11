//! Square conversions for algebraic coordinates.
//!
//! Rank 8 is row 0, so `a8` is the top-left corner of the board as stored.

use crate::chess_errors::FenError;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, FenError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(FenError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(FenError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
