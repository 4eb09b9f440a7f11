//! Plain value types shared by every part of the rules engine.
//!
//! Squares are `(row, col)` pairs where row 0 is Black's home rank and col 0
//! is the a-file. Pieces carry their kind, color and a `has_moved` flag; they
//! do not store their own location (the board cell is the location).

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoFrame;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this color's king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter used in move records and FEN.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Whether a pawn may be replaced by this kind on promotion.
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// Piece chosen when a promotion has to be resolved without the player.
pub const DEFAULT_PROMOTION: PieceKind = PieceKind::Queen;

pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }
}

/// Board coordinate. Both components are always in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Panics if either coordinate is off the board; callers pre-validate.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates must be in 0..8");
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from untrusted input.
    #[inline]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row-major index in `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index / 8) as u8, (index % 8) as u8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Column of the rook taking part in this castle.
    #[inline]
    pub const fn rook_from_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    #[inline]
    pub const fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    #[inline]
    pub const fn king_to_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Castle implied by a king moving from `from` to `to`, if any.
    #[inline]
    pub fn from_king_step(from: Square, to: Square) -> Option<Self> {
        if from.row != to.row {
            return None;
        }
        match to.col as i8 - from.col as i8 {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleSide, Color, Square};

    #[test]
    fn square_display_uses_file_and_rank() {
        assert_eq!(Square::new(7, 0).to_string(), "a1");
        assert_eq!(Square::new(0, 7).to_string(), "h8");
        assert_eq!(Square::new(6, 4).to_string(), "e2");
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = Square::new(7, 0);
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(-1, 1), Some(Square::new(6, 1)));
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert_eq!(Square::try_new(8, 0), None);
        assert_eq!(Square::try_new(3, 3), Some(Square::new(3, 3)));
    }

    #[test]
    #[should_panic]
    fn new_panics_off_board() {
        let _ = Square::new(0, 8);
    }

    #[test]
    fn castle_side_from_king_step() {
        let e1 = Square::new(7, 4);
        assert_eq!(
            CastleSide::from_king_step(e1, Square::new(7, 6)),
            Some(CastleSide::Kingside)
        );
        assert_eq!(
            CastleSide::from_king_step(e1, Square::new(7, 2)),
            Some(CastleSide::Queenside)
        );
        assert_eq!(CastleSide::from_king_step(e1, Square::new(7, 5)), None);
    }

    #[test]
    fn color_directions() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.opposite(), Color::Black);
    }
}
