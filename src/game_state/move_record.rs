//! Human-readable move log entries.

use std::fmt;

use crate::game_state::chess_types::*;

/// Annotation appended to a move after the resulting position is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    Check(Color),
    Checkmate { winner: Color },
    KingCaptured { winner: Color },
    Stalemate(Color),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Check(color) => write!(f, "{color} is in check"),
            Notice::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Notice::KingCaptured { winner } => write!(f, "{winner} wins by capturing the king"),
            Notice::Stalemate(color) => write!(f, "{color} is stalemated"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub number: u16,
    pub side: Color,
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
    pub en_passant: bool,
    pub notices: Vec<Notice>,
}

impl MoveRecord {
    #[inline]
    pub fn gives_check(&self) -> bool {
        self.notices.iter().any(|n| matches!(n, Notice::Check(_)))
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.notices
            .iter()
            .any(|n| matches!(n, Notice::Checkmate { .. }))
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}: {} {} -> {}",
            self.number,
            self.side,
            self.kind.letter(),
            self.from,
            self.to
        )?;
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.letter())?;
        }
        if self.en_passant {
            write!(f, " e.p.")?;
        }
        if let Some(promotion) = self.promotion {
            write!(f, " ={}", promotion.letter())?;
        }
        match self.castle {
            Some(CastleSide::Kingside) => write!(f, " (O-O)")?,
            Some(CastleSide::Queenside) => write!(f, " (O-O-O)")?,
            None => {}
        }
        for notice in &self.notices {
            write!(f, "; {notice}")?;
        }
        Ok(())
    }
}
