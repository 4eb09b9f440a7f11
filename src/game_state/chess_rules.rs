//! Canonical chess-rule constants and the switches that tune rule behaviour.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// How the attacking side's king contributes to attack queries.
///
/// King move generation asks whether squares are attacked, so attack queries
/// must never generate king moves themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KingReach {
    /// The attacking king never counts. Kings may then stand side by side.
    #[default]
    Excluded,
    /// The attacking king covers its eight neighbours (geometry only).
    Adjacent,
}

/// Which squares an attacking pawn covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PawnReach {
    /// The pawn's own pseudo-legal destinations: push squares, and diagonals
    /// only where an enemy piece stands.
    #[default]
    Moves,
    /// Both forward diagonals, occupied or not; pushes never attack.
    Diagonals,
}

/// Attack model threaded through every attack and check query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttackRules {
    pub king_reach: KingReach,
    pub pawn_reach: PawnReach,
}

impl AttackRules {
    /// A square is attacked when it is in an opposing piece's move set,
    /// leaving the opposing king out.
    pub const MOVE_SETS: Self = Self {
        king_reach: KingReach::Excluded,
        pawn_reach: PawnReach::Moves,
    };

    /// Tournament chess attack geometry.
    pub const STANDARD: Self = Self {
        king_reach: KingReach::Adjacent,
        pawn_reach: PawnReach::Diagonals,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    pub attacks: AttackRules,
    /// Drop pseudo-legal moves that leave the mover's king attacked.
    /// With this off, kings can be captured and the game ends on capture.
    pub enforce_king_safety: bool,
    /// End the game when the side to move has no legal move and is not in check.
    pub declare_stalemate: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            attacks: AttackRules::MOVE_SETS,
            enforce_king_safety: true,
            declare_stalemate: false,
        }
    }
}

impl Rules {
    /// Default rules with [`AttackRules::STANDARD`]; the rule set perft
    /// reference counts are published for.
    pub fn standard() -> Self {
        Self {
            attacks: AttackRules::STANDARD,
            ..Self::default()
        }
    }
}
