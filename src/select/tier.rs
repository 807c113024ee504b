//! Priority tiers of the move policy

use std::fmt;

use shakmaty::{Chess, Move, Position, Role};

use crate::error::EngineError;

/// Rungs of the move ladder.
///
/// Variants are declared from weakest to strongest so the derived `Ord`
/// reads naturally: `MateNow > GivesCheck > CaptureQueen > ... > Random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriorityTier {
    /// Arbitrary legal move, only used when the clock is nearly gone.
    Random,
    BestEvaluated,
    CapturePawn,
    CaptureKnight,
    CaptureBishop,
    CaptureRook,
    CaptureQueen,
    GivesCheck,
    MateNow,
}

impl PriorityTier {
    /// Tier for capturing a piece of the given role, if captures of it rank.
    pub fn for_capture(victim: Role) -> Option<PriorityTier> {
        match victim {
            Role::Queen => Some(PriorityTier::CaptureQueen),
            Role::Rook => Some(PriorityTier::CaptureRook),
            Role::Bishop => Some(PriorityTier::CaptureBishop),
            Role::Knight => Some(PriorityTier::CaptureKnight),
            Role::Pawn => Some(PriorityTier::CapturePawn),
            Role::King => None,
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PriorityTier::MateNow => "MateNow",
            PriorityTier::GivesCheck => "GivesCheck",
            PriorityTier::CaptureQueen => "CaptureQueen",
            PriorityTier::CaptureRook => "CaptureRook",
            PriorityTier::CaptureBishop => "CaptureBishop",
            PriorityTier::CaptureKnight => "CaptureKnight",
            PriorityTier::CapturePawn => "CapturePawn",
            PriorityTier::BestEvaluated => "BestEvaluated",
            PriorityTier::Random => "Random",
        };
        f.write_str(name)
    }
}

/// Classify `mv` given the position it leads to.
///
/// `after` must be `pos` with `mv` played. After `play` the opponent is to
/// move, so `is_checkmate`/`is_check` already describe the opponent's king.
pub(crate) fn tier_of(mv: &Move, after: &Chess) -> PriorityTier {
    if after.is_checkmate() {
        return PriorityTier::MateNow;
    }
    if after.is_check() {
        return PriorityTier::GivesCheck;
    }
    mv.capture()
        .and_then(PriorityTier::for_capture)
        .unwrap_or(PriorityTier::BestEvaluated)
}

/// Tier of a single move in `pos`. Quiet moves land in `BestEvaluated`.
pub fn classify(pos: &Chess, mv: &Move) -> Result<PriorityTier, EngineError> {
    let after = apply(pos, mv)?;
    Ok(tier_of(mv, &after))
}

pub(crate) fn apply(pos: &Chess, mv: &Move) -> Result<Chess, EngineError> {
    pos.clone()
        .play(mv)
        .map_err(|e| EngineError::IllegalMove {
            uci: crate::encode::move_to_uci(mv),
            reason: e.to_string(),
        })
}
