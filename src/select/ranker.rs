//! Move ranker
//!
//! Walks the candidate list once, keeps the first move of the strongest tier
//! seen so far and stops early on a mate. Candidate order is never changed:
//! "first encountered" is the only tie-break inside a tier.

use shakmaty::{Chess, Move};

use super::stats::SelectionStats;
use super::tier::{apply, tier_of, PriorityTier};
use crate::encode::{encode, move_to_uci};
use crate::error::EngineError;
use crate::eval::{self, Score};

/// Outcome of one decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub mv: Move,
    pub tier: PriorityTier,
    /// Mover's score of the resulting position, set for `BestEvaluated` only
    pub score: Option<Score>,
}

impl Selection {
    pub fn new(mv: Move, tier: PriorityTier) -> Self {
        Self {
            mv,
            tier,
            score: None,
        }
    }

    pub fn uci(&self) -> String {
        move_to_uci(&self.mv)
    }
}

/// Pick a move among `moves`, which must be legal in `pos` and in the order
/// the rules engine produced them.
pub fn rank(
    pos: &Chess,
    moves: &[Move],
    stats: &mut SelectionStats,
) -> Result<Selection, EngineError> {
    if moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }

    let mut children = Vec::with_capacity(moves.len());
    let mut best: Option<(usize, PriorityTier)> = None;

    for (idx, mv) in moves.iter().enumerate() {
        let after = apply(pos, mv)?;
        let tier = tier_of(mv, &after);
        stats.inc_candidate();

        if tier == PriorityTier::MateNow {
            stats.tier = Some(tier);
            return Ok(Selection::new(mv.clone(), tier));
        }

        // strict '>' keeps the first move of each tier
        if best.map_or(true, |(_, t)| tier > t) {
            best = Some((idx, tier));
        }
        children.push(after);
    }

    if let Some((idx, tier)) = best {
        if tier > PriorityTier::BestEvaluated {
            stats.tier = Some(tier);
            return Ok(Selection::new(moves[idx].clone(), tier));
        }
    }

    best_evaluated(moves, &children, stats)
}

/// Mover's score of `child`. Finished games take their game value, anything
/// else goes through the evaluator as FEN.
fn child_score(child: &Chess, stats: &mut SelectionStats) -> Result<Score, EngineError> {
    // child is scored for the opponent, who is to move there
    if let Some(score) = eval::terminal_score(child) {
        return Ok(-score);
    }

    let fen = encode(child)?;
    let score = eval::evaluate_fen(&fen)?;
    stats.inc_evaluation();
    Ok(-score)
}

/// Fallback tier: score every resulting position and keep the strictly
/// greatest score for the mover.
fn best_evaluated(
    moves: &[Move],
    children: &[Chess],
    stats: &mut SelectionStats,
) -> Result<Selection, EngineError> {
    let mut best: Option<(usize, Score)> = None;

    for (idx, child) in children.iter().enumerate() {
        let score = child_score(child, stats)?;

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((idx, score));
        }
    }

    let (idx, score) = best.ok_or(EngineError::NoLegalMoves)?;
    stats.tier = Some(PriorityTier::BestEvaluated);
    Ok(Selection {
        mv: moves[idx].clone(),
        tier: PriorityTier::BestEvaluated,
        score: Some(score),
    })
}
