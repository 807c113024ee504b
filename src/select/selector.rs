//! Move selector: the public entry point of the policy
//!
//! Builds the evaluator tables on construction, applies the low-time bypass
//! and hands everything else to the ranker.

use shakmaty::{Chess, Position};

use super::params::SelectorParams;
use super::ranker::{rank, Selection};
use super::stats::SelectionStats;
use super::tier::PriorityTier;
use crate::error::EngineError;
use crate::eval;
use crate::time::TimeBudget;

pub struct MoveSelector {
    params: SelectorParams,
    stats: SelectionStats,
}

impl MoveSelector {
    pub fn new(params: SelectorParams) -> Self {
        eval::init_tables();
        Self {
            params,
            stats: SelectionStats::new(),
        }
    }

    pub fn params(&self) -> &SelectorParams {
        &self.params
    }

    /// Statistics of the last decision
    pub fn stats(&self) -> &SelectionStats {
        &self.stats
    }

    /// Choose a move for the side to move in `pos`.
    ///
    /// Terminal positions are a caller error and yield `NoLegalMoves`.
    pub fn select_move(
        &mut self,
        pos: &Chess,
        budget: &TimeBudget,
    ) -> Result<Selection, EngineError> {
        self.stats.reset();
        self.stats.start_timing();

        let moves = pos.legal_moves();
        let Some(first) = moves.first() else {
            return Err(EngineError::NoLegalMoves);
        };

        if budget.is_below(self.params.low_time_ms) {
            self.stats.tier = Some(PriorityTier::Random);
            self.stats.update_timing();
            return Ok(Selection::new(first.clone(), PriorityTier::Random));
        }

        let selection = rank(pos, &moves, &mut self.stats);
        self.stats.update_timing();
        selection
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(SelectorParams::default())
    }
}

/// One-shot selection with default parameters.
pub fn select_move(pos: &Chess, budget: &TimeBudget) -> Result<Selection, EngineError> {
    MoveSelector::default().select_move(pos, budget)
}
