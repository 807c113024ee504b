//! Per-decision statistics
//!
//! Reset at the start of every `select_move` call.

use std::time::{Duration, Instant};

use super::tier::PriorityTier;

#[derive(Debug, Default, Clone)]
pub struct SelectionStats {
    /// Candidate moves classified into a tier
    pub candidates: u64,

    /// Evaluator calls made for the fallback tier
    pub evaluations: u64,

    /// Tier that produced the chosen move
    pub tier: Option<PriorityTier>,

    /// Decision start time
    pub start_time: Option<Instant>,

    /// Time spent on the decision
    pub elapsed: Duration,
}

impl SelectionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_timing(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn update_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.elapsed = start.elapsed();
        }
    }

    pub fn inc_candidate(&mut self) {
        self.candidates += 1;
    }

    pub fn inc_evaluation(&mut self) {
        self.evaluations += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// One-line summary suitable for a UCI `info string`
    pub fn summary(&self) -> String {
        let tier = self
            .tier
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "tier {} candidates {} evaluations {} time {}us",
            tier,
            self.candidates,
            self.evaluations,
            self.elapsed.as_micros()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_counters() {
        let mut stats = SelectionStats::new();
        stats.inc_candidate();
        stats.inc_evaluation();
        stats.tier = Some(PriorityTier::GivesCheck);
        stats.reset();
        assert_eq!(stats.candidates, 0);
        assert_eq!(stats.evaluations, 0);
        assert!(stats.tier.is_none());
    }

    #[test]
    fn test_summary_mentions_tier() {
        let mut stats = SelectionStats::new();
        stats.tier = Some(PriorityTier::CaptureRook);
        stats.inc_candidate();
        assert!(stats.summary().starts_with("tier CaptureRook candidates 1"));
    }
}
