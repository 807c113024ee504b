//! Time budget for Scalino
//!
//! The policy does not plan its time; it only needs to know how much clock
//! the side to move has left so it can bail out when that gets too low.

use shakmaty::Color;

/// Remaining clock of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBudget {
    /// Milliseconds left, `None` when the controller gave no clock
    pub remaining_ms: Option<u64>,
}

impl TimeBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn remaining(ms: u64) -> Self {
        Self {
            remaining_ms: Some(ms),
        }
    }

    /// Build the budget from UCI `go` fields for the side to move.
    ///
    /// `movetime` takes precedence over the clocks. Increments are credited
    /// only after the move is made, so they play no part here.
    pub fn from_clock(
        wtime: Option<u64>,
        btime: Option<u64>,
        movetime: Option<u64>,
        side: Color,
    ) -> Self {
        if let Some(mt) = movetime {
            return Self::remaining(mt);
        }

        let remaining_ms = match side {
            Color::White => wtime,
            Color::Black => btime,
        };

        Self { remaining_ms }
    }

    /// True when a clock is known and strictly below `threshold_ms`.
    pub fn is_below(&self, threshold_ms: u64) -> bool {
        matches!(self.remaining_ms, Some(ms) if ms < threshold_ms)
    }
}
