//! Selector parameters
//!
//! Controls when the policy gives up on move quality to save the clock.

/// Below this many milliseconds left, the first legal move is played at once.
pub const DEFAULT_LOW_TIME_MS: u64 = 250;

/// Parameters for the move selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorParams {
    /// Remaining-time threshold in milliseconds for the low-time bypass
    pub low_time_ms: u64,
}

impl Default for SelectorParams {
    fn default() -> Self {
        Self {
            low_time_ms: DEFAULT_LOW_TIME_MS,
        }
    }
}

impl SelectorParams {
    /// Create new selector params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the low-time threshold in milliseconds (0 disables the bypass)
    pub fn low_time_ms(mut self, ms: u64) -> Self {
        self.low_time_ms = ms;
        self
    }
}
