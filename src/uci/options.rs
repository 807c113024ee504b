//! UCI options for Scalino
//!
//! Only two knobs exist: the low-time threshold of the selector and the
//! debug switch that adds per-decision statistics to the output.

use crate::select::params::DEFAULT_LOW_TIME_MS;

pub const LOW_TIME_MAX_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UciOptions {
    /// Remaining-time threshold (ms) below which the first legal move is played
    pub low_time_ms: u64,

    /// Emit selection statistics as `info string` lines
    pub debug: bool,

    /// Engine name
    pub engine_name: String,

    /// Engine author
    pub author: String,
}

impl Default for UciOptions {
    fn default() -> Self {
        Self {
            low_time_ms: DEFAULT_LOW_TIME_MS,
            debug: false,
            engine_name: "Scalino".to_string(),
            author: "the Scalino developers".to_string(),
        }
    }
}

impl UciOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// `option` lines announced in reply to `uci`
    pub fn declarations(&self) -> Vec<String> {
        vec![
            format!(
                "option name LowTimeMs type spin default {} min 0 max {}",
                DEFAULT_LOW_TIME_MS, LOW_TIME_MAX_MS
            ),
            "option name Debug type check default false".to_string(),
        ]
    }

    /// Set option value
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), String> {
        match name {
            "LowTimeMs" => {
                let v = value.ok_or_else(|| format!("Option {} requires a value", name))?;
                let ms = v
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid value for option {}: {}", name, v))?;
                if ms > LOW_TIME_MAX_MS {
                    return Err(format!(
                        "{} must be between 0 and {}",
                        name, LOW_TIME_MAX_MS
                    ));
                }
                self.low_time_ms = ms;
            }
            "Debug" => {
                self.debug = match value {
                    Some("true") => true,
                    Some("false") => false,
                    other => {
                        return Err(format!(
                            "Invalid value for option {}: {}",
                            name,
                            other.unwrap_or("<none>")
                        ))
                    }
                };
            }
            _ => return Err(format!("Unknown option: {}", name)),
        }

        Ok(())
    }
}
