//! Error kinds surfaced by the encoder, the evaluator and the move policy.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The position could not be encoded or decoded as FEN.
    Encoding { reason: String },
    /// Scoring was requested before `eval::init_tables` ran.
    UninitializedEvaluator,
    /// A move was requested in a position without legal moves.
    NoLegalMoves,
    /// A move string from the controller is malformed or illegal.
    IllegalMove { uci: String, reason: String },
}

impl EngineError {
    pub fn encoding(reason: impl Into<String>) -> Self {
        EngineError::Encoding {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Encoding { reason } => write!(f, "encoding error: {reason}"),
            EngineError::UninitializedEvaluator => {
                write!(f, "evaluator tables used before init_tables()")
            }
            EngineError::NoLegalMoves => write!(f, "no legal moves in position"),
            EngineError::IllegalMove { uci, reason } => {
                write!(f, "illegal move {uci}: {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
