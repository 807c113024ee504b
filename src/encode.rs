//! Canonical FEN encoding of positions
//!
//! The evaluator only understands position strings, so every position that
//! crosses into it goes through `encode`. The en-passant field is written only
//! when a capture is actually possible, which makes the encoding unique.

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position};

use crate::error::EngineError;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Encode a position as FEN.
///
/// Fails only when a side does not have exactly one king, which a position
/// built by `shakmaty` in standard chess never allows.
pub fn encode(pos: &Chess) -> Result<String, EngineError> {
    let board = pos.board();
    for color in [Color::White, Color::Black] {
        let kings = (board.kings() & board.by_color(color)).count();
        if kings != 1 {
            return Err(EngineError::encoding(format!(
                "{color:?} has {kings} kings"
            )));
        }
    }

    Ok(Fen::from_position(pos.clone(), EnPassantMode::Legal).to_string())
}

/// Decode a FEN into a legal standard-chess position.
pub fn decode(fen: &str) -> Result<Chess, EngineError> {
    let parsed: Fen = fen
        .trim()
        .parse()
        .map_err(|e| EngineError::encoding(format!("{e} in '{fen}'")))?;
    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| EngineError::encoding(format!("{e} in '{fen}'")))
}

/// Move in UCI long algebraic notation (`e2e4`, `e7e8q`, `e1g1`).
pub fn move_to_uci(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

/// Find the legal move of `pos` written as `uci`.
pub fn parse_uci_move(pos: &Chess, uci: &str) -> Result<Move, EngineError> {
    let wanted = uci.trim();
    pos.legal_moves()
        .into_iter()
        .find(|m| move_to_uci(m) == wanted)
        .ok_or_else(|| EngineError::IllegalMove {
            uci: wanted.to_string(),
            reason: "not a legal move in this position".to_string(),
        })
}
