//! UCI event loop and state machine for Scalino

use std::io::{self, BufRead, Write};

use shakmaty::{Chess, Position};

use super::parser::{parse_uci_command, UciCommand};
use crate::encode::{decode, parse_uci_move};
use crate::error::EngineError;
use crate::select::{MoveSelector, SelectorParams};
use crate::time::TimeBudget;
use crate::uci::options::UciOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciState {
    Init,
    Ready,
}

pub struct UciEngine {
    state: UciState,
    position: Chess,
    running: bool,
    options: UciOptions,
    selector: MoveSelector,
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl UciEngine {
    pub fn new() -> Self {
        let options = UciOptions::default();
        let selector =
            MoveSelector::new(SelectorParams::new().low_time_ms(options.low_time_ms));
        Self {
            state: UciState::Init,
            position: Chess::default(),
            running: true,
            options,
            selector,
        }
    }

    pub fn state(&self) -> &UciState {
        &self.state
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn options(&self) -> &UciOptions {
        &self.options
    }

    /// Apply `moves` to the position given by `fen` (start position if
    /// `None`). Nothing is committed unless every move is legal.
    fn set_position(fen: Option<&str>, moves: &[String]) -> Result<Chess, EngineError> {
        let mut pos = match fen {
            Some(f) => decode(f)?,
            None => Chess::default(),
        };

        for uci in moves {
            let mv = parse_uci_move(&pos, uci)?;
            pos.play_unchecked(&mv);
        }

        Ok(pos)
    }

    pub fn handle_command(&mut self, cmd: UciCommand) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            UciCommand::Uci => {
                res.push(format!("id name {}", self.options.engine_name));
                res.push(format!("id author {}", self.options.author));
                res.extend(self.options.declarations());
                res.push("uciok".to_string());
                self.state = UciState::Ready;
            }
            UciCommand::IsReady => {
                res.push("readyok".to_string());
            }
            UciCommand::UciNewGame => {
                self.position = Chess::default();
                self.state = UciState::Ready;
            }
            UciCommand::Position { fen, moves } => {
                match Self::set_position(fen.as_deref(), &moves) {
                    Ok(pos) => self.position = pos,
                    // keep the previous position on any error
                    Err(e) => res.push(format!("info string {}", e)),
                }
                self.state = UciState::Ready;
            }
            // Increments, movestogo, depth and infinite are accepted but unused:
            // every decision is one ply and only the clock left matters.
            UciCommand::Go {
                wtime,
                btime,
                movetime,
                ..
            } => {
                let budget =
                    TimeBudget::from_clock(wtime, btime, movetime, self.position.turn());

                if self.position.legal_moves().is_empty() {
                    res.push(
                        "info string position is terminal (checkmate or stalemate)".to_string(),
                    );
                    res.push("bestmove 0000".to_string());
                    return res;
                }

                match self.selector.select_move(&self.position, &budget) {
                    Ok(selection) => {
                        res.push(format!("info string tier {}", selection.tier));
                        if let Some(score) = selection.score {
                            res.push(format!("info depth 1 score cp {}", score));
                        }
                        if self.options.debug {
                            res.push(format!("info string {}", self.selector.stats().summary()));
                        }
                        res.push(format!("bestmove {}", selection.uci()));
                    }
                    Err(e) => {
                        res.push(format!("info string {}", e));
                        res.push("bestmove 0000".to_string());
                    }
                }
                self.state = UciState::Ready;
            }
            UciCommand::Stop => {
                // decisions are synchronous, nothing is ever running here
            }
            UciCommand::SetOption { name, value } => {
                match self.options.set_option(&name, value.as_deref()) {
                    Ok(()) => {
                        if name == "LowTimeMs" {
                            self.selector = MoveSelector::new(
                                SelectorParams::new().low_time_ms(self.options.low_time_ms),
                            );
                        }
                        res.push(format!(
                            "info string {} set to {}",
                            name,
                            value.unwrap_or_default()
                        ));
                    }
                    Err(e) => res.push(format!("info string error: {}", e)),
                }
            }
            UciCommand::Quit => {
                self.running = false;
            }
            UciCommand::Unknown(s) => {
                res.push(format!("info string unknown command: {}", s));
            }
        }
        res
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

pub fn run_uci_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let mut engine = UciEngine::new();
    let mut buf = String::new();

    while engine.is_running() {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            // EOF
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }

        for r in process_uci_line(line, &mut engine) {
            writeln!(writer, "{}", r)?;
        }

        // GUIs wait on each reply line
        writer.flush()?;
    }

    Ok(())
}

pub fn process_uci_line(line: &str, engine: &mut UciEngine) -> Vec<String> {
    let cmd = parse_uci_command(line);
    engine.handle_command(cmd)
}
