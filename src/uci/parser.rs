//! UCI command parser for Scalino

//! Covers the commands a controller sends to a one-ply bot.

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum UciCommand {
    Uci,
    IsReady,
    SetOption {
        name: String,
        value: Option<String>,
    },
    UciNewGame,
    Position {
        fen: Option<String>,
        moves: Vec<String>,
    },
    /// Full `go` field set as sent by controllers; the engine reads only the
    /// clocks of the side to move and `movetime`.
    Go {
        wtime: Option<u64>,
        btime: Option<u64>,
        winc: Option<u64>,
        binc: Option<u64>,
        movetime: Option<u64>,
        movestogo: Option<u32>,
        depth: Option<u8>,
        infinite: bool,
    },
    Stop,
    Quit,
    Unknown(String),
}

fn value_after<T: std::str::FromStr>(parts: &[&str], i: usize) -> Option<T> {
    parts.get(i + 1).and_then(|v| v.parse::<T>().ok())
}

/// Parse a UCI command from a line (whitespace tokenizer)
pub fn parse_uci_command(line: &str) -> UciCommand {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return UciCommand::Unknown(String::new());
    };

    match head {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "stop" => UciCommand::Stop,
        "quit" => UciCommand::Quit,
        "setoption" => {
            // setoption name <name> [value <val>]
            let mut name = String::new();
            let mut value: Option<String> = None;
            let mut i = 1usize;
            while i < parts.len() {
                match parts[i] {
                    "name" => {
                        i += 1;
                        let mut words = Vec::new();
                        while i < parts.len() && parts[i] != "value" {
                            words.push(parts[i]);
                            i += 1;
                        }
                        name = words.join(" ");
                    }
                    "value" => {
                        value = Some(parts[i + 1..].join(" "));
                        break;
                    }
                    _ => i += 1,
                }
            }
            UciCommand::SetOption { name, value }
        }
        "position" => {
            // position [fen <fenstring> | startpos] [moves <move1> ...]
            let mut fen: Option<String> = None;
            let moves_at = parts.iter().position(|&s| s == "moves");
            if parts.get(1) == Some(&"fen") {
                let end = moves_at.unwrap_or(parts.len());
                fen = Some(parts[2..end].join(" "));
            }
            let moves = moves_at
                .map(|at| parts[at + 1..].iter().map(|m| m.to_string()).collect())
                .unwrap_or_default();
            UciCommand::Position { fen, moves }
        }
        "go" => {
            let mut wtime = None;
            let mut btime = None;
            let mut winc = None;
            let mut binc = None;
            let mut movetime = None;
            let mut movestogo = None;
            let mut depth = None;
            let mut infinite = false;

            let mut i = 1usize;
            while i < parts.len() {
                match parts[i] {
                    "wtime" => wtime = value_after(&parts, i),
                    "btime" => btime = value_after(&parts, i),
                    "winc" => winc = value_after(&parts, i),
                    "binc" => binc = value_after(&parts, i),
                    "movetime" => movetime = value_after(&parts, i),
                    "movestogo" => movestogo = value_after(&parts, i),
                    "depth" => depth = value_after(&parts, i),
                    "infinite" => {
                        infinite = true;
                        i += 1;
                        continue;
                    }
                    _ => {
                        i += 1;
                        continue;
                    }
                }
                i += 2;
            }

            UciCommand::Go {
                wtime,
                btime,
                winc,
                binc,
                movetime,
                movestogo,
                depth,
                infinite,
            }
        }
        other => UciCommand::Unknown(other.to_string()),
    }
}
