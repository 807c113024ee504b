//! UCI front end: parser, options and the stdin/stdout loop.

pub mod engine;
pub mod options;
pub mod parser;

pub use engine::{process_uci_line, run_uci_loop, UciEngine, UciState};
pub use options::UciOptions;
pub use parser::{parse_uci_command, UciCommand};
