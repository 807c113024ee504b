pub mod encode;
pub mod error;
pub mod eval;
pub mod ffi;
pub mod select;
pub mod time;
pub mod uci;

pub use error::EngineError;
pub use select::{select_move, MoveSelector, PriorityTier, Selection};

/// Build the evaluator tables. Idempotent.
pub fn init() {
    eval::init_tables();
}
