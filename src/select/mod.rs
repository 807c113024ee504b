//! Move selection for Scalino
//!
//! A one-ply policy: every legal move is classified into a priority tier and
//! the first move of the highest tier wins. Only when no move mates, checks
//! or captures does the evaluator get involved.

pub mod params;
pub mod ranker;
pub mod selector;
pub mod stats;
pub mod tier;

pub use self::params::{SelectorParams, DEFAULT_LOW_TIME_MS};
pub use self::ranker::{rank, Selection};
pub use self::selector::{select_move, MoveSelector};
pub use self::stats::SelectionStats;
pub use self::tier::{classify, PriorityTier};
