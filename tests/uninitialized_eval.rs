//! Runs in its own process, so nothing has built the tables yet.

use std::ffi::CString;

use scalino::encode::START_FEN;
use scalino::eval;
use scalino::ffi::{evaluate_board, FFI_ERROR_SCORE};
use scalino::EngineError;

#[test]
fn test_scoring_requires_init() {
    assert!(!eval::tables_initialized());
    assert_eq!(
        eval::evaluate_fen(START_FEN),
        Err(EngineError::UninitializedEvaluator)
    );
    assert_eq!(
        eval::evaluate(&shakmaty::Chess::default()),
        Err(EngineError::UninitializedEvaluator)
    );

    let c_fen = CString::new(START_FEN).unwrap();
    assert_eq!(unsafe { evaluate_board(c_fen.as_ptr()) }, FFI_ERROR_SCORE);

    scalino::ffi::init_tables();
    assert!(eval::tables_initialized());
    assert_eq!(eval::evaluate_fen(START_FEN), Ok(0));
    assert_eq!(unsafe { evaluate_board(c_fen.as_ptr()) }, 0);

    // idempotent
    scalino::ffi::init_tables();
    assert_eq!(eval::evaluate_fen(START_FEN), Ok(0));
}
