//! C boundary for the evaluator and the move selector
//!
//! Entry points, all taking and returning primitive types only:
//!
//! ```c
//! void        init_tables(void);
//! int         evaluateBoard(const char *fen);
//! const char *get_best_move(const char *fen);
//! ```
//!
//! The library is built as a `cdylib`, so any host able to call C can load it
//! and keep its own orchestration.

use std::cell::RefCell;
use std::ffi::{c_char, c_int, CStr, CString};
use std::ptr;

use crate::encode::decode;
use crate::eval;
use crate::select::select_move;
use crate::time::TimeBudget;

/// Returned by `evaluateBoard` for a null pointer, a string that is not
/// UTF-8 or not FEN, and for calls made before `init_tables`.
pub const FFI_ERROR_SCORE: c_int = c_int::MIN;

thread_local! {
    // Backing storage for the string handed out by `get_best_move`
    static BEST_MOVE: RefCell<CString> = RefCell::new(CString::default());
}

#[no_mangle]
pub extern "C" fn init_tables() {
    eval::init_tables();
}

/// Score a null-terminated FEN from the side-to-move's point of view.
///
/// # Safety
/// `fen` must be null or point to a valid null-terminated string that stays
/// alive for the duration of the call.
#[export_name = "evaluateBoard"]
pub unsafe extern "C" fn evaluate_board(fen: *const c_char) -> c_int {
    if fen.is_null() {
        return FFI_ERROR_SCORE;
    }

    let Ok(fen) = CStr::from_ptr(fen).to_str() else {
        return FFI_ERROR_SCORE;
    };

    match eval::evaluate_fen(fen) {
        Ok(score) => score,
        Err(_) => FFI_ERROR_SCORE,
    }
}

/// Pick a move for a null-terminated FEN, in UCI notation.
///
/// The returned string belongs to the library. It stays valid until the same
/// thread calls `get_best_move` again and must not be freed by the caller.
/// Returns null for bad input and for positions without a legal move.
///
/// # Safety
/// `fen` must be null or point to a valid null-terminated string that stays
/// alive for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn get_best_move(fen: *const c_char) -> *const c_char {
    if fen.is_null() {
        return ptr::null();
    }

    let Ok(fen) = CStr::from_ptr(fen).to_str() else {
        return ptr::null();
    };

    let Some(uci) = best_move_uci(fen) else {
        return ptr::null();
    };

    BEST_MOVE.with(|slot| {
        let mut slot = slot.borrow_mut();
        *slot = uci;
        slot.as_ptr()
    })
}

fn best_move_uci(fen: &str) -> Option<CString> {
    let pos = decode(fen).ok()?;
    let selection = select_move(&pos, &TimeBudget::unlimited()).ok()?;
    CString::new(selection.uci()).ok()
}
