//! Evaluation - material plus piece-square tables
//!
//! The scorer works on canonical FEN strings so it can sit behind the C
//! boundary in `ffi`. Tables are built once per process by `init_tables` and
//! are read-only afterwards; scoring before that is an error, not a lazy init.
//!
//! Scores are centipawns from the point of view of the side to move.

use std::sync::OnceLock;

use shakmaty::fen::Fen;
use shakmaty::{Board, Chess, Color, Position, Role, Square};

use crate::error::EngineError;

pub type Score = i32;

// ============================================================================
// MATERIAL (centipawns)
// ============================================================================
pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 300;
pub const BISHOP_VALUE: Score = 300;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;
/// Large enough that no sum of positional terms can compensate a missing king.
pub const KING_VALUE: Score = 10_000_000;

/// Forced win for the side to move; `-MATE_SCORE` is a forced loss.
/// Strictly above anything `score_board` can return.
pub const MATE_SCORE: Score = 1_000_000_000;
pub const DRAW_SCORE: Score = 0;

const BISHOP_PAIR_BONUS: Score = 30;
const PAWN_SHIELD_BONUS: Score = 10;

const ROLES: [Role; 6] = [
    Role::Pawn,
    Role::Knight,
    Role::Bishop,
    Role::Rook,
    Role::Queen,
    Role::King,
];

// ============================================================================
// PIECE-SQUARE TABLES (white's point of view, index 0 = a1, 63 = h8)
// ============================================================================
// Black reads the same tables mirrored vertically (sq ^ 56).

/// Pawns: never negative, so an extra pawn can only add to its side's score.
#[rustfmt::skip]
const PAWN_PSQT: [i16; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,  0,  0, 10, 10,  5,
     5,  5, 10, 10, 10, 10,  5,  5,
     5,  5, 15, 25, 25, 15,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    30, 30, 40, 50, 50, 40, 30, 30,
    80, 80, 90,100,100, 90, 80, 80,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_PSQT: [i16; 64] = [
    -50,-35,-30,-30,-30,-30,-35,-50,
    -35,-20,  0,  5,  5,  0,-20,-35,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -35,-20,  0,  0,  0,  0,-20,-35,
    -50,-35,-30,-30,-30,-30,-35,-50,
];

#[rustfmt::skip]
const BISHOP_PSQT: [i16; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10, 10,  0,  0,  0,  0, 10,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_PSQT: [i16; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PSQT: [i16; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -10,  5,  5,  5,  5,  5,  0,-10,
      0,  0,  5,  5,  5,  5,  0, -5,
     -5,  0,  5,  5,  5,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

/// King: tucked away on the first rank, kept out of the centre.
#[rustfmt::skip]
const KING_PSQT: [i16; 64] = [
     20, 30, 10,  0,  0, 10, 30, 20,
     20, 20,  0,  0,  0,  0, 20, 20,
    -10,-20,-20,-20,-20,-20,-20,-10,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
];

/// Material and placement folded into one lookup: `[color][role][square]`.
struct Tables {
    piece_square: [[[Score; 64]; 6]; 2],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

pub fn material_value(role: Role) -> Score {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => KING_VALUE,
    }
}

fn psqt(role: Role) -> &'static [i16; 64] {
    match role {
        Role::Pawn => &PAWN_PSQT,
        Role::Knight => &KNIGHT_PSQT,
        Role::Bishop => &BISHOP_PSQT,
        Role::Rook => &ROOK_PSQT,
        Role::Queen => &QUEEN_PSQT,
        Role::King => &KING_PSQT,
    }
}

fn color_index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

fn build_tables() -> Tables {
    let mut piece_square = [[[0; 64]; 6]; 2];

    for (role_idx, &role) in ROLES.iter().enumerate() {
        let material = material_value(role);
        let table = psqt(role);
        for sq in 0..64 {
            piece_square[0][role_idx][sq] = material + table[sq] as Score;
            piece_square[1][role_idx][sq] = material + table[sq ^ 56] as Score;
        }
    }

    Tables { piece_square }
}

/// Build the evaluation tables. Safe to call any number of times from any
/// number of threads; only the first call does the work.
pub fn init_tables() {
    TABLES.get_or_init(build_tables);
}

pub fn tables_initialized() -> bool {
    TABLES.get().is_some()
}

fn tables() -> Result<&'static Tables, EngineError> {
    TABLES.get().ok_or(EngineError::UninitializedEvaluator)
}

/// Score a FEN string from its piece placement and side to move.
///
/// The score is static: checkmate, stalemate and dead draws are not detected
/// here (see `terminal_score`). Any placement that parses is scored, legal or
/// not.
pub fn evaluate_fen(fen: &str) -> Result<Score, EngineError> {
    let tables = tables()?;
    let parsed: Fen = fen
        .trim()
        .parse()
        .map_err(|e| EngineError::encoding(format!("{e} in '{fen}'")))?;
    let setup = parsed.into_setup();

    Ok(score_board(tables, &setup.board, setup.turn))
}

/// Score an already decoded position.
pub fn evaluate(pos: &Chess) -> Result<Score, EngineError> {
    let tables = tables()?;
    Ok(score_board(tables, pos.board(), pos.turn()))
}

/// Game-theoretic value of a finished position for the side to move:
/// `-MATE_SCORE` when mated, `DRAW_SCORE` on stalemate or insufficient
/// material, `None` while play goes on.
pub fn terminal_score(pos: &Chess) -> Option<Score> {
    if pos.is_checkmate() {
        Some(-MATE_SCORE)
    } else if pos.is_stalemate() || pos.is_insufficient_material() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

fn score_board(tables: &Tables, board: &Board, turn: Color) -> Score {
    let relative =
        side_score(tables, board, Color::White) - side_score(tables, board, Color::Black);

    match turn {
        Color::White => relative,
        Color::Black => -relative,
    }
}

fn side_score(tables: &Tables, board: &Board, color: Color) -> Score {
    let ours = board.by_color(color);
    let table = &tables.piece_square[color_index(color)];
    let mut score = 0;

    for (role_idx, &role) in ROLES.iter().enumerate() {
        for sq in board.by_role(role) & ours {
            score += table[role_idx][sq as usize];
        }
    }

    if (board.bishops() & ours).count() >= 2 {
        score += BISHOP_PAIR_BONUS;
    }

    score + PAWN_SHIELD_BONUS * pawn_shield(board, color)
}

/// Own pawns on the three squares directly in front of the king.
fn pawn_shield(board: &Board, color: Color) -> Score {
    let Some(king) = board.king_of(color) else {
        return 0;
    };

    let file = king as usize % 8;
    let rank = king as usize / 8;
    let shield_rank = match color {
        Color::White if rank < 7 => rank + 1,
        Color::Black if rank > 0 => rank - 1,
        _ => return 0,
    };

    let pawns = board.pawns() & board.by_color(color);
    let mut count = 0;
    for f in file.saturating_sub(1)..=(file + 1).min(7) {
        if pawns.contains(Square::new((shield_rank * 8 + f) as u32)) {
            count += 1;
        }
    }
    count
}

// ============================================================================
// TESTS
// ============================================================================
