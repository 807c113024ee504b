use shakmaty::Position;

use scalino::encode::{encode, move_to_uci, START_FEN};
use scalino::uci::{process_uci_line, UciEngine, UciState};

fn run(engine: &mut UciEngine, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| process_uci_line(line, engine))
        .collect()
}

fn bestmove(out: &[String]) -> &str {
    out.iter()
        .find_map(|l| l.strip_prefix("bestmove "))
        .expect("no bestmove line")
}

#[test]
fn test_handshake() {
    let mut engine = UciEngine::new();
    assert_eq!(engine.state(), &UciState::Init);

    let out = run(&mut engine, &["uci"]);
    assert_eq!(out.len(), 5);
    assert_eq!(out[0], "id name Scalino");
    assert!(out[1].starts_with("id author "));
    assert!(out[2].starts_with("option name LowTimeMs type spin"));
    assert_eq!(out[3], "option name Debug type check default false");
    assert_eq!(out[4], "uciok");
    assert_eq!(engine.state(), &UciState::Ready);

    assert_eq!(run(&mut engine, &["isready"]), vec!["readyok".to_string()]);
}

#[test]
fn test_go_from_startpos() {
    let mut engine = UciEngine::new();
    let out = run(&mut engine, &["position startpos", "go wtime 60000 btime 60000"]);

    assert_eq!(out[0], "info string tier BestEvaluated");
    assert!(out[1].starts_with("info depth 1 score cp "));
    let uci = bestmove(&out);
    assert!(engine
        .position()
        .legal_moves()
        .iter()
        .any(|m| move_to_uci(m) == uci));
}

#[test]
fn test_go_takes_mate_in_one() {
    let mut engine = UciEngine::new();
    let out = run(
        &mut engine,
        &[
            "position startpos moves e2e4 e7e5 f1c4 b8c6 d1h5 g8f6",
            "go",
        ],
    );
    assert_eq!(out[0], "info string tier MateNow");
    assert_eq!(bestmove(&out), "h5f7");
}

#[test]
fn test_low_clock_plays_first_legal_move() {
    let mut engine = UciEngine::new();
    let out = run(&mut engine, &["position startpos", "go wtime 100 btime 100000"]);

    assert_eq!(out[0], "info string tier Random");
    let first = move_to_uci(&engine.position().legal_moves()[0]);
    assert_eq!(bestmove(&out), first);

    // only the clock of the side to move matters
    let out = run(&mut engine, &["go wtime 100000 btime 100"]);
    assert_eq!(out[0], "info string tier BestEvaluated");

    // a large increment does not rescue a low clock
    let out = run(
        &mut engine,
        &["go wtime 100 btime 100 winc 5000 binc 5000 movestogo 10 depth 6"],
    );
    assert_eq!(out[0], "info string tier Random");
}

#[test]
fn test_setoption_zero_disables_bypass() {
    let mut engine = UciEngine::new();
    let out = run(&mut engine, &["setoption name LowTimeMs value 0"]);
    assert_eq!(out, vec!["info string LowTimeMs set to 0".to_string()]);
    assert_eq!(engine.options().low_time_ms, 0);

    let out = run(&mut engine, &["position startpos", "go movetime 1"]);
    assert_eq!(out[0], "info string tier BestEvaluated");
}

#[test]
fn test_setoption_errors_are_reported() {
    let mut engine = UciEngine::new();
    let out = run(&mut engine, &["setoption name Hash value 64"]);
    assert_eq!(out.len(), 1);
    assert!(out[0].starts_with("info string error: "));
}

#[test]
fn test_debug_adds_stats_line() {
    let mut engine = UciEngine::new();
    let out = run(
        &mut engine,
        &["setoption name Debug value true", "position startpos", "go"],
    );
    assert!(out
        .iter()
        .any(|l| l.starts_with("info string tier BestEvaluated candidates 20 evaluations 20")));
}

#[test]
fn test_terminal_position_answers_null_move() {
    let mut engine = UciEngine::new();
    let out = run(
        &mut engine,
        &["position startpos moves f2f3 e7e5 g2g4 d8h4", "go"],
    );
    assert_eq!(bestmove(&out), "0000");
    assert!(engine.position().is_checkmate());
}

#[test]
fn test_illegal_move_keeps_previous_position() {
    let mut engine = UciEngine::new();
    run(&mut engine, &["position startpos moves e2e4"]);
    let before = encode(engine.position()).unwrap();

    let out = run(&mut engine, &["position startpos moves e2e4 e2e4"]);
    assert_eq!(out.len(), 1);
    assert!(out[0].starts_with("info string "));
    assert_eq!(encode(engine.position()).unwrap(), before);

    let out = run(&mut engine, &["position fen not/a/fen w - - 0 1"]);
    assert_eq!(out.len(), 1);
    assert_eq!(encode(engine.position()).unwrap(), before);
}

#[test]
fn test_ucinewgame_resets_and_quit_stops() {
    let mut engine = UciEngine::new();
    run(&mut engine, &["position startpos moves d2d4", "ucinewgame"]);
    assert_eq!(encode(engine.position()).unwrap(), START_FEN);

    assert!(run(&mut engine, &["stop"]).is_empty());
    let out = run(&mut engine, &["xyzzy"]);
    assert_eq!(out, vec!["info string unknown command: xyzzy".to_string()]);

    assert!(engine.is_running());
    run(&mut engine, &["quit"]);
    assert!(!engine.is_running());
}
