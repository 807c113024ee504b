use scalino::uci::{parse_uci_command, UciCommand};

#[test]
fn test_parse_simple_commands() {
    assert_eq!(parse_uci_command("uci"), UciCommand::Uci);
    assert_eq!(parse_uci_command("isready"), UciCommand::IsReady);
    assert_eq!(parse_uci_command("ucinewgame"), UciCommand::UciNewGame);
    assert_eq!(parse_uci_command("stop"), UciCommand::Stop);
    assert_eq!(parse_uci_command("  quit  "), UciCommand::Quit);
    assert_eq!(
        parse_uci_command("register later"),
        UciCommand::Unknown("register".to_string())
    );
}

#[test]
fn test_parse_go_with_full_clock() {
    assert_eq!(
        parse_uci_command("go wtime 300000 btime 290000 winc 2000 binc 2000 movestogo 40"),
        UciCommand::Go {
            wtime: Some(300000),
            btime: Some(290000),
            winc: Some(2000),
            binc: Some(2000),
            movetime: None,
            movestogo: Some(40),
            depth: None,
            infinite: false,
        }
    );
}

#[test]
fn test_parse_go_variants() {
    match parse_uci_command("go infinite") {
        UciCommand::Go {
            infinite, wtime, ..
        } => {
            assert!(infinite);
            assert_eq!(wtime, None);
        }
        other => panic!("unexpected {:?}", other),
    }

    match parse_uci_command("go movetime 500 depth 1") {
        UciCommand::Go {
            movetime, depth, ..
        } => {
            assert_eq!(movetime, Some(500));
            assert_eq!(depth, Some(1));
        }
        other => panic!("unexpected {:?}", other),
    }

    // malformed values are dropped, not fatal
    match parse_uci_command("go wtime soon btime 100") {
        UciCommand::Go { wtime, btime, .. } => {
            assert_eq!(wtime, None);
            assert_eq!(btime, Some(100));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_parse_setoption_without_value() {
    assert_eq!(
        parse_uci_command("setoption name Clear Hash"),
        UciCommand::SetOption {
            name: "Clear Hash".to_string(),
            value: None,
        }
    );
}

#[test]
fn test_parse_position_startpos_with_moves() {
    assert_eq!(
        parse_uci_command("position startpos moves e2e4 e7e5"),
        UciCommand::Position {
            fen: None,
            moves: vec!["e2e4".to_string(), "e7e5".to_string()],
        }
    );
}
