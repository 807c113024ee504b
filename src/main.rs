//! Scalino UCI entry point.

fn main() {
    scalino::init();

    if let Err(e) = scalino::uci::run_uci_loop() {
        eprintln!("UCI loop failed: {:?}", e);
        std::process::exit(1);
    }
}
