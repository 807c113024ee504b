use clap::Parser;
use scalino::encode::{decode, START_FEN};
use scalino::select::{MoveSelector, SelectorParams, DEFAULT_LOW_TIME_MS};
use scalino::time::TimeBudget;

/// Pick a move for a FEN and report which tier chose it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    /// Remaining clock of the side to move in milliseconds (unlimited if absent)
    #[arg(short, long)]
    time_ms: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_LOW_TIME_MS)]
    low_time_ms: u64,
}

fn main() {
    let args = Args::parse();

    let pos = match decode(&args.fen) {
        Ok(pos) => pos,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let budget = match args.time_ms {
        Some(ms) => TimeBudget::remaining(ms),
        None => TimeBudget::unlimited(),
    };

    let mut selector = MoveSelector::new(SelectorParams::new().low_time_ms(args.low_time_ms));
    match selector.select_move(&pos, &budget) {
        Ok(selection) => {
            match selection.score {
                Some(score) => println!("{} {} {}", selection.uci(), selection.tier, score),
                None => println!("{} {}", selection.uci(), selection.tier),
            }
            println!("{}", selector.stats().summary());
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
