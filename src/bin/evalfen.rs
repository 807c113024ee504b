use clap::Parser;
use scalino::encode::START_FEN;
use scalino::eval;

/// Score a FEN with the native evaluator (side-to-move point of view)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,
}

fn main() {
    let args = Args::parse();
    eval::init_tables();

    match eval::evaluate_fen(&args.fen) {
        Ok(score) => println!("{}", score),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
