//! War CLI - play a territory conquest game in the terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::Parser;
use std::process::ExitCode;
use war::OutputFormat;

/// War - a turn-based territory conquest game
#[derive(Parser, Debug)]
#[command(name = "war")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of territories (prompted for when omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    capacity: Option<i64>,

    /// Random seed for the dice (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format for listings and battle reports: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Do not wait for Enter after listings and invalid options
    #[arg(long)]
    no_pause: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let result = cli::play(args.capacity, args.seed, args.format, !args.no_pause);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
