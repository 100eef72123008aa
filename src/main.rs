//! # Main — CLI Entry Point
//!
//! Parses the two mutually exclusive generation modes and dispatches to the
//! execution functions in `cli`:
//!
//! - `-r/--range LIMIT`: every prime from 1 up to LIMIT (inclusive), via
//!   the Sieve of Atkin.
//! - `-d/--digits DIGITS TOTAL`: TOTAL random primes of exactly DIGITS
//!   decimal digits, via uniform draws filtered by trial division.
//!
//! Positivity of every argument is enforced at parse time; results go to
//! stdout, logs to stderr (or JSON via `LOG_FORMAT=json`).

mod cli;

use anyhow::Result;
use clap::{ArgGroup, Parser};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "primegen", about = "Generate prime numbers by range or by digit size")]
#[command(group(ArgGroup::new("mode").required(true).args(["range", "digits"])))]
struct Cli {
    /// Find all the prime numbers from 1 up to LIMIT (inclusive).
    /// For example: -r 10 outputs [2, 3, 5, 7]
    #[arg(
        short = 'r',
        long,
        value_name = "LIMIT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    range: Option<u64>,

    /// Print TOTAL random prime numbers of exactly DIGITS decimal digits.
    /// For example: -d 10 5 prints five ten-digit primes
    #[arg(
        short = 'd',
        long,
        num_args = 2,
        value_names = ["DIGITS", "TOTAL"],
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    digits: Option<Vec<u64>>,
}

fn main() -> Result<()> {
    // Structured logging: LOG_FORMAT=json for machine consumers, otherwise
    // human-readable on stderr so stdout stays clean for results.
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();

    match (cli.range, cli.digits) {
        (Some(limit), None) => cli::run_range(limit),
        (None, Some(args)) => cli::run_digits(args[0], args[1]), // num_args = 2
        _ => unreachable!("clap enforces exactly one mode"),
    }
}
