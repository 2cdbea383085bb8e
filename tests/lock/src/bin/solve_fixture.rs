//! Runs a catalog world and prints deterministic output lines for
//! cross-process verification.
//!
//! Usage: `solve_fixture [WORLD] [STRATEGY] [MAX_DEPTH]`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::process::ExitCode;

use gps_search::contract::Cost;
use gps_search::policy::Strategy;
use lock_tests::fixture::{fixture_lines, DEFAULT_MAX_DEPTH, DEFAULT_STRATEGY, DEFAULT_WORLD};

fn main() -> ExitCode {
    pretty_env_logger::init();

    let mut args = std::env::args().skip(1);
    let world = args.next().unwrap_or_else(|| DEFAULT_WORLD.to_string());
    let strategy = match args.next().map(|s| s.parse::<Strategy>()) {
        None => DEFAULT_STRATEGY,
        Some(Ok(strategy)) => strategy,
        Some(Err(e)) => {
            eprintln!("solve_fixture: {e}");
            return ExitCode::from(2);
        }
    };
    let max_depth = match args.next().map(|s| s.parse::<Cost>()) {
        None => DEFAULT_MAX_DEPTH,
        Some(Ok(depth)) => depth,
        Some(Err(e)) => {
            eprintln!("solve_fixture: invalid max depth: {e}");
            return ExitCode::from(2);
        }
    };

    match fixture_lines(&world, strategy, max_depth) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("run failed: {e}");
            eprintln!("solve_fixture: {e}");
            ExitCode::FAILURE
        }
    }
}
