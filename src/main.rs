//! Round-robin tournament between Isolation agents.
//!
//! Usage: `isolation_agent [config.toml]`. Without an argument, or when the
//! file does not exist, the built-in contender line-up is used. Set
//! `RUST_LOG=debug` to follow every search depth.

use isolation_agent::config::TournamentConfig;
use isolation_agent::tournament::run_tournament;
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => TournamentConfig::load_or_default(&PathBuf::from(path))?,
        None => TournamentConfig::default(),
    };

    let report = run_tournament(&config)?;
    println!("{report}");
    Ok(())
}
