//! function-usages — report which functions each file uses exclusively.
//!
//! Usage:
//!   function-usages [--pattern <REGEX>] [--no-paranthesis] <FILES>...
//!
//! Prints, per file, the functions no other listed file calls. Logging goes
//! to stderr (`RUST_LOG=debug` for per-file detail); stdout carries only the
//! report.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use usages::cli::{self, Cli};
use usages::UsageError;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            match e.downcast_ref::<UsageError>() {
                Some(not_found @ UsageError::FileNotFound(_)) => eprintln!("{}", not_found),
                _ => eprintln!("Error: {:#}", e),
            }
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Ok(cli::run(cli, &cwd)?)
}
