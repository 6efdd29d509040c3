//! eeg-filter CLI
//!
//! Generates synthetic EEG data, filters it and prints the result.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use eeg_filter::cli::{commands, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the matrix
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    info!("eeg-filter v{}", env!("CARGO_PKG_VERSION"));

    let output = commands::run(&cli).context("filter pipeline failed")?;
    println!("{}", output);
    Ok(())
}
