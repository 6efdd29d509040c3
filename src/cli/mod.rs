//! CLI Module
//!
//! Command-line interface for running the filter pipeline.

pub mod commands;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Filter synthetic EEG data with a notch and a bandpass filter
#[derive(Parser, Debug)]
#[command(name = "eeg-filter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON configuration file (missing fields use defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Samples per channel
    #[arg(long)]
    pub samples: Option<usize>,

    /// Number of channels
    #[arg(long)]
    pub channels: Option<usize>,

    /// Sampling rate in Hz
    #[arg(long)]
    pub sample_rate: Option<f64>,

    /// Seed for the synthetic signal
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print every sample instead of a summary
    #[arg(long)]
    pub full: bool,
}

/// How the filtered matrix is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Nested-array text
    Text,
    /// JSON object with channels and sample rate
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["eeg-filter"]);
        assert!(cli.config.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.full);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "eeg-filter",
            "--samples",
            "2048",
            "--seed",
            "9",
            "--format",
            "json",
        ]);
        assert_eq!(cli.samples, Some(2048));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
