//! CLI Command Implementations

use log::info;

use super::{Cli, OutputFormat};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pipeline::run_synthetic;
use crate::signal::SignalMatrix;

/// Build the pipeline configuration from an optional file plus flag overrides.
pub fn resolve_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration: {}", path.display());
            PipelineConfig::from_json_file(path)?
        }
        None => PipelineConfig::default(),
    };

    if let Some(samples) = cli.samples {
        config.sample_count = samples;
    }
    if let Some(channels) = cli.channels {
        config.channel_count = channels;
    }
    if let Some(rate) = cli.sample_rate {
        config.sample_rate = rate;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    Ok(config)
}

/// Render a matrix in the requested format.
pub fn render(matrix: &SignalMatrix, format: OutputFormat, full: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(matrix.to_text(!full)),
        OutputFormat::Json => Ok(serde_json::to_string(matrix)?),
    }
}

/// Run the configured pipeline and return the rendered output.
pub fn run(cli: &Cli) -> Result<String> {
    let config = resolve_config(cli)?;
    let filtered = run_synthetic(&config)?;
    render(&filtered, cli.format, cli.full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "seed": 3, "channel_count": 5 }"#).unwrap();

        let cli = Cli::parse_from([
            "eeg-filter",
            "--config",
            path.to_str().unwrap(),
            "--channels",
            "2",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.seed, 3);
        assert_eq!(config.channel_count, 2);
        assert_eq!(config.sample_count, 1024);
    }

    #[test]
    fn test_json_output_parses() {
        let cli = Cli::parse_from(["eeg-filter", "--samples", "256", "--format", "json"]);
        let output = run(&cli).unwrap();
        let parsed: SignalMatrix = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.shape(), (3, 256));
    }

    #[test]
    fn test_text_output_is_summarised() {
        let cli = Cli::parse_from(["eeg-filter"]);
        let output = run(&cli).unwrap();
        assert!(output.starts_with("[["));
        assert!(output.contains("..."));
        assert_eq!(output.lines().count(), 3);
    }
}
