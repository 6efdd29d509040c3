//! Pipeline configuration
//!
//! All parameters of a pipeline run live in [`PipelineConfig`]. Files may
//! specify any subset of fields; missing fields take the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EegError, Result};

/// Default number of samples per channel
pub const DEFAULT_SAMPLE_COUNT: usize = 1024;
/// Default number of channels
pub const DEFAULT_CHANNEL_COUNT: usize = 3;
/// Default sampling rate in Hz
pub const DEFAULT_SAMPLE_RATE: f64 = 256.0;

/// Parameters for generating and filtering a signal matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Samples per channel
    pub sample_count: usize,
    /// Number of channels
    pub channel_count: usize,
    /// Sampling rate in Hz
    pub sample_rate: f64,
    /// Bandpass low cutoff in Hz
    pub lowcut: f64,
    /// Bandpass high cutoff in Hz
    pub highcut: f64,
    /// Notch center frequency in Hz
    pub notch_freq: f64,
    /// Notch quality factor
    pub quality_factor: f64,
    /// Butterworth bandpass order
    pub filter_order: usize,
    /// Seed for the synthetic signal generator
    pub seed: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            channel_count: DEFAULT_CHANNEL_COUNT,
            sample_rate: DEFAULT_SAMPLE_RATE,
            lowcut: 8.0,
            highcut: 30.0,
            notch_freq: 60.0,
            quality_factor: 30.0,
            filter_order: crate::dsp::DEFAULT_ORDER,
            seed: 0,
        }
    }
}

impl PipelineConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize the configuration to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Half the sampling rate
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Check structural parameters.
    ///
    /// Filter frequencies are checked by the designers, which report
    /// [`EegError::InvalidFilterSpec`].
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(invalid("sample_count must be greater than 0"));
        }
        if self.channel_count == 0 {
            return Err(invalid("channel_count must be greater than 0"));
        }
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(invalid(format!(
                "sample_rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if self.filter_order == 0 {
            return Err(invalid("filter_order must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> EegError {
    EegError::InvalidConfig {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = PipelineConfig::default();
        assert_eq!(config.sample_count, 1024);
        assert_eq!(config.channel_count, 3);
        assert_eq!(config.sample_rate, 256.0);
        assert_eq!(config.lowcut, 8.0);
        assert_eq!(config.highcut, 30.0);
        assert_eq!(config.notch_freq, 60.0);
        assert_eq!(config.quality_factor, 30.0);
        assert_eq!(config.filter_order, 5);
        assert_eq!(config.seed, 0);
        assert_eq!(config.nyquist(), 128.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PipelineConfig::from_json_str(r#"{ "seed": 7, "notch_freq": 50.0 }"#).unwrap();
        assert_eq!(
            config,
            PipelineConfig {
                seed: 7,
                notch_freq: 50.0,
                ..PipelineConfig::default()
            }
        );
    }

    #[test]
    fn test_json_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.json");
        let config = PipelineConfig {
            channel_count: 8,
            sample_rate: 500.0,
            ..PipelineConfig::default()
        };
        std::fs::write(&path, config.to_json().unwrap()).unwrap();

        assert_eq!(PipelineConfig::from_json_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PipelineConfig::from_json_file("/nonexistent/pipeline.json").unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let config = PipelineConfig {
            channel_count: 0,
            ..PipelineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EegError::InvalidConfig { .. })
        ));

        let config = PipelineConfig {
            sample_rate: -1.0,
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(PipelineConfig::default().validate().is_ok());
    }
}
