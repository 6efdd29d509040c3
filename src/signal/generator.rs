//! Synthetic EEG-like test signals
//!
//! Each channel is an alpha (10 Hz) and a beta (20 Hz) sinusoid plus
//! Gaussian noise. Only intended as test input for the filter pipeline.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use super::SignalMatrix;
use crate::config::PipelineConfig;
use crate::error::{EegError, Result};

/// Sample times `i / sample_rate` for `num_samples` points, end excluded
pub fn time_vector(num_samples: usize, sample_rate: f64) -> Vec<f64> {
    (0..num_samples).map(|i| i as f64 / sample_rate).collect()
}

/// Generator for sum-of-sinusoids plus noise signals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticEeg {
    /// First sinusoid frequency in Hz
    pub alpha_hz: f64,
    /// Second sinusoid frequency in Hz
    pub beta_hz: f64,
    /// Standard deviation of the zero-mean Gaussian noise
    pub noise_std: f64,
}

impl Default for SyntheticEeg {
    fn default() -> Self {
        Self {
            alpha_hz: 10.0,
            beta_hz: 20.0,
            noise_std: 0.5,
        }
    }
}

impl SyntheticEeg {
    /// Generate a `num_channels x num_samples` matrix.
    ///
    /// The same seed always produces the same matrix. Noise is drawn one
    /// channel at a time, in channel order, from a single generator.
    pub fn generate(
        &self,
        num_channels: usize,
        num_samples: usize,
        sample_rate: f64,
        seed: u64,
    ) -> Result<SignalMatrix> {
        if num_channels == 0 || num_samples == 0 {
            return Err(EegError::signal(format!(
                "cannot generate a {}x{} matrix",
                num_channels, num_samples
            )));
        }
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(EegError::signal(format!(
                "sample rate must be positive, got {}",
                sample_rate
            )));
        }
        if !(self.noise_std.is_finite() && self.noise_std >= 0.0) {
            return Err(EegError::signal(format!(
                "noise std must be non-negative, got {}",
                self.noise_std
            )));
        }
        let noise = Normal::new(0.0, self.noise_std)
            .map_err(|e| EegError::signal(format!("noise std {}: {}", self.noise_std, e)))?;
        let mut rng = StdRng::seed_from_u64(seed);

        let t = time_vector(num_samples, sample_rate);
        let clean: Vec<f64> = t
            .iter()
            .map(|&t| (2.0 * PI * self.alpha_hz * t).sin() + (2.0 * PI * self.beta_hz * t).sin())
            .collect();

        let channels: Vec<Vec<f64>> = (0..num_channels)
            .map(|_| clean.iter().map(|s| s + noise.sample(&mut rng)).collect())
            .collect();

        SignalMatrix::from_channels(channels, sample_rate)
    }

    /// Generate the matrix described by a pipeline configuration
    pub fn from_config(&self, config: &PipelineConfig) -> Result<SignalMatrix> {
        self.generate(
            config.channel_count,
            config.sample_count,
            config.sample_rate,
            config.seed,
        )
    }
}
