//! Filter stage trait and the two pipeline stages

use log::debug;
use serde::{Deserialize, Serialize};

use super::{design_bandpass, design_notch, filtfilt, FilterCoefficients, DEFAULT_ORDER};
use crate::error::Result;
use crate::signal::SignalMatrix;

/// A zero-phase filter applied to every channel of a matrix
///
/// Coefficients are designed on each call; stages hold only their
/// design parameters.
pub trait FilterStage: Send + Sync {
    /// Stage identifier used in logs and errors
    fn name(&self) -> &'static str;

    /// Design coefficients for the given sample rate
    fn design(&self, sample_rate: f64) -> Result<FilterCoefficients>;

    /// Filter one channel forward and backward
    fn apply_channel(&self, samples: &[f64], sample_rate: f64) -> Result<Vec<f64>> {
        let coeffs = self.design(sample_rate)?;
        filtfilt(&coeffs, samples)
    }

    /// Filter every channel independently, preserving order and shape
    fn apply(&self, matrix: &SignalMatrix) -> Result<SignalMatrix> {
        let coeffs = self.design(matrix.sample_rate())?;
        debug!(
            "[{}] order {} ({} coefficients), padlen {}",
            self.name(),
            coeffs.order(),
            coeffs.b().len(),
            coeffs.padlen()
        );
        matrix.try_map_channels(|channel| filtfilt(&coeffs, channel))
    }
}

/// Removes a narrow band around `freq_hz`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotchStage {
    /// Center frequency in Hz
    pub freq_hz: f64,
    /// Quality factor (center / bandwidth)
    pub quality: f64,
}

impl NotchStage {
    pub fn new(freq_hz: f64, quality: f64) -> Self {
        Self { freq_hz, quality }
    }
}

impl FilterStage for NotchStage {
    fn name(&self) -> &'static str {
        "notch"
    }

    fn design(&self, sample_rate: f64) -> Result<FilterCoefficients> {
        design_notch(self.freq_hz, sample_rate, self.quality)
    }
}

/// Keeps energy between `low_hz` and `high_hz` (Butterworth)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandpassStage {
    /// Low cutoff in Hz
    pub low_hz: f64,
    /// High cutoff in Hz
    pub high_hz: f64,
    /// Butterworth order
    pub order: usize,
}

impl BandpassStage {
    /// Bandpass stage with the default order
    pub fn new(low_hz: f64, high_hz: f64) -> Self {
        Self::with_order(low_hz, high_hz, DEFAULT_ORDER)
    }

    pub fn with_order(low_hz: f64, high_hz: f64, order: usize) -> Self {
        Self {
            low_hz,
            high_hz,
            order,
        }
    }
}

impl FilterStage for BandpassStage {
    fn name(&self) -> &'static str {
        "bandpass"
    }

    fn design(&self, sample_rate: f64) -> Result<FilterCoefficients> {
        let coeffs = design_bandpass(self.low_hz, self.high_hz, sample_rate, self.order)?;
        debug!(
            "[bandpass] {:.1}-{:.1} Hz edges at {:.2} / {:.2} dB",
            self.low_hz,
            self.high_hz,
            coeffs.magnitude_db_at(self.low_hz, sample_rate),
            coeffs.magnitude_db_at(self.high_hz, sample_rate)
        );
        Ok(coeffs)
    }
}
