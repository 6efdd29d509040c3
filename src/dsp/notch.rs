//! Second-order IIR notch design
//!
//! Removes a narrow band around a single frequency, e.g. 50/60 Hz line noise.

use std::f64::consts::PI;

use super::FilterCoefficients;
use crate::error::{EegError, Result};

/// Design a second-order notch filter.
///
/// `quality` sets the width of the rejected band: the -3 dB bandwidth is
/// `freq_hz / quality`.
///
/// # Errors
/// [`EegError::InvalidFilterSpec`] unless `0 < freq_hz < sample_rate / 2`
/// and `quality > 0`.
pub fn design_notch(freq_hz: f64, sample_rate: f64, quality: f64) -> Result<FilterCoefficients> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(EegError::filter_spec(format!(
            "sample rate must be positive, got {}",
            sample_rate
        )));
    }
    let nyquist = sample_rate / 2.0;
    if !(freq_hz.is_finite() && freq_hz > 0.0 && freq_hz < nyquist) {
        return Err(EegError::filter_spec(format!(
            "notch frequency {} Hz must lie strictly between 0 and Nyquist ({} Hz)",
            freq_hz, nyquist
        )));
    }
    if !(quality.is_finite() && quality > 0.0) {
        return Err(EegError::filter_spec(format!(
            "quality factor must be positive, got {}",
            quality
        )));
    }

    // Normalized to Nyquist, then to radians/sample
    let w0 = freq_hz / nyquist;
    let bw = w0 / quality;
    let w0 = w0 * PI;
    let bw = bw * PI;

    let beta = (bw / 2.0).tan();
    let gain = 1.0 / (1.0 + beta);
    let cos_w0 = w0.cos();

    FilterCoefficients::new(
        vec![gain, -2.0 * gain * cos_w0, gain],
        vec![1.0, -2.0 * gain * cos_w0, 2.0 * gain - 1.0],
    )
}
