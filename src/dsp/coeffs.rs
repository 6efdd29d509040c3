//! Transfer function coefficients
//!
//! H(z) = (b0 + b1*z^-1 + ... + bM*z^-M) / (1 + a1*z^-1 + ... + aN*z^-N)

use std::f64::consts::PI;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{EegError, Result};

/// Numerator/denominator coefficients of a digital IIR filter
///
/// Always normalized so that `a[0] == 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCoefficients {
    b: Vec<f64>,
    a: Vec<f64>,
}

impl FilterCoefficients {
    /// Build coefficients, normalizing by `a[0]`
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Result<Self> {
        if b.is_empty() || a.is_empty() {
            return Err(EegError::filter_spec("coefficient sequences must not be empty"));
        }
        if b.iter().chain(a.iter()).any(|c| !c.is_finite()) {
            return Err(EegError::filter_spec("coefficients must be finite"));
        }
        let a0 = a[0];
        if a0 == 0.0 {
            return Err(EegError::filter_spec("leading denominator coefficient is zero"));
        }
        Ok(Self {
            b: b.into_iter().map(|c| c / a0).collect(),
            a: a.into_iter().map(|c| c / a0).collect(),
        })
    }

    /// Numerator coefficients
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Denominator coefficients (`a[0] == 1`)
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Filter order (highest delay in either polynomial)
    pub fn order(&self) -> usize {
        self.b.len().max(self.a.len()) - 1
    }

    /// Samples of odd extension added at each end by zero-phase filtering
    pub fn padlen(&self) -> usize {
        3 * self.b.len().max(self.a.len())
    }

    /// Complex response at `freq_hz`
    pub fn frequency_response(&self, freq_hz: f64, sample_rate: f64) -> Complex64 {
        let w = 2.0 * PI * freq_hz / sample_rate;
        let eval = |coeffs: &[f64]| -> Complex64 {
            coeffs
                .iter()
                .enumerate()
                .map(|(k, &c)| c * Complex64::from_polar(1.0, -w * k as f64))
                .sum()
        };
        eval(&self.b) / eval(&self.a)
    }

    /// Linear magnitude response at `freq_hz`
    pub fn magnitude_at(&self, freq_hz: f64, sample_rate: f64) -> f64 {
        self.frequency_response(freq_hz, sample_rate).norm()
    }

    /// Magnitude response at `freq_hz` in dB
    pub fn magnitude_db_at(&self, freq_hz: f64, sample_rate: f64) -> f64 {
        crate::metrics::linear_to_db(self.magnitude_at(freq_hz, sample_rate))
    }

    /// True when every pole lies strictly inside the unit circle.
    ///
    /// Uses the Schur-Cohn step-down recursion on the denominator.
    pub fn is_stable(&self) -> bool {
        let mut poly = self.a.clone();
        while poly.len() > 1 {
            let n = poly.len() - 1;
            let k = poly[n];
            if k.abs() >= 1.0 {
                return false;
            }
            let scale = 1.0 - k * k;
            poly = (0..n).map(|i| (poly[i] - k * poly[n - i]) / scale).collect();
        }
        true
    }
}
