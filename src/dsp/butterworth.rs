//! Butterworth IIR design
//!
//! Design runs in zero/pole/gain form:
//! 1. analog lowpass prototype (poles on the left half of the unit circle)
//! 2. frequency transform to the requested band type
//! 3. bilinear transform to the z-plane
//! 4. expansion into transfer function polynomials

use std::f64::consts::PI;

use num_complex::Complex64;

use super::FilterCoefficients;
use crate::error::{EegError, Result};

/// Default bandpass order
pub const DEFAULT_ORDER: usize = 5;

/// Sample rate used for the normalized bilinear transform
const NORMALIZED_FS: f64 = 2.0;

/// Band type of a Butterworth design
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandType {
    /// Pass below the cutoff
    Lowpass(f64),
    /// Pass above the cutoff
    Highpass(f64),
    /// Pass between the two cutoffs
    Bandpass(f64, f64),
}

/// Zeros, poles and gain of a transfer function
#[derive(Debug, Clone)]
struct Zpk {
    zeros: Vec<Complex64>,
    poles: Vec<Complex64>,
    gain: f64,
}

impl Zpk {
    fn degree(&self) -> usize {
        self.poles.len() - self.zeros.len()
    }
}

/// Design a Butterworth bandpass filter of the given order.
///
/// The resulting filter has `2 * order` poles and is -3 dB at both edges.
///
/// # Errors
/// [`EegError::InvalidFilterSpec`] unless `0 < low_hz < high_hz < sample_rate / 2`
/// and `order >= 1`.
pub fn design_bandpass(
    low_hz: f64,
    high_hz: f64,
    sample_rate: f64,
    order: usize,
) -> Result<FilterCoefficients> {
    design(BandType::Bandpass(low_hz, high_hz), sample_rate, order)
}

/// Design a Butterworth lowpass filter
pub fn design_lowpass(cutoff_hz: f64, sample_rate: f64, order: usize) -> Result<FilterCoefficients> {
    design(BandType::Lowpass(cutoff_hz), sample_rate, order)
}

/// Design a Butterworth highpass filter
pub fn design_highpass(cutoff_hz: f64, sample_rate: f64, order: usize) -> Result<FilterCoefficients> {
    design(BandType::Highpass(cutoff_hz), sample_rate, order)
}

/// Design a Butterworth filter of any supported band type
pub fn design(band: BandType, sample_rate: f64, order: usize) -> Result<FilterCoefficients> {
    if order == 0 {
        return Err(EegError::filter_spec("filter order must be at least 1"));
    }
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(EegError::filter_spec(format!(
            "sample rate must be positive, got {}",
            sample_rate
        )));
    }
    let nyquist = sample_rate / 2.0;

    let prototype = analog_prototype(order);
    let analog = match band {
        BandType::Lowpass(cutoff) => {
            let wn = prewarp(normalize(cutoff, nyquist)?);
            lowpass_to_lowpass(&prototype, wn)
        }
        BandType::Highpass(cutoff) => {
            let wn = prewarp(normalize(cutoff, nyquist)?);
            lowpass_to_highpass(&prototype, wn)
        }
        BandType::Bandpass(low, high) => {
            if !(low < high) {
                return Err(EegError::filter_spec(format!(
                    "low cutoff {} Hz must be below high cutoff {} Hz",
                    low, high
                )));
            }
            let w_low = prewarp(normalize(low, nyquist)?);
            let w_high = prewarp(normalize(high, nyquist)?);
            lowpass_to_bandpass(&prototype, (w_low * w_high).sqrt(), w_high - w_low)
        }
    };

    let digital = bilinear(&analog, NORMALIZED_FS);
    to_coefficients(&digital)
}

/// Cutoff as a fraction of Nyquist, strictly inside (0, 1)
fn normalize(cutoff_hz: f64, nyquist: f64) -> Result<f64> {
    if !(cutoff_hz.is_finite() && cutoff_hz > 0.0 && cutoff_hz < nyquist) {
        return Err(EegError::filter_spec(format!(
            "cutoff {} Hz must lie strictly between 0 and Nyquist ({} Hz)",
            cutoff_hz, nyquist
        )));
    }
    Ok(cutoff_hz / nyquist)
}

/// Analog frequency that the bilinear transform maps onto `wn`
fn prewarp(wn: f64) -> f64 {
    2.0 * NORMALIZED_FS * (PI * wn / NORMALIZED_FS).tan()
}

/// Normalized analog Butterworth lowpass: unit cutoff, no zeros
fn analog_prototype(order: usize) -> Zpk {
    let n = order as f64;
    let poles = (0..order)
        .map(|i| {
            let m = -(n - 1.0) + 2.0 * i as f64;
            -Complex64::from_polar(1.0, PI * m / (2.0 * n))
        })
        .collect();
    Zpk {
        zeros: Vec::new(),
        poles,
        gain: 1.0,
    }
}

fn lowpass_to_lowpass(proto: &Zpk, wo: f64) -> Zpk {
    Zpk {
        zeros: proto.zeros.iter().map(|z| *z * wo).collect(),
        poles: proto.poles.iter().map(|p| *p * wo).collect(),
        gain: proto.gain * wo.powi(proto.degree() as i32),
    }
}

fn lowpass_to_highpass(proto: &Zpk, wo: f64) -> Zpk {
    let mut zeros: Vec<Complex64> = proto.zeros.iter().map(|z| wo / *z).collect();
    let poles = proto.poles.iter().map(|p| wo / *p).collect();
    // Zeros at infinity move to the origin
    zeros.extend(std::iter::repeat(Complex64::new(0.0, 0.0)).take(proto.degree()));

    let num: Complex64 = proto.zeros.iter().map(|z| -*z).product();
    let den: Complex64 = proto.poles.iter().map(|p| -*p).product();
    Zpk {
        zeros,
        poles,
        gain: proto.gain * (num / den).re,
    }
}

fn lowpass_to_bandpass(proto: &Zpk, wo: f64, bw: f64) -> Zpk {
    let split = |roots: &[Complex64]| -> Vec<Complex64> {
        let scaled: Vec<Complex64> = roots.iter().map(|r| *r * (bw / 2.0)).collect();
        let offsets: Vec<Complex64> = scaled.iter().map(|r| (*r * *r - wo * wo).sqrt()).collect();
        scaled
            .iter()
            .zip(&offsets)
            .map(|(r, d)| *r + *d)
            .chain(scaled.iter().zip(&offsets).map(|(r, d)| *r - *d))
            .collect()
    };

    let mut zeros = split(&proto.zeros);
    let poles = split(&proto.poles);
    zeros.extend(std::iter::repeat(Complex64::new(0.0, 0.0)).take(proto.degree()));

    Zpk {
        zeros,
        poles,
        gain: proto.gain * bw.powi(proto.degree() as i32),
    }
}

/// Map s-plane zeros/poles to the z-plane: z = (2fs + s) / (2fs - s)
fn bilinear(analog: &Zpk, fs: f64) -> Zpk {
    let fs2 = Complex64::new(2.0 * fs, 0.0);
    let map = |s: &Complex64| (fs2 + *s) / (fs2 - *s);

    let mut zeros: Vec<Complex64> = analog.zeros.iter().map(map).collect();
    let poles = analog.poles.iter().map(map).collect();
    // Zeros at infinity land on Nyquist
    zeros.extend(std::iter::repeat(Complex64::new(-1.0, 0.0)).take(analog.degree()));

    let num: Complex64 = analog.zeros.iter().map(|z| fs2 - *z).product();
    let den: Complex64 = analog.poles.iter().map(|p| fs2 - *p).product();
    Zpk {
        zeros,
        poles,
        gain: analog.gain * (num / den).re,
    }
}

/// Monic polynomial coefficients (highest power first) with the given roots
fn poly(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for root in roots {
        let mut next = coeffs.clone();
        next.push(Complex64::new(0.0, 0.0));
        for (i, c) in coeffs.iter().enumerate() {
            next[i + 1] -= *c * *root;
        }
        coeffs = next;
    }
    coeffs
}

fn to_coefficients(zpk: &Zpk) -> Result<FilterCoefficients> {
    // Roots come in conjugate pairs, so imaginary parts are rounding noise
    let b = poly(&zpk.zeros).iter().map(|c| c.re * zpk.gain).collect();
    let a = poly(&zpk.poles).iter().map(|c| c.re).collect();
    FilterCoefficients::new(b, a)
}
