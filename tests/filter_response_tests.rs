//! Filter Response Tests
//!
//! Attenuation of pure tones through each stage, measured away from the
//! signal edges.

use std::f64::consts::PI;

use eeg_filter::dsp::{BandpassStage, FilterStage, NotchStage};
use eeg_filter::metrics::{amplitude_ratio, attenuation_db};
use test_case::test_case;

const SAMPLE_RATE: f64 = 256.0;
const LEN: usize = 4096;

fn tone(freq: f64) -> Vec<f64> {
    (0..LEN)
        .map(|i| (2.0 * PI * freq * i as f64 / SAMPLE_RATE).sin())
        .collect()
}

/// Middle half of a signal, clear of edge transients
fn center(samples: &[f64]) -> &[f64] {
    &samples[LEN / 4..3 * LEN / 4]
}

fn through(stage: &dyn FilterStage, freq: f64) -> (Vec<f64>, Vec<f64>) {
    let input = tone(freq);
    let output = stage.apply_channel(&input, SAMPLE_RATE).unwrap();
    assert_eq!(output.len(), input.len());
    (input, output)
}

#[test]
fn test_notch_attenuates_target_by_more_than_20db() {
    let (input, output) = through(&NotchStage::new(60.0, 30.0), 60.0);
    let atten = attenuation_db(center(&input), center(&output));
    assert!(atten > 20.0, "60 Hz attenuated by only {:.1} dB", atten);
}

#[test_case(10.0 ; "alpha")]
#[test_case(20.0 ; "beta")]
#[test_case(100.0 ; "far above")]
fn test_notch_leaves_distant_tones(freq: f64) {
    let (input, output) = through(&NotchStage::new(60.0, 30.0), freq);
    let atten = attenuation_db(center(&input), center(&output));
    assert!(atten.abs() < 1.0, "{} Hz changed by {:.2} dB", freq, atten);
}

#[test_case(12.0 ; "lower passband")]
#[test_case(15.0 ; "mid passband")]
#[test_case(25.0 ; "upper passband")]
fn test_bandpass_keeps_passband(freq: f64) {
    let (input, output) = through(&BandpassStage::new(8.0, 30.0), freq);
    let ratio = amplitude_ratio(center(&input), center(&output));
    assert!(ratio > 0.9, "{} Hz kept only {:.1}%", freq, ratio * 100.0);
}

#[test_case(1.0 ; "slow drift")]
#[test_case(60.0 ; "line noise")]
#[test_case(100.0 ; "high frequency")]
fn test_bandpass_rejects_stopband(freq: f64) {
    let (input, output) = through(&BandpassStage::new(8.0, 30.0), freq);
    let ratio = amplitude_ratio(center(&input), center(&output));
    assert!(ratio < 0.1, "{} Hz kept {:.1}%", freq, ratio * 100.0);
}

#[test]
fn test_bandpass_edges_are_6db_after_zero_phase() {
    // -3 dB per pass, applied twice
    for edge in [8.0, 30.0] {
        let (input, output) = through(&BandpassStage::new(8.0, 30.0), edge);
        let atten = attenuation_db(center(&input), center(&output));
        assert!((atten - 6.02).abs() < 0.2, "{} Hz edge at {:.2} dB", edge, atten);
    }
}
