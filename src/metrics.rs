//! Signal measurements
//!
//! Objective level measurements used to verify filter behavior without
//! inspecting plots.

use num_traits::Float;

/// Convert linear amplitude to decibels
pub fn linear_to_db<T: Float>(linear: T) -> T {
    if linear <= T::zero() {
        T::neg_infinity()
    } else {
        T::from(20.0).unwrap_or_else(T::one) * linear.log10()
    }
}

/// Convert decibels to linear amplitude
pub fn db_to_linear<T: Float>(db: T) -> T {
    T::from(10.0)
        .unwrap_or_else(T::one)
        .powf(db / T::from(20.0).unwrap_or_else(T::one))
}

/// Arithmetic mean; zero for an empty slice
pub fn mean<T: Float>(samples: &[T]) -> T {
    if samples.is_empty() {
        return T::zero();
    }
    samples.iter().fold(T::zero(), |acc, &s| acc + s) / len_of(samples)
}

/// Population variance; zero for an empty slice
pub fn variance<T: Float>(samples: &[T]) -> T {
    if samples.is_empty() {
        return T::zero();
    }
    let m = mean(samples);
    samples
        .iter()
        .fold(T::zero(), |acc, &s| acc + (s - m) * (s - m))
        / len_of(samples)
}

/// Root mean square level
pub fn rms<T: Float>(samples: &[T]) -> T {
    if samples.is_empty() {
        return T::zero();
    }
    (samples.iter().fold(T::zero(), |acc, &s| acc + s * s) / len_of(samples)).sqrt()
}

/// Largest absolute sample
pub fn peak<T: Float>(samples: &[T]) -> T {
    samples.iter().fold(T::zero(), |acc, &s| acc.max(s.abs()))
}

/// Output RMS as a fraction of input RMS
pub fn amplitude_ratio<T: Float>(input: &[T], output: &[T]) -> T {
    let input_rms = rms(input);
    if input_rms == T::zero() {
        return T::zero();
    }
    rms(output) / input_rms
}

/// Attenuation from input to output in dB (positive means quieter)
pub fn attenuation_db<T: Float>(input: &[T], output: &[T]) -> T {
    -linear_to_db(amplitude_ratio(input, output))
}

fn len_of<T: Float>(samples: &[T]) -> T {
    T::from(samples.len()).unwrap_or_else(T::one)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_db_conversions() {
        assert_relative_eq!(linear_to_db(10.0_f64), 20.0, epsilon = 1e-12);
        assert_relative_eq!(db_to_linear(-20.0_f64), 0.1, epsilon = 1e-12);
        assert_eq!(linear_to_db(0.0_f64), f64::NEG_INFINITY);
        assert_relative_eq!(linear_to_db(0.5_f32), -6.0206, epsilon = 1e-3);
    }

    #[test]
    fn test_sine_rms() {
        let sine: Vec<f64> = (0..1000)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 100.0).sin())
            .collect();
        assert_relative_eq!(rms(&sine), std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(peak(&sine), 1.0, epsilon = 1e-9);
        assert_relative_eq!(variance(&sine), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_attenuation() {
        let input = [1.0, -1.0, 1.0, -1.0];
        let output = [0.1, -0.1, 0.1, -0.1];
        assert_relative_eq!(amplitude_ratio(&input, &output), 0.1, epsilon = 1e-12);
        assert_relative_eq!(attenuation_db(&input, &output), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_slices() {
        let empty: [f64; 0] = [];
        assert_eq!(mean(&empty), 0.0);
        assert_eq!(variance(&empty), 0.0);
        assert_eq!(rms(&empty), 0.0);
        assert_eq!(amplitude_ratio(&empty, &empty), 0.0);
    }
}
