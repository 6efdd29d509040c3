//! Linear filtering and zero-phase (forward-backward) filtering

use super::FilterCoefficients;
use crate::error::{EegError, Result};

/// Apply a filter with Direct Form II transposed.
///
/// ```text
/// y[n]   = b[0]*x[n] + z[0]
/// z[i]   = b[i+1]*x[n] - a[i+1]*y[n] + z[i+1]
/// ```
///
/// `zi` is the initial state (`order()` values); `None` starts from rest.
///
/// # Errors
/// [`EegError::InvalidFilterSpec`] when `zi` does not hold exactly
/// `order()` values.
pub fn lfilter(coeffs: &FilterCoefficients, x: &[f64], zi: Option<&[f64]>) -> Result<Vec<f64>> {
    let (b, a) = padded(coeffs);
    let n = b.len();
    let mut z = match zi {
        Some(zi) if zi.len() != n - 1 => {
            return Err(EegError::filter_spec(format!(
                "initial state has {} values, filter of order {} needs {}",
                zi.len(),
                coeffs.order(),
                n - 1
            )));
        }
        Some(zi) => zi.to_vec(),
        None => vec![0.0; n - 1],
    };

    let mut y = Vec::with_capacity(x.len());
    for &input in x {
        let output = b[0] * input + z.first().copied().unwrap_or(0.0);
        for i in 0..n.saturating_sub(2) {
            z[i] = b[i + 1] * input - a[i + 1] * output + z[i + 1];
        }
        if n > 1 {
            z[n - 2] = b[n - 1] * input - a[n - 1] * output;
        }
        y.push(output);
    }
    Ok(y)
}

/// Initial state of [`lfilter`] for the steady-state response to a unit step.
///
/// Solves `(I - A^T) zi = b[1..] - a[1..] * b[0]` where `A` is the companion
/// matrix of the denominator.
pub fn lfilter_zi(coeffs: &FilterCoefficients) -> Result<Vec<f64>> {
    let (b, a) = padded(coeffs);
    let n = b.len() - 1;
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut matrix = vec![vec![0.0; n]; n];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[i] = 1.0;
        row[0] += a[i + 1];
        if i + 1 < n {
            row[i + 1] -= 1.0;
        }
    }
    let rhs: Vec<f64> = (0..n).map(|i| b[i + 1] - a[i + 1] * b[0]).collect();

    solve(matrix, rhs).ok_or_else(|| {
        EegError::filter_spec("filter has no steady state (pole at z = 1)")
    })
}

/// Odd extension of `x` by `n` samples at each end:
/// `2*x[0] - x[n..1]` before and `2*x[last] - x[last-1..last-n]` after.
///
/// # Errors
/// [`EegError::InvalidSignal`] for an empty `x` and
/// [`EegError::InsufficientSamples`] when `n >= x.len()`.
pub fn odd_extension(x: &[f64], n: usize) -> Result<Vec<f64>> {
    if x.is_empty() {
        return Err(EegError::signal("cannot extend an empty signal"));
    }
    if n >= x.len() {
        return Err(EegError::InsufficientSamples {
            len: x.len(),
            required: n,
        });
    }
    if n == 0 {
        return Ok(x.to_vec());
    }
    let first = x[0];
    let last = x[x.len() - 1];
    let mut ext = Vec::with_capacity(x.len() + 2 * n);
    ext.extend((1..=n).rev().map(|i| 2.0 * first - x[i]));
    ext.extend_from_slice(x);
    ext.extend((1..=n).map(|i| 2.0 * last - x[x.len() - 1 - i]));
    Ok(ext)
}

/// Zero-phase filtering: forward, then backward over the reversed output.
///
/// The input is padded with `coeffs.padlen()` samples of odd extension at
/// each end and each pass starts from the steady state of its first
/// sample, which suppresses edge transients. The output has the same
/// length as the input and no phase shift; its magnitude response is the
/// square of the filter's.
///
/// # Errors
/// [`EegError::InvalidSignal`] for an empty input and
/// [`EegError::InsufficientSamples`] when `x.len() <= padlen`.
pub fn filtfilt(coeffs: &FilterCoefficients, x: &[f64]) -> Result<Vec<f64>> {
    if x.is_empty() {
        return Err(EegError::signal("cannot filter an empty signal"));
    }
    let padlen = coeffs.padlen();
    if x.len() <= padlen {
        return Err(EegError::InsufficientSamples {
            len: x.len(),
            required: padlen,
        });
    }

    let zi = lfilter_zi(coeffs)?;
    let ext = odd_extension(x, padlen)?;

    let scaled = |x0: f64| -> Vec<f64> { zi.iter().map(|z| z * x0).collect() };

    let forward = lfilter(coeffs, &ext, Some(scaled(ext[0]).as_slice()))?;
    let reversed: Vec<f64> = forward.iter().rev().copied().collect();
    let backward = lfilter(coeffs, &reversed, Some(scaled(reversed[0]).as_slice()))?;

    Ok(backward
        .into_iter()
        .rev()
        .skip(padlen)
        .take(x.len())
        .collect())
}

/// Numerator and denominator padded with zeros to a common length
fn padded(coeffs: &FilterCoefficients) -> (Vec<f64>, Vec<f64>) {
    let n = coeffs.b().len().max(coeffs.a().len());
    let mut b = coeffs.b().to_vec();
    let mut a = coeffs.a().to_vec();
    b.resize(n, 0.0);
    a.resize(n, 0.0);
    (b, a)
}

/// Gaussian elimination with partial pivoting; `None` when singular
fn solve(mut matrix: Vec<Vec<f64>>, mut rhs: Vec<f64>) -> Option<Vec<f64>> {
    let n = rhs.len();
    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| matrix[i][col].abs().total_cmp(&matrix[j][col].abs()))?;
        if matrix[pivot][col].abs() < 1e-14 {
            return None;
        }
        matrix.swap(col, pivot);
        rhs.swap(col, pivot);

        for row in col + 1..n {
            let factor = matrix[row][col] / matrix[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                matrix[row][k] -= factor * matrix[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| matrix[row][k] * x[k]).sum();
        x[row] = (rhs[row] - tail) / matrix[row][row];
    }
    Some(x)
}
