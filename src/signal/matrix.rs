//! Multi-channel signal matrix

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EegError, Result};

/// Element count above which text output is summarised
const SUMMARY_THRESHOLD: usize = 1000;
/// Items shown at each end of a summarised axis
const EDGE_ITEMS: usize = 3;
/// Decimal places in text output
const PRECISION: usize = 8;

/// Channels x samples matrix of floating-point samples
///
/// Every channel has the same length. A matrix is never modified after
/// construction; processing stages build a new one of the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSignalMatrix")]
pub struct SignalMatrix {
    channels: Vec<Vec<f64>>,
    sample_rate: f64,
}

/// Unvalidated wire form; deserialization goes through `from_channels`
#[derive(Deserialize)]
struct RawSignalMatrix {
    channels: Vec<Vec<f64>>,
    sample_rate: f64,
}

impl TryFrom<RawSignalMatrix> for SignalMatrix {
    type Error = EegError;

    fn try_from(raw: RawSignalMatrix) -> Result<Self> {
        Self::from_channels(raw.channels, raw.sample_rate)
    }
}

impl SignalMatrix {
    /// Create a matrix from per-channel sample vectors
    pub fn from_channels(channels: Vec<Vec<f64>>, sample_rate: f64) -> Result<Self> {
        if channels.is_empty() {
            return Err(EegError::signal("matrix has no channels"));
        }
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(EegError::signal(format!(
                "sample rate must be positive, got {}",
                sample_rate
            )));
        }
        let num_samples = channels[0].len();
        if num_samples == 0 {
            return Err(EegError::signal("channels contain no samples"));
        }
        if let Some((index, channel)) = channels
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != num_samples)
        {
            return Err(EegError::signal(format!(
                "channel {} has {} samples, expected {}",
                index,
                channel.len(),
                num_samples
            )));
        }
        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Number of channels
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel
    pub fn num_samples(&self) -> usize {
        self.channels[0].len()
    }

    /// (channels, samples)
    pub fn shape(&self) -> (usize, usize) {
        (self.num_channels(), self.num_samples())
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Samples of one channel
    ///
    /// # Panics
    /// Panics if `index >= num_channels()`.
    pub fn channel(&self, index: usize) -> &[f64] {
        &self.channels[index]
    }

    /// All channels in order
    pub fn channels(&self) -> &[Vec<f64>] {
        &self.channels
    }

    /// Consume the matrix and return its channels
    pub fn into_channels(self) -> Vec<Vec<f64>> {
        self.channels
    }

    /// True when no sample is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.channels.iter().flatten().all(|s| s.is_finite())
    }

    /// Build a new matrix by transforming every channel independently.
    ///
    /// Channel order is preserved and every output channel must keep the
    /// input length.
    pub fn try_map_channels<F>(&self, f: F) -> Result<SignalMatrix>
    where
        F: Fn(&[f64]) -> Result<Vec<f64>> + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        let mapped: Result<Vec<Vec<f64>>> = {
            use rayon::prelude::*;
            self.channels.par_iter().map(|c| f(c.as_slice())).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let mapped: Result<Vec<Vec<f64>>> = self.channels.iter().map(|c| f(c.as_slice())).collect();

        let mapped = mapped?;
        if let Some(channel) = mapped.iter().find(|c| c.len() != self.num_samples()) {
            return Err(EegError::signal(format!(
                "channel transform changed length from {} to {}",
                self.num_samples(),
                channel.len()
            )));
        }
        Self::from_channels(mapped, self.sample_rate)
    }

    /// Render as a nested-array text block.
    ///
    /// With `summarize`, large matrices show only the first and last
    /// few items of each axis.
    pub fn to_text(&self, summarize: bool) -> String {
        let summarize = summarize && self.num_channels() * self.num_samples() > SUMMARY_THRESHOLD;

        let rows = visible_indices(self.num_channels(), summarize);
        let cols = visible_indices(self.num_samples(), summarize);

        let width = rows
            .iter()
            .flatten()
            .flat_map(|&r| cols.iter().flatten().map(move |&c| (r, c)))
            .map(|(r, c)| format_value(self.channels[r][c]).len())
            .max()
            .unwrap_or(0);

        let mut out = String::from("[");
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push_str("\n ");
            }
            match row {
                Some(r) => {
                    out.push('[');
                    let cells: Vec<String> = cols
                        .iter()
                        .map(|col| match col {
                            Some(c) => {
                                format!("{:>width$}", format_value(self.channels[*r][*c]))
                            }
                            None => "...".to_string(),
                        })
                        .collect();
                    out.push_str(&cells.join(" "));
                    out.push(']');
                }
                None => out.push_str("...,"),
            }
        }
        out.push(']');
        out
    }
}

impl fmt::Display for SignalMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(true))
    }
}

fn format_value(value: f64) -> String {
    format!("{:.*}", PRECISION, value)
}

/// Indices to print along one axis; `None` marks the elided span.
fn visible_indices(len: usize, summarize: bool) -> Vec<Option<usize>> {
    if summarize && len > 2 * EDGE_ITEMS {
        (0..EDGE_ITEMS)
            .map(Some)
            .chain(std::iter::once(None))
            .chain((len - EDGE_ITEMS..len).map(Some))
            .collect()
    } else {
        (0..len).map(Some).collect()
    }
}
