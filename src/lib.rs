//! eeg-filter - zero-phase filtering for multi-channel EEG signals
//!
//! A signal matrix (channels x samples) passes through two stages:
//! 1. Notch filter - removes power-line interference at a single frequency
//! 2. Butterworth bandpass - keeps the band of interest (e.g. 8-30 Hz)
//!
//! Both stages filter forward and backward so the output has no phase
//! shift. A synthetic signal generator provides reproducible test input.
//!
//! # Example
//!
//! ```
//! use eeg_filter::{run_synthetic, PipelineConfig};
//!
//! let filtered = run_synthetic(&PipelineConfig::default()).unwrap();
//! assert_eq!(filtered.shape(), (3, 1024));
//! ```

pub mod cli;
pub mod config;
pub mod dsp;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod signal;

pub use config::PipelineConfig;
pub use error::{EegError, Result};
pub use pipeline::{run_synthetic, Pipeline};
pub use signal::SignalMatrix;
