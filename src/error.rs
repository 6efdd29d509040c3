//! Error handling for eeg-filter
//!
//! Every failure aborts the pipeline; there is no partial result to recover.

use thiserror::Error;

/// Result type alias for eeg-filter operations
pub type Result<T> = std::result::Result<T, EegError>;

/// Main error type for eeg-filter operations
#[derive(Error, Debug)]
pub enum EegError {
    // Design Errors
    #[error("Invalid filter specification: {reason}")]
    InvalidFilterSpec { reason: String },

    // Filtering Errors
    #[error("Insufficient sample length: {len} samples, zero-phase filtering needs more than {required}")]
    InsufficientSamples { len: usize, required: usize },

    #[error("Non-finite output produced by stage '{stage}'")]
    NonFiniteOutput { stage: String },

    // Input Errors
    #[error("Invalid signal: {reason}")]
    InvalidSignal { reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EegError {
    pub(crate) fn filter_spec(reason: impl Into<String>) -> Self {
        EegError::InvalidFilterSpec {
            reason: reason.into(),
        }
    }

    pub(crate) fn signal(reason: impl Into<String>) -> Self {
        EegError::InvalidSignal {
            reason: reason.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            EegError::InvalidFilterSpec { .. } => "INVALID_FILTER_SPEC",
            EegError::InsufficientSamples { .. } => "INSUFFICIENT_SAMPLES",
            EegError::NonFiniteOutput { .. } => "NON_FINITE_OUTPUT",
            EegError::InvalidSignal { .. } => "INVALID_SIGNAL",
            EegError::InvalidConfig { .. } => "INVALID_CONFIG",
            EegError::Io(_) => "IO_ERROR",
            EegError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            EegError::InvalidFilterSpec { .. } => vec![
                "Cutoff and notch frequencies must lie strictly between 0 and sample_rate / 2",
                "The bandpass low cutoff must be below the high cutoff",
                "Quality factor and filter order must be positive",
            ],
            EegError::InsufficientSamples { .. } => vec![
                "Record more samples per channel",
                "Lower the bandpass filter order",
            ],
            EegError::NonFiniteOutput { .. } => vec![
                "Check the input for NaN or infinite samples",
                "Very high filter orders with narrow bands are numerically unstable",
            ],
            EegError::InvalidConfig { .. } => vec![
                "Sample count, channel count and filter order must be non-zero",
                "Sample rate must be a positive number",
            ],
            _ => vec![],
        }
    }
}
