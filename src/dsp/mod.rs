//! Digital filter design and zero-phase filtering
//!
//! Designers return [`FilterCoefficients`]; [`filtfilt`] applies them
//! without phase distortion. [`FilterStage`] wraps a design for use in a
//! [`crate::pipeline::Pipeline`].

mod butterworth;
mod coeffs;
mod filtfilt;
mod notch;
mod stage;

pub use butterworth::{
    design, design_bandpass, design_highpass, design_lowpass, BandType, DEFAULT_ORDER,
};
pub use coeffs::FilterCoefficients;
pub use filtfilt::{filtfilt, lfilter, lfilter_zi, odd_extension};
pub use notch::design_notch;
pub use stage::{BandpassStage, FilterStage, NotchStage};
