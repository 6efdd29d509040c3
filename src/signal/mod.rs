//! Signal containers and synthetic test input

mod generator;
mod matrix;

pub use generator::{time_vector, SyntheticEeg};
pub use matrix::SignalMatrix;
