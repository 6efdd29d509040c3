//! Filter pipeline
//!
//! Stages run in insertion order; each one receives the previous stage's
//! output. The default pipeline is notch, then bandpass.

use log::{debug, info};

use crate::config::PipelineConfig;
use crate::dsp::{BandpassStage, FilterStage, NotchStage};
use crate::error::{EegError, Result};
use crate::signal::{SignalMatrix, SyntheticEeg};

/// Ordered chain of filter stages
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn FilterStage>>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Notch stage followed by bandpass stage, as configured
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut pipeline = Self::new();
        pipeline.add(Box::new(NotchStage::new(
            config.notch_freq,
            config.quality_factor,
        )));
        pipeline.add(Box::new(BandpassStage::with_order(
            config.lowcut,
            config.highcut,
            config.filter_order,
        )));
        pipeline
    }

    /// Append a stage
    pub fn add(&mut self, stage: Box<dyn FilterStage>) {
        self.stages.push(stage);
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True if the pipeline has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in processing order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage in order.
    ///
    /// The first error aborts the run. A stage that produces NaN or
    /// infinite samples fails with [`EegError::NonFiniteOutput`].
    pub fn run(&self, input: &SignalMatrix) -> Result<SignalMatrix> {
        let mut current = input.clone();
        for stage in &self.stages {
            debug!("[PIPELINE] Running stage '{}'", stage.name());
            current = stage.apply(&current)?;
            if !current.is_finite() {
                return Err(EegError::NonFiniteOutput {
                    stage: stage.name().to_string(),
                });
            }
        }
        Ok(current)
    }
}

/// Generate the configured synthetic matrix and filter it
pub fn run_synthetic(config: &PipelineConfig) -> Result<SignalMatrix> {
    config.validate()?;
    info!(
        "Generating {}x{} matrix at {} Hz (seed {})",
        config.channel_count, config.sample_count, config.sample_rate, config.seed
    );
    let raw = SyntheticEeg::default().from_config(config)?;

    let pipeline = Pipeline::from_config(config);
    let filtered = pipeline.run(&raw)?;
    info!(
        "Filtered through {} stages: {}",
        pipeline.len(),
        pipeline.stage_names().join(" -> ")
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::FilterCoefficients;

    /// Stage with fixed coefficients, for exercising pipeline plumbing
    struct FixedStage {
        b: Vec<f64>,
        a: Vec<f64>,
    }

    impl FilterStage for FixedStage {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn design(&self, _sample_rate: f64) -> Result<FilterCoefficients> {
            FilterCoefficients::new(self.b.clone(), self.a.clone())
        }
    }

    fn matrix() -> SignalMatrix {
        SyntheticEeg::default().generate(2, 256, 256.0, 1).unwrap()
    }

    #[test]
    fn test_default_stage_order() {
        let pipeline = Pipeline::from_config(&PipelineConfig::default());
        assert_eq!(pipeline.stage_names(), vec!["notch", "bandpass"]);
    }

    #[test]
    fn test_empty_pipeline_is_passthrough() {
        let pipeline = Pipeline::new();
        assert!(pipeline.is_empty());
        let input = matrix();
        assert_eq!(pipeline.run(&input).unwrap(), input);
    }

    #[test]
    fn test_stages_compose() {
        let mut pipeline = Pipeline::new();
        pipeline.add(Box::new(FixedStage {
            b: vec![2.0],
            a: vec![1.0],
        }));
        pipeline.add(Box::new(FixedStage {
            b: vec![3.0],
            a: vec![1.0],
        }));
        let input = matrix();
        let output = pipeline.run(&input).unwrap();
        // Zero-phase filtering squares the gain of each stage
        assert!((output.channel(0)[10] - 36.0 * input.channel(0)[10]).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_output_is_reported() {
        let mut pipeline = Pipeline::new();
        pipeline.add(Box::new(FixedStage {
            b: vec![1.0],
            // Pole far outside the unit circle
            a: vec![1.0, -1e300],
        }));
        let err = pipeline.run(&matrix()).unwrap_err();
        assert!(matches!(err, EegError::NonFiniteOutput { ref stage } if stage == "fixed"));
    }

    #[test]
    fn test_run_synthetic_rejects_bad_config() {
        let config = PipelineConfig {
            sample_count: 0,
            ..PipelineConfig::default()
        };
        assert!(matches!(
            run_synthetic(&config),
            Err(EegError::InvalidConfig { .. })
        ));
    }
}
