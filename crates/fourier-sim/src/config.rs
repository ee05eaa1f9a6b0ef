use std::f64::consts::TAU;
use std::fs;
use std::path::Path;

use fourier_core::{from_yaml_slice, ErrorInfo, FourierError, SampleDomain};
use fourier_series::{Preset, SweepSpec};
use serde::{Deserialize, Serialize};

fn config_error(code: &str, err: impl ToString) -> FourierError {
    FourierError::Config(ErrorInfo::new(code, err.to_string()))
}

fn default_start() -> f64 {
    0.0
}

fn default_end() -> f64 {
    TAU
}

fn default_samples() -> usize {
    1000
}

/// YAML-configurable description of a sweep run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    /// Waveform whose coefficients are evaluated.
    #[serde(default)]
    pub preset: Preset,
    /// Sampled interval.
    #[serde(default)]
    pub interval: IntervalConfig,
    /// Series form, orders, period, residual policy and concurrency.
    #[serde(default)]
    pub sweep: SweepSpec,
}

/// Interval sampled with evenly spaced points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntervalConfig {
    /// First sample point.
    #[serde(default = "default_start")]
    pub start: f64,
    /// Last sample point.
    #[serde(default = "default_end")]
    pub end: f64,
    /// Number of sample points, both ends included.
    #[serde(default = "default_samples")]
    pub samples: usize,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            samples: default_samples(),
        }
    }
}

impl RunConfig {
    /// Builds the sample domain described by the interval section.
    pub fn domain(&self) -> Result<SampleDomain, FourierError> {
        SampleDomain::linspace(self.interval.start, self.interval.end, self.interval.samples)
    }

    /// Rejects configurations that cannot produce a meaningful sweep.
    pub fn validate(&self) -> Result<(), FourierError> {
        if self.interval.samples == 0 {
            return Err(FourierError::Config(
                ErrorInfo::new("empty-interval", "interval must contain at least one sample")
                    .with_hint("set interval.samples to a positive count"),
            ));
        }
        self.sweep.residual.validate()
    }

    /// Serializes the configuration back to YAML.
    pub fn to_yaml_string(&self) -> Result<String, FourierError> {
        serde_yaml::to_string(self).map_err(|err| config_error("yaml-write", err))
    }
}

/// Loads and validates a run configuration from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunConfig, FourierError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| {
        FourierError::Config(
            ErrorInfo::new("config-read", err.to_string())
                .with_context("path", path.display()),
        )
    })?;
    let config: RunConfig = from_yaml_slice(&bytes)?;
    config.validate()?;
    Ok(config)
}
