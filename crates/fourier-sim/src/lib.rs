//! Configuration loading and artefact output for the `fourier-sim` CLI.

pub mod config;
pub mod output;

pub use config::{load_config, IntervalConfig, RunConfig};
pub use output::{write_report, SweepArtifacts};
