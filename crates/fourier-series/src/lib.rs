//! Truncated Fourier series evaluation over sampled domains.

pub mod accumulate;
pub mod complex;
pub mod convert;
pub mod metrics;
pub mod presets;
pub mod real;
pub mod residual;
pub mod sweep;

pub use accumulate::{accumulate_terms, angular_frequency};
pub use complex::{complex_series, ComplexSeriesEvaluator};
pub use convert::{
    check_conjugate_symmetry, complex_from_real, real_from_complex, SymmetryViolation,
};
pub use metrics::{max_abs_error, mean_squared_error};
pub use presets::Preset;
pub use real::{real_series, RealSeriesEvaluator};
pub use residual::{ResidualCheck, ResidualPolicy};
pub use sweep::{
    default_orders, run_sweep, sweep_preset, OrderResult, SeriesForm, SweepProvenance,
    SweepReport, SweepSource, SweepSpec,
};
