use std::f64::consts::TAU;

use fourier_core::{
    stable_hash_string, CoefficientFunction, Complex64, ErrorInfo, FourierError, SampleDomain,
    SeriesParameters,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::complex::ComplexSeriesEvaluator;
use crate::metrics::{max_abs_error, mean_squared_error};
use crate::presets::Preset;
use crate::real::RealSeriesEvaluator;
use crate::residual::ResidualCheck;

fn sweep_error(code: &str, message: impl Into<String>) -> FourierError {
    FourierError::Config(ErrorInfo::new(code, message))
}

/// Truncation orders plotted by default.
pub fn default_orders() -> Vec<i64> {
    vec![1, 2, 5, 10, 100, 1000]
}

fn default_period() -> f64 {
    TAU
}

fn default_concurrency() -> usize {
    1
}

/// Which series representation a sweep evaluates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SeriesForm {
    /// Complex exponential form `Σ c_n e^{inωt}`.
    #[default]
    Complex,
    /// Real form `a_0/2 + Σ a_n cos + b_n sin`.
    Real,
}

/// Options controlling a multi-order sweep.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepSpec {
    /// Series representation to evaluate.
    #[serde(default)]
    pub form: SeriesForm,
    /// Truncation orders, evaluated independently and reported in this order.
    #[serde(default = "default_orders")]
    pub orders: Vec<i64>,
    /// Period of the approximated function.
    #[serde(default = "default_period")]
    pub period: f64,
    /// Residual handling for the complex form.
    #[serde(default)]
    pub residual: ResidualCheck,
    /// Number of orders evaluated in parallel.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for SweepSpec {
    fn default() -> Self {
        Self {
            form: SeriesForm::Complex,
            orders: default_orders(),
            period: default_period(),
            residual: ResidualCheck::default(),
            concurrency: default_concurrency(),
        }
    }
}

/// Coefficient sources for a sweep.
#[derive(Clone, Copy)]
pub enum SweepSource<'a> {
    /// Complex coefficients `c_n`.
    Complex(&'a (dyn CoefficientFunction<Complex64> + Sync)),
    /// Real coefficients `a_n`, `b_n`.
    Real {
        /// Cosine coefficients.
        cosine: &'a (dyn CoefficientFunction<f64> + Sync),
        /// Sine coefficients.
        sine: &'a (dyn CoefficientFunction<f64> + Sync),
    },
}

impl SweepSource<'_> {
    fn form(&self) -> SeriesForm {
        match self {
            SweepSource::Complex(_) => SeriesForm::Complex,
            SweepSource::Real { .. } => SeriesForm::Real,
        }
    }
}

/// Values for one truncation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderResult {
    /// Truncation order `N`.
    pub order: i64,
    /// Approximated values in domain order.
    pub values: Vec<f64>,
    /// Mean squared error against the target, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mse: Option<f64>,
    /// Largest absolute deviation from the target, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_abs_error: Option<f64>,
}

/// Provenance metadata bundled with a [`SweepReport`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepProvenance {
    /// Package version that produced the report.
    pub version: String,
    /// Hash of the sweep options.
    pub spec_hash: String,
    /// Label of the coefficient source (preset name or caller supplied).
    pub source: String,
}

/// Deterministic bundle of every order evaluated in a sweep.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepReport {
    /// Content hash over everything below.
    pub report_hash: String,
    /// Series representation that was evaluated.
    pub form: SeriesForm,
    /// Period used for every order.
    pub period: f64,
    /// Sample points shared by every order.
    pub domain: Vec<f64>,
    /// Target values, when a reference function was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<f64>>,
    /// Per-order results, in the requested order.
    pub orders: Vec<OrderResult>,
    /// Provenance information.
    pub provenance: SweepProvenance,
}

impl SweepReport {
    /// Looks up the result for a truncation order.
    pub fn order(&self, order: i64) -> Option<&OrderResult> {
        self.orders.iter().find(|result| result.order == order)
    }
}

/// Evaluates `source` once per order in `spec.orders` over a shared domain.
///
/// Every order is validated before any evaluation starts. Orders are spread
/// over a pool of `spec.concurrency` threads; results keep the requested order.
pub fn run_sweep(
    spec: &SweepSpec,
    source: SweepSource<'_>,
    domain: &SampleDomain,
    target: Option<&(dyn Fn(f64) -> f64 + Sync)>,
    label: &str,
) -> Result<SweepReport, FourierError> {
    if spec.orders.is_empty() {
        return Err(FourierError::invalid_parameter(
            "empty-orders",
            "a sweep needs at least one truncation order",
        ));
    }
    if source.form() != spec.form {
        return Err(sweep_error(
            "form-mismatch",
            "coefficient source does not match the requested series form",
        ));
    }
    for &order in &spec.orders {
        SeriesParameters::new(order, spec.period).validate()?;
    }
    spec.residual.validate()?;

    let target_values: Option<Vec<f64>> =
        target.map(|f| domain.points().iter().map(|&t| f(t)).collect());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(spec.concurrency.max(1))
        .build()
        .map_err(|err| sweep_error("thread-pool", err.to_string()))?;

    let complex = ComplexSeriesEvaluator::new().with_residual_check(spec.residual);
    let real = RealSeriesEvaluator::new();

    let results: Result<Vec<OrderResult>, FourierError> = pool.install(|| {
        spec.orders
            .par_iter()
            .map(|&order| -> Result<OrderResult, FourierError> {
                let params = SeriesParameters::new(order, spec.period);
                let values = match source {
                    SweepSource::Complex(c) => complex.evaluate(c, &params, domain)?,
                    SweepSource::Real { cosine, sine } => {
                        real.evaluate(cosine, sine, &params, domain)?
                    }
                }
                .into_values();
                let (mse, max_abs) = match &target_values {
                    Some(reference) => (
                        Some(mean_squared_error(&values, reference)?),
                        Some(max_abs_error(&values, reference)?),
                    ),
                    None => (None, None),
                };
                debug!(order, mse, "sweep order evaluated");
                Ok(OrderResult {
                    order,
                    values,
                    mse,
                    max_abs_error: max_abs,
                })
            })
            .collect()
    });
    let orders = results?;

    let provenance = SweepProvenance {
        version: env!("CARGO_PKG_VERSION").to_string(),
        spec_hash: stable_hash_string(spec)?,
        source: label.to_string(),
    };

    let mut report = SweepReport {
        report_hash: String::new(),
        form: spec.form,
        period: spec.period,
        domain: domain.points().to_vec(),
        target: target_values,
        orders,
        provenance,
    };
    report.report_hash = stable_hash_string(&(
        &report.form,
        report.period,
        &report.domain,
        &report.target,
        &report.orders,
        &report.provenance,
    ))?;

    info!(
        orders = report.orders.len(),
        samples = report.domain.len(),
        source = label,
        "sweep complete"
    );
    Ok(report)
}

/// Runs a sweep over a preset, measuring every order against its exact waveform.
pub fn sweep_preset(
    preset: &Preset,
    spec: &SweepSpec,
    domain: &SampleDomain,
) -> Result<SweepReport, FourierError> {
    let period = spec.period;
    let exact = move |t: f64| preset.target(t, period);
    let target: &(dyn Fn(f64) -> f64 + Sync) = &exact;
    match spec.form {
        SeriesForm::Complex => {
            let c = preset.complex_source();
            run_sweep(spec, SweepSource::Complex(&c), domain, Some(target), preset.name())
        }
        SeriesForm::Real => {
            let (cosine, sine) = preset.real_sources();
            run_sweep(
                spec,
                SweepSource::Real {
                    cosine: &cosine,
                    sine: &sine,
                },
                domain,
                Some(target),
                preset.name(),
            )
        }
    }
}
