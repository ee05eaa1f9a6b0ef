use fourier_core::{
    query, ApproximationResult, CoefficientFunction, FourierError, SampleDomain, SeriesParameters,
};
use tracing::debug;

use crate::accumulate::{accumulate_terms, angular_frequency};

/// Evaluates `a_0/2 + Σ_{n=1}^{N} (a_n cos(nωt) + b_n sin(nωt))`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealSeriesEvaluator;

impl RealSeriesEvaluator {
    /// Creates the evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates the truncated series at every point of `domain`.
    ///
    /// `b(0)` is never queried.
    pub fn evaluate<A, B>(
        &self,
        a: &A,
        b: &B,
        params: &SeriesParameters,
        domain: &SampleDomain,
    ) -> Result<ApproximationResult, FourierError>
    where
        A: CoefficientFunction<f64> + ?Sized,
        B: CoefficientFunction<f64> + ?Sized,
    {
        let params = params.validate()?;
        let omega = angular_frequency(params.period());
        debug!(
            order = params.order(),
            period = params.period(),
            samples = domain.len(),
            "evaluating real series"
        );

        let a0: f64 = query(a, 0)?;
        let acc = accumulate_terms(domain, params.order(), omega, a0 / 2.0, |n| {
            let cosine: f64 = query(a, n)?;
            let sine: f64 = query(b, n)?;
            Ok(move |theta: f64| {
                let (sin, cos) = theta.sin_cos();
                cosine * cos + sine * sin
            })
        })?;

        Ok(ApproximationResult::from_values(acc))
    }
}

/// Evaluates a real series with the default evaluator.
pub fn real_series<A, B>(
    a: &A,
    b: &B,
    order: i64,
    domain: &SampleDomain,
    period: f64,
) -> Result<ApproximationResult, FourierError>
where
    A: CoefficientFunction<f64> + ?Sized,
    B: CoefficientFunction<f64> + ?Sized,
{
    RealSeriesEvaluator::new().evaluate(a, b, &SeriesParameters::new(order, period), domain)
}
