use fourier_core::{
    query, ApproximationResult, CoefficientFunction, Complex64, FourierError, SampleDomain,
    SeriesParameters,
};
use tracing::debug;

use crate::accumulate::{accumulate_terms, angular_frequency};
use crate::residual::ResidualCheck;

/// Evaluates `Σ_{n=-N}^{N} c_n e^{i n ω t}` and returns its real part.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComplexSeriesEvaluator {
    residual: ResidualCheck,
}

impl ComplexSeriesEvaluator {
    /// Evaluator that silently discards any imaginary residual.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the residual handling applied after summation.
    pub fn with_residual_check(mut self, residual: ResidualCheck) -> Self {
        self.residual = residual;
        self
    }

    /// Residual handling applied after summation.
    pub fn residual_check(&self) -> ResidualCheck {
        self.residual
    }

    /// Evaluates the truncated series at every point of `domain`.
    ///
    /// `c(0)` is queried once, then `c(n)` and `c(-n)` once each for every
    /// `n` in `1..=N`. Parameters and the residual tolerance are validated
    /// before any query.
    pub fn evaluate<C>(
        &self,
        c: &C,
        params: &SeriesParameters,
        domain: &SampleDomain,
    ) -> Result<ApproximationResult, FourierError>
    where
        C: CoefficientFunction<Complex64> + ?Sized,
    {
        let params = params.validate()?;
        self.residual.validate()?;
        let omega = angular_frequency(params.period());
        debug!(
            order = params.order(),
            period = params.period(),
            samples = domain.len(),
            "evaluating complex series"
        );

        let c0: Complex64 = query(c, 0)?;
        let acc = accumulate_terms(domain, params.order(), omega, c0, |n| {
            let positive: Complex64 = query(c, n)?;
            let negative: Complex64 = query(c, -n)?;
            Ok(move |theta: f64| {
                let phasor = Complex64::from_polar(1.0, theta);
                positive * phasor + negative * phasor.conj()
            })
        })?;

        self.residual.inspect(&acc)?;
        Ok(ApproximationResult::from_values(
            acc.into_iter().map(|z| z.re).collect(),
        ))
    }
}

/// Evaluates a complex series with the default evaluator.
pub fn complex_series<C>(
    c: &C,
    order: i64,
    domain: &SampleDomain,
    period: f64,
) -> Result<ApproximationResult, FourierError>
where
    C: CoefficientFunction<Complex64> + ?Sized,
{
    ComplexSeriesEvaluator::new().evaluate(c, &SeriesParameters::new(order, period), domain)
}
