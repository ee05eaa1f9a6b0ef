//! Coefficient source contracts.
//!
//! A coefficient source maps a harmonic index `n` to the weight of that term.
//! Plain closures `Fn(i64) -> S` are sources out of the box; fallible sources
//! are adapted with [`TryCoefficients`]. Sources must be pure: evaluators may
//! query the same index more than once across calls.

use std::fmt::{Debug, Display};

use num_complex::Complex64;

use crate::errors::{ErrorInfo, FourierError};

/// Scalar types a coefficient source may yield.
pub trait Scalar: Copy + Debug + Send + Sync + 'static {
    /// Returns true when every component of the value is finite.
    fn is_finite_value(&self) -> bool;
}

impl Scalar for f64 {
    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

impl Scalar for Complex64 {
    fn is_finite_value(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

/// Pure mapping from harmonic index to coefficient value.
pub trait CoefficientFunction<S: Scalar> {
    /// Returns the coefficient for harmonic index `n`.
    fn coefficient(&self, n: i64) -> Result<S, FourierError>;
}

impl<S, F> CoefficientFunction<S> for F
where
    S: Scalar,
    F: Fn(i64) -> S,
{
    fn coefficient(&self, n: i64) -> Result<S, FourierError> {
        Ok(self(n))
    }
}

/// Adapter turning a fallible closure into a coefficient source.
///
/// Errors raised by the closure are reported as [`FourierError::Coefficient`]
/// with the failing index attached; they are never masked.
#[derive(Debug, Clone, Copy)]
pub struct TryCoefficients<F>(pub F);

impl<S, E, F> CoefficientFunction<S> for TryCoefficients<F>
where
    S: Scalar,
    E: Display,
    F: Fn(i64) -> Result<S, E>,
{
    fn coefficient(&self, n: i64) -> Result<S, FourierError> {
        (self.0)(n).map_err(|err| {
            FourierError::Coefficient(
                ErrorInfo::new("coefficient-source-failed", err.to_string()).with_context("n", n),
            )
        })
    }
}

/// Queries `source` at `n` and rejects non-finite values.
pub fn query<S, C>(source: &C, n: i64) -> Result<S, FourierError>
where
    S: Scalar,
    C: CoefficientFunction<S> + ?Sized,
{
    let value = source.coefficient(n)?;
    if !value.is_finite_value() {
        return Err(FourierError::Coefficient(
            ErrorInfo::new("non-finite-coefficient", "coefficient source returned a non-finite value")
                .with_context("n", n)
                .with_context("value", format!("{value:?}")),
        ));
    }
    Ok(value)
}
