use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FourierError};

fn default_period() -> f64 {
    TAU
}

/// Truncation order and period of a series evaluation.
///
/// The order is kept signed so that configuration files and callers can
/// express any integer; [`SeriesParameters::validate`] rejects negative
/// orders and non-positive periods before any work is done.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesParameters {
    /// Upper index `N` of the summation.
    pub order: i64,
    /// Period `T` of the approximated function.
    #[serde(default = "default_period")]
    pub period: f64,
}

impl SeriesParameters {
    /// Creates a parameter set from an order and a period.
    pub fn new(order: i64, period: f64) -> Self {
        Self { order, period }
    }

    /// Checks the order and period, returning the evaluated form on success.
    pub fn validate(&self) -> Result<ValidatedParameters, FourierError> {
        if self.order < 0 {
            return Err(FourierError::InvalidParameter(
                ErrorInfo::new("negative-order", "truncation order must be non-negative")
                    .with_context("order", self.order),
            ));
        }
        if !self.period.is_finite() {
            return Err(FourierError::InvalidParameter(
                ErrorInfo::new("non-finite-period", "period must be a finite number")
                    .with_context("period", self.period),
            ));
        }
        if self.period <= 0.0 {
            return Err(FourierError::InvalidParameter(
                ErrorInfo::new("non-positive-period", "period must be strictly positive")
                    .with_context("period", self.period)
                    .with_hint("supply T > 0, e.g. 2*pi for functions on [-pi, pi]"),
            ));
        }
        let order = usize::try_from(self.order).map_err(|_| {
            FourierError::invalid_parameter("order-overflow", "truncation order does not fit usize")
        })?;
        Ok(ValidatedParameters {
            order,
            period: self.period,
        })
    }
}

impl Default for SeriesParameters {
    fn default() -> Self {
        Self {
            order: 0,
            period: default_period(),
        }
    }
}

/// Parameters that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedParameters {
    order: usize,
    period: f64,
}

impl ValidatedParameters {
    /// Truncation order `N`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Strictly positive, finite period `T`.
    pub fn period(&self) -> f64 {
        self.period
    }
}
