//! Handling of the imaginary residual left in a complex series accumulator.

use fourier_core::{Complex64, ErrorInfo, FourierError};
use serde::{Deserialize, Serialize};
use tracing::warn;

fn default_tolerance() -> f64 {
    1e-9
}

/// What to do when the summed complex series is not purely real.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResidualPolicy {
    /// Keep the real part and drop the imaginary part silently.
    #[default]
    Discard,
    /// Keep the real part and emit a warning when the residual is large.
    Warn,
    /// Fail the evaluation when the residual is large.
    Reject,
}

/// Residual policy together with its tolerance.
///
/// The tolerance is absolute for results of magnitude at most one and
/// relative to the largest real magnitude otherwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ResidualCheck {
    /// Action taken when the residual exceeds the tolerance.
    #[serde(default)]
    pub policy: ResidualPolicy,
    /// Admissible imaginary magnitude.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for ResidualCheck {
    fn default() -> Self {
        Self {
            policy: ResidualPolicy::Discard,
            tolerance: default_tolerance(),
        }
    }
}

impl ResidualCheck {
    /// Check with the given policy and the default tolerance.
    pub fn with_policy(policy: ResidualPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Rejects tolerances that are negative or not finite.
    pub fn validate(&self) -> Result<(), FourierError> {
        if self.tolerance.is_finite() && self.tolerance >= 0.0 {
            return Ok(());
        }
        Err(FourierError::InvalidParameter(
            ErrorInfo::new(
                "invalid-tolerance",
                "residual tolerance must be a finite non-negative number",
            )
            .with_context("tolerance", self.tolerance),
        ))
    }

    /// Applies the policy to a summed accumulator.
    pub fn inspect(&self, acc: &[Complex64]) -> Result<(), FourierError> {
        self.validate()?;
        if self.policy == ResidualPolicy::Discard || acc.is_empty() {
            return Ok(());
        }
        let (index, residual) = max_residual(acc);
        let scale = acc.iter().map(|z| z.re.abs()).fold(1.0_f64, f64::max);
        let limit = self.tolerance * scale;
        if residual <= limit {
            return Ok(());
        }
        match self.policy {
            ResidualPolicy::Discard => Ok(()),
            ResidualPolicy::Warn => {
                warn!(
                    residual,
                    limit,
                    index,
                    "complex series keeps an imaginary residual; coefficients are likely not conjugate symmetric"
                );
                Ok(())
            }
            ResidualPolicy::Reject => Err(FourierError::Residual(
                ErrorInfo::new(
                    "imaginary-residual",
                    "complex series does not sum to a real-valued function",
                )
                .with_context("residual", residual)
                .with_context("limit", limit)
                .with_context("index", index)
                .with_hint("supply coefficients with c(-n) = conj(c(n))"),
            )),
        }
    }
}

/// Largest imaginary magnitude and the sample index where it occurs.
pub fn max_residual(acc: &[Complex64]) -> (usize, f64) {
    acc.iter()
        .enumerate()
        .map(|(idx, z)| (idx, z.im.abs()))
        .fold((0, 0.0), |best, item| if item.1 > best.1 { item } else { best })
}
