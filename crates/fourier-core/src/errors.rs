//! Error families raised while validating and evaluating Fourier series.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and context describing why a series could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case code such as `non-positive-period`; stable across releases.
    pub code: String,
    /// Diagnostic shown to the user.
    pub message: String,
    /// Offending values keyed by name (`n`, `period`, `index`).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// How to fix the input, when there is an obvious remedy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records an offending value under `key`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attaches a remedy.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for series evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum FourierError {
    /// Period, truncation order or sample domain rejected before evaluation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(ErrorInfo),
    /// A coefficient source failed or produced a non-finite value.
    #[error("coefficient error: {0}")]
    Coefficient(ErrorInfo),
    /// The complex accumulator kept an imaginary residual above tolerance.
    #[error("residual error: {0}")]
    Residual(ErrorInfo),
    /// Run configuration could not be read or is inconsistent.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl FourierError {
    /// Payload shared by every family.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            FourierError::InvalidParameter(info)
            | FourierError::Coefficient(info)
            | FourierError::Residual(info)
            | FourierError::Config(info)
            | FourierError::Serde(info) => info,
        }
    }

    /// Shorthand for an [`FourierError::InvalidParameter`] with the given code.
    pub fn invalid_parameter(code: &str, message: impl Into<String>) -> Self {
        FourierError::InvalidParameter(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`FourierError::Coefficient`] failure at harmonic index `n`.
    pub fn coefficient(code: &str, message: impl Into<String>, n: i64) -> Self {
        FourierError::Coefficient(ErrorInfo::new(code, message).with_context("n", n))
    }
}
