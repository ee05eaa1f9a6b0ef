use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FourierError};

/// Ordered sequence of real sample points at which a series is evaluated.
///
/// Points keep their input order; duplicates and unsorted sequences are
/// accepted and evaluated independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct SampleDomain {
    points: Vec<f64>,
}

impl SampleDomain {
    /// Builds a domain from explicit sample points. Every point must be finite.
    pub fn new(points: Vec<f64>) -> Result<Self, FourierError> {
        if let Some(index) = points.iter().position(|t| !t.is_finite()) {
            return Err(FourierError::InvalidParameter(
                ErrorInfo::new("non-finite-sample", "sample points must be finite")
                    .with_context("index", index)
                    .with_context("value", points[index]),
            ));
        }
        Ok(Self { points })
    }

    /// Builds `count` evenly spaced points covering `[start, end]` inclusively.
    pub fn linspace(start: f64, end: f64, count: usize) -> Result<Self, FourierError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(FourierError::InvalidParameter(
                ErrorInfo::new("non-finite-interval", "interval bounds must be finite")
                    .with_context("start", start)
                    .with_context("end", end),
            ));
        }
        let points = match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                let mut points: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
                // pin the last point so rounding never drifts past the interval
                points[count - 1] = end;
                points
            }
        };
        // wide finite intervals can still overflow the step
        Self::new(points)
    }

    /// Sample points in evaluation order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the domain holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl TryFrom<Vec<f64>> for SampleDomain {
    type Error = FourierError;

    fn try_from(points: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<SampleDomain> for Vec<f64> {
    fn from(domain: SampleDomain) -> Self {
        domain.points
    }
}

/// Approximated function values, index-aligned with the evaluated domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ApproximationResult {
    values: Vec<f64>,
}

impl ApproximationResult {
    /// Wraps freshly computed values.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Values in domain order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the result and returns the owned values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no values were produced.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
