use fourier_core::{ErrorInfo, FourierError};

fn length_mismatch(approx: usize, target: usize) -> FourierError {
    FourierError::InvalidParameter(
        ErrorInfo::new("length-mismatch", "approximation and target differ in length")
            .with_context("approx", approx)
            .with_context("target", target),
    )
}

/// Mean squared error between an approximation and reference values.
///
/// Empty inputs have an error of zero.
pub fn mean_squared_error(approx: &[f64], target: &[f64]) -> Result<f64, FourierError> {
    if approx.len() != target.len() {
        return Err(length_mismatch(approx.len(), target.len()));
    }
    if approx.is_empty() {
        return Ok(0.0);
    }
    let total: f64 = approx
        .iter()
        .zip(target)
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    Ok(total / approx.len() as f64)
}

/// Largest absolute pointwise deviation.
pub fn max_abs_error(approx: &[f64], target: &[f64]) -> Result<f64, FourierError> {
    if approx.len() != target.len() {
        return Err(length_mismatch(approx.len(), target.len()));
    }
    Ok(approx
        .iter()
        .zip(target)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max))
}
