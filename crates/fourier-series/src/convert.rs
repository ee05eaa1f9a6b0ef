//! Conversions between complex and real coefficient sets, and a conjugate
//! symmetry check for complex sets.

use fourier_core::{query, CoefficientFunction, Complex64, FourierError};
use serde::{Deserialize, Serialize};

/// Cosine coefficients `a_n = c_n + c_{-n}` derived from a complex set.
///
/// `a_0 = 2 c_0`. Only the real part is kept.
#[derive(Debug, Clone, Copy)]
pub struct CosineFromComplex<'a, C: ?Sized>(pub &'a C);

impl<C> CoefficientFunction<f64> for CosineFromComplex<'_, C>
where
    C: CoefficientFunction<Complex64> + ?Sized,
{
    fn coefficient(&self, n: i64) -> Result<f64, FourierError> {
        if n == 0 {
            let c0: Complex64 = query(self.0, 0)?;
            return Ok(2.0 * c0.re);
        }
        let positive: Complex64 = query(self.0, n)?;
        let negative: Complex64 = query(self.0, -n)?;
        Ok((positive + negative).re)
    }
}

/// Sine coefficients `b_n = i (c_n - c_{-n})` derived from a complex set.
///
/// `b_0 = 0`. Only the real part is kept.
#[derive(Debug, Clone, Copy)]
pub struct SineFromComplex<'a, C: ?Sized>(pub &'a C);

impl<C> CoefficientFunction<f64> for SineFromComplex<'_, C>
where
    C: CoefficientFunction<Complex64> + ?Sized,
{
    fn coefficient(&self, n: i64) -> Result<f64, FourierError> {
        if n == 0 {
            return Ok(0.0);
        }
        let positive: Complex64 = query(self.0, n)?;
        let negative: Complex64 = query(self.0, -n)?;
        Ok((Complex64::i() * (positive - negative)).re)
    }
}

/// Real `(a, b)` sources equivalent to the complex set `c`.
pub fn real_from_complex<C>(c: &C) -> (CosineFromComplex<'_, C>, SineFromComplex<'_, C>)
where
    C: CoefficientFunction<Complex64> + ?Sized,
{
    (CosineFromComplex(c), SineFromComplex(c))
}

/// Complex coefficients `c_0 = a_0/2`, `c_{±n} = (a_n ∓ i b_n)/2` built from
/// a real set. The result is conjugate symmetric by construction.
#[derive(Debug, Clone, Copy)]
pub struct ComplexFromReal<'a, A: ?Sized, B: ?Sized> {
    a: &'a A,
    b: &'a B,
}

impl<A, B> CoefficientFunction<Complex64> for ComplexFromReal<'_, A, B>
where
    A: CoefficientFunction<f64> + ?Sized,
    B: CoefficientFunction<f64> + ?Sized,
{
    fn coefficient(&self, n: i64) -> Result<Complex64, FourierError> {
        let k = n.unsigned_abs() as i64;
        let cosine: f64 = query(self.a, k)?;
        if n == 0 {
            return Ok(Complex64::new(cosine / 2.0, 0.0));
        }
        let sine: f64 = query(self.b, k)?;
        let value = Complex64::new(cosine / 2.0, -sine / 2.0);
        Ok(if n > 0 { value } else { value.conj() })
    }
}

/// Complex source equivalent to the real set `(a, b)`.
pub fn complex_from_real<'a, A, B>(a: &'a A, b: &'a B) -> ComplexFromReal<'a, A, B>
where
    A: CoefficientFunction<f64> + ?Sized,
    B: CoefficientFunction<f64> + ?Sized,
{
    ComplexFromReal { a, b }
}

/// First harmonic index at which `c(-n) != conj(c(n))` beyond tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetryViolation {
    /// Harmonic index (0 when `c(0)` has an imaginary part).
    pub n: i64,
    /// Magnitude of `c(-n) - conj(c(n))`, or `|Im c(0)|` for `n = 0`.
    pub deviation: f64,
}

/// Checks conjugate symmetry of `c` for `n` in `0..=order`.
///
/// Returns `Ok(None)` when the set represents a real-valued function up to
/// `tolerance`, and the first violation otherwise.
pub fn check_conjugate_symmetry<C>(
    c: &C,
    order: usize,
    tolerance: f64,
) -> Result<Option<SymmetryViolation>, FourierError>
where
    C: CoefficientFunction<Complex64> + ?Sized,
{
    let c0: Complex64 = query(c, 0)?;
    if c0.im.abs() > tolerance {
        return Ok(Some(SymmetryViolation {
            n: 0,
            deviation: c0.im.abs(),
        }));
    }
    for n in 1..=order as i64 {
        let positive: Complex64 = query(c, n)?;
        let negative: Complex64 = query(c, -n)?;
        let deviation = (negative - positive.conj()).norm();
        if deviation > tolerance {
            return Ok(Some(SymmetryViolation { n, deviation }));
        }
    }
    Ok(None)
}
