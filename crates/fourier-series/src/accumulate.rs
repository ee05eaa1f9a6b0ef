//! Shared per-term accumulation over a sample domain.

use std::f64::consts::TAU;
use std::ops::AddAssign;

use fourier_core::{FourierError, SampleDomain};

/// Angular frequency `ω = 2π/T` for a validated period.
pub fn angular_frequency(period: f64) -> f64 {
    TAU / period
}

/// Accumulates `order` series terms over every point of `domain`.
///
/// The accumulator starts at `init` for every point. For each `n` in
/// `1..=order`, `term(n)` is called exactly once; it fetches the coefficients
/// of harmonic `n` and returns the contribution as a function of the phase
/// `θ = n·ω·t`, which is then applied to every sample point. Coefficients are
/// therefore never re-queried per sample.
pub fn accumulate_terms<A, T, C>(
    domain: &SampleDomain,
    order: usize,
    omega: f64,
    init: A,
    mut term: T,
) -> Result<Vec<A>, FourierError>
where
    A: Copy + AddAssign,
    T: FnMut(i64) -> Result<C, FourierError>,
    C: Fn(f64) -> A,
{
    let mut acc = vec![init; domain.len()];
    for n in 1..=order {
        let harmonic = n as i64;
        let contribution = term(harmonic)?;
        let step = n as f64 * omega;
        for (slot, &t) in acc.iter_mut().zip(domain.points()) {
            *slot += contribution(step * t);
        }
    }
    Ok(acc)
}
