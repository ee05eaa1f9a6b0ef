use std::f64::consts::TAU;

use fourier_core::SampleDomain;
use fourier_series::{complex_series, mean_squared_error, real_series, Preset};

fn midpoint_domain(period: f64, count: usize) -> SampleDomain {
    let step = period / count as f64;
    SampleDomain::new((0..count).map(|i| (i as f64 + 0.5) * step).collect()).unwrap()
}

fn square_mse(order: i64, domain: &SampleDomain, preset: &Preset) -> f64 {
    let c = preset.complex_source();
    let approx = complex_series(&c, order, domain, TAU).unwrap();
    let target: Vec<f64> = domain.points().iter().map(|&t| preset.target(t, TAU)).collect();
    mean_squared_error(approx.values(), &target).unwrap()
}

#[test]
fn square_wave_error_shrinks_with_order() {
    let preset = Preset::Square { amplitude: 1.0 };
    let domain = midpoint_domain(TAU, 1000);
    let orders = [1, 3, 5, 7, 9, 15, 25, 51];
    let errors: Vec<f64> = orders
        .iter()
        .map(|&order| square_mse(order, &domain, &preset))
        .collect();
    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "mse did not decrease: {errors:?}");
    }
    assert!(errors[errors.len() - 1] < 0.02);
}

#[test]
fn even_harmonics_leave_square_wave_error_unchanged() {
    let preset = Preset::Square { amplitude: 1.0 };
    let domain = midpoint_domain(TAU, 1000);
    let odd = square_mse(3, &domain, &preset);
    let even = square_mse(4, &domain, &preset);
    assert!((odd - even).abs() < 1e-12);
}

#[test]
fn triangle_wave_converges_in_real_form() {
    let preset = Preset::Triangle { amplitude: 2.0 };
    let domain = midpoint_domain(5.0, 400);
    let (a, b) = preset.real_sources();
    let approx = real_series(&a, &b, 41, &domain, 5.0).unwrap();
    let target: Vec<f64> = domain.points().iter().map(|&t| preset.target(t, 5.0)).collect();
    let mse = mean_squared_error(approx.values(), &target).unwrap();
    assert!(mse < 1e-4, "mse = {mse}");
}

#[test]
fn harmonic_preset_is_reproduced_exactly() {
    let preset = Preset::Harmonic {
        index: 3,
        cosine: 0.5,
        sine: -1.25,
    };
    let domain = SampleDomain::linspace(-4.0, 4.0, 101).unwrap();
    let c = preset.complex_source();
    let approx = complex_series(&c, 3, &domain, 2.0).unwrap();
    for (value, &t) in approx.values().iter().zip(domain.points()) {
        assert!((value - preset.target(t, 2.0)).abs() < 1e-12);
    }
}
