use std::f64::consts::TAU;

use fourier_core::{Complex64, FourierError, SampleDomain};
use fourier_series::{
    run_sweep, sweep_preset, Preset, ResidualCheck, ResidualPolicy, SeriesForm, SweepSource,
    SweepSpec,
};

fn spec(form: SeriesForm, orders: Vec<i64>, concurrency: usize) -> SweepSpec {
    SweepSpec {
        form,
        orders,
        concurrency,
        ..SweepSpec::default()
    }
}

#[test]
fn sweep_reports_repeat() {
    let domain = SampleDomain::linspace(-TAU, TAU, 200).unwrap();
    let preset = Preset::Sawtooth { amplitude: 1.5 };
    let sweep = spec(SeriesForm::Complex, vec![1, 2, 5, 10], 1);
    let first = sweep_preset(&preset, &sweep, &domain).unwrap();
    let second = sweep_preset(&preset, &sweep, &domain).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.report_hash.len(), 64);
}

#[test]
fn concurrency_does_not_change_results() {
    let domain = SampleDomain::linspace(0.0, TAU, 300).unwrap();
    let preset = Preset::default();
    let serial = sweep_preset(&preset, &spec(SeriesForm::Real, vec![100, 1, 10, 5], 1), &domain)
        .unwrap();
    let parallel =
        sweep_preset(&preset, &spec(SeriesForm::Real, vec![100, 1, 10, 5], 4), &domain).unwrap();
    assert_eq!(serial.orders, parallel.orders);
    let orders: Vec<i64> = parallel.orders.iter().map(|r| r.order).collect();
    assert_eq!(orders, vec![100, 1, 10, 5]);
}

#[test]
fn default_orders_match_plot_grid() {
    let domain = SampleDomain::linspace(-1.0, 1.0, 50).unwrap();
    let report = sweep_preset(&Preset::Triangle { amplitude: 1.0 }, &SweepSpec::default(), &domain)
        .unwrap();
    let orders: Vec<i64> = report.orders.iter().map(|r| r.order).collect();
    assert_eq!(orders, vec![1, 2, 5, 10, 100, 1000]);
    for result in &report.orders {
        assert_eq!(result.values.len(), 50);
        assert!(result.mse.is_some());
    }
    let coarse = report.order(1).and_then(|r| r.mse).unwrap();
    let fine = report.order(1000).and_then(|r| r.mse).unwrap();
    assert!(fine < coarse);
    assert_eq!(report.provenance.source, "triangle");
}

#[test]
fn custom_sources_run_without_target() {
    let c = |n: i64| Complex64::new(if n == 0 { 2.0 } else { 0.0 }, 0.0);
    let domain = SampleDomain::new(vec![0.0, 1.0]).unwrap();
    let report = run_sweep(
        &spec(SeriesForm::Complex, vec![0, 3], 2),
        SweepSource::Complex(&c),
        &domain,
        None,
        "custom",
    )
    .unwrap();
    assert!(report.target.is_none());
    assert_eq!(report.orders[0].values, vec![2.0, 2.0]);
    assert_eq!(report.orders[1].mse, None);
}

#[test]
fn invalid_orders_fail_before_evaluation() {
    let domain = SampleDomain::new(vec![0.0]).unwrap();
    let err = sweep_preset(
        &Preset::default(),
        &spec(SeriesForm::Complex, vec![5, -1], 1),
        &domain,
    )
    .unwrap_err();
    assert!(matches!(err, FourierError::InvalidParameter(ref info) if info.code == "negative-order"));

    let err = sweep_preset(&Preset::default(), &spec(SeriesForm::Complex, vec![], 1), &domain)
        .unwrap_err();
    assert!(matches!(err, FourierError::InvalidParameter(ref info) if info.code == "empty-orders"));
}

#[test]
fn mismatched_form_is_a_config_error() {
    let a = |_n: i64| 0.0;
    let domain = SampleDomain::new(vec![0.0]).unwrap();
    let err = run_sweep(
        &spec(SeriesForm::Complex, vec![1], 1),
        SweepSource::Real { cosine: &a, sine: &a },
        &domain,
        None,
        "custom",
    )
    .unwrap_err();
    assert!(matches!(err, FourierError::Config(ref info) if info.code == "form-mismatch"));
}

#[test]
fn negative_tolerance_fails_before_evaluation() {
    let domain = SampleDomain::new(vec![0.0, 1.0]).unwrap();
    let mut sweep = spec(SeriesForm::Complex, vec![1, 2], 1);
    sweep.residual = ResidualCheck {
        policy: ResidualPolicy::Reject,
        tolerance: -1.0,
    };
    let err = sweep_preset(&Preset::default(), &sweep, &domain).unwrap_err();
    assert!(matches!(err, FourierError::InvalidParameter(ref info) if info.code == "invalid-tolerance"));
}
