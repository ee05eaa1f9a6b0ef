use std::f64::consts::{PI, TAU};

use fourier_core::{FourierError, SeriesParameters};

fn code_of(err: FourierError) -> String {
    match err {
        FourierError::InvalidParameter(info) => info.code,
        other => panic!("unexpected error family: {other:?}"),
    }
}

#[test]
fn accepts_zero_order_and_positive_period() {
    let validated = SeriesParameters::new(0, PI).validate().expect("valid");
    assert_eq!(validated.order(), 0);
    assert_eq!(validated.period(), PI);
}

#[test]
fn rejects_negative_order() {
    let err = SeriesParameters::new(-1, TAU).validate().unwrap_err();
    assert_eq!(code_of(err), "negative-order");
}

#[test]
fn rejects_zero_and_negative_period() {
    for period in [0.0, -0.0, -1.0, -TAU] {
        let err = SeriesParameters::new(3, period).validate().unwrap_err();
        assert_eq!(code_of(err), "non-positive-period");
    }
}

#[test]
fn rejects_non_finite_period() {
    for period in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = SeriesParameters::new(3, period).validate().unwrap_err();
        assert_eq!(code_of(err), "non-finite-period");
    }
}

#[test]
fn period_defaults_to_two_pi_when_omitted() {
    let params: SeriesParameters = serde_json::from_str(r#"{"order": 5}"#).expect("parse");
    assert_eq!(params, SeriesParameters::new(5, TAU));
}
