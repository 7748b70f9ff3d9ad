use std::cell::Cell;

use rkf45::prelude::*;

mod common;
use common::{Growth, default_settings};

#[test]
fn arity_mismatch_is_rejected_before_stepping() {
    let calls = Cell::new(0);
    let f = FirstOrder(|t: f64, x: f64| {
        calls.set(calls.get() + 1);
        t * x
    });
    let err = rkf45(&f, 2, [0.0, 1.0, 0.0], 1e-4, 1.0, default_settings()).unwrap_err();
    assert_eq!(err, Error::ArityMismatch { expected: 3, got: 2 });
    assert!(err.is_precondition());
    assert_eq!(calls.get(), 0);
}

#[test]
fn higher_order_closure_arity_is_checked() {
    let f = HigherOrder::new(4, |_t: f64, x: f64, _dx: &[f64]| -x);
    let err = rkf45(&f, 2, [0.0, 1.0, 0.0], 1e-4, 1.0, default_settings()).unwrap_err();
    assert_eq!(err, Error::ArityMismatch { expected: 3, got: 4 });
}

#[test]
fn initial_condition_length_must_match_order() {
    let err = rkf45(&Growth, 1, [0.0, 1.0, 0.0], 1e-4, 1.0, default_settings()).unwrap_err();
    assert_eq!(err, Error::InitialConditionLength { expected: 2, got: 3 });
}

#[test]
fn order_zero_is_rejected() {
    let err = rkf45(&Growth, 0, [0.0], 1e-4, 1.0, default_settings()).unwrap_err();
    assert_eq!(err, Error::InvalidOrder(0));
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = rkf45(&Growth, 1, [2.0, 1.0], 1e-4, 1.0, default_settings()).unwrap_err();
    assert_eq!(err, Error::InvertedBounds { left: 2.0, right: 1.0 });
}

#[test]
fn non_positive_step_is_rejected() {
    for h in [0.0, -1e-4, f64::NAN] {
        let err = rkf45(&Growth, 1, [0.0, 1.0], h, 1.0, default_settings()).unwrap_err();
        assert!(matches!(err, Error::InvalidStepSize(_)));
    }
}

#[test]
fn settings_are_validated() {
    let cases = [
        (Settings::builder().tol(0.0).build(), Error::InvalidTolerance(0.0)),
        (
            Settings::builder().hmin(1e-2).hmax(1e-3).build(),
            Error::InvalidStepBounds { hmin: 1e-2, hmax: 1e-3 },
        ),
        (
            Settings::builder().scale_min(1.5).build(),
            Error::InvalidScaleBounds { min: 1.5, max: 2.0 },
        ),
        (Settings::builder().safety_factor(1.5).build(), Error::SafetyFactorOutOfRange(1.5)),
        (Settings::builder().nmax(0).build(), Error::NMaxMustBePositive(0)),
        (Settings::builder().nstall(0).build(), Error::NStallMustBePositive(0)),
    ];
    for (settings, expected) in cases {
        let err = rkf45(&Growth, 1, [0.0, 1.0], 1e-4, 1.0, settings).unwrap_err();
        assert_eq!(err, expected);
        assert!(err.is_precondition());
    }
}
