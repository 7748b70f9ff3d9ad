//! Reference problems shared by the integration tests.

#![allow(dead_code)]

use rkf45::prelude::*;

/// dx/dt = t x, x(0) = 1; exact solution exp(t^2 / 2).
pub struct Growth;

impl ODE for Growth {
    fn arity(&self) -> usize {
        2
    }

    fn ode(&self, t: f64, x: f64, _dx: &[f64]) -> f64 {
        t * x
    }
}

pub fn growth_exact(t: f64) -> f64 {
    (t * t / 2.0).exp()
}

/// x'' = -k x, x(0) = 1, x'(0) = 0; exact solution cos(sqrt(k) t).
pub struct Spring {
    pub k: f64,
}

impl ODE for Spring {
    fn arity(&self) -> usize {
        3
    }

    fn ode(&self, _t: f64, x: f64, _dx: &[f64]) -> f64 {
        -self.k * x
    }
}

/// Largest deviation of a trajectory from an exact solution.
pub fn max_error(sol: &Solution, exact: impl Fn(f64) -> f64) -> f64 {
    sol.iter()
        .map(|(t, x, _)| (x - exact(t)).abs())
        .fold(0.0, f64::max)
}

pub fn default_settings() -> Settings {
    Settings::builder().build()
}
