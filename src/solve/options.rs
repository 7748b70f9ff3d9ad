//! Options and method selection for solve_ivp

use bon::Builder;

use crate::{Float, methods::rkf::RkfTableau};

/// Solver method selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Fixed-step Forward Euler
    Euler,
    /// Classic fixed-step RK4
    RK4,
    /// Adaptive embedded 4(5) pair with the given tableau
    RKF45(RkfTableau),
}

impl Default for Method {
    fn default() -> Self {
        Method::RKF45(RkfTableau::Fehlberg)
    }
}

#[derive(Builder, Clone, Debug)]
/// Options for solve_ivp
pub struct Options {
    /// Method to use. Default: RKF45 with the Fehlberg tableau.
    #[builder(default)]
    pub method: Method,
    /// Initial step for RKF45, grid step for the fixed-step methods.
    #[builder(default = 1e-4)]
    pub first_step: Float,
    /// Number of grid points for the fixed-step methods; overrides
    /// `first_step` when set.
    pub npoints: Option<usize>,
    /// Accuracy target of RKF45.
    #[builder(default = 1e-10)]
    pub tol: Float,
    /// Minimum step size of RKF45 (maps to `settings.hmin`).
    pub min_step: Option<Float>,
    /// Maximum step size of RKF45 (maps to `settings.hmax`).
    pub max_step: Option<Float>,
    /// Maximum number of attempted RKF45 steps.
    pub nmax: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self::builder().build()
    }
}
