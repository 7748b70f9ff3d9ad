//! Settings for the adaptive integrator

use bon::Builder;

use crate::{
    Float,
    methods::rkf::{ErrorNorm, RkfTableau},
};

#[derive(Builder, Clone, Debug)]
/// Settings for the adaptive Runge-Kutta-Fehlberg integrator
pub struct Settings {
    /// Accuracy target; a step is accepted when its error estimate is below it.
    #[builder(default = 1e-10)]
    pub tol: Float,
    /// Minimum step size after rescaling.
    #[builder(default = 1e-6)]
    pub hmin: Float,
    /// Maximum step size after rescaling.
    #[builder(default = 1e-3)]
    pub hmax: Float,
    /// Safety factor in step-size prediction.
    #[builder(default = 0.9)]
    pub safety_factor: Float,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max
    #[builder(default = 0.5)]
    pub scale_min: Float,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max
    #[builder(default = 2.0)]
    pub scale_max: Float,
    /// Embedded pair used for the stages.
    #[builder(default)]
    pub tableau: RkfTableau,
    /// Error measure. None picks relative for order 1 and absolute otherwise.
    pub error_norm: Option<ErrorNorm>,
    /// Maximum number of attempted steps.
    #[builder(default = 1_000_000)]
    pub nmax: usize,
    /// Consecutive rejections at the minimum step size before giving up.
    #[builder(default = 5)]
    pub nstall: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}
