//! Errors for integration methods

use crate::Float;

/// Errors returned by the integrators.
///
/// Every variant except [`Error::StepSizeStalled`] is a precondition
/// violation detected before the first step is taken.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("right boundary is smaller than the initial t (left = {left}, right = {right})")]
    InvertedBounds { left: Float, right: Float },
    #[error("step size must be positive (got {0})")]
    InvalidStepSize(Float),
    #[error("number of grid points must be at least 2 for a non-empty interval (got {0})")]
    InvalidPointCount(usize),
    #[error("order of the ODE must be at least 1 (got {0})")]
    InvalidOrder(usize),
    #[error("initial condition must have order + 1 = {expected} elements [t, x, x', ...] (got {got})")]
    InitialConditionLength { expected: usize, got: usize },
    #[error("the ODE function should take {expected} arguments (t, x, x', x'', ...) (got {got})")]
    ArityMismatch { expected: usize, got: usize },
    #[error("tolerance must be positive (got {0})")]
    InvalidTolerance(Float),
    #[error("step bounds must satisfy 0 < hmin <= hmax (got hmin = {hmin}, hmax = {hmax})")]
    InvalidStepBounds { hmin: Float, hmax: Float },
    #[error("scale bounds must satisfy 0 < scale_min <= 1 <= scale_max (got {min}, {max})")]
    InvalidScaleBounds { min: Float, max: Float },
    #[error("safety factor must be in (0, 1] (got {0})")]
    SafetyFactorOutOfRange(Float),
    #[error("nmax must be positive (got {0})")]
    NMaxMustBePositive(usize),
    #[error("nstall must be positive (got {0})")]
    NStallMustBePositive(usize),
    #[error("step size stalled at its minimum: t = {t}, h = {h:e}, error = {err:e} stays above tolerance")]
    StepSizeStalled { t: Float, h: Float, err: Float },
}

impl Error {
    /// True for input validation failures raised before any stepping.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, Error::StepSizeStalled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = Error::ArityMismatch { expected: 3, got: 2 };
        assert!(err.to_string().contains("3 arguments"));

        let err = Error::InvertedBounds { left: 2.0, right: 1.0 };
        assert!(err.to_string().contains("smaller"));

        let err = Error::StepSizeStalled { t: 0.5, h: 1e-6, err: 1.0 };
        assert!(err.to_string().contains("stalled"));
    }

    #[test]
    fn stall_is_not_a_precondition() {
        assert!(Error::InvalidStepSize(0.0).is_precondition());
        assert!(Error::InitialConditionLength { expected: 2, got: 3 }.is_precondition());
        assert!(!Error::StepSizeStalled { t: 0.0, h: 1e-6, err: 1.0 }.is_precondition());
    }
}
