//! Local error estimate and step-size control for the adaptive driver.

use crate::Float;

/// Guards the relative error against a vanishing denominator.
const REL_EPS: Float = 1e-10;

/// Exponent of the control law, 1/5 for a pair whose higher order is 5.
const EXPONENT: Float = 1.0 / 5.0;

/// How the difference between the 4th- and 5th-order increments is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorNorm {
    /// `max_j |inc4[j] - inc5[j]|` over the augmented state.
    Absolute,
    /// `|inc4 - inc5| / (|inc5| + 1e-10)` on the dependent variable `x`.
    Relative,
}

impl ErrorNorm {
    /// Relative for first-order equations, absolute otherwise.
    pub fn for_order(order: usize) -> Self {
        if order > 1 { Self::Absolute } else { Self::Relative }
    }

    pub fn estimate(&self, inc4: &[Float], inc5: &[Float]) -> Float {
        match self {
            Self::Absolute => inc4
                .iter()
                .zip(inc5)
                .map(|(lo, hi)| (lo - hi).abs())
                .fold(0.0, Float::max),
            Self::Relative => (inc4[0] - inc5[0]).abs() / (inc5[0].abs() + REL_EPS),
        }
    }
}

/// Step-size state of a single integration run.
///
/// `h_new = h * clamp(safety * (tol / err)^(1/5), scale_min, scale_max)`,
/// then clamped to `[hmin, hmax]`. A zero error leaves `h` unchanged.
#[derive(Debug, Clone)]
pub struct StepSizeController {
    pub h: Float,
    pub tol: Float,
    pub hmin: Float,
    pub hmax: Float,
    pub safety_factor: Float,
    pub scale_min: Float,
    pub scale_max: Float,
}

impl StepSizeController {
    /// Whether a step with error estimate `err` is accepted.
    pub fn accepts(&self, err: Float) -> bool {
        err < self.tol
    }

    /// Growth factor for the current error, before the absolute bounds.
    pub fn factor(&self, err: Float) -> Float {
        (self.safety_factor * (self.tol / err).powf(EXPONENT))
            .min(self.scale_max)
            .max(self.scale_min)
    }

    /// Rescale `h` after a step, accepted or not.
    pub fn adapt(&mut self, err: Float) {
        // A NaN estimate (blown-up right-hand side) shrinks as hard as allowed.
        let factor = if err.is_nan() {
            self.scale_min
        } else if err > 0.0 {
            self.factor(err)
        } else {
            return;
        };
        self.h = (self.h * factor).min(self.hmax).max(self.hmin);
    }
}
