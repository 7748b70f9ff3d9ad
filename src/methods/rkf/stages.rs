//! Stage evaluation of an embedded 4(5) pair on the augmented state.

use crate::{Float, core::ode::ODE};

use super::tableau::{STAGES, Tableau};

/// Computes the six stage increments of one step and reduces them into the
/// 4th- and 5th-order increments of the augmented state `[x, x', ...]`.
///
/// Owns scratch buffers sized for one order so the driver loop does not
/// allocate; every buffer is overwritten on each call, nothing carries over.
pub struct StageEvaluator<'t> {
    tableau: &'t Tableau,
    k: [Vec<Float>; STAGES],
    yt: Vec<Float>,
    inc4: Vec<Float>,
    inc5: Vec<Float>,
}

impl<'t> StageEvaluator<'t> {
    /// Scratch space for an equation of order `n` (state length `n`).
    pub fn new(tableau: &'t Tableau, n: usize) -> Self {
        Self {
            tableau,
            k: std::array::from_fn(|_| vec![0.0; n]),
            yt: vec![0.0; n],
            inc4: vec![0.0; n],
            inc5: vec![0.0; n],
        }
    }

    /// Evaluate the stages for a step of size `h` from `(t, y)`.
    ///
    /// Returns `(inc4, inc5)`. Calls `f.ode` exactly six times.
    pub fn evaluate<F: ODE>(&mut self, f: &F, t: Float, y: &[Float], h: Float) -> (&[Float], &[Float]) {
        let n = y.len();
        let top = n - 1;
        let tab = self.tableau;

        for i in 0..STAGES {
            // Partial state from the previous stages of this step.
            for j in 0..n {
                let mut acc = 0.0;
                for l in 0..i {
                    acc += tab.a[i][l] * self.k[l][j];
                }
                self.yt[j] = y[j] + acc;
            }

            // Lower derivatives advance with the next-higher one.
            for j in 0..top {
                self.k[i][j] = h * self.yt[j + 1];
            }
            self.k[i][top] = h * f.ode(t + tab.c[i] * h, self.yt[0], &self.yt[1..]);
        }

        for j in 0..n {
            let mut low = 0.0;
            let mut high = 0.0;
            for i in 0..STAGES {
                low += tab.b4[i] * self.k[i][j];
                high += tab.b5[i] * self.k[i][j];
            }
            self.inc4[j] = low;
            self.inc5[j] = high;
        }

        (&self.inc4, &self.inc5)
    }
}
