//! Fixed-step integrators (Forward Euler, RK4) used as baselines

mod euler;
mod rk4;

pub use euler::euler;
pub use rk4::rk4;

use crate::{Float, core::ode::ODE, error::Error};

/// Uniform grid over `[t0, xend]`, given either by a step or a point count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing {
    /// Step size `dt`; the grid has `floor((xend - t0) / dt) + 1` points.
    Step(Float),
    /// Number of grid points, both boundaries included.
    Points(usize),
}

impl Spacing {
    /// Number of points and actual spacing of the grid over `[left, right]`.
    ///
    /// The grid always ends on `right`, so the spacing is
    /// `(right - left) / (n - 1)`, which can be slightly larger than a
    /// requested step that does not divide the interval.
    pub(crate) fn grid(&self, left: Float, right: Float) -> Result<(usize, Float), Error> {
        let span = right - left;
        let n = match *self {
            Spacing::Step(dt) => {
                if !(dt > 0.0) {
                    return Err(Error::InvalidStepSize(dt));
                }
                let n = ((span / dt).floor() as usize).saturating_add(1);
                if span > 0.0 { n.max(2) } else { 1 }
            }
            Spacing::Points(n) => {
                if n == 0 || (n == 1 && span > 0.0) {
                    return Err(Error::InvalidPointCount(n));
                }
                n
            }
        };
        let h = if n > 1 { span / (n - 1) as Float } else { 0.0 };
        Ok((n, h))
    }
}

/// Derivative of the augmented state `[x, x', ..., x^(n-1)]`: each lower
/// component takes the next-higher one, the top one comes from the ODE.
pub(crate) fn augmented<F: ODE>(f: &F, t: Float, y: &[Float], dydt: &mut [Float]) {
    let top = y.len() - 1;
    dydt[..top].copy_from_slice(&y[1..]);
    dydt[top] = f.ode(t, y[0], &y[1..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ode::ThirdOrder;

    #[test]
    fn step_spacing_counts_points() {
        assert_eq!(Spacing::Step(0.5).grid(0.0, 2.0), Ok((5, 0.5)));
        // 2 / 0.3 = 6.67 -> 7 points ending on the boundary
        let (n, h) = Spacing::Step(0.3).grid(0.0, 2.0).unwrap();
        assert_eq!(n, 7);
        assert!((h - 2.0 / 6.0).abs() < 1e-15);
        // Step larger than the interval still reaches it.
        assert_eq!(Spacing::Step(5.0).grid(0.0, 2.0), Ok((2, 2.0)));
        assert_eq!(Spacing::Step(0.1).grid(1.0, 1.0), Ok((1, 0.0)));
    }

    #[test]
    fn point_spacing() {
        assert_eq!(Spacing::Points(3).grid(0.0, 1.0), Ok((3, 0.5)));
        assert_eq!(Spacing::Points(1).grid(1.0, 1.0), Ok((1, 0.0)));
        assert_eq!(Spacing::Points(0).grid(0.0, 1.0), Err(Error::InvalidPointCount(0)));
        assert_eq!(Spacing::Points(1).grid(0.0, 1.0), Err(Error::InvalidPointCount(1)));
    }

    #[test]
    fn non_positive_step_is_rejected() {
        assert_eq!(Spacing::Step(0.0).grid(0.0, 1.0), Err(Error::InvalidStepSize(0.0)));
        assert_eq!(Spacing::Step(-0.1).grid(0.0, 1.0), Err(Error::InvalidStepSize(-0.1)));
    }

    #[test]
    fn augmented_derivative_shifts_the_chain() {
        let f = ThirdOrder(|_t: Float, x: Float, v: Float, a: Float| a - x + v);
        let mut dydt = [0.0; 3];
        augmented(&f, 0.0, &[1.0, 2.0, 3.0], &mut dydt);
        assert_eq!(dydt, [2.0, 3.0, 4.0]);
    }
}
