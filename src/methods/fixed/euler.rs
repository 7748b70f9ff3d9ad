//! Forward Euler fixed-step integrator.

use log::debug;

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::check_problem,
};

use super::{Spacing, augmented};

/// Forward Euler over a uniform grid:
/// `y[i] = y[i-1] + h * F(t[i-1], y[i-1])` on the augmented state, one ODE
/// evaluation per step.
pub fn euler<F, I>(
    f: &F,
    order: usize,
    init: I,
    spacing: Spacing,
    xend: Float,
) -> Result<Solution, Error>
where
    F: ODE,
    I: AsRef<[Float]>,
{
    // --- Input Validation ---
    let init = check_problem(f, order, init.as_ref(), xend)?;
    let t0 = init.t();
    let (npoints, h) = spacing.grid(t0, xend)?;

    // --- Declarations ---
    let mut y = init.state().to_vec();
    let mut k1 = vec![0.0; y.len()];
    let mut sol = Solution::start(t0, &y, h);

    debug!("euler: order {}, {} points, h = {:e}", order, npoints, h);

    // --- Main integration loop ---
    for i in 1..npoints {
        let t = t0 + (i - 1) as Float * h;
        augmented(f, t, &y, &mut k1);
        for (yj, kj) in y.iter_mut().zip(&k1) {
            *yj += h * kj;
        }
        let t_next = if i == npoints - 1 { xend } else { t0 + i as Float * h };
        sol.push(t_next, &y);
        sol.nfev += 1;
        sol.nstep += 1;
    }
    sol.naccpt = sol.nstep;

    Ok(sol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ode::FirstOrder;

    #[test]
    fn single_step_matches_hand_computation() {
        // x' = t x from (0, 1) with h = 0.5: x1 = 1, x2 = 1 + 0.5 * 0.5 = 1.25
        let f = FirstOrder(|t: Float, x: Float| t * x);
        let sol = euler(&f, 1, [0.0, 1.0], Spacing::Step(0.5), 1.0).unwrap();
        assert_eq!(sol.t, vec![0.0, 0.5, 1.0]);
        assert_eq!(sol.x, vec![1.0, 1.0, 1.25]);
        assert_eq!(sol.nfev, 2);
        assert_eq!(sol.nrejct, 0);
    }
}
