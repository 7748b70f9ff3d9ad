//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use log::debug;

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::check_problem,
};

use super::{Spacing, augmented};

/// Classical explicit Runge-Kutta 4 (RK4) fixed-step integrator on the
/// augmented state of an order-`n` equation. No error estimation.
pub fn rk4<F, I>(
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
    let n = y.len();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut yt = vec![0.0; n];
    let mut sol = Solution::start(t0, &y, h);

    debug!("rk4: order {}, {} points, h = {:e}", order, npoints, h);

    // --- Main integration loop ---
    for step in 1..npoints {
        let x = t0 + (step - 1) as Float * h;

        // Stage computations
        augmented(f, x, &y, &mut k1);

        for i in 0..n {
            yt[i] = y[i] + h * A21 * k1[i];
        }
        augmented(f, x + C2 * h, &yt, &mut k2);

        for i in 0..n {
            yt[i] = y[i] + h * A32 * k2[i];
        }
        augmented(f, x + C3 * h, &yt, &mut k3);

        for i in 0..n {
            yt[i] = y[i] + h * A43 * k3[i];
        }
        augmented(f, x + C4 * h, &yt, &mut k4);

        // Update state
        for i in 0..n {
            y[i] += h * (B1 * k1[i] + B2 * k2[i] + B3 * k3[i] + B4 * k4[i]);
        }

        let x_next = if step == npoints - 1 { xend } else { t0 + step as Float * h };
        sol.push(x_next, &y);
        sol.nfev += 4;
        sol.nstep += 1;
    }
    sol.naccpt = sol.nstep;

    Ok(sol)
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
