//! RKF45 - adaptive embedded Runge-Kutta 4(5) driver for scalar ODEs of any order

use log::{debug, trace, warn};

use crate::{
    Float,
    core::{initial::InitialCondition, ode::ODE, solution::Solution, status::Status},
    error::Error,
    methods::{check_problem, settings::Settings},
};

use super::{
    controller::{ErrorNorm, StepSizeController},
    stages::StageEvaluator,
    tableau::Tableau,
};

/// Numerical solution of a scalar ODE of order `n`,
/// `x^(n) = f(t, x, x', ..., x^(n-1))`, with an embedded Runge-Kutta 4(5)
/// pair and automatic step-size control.
///
/// The equation is integrated as the first-order system on the augmented
/// state `[x, x', ..., x^(n-1)]`. Each step advances with the 5th-order
/// increment; the gap to the 4th-order increment is the local error estimate.
///
/// # Arguments
/// - `f`: the right-hand side; its [`ODE::arity`] must be `order + 1`.
/// - `order`: order `n >= 1` of the equation.
/// - `init`: `[t0, x0, x0', ..., x0^(n-1)]`, exactly `order + 1` values.
/// - `h`: initial step size, positive.
/// - `xend`: right boundary, `xend >= t0`.
/// - `settings`: tolerance, step bounds, tableau, see [`Settings`].
///
/// # Errors
/// Precondition errors are returned before any step is taken.
/// [`Error::StepSizeStalled`] is returned when the error stays above the
/// tolerance at the minimum step size for `settings.nstall` attempts in a row.
///
/// # Example
/// ```
/// use rkf45::prelude::*;
///
/// // x'' = -1000 x, x(0) = 1, x'(0) = 0
/// let f = SecondOrder(|_t: f64, x: f64, _v: f64| -1000.0 * x);
/// let sol = rkf45(&f, 2, [0.0, 1.0, 0.0], 1e-4, 0.1, Settings::default()).unwrap();
/// let (t, x, _) = sol.last().unwrap();
/// assert_eq!(t, 0.1);
/// assert!((x - (1000.0_f64.sqrt() * t).cos()).abs() < 1e-6);
/// ```
pub fn rkf45<F, I>(
    f: &F,
    order: usize,
    init: I,
    h: Float,
    xend: Float,
    settings: Settings,
) -> Result<Solution, Error>
where
    F: ODE,
    I: AsRef<[Float]>,
{
    // --- Input Validation ---
    let init = check_problem(f, order, init.as_ref(), xend)?;

    // Initial Step Size
    if !(h > 0.0) {
        return Err(Error::InvalidStepSize(h));
    }

    // Tolerance
    let tol = settings.tol;
    if !(tol > 0.0) {
        return Err(Error::InvalidTolerance(tol));
    }

    // Step size bounds
    let (hmin, hmax) = (settings.hmin, settings.hmax);
    if !(hmin > 0.0 && hmin <= hmax) {
        return Err(Error::InvalidStepBounds { hmin, hmax });
    }

    // Parameters for step size selection
    let (scale_min, scale_max) = (settings.scale_min, settings.scale_max);
    if !(scale_min > 0.0 && scale_min <= 1.0 && scale_max >= 1.0) {
        return Err(Error::InvalidScaleBounds {
            min: scale_min,
            max: scale_max,
        });
    }

    // Safety Factor
    let safety_factor = settings.safety_factor;
    if !(safety_factor > 0.0 && safety_factor <= 1.0) {
        return Err(Error::SafetyFactorOutOfRange(safety_factor));
    }

    // Maximum Number of Steps
    if settings.nmax == 0 {
        return Err(Error::NMaxMustBePositive(settings.nmax));
    }
    if settings.nstall == 0 {
        return Err(Error::NStallMustBePositive(settings.nstall));
    }

    let controller = StepSizeController {
        h,
        tol,
        hmin,
        hmax,
        safety_factor,
        scale_min,
        scale_max,
    };
    let norm = settings
        .error_norm
        .unwrap_or_else(|| ErrorNorm::for_order(order));

    // --- Call RKF45 Core Solver ---
    rkf45_core(
        f,
        &init,
        xend,
        settings.tableau.tableau(),
        controller,
        norm,
        settings.nmax,
        settings.nstall,
    )
}

/// RKF45 core solver
fn rkf45_core<F: ODE>(
    f: &F,
    init: &InitialCondition,
    xend: Float,
    tableau: &Tableau,
    mut controller: StepSizeController,
    norm: ErrorNorm,
    nmax: usize,
    nstall: usize,
) -> Result<Solution, Error> {
    // --- Initializations ---
    let mut t = init.t();
    let mut y = init.state().to_vec();
    let mut y_next = vec![0.0; y.len()];
    let mut stages = StageEvaluator::new(tableau, y.len());
    let mut sol = Solution::start(t, &y, controller.h);
    let mut nstalled = 0;

    debug!(
        "rkf45 ({}): order {}, t in [{}, {}], h0 = {:e}, tol = {:e}, {:?} error",
        tableau.name,
        init.order(),
        t,
        xend,
        controller.h,
        controller.tol,
        norm,
    );

    // --- Main integration loop ---
    while t < xend {
        // Check for maximum number of steps
        if sol.nstep >= nmax {
            warn!("rkf45: step budget nmax = {} exhausted at t = {}", nmax, t);
            sol.status = Status::NeedLargerNmax;
            break;
        }

        // Adjust last step so we land exactly on xend
        let last = t + controller.h >= xend;
        if last {
            controller.h = xend - t;
        }
        let h = controller.h;

        let (inc4, inc5) = stages.evaluate(f, t, &y, h);
        for j in 0..y.len() {
            y_next[j] = y[j] + inc5[j];
        }
        let err = norm.estimate(inc4, inc5);
        sol.nfev += 6;
        sol.nstep += 1;

        let accepted = controller.accepts(err);
        trace!("t = {}, h = {:e}, err = {:e}, accepted = {}", t, h, err, accepted);

        if accepted {
            t = if last { xend } else { t + h };
            y.copy_from_slice(&y_next);
            sol.push(t, &y);
            sol.naccpt += 1;
            nstalled = 0;
        } else {
            sol.nrejct += 1;
            if h <= controller.hmin {
                nstalled += 1;
                if nstalled >= nstall {
                    warn!(
                        "rkf45: error {:e} above tolerance {:e} at minimum step {:e}, t = {}",
                        err, controller.tol, h, t
                    );
                    return Err(Error::StepSizeStalled { t, h, err });
                }
            }
        }

        controller.adapt(err);
    }

    sol.h = controller.h;

    debug!(
        "rkf45 finished: status {:?}, t = {}, nfev = {}, nstep = {}, naccpt = {}, nrejct = {}",
        sol.status, t, sol.nfev, sol.nstep, sol.naccpt, sol.nrejct,
    );

    Ok(sol)
}
