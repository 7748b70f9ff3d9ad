//! solve_ivp entry point implementation

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::{
        fixed::{Spacing, euler, rk4},
        rkf::rkf45,
        settings::Settings,
    },
};

use super::options::{Method, Options};

/// Solve the initial value problem of an order-`order` scalar ODE on
/// `[init[0], xend]` with the method chosen in `options`.
pub fn solve_ivp<F, I>(
    f: &F,
    order: usize,
    init: I,
    xend: Float,
    options: Options,
) -> Result<Solution, Error>
where
    F: ODE,
    I: AsRef<[Float]>,
{
    let spacing = match options.npoints {
        Some(n) => Spacing::Points(n),
        None => Spacing::Step(options.first_step),
    };

    // Dispatch by method
    match options.method {
        Method::Euler => euler(f, order, init, spacing, xend),
        Method::RK4 => rk4(f, order, init, spacing, xend),
        Method::RKF45(tableau) => {
            let mut settings = Settings::builder().tol(options.tol).tableau(tableau).build();
            if let Some(hmin) = options.min_step {
                settings.hmin = hmin;
            }
            if let Some(hmax) = options.max_step {
                settings.hmax = hmax;
            }
            if let Some(nmax) = options.nmax {
                settings.nmax = nmax;
            }
            rkf45(f, order, init, options.first_step, xend, settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::ode::FirstOrder, methods::rkf::RkfTableau};

    #[test]
    fn dispatches_on_method() {
        let f = FirstOrder(|_t: Float, x: Float| -x);
        for method in [
            Method::Euler,
            Method::RK4,
            Method::RKF45(RkfTableau::Fehlberg),
            Method::RKF45(RkfTableau::CashKarp),
        ] {
            let options = Options::builder().method(method).first_step(1e-3).build();
            let sol = solve_ivp(&f, 1, [0.0, 1.0], 1.0, options).unwrap();
            let (t, x, _) = sol.last().unwrap();
            assert_eq!(t, 1.0);
            assert!((x - (-1.0 as Float).exp()).abs() < 1e-3, "{:?}: {}", method, x);
        }
    }

    #[test]
    fn npoints_sets_the_fixed_grid() {
        let f = FirstOrder(|_t: Float, x: Float| x);
        let options = Options::builder().method(Method::RK4).npoints(11).build();
        let sol = solve_ivp(&f, 1, [0.0, 1.0], 1.0, options).unwrap();
        assert_eq!(sol.len(), 11);
        assert_eq!(sol.nfev, 40);
    }

    #[test]
    fn step_bounds_reach_the_adaptive_driver() {
        let f = FirstOrder(|_t: Float, x: Float| x);
        let options = Options::builder().min_step(2.0).max_step(1.0).build();
        assert_eq!(
            solve_ivp(&f, 1, [0.0, 1.0], 1.0, options),
            Err(Error::InvalidStepBounds { hmin: 2.0, hmax: 1.0 })
        );
    }
}
