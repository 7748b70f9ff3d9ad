//! # Example: Stiff Harmonic Oscillator
//!
//! Second-order equation integrated through the augmented state [x, x'],
//! once with each embedded pair.
//!
//! Equation:
//! x'' = -1000 x
//!
//! Initial condition: x(0) = 1, x'(0) = 0, exact solution cos(sqrt(1000) t)

use rkf45::prelude::*;

struct Spring {
    k: f64,
}

impl ODE for Spring {
    fn arity(&self) -> usize {
        3
    }

    fn ode(&self, _t: f64, x: f64, _dx: &[f64]) -> f64 {
        -self.k * x
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let spring = Spring { k: 1000.0 };
    let omega = spring.k.sqrt();
    let init = [0.0, 1.0, 0.0];

    for tableau in [RkfTableau::Fehlberg, RkfTableau::CashKarp] {
        let options = Options::builder()
            .method(Method::RKF45(tableau))
            .first_step(1e-4)
            .build();

        match solve_ivp(&spring, 2, init, 2.0, options) {
            Ok(sol) => {
                let max_err = sol
                    .iter()
                    .map(|(t, x, _)| (x - (omega * t).cos()).abs())
                    .fold(0.0, f64::max);
                println!(
                    "{:?}: {} points, nfev = {}, rejected = {}, max abs error = {:e}",
                    tableau,
                    sol.len(),
                    sol.nfev,
                    sol.nrejct,
                    max_err
                );
            }
            Err(e) => eprintln!("Integration failed: {}", e),
        }
    }
}
