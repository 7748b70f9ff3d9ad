//! # Example: Third-Order Equation
//!
//! Compare the fixed-step baselines with the adaptive integrator on a
//! third-order equation.
//!
//! Equation:
//! x''' = x'' - x
//!
//! Initial condition: x(0) = 1, x'(0) = 0, x''(0) = 0

use rkf45::prelude::*;

fn main() {
    tracing_subscriber::fmt::init();

    let f = ThirdOrder(|_t: f64, x: f64, _v: f64, a: f64| a - x);
    let init = [0.0, 1.0, 0.0, 0.0];
    let xend = 1.0;

    let methods = [
        ("Euler", Method::Euler),
        ("RK4", Method::RK4),
        ("RKF45", Method::RKF45(RkfTableau::Fehlberg)),
    ];

    for (name, method) in methods {
        let options = Options::builder().method(method).first_step(1e-3).build();
        match solve_ivp(&f, 3, init, xend, options) {
            Ok(sol) => {
                if let Some((t, x, dx)) = sol.last() {
                    println!(
                        "{:>6}: t = {:.3}, x = {:.10}, x' = {:.10}, x'' = {:.10} ({} evaluations)",
                        name, t, x, dx[0], dx[1], sol.nfev
                    );
                }
            }
            Err(e) => eprintln!("{} failed: {}", name, e),
        }
    }
}
