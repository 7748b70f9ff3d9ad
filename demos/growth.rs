//! # Example: Growth
//!
//! Solve a first-order linear equation with the adaptive RKF45 integrator and
//! compare against the exact solution.
//!
//! Equation:
//! dx/dt = t * x
//!
//! Initial condition: x(0) = 1, exact solution x(t) = exp(t^2 / 2)
//!
//! Run with `cargo run --example growth`.

use rkf45::prelude::*;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    tracing_subscriber::fmt().with_max_level(LevelFilter::DEBUG).init();

    let f = FirstOrder(|t: f64, x: f64| t * x);
    let init = InitialCondition::new(0.0, 1.0);
    let xend = 2.0;
    let settings = Settings::builder().tol(1e-10).build();

    match rkf45(&f, 1, &init, 1e-4, xend, settings) {
        Ok(sol) => {
            println!("Final status: {:?}", sol.status);
            println!("Number of function evaluations: {}", sol.nfev);
            println!("Number of accepted steps: {}", sol.naccpt);
            println!("Number of rejected steps: {}", sol.nrejct);

            let mut max_err: f64 = 0.0;
            for (i, (t, x, _)) in sol.iter().enumerate() {
                let exact = (t * t / 2.0).exp();
                max_err = max_err.max((x - exact).abs());
                if i % 200 == 0 {
                    println!("t = {:>8.5}, x = {:>12.8}, exact = {:>12.8}", t, x, exact);
                }
            }
            println!("Max abs error: {:e}", max_err);
        }
        Err(e) => eprintln!("Integration failed: {}", e),
    }
}
