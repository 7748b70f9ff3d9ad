//! Adaptive Runge-Kutta-Fehlberg 4(5) integration of a single scalar ordinary
//! differential equation of any order, `x^(n) = f(t, x, x', ..., x^(n-1))`.
//!
//! Higher-order equations are integrated through state-space augmentation: the
//! lower derivatives are carried as extra state variables so a scheme built for
//! first-order systems applies unchanged. Forward Euler and classical RK4 are
//! included as fixed-step baselines.
//!
//! ```rust
//! use rkf45::prelude::*;
//!
//! // dx/dt = t x, x(0) = 1
//! let f = FirstOrder(|t: f64, x: f64| t * x);
//! let settings = Settings::builder().build();
//! let sol = rkf45(&f, 1, [0.0, 1.0], 1e-4, 2.0, settings).unwrap();
//! let x_end = *sol.x.last().unwrap();
//! assert!((x_end - 2.0_f64.exp()).abs() < 1e-6);
//! ```

mod core;
mod error;

pub mod methods;
pub mod prelude;
pub mod solve;

pub use crate::core::{
    initial::InitialCondition,
    ode::{FirstOrder, HigherOrder, SecondOrder, ThirdOrder, ODE},
    solution::{Solution, SolutionIter},
    status::Status,
};
pub use error::Error;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f128, f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
