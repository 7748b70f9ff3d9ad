//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use rkf45::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, the closure adapters, `InitialCondition`,
//!   `Solution`, `Status`, `Error`.
//! - Integrators: `rkf45`, `euler`, `rk4` with `Settings`, `Spacing` and the
//!   tableau selection.
//! - High-level API: `solve_ivp`, `Options`, and `Method`.

pub use crate::core::{
    initial::InitialCondition,
    ode::{FirstOrder, HigherOrder, SecondOrder, ThirdOrder, ODE},
    solution::Solution,
    status::Status,
};
pub use crate::error::Error;
pub use crate::methods::{
    fixed::{Spacing, euler, rk4},
    rkf::{ErrorNorm, RkfTableau, Tableau, rkf45},
    settings::Settings,
};
pub use crate::solve::{Method, Options, solve_ivp};
