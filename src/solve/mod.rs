//! High-level solve module: one entry point over every integrator.

pub mod options;
pub mod solve_ivp;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use options::{Method, Options};
pub use solve_ivp::solve_ivp;
