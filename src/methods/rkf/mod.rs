//! Adaptive embedded Runge-Kutta 4(5) integration (Fehlberg, Cash-Karp)

mod controller;
mod rkf45;
mod stages;
mod tableau;

pub use controller::{ErrorNorm, StepSizeController};
pub use rkf45::rkf45;
pub use stages::StageEvaluator;
pub use tableau::{RkfTableau, STAGES, Tableau};
