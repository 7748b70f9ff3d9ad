// Numerical methods

pub mod fixed;
pub mod rkf;
pub mod settings;

use crate::{
    Float,
    core::{initial::InitialCondition, ode::ODE},
    error::Error,
};

/// Checks shared by every integrator: order, initial-condition length,
/// declared arity of the ODE and the direction of the interval.
pub(crate) fn check_problem<F: ODE>(
    f: &F,
    order: usize,
    init: &[Float],
    xend: Float,
) -> Result<InitialCondition, Error> {
    let init = InitialCondition::parse(init, order)?;

    if f.arity() != order + 1 {
        return Err(Error::ArityMismatch {
            expected: order + 1,
            got: f.arity(),
        });
    }

    if !(xend >= init.t()) {
        return Err(Error::InvertedBounds {
            left: init.t(),
            right: xend,
        });
    }

    Ok(init)
}
