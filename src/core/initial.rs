//! Initial condition of a scalar ODE.

use crate::{Float, error::Error};

/// Initial condition `[t0, x0, x0', ..., x0^(n-1)]` of an order-`n` equation.
///
/// Stored as the flat vector the integrators consume, so it can be passed
/// anywhere an `AsRef<[Float]>` initial condition is accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialCondition {
    values: Vec<Float>,
}

impl InitialCondition {
    /// Initial condition of a first-order equation.
    pub fn new(t: Float, x: Float) -> Self {
        Self { values: vec![t, x] }
    }

    /// Append the initial lower derivatives `x0', x0'', ...`.
    pub fn with_derivatives(mut self, dx: &[Float]) -> Self {
        self.values.truncate(2);
        self.values.extend_from_slice(dx);
        self
    }

    /// Split a flat `[t0, x0, x0', ...]` vector, checking it holds exactly
    /// `order + 1` values.
    pub fn parse(values: &[Float], order: usize) -> Result<Self, Error> {
        if order == 0 {
            return Err(Error::InvalidOrder(order));
        }
        if values.len() != order + 1 {
            return Err(Error::InitialConditionLength {
                expected: order + 1,
                got: values.len(),
            });
        }
        Ok(Self {
            values: values.to_vec(),
        })
    }

    pub fn t(&self) -> Float {
        self.values[0]
    }

    pub fn x(&self) -> Float {
        self.values[1]
    }

    /// Lower derivatives `[x0', ..., x0^(n-1)]`; empty for order 1.
    pub fn dx(&self) -> &[Float] {
        &self.values[2..]
    }

    /// Order of the equation this initial condition belongs to.
    pub fn order(&self) -> usize {
        self.values.len() - 1
    }

    /// Augmented state `[x0, x0', ..., x0^(n-1)]`.
    pub(crate) fn state(&self) -> &[Float] {
        &self.values[1..]
    }
}

impl AsRef<[Float]> for InitialCondition {
    fn as_ref(&self) -> &[Float] {
        &self.values
    }
}

impl From<(Float, Float)> for InitialCondition {
    fn from((t, x): (Float, Float)) -> Self {
        Self::new(t, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_flat_vector() {
        let init = InitialCondition::new(0.5, 1.0).with_derivatives(&[2.0, 3.0]);
        assert_eq!(init.as_ref(), &[0.5, 1.0, 2.0, 3.0]);
        assert_eq!(init.t(), 0.5);
        assert_eq!(init.x(), 1.0);
        assert_eq!(init.dx(), &[2.0, 3.0]);
        assert_eq!(init.order(), 3);
        assert_eq!(init.state(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn parse_checks_length_against_order() {
        assert!(InitialCondition::parse(&[0.0, 1.0, 0.0], 2).is_ok());
        assert_eq!(
            InitialCondition::parse(&[0.0, 1.0], 2),
            Err(Error::InitialConditionLength { expected: 3, got: 2 })
        );
        assert_eq!(InitialCondition::parse(&[0.0], 0), Err(Error::InvalidOrder(0)));
    }

    #[test]
    fn first_order_from_tuple() {
        let init: InitialCondition = (0.0, 1.0).into();
        assert_eq!(init.order(), 1);
        assert!(init.dx().is_empty());
    }
}
