//! User-supplied ODE right-hand side.

use crate::Float;

/// User-supplied scalar ODE of order `n`: `x^(n) = f(t, x, x', ..., x^(n-1))`.
///
/// Implement this trait for your problem to provide the highest derivative.
/// The integrator calls `ode` with the independent variable `t`, the dependent
/// variable `x` and the lower derivatives `dx = [x', ..., x^(n-1)]` (empty for
/// a first-order equation).
///
/// `arity` is the number of arguments the function takes in the order
/// `(t, x, x', x'', ...)`, i.e. `n + 1`. Integrators reject a function whose
/// arity does not match the requested order before taking any step.
///
/// # Example
///
/// ```ignore
/// // x'' = -k x
/// struct Spring { k: f64 }
/// impl ODE for Spring {
///     fn arity(&self) -> usize { 3 }
///     fn ode(&self, _t: f64, x: f64, _dx: &[f64]) -> f64 {
///         -self.k * x
///     }
/// }
/// ```
pub trait ODE {
    fn arity(&self) -> usize;
    fn ode(&self, t: Float, x: Float, dx: &[Float]) -> Float;
}

/// First-order equation `x' = f(t, x)` from a two-argument closure.
#[derive(Clone, Copy, Debug)]
pub struct FirstOrder<F>(pub F);

/// Second-order equation `x'' = f(t, x, x')` from a three-argument closure.
#[derive(Clone, Copy, Debug)]
pub struct SecondOrder<F>(pub F);

/// Third-order equation `x''' = f(t, x, x', x'')` from a four-argument closure.
#[derive(Clone, Copy, Debug)]
pub struct ThirdOrder<F>(pub F);

/// Equation of any order from a closure taking the lower derivatives as a
/// slice. The declared arity is supplied by the caller.
#[derive(Clone, Copy, Debug)]
pub struct HigherOrder<F> {
    arity: usize,
    f: F,
}

impl<F> HigherOrder<F>
where
    F: Fn(Float, Float, &[Float]) -> Float,
{
    pub fn new(arity: usize, f: F) -> Self {
        Self { arity, f }
    }
}

impl<F> ODE for FirstOrder<F>
where
    F: Fn(Float, Float) -> Float,
{
    fn arity(&self) -> usize {
        2
    }

    fn ode(&self, t: Float, x: Float, _dx: &[Float]) -> Float {
        (self.0)(t, x)
    }
}

impl<F> ODE for SecondOrder<F>
where
    F: Fn(Float, Float, Float) -> Float,
{
    fn arity(&self) -> usize {
        3
    }

    fn ode(&self, t: Float, x: Float, dx: &[Float]) -> Float {
        (self.0)(t, x, dx[0])
    }
}

impl<F> ODE for ThirdOrder<F>
where
    F: Fn(Float, Float, Float, Float) -> Float,
{
    fn arity(&self) -> usize {
        4
    }

    fn ode(&self, t: Float, x: Float, dx: &[Float]) -> Float {
        (self.0)(t, x, dx[0], dx[1])
    }
}

impl<F> ODE for HigherOrder<F>
where
    F: Fn(Float, Float, &[Float]) -> Float,
{
    fn arity(&self) -> usize {
        self.arity
    }

    fn ode(&self, t: Float, x: Float, dx: &[Float]) -> Float {
        (self.f)(t, x, dx)
    }
}

impl<T: ODE + ?Sized> ODE for &T {
    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn ode(&self, t: Float, x: Float, dx: &[Float]) -> Float {
        (**self).ode(t, x, dx)
    }
}
