//! A struct representing the outputted result of a numerical integrator.

use crate::{Float, core::status::Status};

/// Trajectory of accepted points plus basic stats.
///
/// `t`, `x` and `dx` are parallel: `dx[i]` holds the lower derivatives
/// `[x', ..., x^(n-1)]` at `t[i]` (empty vectors for a first-order equation).
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Accepted values of the independent variable, strictly increasing
    pub t: Vec<Float>,
    /// The dependent variable at each `t`
    pub x: Vec<Float>,
    /// Lower derivatives at each `t`
    pub dx: Vec<Vec<Float>>,
    /// Step size that would be attempted next
    pub h: Float,
    /// The number of function evaluations
    pub nfev: usize,
    /// The number of steps attempted
    pub nstep: usize,
    /// The number of accepted steps
    pub naccpt: usize,
    /// The number of rejected steps
    pub nrejct: usize,
    /// The status of the integration process
    pub status: Status,
}

impl Solution {
    /// Trajectory holding only the initial point.
    pub(crate) fn start(t0: Float, y0: &[Float], h: Float) -> Self {
        Self {
            t: vec![t0],
            x: vec![y0[0]],
            dx: vec![y0[1..].to_vec()],
            h,
            nfev: 0,
            nstep: 0,
            naccpt: 0,
            nrejct: 0,
            status: Status::Success,
        }
    }

    /// Append an accepted point given as the augmented state `[x, x', ...]`.
    pub(crate) fn push(&mut self, t: Float, y: &[Float]) {
        self.t.push(t);
        self.x.push(y[0]);
        self.dx.push(y[1..].to_vec());
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Last stored point as `(t, x, dx)`.
    pub fn last(&self) -> Option<(Float, Float, &[Float])> {
        let i = self.t.len().checked_sub(1)?;
        Some((self.t[i], self.x[i], self.dx[i].as_slice()))
    }

    /// Iterate over stored samples `(t_i, x_i, dx_i)`.
    pub fn iter(&self) -> SolutionIter<'_> {
        SolutionIter {
            t_iter: self.t.iter(),
            x_iter: self.x.iter(),
            dx_iter: self.dx.iter(),
        }
    }
}

/// Iterator over `(t, x, dx)` samples of a [`Solution`].
pub struct SolutionIter<'a> {
    t_iter: std::slice::Iter<'a, Float>,
    x_iter: std::slice::Iter<'a, Float>,
    dx_iter: std::slice::Iter<'a, Vec<Float>>,
}

impl<'a> Iterator for SolutionIter<'a> {
    type Item = (Float, Float, &'a [Float]);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.t_iter.next(), self.x_iter.next(), self.dx_iter.next()) {
            (Some(&t), Some(&x), Some(dx)) => Some((t, x, dx.as_slice())),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = (Float, Float, &'a [Float]);
    type IntoIter = SolutionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_splits_the_augmented_state() {
        let mut sol = Solution::start(0.0, &[1.0, 0.0], 0.1);
        sol.push(0.1, &[0.9, -0.5]);
        assert_eq!(sol.len(), 2);
        assert_eq!(sol.x, vec![1.0, 0.9]);
        assert_eq!(sol.dx, vec![vec![0.0], vec![-0.5]]);
        assert_eq!(sol.last(), Some((0.1, 0.9, &[-0.5][..])));

        let ts: Vec<Float> = sol.iter().map(|(t, _, _)| t).collect();
        assert_eq!(ts, vec![0.0, 0.1]);
    }
}
