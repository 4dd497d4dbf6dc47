//! Uniform partitions of an interval.
//!
//! A partition subdivides `[a, b]` into `n` equal subintervals and hands
//! out the abscissa subsequences the composite rules sample at.

use crate::error::{Error, Result};

/// A uniform partition of `[a, b]` into `n` subintervals.
///
/// The partition points are `x_i = a + i * step()` for `i = 0..=n`, so
/// `x_0 = a` and `x_n = b` (up to floating-point rounding of the step).
/// When `a < b` the points are strictly increasing; `a >= b` is accepted
/// and simply yields a non-positive step.
///
/// # Examples
///
/// ```
/// use numquad::Partition;
///
/// let p = Partition::new(0.0, 1.0, 4).unwrap();
/// assert_eq!(p.step(), 0.25);
/// let rights: Vec<f64> = p.right_points().collect();
/// assert_eq!(rights, vec![0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    a: f64,
    b: f64,
    n: usize,
}

impl Partition {
    /// Creates a partition of `[a, b]` with `n` subintervals.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSubdivision` if `n` is zero.
    pub fn new(a: f64, b: f64, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::zero_subdivisions());
        }
        Ok(Self { a, b, n })
    }

    /// The uniform spacing `(b - a) / n` between consecutive points.
    pub fn step(&self) -> f64 {
        (self.b - self.a) / self.n as f64
    }

    /// The number of subintervals.
    pub fn subdivisions(&self) -> usize {
        self.n
    }

    /// The `i`-th partition point, `a + i * step()`, for `i` in `0..=n`.
    pub fn point(&self, i: usize) -> f64 {
        self.a + i as f64 * self.step()
    }

    /// Right endpoints of each subinterval: `x_i` for `i = 1..=n`.
    pub fn right_points(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.n).map(move |i| self.point(i))
    }

    /// Left endpoints of each subinterval: `x_i` for `i = 0..n`.
    pub fn left_points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.n).map(move |i| self.point(i))
    }

    /// Odd-indexed points `x_1, x_3, x_5, ...` with index below `n`.
    pub fn odd_points(&self) -> impl Iterator<Item = f64> + '_ {
        (1..self.n).step_by(2).map(move |i| self.point(i))
    }

    /// Even-indexed interior points `x_2, x_4, ...` with index at most `n - 2`.
    pub fn even_interior_points(&self) -> impl Iterator<Item = f64> + '_ {
        (2..self.n.saturating_sub(1))
            .step_by(2)
            .map(move |i| self.point(i))
    }
}
