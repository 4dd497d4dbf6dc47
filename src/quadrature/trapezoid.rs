//! Composite trapezoidal rule.

use crate::error::Result;
use crate::partition::Partition;
use crate::quadrature::{sample, sum_samples};

/// Approximates `∫[a,b] f(x) dx` with the composite trapezoidal rule.
///
/// The integrand is treated as linear on each subinterval:
///
/// ```text
/// Δx · [ ½·f(a) + ½·f(b) + Σ_{i=1..n−1} f(a + i·Δx) ]
/// ```
///
/// The error shrinks quadratically in `1/n` (second order). The same
/// estimate is also available through [`trapezoid_split`], which sums the
/// left- and right-shifted point sequences separately; the two agree to
/// floating-point tolerance.
///
/// Integrating with `a > b` is accepted and flips the sign of the result.
///
/// # Errors
///
/// * `Error::InvalidSubdivision` if `n` is zero.
/// * `Error::EvaluationFailure` if `f` returns NaN or an infinity at any
///   sampled abscissa.
///
/// # Examples
///
/// ```
/// use numquad::trapezoid;
///
/// // Integrate f(x) = x² over [0, 1]. The exact value is 1/3.
/// let result = trapezoid(|x| x * x, 0.0, 1.0, 100).unwrap();
/// assert!((result - 1.0 / 3.0).abs() < 1e-4);
/// ```
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let partition = Partition::new(a, b, n)?;
    let endpoints = 0.5 * (sample(&f, a)? + sample(&f, b)?);
    // Interior points are the right endpoints minus x_n = b.
    let interior = sum_samples(&f, partition.right_points().take(n - 1))?;
    Ok(partition.step() * (endpoints + interior))
}

/// Trapezoidal rule computed from the two shifted endpoint sequences.
///
/// Sums `f` over the left endpoints `x_0..x_{n−1}` and the right endpoints
/// `x_1..x_n` separately, then averages:
///
/// ```text
/// ½·Δx · [ Σ f(left points) + Σ f(right points) ]
/// ```
///
/// Algebraically identical to [`trapezoid`]; each interior point simply
/// appears once in each shifted sum. The integrand is still evaluated only
/// once per distinct abscissa. Kept as a public alternative so the
/// equivalence of the two formulations stays testable.
///
/// # Errors
///
/// Same as [`trapezoid`].
pub fn trapezoid_split<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let partition = Partition::new(a, b, n)?;
    // One evaluation per distinct point; x_1..x_{n-1} are shared by both
    // shifted sequences.
    let first = sample(&f, a)?;
    let last = sample(&f, b)?;
    let shared = sum_samples(&f, partition.right_points().take(n - 1))?;
    let left_sum = first + shared;
    let right_sum = shared + last;
    Ok(0.5 * partition.step() * (left_sum + right_sum))
}
