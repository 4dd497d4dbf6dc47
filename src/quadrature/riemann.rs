//! Right-endpoint Riemann sum.

use crate::error::Result;
use crate::partition::Partition;
use crate::quadrature::sum_samples;

/// Approximates `∫[a,b] f(x) dx` with a right-endpoint Riemann sum.
///
/// The integrand is treated as constant on each subinterval, taking its
/// value at the right endpoint:
///
/// ```text
/// Δx · Σ_{i=1..n} f(a + i·Δx),   Δx = (b − a) / n
/// ```
///
/// The error shrinks linearly in `1/n` (first order), making this the
/// weakest of the three rules; it is included as the baseline. Only the
/// right-endpoint variant is provided, matching the classical textbook
/// presentation this crate follows.
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
/// use numquad::riemann;
///
/// // Integrate f(x) = x over [0, 1]. The exact value is 0.5.
/// let result = riemann(|x| x, 0.0, 1.0, 1000).unwrap();
/// assert!((result - 0.5).abs() < 1e-3);
/// ```
pub fn riemann<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let partition = Partition::new(a, b, n)?;
    let total = sum_samples(&f, partition.right_points())?;
    Ok(partition.step() * total)
}
