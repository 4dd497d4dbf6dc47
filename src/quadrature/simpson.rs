//! Composite Simpson's rule.

use crate::error::{Error, Result};
use crate::partition::Partition;
use crate::quadrature::{sample, sum_samples};

/// Approximates `∫[a,b] f(x) dx` with the composite Simpson's rule.
///
/// The integrand is treated as quadratic over each pair of subintervals,
/// which requires `n` to be even:
///
/// ```text
/// (Δx/3) · [ f(a) + f(b) + 4·Σ_{odd i} f(x_i) + 2·Σ_{even interior i} f(x_i) ]
/// ```
///
/// with odd indices `1, 3, ..., n−1` and even interior indices
/// `2, 4, ..., n−2`. The error shrinks quartically in `1/n` (fourth
/// order): for smooth integrands a modest `n` already rivals
/// general-purpose adaptive integrators, and any polynomial of degree at
/// most three is integrated exactly.
///
/// Integrating with `a > b` is accepted and flips the sign of the result.
///
/// # Errors
///
/// * `Error::InvalidSubdivision` if `n` is zero or odd.
/// * `Error::EvaluationFailure` if `f` returns NaN or an infinity at any
///   sampled abscissa.
///
/// # Examples
///
/// ```
/// use numquad::simpson;
///
/// // Integrate f(x) = x³ over [0, 2]. The exact value is 4.
/// let result = simpson(|x| x * x * x, 0.0, 2.0, 2).unwrap();
/// assert!((result - 4.0).abs() < 1e-12);
/// ```
pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let partition = Partition::new(a, b, n)?;
    if n % 2 != 0 {
        return Err(Error::odd_subdivisions(n));
    }
    let endpoints = sample(&f, a)? + sample(&f, b)?;
    let odd = sum_samples(&f, partition.odd_points())?;
    let even_interior = sum_samples(&f, partition.even_interior_points())?;
    Ok(partition.step() / 3.0 * (endpoints + 4.0 * odd + 2.0 * even_interior))
}
