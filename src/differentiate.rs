//! Centered finite-difference differentiation.
//!
//! Used to reconstruct an integrand from a known antiderivative, e.g. to
//! integrate `F' = cos` given only `F = sin`. The step is fixed for the
//! whole call; there is no adaptive step selection.

/// Default step size for [`derivative`] when the caller has no better one.
pub const DEFAULT_STEP: f64 = 1e-4;

/// Estimates `f'(x)` with a centered finite difference.
///
/// Computes `(f(x + h) − f(x − h)) / (2h)`. The estimate is second order
/// in `h`; with the [`DEFAULT_STEP`] of `1e-4` it matches smooth
/// derivatives to roughly eight significant digits.
///
/// Probing outside the domain of `f` yields NaN, which propagates to the
/// caller unchanged (the quadrature rules reject it at the sampling
/// boundary).
///
/// # Examples
///
/// ```
/// use numquad::{derivative, DEFAULT_STEP};
///
/// let slope = derivative(f64::sin, 1.0, DEFAULT_STEP);
/// assert!((slope - 1.0_f64.cos()).abs() < 1e-6);
/// ```
pub fn derivative<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Estimates `f'` at each point of `xs`, preserving order.
///
/// Elementwise form of [`derivative`]: the result has the same length as
/// `xs` and `result[i]` is the estimate at `xs[i]`.
pub fn derivative_values<F>(f: F, xs: &[f64], h: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    xs.iter().map(|&x| derivative(&f, x, h)).collect()
}
