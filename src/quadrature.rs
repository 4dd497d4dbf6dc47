//! Fixed-step quadrature rules.
//!
//! This module provides three classical composite rules for approximating
//! a definite integral over a uniform partition:
//! - Right-endpoint Riemann sum, first order in the step size
//! - Trapezoidal rule, second order
//! - Simpson's rule, fourth order
//!
//! All rules are non-adaptive: the caller picks the subdivision count and
//! the rule samples the integrand exactly once per required abscissa.

pub mod riemann;
pub mod simpson;
pub mod trapezoid;

pub use riemann::riemann;
pub use simpson::simpson;
pub use trapezoid::{trapezoid, trapezoid_split};

use crate::error::{Error, Result};

/// Evaluates the integrand at one abscissa, rejecting non-finite values.
pub(crate) fn sample<F>(f: &F, x: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let y = f(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(Error::EvaluationFailure { x })
    }
}

/// Sums `f` over the abscissas in iteration order.
pub(crate) fn sum_samples<F, I>(f: &F, abscissas: I) -> Result<f64>
where
    F: Fn(f64) -> f64,
    I: Iterator<Item = f64>,
{
    let mut total = 0.0;
    for x in abscissas {
        total += sample(f, x)?;
    }
    Ok(total)
}
