//! Error types for quadrature and differentiation operations.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while approximating an integral.
///
/// A reversed interval (`a >= b`) is deliberately *not* an error: the
/// composite formulas stay well defined and the result flips sign, so
/// callers integrating "backwards" get the conventional negated value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The subdivision count cannot produce a valid partition:
    /// zero anywhere, or odd for Simpson's rule.
    #[error("invalid subdivision count {n}: {reason}")]
    InvalidSubdivision { n: usize, reason: &'static str },

    /// The integrand returned NaN or an infinity at an abscissa.
    /// The whole computation is abandoned; no partial sum is returned.
    #[error("integrand evaluated to a non-finite value at x = {x}")]
    EvaluationFailure { x: f64 },
}

impl Error {
    pub(crate) fn zero_subdivisions() -> Self {
        Error::InvalidSubdivision {
            n: 0,
            reason: "at least one subinterval is required",
        }
    }

    pub(crate) fn odd_subdivisions(n: usize) -> Self {
        Error::InvalidSubdivision {
            n,
            reason: "Simpson's rule requires an even number of subintervals",
        }
    }
}
