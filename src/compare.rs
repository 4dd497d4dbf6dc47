//! Accuracy comparison of the quadrature rules.
//!
//! The rules return plain scalars; this module diffs those scalars
//! against a reference value. The reference is either closed form (an
//! antiderivative evaluated at the bounds) or the output of the adaptive
//! integrator in [`crate::reference`].

use crate::error::Result;
use crate::quadrature::{riemann, simpson, trapezoid};

/// Reference value from a known antiderivative: `F(b) − F(a)`.
///
/// # Examples
///
/// ```
/// use numquad::closed_form;
///
/// // ∫[0,π] sin = -cos(π) + cos(0) = 2
/// let exact = closed_form(|x: f64| -x.cos(), 0.0, std::f64::consts::PI);
/// assert!((exact - 2.0).abs() < 1e-15);
/// ```
pub fn closed_form<F>(antiderivative: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    antiderivative(b) - antiderivative(a)
}

/// Squared error of an estimate against a reference value.
pub fn squared_error(estimate: f64, reference: f64) -> f64 {
    let diff = estimate - reference;
    diff * diff
}

/// One rule's estimate and its squared error against the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleReport {
    pub estimate: f64,
    pub squared_error: f64,
}

impl RuleReport {
    fn new(estimate: f64, reference: f64) -> Self {
        Self {
            estimate,
            squared_error: squared_error(estimate, reference),
        }
    }
}

/// All three rules evaluated on the same problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// The reference value the errors are measured against.
    pub reference: f64,
    pub riemann: RuleReport,
    pub trapezoid: RuleReport,
    pub simpson: RuleReport,
}

/// Runs all three rules at the same subdivision count and reports the
/// squared error of each against `reference`.
///
/// `n` must be even so that Simpson's rule applies.
///
/// # Errors
///
/// Same as the individual rules: `Error::InvalidSubdivision` for zero or
/// odd `n`, `Error::EvaluationFailure` for a non-finite sample.
///
/// # Examples
///
/// ```
/// use numquad::{closed_form, compare_rules};
///
/// let exact = closed_form(f64::sin, 0.0, 1.0);
/// let report = compare_rules(f64::cos, 0.0, 1.0, 100, exact).unwrap();
/// assert!(report.simpson.squared_error < report.riemann.squared_error);
/// ```
pub fn compare_rules<F>(f: F, a: f64, b: f64, n: usize, reference: f64) -> Result<Comparison>
where
    F: Fn(f64) -> f64,
{
    Ok(Comparison {
        reference,
        riemann: RuleReport::new(riemann(&f, a, b, n)?, reference),
        trapezoid: RuleReport::new(trapezoid(&f, a, b, n)?, reference),
        simpson: RuleReport::new(simpson(&f, a, b, n)?, reference),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differentiate::{derivative, DEFAULT_STEP};
    use crate::error::Error;
    use crate::reference::{integrate, QuadOptions};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // The end-to-end scenario: reconstruct cos from its antiderivative sin
    // and integrate it over [1.0, 1.5].
    fn reconstructed_cos(x: f64) -> f64 {
        derivative(f64::sin, x, DEFAULT_STEP)
    }

    #[test]
    fn test_closed_form_value() {
        let exact = closed_form(f64::sin, 1.0, 1.5);
        assert_abs_diff_eq!(exact, 0.156_024_001_796_157_94, epsilon = 1e-15);
    }

    #[test]
    fn test_end_to_end_rule_estimates() {
        let riemann_est = riemann(reconstructed_cos, 1.0, 1.5, 1000).unwrap();
        let trapezoid_est = trapezoid(reconstructed_cos, 1.0, 1.5, 1000).unwrap();
        let simpson_est = simpson(reconstructed_cos, 1.0, 1.5, 100).unwrap();

        // Reference magnitudes to at least four significant digits.
        assert_abs_diff_eq!(riemann_est, 0.1559, epsilon = 5e-5);
        assert_abs_diff_eq!(trapezoid_est, 0.156_023_998, epsilon = 1e-8);
        assert_abs_diff_eq!(simpson_est, 0.156_024_002, epsilon = 1e-8);

        // Simpson is the closest despite using a tenth of the points.
        let exact = closed_form(f64::sin, 1.0, 1.5);
        let simpson_err = squared_error(simpson_est, exact);
        assert!(simpson_err < squared_error(trapezoid_est, exact));
        assert!(simpson_err < squared_error(riemann_est, exact));
    }

    #[test]
    fn test_comparison_orders_rules_by_accuracy() {
        let exact = closed_form(f64::sin, 1.0, 1.5);
        let report = compare_rules(f64::cos, 1.0, 1.5, 1000, exact).unwrap();
        assert_eq!(report.reference, exact);
        assert!(report.simpson.squared_error < report.trapezoid.squared_error);
        assert!(report.trapezoid.squared_error < report.riemann.squared_error);
    }

    #[test]
    fn test_simpson_against_adaptive_reference() {
        // Standard normal density over [0, 1]: Simpson at n = 20 should
        // agree with the adaptive oracle to at least six significant digits.
        let density = |x: f64| (-x * x / 2.0).exp() / (2.0 * std::f64::consts::PI).sqrt();
        let oracle = integrate(density, 0.0, 1.0, &QuadOptions::default()).unwrap();
        assert!(oracle.converged);
        let estimate = simpson(density, 0.0, 1.0, 20).unwrap();
        assert_relative_eq!(estimate, oracle.value, max_relative = 1e-6);
        assert!(squared_error(estimate, oracle.value) < 1e-14);
    }

    #[test]
    fn test_odd_count_propagates_from_simpson() {
        let exact = closed_form(f64::sin, 0.0, 1.0);
        let result = compare_rules(f64::cos, 0.0, 1.0, 99, exact);
        assert!(matches!(
            result,
            Err(Error::InvalidSubdivision { n: 99, .. })
        ));
    }
}
