pub mod compare;
pub mod differentiate;
pub mod error;
pub mod partition;
pub mod quadrature;
pub mod reference;

pub use compare::{closed_form, compare_rules, squared_error, Comparison, RuleReport};
pub use differentiate::{derivative, derivative_values, DEFAULT_STEP};
pub use error::{Error, Result};
pub use partition::Partition;
pub use quadrature::{riemann, simpson, trapezoid, trapezoid_split};
pub use reference::{integrate, QuadOptions, RefIntegral};
