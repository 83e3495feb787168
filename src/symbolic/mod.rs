
//! Symbolic differentiation and simplification of expressions.

mod derivative;
pub mod simplifier;

pub use derivative::DerivativeEngine;
pub use simplifier::{Simplifier, default_simplifier};

use crate::eval::{Arity, FunctionLibrary};
use crate::expr::Expr;
use crate::expr::parser::{ParseError, parse_expr};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum SymbolicError {
  #[error("{0}")]
  Parse(#[from] ParseError),
  #[error("Derivative of function '{0}' is not known")]
  UnknownDerivative(String),
  #[error("Wrong number of arguments to {function}: expected {expected}, got {actual}")]
  ArityMismatch { function: String, expected: Arity, actual: usize },
}

/// Differentiates `expr` with respect to `variable` using the built-in
/// function library. The result is not simplified.
pub fn differentiate(expr: &Expr, variable: &str) -> Result<Expr, SymbolicError> {
  DerivativeEngine::new(variable, FunctionLibrary::global()).differentiate(expr)
}

pub fn simplify_expr(expr: Expr) -> Expr {
  default_simplifier().simplify_expr(expr)
}

/// Parses `source`, differentiates it with respect to `variable`, and
/// renders the simplified result.
pub fn derivative(source: &str, variable: &str) -> Result<String, SymbolicError> {
  let expr = parse_expr(source)?;
  let deriv = differentiate(&expr, variable)?;
  Ok(simplify_expr(deriv).to_string())
}

pub fn simplify(source: &str) -> Result<String, SymbolicError> {
  let expr = parse_expr(source)?;
  Ok(simplify_expr(expr).to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::eval::{VariableScope, evaluate};

  use approx::assert_abs_diff_eq;

  /// Compares the symbolic derivative against a centered difference
  /// at `x`.
  fn check_derivative(source: &str, x: f64) {
    let deriv = derivative(source, "x").unwrap();
    let h = 1e-5;
    let at = |x: f64| evaluate(source, &VariableScope::from([("x", x)])).unwrap();
    let estimate = (at(x + h) - at(x - h)) / (2.0 * h);
    let actual = evaluate(&deriv, &VariableScope::from([("x", x)])).unwrap();
    assert_abs_diff_eq!(actual, estimate, epsilon = 1e-4);
  }

  #[test]
  fn test_simple_derivatives() {
    assert_eq!(derivative("x^2", "x").unwrap(), "2 * x");
    assert_eq!(derivative("x^3", "x").unwrap(), "3 * x^2");
    assert_eq!(derivative("5", "x").unwrap(), "0");
    assert_eq!(derivative("x", "x").unwrap(), "1");
    assert_eq!(derivative("pi * x", "x").unwrap(), "pi");
    assert_eq!(derivative("y^2", "x").unwrap(), "0");
  }

  #[test]
  fn test_derivatives_match_finite_differences() {
    for source in [
      "x^2 + 3*x - 1",
      "sin(x) * x",
      "cos(x)^2",
      "exp(2*x)",
      "ln(x) / x",
      "x^x",
      "2^x",
      "sqrt(x^2 + 1)",
      "tan(x)",
      "atan(x) + asin(x / 2)",
      "log(x, 2)",
      "sinh(x) * cosh(x)",
      "abs(x - 0.2)",
      "erf(x)",
      "normalPDF(x)",
      "normalCDF(x, 0.5, 2)",
      "fresnelS(x) + fresnelC(x)",
      "1 / (1 + x^2)",
      "-x^3 / 3",
    ] {
      check_derivative(source, 0.7);
    }
  }

  #[test]
  fn test_unknown_derivative() {
    assert_eq!(
      derivative("gamma(x)", "x"),
      Err(SymbolicError::UnknownDerivative(String::from("gamma"))),
    );
    assert_eq!(
      derivative("foo(x)", "x"),
      Err(SymbolicError::UnknownDerivative(String::from("foo"))),
    );
    assert!(matches!(derivative("x +", "x"), Err(SymbolicError::Parse(_))));
  }

  #[test]
  fn test_constant_calls_have_zero_derivative() {
    assert_eq!(derivative("besselj0(1) + x", "x").unwrap(), "1");
    assert_eq!(derivative("gamma(3)", "x").unwrap(), "0");
    let scope = VariableScope::new();
    let deriv = derivative("x * gamma(2)", "x").unwrap();
    assert_abs_diff_eq!(evaluate(&deriv, &scope).unwrap(), 1.0, epsilon = 1e-12);
    let deriv = derivative("x * factorial(3)", "x").unwrap();
    assert_abs_diff_eq!(evaluate(&deriv, &scope).unwrap(), 6.0, epsilon = 1e-12);
  }

  #[test]
  fn test_simplify() {
    assert_eq!(simplify("x*2 + x*3").unwrap(), "5 * x");
    assert_eq!(simplify("x * x").unwrap(), "x^2");
    assert_eq!(simplify("sin(x)^2 + cos(x)^2").unwrap(), "1");
    assert_eq!(simplify("0 + x * 1").unwrap(), "x");
    assert_eq!(simplify("x - x").unwrap(), "0");
    assert_eq!(simplify("2 + 3 * 4").unwrap(), "14");
    assert_eq!(simplify("0 / 0").unwrap(), "0 / 0");
  }
}
