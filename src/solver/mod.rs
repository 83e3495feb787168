
//! Numerical root finding, integration, and series expansion of
//! single-variable expressions.

mod bisection;
mod simpson;
mod taylor;

pub use bisection::{BisectionMethod, FoundRoot, find_root};
pub use simpson::{integrate, simpson};
pub use taylor::taylor_series;

use crate::eval::{EvalError, Expression, VariableScope};
use crate::symbolic::SymbolicError;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum SolverError {
  #[error("{0}")]
  Evaluation(#[from] EvalError),
  #[error("{0}")]
  Symbolic(#[from] SymbolicError),
  #[error("No sign change between {a} and {b}")]
  NoSignChange { a: f64, b: f64 },
}

/// An expression viewed as a real function of one variable.
#[derive(Debug, Clone)]
pub struct RealFunction {
  expr: Expression,
  variable: String,
}

impl RealFunction {
  pub fn new(expr: Expression, variable: &str) -> Self {
    Self { expr, variable: variable.to_owned() }
  }

  /// Parses `source` as a function of `x`.
  pub fn parse(source: &str) -> Result<Self, EvalError> {
    Ok(Self::new(Expression::parse(source)?, "x"))
  }

  pub fn eval_at(&self, value: f64) -> Result<f64, EvalError> {
    let scope = VariableScope::new().with(self.variable.as_str(), value);
    self.expr.evaluate(&scope)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_real_function() {
    let f = RealFunction::new(Expression::parse("t^2 + 1").unwrap(), "t");
    assert_eq!(f.eval_at(2.0).unwrap(), 5.0);
    let g = RealFunction::parse("x + y").unwrap();
    assert_eq!(g.eval_at(1.0), Err(EvalError::UnknownIdentifier(String::from("y"))));
  }
}
