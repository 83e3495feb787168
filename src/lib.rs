
//! Expression handling for a graphing calculator: notation and voice
//! normalization, equation classification, evaluation, symbolic
//! differentiation, plot sampling, and numeric solvers.

pub mod classify;
pub mod eval;
pub mod expr;
pub mod parsing;
pub mod sampling;
pub mod solver;
pub mod symbolic;
pub mod text;
pub mod util;
pub mod view;

pub use classify::{ClassifiedEquation, ClassifyError, EquationKind, classify};
pub use eval::{EvalError, Expression, Value, VariableScope, evaluate, evaluate_value};
pub use expr::Expr;
pub use expr::parser::ParseError;
pub use sampling::{
  ContourGrid, SamplingConfig, sample_adaptive, sample_contour_grid, sample_explicit,
  sample_implicit, sample_parametric, sample_polar,
};
pub use solver::{SolverError, find_root, integrate, taylor_series};
pub use symbolic::{SymbolicError, derivative, simplify};
pub use text::{format_expression, is_syntactically_valid, normalize, voice_lines_to_expressions, voice_to_expression};
pub use util::point::Point2D;
pub use view::ViewState;

use thiserror::Error;

/// Any failure surfaced by the top-level operations.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  InvalidFormat(#[from] ClassifyError),
  #[error("Evaluation error: {0}")]
  Evaluation(#[from] EvalError),
  #[error("Symbolic error: {0}")]
  Symbolic(#[from] SymbolicError),
  #[error("{0}")]
  Solver(#[from] SolverError),
  #[error("{0}")]
  Parse(#[from] ParseError),
}

/// Normalizes, classifies, and samples a typed equation in one step,
/// using the default sampling configuration.
pub fn plot(input: &str, view: &ViewState) -> Result<Vec<Point2D>, Error> {
  let equation = classify(&normalize(input))?;
  let points = sampling::sample_classified(&equation, view, &SamplingConfig::default())?;
  Ok(points)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_plot_pipeline() {
    let points = plot("y = 2x", &ViewState::default()).unwrap();
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| (p.y - 2.0 * p.x).abs() < 1e-9));
  }

  #[test]
  fn test_plot_spoken_equations() {
    let view = ViewState::default();
    let points = plot(&voice_to_expression("y equals two x plus one"), &view).unwrap();
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| (p.y - (2.0 * p.x + 1.0)).abs() < 1e-9));
    let points = plot(&voice_to_expression("y equals x squared plus three x"), &view).unwrap();
    assert!(points.iter().all(|p| (p.y - (p.x * p.x + 3.0 * p.x)).abs() < 1e-9));
    assert!(!plot(&voice_to_expression("y equals ten x"), &view).unwrap().is_empty());
    assert!(!plot("y = 2 x", &view).unwrap().is_empty());
  }

  #[test]
  fn test_plot_errors() {
    assert_eq!(plot("", &ViewState::default()), Err(Error::InvalidFormat(ClassifyError::InvalidFormat)));
    assert!(matches!(plot("y = x +", &ViewState::default()), Err(Error::Parse(_))));
  }

  #[test]
  fn test_error_messages() {
    let err: Error = evaluate("q", &VariableScope::new()).unwrap_err().into();
    assert_eq!(err.to_string(), "Evaluation error: Undefined symbol q");
    let err: Error = classify("1").unwrap_err().into();
    assert_eq!(err.to_string(), "Invalid equation format");
  }
}
