
//! The bisection method of root finding.
//!
//! See <https://en.wikipedia.org/wiki/Bisection_method>.

use super::{RealFunction, SolverError};

use serde::{Serialize, Deserialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BisectionMethod {
  pub epsilon: f64,
  pub max_iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoundRoot {
  pub value: f64,
  /// `|f(value)|`.
  pub final_epsilon: f64,
  /// False if the iteration limit was reached first. `value` is then
  /// the last midpoint.
  pub converged: bool,
}

impl BisectionMethod {
  pub const DEFAULT_EPSILON: f64 = 1e-10;
  pub const DEFAULT_MAX_ITERATIONS: usize = 100;

  pub fn new(epsilon: f64, max_iterations: usize) -> Self {
    Self { epsilon, max_iterations }
  }

  /// Finds a root of `function` between `a` and `b`, which must
  /// bracket a sign change.
  pub fn find_root(&self, function: &RealFunction, mut a: f64, mut b: f64) -> Result<FoundRoot, SolverError> {
    let mut f_a = function.eval_at(a)?;
    let f_b = function.eval_at(b)?;
    if f_a * f_b > 0.0 {
      return Err(SolverError::NoSignChange { a, b });
    }
    if f_a == 0.0 {
      return Ok(FoundRoot { value: a, final_epsilon: 0.0, converged: true });
    }
    if f_b == 0.0 {
      return Ok(FoundRoot { value: b, final_epsilon: 0.0, converged: true });
    }

    let mut last = FoundRoot { value: (a + b) / 2.0, final_epsilon: f64::INFINITY, converged: false };
    for _ in 0..self.max_iterations {
      let c = (a + b) / 2.0;
      let f_c = function.eval_at(c)?;
      last = FoundRoot { value: c, final_epsilon: f_c.abs(), converged: false };
      if f_c.abs() < self.epsilon || (b - a).abs() < self.epsilon {
        return Ok(FoundRoot { converged: true, ..last });
      }
      if f_a * f_c < 0.0 {
        b = c;
      } else {
        a = c;
        f_a = f_c;
      }
    }
    debug!(iterations = self.max_iterations, value = last.value, "Bisection did not converge");
    Ok(last)
  }
}

impl Default for BisectionMethod {
  fn default() -> Self {
    Self::new(Self::DEFAULT_EPSILON, Self::DEFAULT_MAX_ITERATIONS)
  }
}

/// Finds a root of `source`, a function of `x`, between `a` and `b`
/// with the default tolerance and iteration limit.
pub fn find_root(source: &str, a: f64, b: f64) -> Result<f64, SolverError> {
  let function = RealFunction::parse(source)?;
  BisectionMethod::default().find_root(&function, a, b).map(|root| root.value)
}
