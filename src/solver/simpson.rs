
use super::{RealFunction, SolverError};

use tracing::debug;

/// Composite Simpson's rule over `n` subintervals: interior samples
/// at odd indices weigh 4 and at even indices weigh 2. The weights are
/// applied as-is when `n` is odd, which is no longer Simpson's rule.
pub fn simpson(function: &RealFunction, a: f64, b: f64, n: usize) -> Result<f64, SolverError> {
  if n == 0 {
    return Ok(0.0);
  }
  if n % 2 == 1 {
    debug!(n, "Simpson's rule with an odd number of subintervals");
  }
  let h = (b - a) / n as f64;
  let mut sum = function.eval_at(a)? + function.eval_at(b)?;
  for i in 1..n {
    let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
    sum += weight * function.eval_at(a + i as f64 * h)?;
  }
  Ok(sum * h / 3.0)
}

/// Integrates `source`, a function of `x`, from `a` to `b`.
pub fn integrate(source: &str, a: f64, b: f64, n: usize) -> Result<f64, SolverError> {
  let function = RealFunction::parse(source)?;
  simpson(&function, a, b, n)
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_polynomial() {
    assert_abs_diff_eq!(integrate("x^2", 0.0, 1.0, 1000).unwrap(), 1.0 / 3.0, epsilon = 1e-6);
    assert_abs_diff_eq!(integrate("x^3", 0.0, 2.0, 2).unwrap(), 4.0, epsilon = 1e-12);
  }

  #[test]
  fn test_transcendental() {
    assert_abs_diff_eq!(integrate("sin(x)", 0.0, std::f64::consts::PI, 100).unwrap(), 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(integrate("normalPDF(x)", -1.0, 1.0, 1000).unwrap(), 0.682_689_492, epsilon = 1e-8);
  }

  #[test]
  fn test_odd_subintervals_use_literal_weights() {
    assert_abs_diff_eq!(integrate("x^2", 0.0, 1.0, 3).unwrap(), 7.0 / 27.0, epsilon = 1e-12);
  }

  #[test]
  fn test_zero_subintervals() {
    assert_eq!(integrate("x", 0.0, 1.0, 0).unwrap(), 0.0);
  }

  #[test]
  fn test_reversed_bounds() {
    assert_abs_diff_eq!(integrate("x", 1.0, 0.0, 10).unwrap(), -0.5, epsilon = 1e-12);
  }
}
