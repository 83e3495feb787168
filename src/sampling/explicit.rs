
//! Uniform sampling of `y = f(x)`.

use super::evaluate_at;
use crate::eval::Expression;
use crate::expr::parser::ParseError;
use crate::util::linspace;
use crate::util::point::Point2D;

use tracing::debug;

/// Samples `y = f(x)` at `n + 1` evenly spaced values of `x`, keeping
/// the points where `y` is finite.
pub fn sample_explicit(source: &str, x_min: f64, x_max: f64, n: usize) -> Result<Vec<Point2D>, ParseError> {
  let expr = Expression::parse(source)?;
  Ok(sample_explicit_expr(&expr, x_min, x_max, n))
}

pub fn sample_explicit_expr(expr: &Expression, x_min: f64, x_max: f64, n: usize) -> Vec<Point2D> {
  let points: Vec<Point2D> = linspace(x_min, x_max, n)
    .filter_map(|x| {
      let y = evaluate_at(expr, &[("x", x)])?;
      y.is_finite().then_some(Point2D::new(x, y))
    })
    .collect();
  debug!(source = expr.source(), kept = points.len(), omitted = n + 1 - points.len(), "Sampled explicit curve");
  points
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_uniform_samples() {
    let points = sample_explicit("x^2", -2.0, 2.0, 4).unwrap();
    let expected: Vec<Point2D> = [(-2.0, 4.0), (-1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]
      .into_iter()
      .map(Point2D::from)
      .collect();
    assert_eq!(points, expected);
  }

  #[test]
  fn test_omits_non_finite_points() {
    let points = sample_explicit("1/x", -1.0, 1.0, 2).unwrap();
    assert_eq!(points, vec![Point2D::new(-1.0, -1.0), Point2D::new(1.0, 1.0)]);
    let points = sample_explicit("sqrt(x)", -1.0, 1.0, 4).unwrap();
    assert_eq!(points.len(), 3);
  }

  #[test]
  fn test_omits_failed_evaluations() {
    let points = sample_explicit("x + y", 0.0, 1.0, 10).unwrap();
    assert!(points.is_empty());
  }

  #[test]
  fn test_zero_steps() {
    let points = sample_explicit("x + 1", 3.0, 5.0, 0).unwrap();
    assert_eq!(points, vec![Point2D::new(3.0, 4.0)]);
  }

  #[test]
  fn test_parse_error() {
    assert!(sample_explicit("x +", 0.0, 1.0, 10).is_err());
  }
}
