
//! Parametric and polar curves.

use super::evaluate_at;
use crate::eval::Expression;
use crate::expr::parser::ParseError;
use crate::util::linspace;
use crate::util::point::Point2D;

use tracing::debug;

/// Samples `(x(t), y(t))` at `n + 1` evenly spaced values of `t`,
/// keeping points where both coordinates are finite.
pub fn sample_parametric(
  x_source: &str,
  y_source: &str,
  t_min: f64,
  t_max: f64,
  n: usize,
) -> Result<Vec<Point2D>, ParseError> {
  let x_expr = Expression::parse(x_source)?;
  let y_expr = Expression::parse(y_source)?;
  let points: Vec<Point2D> = linspace(t_min, t_max, n)
    .filter_map(|t| {
      let point = Point2D::new(
        evaluate_at(&x_expr, &[("t", t)])?,
        evaluate_at(&y_expr, &[("t", t)])?,
      );
      point.is_finite().then_some(point)
    })
    .collect();
  debug!(x_source, y_source, kept = points.len(), "Sampled parametric curve");
  Ok(points)
}

/// Samples `r(theta)` at `n + 1` evenly spaced angles and converts to
/// Cartesian coordinates. Angles where `r` is negative or not finite
/// are skipped.
pub fn sample_polar(source: &str, theta_min: f64, theta_max: f64, n: usize) -> Result<Vec<Point2D>, ParseError> {
  let expr = Expression::parse(source)?;
  let points: Vec<Point2D> = linspace(theta_min, theta_max, n)
    .filter_map(|theta| {
      let r = evaluate_at(&expr, &[("theta", theta)])?;
      (r.is_finite() && r >= 0.0).then(|| Point2D::new(r * theta.cos(), r * theta.sin()))
    })
    .collect();
  debug!(source, kept = points.len(), "Sampled polar curve");
  Ok(points)
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  use std::f64::consts::TAU;

  #[test]
  fn test_parametric_circle() {
    let points = sample_parametric("cos(t)", "sin(t)", 0.0, TAU, 100).unwrap();
    assert_eq!(points.len(), 101);
    for p in &points {
      assert_abs_diff_eq!(p.x.hypot(p.y), 1.0, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(points[0].x, 1.0);
    assert_abs_diff_eq!(points[25].y, 1.0, epsilon = 1e-12);
  }

  #[test]
  fn test_parametric_omits_non_finite() {
    let points = sample_parametric("t", "1/t", -1.0, 1.0, 2).unwrap();
    assert_eq!(points, vec![Point2D::new(-1.0, -1.0), Point2D::new(1.0, 1.0)]);
  }

  #[test]
  fn test_polar_unit_circle() {
    let points = sample_polar("1", 0.0, TAU, 8).unwrap();
    assert_eq!(points.len(), 9);
    assert_abs_diff_eq!(points[2].x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[2].y, 1.0, epsilon = 1e-12);
  }

  #[test]
  fn test_polar_rejects_negative_radius() {
    let points = sample_polar("theta - 1", 0.0, 2.0, 4).unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0], Point2D::new(0.0, 0.0));
  }

  #[test]
  fn test_parse_errors() {
    assert!(sample_parametric("cos(t)", "sin(", 0.0, 1.0, 10).is_err());
    assert!(sample_polar("*", 0.0, 1.0, 10).is_err());
  }
}
