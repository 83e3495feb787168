
//! Grid-threshold sampling of implicit curves.

use super::{SamplingConfig, evaluate_at};
use crate::eval::Expression;
use crate::expr::parser::ParseError;
use crate::util::cell_starts;
use crate::util::point::Point2D;

use itertools::iproduct;
use tracing::debug;

/// Approximates the zero set of `f(x, y)` by scanning a
/// `resolution x resolution` grid of cell corners and keeping those
/// where `|f|` is below the threshold. Points come out in scan order,
/// `x` outermost.
pub fn sample_implicit(
  source: &str,
  x_range: (f64, f64),
  y_range: (f64, f64),
  resolution: usize,
) -> Result<Vec<Point2D>, ParseError> {
  sample_implicit_with_config(source, x_range, y_range, resolution, &SamplingConfig::default())
}

pub fn sample_implicit_with_config(
  source: &str,
  (x_min, x_max): (f64, f64),
  (y_min, y_max): (f64, f64),
  resolution: usize,
  config: &SamplingConfig,
) -> Result<Vec<Point2D>, ParseError> {
  let expr = Expression::parse(source)?;
  let xs = cell_starts(x_min, x_max, resolution);
  let ys = cell_starts(y_min, y_max, resolution);
  let points: Vec<Point2D> = iproduct!(xs, ys)
    .map(|(x, y)| Point2D::new(x, y))
    .filter(|p| {
      evaluate_at(&expr, &[("x", p.x), ("y", p.y)])
        .is_some_and(|value| value.abs() < config.implicit_threshold)
    })
    .collect();
  debug!(source, resolution, kept = points.len(), "Sampled implicit curve");
  Ok(points)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_circle() {
    let points = sample_implicit("x^2 + y^2 = 1", (-2.0, 2.0), (-2.0, 2.0), 100).unwrap();
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| (p.x * p.x + p.y * p.y - 1.0).abs() < 0.1));
    assert!(points.windows(2).all(|w| w[0].x <= w[1].x));
  }

  #[test]
  fn test_grid_excludes_far_edge() {
    let points = sample_implicit("x - 1", (0.0, 1.0), (0.0, 1.0), 4).unwrap();
    assert!(points.is_empty());
    let points = sample_implicit("x", (0.0, 1.0), (0.0, 1.0), 4).unwrap();
    assert_eq!(points.len(), 4);
    assert!(points.iter().all(|p| p.x == 0.0));
  }

  #[test]
  fn test_threshold_from_config() {
    let config = SamplingConfig { implicit_threshold: 0.6, ..SamplingConfig::default() };
    let points = sample_implicit_with_config("x", (0.0, 1.0), (0.0, 1.0), 4, &config).unwrap();
    // x = 0, 0.25 and 0.5, four rows each.
    assert_eq!(points.len(), 12);
  }

  #[test]
  fn test_zero_resolution() {
    assert!(sample_implicit("x - y", (0.0, 1.0), (0.0, 1.0), 0).unwrap().is_empty());
  }
}
