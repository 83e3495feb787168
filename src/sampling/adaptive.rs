
//! Curvature-driven adaptive sampling of `y = f(x)`.

use super::{SamplingConfig, evaluate_at};
use crate::eval::Expression;
use crate::expr::parser::ParseError;
use crate::util::point::Point2D;

use tracing::debug;

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
struct Region {
  start: f64,
  end: f64,
  level: u32,
}

/// Samples `y = f(x)` by recursive bisection, spending more points
/// where the curve bends.
///
/// Each region is evaluated at its start, middle and end. A region
/// whose curvature estimate `|y1 - 2 y2 + y3| / (end - start)^2`
/// exceeds the threshold is split in two, up to the maximum level;
/// otherwise its three points are kept. A region with a non-finite
/// sample is dropped. Sampling stops once `target_points` points are
/// kept or no regions remain.
pub fn sample_adaptive(source: &str, x_min: f64, x_max: f64, target_points: usize) -> Result<Vec<Point2D>, ParseError> {
  sample_adaptive_with_config(source, x_min, x_max, target_points, &SamplingConfig::default())
}

pub fn sample_adaptive_with_config(
  source: &str,
  x_min: f64,
  x_max: f64,
  target_points: usize,
  config: &SamplingConfig,
) -> Result<Vec<Point2D>, ParseError> {
  let expr = Expression::parse(source)?;
  let mut points = Vec::new();
  let mut queue = VecDeque::from([Region { start: x_min, end: x_max, level: 0 }]);
  let mut dropped_regions = 0usize;

  while points.len() < target_points {
    let Some(region) = queue.pop_front() else {
      break;
    };
    let mid = (region.start + region.end) / 2.0;
    let Some(samples) = sample_region(&expr, [region.start, mid, region.end]) else {
      dropped_regions += 1;
      continue;
    };
    let [y1, y2, y3] = samples;
    let width = region.end - region.start;
    let curvature = (y1 - 2.0 * y2 + y3).abs() / (width * width);
    if curvature > config.curvature_threshold && region.level < config.max_level {
      let level = region.level + 1;
      queue.push_front(Region { start: mid, end: region.end, level });
      queue.push_front(Region { start: region.start, end: mid, level });
    } else {
      points.push(Point2D::new(region.start, y1));
      points.push(Point2D::new(mid, y2));
      points.push(Point2D::new(region.end, y3));
    }
  }

  debug!(
    source,
    kept = points.len(),
    dropped_regions,
    reached_target = points.len() >= target_points,
    "Adaptive sampling finished"
  );
  points.sort_by(|a, b| a.x.total_cmp(&b.x));
  points.dedup_by(|a, b| a.x == b.x);
  Ok(points)
}

fn sample_region(expr: &Expression, xs: [f64; 3]) -> Option<[f64; 3]> {
  let mut ys = [0.0; 3];
  for (y, x) in ys.iter_mut().zip(xs) {
    *y = evaluate_at(expr, &[("x", x)]).filter(|y| y.is_finite())?;
  }
  Some(ys)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_straight_line_is_not_subdivided() {
    let points = sample_adaptive("2*x + 1", 0.0, 4.0, 1000).unwrap();
    assert_eq!(points, vec![Point2D::new(0.0, 1.0), Point2D::new(2.0, 5.0), Point2D::new(4.0, 9.0)]);
  }

  #[test]
  fn test_curve_is_refined_and_sorted() {
    let points = sample_adaptive("x^2", 0.0, 1.0, 1000).unwrap();
    assert!(points.len() > 100);
    assert!(points.windows(2).all(|w| w[0].x < w[1].x));
    assert!(points.iter().all(|p| (p.y - p.x * p.x).abs() < 1e-12));
  }

  #[test]
  fn test_stops_at_target() {
    let points = sample_adaptive("x^2", 0.0, 1.0, 10).unwrap();
    assert!(!points.is_empty());
    assert!(points.len() <= 12);
  }

  #[test]
  fn test_max_level_bounds_refinement() {
    let config = SamplingConfig { max_level: 2, ..SamplingConfig::default() };
    let points = sample_adaptive_with_config("x^2", 0.0, 1.0, 1000, &config).unwrap();
    // Four regions at level 2, sharing endpoints.
    assert_eq!(points.len(), 9);
  }

  #[test]
  fn test_non_finite_region_is_skipped() {
    let points = sample_adaptive("sqrt(x)", -1.0, 1.0, 1000).unwrap();
    assert!(points.is_empty());
  }
}
