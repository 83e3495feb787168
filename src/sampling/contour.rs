
//! Value grids for external contour extraction.

use super::{SamplingConfig, evaluate_at};
use crate::eval::Expression;
use crate::expr::parser::ParseError;
use crate::util::linspace;

use serde::{Serialize, Deserialize};
use tracing::debug;

/// Values of `f(x, y)` on a regular grid, for contour extraction by the
/// caller. `z_values[j][i]` is the value at `(x_values[i], y_values[j])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContourGrid {
  pub x_values: Vec<f64>,
  pub y_values: Vec<f64>,
  pub z_values: Vec<Vec<f64>>,
}

impl ContourGrid {
  pub fn get(&self, i: usize, j: usize) -> Option<f64> {
    self.z_values.get(j)?.get(i).copied()
  }
}

/// Evaluates `f(x, y)` on a 51 x 51 grid covering both ranges,
/// endpoints included. Cells whose evaluation fails or is not finite
/// hold zero.
pub fn sample_contour_grid(
  source: &str,
  x_range: (f64, f64),
  y_range: (f64, f64),
) -> Result<ContourGrid, ParseError> {
  sample_contour_grid_with_config(source, x_range, y_range, &SamplingConfig::default())
}

pub fn sample_contour_grid_with_config(
  source: &str,
  (x_min, x_max): (f64, f64),
  (y_min, y_max): (f64, f64),
  config: &SamplingConfig,
) -> Result<ContourGrid, ParseError> {
  let expr = Expression::parse(source)?;
  let x_values: Vec<f64> = linspace(x_min, x_max, config.contour_divisions).collect();
  let y_values: Vec<f64> = linspace(y_min, y_max, config.contour_divisions).collect();
  let mut failed_cells = 0usize;
  let z_values = y_values.iter().map(|&y| {
    x_values.iter().map(|&x| {
      match evaluate_at(&expr, &[("x", x), ("y", y)]) {
        Some(z) if z.is_finite() => z,
        _ => {
          failed_cells += 1;
          0.0
        }
      }
    }).collect()
  }).collect();
  debug!(source, divisions = config.contour_divisions, failed_cells, "Sampled contour grid");
  Ok(ContourGrid { x_values, y_values, z_values })
}
