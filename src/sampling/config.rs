
//! Tunable constants shared by the samplers.

use serde::{Serialize, Deserialize};

use std::f64::consts::TAU;

/// Tuning constants for the samplers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SamplingConfig {
  /// Grid points with `|f(x, y)|` below this value are on the curve.
  pub implicit_threshold: f64,
  /// Adaptive regions whose curvature estimate exceeds this value are
  /// subdivided.
  pub curvature_threshold: f64,
  /// Maximum subdivision depth of adaptive sampling.
  pub max_level: u32,
  /// Number of cells along each axis of the contour grid.
  pub contour_divisions: usize,
  pub explicit_samples: usize,
  pub implicit_resolution: usize,
  pub parametric_samples: usize,
  pub t_min: f64,
  pub t_max: f64,
  pub theta_min: f64,
  pub theta_max: f64,
}

impl Default for SamplingConfig {
  fn default() -> Self {
    Self {
      implicit_threshold: 0.1,
      curvature_threshold: 0.1,
      max_level: 8,
      contour_divisions: 50,
      explicit_samples: 1000,
      implicit_resolution: 100,
      parametric_samples: 1000,
      t_min: 0.0,
      t_max: TAU,
      theta_min: 0.0,
      theta_max: TAU,
    }
  }
}
