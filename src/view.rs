
//! The affine transform between screen pixels and graph coordinates.
//!
//! The canvas is 800 by 600 pixels with a fixed margin on every side.
//! Inside the margin, the visible graph window is stretched to fill
//! the plot area, then scaled and translated by the user's pan and
//! zoom.

use crate::util::point::Point2D;

use serde::{Serialize, Deserialize};

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;
pub const MARGIN: f64 = 40.0;

/// Width of the plot area inside the margins.
pub const PLOT_WIDTH: f64 = CANVAS_WIDTH - 2.0 * MARGIN;
/// Height of the plot area inside the margins.
pub const PLOT_HEIGHT: f64 = CANVAS_HEIGHT - 2.0 * MARGIN;

#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
  pub x_min: f64,
  pub x_max: f64,
  pub y_min: f64,
  pub y_max: f64,
  pub scale: f64,
  pub translate_x: f64,
  pub translate_y: f64,
}

impl ViewState {
  pub fn graph_width(&self) -> f64 {
    self.x_max - self.x_min
  }

  pub fn graph_height(&self) -> f64 {
    self.y_max - self.y_min
  }

  /// Converts a point in screen pixels to graph coordinates. Screen `y`
  /// grows downward, graph `y` upward.
  pub fn screen_to_graph(&self, screen: Point2D) -> Point2D {
    let x = self.x_min + (screen.x - MARGIN - self.translate_x) / self.scale * (self.graph_width() / PLOT_WIDTH);
    let y = self.y_max - (screen.y - MARGIN - self.translate_y) / self.scale * (self.graph_height() / PLOT_HEIGHT);
    Point2D::new(x, y)
  }

  /// Converts a point in graph coordinates to screen pixels. Inverse
  /// of [`ViewState::screen_to_graph`].
  pub fn graph_to_screen(&self, graph: Point2D) -> Point2D {
    let x = MARGIN + self.translate_x + (graph.x - self.x_min) * (PLOT_WIDTH / self.graph_width()) * self.scale;
    let y = MARGIN + self.translate_y + (self.y_max - graph.y) * (PLOT_HEIGHT / self.graph_height()) * self.scale;
    Point2D::new(x, y)
  }
}

impl Default for ViewState {
  fn default() -> Self {
    Self {
      x_min: -10.0,
      x_max: 10.0,
      y_min: -10.0,
      y_max: 10.0,
      scale: 1.0,
      translate_x: 0.0,
      translate_y: 0.0,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  fn views() -> Vec<ViewState> {
    vec![
      ViewState::default(),
      ViewState { scale: 2.5, translate_x: -30.0, translate_y: 17.0, ..ViewState::default() },
      ViewState { x_min: 0.0, x_max: 1.0, y_min: -3.0, y_max: 5.0, scale: 0.4, translate_x: 120.0, translate_y: -64.0 },
    ]
  }

  #[test]
  fn test_default_corners() {
    let view = ViewState::default();
    let top_left = view.graph_to_screen(Point2D::new(-10.0, 10.0));
    assert_abs_diff_eq!(top_left.x, MARGIN);
    assert_abs_diff_eq!(top_left.y, MARGIN);
    let bottom_right = view.graph_to_screen(Point2D::new(10.0, -10.0));
    assert_abs_diff_eq!(bottom_right.x, CANVAS_WIDTH - MARGIN);
    assert_abs_diff_eq!(bottom_right.y, CANVAS_HEIGHT - MARGIN);
    let origin = view.screen_to_graph(Point2D::new(400.0, 300.0));
    assert_abs_diff_eq!(origin.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(origin.y, 0.0, epsilon = 1e-12);
  }

  #[test]
  fn test_screen_roundtrip() {
    for view in views() {
      for screen in [Point2D::new(0.0, 0.0), Point2D::new(123.5, 456.25), Point2D::new(800.0, 600.0)] {
        let back = view.graph_to_screen(view.screen_to_graph(screen));
        assert_abs_diff_eq!(back.x, screen.x, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, screen.y, epsilon = 1e-9);
      }
    }
  }

  #[test]
  fn test_graph_roundtrip() {
    for view in views() {
      for graph in [Point2D::new(0.0, 0.0), Point2D::new(-7.5, 3.25), Point2D::new(0.3, -2.9)] {
        let back = view.screen_to_graph(view.graph_to_screen(graph));
        assert_abs_diff_eq!(back.x, graph.x, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, graph.y, epsilon = 1e-9);
      }
    }
  }

  #[test]
  fn test_serialized_names() {
    let json = serde_json::to_value(ViewState::default()).unwrap();
    assert_eq!(json["translateX"], serde_json::json!(0.0));
    assert_eq!(json["xMin"], serde_json::json!(-10.0));
  }
}
