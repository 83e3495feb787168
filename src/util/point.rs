
//! Points in the plane, as produced by the samplers.

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point2D {
  pub x: f64,
  pub y: f64,
}

impl Point2D {
  pub const fn new(x: f64, y: f64) -> Self {
    Point2D { x, y }
  }

  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite()
  }
}

impl From<(f64, f64)> for Point2D {
  fn from((x, y): (f64, f64)) -> Self {
    Point2D { x, y }
  }
}

impl Display for Point2D {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    assert_eq!(Point2D::new(1.5, -2.0).to_string(), "(1.5, -2)");
  }

  #[test]
  fn test_serialize() {
    let json = serde_json::to_string(&Point2D::new(0.0, 1.0)).unwrap();
    assert_eq!(json, r#"{"x":0.0,"y":1.0}"#);
  }

  #[test]
  fn test_is_finite() {
    assert!(Point2D::new(0.0, 1.0).is_finite());
    assert!(!Point2D::new(f64::NAN, 1.0).is_finite());
    assert!(!Point2D::new(0.0, f64::INFINITY).is_finite());
  }
}
