
use super::EvalError;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// The result of evaluating an expression. Most expressions produce
/// scalars; vector literals and the linear algebra functions produce
/// the other two shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
  Scalar(f64),
  Vector(Vec<f64>),
  /// Row-major; every row has the same length.
  Matrix(Vec<Vec<f64>>),
}

impl Value {
  pub fn type_name(&self) -> &'static str {
    match self {
      Value::Scalar(_) => "number",
      Value::Vector(_) => "vector",
      Value::Matrix(_) => "matrix",
    }
  }

  pub fn as_scalar(&self) -> Option<f64> {
    match self {
      Value::Scalar(x) => Some(*x),
      _ => None,
    }
  }

  /// Requires a scalar, reporting `function` as the consumer on
  /// failure.
  pub fn expect_scalar(&self, function: &str) -> Result<f64, EvalError> {
    self.as_scalar().ok_or_else(|| EvalError::TypeMismatch {
      function: function.to_owned(),
      expected: "number",
      actual: self.type_name(),
    })
  }

  pub fn expect_vector(&self, function: &str) -> Result<&[f64], EvalError> {
    match self {
      Value::Vector(v) => Ok(v),
      other => Err(EvalError::TypeMismatch {
        function: function.to_owned(),
        expected: "vector",
        actual: other.type_name(),
      }),
    }
  }

  pub fn expect_matrix(&self, function: &str) -> Result<&[Vec<f64>], EvalError> {
    match self {
      Value::Matrix(m) => Ok(m),
      other => Err(EvalError::TypeMismatch {
        function: function.to_owned(),
        expected: "matrix",
        actual: other.type_name(),
      }),
    }
  }
}

impl From<f64> for Value {
  fn from(x: f64) -> Self {
    Value::Scalar(x)
  }
}

impl From<Vec<f64>> for Value {
  fn from(v: Vec<f64>) -> Self {
    Value::Vector(v)
  }
}

impl Display for Value {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    fn write_row(f: &mut Formatter<'_>, row: &[f64]) -> fmt::Result {
      write!(f, "[")?;
      for (i, x) in row.iter().enumerate() {
        if i > 0 {
          write!(f, ", ")?;
        }
        write!(f, "{x}")?;
      }
      write!(f, "]")
    }

    match self {
      Value::Scalar(x) => write!(f, "{x}"),
      Value::Vector(v) => write_row(f, v),
      Value::Matrix(m) => {
        write!(f, "[")?;
        for (i, row) in m.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write_row(f, row)?;
        }
        write!(f, "]")
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    assert_eq!(Value::Scalar(2.5).to_string(), "2.5");
    assert_eq!(Value::Vector(vec![1.0, 2.0]).to_string(), "[1, 2]");
    assert_eq!(Value::Matrix(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).to_string(), "[[1, 0], [0, 1]]");
  }

  #[test]
  fn test_expect_scalar() {
    assert_eq!(Value::Scalar(1.0).expect_scalar("sin").unwrap(), 1.0);
    let err = Value::Vector(vec![]).expect_scalar("sin").unwrap_err();
    assert_eq!(err, EvalError::TypeMismatch {
      function: String::from("sin"),
      expected: "number",
      actual: "vector",
    });
  }

  #[test]
  fn test_serialize_untagged() {
    assert_eq!(serde_json::to_string(&Value::Scalar(1.5)).unwrap(), "1.5");
    assert_eq!(serde_json::to_string(&Value::Vector(vec![1.0])).unwrap(), "[1.0]");
  }
}
