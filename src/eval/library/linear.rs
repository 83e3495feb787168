
//! Vector and matrix functions.

use super::{Arity, FunctionBuilder, FunctionLibrary, Function};
use crate::eval::{EvalError, Value};

pub fn append_linear_functions(library: &mut FunctionLibrary) {
  library.insert(dot());
  library.insert(cross());
  library.insert(det());
  library.insert(trace());
  library.insert(norm());
}

fn domain_error(function: &str, message: impl Into<String>) -> EvalError {
  EvalError::Domain { function: function.to_owned(), message: message.into() }
}

fn dot() -> Function {
  FunctionBuilder::new("dot")
    .values(Arity::Exactly(2), |args| {
      let a = args[0].expect_vector("dot")?;
      let b = args[1].expect_vector("dot")?;
      if a.len() != b.len() {
        return Err(domain_error("dot", format!("vectors have different lengths ({} and {})", a.len(), b.len())));
      }
      Ok(Value::Scalar(a.iter().zip(b).map(|(x, y)| x * y).sum()))
    })
    .build()
}

fn cross() -> Function {
  FunctionBuilder::new("cross")
    .values(Arity::Exactly(2), |args| {
      let a = args[0].expect_vector("cross")?;
      let b = args[1].expect_vector("cross")?;
      let (&[a1, a2, a3], &[b1, b2, b3]) = (a, b) else {
        return Err(domain_error("cross", "both vectors must have length 3"));
      };
      Ok(Value::Vector(vec![
        a2 * b3 - a3 * b2,
        a3 * b1 - a1 * b3,
        a1 * b2 - a2 * b1,
      ]))
    })
    .build()
}

fn square_matrix<'a>(function: &str, value: &'a Value) -> Result<&'a [Vec<f64>], EvalError> {
  let m = value.expect_matrix(function)?;
  if m.iter().any(|row| row.len() != m.len()) {
    return Err(domain_error(function, "matrix must be square"));
  }
  Ok(m)
}

fn det() -> Function {
  FunctionBuilder::new("det")
    .values(Arity::Exactly(1), |args| {
      let m = square_matrix("det", &args[0])?;
      Ok(Value::Scalar(determinant(m)))
    })
    .build()
}

fn trace() -> Function {
  FunctionBuilder::new("trace")
    .values(Arity::Exactly(1), |args| {
      let m = square_matrix("trace", &args[0])?;
      Ok(Value::Scalar((0..m.len()).map(|i| m[i][i]).sum()))
    })
    .build()
}

/// Euclidean length of a vector, or absolute value of a scalar.
fn norm() -> Function {
  FunctionBuilder::new("norm")
    .values(Arity::Exactly(1), |args| {
      match &args[0] {
        Value::Scalar(x) => Ok(Value::Scalar(x.abs())),
        other => {
          let v = other.expect_vector("norm")?;
          Ok(Value::Scalar(v.iter().map(|x| x * x).sum::<f64>().sqrt()))
        }
      }
    })
    .build()
}

/// Determinant of a square matrix by Gaussian elimination with
/// partial pivoting. The 2x2 case uses the closed form.
pub fn determinant(m: &[Vec<f64>]) -> f64 {
  match m.len() {
    0 => 1.0,
    1 => m[0][0],
    2 => m[0][0] * m[1][1] - m[0][1] * m[1][0],
    n => {
      let mut a = m.to_vec();
      let mut result = 1.0;
      for col in 0..n {
        let pivot = (col..n)
          .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
          .unwrap_or(col);
        if a[pivot][col] == 0.0 {
          return 0.0;
        }
        if pivot != col {
          a.swap(pivot, col);
          result = -result;
        }
        result *= a[col][col];
        for row in (col + 1)..n {
          let factor = a[row][col] / a[col][col];
          for k in col..n {
            a[row][k] -= factor * a[col][k];
          }
        }
      }
      result
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  fn vector(v: &[f64]) -> Value {
    Value::Vector(v.to_vec())
  }

  fn matrix(rows: &[&[f64]]) -> Value {
    Value::Matrix(rows.iter().map(|r| r.to_vec()).collect())
  }

  #[test]
  fn test_dot() {
    assert_eq!(dot().call(&[vector(&[1.0, 2.0, 3.0]), vector(&[4.0, 5.0, 6.0])]).unwrap(), Value::Scalar(32.0));
    assert!(matches!(dot().call(&[vector(&[1.0]), vector(&[1.0, 2.0])]), Err(EvalError::Domain { .. })));
  }

  #[test]
  fn test_cross() {
    let result = cross().call(&[vector(&[1.0, 0.0, 0.0]), vector(&[0.0, 1.0, 0.0])]).unwrap();
    assert_eq!(result, vector(&[0.0, 0.0, 1.0]));
    assert!(matches!(cross().call(&[vector(&[1.0, 0.0]), vector(&[0.0, 1.0])]), Err(EvalError::Domain { .. })));
  }

  #[test]
  fn test_det_and_trace() {
    let m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!(det().call(&[m.clone()]).unwrap(), Value::Scalar(-2.0));
    assert_eq!(trace().call(&[m]).unwrap(), Value::Scalar(5.0));
    let non_square = matrix(&[&[1.0, 2.0, 3.0], &[3.0, 4.0, 5.0]]);
    assert!(matches!(det().call(&[non_square]), Err(EvalError::Domain { .. })));
  }

  #[test]
  fn test_determinant_general() {
    let m = vec![
      vec![2.0, -3.0, 1.0],
      vec![2.0, 0.0, -1.0],
      vec![1.0, 4.0, 5.0],
    ];
    assert_abs_diff_eq!(determinant(&m), 49.0, epsilon = 1e-10);
    let singular = vec![
      vec![1.0, 2.0, 3.0],
      vec![2.0, 4.0, 6.0],
      vec![0.0, 1.0, 1.0],
    ];
    assert_abs_diff_eq!(determinant(&singular), 0.0, epsilon = 1e-10);
  }

  #[test]
  fn test_norm() {
    assert_eq!(norm().call(&[vector(&[3.0, 4.0])]).unwrap(), Value::Scalar(5.0));
    assert_eq!(norm().call(&[Value::Scalar(-2.0)]).unwrap(), Value::Scalar(2.0));
  }
}
