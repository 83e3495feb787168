
//! Operators of the expression language, which evaluate and
//! differentiate like any other function.

use super::{Arity, FunctionBuilder, FunctionLibrary, Function};
use crate::eval::{EvalError, Value};
use crate::expr::{Expr, names};

pub fn append_arithmetic_functions(library: &mut FunctionLibrary) {
  library.insert(addition());
  library.insert(subtraction());
  library.insert(multiplication());
  library.insert(division());
  library.insert(power());
  library.insert(negation());
  library.insert(equation());
  library.insert(vector());
}

pub fn addition() -> Function {
  FunctionBuilder::new(names::ADD)
    .binary(|a, b| a + b)
    .derivative(|args, engine| {
      Ok(Expr::add(engine.differentiate(&args[0])?, engine.differentiate(&args[1])?))
    })
    .build()
}

pub fn subtraction() -> Function {
  FunctionBuilder::new(names::SUB)
    .binary(|a, b| a - b)
    .derivative(|args, engine| {
      Ok(Expr::sub(engine.differentiate(&args[0])?, engine.differentiate(&args[1])?))
    })
    .build()
}

pub fn multiplication() -> Function {
  FunctionBuilder::new(names::MUL)
    .binary(|a, b| a * b)
    .derivative(|args, engine| {
      // Product rule
      let (u, v) = (&args[0], &args[1]);
      Ok(Expr::add(
        Expr::mul(engine.differentiate(u)?, v.clone()),
        Expr::mul(u.clone(), engine.differentiate(v)?),
      ))
    })
    .build()
}

pub fn division() -> Function {
  FunctionBuilder::new(names::DIV)
    .binary(|a, b| a / b)
    .derivative(|args, engine| {
      let (u, v) = (&args[0], &args[1]);
      if engine.is_constant(v) {
        return Ok(Expr::div(engine.differentiate(u)?, v.clone()));
      }
      // Quotient rule
      Ok(Expr::div(
        Expr::sub(
          Expr::mul(engine.differentiate(u)?, v.clone()),
          Expr::mul(u.clone(), engine.differentiate(v)?),
        ),
        Expr::pow(v.clone(), Expr::Number(2.0)),
      ))
    })
    .build()
}

pub fn power() -> Function {
  FunctionBuilder::new(names::POW)
    .binary(f64::powf)
    .derivative(|args, engine| {
      let (base, exponent) = (&args[0], &args[1]);
      if engine.is_constant(exponent) {
        // Power rule
        Ok(Expr::mul(
          Expr::mul(
            exponent.clone(),
            Expr::pow(base.clone(), Expr::sub(exponent.clone(), Expr::Number(1.0))),
          ),
          engine.differentiate(base)?,
        ))
      } else if engine.is_constant(base) {
        Ok(Expr::mul(
          Expr::mul(
            Expr::pow(base.clone(), exponent.clone()),
            Expr::call("ln", vec![base.clone()]),
          ),
          engine.differentiate(exponent)?,
        ))
      } else {
        // d(u^v) = u^v * (v' ln(u) + v u' / u)
        Ok(Expr::mul(
          Expr::pow(base.clone(), exponent.clone()),
          Expr::add(
            Expr::mul(engine.differentiate(exponent)?, Expr::call("ln", vec![base.clone()])),
            Expr::div(Expr::mul(exponent.clone(), engine.differentiate(base)?), base.clone()),
          ),
        ))
      }
    })
    .build()
}

pub fn negation() -> Function {
  FunctionBuilder::new(names::NEGATE)
    .unary(|x| -x)
    .derivative(|args, engine| Ok(Expr::negate(engine.differentiate(&args[0])?)))
    .build()
}

/// A top-level equation `lhs = rhs` evaluates to `lhs - rhs`, so its
/// zero set is the solution set of the equation.
pub fn equation() -> Function {
  FunctionBuilder::new(names::EQUALS)
    .binary(|a, b| a - b)
    .derivative(|args, engine| {
      Ok(Expr::sub(engine.differentiate(&args[0])?, engine.differentiate(&args[1])?))
    })
    .build()
}

/// Vector literal. A list of numbers is a vector; a list of vectors of
/// equal length is a matrix.
pub fn vector() -> Function {
  FunctionBuilder::new(names::VECTOR)
    .values(Arity::AtLeast(0), |args| {
      if args.iter().all(|v| matches!(v, Value::Scalar(_))) {
        let elems = args.iter().filter_map(Value::as_scalar).collect();
        return Ok(Value::Vector(elems));
      }
      let rows = args.iter()
        .map(|v| v.expect_vector(names::VECTOR).map(<[f64]>::to_vec))
        .collect::<Result<Vec<_>, _>>()?;
      let width = rows[0].len();
      if rows.iter().any(|row| row.len() != width) {
        return Err(EvalError::Domain {
          function: names::VECTOR.to_owned(),
          message: String::from("matrix rows must have equal length"),
        });
      }
      Ok(Value::Matrix(rows))
    })
    .derivative(|args, engine| {
      let derivs = args.iter().map(|arg| engine.differentiate(arg)).collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::call(names::VECTOR, derivs))
    })
    .build()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn s(x: f64) -> Value {
    Value::Scalar(x)
  }

  #[test]
  fn test_ieee_semantics() {
    assert_eq!(division().call(&[s(1.0), s(0.0)]).unwrap(), s(f64::INFINITY));
    assert_eq!(division().call(&[s(-1.0), s(0.0)]).unwrap(), s(f64::NEG_INFINITY));
    assert_eq!(power().call(&[s(2.0), s(10.0)]).unwrap(), s(1024.0));
  }

  #[test]
  fn test_equation_is_difference() {
    assert_eq!(equation().call(&[s(5.0), s(3.0)]).unwrap(), s(2.0));
  }

  #[test]
  fn test_vector_and_matrix_literals() {
    assert_eq!(vector().call(&[s(1.0), s(2.0)]).unwrap(), Value::Vector(vec![1.0, 2.0]));
    assert_eq!(vector().call(&[]).unwrap(), Value::Vector(vec![]));
    let m = vector().call(&[Value::Vector(vec![1.0, 2.0]), Value::Vector(vec![3.0, 4.0])]).unwrap();
    assert_eq!(m, Value::Matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
  }

  #[test]
  fn test_ragged_matrix() {
    let err = vector().call(&[Value::Vector(vec![1.0, 2.0]), Value::Vector(vec![3.0])]).unwrap_err();
    assert!(matches!(err, EvalError::Domain { .. }));
    let err = vector().call(&[s(1.0), Value::Vector(vec![3.0])]).unwrap_err();
    assert!(matches!(err, EvalError::TypeMismatch { .. }));
  }

  #[test]
  fn test_operators_reject_vectors() {
    let err = addition().call(&[Value::Vector(vec![1.0]), s(1.0)]).unwrap_err();
    assert!(matches!(err, EvalError::TypeMismatch { .. }));
  }
}
