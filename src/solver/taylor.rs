
use super::{RealFunction, SolverError};
use crate::eval::{EvalError, Expression};
use crate::eval::library::factorial;
use crate::expr::Expr;
use crate::symbolic::{differentiate, simplify_expr};

/// The Taylor polynomial of `source`, a function of `x`, around
/// `center`, up to and including the term of degree `order`. Terms
/// with a zero coefficient are left out.
pub fn taylor_series(source: &str, center: f64, order: u32) -> Result<String, SolverError> {
  let mut derivative = Expression::parse(source).map_err(EvalError::from)?.into_tree();
  let mut coefficients = Vec::with_capacity(order as usize + 1);
  for n in 0..=order {
    if n > 0 {
      derivative = simplify_expr(differentiate(&derivative, "x")?);
    }
    let function = RealFunction::new(Expression::from_tree(derivative.clone()), "x");
    coefficients.push(function.eval_at(center)? / factorial(f64::from(n)));
  }
  Ok(polynomial(&coefficients, center).to_string())
}

/// `sum c_n (x - center)^n`, with signs folded into `+` and `-`.
fn polynomial(coefficients: &[f64], center: f64) -> Expr {
  let base = if center == 0.0 {
    Expr::var("x")
  } else if center < 0.0 {
    Expr::add(Expr::var("x"), Expr::Number(-center))
  } else {
    Expr::sub(Expr::var("x"), Expr::Number(center))
  };
  let mut result: Option<Expr> = None;
  for (n, &c) in coefficients.iter().enumerate() {
    if c == 0.0 {
      continue;
    }
    let power = match n {
      0 => None,
      1 => Some(base.clone()),
      n => Some(Expr::pow(base.clone(), Expr::Number(n as f64))),
    };
    let magnitude = if result.is_some() { c.abs() } else { c };
    let term = match power {
      None => Expr::Number(magnitude),
      Some(p) if magnitude == 1.0 => p,
      Some(p) if magnitude == -1.0 => Expr::negate(p),
      Some(p) => Expr::mul(Expr::Number(magnitude), p),
    };
    result = Some(match result {
      None => term,
      Some(acc) if c < 0.0 => Expr::sub(acc, term),
      Some(acc) => Expr::add(acc, term),
    });
  }
  result.unwrap_or(Expr::Number(0.0))
}
