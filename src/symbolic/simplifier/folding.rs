
use super::Simplifier;
use crate::expr::{Expr, names};

/// Evaluates arithmetic operators whose arguments are all numeric
/// literals. Other functions are left symbolic, as are results which
/// are not finite.
#[derive(Debug, Default)]
pub struct ConstantFolder {
  _priv: (),
}

impl ConstantFolder {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Simplifier for ConstantFolder {
  fn simplify_expr_part(&self, expr: Expr) -> Expr {
    match fold(&expr) {
      Some(n) if n.is_finite() => Expr::Number(n),
      _ => expr,
    }
  }
}

fn fold(expr: &Expr) -> Option<f64> {
  let Expr::Call(name, args) = expr else {
    return None;
  };
  match args.as_slice() {
    [a] if name == names::NEGATE => Some(-a.as_number()?),
    [a, b] => {
      let (a, b) = (a.as_number()?, b.as_number()?);
      match name.as_str() {
        names::ADD => Some(a + b),
        names::SUB => Some(a - b),
        names::MUL => Some(a * b),
        names::DIV => Some(a / b),
        names::POW => Some(a.powf(b)),
        _ => None,
      }
    }
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_folds_arithmetic() {
    let folder = ConstantFolder::new();
    let expr = Expr::add(Expr::Number(2.0), Expr::mul(Expr::Number(3.0), Expr::Number(4.0)));
    assert_eq!(folder.simplify_expr(expr), Expr::Number(14.0));
    assert_eq!(folder.simplify_expr(Expr::negate(Expr::Number(2.0))), Expr::Number(-2.0));
  }

  #[test]
  fn test_keeps_non_finite_and_symbolic() {
    let folder = ConstantFolder::new();
    let expr = Expr::div(Expr::Number(1.0), Expr::Number(0.0));
    assert_eq!(folder.simplify_expr(expr.clone()), expr);
    let expr = Expr::call("sin", vec![Expr::Number(1.0)]);
    assert_eq!(folder.simplify_expr(expr.clone()), expr);
    let expr = Expr::add(Expr::var("x"), Expr::Number(1.0));
    assert_eq!(folder.simplify_expr(expr.clone()), expr);
  }
}
