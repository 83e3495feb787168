
use super::Simplifier;
use crate::expr::{Expr, names};

/// Removes additive and multiplicative identities, trivial powers, and
/// double negations.
#[derive(Debug, Default)]
pub struct IdentitySimplifier {
  _priv: (),
}

impl IdentitySimplifier {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Simplifier for IdentitySimplifier {
  fn simplify_expr_part(&self, expr: Expr) -> Expr {
    let Expr::Call(name, mut args) = expr else {
      return expr;
    };
    if args.len() == 1 && name == names::NEGATE {
      let arg = args.swap_remove(0);
      return match arg {
        Expr::Number(n) => Expr::Number(-n),
        Expr::Call(inner, mut inner_args) if inner == names::NEGATE && inner_args.len() == 1 => {
          inner_args.swap_remove(0)
        }
        arg => Expr::negate(arg),
      };
    }
    if args.len() != 2 {
      return Expr::Call(name, args);
    }
    let b = args.swap_remove(1);
    let a = args.swap_remove(0);
    match name.as_str() {
      names::ADD => {
        if a.is_number(0.0) {
          b
        } else if b.is_number(0.0) {
          a
        } else if let Some(inner) = b.as_unary(names::NEGATE) {
          Expr::sub(a, inner.clone())
        } else {
          Expr::add(a, b)
        }
      }
      names::SUB => {
        if b.is_number(0.0) {
          a
        } else if a.is_number(0.0) {
          Expr::negate(b)
        } else if let Some(inner) = b.as_unary(names::NEGATE) {
          Expr::add(a, inner.clone())
        } else {
          Expr::sub(a, b)
        }
      }
      names::MUL => {
        if a.is_number(0.0) || b.is_number(0.0) {
          Expr::Number(0.0)
        } else if a.is_number(1.0) {
          b
        } else if b.is_number(1.0) {
          a
        } else {
          Expr::mul(a, b)
        }
      }
      names::DIV => {
        if b.is_number(1.0) {
          a
        } else if a.is_number(0.0) && !b.is_number(0.0) {
          Expr::Number(0.0)
        } else {
          Expr::div(a, b)
        }
      }
      names::POW => {
        if b.is_number(1.0) {
          a
        } else if b.is_number(0.0) || a.is_number(1.0) {
          Expr::Number(1.0)
        } else {
          Expr::pow(a, b)
        }
      }
      _ => Expr::Call(name, vec![a, b]),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn x() -> Expr {
    Expr::var("x")
  }

  fn run(expr: Expr) -> Expr {
    IdentitySimplifier::new().simplify_expr(expr)
  }

  #[test]
  fn test_additive_identities() {
    assert_eq!(run(Expr::add(Expr::Number(0.0), x())), x());
    assert_eq!(run(Expr::sub(x(), Expr::Number(0.0))), x());
    assert_eq!(run(Expr::sub(Expr::Number(0.0), x())), Expr::negate(x()));
    assert_eq!(run(Expr::add(Expr::var("y"), Expr::negate(x()))), Expr::sub(Expr::var("y"), x()));
  }

  #[test]
  fn test_multiplicative_identities() {
    assert_eq!(run(Expr::mul(Expr::Number(1.0), x())), x());
    assert_eq!(run(Expr::mul(x(), Expr::Number(0.0))), Expr::Number(0.0));
    assert_eq!(run(Expr::div(x(), Expr::Number(1.0))), x());
    assert_eq!(run(Expr::div(Expr::Number(0.0), x())), Expr::Number(0.0));
  }

  #[test]
  fn test_zero_over_zero_kept() {
    let expr = Expr::div(Expr::Number(0.0), Expr::Number(0.0));
    assert_eq!(run(expr.clone()), expr);
  }

  #[test]
  fn test_powers() {
    assert_eq!(run(Expr::pow(x(), Expr::Number(1.0))), x());
    assert_eq!(run(Expr::pow(x(), Expr::Number(0.0))), Expr::Number(1.0));
  }

  #[test]
  fn test_double_negation() {
    assert_eq!(run(Expr::negate(Expr::negate(x()))), x());
    assert_eq!(run(Expr::negate(Expr::Number(3.0))), Expr::Number(-3.0));
  }

  #[test]
  fn test_other_calls_untouched() {
    let expr = Expr::call("atan2", vec![x(), Expr::Number(0.0)]);
    assert_eq!(run(expr.clone()), expr);
  }
}
