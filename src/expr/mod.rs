
//! Expression trees for the calculator's input language.

pub mod display;
pub mod parser;
pub mod tokenizer;
pub mod walker;

/// Function names the parser produces for operators and literals.
pub mod names {
  pub const ADD: &str = "+";
  pub const SUB: &str = "-";
  pub const MUL: &str = "*";
  pub const DIV: &str = "/";
  pub const POW: &str = "^";
  pub const NEGATE: &str = "negate";
  pub const EQUALS: &str = "=";
  pub const VECTOR: &str = "vector";
}

/// An expression tree. Operators are represented as calls whose names
/// are listed in [`names`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Number(f64),
  Var(String),
  Call(String, Vec<Expr>),
}

impl Expr {
  pub fn var(name: &str) -> Expr {
    Expr::Var(name.to_owned())
  }

  /// Convenience constructor for [Expr::Call].
  pub fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::Call(name.to_owned(), args)
  }

  pub fn add(a: Expr, b: Expr) -> Expr {
    Expr::call(names::ADD, vec![a, b])
  }

  pub fn sub(a: Expr, b: Expr) -> Expr {
    Expr::call(names::SUB, vec![a, b])
  }

  pub fn mul(a: Expr, b: Expr) -> Expr {
    Expr::call(names::MUL, vec![a, b])
  }

  pub fn div(a: Expr, b: Expr) -> Expr {
    Expr::call(names::DIV, vec![a, b])
  }

  pub fn pow(a: Expr, b: Expr) -> Expr {
    Expr::call(names::POW, vec![a, b])
  }

  pub fn negate(a: Expr) -> Expr {
    Expr::call(names::NEGATE, vec![a])
  }

  pub fn as_number(&self) -> Option<f64> {
    match self {
      Expr::Number(n) => Some(*n),
      _ => None,
    }
  }

  pub fn is_number(&self, value: f64) -> bool {
    self.as_number() == Some(value)
  }

  /// If this is a call to `name` with exactly two arguments, returns
  /// them.
  pub fn as_binary(&self, name: &str) -> Option<(&Expr, &Expr)> {
    match self {
      Expr::Call(f, args) if f == name && args.len() == 2 => Some((&args[0], &args[1])),
      _ => None,
    }
  }

  pub fn as_unary(&self, name: &str) -> Option<&Expr> {
    match self {
      Expr::Call(f, args) if f == name && args.len() == 1 => Some(&args[0]),
      _ => None,
    }
  }

  pub fn contains_var(&self, name: &str) -> bool {
    walker::any(self, |e| matches!(e, Expr::Var(v) if v == name))
  }
}

impl From<f64> for Expr {
  fn from(n: f64) -> Expr {
    Expr::Number(n)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_contains_var() {
    let expr = Expr::pow(Expr::var("x"), Expr::Number(2.0));
    assert!(expr.contains_var("x"));
    assert!(!expr.contains_var("y"));
  }

  #[test]
  fn test_as_binary() {
    let expr = Expr::sub(Expr::var("a"), Expr::var("b"));
    assert_eq!(expr.as_binary("-"), Some((&Expr::var("a"), &Expr::var("b"))));
    assert_eq!(expr.as_binary("+"), None);
    assert_eq!(expr.as_unary("-"), None);
  }
}
