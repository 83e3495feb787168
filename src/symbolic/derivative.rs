
use super::SymbolicError;
use crate::eval::FunctionLibrary;
use crate::expr::Expr;

/// Differentiates expressions with respect to a single variable,
/// dispatching calls to the derivative rules of a function library.
/// Every other name is treated as a constant.
#[derive(Debug)]
pub struct DerivativeEngine<'a> {
  target_variable: String,
  library: &'a FunctionLibrary,
}

impl<'a> DerivativeEngine<'a> {
  pub fn new(target_variable: &str, library: &'a FunctionLibrary) -> Self {
    Self {
      target_variable: target_variable.to_owned(),
      library,
    }
  }

  pub fn target_variable(&self) -> &str {
    &self.target_variable
  }

  pub fn differentiate(&self, expr: &Expr) -> Result<Expr, SymbolicError> {
    match expr {
      Expr::Number(_) => Ok(Expr::Number(0.0)),
      Expr::Var(var) => {
        if *var == self.target_variable {
          Ok(Expr::Number(1.0))
        } else {
          Ok(Expr::Number(0.0))
        }
      }
      Expr::Call(_, _) if self.is_constant(expr) => Ok(Expr::Number(0.0)),
      Expr::Call(function, args) => {
        let Some(known_function) = self.library.get(function) else {
          return Err(SymbolicError::UnknownDerivative(function.clone()));
        };
        known_function.differentiate(args, self)
      }
    }
  }

  /// Whether `expr` does not depend on the target variable.
  pub fn is_constant(&self, expr: &Expr) -> bool {
    !expr.contains_var(&self.target_variable)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_leaves() {
    let engine = DerivativeEngine::new("t", FunctionLibrary::global());
    assert_eq!(engine.differentiate(&Expr::Number(4.0)).unwrap(), Expr::Number(0.0));
    assert_eq!(engine.differentiate(&Expr::var("t")).unwrap(), Expr::Number(1.0));
    assert_eq!(engine.differentiate(&Expr::var("x")).unwrap(), Expr::Number(0.0));
  }

  #[test]
  fn test_sum_rule() {
    let engine = DerivativeEngine::new("x", FunctionLibrary::global());
    let expr = Expr::add(Expr::var("x"), Expr::var("y"));
    assert_eq!(
      engine.differentiate(&expr).unwrap(),
      Expr::add(Expr::Number(1.0), Expr::Number(0.0)),
    );
  }

  #[test]
  fn test_is_constant() {
    let engine = DerivativeEngine::new("x", FunctionLibrary::global());
    assert!(engine.is_constant(&Expr::mul(Expr::var("pi"), Expr::var("y"))));
    assert!(!engine.is_constant(&Expr::call("sin", vec![Expr::var("x")])));
  }
}
