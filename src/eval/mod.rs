
//! Numerical evaluation of expressions against a variable scope.

pub mod constants;
pub mod library;
pub mod scope;
pub mod value;

pub use library::{Arity, Function, FunctionLibrary};
pub use scope::VariableScope;
pub use value::Value;

use crate::expr::Expr;
use crate::expr::parser::{ParseError, parse_expr};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum EvalError {
  #[error("{0}")]
  Parse(#[from] ParseError),
  #[error("Undefined symbol {0}")]
  UnknownIdentifier(String),
  #[error("Undefined function {0}")]
  UnknownFunction(String),
  #[error("{0} is not a function")]
  NotAFunction(String),
  #[error("Wrong number of arguments to {function}: expected {expected}, got {actual}")]
  ArityMismatch { function: String, expected: Arity, actual: usize },
  #[error("Wrong argument type to {function}: expected {expected}, got {actual}")]
  TypeMismatch { function: String, expected: &'static str, actual: &'static str },
  #[error("Domain error in {function}: {message}")]
  Domain { function: String, message: String },
}

/// Evaluates expression trees. Names resolve against the scope first,
/// then the constant catalog; calls resolve against the library.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
  library: &'a FunctionLibrary,
  scope: &'a VariableScope,
}

/// A parsed expression, kept alongside its source text so it can be
/// evaluated many times without reparsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
  source: String,
  tree: Expr,
}

impl<'a> Evaluator<'a> {
  pub fn new(library: &'a FunctionLibrary, scope: &'a VariableScope) -> Self {
    Self { library, scope }
  }

  /// An evaluator over the built-in function library.
  pub fn with_scope(scope: &'a VariableScope) -> Self {
    Self::new(FunctionLibrary::global(), scope)
  }

  pub fn scope(&self) -> &'a VariableScope {
    self.scope
  }

  pub fn eval(&self, expr: &Expr) -> Result<Value, EvalError> {
    match expr {
      Expr::Number(n) => Ok(Value::Scalar(*n)),
      Expr::Var(name) => {
        self.scope.lookup(name)
          .map(Value::Scalar)
          .ok_or_else(|| EvalError::UnknownIdentifier(name.clone()))
      }
      Expr::Call(name, args) => {
        if self.scope.is_bound(name) {
          return Err(EvalError::NotAFunction(name.clone()));
        }
        let function = self.library.get(name)
          .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
        let args = args.iter()
          .map(|arg| self.eval(arg))
          .collect::<Result<Vec<_>, _>>()?;
        function.call(&args)
      }
    }
  }

  /// Evaluates an expression which must produce a scalar.
  pub fn eval_scalar(&self, expr: &Expr) -> Result<f64, EvalError> {
    self.eval(expr)?.expect_scalar("evaluate")
  }
}

impl Expression {
  pub fn parse(source: &str) -> Result<Self, ParseError> {
    let tree = parse_expr(source)?;
    Ok(Self { source: source.to_owned(), tree })
  }

  /// Wraps an already-built tree. The source text is its canonical
  /// rendering.
  pub fn from_tree(tree: Expr) -> Self {
    Self { source: tree.to_string(), tree }
  }

  pub fn source(&self) -> &str {
    &self.source
  }

  pub fn tree(&self) -> &Expr {
    &self.tree
  }

  pub fn into_tree(self) -> Expr {
    self.tree
  }

  pub fn evaluate(&self, scope: &VariableScope) -> Result<f64, EvalError> {
    Evaluator::with_scope(scope).eval_scalar(&self.tree)
  }

  pub fn evaluate_value(&self, scope: &VariableScope) -> Result<Value, EvalError> {
    Evaluator::with_scope(scope).eval(&self.tree)
  }
}

/// Parses and evaluates `source`, which must produce a scalar.
pub fn evaluate(source: &str, scope: &VariableScope) -> Result<f64, EvalError> {
  Expression::parse(source)?.evaluate(scope)
}

/// Parses and evaluates `source` to a value of any shape.
pub fn evaluate_value(source: &str, scope: &VariableScope) -> Result<Value, EvalError> {
  Expression::parse(source)?.evaluate_value(scope)
}
