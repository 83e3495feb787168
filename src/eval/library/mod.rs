
//! Library of built-in mathematical functions and their derivative
//! rules.
//!
//! The library is built once, on first use, and is read-only
//! afterward. See [`FunctionLibrary::global`].

mod arithmetic;
mod elementary;
mod linear;
mod special;
mod statistics;

pub use special::{besselj0, elliptic_e, elliptic_k, erf, factorial, fresnel_c, fresnel_s, gamma};
pub use statistics::{binomial, normal_cdf, normal_pdf};

use super::{EvalError, Value};
use crate::expr::Expr;
use crate::symbolic::{DerivativeEngine, SymbolicError};

use once_cell::sync::Lazy;

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter, Debug};

static GLOBAL_LIBRARY: Lazy<FunctionLibrary> = Lazy::new(build_function_library);

/// A mathematical function known to the evaluator. Functions are
/// constructed through [`FunctionBuilder`].
pub struct Function {
  name: String,
  arity: Arity,
  body: Box<FunctionImpl>,
  derivative_rule: Option<Box<FunctionDeriv>>,
}

/// The number of arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
  Exactly(usize),
  /// Inclusive on both ends.
  Between(usize, usize),
  AtLeast(usize),
}

type FunctionImpl =
  dyn Fn(&[Value]) -> Result<Value, EvalError> + Send + Sync;

type FunctionDeriv =
  dyn Fn(&[Expr], &DerivativeEngine<'_>) -> Result<Expr, SymbolicError> + Send + Sync;

pub struct FunctionBuilder {
  name: String,
  arity: Arity,
  body: Option<Box<FunctionImpl>>,
  derivative_rule: Option<Box<FunctionDeriv>>,
}

/// A table of known functions, indexed by name. Names are
/// case-sensitive.
#[derive(Debug, Default)]
pub struct FunctionLibrary {
  known_functions: HashMap<String, Function>,
}

impl Arity {
  pub fn accepts(self, n: usize) -> bool {
    match self {
      Arity::Exactly(k) => n == k,
      Arity::Between(lo, hi) => lo <= n && n <= hi,
      Arity::AtLeast(lo) => n >= lo,
    }
  }
}

impl Display for Arity {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Arity::Exactly(k) => write!(f, "{k}"),
      Arity::Between(lo, hi) => write!(f, "{lo} to {hi}"),
      Arity::AtLeast(lo) => write!(f, "at least {lo}"),
    }
  }
}

impl Function {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn arity(&self) -> Arity {
    self.arity
  }

  pub fn has_derivative(&self) -> bool {
    self.derivative_rule.is_some()
  }

  /// Calls the function on already-evaluated arguments.
  pub fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
    if !self.arity.accepts(args.len()) {
      return Err(EvalError::ArityMismatch {
        function: self.name.clone(),
        expected: self.arity,
        actual: args.len(),
      });
    }
    (self.body)(args)
  }

  /// Differentiates a call to this function with the given argument
  /// expressions.
  pub fn differentiate(&self, args: &[Expr], engine: &DerivativeEngine) -> Result<Expr, SymbolicError> {
    if !self.arity.accepts(args.len()) {
      return Err(SymbolicError::ArityMismatch {
        function: self.name.clone(),
        expected: self.arity,
        actual: args.len(),
      });
    }
    let Some(derivative_rule) = &self.derivative_rule else {
      return Err(SymbolicError::UnknownDerivative(self.name.clone()));
    };
    derivative_rule(args, engine)
  }
}

impl Debug for Function {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "Function {{ name: {:?}, arity: {:?}, body: ... }}", self.name, self.arity)
  }
}

impl FunctionBuilder {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_owned(),
      arity: Arity::Exactly(1),
      body: None,
      derivative_rule: None,
    }
  }

  /// A real function of one real argument.
  pub fn unary(self, f: fn(f64) -> f64) -> Self {
    self.real(Arity::Exactly(1), move |args| Ok(f(args[0])))
  }

  /// A real function of two real arguments.
  pub fn binary(self, f: fn(f64, f64) -> f64) -> Self {
    self.real(Arity::Exactly(2), move |args| Ok(f(args[0], args[1])))
  }

  /// A real-valued function whose arguments must all be scalars. The
  /// body is only called with an argument count accepted by `arity`.
  pub fn real<F>(self, arity: Arity, f: F) -> Self
  where F: Fn(&[f64]) -> Result<f64, EvalError> + Send + Sync + 'static {
    let name = self.name.clone();
    self.values(arity, move |args| {
      let scalars = args.iter().map(|v| v.expect_scalar(&name)).collect::<Result<Vec<_>, _>>()?;
      f(&scalars).map(Value::Scalar)
    })
  }

  /// A function over arbitrary values.
  pub fn values<F>(mut self, arity: Arity, f: F) -> Self
  where F: Fn(&[Value]) -> Result<Value, EvalError> + Send + Sync + 'static {
    self.arity = arity;
    self.body = Some(Box::new(f));
    self
  }

  pub fn derivative<F>(mut self, rule: F) -> Self
  where F: Fn(&[Expr], &DerivativeEngine<'_>) -> Result<Expr, SymbolicError> + Send + Sync + 'static {
    self.derivative_rule = Some(Box::new(rule));
    self
  }

  /// Derivative of a one-argument function by the chain rule.
  /// `outer` maps the argument `u` to `f'(u)`.
  pub fn chain_rule<F>(self, outer: F) -> Self
  where F: Fn(&Expr) -> Expr + Send + Sync + 'static {
    self.derivative(move |args, engine| {
      let arg = &args[0];
      let arg_deriv = engine.differentiate(arg)?;
      Ok(Expr::mul(outer(arg), arg_deriv))
    })
  }

  /// Marks the function as piecewise constant, so its derivative is
  /// zero wherever it exists.
  pub fn piecewise_constant(self) -> Self {
    self.derivative(|_, _| Ok(Expr::Number(0.0)))
  }

  pub fn build(self) -> Function {
    let name = self.name;
    let body = self.body.unwrap_or_else(|| {
      panic!("Function {name} was built without a body");
    });
    Function {
      name,
      arity: self.arity,
      body,
      derivative_rule: self.derivative_rule,
    }
  }
}

impl FunctionLibrary {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      known_functions: HashMap::with_capacity(capacity),
    }
  }

  /// The process-wide library of built-in functions.
  pub fn global() -> &'static FunctionLibrary {
    &GLOBAL_LIBRARY
  }

  pub fn insert(&mut self, func: Function) {
    self.known_functions.insert(func.name().to_owned(), func);
  }

  pub fn get(&self, name: &str) -> Option<&Function> {
    self.known_functions.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.known_functions.contains_key(name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.known_functions.keys().map(String::as_str)
  }
}

impl FromIterator<Function> for FunctionLibrary {
  fn from_iter<I: IntoIterator<Item = Function>>(iter: I) -> Self {
    let iter = iter.into_iter();
    let (len_bound, _) = iter.size_hint();
    let mut table = Self::with_capacity(len_bound);
    for func in iter {
      table.insert(func);
    }
    table
  }
}

pub fn build_function_library() -> FunctionLibrary {
  let mut library = FunctionLibrary::new();
  arithmetic::append_arithmetic_functions(&mut library);
  elementary::append_elementary_functions(&mut library);
  special::append_special_functions(&mut library);
  statistics::append_statistical_functions(&mut library);
  linear::append_linear_functions(&mut library);
  library
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_arity() {
    assert!(Arity::Exactly(2).accepts(2));
    assert!(!Arity::Exactly(2).accepts(1));
    assert!(Arity::Between(1, 3).accepts(3));
    assert!(!Arity::Between(1, 3).accepts(0));
    assert!(Arity::AtLeast(1).accepts(7));
    assert_eq!(Arity::Between(1, 2).to_string(), "1 to 2");
  }

  #[test]
  fn test_call_checks_arity() {
    let f = FunctionBuilder::new("double").unary(|x| 2.0 * x).build();
    assert_eq!(f.call(&[Value::Scalar(2.0)]).unwrap(), Value::Scalar(4.0));
    assert_eq!(
      f.call(&[]).unwrap_err(),
      EvalError::ArityMismatch { function: String::from("double"), expected: Arity::Exactly(1), actual: 0 },
    );
  }

  #[test]
  fn test_real_rejects_vectors() {
    let f = FunctionBuilder::new("double").unary(|x| 2.0 * x).build();
    let err = f.call(&[Value::Vector(vec![1.0])]).unwrap_err();
    assert!(matches!(err, EvalError::TypeMismatch { .. }));
  }

  #[test]
  fn test_global_library_contents() {
    let library = FunctionLibrary::global();
    for name in [
      "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh", "log", "ln", "log10",
      "sqrt", "abs", "exp", "pow", "floor", "ceil", "round", "gamma", "erf", "besselj0",
      "fresnelS", "fresnelC", "ellipticK", "normalPDF", "normalCDF", "factorial", "binomial",
      "dot", "cross", "det", "trace", "+", "-", "*", "/", "^", "negate", "=", "vector",
    ] {
      assert!(library.contains(name), "missing {name}");
    }
    assert!(!library.contains("Sin"));
  }
}
