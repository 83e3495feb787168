
//! Trigonometric, hyperbolic, logarithmic, and rounding functions.

use super::{Arity, FunctionBuilder, FunctionLibrary, Function};
use crate::expr::Expr;

use std::f64::consts;

pub fn append_elementary_functions(library: &mut FunctionLibrary) {
  for f in trigonometric() {
    library.insert(f);
  }
  for f in hyperbolic() {
    library.insert(f);
  }
  for f in logarithmic() {
    library.insert(f);
  }
  for f in algebraic() {
    library.insert(f);
  }
  for f in rounding() {
    library.insert(f);
  }
}

fn call(name: &str, arg: &Expr) -> Expr {
  Expr::call(name, vec![arg.clone()])
}

fn num(x: f64) -> Expr {
  Expr::Number(x)
}

fn square(u: &Expr) -> Expr {
  Expr::pow(u.clone(), num(2.0))
}

/// `1 / sqrt(inner)`
fn recip_sqrt(inner: Expr) -> Expr {
  Expr::div(num(1.0), Expr::call("sqrt", vec![inner]))
}

fn trigonometric() -> Vec<Function> {
  let mut functions = vec![
    FunctionBuilder::new("sin").unary(f64::sin).chain_rule(|u| call("cos", u)).build(),
    FunctionBuilder::new("cos").unary(f64::cos).chain_rule(|u| Expr::negate(call("sin", u))).build(),
    FunctionBuilder::new("tan").unary(f64::tan).chain_rule(|u| Expr::div(num(1.0), square(&call("cos", u)))).build(),
    FunctionBuilder::new("sec").unary(|x| 1.0 / x.cos())
      .chain_rule(|u| Expr::mul(call("sec", u), call("tan", u))).build(),
    FunctionBuilder::new("csc").unary(|x| 1.0 / x.sin())
      .chain_rule(|u| Expr::negate(Expr::mul(call("csc", u), call("cot", u)))).build(),
    FunctionBuilder::new("cot").unary(|x| 1.0 / x.tan())
      .chain_rule(|u| Expr::negate(Expr::div(num(1.0), square(&call("sin", u))))).build(),
    FunctionBuilder::new("atan2")
      .binary(f64::atan2)
      .derivative(|args, engine| {
        // d atan2(y, x) = (x dy - y dx) / (x^2 + y^2)
        let (y, x) = (&args[0], &args[1]);
        Ok(Expr::div(
          Expr::sub(
            Expr::mul(x.clone(), engine.differentiate(y)?),
            Expr::mul(y.clone(), engine.differentiate(x)?),
          ),
          Expr::add(square(x), square(y)),
        ))
      })
      .build(),
  ];
  // The inverse functions are also available under their long names.
  for (short, long) in [("asin", "arcsin"), ("acos", "arccos"), ("atan", "arctan")] {
    functions.push(inverse_trig(short));
    functions.push(inverse_trig_named(long, short));
  }
  functions
}

fn inverse_trig(name: &str) -> Function {
  inverse_trig_named(name, name)
}

/// Builds the inverse trigonometric function `kind` under the name
/// `name`.
fn inverse_trig_named(name: &str, kind: &str) -> Function {
  let builder = FunctionBuilder::new(name);
  let builder = match kind {
    "asin" => builder.unary(f64::asin)
      .chain_rule(|u| recip_sqrt(Expr::sub(num(1.0), square(u)))),
    "acos" => builder.unary(f64::acos)
      .chain_rule(|u| Expr::negate(recip_sqrt(Expr::sub(num(1.0), square(u))))),
    _ => builder.unary(f64::atan)
      .chain_rule(|u| Expr::div(num(1.0), Expr::add(num(1.0), square(u)))),
  };
  builder.build()
}

fn hyperbolic() -> Vec<Function> {
  vec![
    FunctionBuilder::new("sinh").unary(f64::sinh).chain_rule(|u| call("cosh", u)).build(),
    FunctionBuilder::new("cosh").unary(f64::cosh).chain_rule(|u| call("sinh", u)).build(),
    FunctionBuilder::new("tanh").unary(f64::tanh)
      .chain_rule(|u| Expr::div(num(1.0), square(&call("cosh", u)))).build(),
    FunctionBuilder::new("asinh").unary(f64::asinh)
      .chain_rule(|u| recip_sqrt(Expr::add(square(u), num(1.0)))).build(),
    FunctionBuilder::new("acosh").unary(f64::acosh)
      .chain_rule(|u| recip_sqrt(Expr::sub(square(u), num(1.0)))).build(),
    FunctionBuilder::new("atanh").unary(f64::atanh)
      .chain_rule(|u| Expr::div(num(1.0), Expr::sub(num(1.0), square(u)))).build(),
  ]
}

fn logarithmic() -> Vec<Function> {
  vec![
    // One argument is the natural logarithm; two is `log(x, base)`.
    FunctionBuilder::new("log")
      .real(Arity::Between(1, 2), |args| {
        Ok(match args {
          [x] => x.ln(),
          [x, base] => x.ln() / base.ln(),
          _ => f64::NAN,
        })
      })
      .derivative(|args, engine| {
        match args {
          [u] => Ok(Expr::div(engine.differentiate(u)?, u.clone())),
          [u, base] => {
            let equivalent_expr = Expr::div(call("ln", u), call("ln", base));
            engine.differentiate(&equivalent_expr)
          }
          _ => Ok(num(f64::NAN)),
        }
      })
      .build(),
    FunctionBuilder::new("ln").unary(f64::ln)
      .derivative(|args, engine| Ok(Expr::div(engine.differentiate(&args[0])?, args[0].clone())))
      .build(),
    FunctionBuilder::new("log10").unary(f64::log10)
      .chain_rule(|u| Expr::div(num(1.0), Expr::mul(u.clone(), num(consts::LN_10)))).build(),
    FunctionBuilder::new("log2").unary(f64::log2)
      .chain_rule(|u| Expr::div(num(1.0), Expr::mul(u.clone(), num(consts::LN_2)))).build(),
    FunctionBuilder::new("exp").unary(f64::exp).chain_rule(|u| call("exp", u)).build(),
  ]
}

fn algebraic() -> Vec<Function> {
  vec![
    FunctionBuilder::new("sqrt").unary(f64::sqrt)
      .chain_rule(|u| Expr::div(num(1.0), Expr::mul(num(2.0), call("sqrt", u)))).build(),
    FunctionBuilder::new("cbrt").unary(f64::cbrt)
      .chain_rule(|u| Expr::div(num(1.0), Expr::mul(num(3.0), square(&call("cbrt", u))))).build(),
    FunctionBuilder::new("abs").unary(f64::abs).chain_rule(|u| call("sign", u)).build(),
    FunctionBuilder::new("pow")
      .binary(f64::powf)
      .derivative(|args, engine| engine.differentiate(&Expr::pow(args[0].clone(), args[1].clone())))
      .build(),
    FunctionBuilder::new("min").real(Arity::AtLeast(1), |args| Ok(fold_nan_propagating(args, f64::min))).build(),
    FunctionBuilder::new("max").real(Arity::AtLeast(1), |args| Ok(fold_nan_propagating(args, f64::max))).build(),
    // Result takes the sign of the divisor.
    FunctionBuilder::new("mod").binary(|x, y| x - y * (x / y).floor()).build(),
  ]
}

fn rounding() -> Vec<Function> {
  vec![
    FunctionBuilder::new("floor").unary(f64::floor).piecewise_constant().build(),
    FunctionBuilder::new("ceil").unary(f64::ceil).piecewise_constant().build(),
    FunctionBuilder::new("round").unary(round_half_up).piecewise_constant().build(),
    FunctionBuilder::new("sign").unary(sign).piecewise_constant().build(),
  ]
}

/// Rounds to the nearest integer, with halves rounded toward positive
/// infinity (`round(-2.5) = -2`).
pub fn round_half_up(x: f64) -> f64 {
  let floor = x.floor();
  if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// `-1`, `0`, or `1`. Zero and NaN are returned unchanged.
pub fn sign(x: f64) -> f64 {
  if x > 0.0 {
    1.0
  } else if x < 0.0 {
    -1.0
  } else {
    x
  }
}

fn fold_nan_propagating(args: &[f64], f: fn(f64, f64) -> f64) -> f64 {
  if args.iter().any(|x| x.is_nan()) {
    return f64::NAN;
  }
  args.iter().copied().reduce(f).unwrap_or(f64::NAN)
}
