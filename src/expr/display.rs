
//! Precedence-aware rendering of expressions back to source text.
//! The output reparses to an equal tree, up to regrouping of
//! fully-associative operators.

use super::{Expr, names};
use super::parser::OPERATORS;
use crate::parsing::operator::{InfixProperties, Precedence};

use std::fmt::{self, Display, Formatter};

/// Precedence of atoms and ordinary function calls, which never need
/// parentheses.
const ATOM_PRECEDENCE: Precedence = Precedence::from_raw(u64::MAX);

impl Display for Expr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Expr::Number(n) => write_number(f, *n),
      Expr::Var(name) => write!(f, "{name}"),
      Expr::Call(name, args) => {
        if let Some((op, infix)) = binary_operator(name, args) {
          let (left, right) = (&args[0], &args[1]);
          write_operand(f, left, infix.left_precedence())?;
          if name == names::POW {
            write!(f, "{op}")?;
          } else {
            write!(f, " {op} ")?;
          }
          write_operand(f, right, infix.right_precedence())
        } else if let Some(prec) = negation_precedence(name, args) {
          write!(f, "-")?;
          let arg = &args[0];
          if precedence_of(arg) < prec || starts_with_minus(arg) {
            write!(f, "({arg})")
          } else {
            write!(f, "{arg}")
          }
        } else if name == names::VECTOR {
          write!(f, "[")?;
          write_comma_separated(f, args)?;
          write!(f, "]")
        } else {
          write!(f, "{name}(")?;
          write_comma_separated(f, args)?;
          write!(f, ")")
        }
      }
    }
  }
}

fn write_number(f: &mut Formatter<'_>, n: f64) -> fmt::Result {
  if n.is_nan() {
    write!(f, "NaN")
  } else if n.is_infinite() {
    write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
  } else if n == 0.0 {
    // Normalizes -0.
    write!(f, "0")
  } else {
    write!(f, "{n}")
  }
}

fn write_operand(f: &mut Formatter<'_>, expr: &Expr, min_prec: Precedence) -> fmt::Result {
  if precedence_of(expr) < min_prec {
    write!(f, "({expr})")
  } else {
    write!(f, "{expr}")
  }
}

fn write_comma_separated(f: &mut Formatter<'_>, args: &[Expr]) -> fmt::Result {
  for (i, arg) in args.iter().enumerate() {
    if i > 0 {
      write!(f, ", ")?;
    }
    write!(f, "{arg}")?;
  }
  Ok(())
}

fn binary_operator(name: &str, args: &[Expr]) -> Option<(&'static str, &'static InfixProperties)> {
  if args.len() != 2 {
    return None;
  }
  let op = OPERATORS.get_by_function_name(name)?;
  let infix = op.fixity().as_infix()?;
  (infix.function_name() == name).then_some((op.operator_name(), infix))
}

fn negation_precedence(name: &str, args: &[Expr]) -> Option<Precedence> {
  if args.len() != 1 {
    return None;
  }
  let op = OPERATORS.get_by_function_name(name)?;
  let prefix = op.fixity().as_prefix()?;
  (prefix.function_name() == name).then_some(prefix.precedence())
}

fn precedence_of(expr: &Expr) -> Precedence {
  match expr {
    Expr::Number(n) if *n < 0.0 => {
      negation_precedence(names::NEGATE, std::slice::from_ref(expr)).unwrap_or(ATOM_PRECEDENCE)
    }
    Expr::Number(_) | Expr::Var(_) => ATOM_PRECEDENCE,
    Expr::Call(name, args) => {
      if let Some((_, infix)) = binary_operator(name, args) {
        infix.precedence()
      } else if let Some(prec) = negation_precedence(name, args) {
        prec
      } else {
        ATOM_PRECEDENCE
      }
    }
  }
}

fn starts_with_minus(expr: &Expr) -> bool {
  match expr {
    Expr::Number(n) => *n < 0.0,
    Expr::Call(name, args) => name == names::NEGATE && args.len() == 1,
    Expr::Var(_) => false,
  }
}
