
//! Simplifiers which flatten sums and products into lists of terms
//! and factors, merge like items, and rebuild the result in a
//! canonical shape.

use super::Simplifier;
use crate::expr::{Expr, names};

/// Combines like terms in sums and differences. Terms are like when
/// their non-numeric factors agree, regardless of order. Also rewrites
/// `sin(u)^2 + cos(u)^2` to `1`.
#[derive(Debug, Default)]
pub struct TermCollector {
  _priv: (),
}

/// Merges repeated factors of a product into powers, and gathers the
/// numeric coefficient at the front.
#[derive(Debug, Default)]
pub struct FactorCollector {
  _priv: (),
}

/// A product split into its numeric coefficient and its remaining
/// factors.
#[derive(Debug, Clone, PartialEq)]
struct Term {
  coefficient: f64,
  factors: Vec<Expr>,
}

impl TermCollector {
  pub fn new() -> Self {
    Self::default()
  }
}

impl FactorCollector {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Simplifier for TermCollector {
  fn simplify_expr_part(&self, expr: Expr) -> Expr {
    if expr.as_binary(names::ADD).is_none() && expr.as_binary(names::SUB).is_none() {
      return expr;
    }
    let mut summands = Vec::new();
    flatten_sum(expr, 1.0, &mut summands);
    let terms = summands.into_iter().map(|(sign, e)| {
      let mut term = Term::from_expr(e);
      term.coefficient *= sign;
      term
    }).collect();
    let terms = combine_like_terms(apply_pythagorean_identity(terms));
    rebuild_sum(terms)
  }
}

impl Simplifier for FactorCollector {
  fn simplify_expr_part(&self, expr: Expr) -> Expr {
    if expr.as_binary(names::MUL).is_none() {
      return expr;
    }
    let term = Term::from_expr(expr);
    let mut powers: Vec<(Expr, f64)> = Vec::new();
    for factor in term.factors {
      let (base, exponent) = split_power(factor);
      match powers.iter_mut().find(|(b, _)| *b == base) {
        Some((_, e)) => *e += exponent,
        None => powers.push((base, exponent)),
      }
    }
    let factors = powers.into_iter()
      .filter(|(_, exponent)| *exponent != 0.0)
      .map(|(base, exponent)| {
        if exponent == 1.0 { base } else { Expr::pow(base, Expr::Number(exponent)) }
      })
      .collect();
    Term { coefficient: term.coefficient, factors }.into_expr()
  }
}

impl Term {
  fn from_expr(expr: Expr) -> Term {
    let mut term = Term { coefficient: 1.0, factors: Vec::new() };
    term.absorb(expr);
    term
  }

  fn absorb(&mut self, expr: Expr) {
    match expr {
      Expr::Number(n) => self.coefficient *= n,
      Expr::Call(name, mut args) if name == names::MUL && args.len() == 2 => {
        let b = args.swap_remove(1);
        let a = args.swap_remove(0);
        self.absorb(a);
        self.absorb(b);
      }
      Expr::Call(name, mut args) if name == names::NEGATE && args.len() == 1 => {
        self.coefficient = -self.coefficient;
        self.absorb(args.swap_remove(0));
      }
      other => self.factors.push(other),
    }
  }

  fn is_like(&self, other: &Term) -> bool {
    self.factors.len() == other.factors.len() && sorted_keys(&self.factors) == sorted_keys(&other.factors)
  }

  /// The product of the factors, without the coefficient.
  fn product(factors: Vec<Expr>) -> Option<Expr> {
    factors.into_iter().reduce(Expr::mul)
  }

  fn into_expr(self) -> Expr {
    if self.coefficient == 0.0 {
      return Expr::Number(0.0);
    }
    match Term::product(self.factors) {
      None => Expr::Number(self.coefficient),
      Some(p) if self.coefficient == 1.0 => p,
      Some(p) if self.coefficient == -1.0 => Expr::negate(p),
      Some(p) => Expr::mul(Expr::Number(self.coefficient), p),
    }
  }

  /// Renders the term without its sign, for use after a `+` or `-`.
  fn into_unsigned_expr(self) -> Expr {
    Term { coefficient: self.coefficient.abs(), factors: self.factors }.into_expr()
  }
}

fn sorted_keys(factors: &[Expr]) -> Vec<String> {
  let mut keys: Vec<String> = factors.iter().map(Expr::to_string).collect();
  keys.sort();
  keys
}

fn flatten_sum(expr: Expr, sign: f64, out: &mut Vec<(f64, Expr)>) {
  match expr {
    Expr::Call(name, mut args) if args.len() == 2 && (name == names::ADD || name == names::SUB) => {
      let b = args.swap_remove(1);
      let a = args.swap_remove(0);
      flatten_sum(a, sign, out);
      flatten_sum(b, if name == names::SUB { -sign } else { sign }, out);
    }
    Expr::Call(name, mut args) if name == names::NEGATE && args.len() == 1 => {
      flatten_sum(args.swap_remove(0), -sign, out);
    }
    other => out.push((sign, other)),
  }
}

fn split_power(expr: Expr) -> (Expr, f64) {
  if let Some((base, exponent)) = expr.as_binary(names::POW) {
    if let Some(n) = exponent.as_number() {
      return (base.clone(), n);
    }
  }
  (expr, 1.0)
}

/// If `factors` is exactly `f(u)^2`, returns `u`.
fn squared_call<'a>(factors: &'a [Expr], f: &str) -> Option<&'a Expr> {
  let [factor] = factors else {
    return None;
  };
  let (base, exponent) = factor.as_binary(names::POW)?;
  if !exponent.is_number(2.0) {
    return None;
  }
  base.as_unary(f)
}

fn apply_pythagorean_identity(mut terms: Vec<Term>) -> Vec<Term> {
  let mut i = 0;
  while i < terms.len() {
    let partner = squared_call(&terms[i].factors, "sin").and_then(|u| {
      terms.iter().position(|t| {
        t.coefficient == terms[i].coefficient && squared_call(&t.factors, "cos") == Some(u)
      })
    });
    if let Some(j) = partner {
      terms[i].factors.clear();
      terms.remove(j);
    }
    i += 1;
  }
  terms
}

/// Merges like terms, keeping the first occurrence's position. The
/// constant term, if any, is moved to the end.
fn combine_like_terms(terms: Vec<Term>) -> Vec<Term> {
  let mut combined: Vec<Term> = Vec::with_capacity(terms.len());
  for term in terms {
    match combined.iter_mut().find(|t| t.is_like(&term)) {
      Some(existing) => existing.coefficient += term.coefficient,
      None => combined.push(term),
    }
  }
  combined.retain(|t| t.coefficient != 0.0);
  let (mut variable, constant): (Vec<_>, Vec<_>) = combined.into_iter().partition(|t| !t.factors.is_empty());
  variable.extend(constant);
  variable
}

fn rebuild_sum(terms: Vec<Term>) -> Expr {
  let mut terms = terms.into_iter();
  let Some(first) = terms.next() else {
    return Expr::Number(0.0);
  };
  terms.fold(first.into_expr(), |acc, term| {
    if term.coefficient < 0.0 {
      Expr::sub(acc, term.into_unsigned_expr())
    } else {
      Expr::add(acc, term.into_unsigned_expr())
    }
  })
}
