
//! Rewriting passes that tidy up expressions, most importantly the raw
//! output of the derivative engine.

mod folding;
mod identity;
mod terms;

pub use folding::ConstantFolder;
pub use identity::IdentitySimplifier;
pub use terms::{FactorCollector, TermCollector};

use crate::expr::Expr;
use crate::expr::walker::postorder_walk_ok;

/// Maximum number of passes of the default pipeline. Each pass is a
/// full postorder traversal; simplification stops early once a pass
/// leaves the expression unchanged.
pub const MAX_PASSES: usize = 8;

pub trait Simplifier {
  /// Simplifies a single node, whose children have already been
  /// simplified.
  fn simplify_expr_part(&self, expr: Expr) -> Expr;

  fn simplify_expr(&self, expr: Expr) -> Expr {
    postorder_walk_ok(expr, |e| self.simplify_expr_part(e))
  }
}

/// Runs several simplifiers, in order, at each node.
pub struct ChainedSimplifier {
  simplifiers: Vec<Box<dyn Simplifier + Send + Sync>>,
}

/// Repeats the inner simplifier until a fixpoint is reached, or at most
/// `max_passes` times.
#[derive(Debug)]
pub struct RepeatedSimplifier<S> {
  inner: S,
  max_passes: usize,
}

impl ChainedSimplifier {
  pub fn new(simplifiers: Vec<Box<dyn Simplifier + Send + Sync>>) -> Self {
    Self { simplifiers }
  }
}

impl Simplifier for ChainedSimplifier {
  fn simplify_expr_part(&self, expr: Expr) -> Expr {
    self.simplifiers.iter().fold(expr, |expr, s| s.simplify_expr_part(expr))
  }
}

impl<S> RepeatedSimplifier<S> {
  pub fn new(inner: S, max_passes: usize) -> Self {
    Self { inner, max_passes }
  }
}

impl<S: Simplifier> Simplifier for RepeatedSimplifier<S> {
  fn simplify_expr_part(&self, expr: Expr) -> Expr {
    self.inner.simplify_expr_part(expr)
  }

  fn simplify_expr(&self, mut expr: Expr) -> Expr {
    for _ in 0..self.max_passes {
      let next = self.inner.simplify_expr(expr.clone());
      if next == expr {
        break;
      }
      expr = next;
    }
    expr
  }
}

pub fn default_simplifier() -> RepeatedSimplifier<ChainedSimplifier> {
  let chain = ChainedSimplifier::new(vec![
    Box::new(ConstantFolder::new()),
    Box::new(IdentitySimplifier::new()),
    Box::new(FactorCollector::new()),
    Box::new(TermCollector::new()),
  ]);
  RepeatedSimplifier::new(chain, MAX_PASSES)
}
