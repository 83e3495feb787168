
mod precedence;
mod associativity;
mod fixity;
mod table;

pub use precedence::Precedence;
pub use associativity::Associativity;
pub use fixity::{Fixity, EmptyFixity, InfixProperties, PrefixProperties};
pub use table::OperatorTable;

/// An operator as it appears in source text, together with the
/// function names it compiles to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
  operator_name: String,
  fixity: Fixity,
}

impl Operator {
  pub fn new(name: impl Into<String>, fixity: Fixity) -> Self {
    Operator {
      operator_name: name.into(),
      fixity,
    }
  }

  /// The name of the operator, as written by the user.
  pub fn operator_name(&self) -> &str {
    &self.operator_name
  }

  pub fn fixity(&self) -> &Fixity {
    &self.fixity
  }

  pub fn function_names(&self) -> impl Iterator<Item = &str> {
    [
      self.fixity.as_prefix().map(|props| props.function_name()),
      self.fixity.as_infix().map(|props| props.function_name()),
    ].into_iter().flatten()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn infix(assoc: Associativity) -> Operator {
    Operator::new("#", Fixity::new().with_infix("#", assoc, Precedence::new(1)))
  }

  #[test]
  fn test_left_assoc_precedence() {
    let op = infix(Associativity::LEFT);
    assert_eq!(op.fixity().as_infix().unwrap().left_precedence(), Precedence::from_raw(10));
    assert_eq!(op.fixity().as_infix().unwrap().right_precedence(), Precedence::from_raw(11));
  }

  #[test]
  fn test_right_assoc_precedence() {
    let op = infix(Associativity::RIGHT);
    assert_eq!(op.fixity().as_infix().unwrap().left_precedence(), Precedence::from_raw(11));
    assert_eq!(op.fixity().as_infix().unwrap().right_precedence(), Precedence::from_raw(10));
  }

  #[test]
  fn test_full_assoc_precedence() {
    let op = infix(Associativity::FULL);
    assert_eq!(op.fixity().as_infix().unwrap().left_precedence(), Precedence::from_raw(10));
    assert_eq!(op.fixity().as_infix().unwrap().right_precedence(), Precedence::from_raw(10));
  }

  #[test]
  fn test_none_assoc_precedence() {
    let op = infix(Associativity::NONE);
    assert_eq!(op.fixity().as_infix().unwrap().left_precedence(), Precedence::from_raw(11));
    assert_eq!(op.fixity().as_infix().unwrap().right_precedence(), Precedence::from_raw(11));
  }

  #[test]
  fn test_function_names() {
    let op = Operator::new(
      "-",
      Fixity::new()
        .with_prefix("negate", Precedence::new(197))
        .with_infix("-", Associativity::LEFT, Precedence::new(180)),
    );
    assert_eq!(op.function_names().collect::<Vec<_>>(), vec!["negate", "-"]);
    assert!(op.fixity().is_prefix());
    assert!(op.fixity().is_infix());
  }
}
