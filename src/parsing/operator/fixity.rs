
//! Fixity declarations for operators.

use super::associativity::Associativity;
use super::precedence::Precedence;

/// An operator can be prefix, infix, or both. `-` is the usual
/// example of an operator that is both. A `Fixity` always has at least
/// one of the two.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixity {
  as_prefix: Option<PrefixProperties>,
  as_infix: Option<InfixProperties>,
}

/// Unlike prefix operators, infix operators have both associativity
/// and precedence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfixProperties {
  function_name: String,
  assoc: Associativity,
  prec: Precedence,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixProperties {
  function_name: String,
  prec: Precedence,
}

/// Intermediate builder state for a [`Fixity`] that has not yet been
/// given a prefix or infix declaration.
#[derive(Debug)]
pub struct EmptyFixity {
  data: Fixity,
}

impl Fixity {
  // allow: EmptyFixity is only a typechecked Fixity under
  // construction, used in a fluent builder style.
  #[allow(clippy::new_ret_no_self)]
  pub fn new() -> EmptyFixity {
    EmptyFixity {
      data: Fixity {
        as_prefix: None,
        as_infix: None,
      },
    }
  }

  pub fn with_prefix(mut self, function_name: impl Into<String>, prec: Precedence) -> Fixity {
    self.as_prefix = Some(PrefixProperties { function_name: function_name.into(), prec });
    self
  }

  pub fn with_infix(mut self, function_name: impl Into<String>, assoc: Associativity, prec: Precedence) -> Fixity {
    self.as_infix = Some(InfixProperties { function_name: function_name.into(), assoc, prec });
    self
  }

  pub fn as_prefix(&self) -> Option<&PrefixProperties> {
    self.as_prefix.as_ref()
  }

  pub fn as_infix(&self) -> Option<&InfixProperties> {
    self.as_infix.as_ref()
  }

  pub fn is_prefix(&self) -> bool {
    self.as_prefix.is_some()
  }

  pub fn is_infix(&self) -> bool {
    self.as_infix.is_some()
  }
}

impl EmptyFixity {
  pub fn with_prefix(self, function_name: impl Into<String>, prec: Precedence) -> Fixity {
    self.data.with_prefix(function_name, prec)
  }

  pub fn with_infix(self, function_name: impl Into<String>, assoc: Associativity, prec: Precedence) -> Fixity {
    self.data.with_infix(function_name, assoc, prec)
  }
}

impl InfixProperties {
  pub fn function_name(&self) -> &str {
    &self.function_name
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  /// The precedence an operand must have to appear on the left of
  /// this operator without parentheses.
  pub fn left_precedence(&self) -> Precedence {
    if self.assoc.is_left_assoc() {
      self.prec
    } else {
      self.prec.incremented()
    }
  }

  /// The precedence an operand must have to appear on the right of
  /// this operator without parentheses.
  pub fn right_precedence(&self) -> Precedence {
    if self.assoc.is_right_assoc() {
      self.prec
    } else {
      self.prec.incremented()
    }
  }
}

impl PrefixProperties {
  pub fn function_name(&self) -> &str {
    &self.function_name
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }
}
