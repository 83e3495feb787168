
/// The associativity of an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Associativity {
  left_assoc: bool,
  right_assoc: bool,
}

impl Associativity {
  /// `a - b - c` means `(a - b) - c`.
  pub const LEFT: Associativity = Associativity {
    left_assoc: true,
    right_assoc: false,
  };
  /// `a ^ b ^ c` means `a ^ (b ^ c)`.
  pub const RIGHT: Associativity = Associativity {
    left_assoc: false,
    right_assoc: true,
  };
  /// Chaining is not allowed without explicit parentheses.
  pub const NONE: Associativity = Associativity {
    left_assoc: false,
    right_assoc: false,
  };
  /// Grouping does not affect the result, so either side may nest
  /// without parentheses. Parses as left-associative.
  pub const FULL: Associativity = Associativity {
    left_assoc: true,
    right_assoc: true,
  };

  pub const fn is_left_assoc(self) -> bool {
    self.left_assoc
  }

  pub const fn is_right_assoc(self) -> bool {
    self.right_assoc
  }
}
