
/// The binding strength of an operator. Larger values bind more
/// tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u64);

impl Precedence {
  pub const MIN: Precedence = Precedence(0);

  /// The stored value is ten times the declared value, leaving room
  /// to nudge a side of an infix operator up by one to encode
  /// associativity. See
  /// [`InfixProperties`](super::InfixProperties).
  pub const fn new(n: u64) -> Precedence {
    Precedence(n * 10)
  }

  pub const fn from_raw(n: u64) -> Precedence {
    Precedence(n)
  }

  pub const fn incremented(self) -> Precedence {
    Precedence(self.0 + 1)
  }
}

impl From<u64> for Precedence {
  fn from(n: u64) -> Precedence {
    Precedence::new(n)
  }
}
