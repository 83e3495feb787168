
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign};

/// A byte position in an expression string, used to point error
/// messages at the offending input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceOffset(pub usize);

/// A half-open range of source offsets. `start` is included and `end`
/// is excluded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
  pub start: SourceOffset,
  pub end: SourceOffset,
}

impl Span {
  pub fn new(start: SourceOffset, end: SourceOffset) -> Self {
    Self { start, end }
  }

  /// The smallest span covering both `self` and `other`.
  pub fn merge(self, other: Span) -> Span {
    Span {
      start: self.start.min(other.start),
      end: self.end.max(other.end),
    }
  }

  pub fn len(&self) -> usize {
    self.end.0.saturating_sub(self.start.0)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl From<usize> for SourceOffset {
  fn from(i: usize) -> Self {
    SourceOffset(i)
  }
}

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Add<usize> for SourceOffset {
  type Output = Self;

  fn add(self, rhs: usize) -> Self::Output {
    Self(self.0 + rhs)
  }
}

impl AddAssign<usize> for SourceOffset {
  fn add_assign(&mut self, rhs: usize) {
    self.0 += rhs
  }
}

impl Display for Span {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.len() <= 1 {
      write!(f, "position {}", self.start)
    } else {
      write!(f, "positions {}-{}", self.start, self.end)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn span(start: usize, end: usize) -> Span {
    Span::new(SourceOffset(start), SourceOffset(end))
  }

  #[test]
  fn test_merge() {
    assert_eq!(span(2, 4).merge(span(6, 9)), span(2, 9));
    assert_eq!(span(6, 9).merge(span(2, 4)), span(2, 9));
    assert_eq!(span(1, 8).merge(span(3, 4)), span(1, 8));
  }

  #[test]
  fn test_display() {
    assert_eq!(span(3, 4).to_string(), "position 3");
    assert_eq!(span(3, 7).to_string(), "positions 3-7");
  }
}
