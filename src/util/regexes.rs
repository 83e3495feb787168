
//! Module containing generally useful regular expressions.

use regex::Regex;
use once_cell::sync::Lazy;

pub static WHITESPACE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapses runs of whitespace to a single space and trims both ends.
pub fn collapse_whitespace(input: &str) -> String {
  WHITESPACE_RE.replace_all(input, " ").trim().to_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("  x  +\t 1 \n"), "x + 1");
    assert_eq!(collapse_whitespace(""), "");
  }
}
