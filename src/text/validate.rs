
//! Cheap syntactic screening of candidate expressions.

use once_cell::sync::Lazy;
use regex::Regex;

static ALLOWED_CHARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9x y+\-*/^()=.,\s]+$").unwrap());
static STRUCTURE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+\-*/^=()]").unwrap());

/// A quick filter for machine-extracted candidates, weaker than a
/// parse. Accepts strings which use only digits, `x`, `y`, operators,
/// parentheses and separators, contain at least one operator or
/// parenthesis, and have as many `(` as `)`. The order of the
/// parentheses is not checked.
pub fn is_syntactically_valid(expression: &str) -> bool {
  let opens = expression.chars().filter(|&c| c == '(').count();
  let closes = expression.chars().filter(|&c| c == ')').count();
  ALLOWED_CHARS_RE.is_match(expression) && opens == closes && STRUCTURE_RE.is_match(expression)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_accepts() {
    assert!(is_syntactically_valid("x + y"));
    assert!(is_syntactically_valid("y = 2 * x^2 - 1.5"));
    assert!(is_syntactically_valid("(x)"));
  }

  #[test]
  fn test_rejects() {
    assert!(!is_syntactically_valid("(x + y"));
    assert!(!is_syntactically_valid("x + y + z"));
    assert!(!is_syntactically_valid("sin(x)"));
    assert!(!is_syntactically_valid("42"));
    assert!(!is_syntactically_valid(""));
  }

  #[test]
  fn test_counts_parentheses_without_checking_order() {
    assert!(is_syntactically_valid(")x + y("));
  }
}
