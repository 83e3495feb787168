
//! Rewriting of spoken phrases into expression notation.
//!
//! The rewrite rules run in a fixed order, each one seeing the output
//! of the rules before it. Specific phrases precede the generic ones
//! that would otherwise consume part of them: `x squared` before
//! `squared`, `arc sine of` before `sine of`, `natural log of` and
//! `log base N of` before `log of`.

use crate::util::regex_opt_with;
use crate::util::regexes::collapse_whitespace;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Argument of a spoken function: a name, number or power.
const ARG: &str = r"([a-z0-9_.^]+)";

/// A decimal number, as left behind by the digit rules.
const NUM: &str = r"([0-9]+(?:\.[0-9]+)?)";

const DIGIT_WORDS: [&str; 11] = [
  "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

static DIGIT_WORD_RE: Lazy<Regex> =
  Lazy::new(|| regex_opt_with(DIGIT_WORDS, |s| format!(r"\b{s}\b")));

static OPERATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*([+\-*/=])\s*").unwrap());
static CARET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\^\s*").unwrap());

static RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
  let rule = RewriteRule::new;
  vec![
    // Shapes
    rule(&format!(r"\bcircle (?:with )?radius {NUM}"), "x^2 + y^2 = ${1}^2"),
    rule(r"\bparabola\b", "y = x^2"),
    rule(r"\bstraight line\b", "y = x"),
    rule(&format!(r"\bhorizontal line at {NUM}"), "y = ${1}"),
    rule(&format!(r"\bvertical line at {NUM}"), "x = ${1}"),
    // Variable names the recognizer mishears
    rule(r"\bwhy\b", "y"),
    rule(r"\bex\b", "x"),
    // Relations
    rule(r"\b(?:is equal to|equals)\b", "="),
    // Powers
    rule(r"\b([a-z0-9_.]+) squared\b", "${1}^2"),
    rule(r"\b([a-z0-9_.]+) cubed\b", "${1}^3"),
    rule(&format!(r"\s*\bto the power of {NUM}"), "^${1}"),
    rule(&format!(r"\be to the {ARG}"), "e^${1}"),
    rule(&format!(r"\s*\bto the {NUM}(?:st|nd|rd|th)?(?: power)?\b"), "^${1}"),
    rule(r"\s*\bsquared\b", "^2"),
    rule(r"\s*\bcubed\b", "^3"),
    // Functions
    rule(&format!(r"\b(?:arc ?|inverse )sine of {ARG}"), "asin(${1})"),
    rule(&format!(r"\b(?:arc ?|inverse )cosine of {ARG}"), "acos(${1})"),
    rule(&format!(r"\b(?:arc ?|inverse )tangent of {ARG}"), "atan(${1})"),
    rule(&format!(r"\bsine of {ARG}"), "sin(${1})"),
    rule(&format!(r"\bcosine of {ARG}"), "cos(${1})"),
    rule(&format!(r"\btangent of {ARG}"), "tan(${1})"),
    rule(&format!(r"\bnatural log of {ARG}"), "ln(${1})"),
    rule(&format!(r"\blog base {NUM} of {ARG}"), "log(${2}, ${1})"),
    rule(&format!(r"\blog of {ARG}"), "log(${1})"),
    rule(&format!(r"\babsolute value of {ARG}"), "abs(${1})"),
    rule(&format!(r"\bsquare root of {ARG}"), "sqrt(${1})"),
    rule(&format!(r"\bcube root of {ARG}"), "cbrt(${1})"),
    rule(r"\beuler's number\b", "e"),
    // Arithmetic
    rule(r"\bplus\b", "+"),
    rule(r"\bminus\b", "-"),
    rule(r"\b(?:times|multiplied by)\b", "*"),
    rule(r"\b(?:divided by|over)\b", "/"),
  ]
});

#[derive(Debug)]
struct RewriteRule {
  pattern: Regex,
  replacement: &'static str,
}

impl RewriteRule {
  fn new(pattern: &str, replacement: &'static str) -> Self {
    let pattern = Regex::new(pattern).unwrap_or_else(|err| {
      panic!("Invalid rewrite rule {pattern}: {err}");
    });
    Self { pattern, replacement }
  }

  fn apply(&self, text: &str) -> String {
    self.pattern.replace_all(text, self.replacement).into_owned()
  }
}

/// Converts a spoken phrase into expression notation. Words that no
/// rule recognizes are kept as they are, so this never fails.
pub fn voice_to_expression(text: &str) -> String {
  let text = text.to_lowercase();
  let text = DIGIT_WORD_RE.replace_all(text.trim(), |caps: &Captures| {
    let index = DIGIT_WORDS.iter().position(|w| *w == &caps[0]).unwrap_or_default();
    index.to_string()
  });
  let text = RULES.iter().fold(text.into_owned(), |text, rule| rule.apply(&text));
  let text = OPERATOR_RE.replace_all(&text, " ${1} ");
  let text = CARET_RE.replace_all(&text, "^");
  collapse_whitespace(&text)
}

/// Converts each non-blank line of `text` independently, in order.
pub fn voice_lines_to_expressions(text: &str) -> Vec<String> {
  text.lines()
    .filter(|line| !line.trim().is_empty())
    .map(voice_to_expression)
    .collect()
}
