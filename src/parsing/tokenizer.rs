
//! Cursor over an input string, used by the expression tokenizer.

use super::source::{SourceOffset, Span};

use regex::{Regex, Captures};
use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
  end: SourceOffset,
}

#[derive(Debug)]
pub struct TokenizerCaptures<'a> {
  captures: Captures<'a>,
  start: SourceOffset,
  end: SourceOffset,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input,
      position: SourceOffset(0),
    }
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances past the next `amount` bytes and returns the skipped
  /// text. Never advances beyond the end of the input.
  pub fn advance(&mut self, mut amount: usize) -> TokenizerMatch<'a> {
    amount = amount.min(self.input.len());

    let start = self.position;
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start,
      end: start + amount,
    }
  }

  pub fn read_literal(&mut self, literal: &str) -> Option<TokenizerMatch<'a>> {
    self.input.starts_with(literal).then(|| {
      self.advance(literal.len())
    })
  }

  /// If the remaining input begins with a match of `regex`, consumes
  /// and returns it.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function panics if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");
    Some(self.advance(m.len()))
  }

  pub fn read_regex_with_captures(&mut self, regex: &Regex) -> Option<TokenizerCaptures<'a>> {
    let captures = regex.captures(self.input)?;
    let whole = captures.get(0).expect("capture group 0 always exists");
    assert_eq!(whole.start(), 0, "Regex must be anchored at the start of the input");
    let m = self.advance(whole.len());
    Some(TokenizerCaptures {
      captures,
      start: m.start,
      end: m.end,
    })
  }

  pub fn consume_spaces(&mut self) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*").unwrap());
    self.read_regex(&RE);
  }
}

impl<'h> TokenizerMatch<'h> {
  pub fn as_str(&self) -> &'h str {
    self.matched_str
  }

  pub fn span(&self) -> Span {
    Span::new(self.start, self.end)
  }
}

impl<'h> TokenizerCaptures<'h> {
  pub fn get(&self, i: usize) -> Option<&'h str> {
    self.captures.get(i).map(|m| m.as_str())
  }

  pub fn span(&self) -> Span {
    Span::new(self.start, self.end)
  }
}
