
use crate::parsing::operator::{Operator, OperatorTable};
use crate::parsing::source::{Span, SourceOffset};
use crate::parsing::tokenizer::TokenizerState;
use crate::util::regex_opt_with;

use regex::Regex;
use once_cell::sync::Lazy;
use thiserror::Error;

use std::num::ParseFloatError;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug)]
pub struct ExprTokenizer<'a> {
  operator_table: &'a OperatorTable,
  operator_regex: Regex,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
  pub data: TokenData,
  pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenData {
  Number(f64),
  Identifier(String),
  Operator(Operator),
  /// A name immediately followed by an opening parenthesis.
  FunctionCallStart(String),
  LeftParen,
  RightParen,
  LeftBracket,
  RightBracket,
  Comma,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum TokenizerError {
  #[error("Unexpected character '{0}' at {1}")]
  UnexpectedChar(char, SourceOffset),
  #[error("Failed to parse number at {1}")]
  ParseNumberError(#[source] ParseFloatError, SourceOffset),
}

impl<'a> ExprTokenizer<'a> {
  pub fn new(operator_table: &'a OperatorTable) -> Self {
    let operator_names = operator_table.iter().map(|op| op.operator_name());
    let operator_regex = regex_opt_with(operator_names, |s| format!("^{s}"));
    Self { operator_table, operator_regex }
  }

  pub fn read_tokens(&self, state: &mut TokenizerState<'_>) -> Result<Vec<Token>, TokenizerError> {
    let mut tokens = Vec::new();
    loop {
      state.consume_spaces();
      match self.read_one_token(state)? {
        Some(token) => tokens.push(token),
        None => return Ok(tokens),
      }
    }
  }

  /// Reads a single token, or `None` at the end of input.
  pub fn read_one_token(&self, state: &mut TokenizerState<'_>) -> Result<Option<Token>, TokenizerError> {
    if let Some(tok) = self.read_char_token(state) {
      Ok(Some(tok))
    } else if let Some(tok) = self.read_function_call_token(state) {
      Ok(Some(tok))
    } else if let Some(tok) = self.read_identifier(state) {
      Ok(Some(tok))
    } else if let Some(res) = self.read_number_literal(state) {
      res.map(Some)
    } else if let Some(tok) = self.read_operator(state) {
      Ok(Some(tok))
    } else {
      match state.peek() {
        None => Ok(None),
        Some(ch) => Err(TokenizerError::UnexpectedChar(ch, state.current_pos())),
      }
    }
  }

  fn read_char_token(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    const CHAR_TOKENS: [(&str, TokenData); 5] = [
      ("(", TokenData::LeftParen),
      (")", TokenData::RightParen),
      ("[", TokenData::LeftBracket),
      ("]", TokenData::RightBracket),
      (",", TokenData::Comma),
    ];
    CHAR_TOKENS.into_iter().find_map(|(literal, data)| {
      state.read_literal(literal).map(|m| Token::new(data, m.span()))
    })
  }

  fn read_function_call_token(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-zA-Z_][a-zA-Z0-9_]*)\(").unwrap());
    state.read_regex_with_captures(&RE).and_then(|m| {
      let function_name = m.get(1)?;
      Some(Token::new(TokenData::FunctionCallStart(function_name.to_owned()), m.span()))
    })
  }

  fn read_identifier(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap());
    state.read_regex(&RE).map(|m| {
      Token::new(TokenData::Identifier(m.as_str().to_owned()), m.span())
    })
  }

  fn read_operator(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    let m = state.read_regex(&self.operator_regex)?;
    let operator = self.operator_table.get(m.as_str())?;
    Some(Token::new(TokenData::Operator(operator.clone()), m.span()))
  }

  fn read_number_literal(&self, state: &mut TokenizerState<'_>) -> Option<Result<Token, TokenizerError>> {
    // Signs are operators, never part of the literal.
    static RE: Lazy<Regex> = Lazy::new(|| {
      Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap()
    });
    let pos = state.current_pos();
    let m = state.read_regex(&RE)?;
    Some(
      m.as_str().parse::<f64>()
        .map(|n| Token::new(TokenData::Number(n), m.span()))
        .map_err(|err| TokenizerError::ParseNumberError(err, pos))
    )
  }
}

impl Token {
  pub fn new(data: TokenData, span: Span) -> Self {
    Self { data, span }
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Number(n) => write!(f, "{n}"),
      TokenData::Identifier(name) => write!(f, "{name}"),
      TokenData::Operator(op) => write!(f, "{}", op.operator_name()),
      TokenData::FunctionCallStart(name) => write!(f, "{name}("),
      TokenData::LeftParen => write!(f, "("),
      TokenData::RightParen => write!(f, ")"),
      TokenData::LeftBracket => write!(f, "["),
      TokenData::RightBracket => write!(f, "]"),
      TokenData::Comma => write!(f, ","),
    }
  }
}
