
//! Parser for the expression language. Operands (literals, names,
//! calls, parenthesized groups, and vectors) are read recursively;
//! operator chains between them are resolved by the shunting yard.

use super::{Expr, names};
use super::tokenizer::{ExprTokenizer, Token, TokenData, TokenizerError};
use crate::parsing::operator::{InfixProperties, PrefixProperties, OperatorTable};
use crate::parsing::shunting_yard::{self, ShuntingYardDriver, ShuntingYardError};
use crate::parsing::source::Span;
use crate::parsing::tokenizer::TokenizerState;

use once_cell::sync::Lazy;
use thiserror::Error;

use std::convert::Infallible;
use std::str::FromStr;

/// The operator table of the expression language.
pub static OPERATORS: Lazy<OperatorTable> = Lazy::new(OperatorTable::common_operators);

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
  #[error("{0}")]
  Tokenizer(#[from] TokenizerError),
  #[error("Unexpected '{token}' at {span}")]
  UnexpectedToken { token: String, span: Span },
  #[error("Unexpected end of expression")]
  UnexpectedEof,
  #[error("Empty expression")]
  EmptyExpression,
}

#[derive(Clone, Debug)]
pub struct ExprParser<'a> {
  tokenizer: ExprTokenizer<'a>,
}

#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ExprShuntingYardDriver {}

struct TokenCursor {
  tokens: Vec<Token>,
  pos: usize,
}

impl<'a> ExprParser<'a> {
  pub fn new(operator_table: &'a OperatorTable) -> Self {
    Self {
      tokenizer: ExprTokenizer::new(operator_table),
    }
  }

  pub fn tokenizer(&self) -> &ExprTokenizer<'a> {
    &self.tokenizer
  }

  pub fn parse(&self, input: &str) -> Result<Expr, ParseError> {
    let mut state = TokenizerState::new(input);
    let tokens = self.tokenizer.read_tokens(&mut state)?;
    if tokens.is_empty() {
      return Err(ParseError::EmptyExpression);
    }
    let mut cursor = TokenCursor { tokens, pos: 0 };
    let (expr, _) = parse_sequence(&mut cursor)?;
    match cursor.next() {
      None => Ok(expr),
      Some(token) => Err(unexpected(&token)),
    }
  }
}

/// Parses a string using the standard operator table.
pub fn parse_expr(input: &str) -> Result<Expr, ParseError> {
  ExprParser::new(&OPERATORS).parse(input)
}

impl FromStr for Expr {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Expr, ParseError> {
    parse_expr(s)
  }
}

impl ExprShuntingYardDriver {
  pub fn new() -> Self {
    Self {}
  }
}

impl ShuntingYardDriver<Expr> for ExprShuntingYardDriver {
  type Output = Expr;
  type Error = Infallible;

  fn compile_scalar(&mut self, scalar: Expr) -> Result<Expr, Infallible> {
    Ok(scalar)
  }

  fn compile_infix_op(&mut self, left: Expr, infix: &InfixProperties, right: Expr) -> Result<Expr, Infallible> {
    Ok(Expr::call(infix.function_name(), vec![left, right]))
  }

  fn compile_prefix_op(&mut self, prefix: &PrefixProperties, right: Expr) -> Result<Expr, Infallible> {
    // Negative literals are stored as numbers.
    match right {
      Expr::Number(n) if prefix.function_name() == names::NEGATE => Ok(Expr::Number(-n)),
      right => Ok(Expr::call(prefix.function_name(), vec![right])),
    }
  }
}

impl TokenCursor {
  fn peek(&self) -> Option<&Token> {
    self.tokens.get(self.pos)
  }

  fn next(&mut self) -> Option<Token> {
    let token = self.tokens.get(self.pos).cloned();
    if token.is_some() {
      self.pos += 1;
    }
    token
  }

  fn peek_is(&self, data: &TokenData) -> bool {
    self.peek().map_or(false, |t| &t.data == data)
  }
}

fn unexpected(token: &Token) -> ParseError {
  ParseError::UnexpectedToken { token: token.data.to_string(), span: token.span }
}

impl From<ShuntingYardError<Expr, Infallible>> for ParseError {
  fn from(err: ShuntingYardError<Expr, Infallible>) -> Self {
    match err {
      ShuntingYardError::CustomError(never) => match never {},
      ShuntingYardError::UnexpectedEOF => ParseError::UnexpectedEof,
      ShuntingYardError::UnexpectedToken(token) => {
        ParseError::UnexpectedToken { token: token.to_string(), span: token.span() }
      }
    }
  }
}

/// Parses operands separated by infix operators, stopping at the
/// first token that cannot continue the chain.
fn parse_sequence(cursor: &mut TokenCursor) -> Result<(Expr, Span), ParseError> {
  let mut yard_tokens = Vec::new();
  let mut full_span: Option<Span> = None;
  loop {
    // Prefix operators.
    while let Some(Token { data: TokenData::Operator(op), span }) = cursor.peek().cloned() {
      if op.fixity().is_prefix() {
        yard_tokens.push(shunting_yard::Token::prefix_operator(op, span));
      } else if op.operator_name() != names::ADD {
        // Unary plus is accepted and discarded.
        return Err(unexpected(&Token::new(TokenData::Operator(op), span)));
      }
      full_span = Some(full_span.map_or(span, |s| s.merge(span)));
      cursor.next();
    }

    let (operand, span) = parse_operand(cursor)?;
    full_span = Some(full_span.map_or(span, |s| s.merge(span)));
    yard_tokens.push(shunting_yard::Token::scalar(operand, span));

    match cursor.peek().cloned() {
      Some(Token { data: TokenData::Operator(op), span }) if op.fixity().is_infix() => {
        yard_tokens.push(shunting_yard::Token::infix_operator(op, span));
        cursor.next();
      }
      _ => break,
    }
  }
  let expr = shunting_yard::parse(&mut ExprShuntingYardDriver::new(), yard_tokens)?;
  Ok((expr, full_span.unwrap_or_default()))
}

fn parse_operand(cursor: &mut TokenCursor) -> Result<(Expr, Span), ParseError> {
  let token = cursor.next().ok_or(ParseError::UnexpectedEof)?;
  match token.data {
    TokenData::Number(n) => Ok((Expr::Number(n), token.span)),
    TokenData::Identifier(name) => {
      if cursor.peek_is(&TokenData::LeftParen) {
        cursor.next();
        let (args, end) = parse_args(cursor, &TokenData::RightParen)?;
        Ok((Expr::Call(name, args), token.span.merge(end)))
      } else {
        Ok((Expr::Var(name), token.span))
      }
    }
    TokenData::FunctionCallStart(name) => {
      let (args, end) = parse_args(cursor, &TokenData::RightParen)?;
      Ok((Expr::Call(name, args), token.span.merge(end)))
    }
    TokenData::LeftParen => {
      let (expr, _) = parse_sequence(cursor)?;
      let close = cursor.next().ok_or(ParseError::UnexpectedEof)?;
      if close.data != TokenData::RightParen {
        return Err(unexpected(&close));
      }
      Ok((expr, token.span.merge(close.span)))
    }
    TokenData::LeftBracket => {
      let (items, end) = parse_args(cursor, &TokenData::RightBracket)?;
      Ok((Expr::call(names::VECTOR, items), token.span.merge(end)))
    }
    _ => Err(unexpected(&token)),
  }
}

/// Parses a comma-separated list terminated by `closer`, which is
/// consumed. Returns the span of the closing token.
fn parse_args(cursor: &mut TokenCursor, closer: &TokenData) -> Result<(Vec<Expr>, Span), ParseError> {
  let mut args = Vec::new();
  if cursor.peek_is(closer) {
    let close = cursor.next().ok_or(ParseError::UnexpectedEof)?;
    return Ok((args, close.span));
  }
  loop {
    let (arg, _) = parse_sequence(cursor)?;
    args.push(arg);
    let token = cursor.next().ok_or(ParseError::UnexpectedEof)?;
    if token.data == TokenData::Comma {
      continue;
    } else if &token.data == closer {
      return Ok((args, token.span));
    } else {
      return Err(unexpected(&token));
    }
  }
}
