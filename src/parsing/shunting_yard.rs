
//! Operator-precedence parsing of a flat token stream. Callers decide
//! which tokens are operands and which are operators; this module only
//! resolves grouping.

use super::operator::{Operator, PrefixProperties, InfixProperties};
use super::source::Span;

use thiserror::Error;

use std::error::{Error as StdError};
use std::fmt::{self, Display, Formatter};

/// A token, for the purposes of the shunting yard algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<T> {
  data: TokenData<T>,
  span: Span,
}

/// Tracks an output value together with the first token that produced
/// it, for error reporting.
#[derive(Debug, Clone)]
struct OutputWithToken<T, O> {
  output: O,
  token: Token<T>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FixityType {
  Prefix,
  Infix,
}

#[derive(Clone, Debug)]
struct OpStackValue {
  operator: Operator,
  fixity: FixityType,
  span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenData<T> {
  /// A value in the target language.
  Scalar(T),
  /// A unary operator written before its operand.
  PrefixOperator(Operator),
  /// A binary operator written between its operands.
  InfixOperator(Operator),
}

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ShuntingYardError<T: Display, E: StdError + 'static> {
  #[error("{0}")]
  CustomError(#[source] E),
  #[error("unexpected end of input")]
  UnexpectedEOF,
  #[error("unexpected token {} at {}", .0.data, .0.span)]
  UnexpectedToken(Token<T>),
}

/// A type implementing this trait is capable of driving the shunting
/// yard algorithm and compiling tokens to a given target language.
pub trait ShuntingYardDriver<T> {
  type Output;
  type Error: StdError + 'static;

  fn compile_scalar(&mut self, scalar: T) -> Result<Self::Output, Self::Error>;
  fn compile_infix_op(
    &mut self,
    left: Self::Output,
    infix: &InfixProperties,
    right: Self::Output,
  ) -> Result<Self::Output, Self::Error>;
  fn compile_prefix_op(
    &mut self,
    prefix: &PrefixProperties,
    right: Self::Output,
  ) -> Result<Self::Output, Self::Error>;
}

impl<T> Token<T> {
  pub fn scalar(data: T, span: Span) -> Self {
    Self { data: TokenData::Scalar(data), span }
  }

  /// Constructs a token representing a prefix operator. Panics if
  /// `op` is not a prefix operator.
  pub fn prefix_operator(op: Operator, span: Span) -> Self {
    if !op.fixity().is_prefix() {
      panic!("Token::prefix_operator requires a prefix operator, got {:?}", op);
    }
    Self { data: TokenData::PrefixOperator(op), span }
  }

  /// Constructs a token representing an infix operator. Panics if
  /// `op` is not an infix operator.
  pub fn infix_operator(op: Operator, span: Span) -> Self {
    if !op.fixity().is_infix() {
      panic!("Token::infix_operator requires an infix operator, got {:?}", op);
    }
    Self { data: TokenData::InfixOperator(op), span }
  }

  pub fn span(&self) -> Span {
    self.span
  }
}

impl<T: Display> Display for TokenData<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Scalar(s) => s.fmt(f),
      TokenData::PrefixOperator(op) | TokenData::InfixOperator(op) => op.operator_name().fmt(f),
    }
  }
}

impl<T: Display> Display for Token<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.data)
  }
}

impl<T: Display, E: StdError + 'static> From<E> for ShuntingYardError<T, E> {
  fn from(e: E) -> Self {
    Self::CustomError(e)
  }
}

impl OpStackValue {
  fn into_token<T>(self) -> Token<T> {
    let data = match self.fixity {
      FixityType::Prefix => TokenData::PrefixOperator(self.operator),
      FixityType::Infix => TokenData::InfixOperator(self.operator),
    };
    Token { data, span: self.span }
  }
}

pub fn parse<T, D, I>(
  driver: &mut D,
  input: I,
) -> Result<D::Output, ShuntingYardError<T, D::Error>>
where T: Clone + Display,
      D: ShuntingYardDriver<T>,
      I: IntoIterator<Item = Token<T>> {
  let mut operator_stack: Vec<OpStackValue> = Vec::new();
  let mut output_stack: Vec<OutputWithToken<T, D::Output>> = Vec::new();
  for token in input {
    match token.data {
      TokenData::Scalar(t) => {
        let output = driver.compile_scalar(t.clone())?;
        let token = Token { data: TokenData::Scalar(t), span: token.span };
        output_stack.push(OutputWithToken { output, token });
      }
      TokenData::PrefixOperator(op) => {
        // A prefix operator has no left operand, so nothing on the
        // stack can be resolved yet.
        operator_stack.push(OpStackValue { operator: op, span: token.span, fixity: FixityType::Prefix });
      }
      TokenData::InfixOperator(op) => {
        while let Some(stack_value) = operator_stack.pop() {
          if should_pop(&stack_value, &op) {
            let error = ShuntingYardError::UnexpectedToken(stack_value.clone().into_token());
            simplify_operator(driver, &mut output_stack, stack_value, error)?;
          } else {
            operator_stack.push(stack_value);
            break;
          }
        }
        operator_stack.push(OpStackValue { operator: op, span: token.span, fixity: FixityType::Infix });
      }
    }
  }

  while let Some(stack_value) = operator_stack.pop() {
    simplify_operator(driver, &mut output_stack, stack_value, ShuntingYardError::UnexpectedEOF)?;
  }

  let final_result = output_stack.pop().ok_or(ShuntingYardError::UnexpectedEOF)?;
  if let Some(remaining_value) = output_stack.pop() {
    return Err(ShuntingYardError::UnexpectedToken(remaining_value.token));
  }
  Ok(final_result.output)
}

/// Whether the operator on top of the stack binds its right operand
/// at least as tightly as `current_op` binds its left one.
fn should_pop(stack_value: &OpStackValue, current_op: &Operator) -> bool {
  let Some(current) = current_op.fixity().as_infix() else {
    return false;
  };
  let stack_prec = match stack_value.fixity {
    FixityType::Prefix => stack_value.operator.fixity().as_prefix().map(|p| p.precedence()),
    FixityType::Infix => stack_value.operator.fixity().as_infix().map(|i| i.right_precedence()),
  };
  stack_prec.map_or(false, |prec| prec >= current.left_precedence())
}

fn simplify_operator<T, D>(
  driver: &mut D,
  output_stack: &mut Vec<OutputWithToken<T, D::Output>>,
  stack_value: OpStackValue,
  error: ShuntingYardError<T, D::Error>,
) -> Result<(), ShuntingYardError<T, D::Error>>
where T: Clone + Display,
      D: ShuntingYardDriver<T> {
  let operator = &stack_value.operator;
  match stack_value.fixity {
    FixityType::Infix => {
      let (arg1, arg2) = output_stack.pop()
        .and_then(|arg2| output_stack.pop().map(|arg1| (arg1, arg2)))
        .ok_or(error)?;
      let Some(infix_properties) = operator.fixity().as_infix() else {
        return Err(ShuntingYardError::UnexpectedToken(stack_value.into_token()));
      };
      let output = driver.compile_infix_op(arg1.output, infix_properties, arg2.output)?;
      output_stack.push(OutputWithToken { output, token: arg1.token });
    }
    FixityType::Prefix => {
      let arg = output_stack.pop().ok_or(error)?;
      let Some(prefix_properties) = operator.fixity().as_prefix() else {
        return Err(ShuntingYardError::UnexpectedToken(stack_value.into_token()));
      };
      let output = driver.compile_prefix_op(prefix_properties, arg.output)?;
      let token = stack_value.into_token();
      output_stack.push(OutputWithToken { output, token });
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::source::SourceOffset;
  use crate::parsing::operator::{Precedence, Associativity, Fixity};

  use std::convert::Infallible;

  /// Basic test "expression" type for our unit tests.
  #[derive(Debug, Clone, PartialEq, Eq)]
  enum TestExpr {
    Scalar(i64),
    PrefixOp(String, Box<TestExpr>),
    InfixOp(Box<TestExpr>, String, Box<TestExpr>),
  }

  #[derive(Clone, Debug)]
  struct TestDriver;

  impl TestExpr {
    fn infix_op(left: TestExpr, op: impl Into<String>, right: TestExpr) -> Self {
      Self::InfixOp(Box::new(left), op.into(), Box::new(right))
    }

    fn prefix_op(op: impl Into<String>, right: TestExpr) -> Self {
      Self::PrefixOp(op.into(), Box::new(right))
    }
  }

  impl ShuntingYardDriver<i64> for TestDriver {
    type Output = TestExpr;
    type Error = Infallible;

    fn compile_scalar(&mut self, scalar: i64) -> Result<Self::Output, Self::Error> {
      Ok(TestExpr::Scalar(scalar))
    }

    fn compile_infix_op(
      &mut self,
      left: Self::Output,
      op: &InfixProperties,
      right: Self::Output,
    ) -> Result<Self::Output, Self::Error> {
      Ok(TestExpr::infix_op(left, op.function_name(), right))
    }

    fn compile_prefix_op(
      &mut self,
      op: &PrefixProperties,
      right: Self::Output,
    ) -> Result<Self::Output, Self::Error> {
      Ok(TestExpr::prefix_op(op.function_name(), right))
    }
  }

  fn plus() -> Operator {
    Operator::new("+", Fixity::new().with_infix("plus", Associativity::FULL, Precedence::new(10)))
  }

  fn minus() -> Operator {
    Operator::new(
      "-",
      Fixity::new()
        .with_prefix("negate", Precedence::new(25))
        .with_infix("minus", Associativity::LEFT, Precedence::new(10)),
    )
  }

  fn times() -> Operator {
    Operator::new("*", Fixity::new().with_infix("times", Associativity::FULL, Precedence::new(20)))
  }

  fn pow() -> Operator {
    Operator::new("^", Fixity::new().with_infix("pow", Associativity::RIGHT, Precedence::new(30)))
  }

  fn span(start: usize, end: usize) -> Span {
    Span::new(SourceOffset(start), SourceOffset(end))
  }

  fn scalar(n: i64) -> TestExpr {
    TestExpr::Scalar(n)
  }

  #[test]
  fn test_full_assoc_op() {
    let tokens = vec![
      Token::scalar(1, span(0, 1)),
      Token::infix_operator(plus(), span(1, 2)),
      Token::scalar(2, span(2, 3)),
      Token::infix_operator(plus(), span(3, 4)),
      Token::scalar(3, span(4, 5)),
    ];
    let result = parse(&mut TestDriver, tokens).unwrap();
    assert_eq!(
      TestExpr::infix_op(TestExpr::infix_op(scalar(1), "plus", scalar(2)), "plus", scalar(3)),
      result,
    );
  }

  #[test]
  fn test_left_assoc_op() {
    let tokens = vec![
      Token::scalar(1, span(0, 1)),
      Token::infix_operator(minus(), span(1, 2)),
      Token::scalar(2, span(2, 3)),
      Token::infix_operator(minus(), span(3, 4)),
      Token::scalar(3, span(4, 5)),
    ];
    let result = parse(&mut TestDriver, tokens).unwrap();
    assert_eq!(
      TestExpr::infix_op(TestExpr::infix_op(scalar(1), "minus", scalar(2)), "minus", scalar(3)),
      result,
    );
  }

  #[test]
  fn test_right_assoc_op() {
    let tokens = vec![
      Token::scalar(1, span(0, 1)),
      Token::infix_operator(pow(), span(1, 2)),
      Token::scalar(2, span(2, 3)),
      Token::infix_operator(pow(), span(3, 4)),
      Token::scalar(3, span(4, 5)),
    ];
    let result = parse(&mut TestDriver, tokens).unwrap();
    assert_eq!(
      TestExpr::infix_op(scalar(1), "pow", TestExpr::infix_op(scalar(2), "pow", scalar(3))),
      result,
    );
  }

  #[test]
  fn test_differing_prec_higher_on_right() {
    let tokens = vec![
      Token::scalar(1, span(0, 1)),
      Token::infix_operator(plus(), span(1, 2)),
      Token::scalar(2, span(2, 3)),
      Token::infix_operator(times(), span(3, 4)),
      Token::scalar(3, span(4, 5)),
    ];
    let result = parse(&mut TestDriver, tokens).unwrap();
    assert_eq!(
      TestExpr::infix_op(scalar(1), "plus", TestExpr::infix_op(scalar(2), "times", scalar(3))),
      result,
    );
  }

  #[test]
  fn test_differing_prec_higher_on_left() {
    let tokens = vec![
      Token::scalar(1, span(0, 1)),
      Token::infix_operator(times(), span(1, 2)),
      Token::scalar(2, span(2, 3)),
      Token::infix_operator(plus(), span(3, 4)),
      Token::scalar(3, span(4, 5)),
    ];
    let result = parse(&mut TestDriver, tokens).unwrap();
    assert_eq!(
      TestExpr::infix_op(TestExpr::infix_op(scalar(1), "times", scalar(2)), "plus", scalar(3)),
      result,
    );
  }

  #[test]
  fn test_prefix_op_yields_to_tighter_infix() {
    // -2 ^ 3 groups as -(2 ^ 3)
    let tokens = vec![
      Token::prefix_operator(minus(), span(0, 1)),
      Token::scalar(2, span(1, 2)),
      Token::infix_operator(pow(), span(2, 3)),
      Token::scalar(3, span(3, 4)),
    ];
    let result = parse(&mut TestDriver, tokens).unwrap();
    assert_eq!(
      TestExpr::prefix_op("negate", TestExpr::infix_op(scalar(2), "pow", scalar(3))),
      result,
    );
  }

  #[test]
  fn test_prefix_op_beats_looser_infix() {
    // -2 * 3 groups as (-2) * 3
    let tokens = vec![
      Token::prefix_operator(minus(), span(0, 1)),
      Token::scalar(2, span(1, 2)),
      Token::infix_operator(times(), span(2, 3)),
      Token::scalar(3, span(3, 4)),
    ];
    let result = parse(&mut TestDriver, tokens).unwrap();
    assert_eq!(
      TestExpr::infix_op(TestExpr::prefix_op("negate", scalar(2)), "times", scalar(3)),
      result,
    );
  }

  #[test]
  fn test_prefix_op_in_right_operand() {
    let tokens = vec![
      Token::scalar(1, span(0, 1)),
      Token::infix_operator(minus(), span(1, 2)),
      Token::prefix_operator(minus(), span(2, 3)),
      Token::scalar(2, span(3, 4)),
    ];
    let result = parse(&mut TestDriver, tokens).unwrap();
    assert_eq!(
      TestExpr::infix_op(scalar(1), "minus", TestExpr::prefix_op("negate", scalar(2))),
      result,
    );
  }

  #[test]
  fn test_missing_operand() {
    let tokens = vec![
      Token::scalar(1, span(0, 1)),
      Token::infix_operator(plus(), span(1, 2)),
    ];
    let err = parse(&mut TestDriver, tokens).unwrap_err();
    assert!(matches!(err, ShuntingYardError::UnexpectedEOF));
  }

  #[test]
  fn test_empty_input() {
    let err = parse(&mut TestDriver, Vec::new()).unwrap_err();
    assert!(matches!(err, ShuntingYardError::UnexpectedEOF));
  }
}
