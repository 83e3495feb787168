
//! Conversion between user-facing notation and the expression
//! language.

use crate::eval::FunctionLibrary;
use crate::util::regex_opt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static GLYPH_RE: Lazy<Regex> = Lazy::new(|| regex_opt(["×", "÷", "·", "−", "π", "θ"]));

static PIECE_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?s)^(?:(?P<number>(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)|(?P<ident>[A-Za-z_][A-Za-z0-9_]*)|(?P<other>.))").unwrap()
});

/// `name^2(`, rewritten to `name(2)^$3`. The literal `$3` is part of
/// the output.
static POWER_CALL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Za-z0-9_]+)\^([0-9]+)\(").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PieceKind {
  Number,
  Identifier,
  Other,
}

#[derive(Debug, Clone, Copy)]
struct Piece<'a> {
  kind: PieceKind,
  text: &'a str,
}

/// Rewrites user input into the expression language: display glyphs
/// become operators, juxtaposition becomes explicit multiplication,
/// and `f^n(` is rewritten to `f(n)^$3`.
///
/// Input which is already in canonical form is returned unchanged.
pub fn normalize(input: &str) -> String {
  let replaced = GLYPH_RE.replace_all(input, |caps: &Captures| {
    String::from(match &caps[0] {
      "×" | "·" => "*",
      "÷" => "/",
      "−" => "-",
      "π" => "pi",
      "θ" => "theta",
      other => other,
    })
  });
  let replaced = replaced.replace("**", "^");
  let multiplied = insert_implicit_multiplication(&replaced);
  POWER_CALL_RE.replace_all(&multiplied, "${1}(${2})^$$3").into_owned()
}

/// Renders an expression for display. `^` becomes `**` before `*`
/// becomes `×`, so a power displays as `××`.
pub fn format_expression(expr: &str) -> String {
  expr.replace('^', "**")
    .replace('*', "×")
    .replace('/', "÷")
}

fn split_pieces(input: &str) -> Vec<Piece<'_>> {
  let mut pieces = Vec::new();
  let mut rest = input;
  while let Some(caps) = PIECE_RE.captures(rest) {
    let (kind, m) = if let Some(m) = caps.name("number") {
      (PieceKind::Number, m)
    } else if let Some(m) = caps.name("ident") {
      (PieceKind::Identifier, m)
    } else if let Some(m) = caps.name("other") {
      (PieceKind::Other, m)
    } else {
      break;
    };
    pieces.push(Piece { kind, text: m.as_str() });
    rest = &rest[m.end()..];
  }
  pieces
}

impl Piece<'_> {
  fn is_whitespace(&self) -> bool {
    self.kind == PieceKind::Other && self.text.trim().is_empty()
  }
}

/// Inserts `*` between juxtaposed operands. Operands separated only by
/// whitespace (`2 x`) are juxtaposed too, and get ` * ` spacing.
fn insert_implicit_multiplication(input: &str) -> String {
  let library = FunctionLibrary::global();
  let mut output = String::with_capacity(input.len());
  let mut seen: Vec<Piece> = Vec::new();
  let mut spaced = false;
  for piece in split_pieces(input) {
    if piece.is_whitespace() {
      output.push_str(piece.text);
      spaced = true;
      continue;
    }
    if needs_multiplication(&seen, &piece, library) {
      output.push_str(if spaced { "* " } else { "*" });
    }
    output.push_str(piece.text);
    seen.push(piece);
    spaced = false;
  }
  output
}

/// Whether a `*` belongs between the non-whitespace pieces `before`
/// and `next`.
fn needs_multiplication(before: &[Piece], next: &Piece, library: &FunctionLibrary) -> bool {
  let Some(prev) = before.last() else {
    return false;
  };
  let left_is_operand = match prev.kind {
    PieceKind::Number => true,
    PieceKind::Identifier => !(library.contains(prev.text) && next.text == "("),
    PieceKind::Other => prev.text == ")" || prev.text == "]",
  };
  let right_is_operand = match next.kind {
    PieceKind::Number | PieceKind::Identifier => true,
    PieceKind::Other => next.text == "(",
  };
  if !(left_is_operand && right_is_operand) {
    return false;
  }
  // `f^2(` is left for the power-call rewrite.
  let exponent_before_call = prev.kind == PieceKind::Number
    && next.text == "("
    && before.len() >= 2
    && before[before.len() - 2].text == "^";
  !exponent_before_call
}
