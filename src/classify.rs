
//! Classification of equations into the families the samplers know
//! how to plot.
//!
//! Classification is textual: the rules look for `x =`, `y =`, and
//! `r =` prefixes and, failing those, for the letters `x` and `y`
//! anywhere in the input. A `y` inside a longer name counts.

use regex::Regex;
use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::debug;

static PARAMETRIC_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)^x\s*=\s*(.+?)\s*,\s*y\s*=\s*(.+)$").unwrap());
static POLAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^r\s*=\s*(.+)$").unwrap());
static EXPLICIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^y\s*=\s*(.+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EquationKind {
  /// `y = f(x)`.
  Explicit { function: String },
  /// A relation in `x` and `y`, plotted as its zero set.
  Implicit { expression: String },
  /// `x = f(t), y = g(t)`.
  #[serde(rename_all = "camelCase")]
  Parametric { x_function: String, y_function: String },
  /// `r = f(theta)`.
  Polar { function: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEquation {
  #[serde(flatten)]
  pub kind: EquationKind,
  pub original: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
  #[error("Invalid equation format")]
  InvalidFormat,
}

impl ClassifiedEquation {
  pub fn kind_name(&self) -> &'static str {
    match self.kind {
      EquationKind::Explicit { .. } => "explicit",
      EquationKind::Implicit { .. } => "implicit",
      EquationKind::Parametric { .. } => "parametric",
      EquationKind::Polar { .. } => "polar",
    }
  }
}

/// Classifies an equation. The first matching rule wins: parametric,
/// polar, explicit, then implicit (mentions both `x` and `y`), then a
/// bare function of `x`.
pub fn classify(expression: &str) -> Result<ClassifiedEquation, ClassifyError> {
  let trimmed = expression.trim();
  let result = classify_trimmed(trimmed)?;
  debug!(kind = result.kind_name(), original = %result.original, "Classified equation");
  Ok(result)
}

fn classify_trimmed(trimmed: &str) -> Result<ClassifiedEquation, ClassifyError> {
  let original = trimmed.to_owned();
  if let Some(caps) = PARAMETRIC_RE.captures(trimmed) {
    let kind = EquationKind::Parametric {
      x_function: caps[1].trim().to_owned(),
      y_function: caps[2].trim().to_owned(),
    };
    return Ok(ClassifiedEquation { kind, original });
  }
  if let Some(caps) = POLAR_RE.captures(trimmed) {
    let kind = EquationKind::Polar { function: caps[1].trim().to_owned() };
    return Ok(ClassifiedEquation { kind, original });
  }
  if let Some(caps) = EXPLICIT_RE.captures(trimmed) {
    let kind = EquationKind::Explicit { function: caps[1].trim().to_owned() };
    return Ok(ClassifiedEquation { kind, original });
  }
  match (trimmed.contains('x'), trimmed.contains('y')) {
    (true, true) => {
      Ok(ClassifiedEquation { kind: EquationKind::Implicit { expression: original.clone() }, original })
    }
    (true, false) => {
      Ok(ClassifiedEquation {
        kind: EquationKind::Explicit { function: original },
        original: format!("y = {trimmed}"),
      })
    }
    _ => Err(ClassifyError::InvalidFormat),
  }
}
