
use super::constants;

use serde::{Serialize, Deserialize};

use std::collections::HashMap;

/// Variable bindings for a single evaluation. Bindings take priority
/// over the built-in constants of the same name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableScope {
  bindings: HashMap<String, f64>,
}

impl VariableScope {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style binding.
  pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
    self.insert(name, value);
    self
  }

  pub fn insert(&mut self, name: impl Into<String>, value: f64) {
    self.bindings.insert(name.into(), value);
  }

  /// Whether the caller bound `name`, ignoring constants.
  pub fn is_bound(&self, name: &str) -> bool {
    self.bindings.contains_key(name)
  }

  /// Resolves a name against the bindings, then the constant catalog.
  pub fn lookup(&self, name: &str) -> Option<f64> {
    self.bindings.get(name).copied().or_else(|| constants::get(name))
  }
}

impl<S: Into<String>> FromIterator<(S, f64)> for VariableScope {
  fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
    let bindings = iter.into_iter().map(|(k, v)| (k.into(), v)).collect();
    Self { bindings }
  }
}

impl<S: Into<String>, const N: usize> From<[(S, f64); N]> for VariableScope {
  fn from(pairs: [(S, f64); N]) -> Self {
    pairs.into_iter().collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bindings_override_constants() {
    let scope = VariableScope::new();
    assert_eq!(scope.lookup("e"), Some(std::f64::consts::E));
    let scope = scope.with("e", 2.0);
    assert_eq!(scope.lookup("e"), Some(2.0));
  }

  #[test]
  fn test_unbound() {
    let scope = VariableScope::from([("x", 1.0)]);
    assert_eq!(scope.lookup("x"), Some(1.0));
    assert_eq!(scope.lookup("y"), None);
    assert!(scope.is_bound("x"));
    assert!(!scope.is_bound("pi"));
  }

  #[test]
  fn test_deserialize() {
    let scope: VariableScope = serde_json::from_str(r#"{"x": 3, "y": 4}"#).unwrap();
    assert_eq!(scope, VariableScope::from([("x", 3.0), ("y", 4.0)]));
  }
}
