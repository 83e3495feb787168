
//! Various utility functions.

pub mod point;
pub mod regexes;

use regex::{Regex, escape};

use std::cmp::Reverse;

/// Constructs a regex which matches any string in `options`.
pub fn regex_opt<'a, I>(options: I) -> Regex
where I : IntoIterator<Item = &'a str> {
  regex_opt_with(options, |s| s)
}

/// Constructs a regex which matches any string in `options`. Applies
/// the function `helper` to the resulting regex string before
/// compilation. If the result of `helper` is not a valid regular
/// expression, this function will panic.
pub fn regex_opt_with<'a, I, F>(options: I, helper: F) -> Regex
where I : IntoIterator<Item = &'a str>,
      F : FnOnce(String) -> String {
  // Longest first, so alternation always takes the longest match.
  let mut options: Vec<_> = options.into_iter().collect();
  options.sort_by_key(|a| Reverse(a.len()));

  let regex_str = options.into_iter().map(escape).collect::<Vec<_>>().join("|");
  let regex_str = helper(format!("(?:{regex_str})"));
  Regex::new(&regex_str).unwrap_or_else(|_| {
    panic!("Invalid regular expression: {}", regex_str);
  })
}

/// `n + 1` evenly spaced values from `min` to `max` inclusive. When
/// `n` is zero, yields `min` alone.
pub fn linspace(min: f64, max: f64, n: usize) -> impl Iterator<Item = f64> {
  let step = if n == 0 { 0.0 } else { (max - min) / n as f64 };
  (0..=n).map(move |i| min + i as f64 * step)
}

/// `n` cells of equal width starting at `min`; yields the left edge
/// of each cell.
pub fn cell_starts(min: f64, max: f64, n: usize) -> impl Iterator<Item = f64> + Clone {
  let step = if n == 0 { 0.0 } else { (max - min) / n as f64 };
  (0..n).map(move |i| min + i as f64 * step)
}
