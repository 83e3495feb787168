
//! Normal distribution and combinatorics.

use super::{Arity, FunctionBuilder, FunctionLibrary, Function};
use crate::expr::Expr;
use crate::symbolic::SymbolicError;

use std::f64::consts;

pub fn append_statistical_functions(library: &mut FunctionLibrary) {
  library.insert(normal_pdf_function());
  library.insert(normal_cdf_function());
  library.insert(FunctionBuilder::new("binomial").binary(binomial).build());
}

/// Splits `normalPDF(x, mu, sigma)` style arguments, defaulting to the
/// standard normal.
fn distribution_args(args: &[f64]) -> (f64, f64, f64) {
  match args {
    [x] => (*x, 0.0, 1.0),
    [x, mu] => (*x, *mu, 1.0),
    [x, mu, sigma, ..] => (*x, *mu, *sigma),
    [] => (f64::NAN, 0.0, 1.0),
  }
}

/// The distribution parameters of a call, provided they do not depend
/// on the variable of differentiation.
fn constant_params(name: &str, args: &[Expr], is_constant: impl Fn(&Expr) -> bool) -> Result<Vec<Expr>, SymbolicError> {
  let params = &args[1..];
  if params.iter().all(is_constant) {
    Ok(params.to_vec())
  } else {
    Err(SymbolicError::UnknownDerivative(name.to_owned()))
  }
}

fn normal_pdf_function() -> Function {
  FunctionBuilder::new("normalPDF")
    .real(Arity::Between(1, 3), |args| {
      let (x, mu, sigma) = distribution_args(args);
      Ok(normal_pdf(x, mu, sigma))
    })
    .derivative(|args, engine| {
      // d/du pdf(u; mu, sigma) = -(u - mu) / sigma^2 * pdf(u; mu, sigma)
      let params = constant_params("normalPDF", args, |e| engine.is_constant(e))?;
      let u = &args[0];
      let mu = params.first().cloned().unwrap_or(Expr::Number(0.0));
      let sigma = params.get(1).cloned().unwrap_or(Expr::Number(1.0));
      let factor = Expr::negate(Expr::div(
        Expr::sub(u.clone(), mu),
        Expr::pow(sigma, Expr::Number(2.0)),
      ));
      Ok(Expr::mul(
        Expr::mul(factor, Expr::call("normalPDF", args.to_vec())),
        engine.differentiate(u)?,
      ))
    })
    .build()
}

fn normal_cdf_function() -> Function {
  FunctionBuilder::new("normalCDF")
    .real(Arity::Between(1, 3), |args| {
      let (x, mu, sigma) = distribution_args(args);
      Ok(normal_cdf(x, mu, sigma))
    })
    .derivative(|args, engine| {
      constant_params("normalCDF", args, |e| engine.is_constant(e))?;
      let u = &args[0];
      Ok(Expr::mul(Expr::call("normalPDF", args.to_vec()), engine.differentiate(u)?))
    })
    .build()
}

/// Density of the normal distribution with mean `mu` and standard
/// deviation `sigma`.
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
  let z = (x - mu) / sigma;
  (-0.5 * z * z).exp() / (sigma * (2.0 * consts::PI).sqrt())
}

/// Cumulative distribution of the normal distribution, Abramowitz and
/// Stegun formula 26.2.17. Absolute error below 7.5e-8.
pub fn normal_cdf(x: f64, mu: f64, sigma: f64) -> f64 {
  const P: f64 = 0.231_641_9;
  const B1: f64 = 0.319_381_530;
  const B2: f64 = -0.356_563_782;
  const B3: f64 = 1.781_477_937;
  const B4: f64 = -1.821_255_978;
  const B5: f64 = 1.330_274_429;

  let z = (x - mu) / sigma;
  if z.is_nan() {
    return f64::NAN;
  }
  let az = z.abs();
  let t = 1.0 / (1.0 + P * az);
  let poly = t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));
  let upper_tail = normal_pdf(az, 0.0, 1.0) * poly;
  if z >= 0.0 { 1.0 - upper_tail } else { upper_tail }
}

/// Binomial coefficient `n choose k` for non-negative integers. Zero
/// when `k > n`, NaN for any other argument.
pub fn binomial(n: f64, k: f64) -> f64 {
  if n.fract() != 0.0 || k.fract() != 0.0 || n < 0.0 || k < 0.0 {
    return f64::NAN;
  }
  if k > n {
    return 0.0;
  }
  let k = k.min(n - k);
  (0..k as u64).fold(1.0, |acc, i| acc * (n - i as f64) / (i as f64 + 1.0))
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_normal_pdf() {
    assert_abs_diff_eq!(normal_pdf(0.0, 0.0, 1.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
    assert_abs_diff_eq!(normal_pdf(1.0, 1.0, 2.0), 0.199_471_140_200_716_35, epsilon = 1e-15);
  }

  #[test]
  fn test_normal_cdf() {
    assert_abs_diff_eq!(normal_cdf(0.0, 0.0, 1.0), 0.5, epsilon = 1e-7);
    assert_abs_diff_eq!(normal_cdf(1.96, 0.0, 1.0), 0.975_002_104_851_780, epsilon = 1e-7);
    assert_abs_diff_eq!(normal_cdf(-1.96, 0.0, 1.0), 0.024_997_895_148_220, epsilon = 1e-7);
    assert_abs_diff_eq!(normal_cdf(12.0, 10.0, 2.0), 0.841_344_746_068_542_9, epsilon = 1e-7);
  }

  #[test]
  fn test_distribution_args() {
    assert_eq!(distribution_args(&[1.0]), (1.0, 0.0, 1.0));
    assert_eq!(distribution_args(&[1.0, 2.0]), (1.0, 2.0, 1.0));
    assert_eq!(distribution_args(&[1.0, 2.0, 3.0]), (1.0, 2.0, 3.0));
  }

  #[test]
  fn test_binomial() {
    assert_eq!(binomial(5.0, 2.0), 10.0);
    assert_eq!(binomial(10.0, 0.0), 1.0);
    assert_eq!(binomial(52.0, 5.0), 2_598_960.0);
    assert_eq!(binomial(3.0, 5.0), 0.0);
    assert!(binomial(2.5, 1.0).is_nan());
    assert!(binomial(-1.0, 1.0).is_nan());
  }
}
