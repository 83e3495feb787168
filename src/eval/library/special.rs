
//! Special functions. Each is a fixed numeric approximation; the
//! coefficients below must not be changed without updating the tests
//! that pin their outputs.

use super::{Arity, FunctionBuilder, FunctionLibrary};
use crate::expr::Expr;

use std::f64::consts;

pub fn append_special_functions(library: &mut FunctionLibrary) {
  library.insert(FunctionBuilder::new("gamma").unary(gamma).build());
  library.insert(FunctionBuilder::new("factorial").unary(factorial).build());
  library.insert(
    FunctionBuilder::new("erf")
      .unary(erf)
      .chain_rule(|u| {
        // 2 / sqrt(pi) * exp(-u^2)
        Expr::mul(
          Expr::Number(consts::FRAC_2_SQRT_PI),
          Expr::call("exp", vec![Expr::negate(Expr::pow(u.clone(), Expr::Number(2.0)))]),
        )
      })
      .build()
  );
  library.insert(FunctionBuilder::new("besselj0").unary(besselj0).build());
  library.insert(
    FunctionBuilder::new("fresnelS")
      .unary(fresnel_s)
      .chain_rule(|u| Expr::call("sin", vec![half_pi_squared(u)]))
      .build()
  );
  library.insert(
    FunctionBuilder::new("fresnelC")
      .unary(fresnel_c)
      .chain_rule(|u| Expr::call("cos", vec![half_pi_squared(u)]))
      .build()
  );
  library.insert(FunctionBuilder::new("ellipticK").real(Arity::Exactly(1), |args| Ok(elliptic_k(args[0]))).build());
  library.insert(FunctionBuilder::new("ellipticE").real(Arity::Exactly(1), |args| Ok(elliptic_e(args[0]))).build());
}

/// `pi * u^2 / 2`
fn half_pi_squared(u: &Expr) -> Expr {
  Expr::div(
    Expr::mul(Expr::var("pi"), Expr::pow(u.clone(), Expr::Number(2.0))),
    Expr::Number(2.0),
  )
}

const LANCZOS_G: f64 = 7.0;

/// Largest argument for which `gamma` is finite in `f64`.
const GAMMA_OVERFLOW: f64 = 171.624;

const LANCZOS_COEFFICIENTS: [f64; 9] = [
  0.999_999_999_999_809_9,
  676.520_368_121_885_1,
  -1_259.139_216_722_402_8,
  771.323_428_777_653_1,
  -176.615_029_162_140_6,
  12.507_343_278_686_905,
  -0.138_571_095_265_720_12,
  9.984_369_578_019_572e-6,
  1.505_632_735_149_311_6e-7,
];

/// Gamma function by the Lanczos approximation, with the reflection
/// formula below 1/2. Exact for positive integers. NaN at the poles
/// (zero and the negative integers). Overflows to infinity above
/// about 171.62.
pub fn gamma(x: f64) -> f64 {
  if x.is_nan() || (x <= 0.0 && x.fract() == 0.0) {
    return f64::NAN;
  }
  if x > GAMMA_OVERFLOW {
    return f64::INFINITY;
  }
  if x.fract() == 0.0 && x <= 171.0 {
    return (1..x as u64).fold(1.0, |acc, k| acc * k as f64);
  }
  if x < 0.5 {
    return consts::PI / ((consts::PI * x).sin() * gamma(1.0 - x));
  }
  let x = x - 1.0;
  let series = LANCZOS_COEFFICIENTS.iter()
    .enumerate()
    .skip(1)
    .fold(LANCZOS_COEFFICIENTS[0], |acc, (i, c)| acc + c / (x + i as f64));
  let t = x + LANCZOS_G + 0.5;
  (2.0 * consts::PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * series
}

/// `n!` for non-negative integers (computed as an exact product),
/// `gamma(n + 1)` otherwise. Negative integers have no factorial.
pub fn factorial(n: f64) -> f64 {
  if n.fract() == 0.0 {
    if n < 0.0 {
      return f64::NAN;
    }
    if n > 170.0 {
      return f64::INFINITY;
    }
    return (2..=n as u64).fold(1.0, |acc, k| acc * k as f64);
  }
  gamma(n + 1.0)
}

/// Error function, Abramowitz and Stegun formula 7.1.26. Absolute
/// error below 1.5e-7.
pub fn erf(x: f64) -> f64 {
  const A1: f64 = 0.254_829_592;
  const A2: f64 = -0.284_496_736;
  const A3: f64 = 1.421_413_741;
  const A4: f64 = -1.453_152_027;
  const A5: f64 = 1.061_405_429;
  const P: f64 = 0.327_591_1;

  let sign = if x < 0.0 { -1.0 } else { 1.0 };
  let x = x.abs();
  let t = 1.0 / (1.0 + P * x);
  let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();
  sign * y
}

/// Bessel function of the first kind, order zero (Numerical Recipes
/// rational and asymptotic approximations).
pub fn besselj0(x: f64) -> f64 {
  let ax = x.abs();
  if ax < 8.0 {
    let y = x * x;
    let numerator = 57_568_490_574.0 + y * (-13_362_590_354.0 + y * (651_619_640.7
      + y * (-11_214_424.18 + y * (77_392.330_17 + y * (-184.905_245_6)))));
    let denominator = 57_568_490_411.0 + y * (1_029_532_985.0 + y * (9_494_680.718
      + y * (59_272.648_53 + y * (267.853_271_2 + y))));
    numerator / denominator
  } else {
    let z = 8.0 / ax;
    let y = z * z;
    let xx = ax - 0.785_398_164;
    let p = 1.0 + y * (-0.109_862_862_7e-2 + y * (0.273_451_040_7e-4
      + y * (-0.207_337_063_9e-5 + y * 0.209_388_721_1e-6)));
    let q = -0.156_249_999_5e-1 + y * (0.143_048_876_5e-3
      + y * (-0.691_114_765_1e-5 + y * (0.762_109_516_1e-6 - y * 0.934_935_152e-7)));
    (consts::FRAC_2_PI / ax).sqrt() * (xx.cos() * p - z * xx.sin() * q)
  }
}

/// Fresnel sine integral, `S(x) = integral of sin(pi t^2 / 2) from 0 to x`.
pub fn fresnel_s(x: f64) -> f64 {
  fresnel(x).1
}

/// Fresnel cosine integral, `C(x) = integral of cos(pi t^2 / 2) from 0 to x`.
pub fn fresnel_c(x: f64) -> f64 {
  fresnel(x).0
}

/// Below this magnitude the power series is used; above it, the
/// asymptotic expansion.
const FRESNEL_SERIES_LIMIT: f64 = 3.0;

const SERIES_MAX_TERMS: usize = 100;

/// Returns `(C(x), S(x))`. Both functions are odd.
fn fresnel(x: f64) -> (f64, f64) {
  if x.is_nan() {
    return (f64::NAN, f64::NAN);
  }
  let ax = x.abs();
  let (c, s) = if ax < FRESNEL_SERIES_LIMIT {
    fresnel_series(ax)
  } else if ax.is_infinite() {
    (0.5, 0.5)
  } else {
    fresnel_asymptotic(ax)
  };
  (c.copysign(x), s.copysign(x))
}

fn fresnel_series(x: f64) -> (f64, f64) {
  // Terms of C: (-1)^n (pi/2)^(2n) x^(4n+1) / ((2n)! (4n+1))
  // Terms of S: (-1)^n (pi/2)^(2n+1) x^(4n+3) / ((2n+1)! (4n+3))
  // Both share the factor a_k = (pi/2)^k x^(2k) / k!, with k = 2n or
  // 2n+1, scaled by x / (2k+1).
  let half_pi_x2 = consts::FRAC_PI_2 * x * x;
  let mut c = 0.0;
  let mut s = 0.0;
  let mut a = 1.0;
  for k in 0..(2 * SERIES_MAX_TERMS) {
    if k > 0 {
      a *= half_pi_x2 / k as f64;
    }
    let sign = if (k / 2) % 2 == 0 { 1.0 } else { -1.0 };
    let term = sign * a * x / (2 * k + 1) as f64;
    if k % 2 == 0 {
      c += term;
    } else {
      s += term;
    }
    if k > 2 && term.abs() < 1e-17 {
      break;
    }
  }
  (c, s)
}

fn fresnel_asymptotic(x: f64) -> (f64, f64) {
  let z = consts::PI * x * x;
  let z2 = z * z;
  let f = asymptotic_sum(|m| -((4 * m - 3) * (4 * m - 1)) as f64 / z2) / (consts::PI * x);
  let g = asymptotic_sum(|m| -((4 * m - 1) * (4 * m + 1)) as f64 / z2) / (consts::PI * consts::PI * x * x * x);
  let (sin, cos) = (consts::FRAC_PI_2 * x * x).sin_cos();
  (0.5 + f * sin - g * cos, 0.5 - f * cos - g * sin)
}

/// Sums `1 + t1 + t2 + ...` where `t_m = t_(m-1) * ratio(m)`, stopping
/// once the terms stop shrinking.
fn asymptotic_sum(ratio: impl Fn(i64) -> f64) -> f64 {
  let mut term = 1.0_f64;
  let mut sum = 1.0;
  for m in 1..=(SERIES_MAX_TERMS as i64) {
    let next = term * ratio(m);
    if next.abs() >= term.abs() {
      break;
    }
    sum += next;
    term = next;
  }
  sum
}

const AGM_TOLERANCE: f64 = 1e-10;
const AGM_MAX_ITERATIONS: usize = 50;

/// Complete elliptic integral of the first kind, `K(k)` with modulus
/// `k`, by the arithmetic-geometric mean. Infinite for `|k| >= 1`.
pub fn elliptic_k(k: f64) -> f64 {
  if k.is_nan() {
    return f64::NAN;
  }
  if k.abs() >= 1.0 {
    return f64::INFINITY;
  }
  let mut a = 1.0;
  let mut b = (1.0 - k * k).sqrt();
  for _ in 0..AGM_MAX_ITERATIONS {
    if (a - b).abs() < AGM_TOLERANCE {
      break;
    }
    let next_a = (a + b) / 2.0;
    b = (a * b).sqrt();
    a = next_a;
  }
  consts::PI / (2.0 * a)
}

/// Complete elliptic integral of the second kind, `E(k)` with modulus
/// `k`, by the arithmetic-geometric mean. NaN for `|k| > 1`.
pub fn elliptic_e(k: f64) -> f64 {
  if k.is_nan() || k.abs() > 1.0 {
    return f64::NAN;
  }
  if k.abs() == 1.0 {
    return 1.0;
  }
  let mut a = 1.0;
  let mut b = (1.0 - k * k).sqrt();
  // E = K * (1 - sum of 2^(n-1) c_n^2), c_0 = k
  let mut sum = k * k / 2.0;
  let mut weight = 0.5;
  for _ in 0..AGM_MAX_ITERATIONS {
    let c = (a - b) / 2.0;
    let next_a = (a + b) / 2.0;
    b = (a * b).sqrt();
    a = next_a;
    weight *= 2.0;
    sum += weight * c * c;
    if c.abs() < AGM_TOLERANCE {
      break;
    }
  }
  consts::PI / (2.0 * a) * (1.0 - sum)
}
