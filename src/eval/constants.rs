
//! Named constants available to every expression.

use phf::phf_map;

use std::f64::consts;

/// Golden ratio, (1 + sqrt(5)) / 2.
const PHI: f64 = 1.618_033_988_749_895;

/// Euler–Mascheroni constant. Named `eulerGamma` since `gamma` is the
/// gamma function.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

pub static CONSTANTS: phf::Map<&'static str, f64> = phf_map! {
  "pi" => consts::PI,
  "e" => consts::E,
  "tau" => consts::TAU,
  "phi" => PHI,
  "eulerGamma" => EULER_GAMMA,
  "Infinity" => f64::INFINITY,
  "NaN" => f64::NAN,
  // Speed of light in vacuum, m/s.
  "c" => 299_792_458.0,
  // Standard gravity, m/s^2.
  "g" => 9.806_65,
  // Planck constant, J s.
  "h" => 6.626_070_15e-34,
  // Reduced Planck constant, J s.
  "hbar" => 1.054_571_817e-34,
  // Boltzmann constant, J/K.
  "k_B" => 1.380_649e-23,
  // Avogadro constant, 1/mol.
  "N_A" => 6.022_140_76e23,
};

pub fn get(name: &str) -> Option<f64> {
  CONSTANTS.get(name).copied()
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_lookup() {
    assert_eq!(get("pi"), Some(consts::PI));
    assert_eq!(get("e"), Some(consts::E));
    assert_eq!(get("x"), None);
    assert_eq!(get("PI"), None);
  }

  #[test]
  fn test_phi() {
    assert_abs_diff_eq!(PHI, (1.0 + 5f64.sqrt()) / 2.0, epsilon = 1e-15);
  }
}
