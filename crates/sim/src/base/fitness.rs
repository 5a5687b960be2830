use std::fmt;
use std::iter::Product;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// A fitness multiplier constrained to the range [0.0, 1.0].
///
/// For a genotype this is the product of `1 - daily_cost_of_resistance` over
/// its expressed alleles: a genotype that carries no costly allele has neutral
/// fitness 1.0, and every costly allele scales it down.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct FitnessValue(f64);

impl FitnessValue {
    /// Fitness of a genotype without any cost of resistance.
    pub const NEUTRAL: Self = Self(1.0);

    /// Creates a new FitnessValue, clamping the input to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Fitness left over after paying a daily cost of resistance.
    pub fn from_cost(cost: f64) -> Self {
        Self::new(1.0 - cost)
    }

    /// Multiplicative fitness over a set of independent costs.
    pub fn from_costs<I>(costs: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        costs.into_iter().map(Self::from_cost).product()
    }

    /// Returns the inner f64 value.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// True if no cost has been applied.
    pub fn is_neutral(self) -> bool {
        self.0 == 1.0
    }
}

impl From<FitnessValue> for f64 {
    fn from(fitness: FitnessValue) -> Self {
        fitness.0
    }
}

impl From<f64> for FitnessValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Default for FitnessValue {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for FitnessValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Mul for FitnessValue {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.0 * rhs.0)
    }
}

impl Product for FitnessValue {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::NEUTRAL, Mul::mul)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_new_clamps() {
        assert!(approx_eq(FitnessValue::new(-1.0).get(), 0.0));
        assert!(approx_eq(FitnessValue::new(0.5).get(), 0.5));
        assert!(approx_eq(FitnessValue::new(2.0).get(), 1.0));
    }

    #[test]
    fn test_from_cost() {
        assert!(approx_eq(FitnessValue::from_cost(0.1).get(), 0.9));
        assert!(FitnessValue::from_cost(0.0).is_neutral());
    }

    #[test]
    fn test_from_costs_is_multiplicative() {
        let f = FitnessValue::from_costs([0.1, 0.0, 0.2]);
        assert!(approx_eq(f.get(), 0.72));
    }

    #[test]
    fn test_from_no_costs_is_neutral() {
        let f = FitnessValue::from_costs(std::iter::empty());
        assert!(f.is_neutral());
        assert_eq!(f, FitnessValue::default());
    }

    #[test]
    fn test_mul() {
        let f = FitnessValue::new(0.5) * FitnessValue::new(0.5);
        assert!(approx_eq(f.get(), 0.25));
    }

    #[test]
    fn test_display_precision() {
        let f = FitnessValue::new(0.72);
        assert_eq!(format!("{f:.3}"), "0.720");
        assert_eq!(f.to_string(), "0.72");
    }
}
