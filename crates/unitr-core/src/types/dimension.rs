//! Base dimensions and dimension vectors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, UnitError};
use crate::numeric::{Numeric, Strategy};

/// Number of orthogonal base dimensions tracked by every vector
pub const BASE_DIMENSION_COUNT: usize = 9;

/// Two dimension components closer than this are considered equal
pub(crate) const DIMENSION_EPSILON: f64 = 1e-12;

/// Orthogonal physical base dimensions, in vector index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseDimension {
    Mass,
    Length,
    Time,
    Current,
    Temperature,
    LuminousIntensity,
    AmountOfSubstance,
    Angle,
    Bit,
}

impl BaseDimension {
    /// All base dimensions, index-aligned with [`DimensionVector`]
    pub const ALL: [BaseDimension; BASE_DIMENSION_COUNT] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::LuminousIntensity,
        BaseDimension::AmountOfSubstance,
        BaseDimension::Angle,
        BaseDimension::Bit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Table name, also the key used by unit systems
    pub fn name(self) -> &'static str {
        match self {
            BaseDimension::Mass => "MASS",
            BaseDimension::Length => "LENGTH",
            BaseDimension::Time => "TIME",
            BaseDimension::Current => "CURRENT",
            BaseDimension::Temperature => "TEMPERATURE",
            BaseDimension::LuminousIntensity => "LUMINOUS_INTENSITY",
            BaseDimension::AmountOfSubstance => "AMOUNT_OF_SUBSTANCE",
            BaseDimension::Angle => "ANGLE",
            BaseDimension::Bit => "BIT",
        }
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Exponents over the base dimensions, e.g. velocity = `LENGTH^1 TIME^-1`.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionVector<N> {
    exponents: [N; BASE_DIMENSION_COUNT],
}

impl<N: Numeric> DimensionVector<N> {
    /// The dimensionless vector
    pub fn zero(strategy: &Strategy<N>) -> Result<Self> {
        let zero = strategy.zero()?;
        Ok(Self {
            exponents: std::array::from_fn(|_| zero.clone()),
        })
    }

    /// Build from table literals
    pub fn from_f64(exponents: &[f64; BASE_DIMENSION_COUNT], strategy: &Strategy<N>) -> Result<Self> {
        Self::try_build(|i| strategy.from_literal(exponents[i]))
    }

    pub fn get(&self, dimension: BaseDimension) -> &N {
        &self.exponents[dimension.index()]
    }

    /// Pairs of (dimension, exponent) in index order
    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, &N)> {
        BaseDimension::ALL.into_iter().zip(self.exponents.iter())
    }

    /// Elementwise sum (multiplication of quantities)
    pub fn add(&self, other: &Self, strategy: &Strategy<N>) -> Result<Self> {
        Self::try_build(|i| strategy.add(&self.exponents[i], &other.exponents[i]))
    }

    /// Elementwise difference (division of quantities)
    pub fn sub(&self, other: &Self, strategy: &Strategy<N>) -> Result<Self> {
        Self::try_build(|i| strategy.sub(&self.exponents[i], &other.exponents[i]))
    }

    /// Multiply every exponent by `factor` (raising a quantity to a power)
    pub fn scale(&self, factor: &N, strategy: &Strategy<N>) -> Result<Self> {
        Self::try_build(|i| strategy.mul(&self.exponents[i], factor))
    }

    /// Tolerant equality: every component differs by less than 1e-12.
    pub fn equals(&self, other: &Self, strategy: &Strategy<N>) -> bool {
        self.exponents
            .iter()
            .zip(other.exponents.iter())
            .all(|(a, b)| match strategy.sub(a, b) {
                Ok(diff) => diff.to_f64().abs() < DIMENSION_EPSILON,
                Err(_) => false,
            })
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents
            .iter()
            .all(|e| e.to_f64().abs() < DIMENSION_EPSILON)
    }

    fn try_build(mut f: impl FnMut(usize) -> Result<N>) -> Result<Self> {
        let mut exponents = Vec::with_capacity(BASE_DIMENSION_COUNT);
        for i in 0..BASE_DIMENSION_COUNT {
            exponents.push(f(i)?);
        }
        let exponents = exponents
            .try_into()
            .map_err(|_| UnitError::Arithmetic { operation: "dimension" })?;
        Ok(Self { exponents })
    }
}

impl<N: Numeric> fmt::Display for DimensionVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .filter(|(_, e)| e.to_f64().abs() >= DIMENSION_EPSILON)
            .map(|(dim, e)| {
                if (e.to_f64() - 1.0).abs() < DIMENSION_EPSILON {
                    dim.name().to_string()
                } else {
                    format!("{}^{}", dim.name(), e.render(None))
                }
            })
            .collect();

        if parts.is_empty() {
            write!(f, "dimensionless")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericOptions;

    fn strategy() -> Strategy<f64> {
        Strategy::new(NumericOptions::new())
    }

    fn velocity(s: &Strategy<f64>) -> DimensionVector<f64> {
        DimensionVector::from_f64(&[0.0, 1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], s).unwrap()
    }

    #[test]
    fn test_index_order_is_fixed() {
        for (i, dim) in BaseDimension::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
        }
        assert_eq!(BaseDimension::ALL[7].name(), "ANGLE");
    }

    #[test]
    fn test_add_sub_scale() {
        let s = strategy();
        let v = velocity(&s);
        let time = DimensionVector::from_f64(&[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], &s).unwrap();

        let length = v.add(&time, &s).unwrap();
        assert_eq!(*length.get(BaseDimension::Length), 1.0);
        assert_eq!(*length.get(BaseDimension::Time), 0.0);

        let accel = v.sub(&time, &s).unwrap();
        assert_eq!(*accel.get(BaseDimension::Time), -2.0);

        let squared = v.scale(&2.0, &s).unwrap();
        assert_eq!(*squared.get(BaseDimension::Length), 2.0);
        assert_eq!(*squared.get(BaseDimension::Time), -2.0);
    }

    #[test]
    fn test_tolerant_equality() {
        let s = strategy();
        let v = velocity(&s);
        let nudged = DimensionVector::from_f64(
            &[0.0, 1.0 + 1e-14, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            &s,
        )
        .unwrap();
        let other = DimensionVector::from_f64(&[0.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], &s).unwrap();

        assert!(v.equals(&nudged, &s));
        assert!(!v.equals(&other, &s));
    }

    #[test]
    fn test_display() {
        let s = strategy();
        assert_eq!(velocity(&s).to_string(), "LENGTH TIME^-1");
        assert_eq!(DimensionVector::zero(&s).unwrap().to_string(), "dimensionless");
    }
}
