//! Numeric backends
//!
//! Every computation on magnitudes, scales and exponents goes through the
//! [`Numeric`] trait, optionally overridden per factory by the hooks in
//! [`NumericOptions`]. The dimensional algebra never names a concrete number
//! type.

mod strategy;

pub use strategy::{
    BinaryHook, CloneHook, EqualsHook, LiteralHook, NumericOptions, Strategy,
};

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};
use std::fmt;
use std::str::FromStr;

/// Relative tolerance used by the floating point equality test
const REL_EPSILON: f64 = 1e-12;
/// Absolute tolerance used by the floating point equality test
const ABS_EPSILON: f64 = 1e-15;

/// Native arithmetic of a value representation.
///
/// The checked operations return `None` when the representation has no
/// result (overflow, division by zero, an irrational power of an exact
/// type, ...). Callers turn that into [`crate::UnitError::Arithmetic`].
pub trait Numeric: Clone + fmt::Debug + Send + Sync + 'static {
    /// Whether values may be copied without a configured clone hook.
    const PRIMITIVE: bool;

    /// Convert a table constant or a literal computed in `f64`.
    fn from_f64(x: f64) -> Option<Self>;

    /// Parse the text of a numeric literal (`"12"`, `"-0.5"`, `"3e8"`).
    fn parse_literal(text: &str) -> Option<Self>;

    fn checked_add(&self, rhs: &Self) -> Option<Self>;
    fn checked_sub(&self, rhs: &Self) -> Option<Self>;
    fn checked_mul(&self, rhs: &Self) -> Option<Self>;
    fn checked_div(&self, rhs: &Self) -> Option<Self>;
    fn checked_pow(&self, exponent: &Self) -> Option<Self>;

    fn nearly_equal(&self, rhs: &Self) -> bool;

    /// Lossy view used for tolerance checks (`NaN` when not representable).
    fn to_f64(&self) -> f64;

    fn absolute(&self) -> Self;
    fn negated(&self) -> Self;
    /// Round toward zero
    fn truncated(&self) -> Self;
    /// Round half away from zero
    fn rounded(&self) -> Self;

    /// Render for display, optionally limited to `precision` significant digits.
    fn render(&self, precision: Option<usize>) -> String;
}

impl Numeric for f64 {
    const PRIMITIVE: bool = true;

    fn from_f64(x: f64) -> Option<Self> {
        Some(x)
    }

    fn parse_literal(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Some(self - rhs)
    }

    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Some(self * rhs)
    }

    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        Some(self / rhs)
    }

    fn checked_pow(&self, exponent: &Self) -> Option<Self> {
        if exponent.fract() == 0.0 && exponent.abs() <= i32::MAX as f64 {
            Some(self.powi(*exponent as i32))
        } else {
            Some(self.powf(*exponent))
        }
    }

    fn nearly_equal(&self, rhs: &Self) -> bool {
        nearly_equal_f64(*self, *rhs)
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn absolute(&self) -> Self {
        f64::abs(*self)
    }

    fn negated(&self) -> Self {
        -self
    }

    fn truncated(&self) -> Self {
        f64::trunc(*self)
    }

    fn rounded(&self) -> Self {
        f64::round(*self)
    }

    fn render(&self, precision: Option<usize>) -> String {
        match precision {
            Some(digits) if self.is_finite() => {
                let digits = digits.max(1);
                // Round through scientific notation, then print the shortest form
                let rounded = format!("{:.*e}", digits - 1, self)
                    .parse::<f64>()
                    .unwrap_or(*self);
                rounded.to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl Numeric for Decimal {
    const PRIMITIVE: bool = true;

    fn from_f64(x: f64) -> Option<Self> {
        <Decimal as FromPrimitive>::from_f64(x)
    }

    fn parse_literal(text: &str) -> Option<Self> {
        if text.contains(['e', 'E']) {
            Decimal::from_scientific(&text.to_lowercase()).ok()
        } else {
            Decimal::from_str(text).ok()
        }
    }

    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Decimal::checked_add(*self, *rhs)
    }

    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Decimal::checked_sub(*self, *rhs)
    }

    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Decimal::checked_mul(*self, *rhs)
    }

    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        Decimal::checked_div(*self, *rhs)
    }

    fn checked_pow(&self, exponent: &Self) -> Option<Self> {
        if exponent.fract().is_zero() {
            let exp = exponent.to_i64()?;
            MathematicalOps::checked_powi(self, exp)
        } else if *exponent == Decimal::new(5, 1) {
            MathematicalOps::sqrt(self)
        } else {
            MathematicalOps::checked_powd(self, *exponent)
        }
    }

    fn nearly_equal(&self, rhs: &Self) -> bool {
        self == rhs
    }

    fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    fn absolute(&self) -> Self {
        Decimal::abs(self)
    }

    fn negated(&self) -> Self {
        -*self
    }

    fn truncated(&self) -> Self {
        Decimal::trunc(self)
    }

    fn rounded(&self) -> Self {
        self.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    }

    fn render(&self, precision: Option<usize>) -> String {
        let value = match precision {
            Some(digits) => u32::try_from(digits.max(1))
                .ok()
                .and_then(|d| self.round_sf(d))
                .unwrap_or(*self),
            None => *self,
        };
        value.normalize().to_string()
    }
}

/// Tolerant comparison of two floats: equal if within `ABS_EPSILON`, or
/// within `REL_EPSILON` relative to the larger magnitude.
pub fn nearly_equal_f64(x: f64, y: f64) -> bool {
    if x == y {
        return true;
    }
    if x.is_nan() || y.is_nan() || !x.is_finite() || !y.is_finite() {
        return false;
    }
    let diff = (x - y).abs();
    diff <= ABS_EPSILON || diff <= REL_EPSILON * x.abs().max(y.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_nearly_equal_f64() {
        assert!(nearly_equal_f64(0.1 + 0.2, 0.3));
        assert!(nearly_equal_f64(1e20, 1e20 + 1.0));
        assert!(!nearly_equal_f64(1.0, 1.0001));
        assert!(!nearly_equal_f64(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_f64_render_precision() {
        assert_eq!(2.0f64.render(None), "2");
        assert_eq!(275.15f64.render(None), "275.15");
        assert_eq!((1.0f64 / 3.0).render(Some(3)), "0.333");
        assert_eq!(123456.0f64.render(Some(2)), "120000");
    }

    #[test]
    fn test_f64_pow_integer_and_fraction() {
        assert_eq!(2.0f64.checked_pow(&-2.0), Some(0.25));
        assert_eq!(9.0f64.checked_pow(&0.5), Some(3.0));
    }

    #[test]
    fn test_decimal_literals() {
        assert_eq!(Decimal::parse_literal("0.1"), Some(decimal("0.1")));
        assert_eq!(Decimal::parse_literal("3e2"), Some(decimal("300")));
        assert_eq!(Decimal::parse_literal("2.5E-1"), Some(decimal("0.25")));
        assert_eq!(<Decimal as Numeric>::from_f64(273.15), Some(decimal("273.15")));
        // Outside the 96-bit mantissa range
        assert_eq!(<Decimal as Numeric>::from_f64(1e30), None);
    }

    #[test]
    fn test_decimal_checked_ops() {
        let one = Decimal::ONE;
        assert_eq!(Numeric::checked_div(&one, &Decimal::ZERO), None);
        assert_eq!(
            Numeric::checked_pow(&decimal("10"), &decimal("-2")),
            Some(decimal("0.01"))
        );
        assert_eq!(
            Numeric::checked_pow(&decimal("16"), &decimal("0.5")),
            Some(decimal("4"))
        );
    }

    #[test]
    fn test_decimal_render() {
        assert_eq!(decimal("2.500").render(None), "2.5");
        assert_eq!(decimal("3.14159").render(Some(3)), "3.14");
        assert_eq!(decimal("-1.5").rounded(), decimal("-2"));
        assert_eq!(decimal("-1.5").truncated(), decimal("-1"));
    }
}
