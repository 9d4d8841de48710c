//! Immutable dimensioned values and their arithmetic

use std::fmt;
use std::sync::Arc;

use super::arg::{Operand, UnitArg};
use super::piece::{self, denormalize, normalize, UnitPiece};
use super::{BaseDimension, DimensionVector};
use crate::context::Context;
use crate::error::{Result, UnitError};
use crate::numeric::{Numeric, Strategy};
use crate::parser;
use crate::registry::SI;

/// Exponent components at or below this magnitude are not expressed by
/// unit-system conversion
const SYSTEM_EPSILON: f64 = 1e-12;

/// A magnitude tagged with a unit expression, e.g. `9.81 m / s^2`.
///
/// Values are immutable: every operation returns a new value. The unit
/// pieces never name the same unit twice and never carry a zero power.
pub struct UnitValue<N: Numeric> {
    value: Option<N>,
    units: Vec<UnitPiece<N>>,
    dimensions: DimensionVector<N>,
    ctx: Arc<Context<N>>,
}

/// Mutable staging area for a [`UnitValue`]; pieces are combined on entry.
pub(crate) struct UnitBuilder<N: Numeric> {
    value: Option<N>,
    units: Vec<UnitPiece<N>>,
    dimensions: DimensionVector<N>,
    ctx: Arc<Context<N>>,
}

impl<N: Numeric> UnitBuilder<N> {
    pub(crate) fn new(
        ctx: &Arc<Context<N>>,
        units: Vec<UnitPiece<N>>,
        dimensions: DimensionVector<N>,
    ) -> Result<Self> {
        let units = piece::combine_duplicates(units, &ctx.strategy)?;
        Ok(Self {
            value: None,
            units,
            dimensions,
            ctx: Arc::clone(ctx),
        })
    }

    pub(crate) fn units(&self) -> &[UnitPiece<N>] {
        &self.units
    }

    pub(crate) fn with_value(mut self, value: Option<N>) -> Self {
        self.value = value;
        self
    }

    pub(crate) fn build(self) -> UnitValue<N> {
        UnitValue {
            value: self.value,
            units: self.units,
            dimensions: self.dimensions,
            ctx: self.ctx,
        }
    }
}

impl<N: Numeric> UnitValue<N> {
    /// Parse `"[number] [unit expression]"`
    pub(crate) fn parse(text: &str, ctx: &Arc<Context<N>>) -> Result<Self> {
        let parsed = parser::parse(text, &ctx.registry, &ctx.strategy)?;
        Ok(UnitBuilder::new(ctx, parsed.pieces, parsed.dimensions)?
            .with_value(parsed.value)
            .build())
    }

    /// Parse a unit expression that carries no literal and attach `value`
    pub(crate) fn parse_with_value(text: &str, value: Option<N>, ctx: &Arc<Context<N>>) -> Result<Self> {
        let parsed = parser::parse(text, &ctx.registry, &ctx.strategy)?;
        if parsed.value.is_some() {
            return Err(UnitError::MalformedArguments(format!(
                "unit expression \"{text}\" must not contain a value"
            )));
        }
        Ok(UnitBuilder::new(ctx, parsed.pieces, parsed.dimensions)?
            .with_value(value)
            .build())
    }

    /// A bare number with no unit
    pub(crate) fn dimensionless(value: N, ctx: &Arc<Context<N>>) -> Result<Self> {
        let dimensions = DimensionVector::zero(&ctx.strategy)?;
        Ok(UnitBuilder::new(ctx, Vec::new(), dimensions)?
            .with_value(Some(value))
            .build())
    }

    pub fn value(&self) -> Option<&N> {
        self.value.as_ref()
    }

    pub fn units(&self) -> &[UnitPiece<N>] {
        &self.units
    }

    pub fn dimensions(&self) -> &DimensionVector<N> {
        &self.dimensions
    }

    /// Exponent of one base dimension
    pub fn dimension(&self, dimension: BaseDimension) -> &N {
        self.dimensions.get(dimension)
    }

    pub fn is_valueless(&self) -> bool {
        self.value.is_none()
    }

    fn strategy(&self) -> &Strategy<N> {
        &self.ctx.strategy
    }

    fn operand<'a>(&self, arg: impl Into<UnitArg<'a, N>>) -> Result<Operand<'a, N>> {
        arg.into().resolve(&self.ctx)
    }

    /// Same unit expression with a different value
    fn rebuild(&self, value: Option<N>) -> UnitValue<N> {
        UnitValue {
            value,
            units: self.units.clone(),
            dimensions: self.dimensions.clone(),
            ctx: Arc::clone(&self.ctx),
        }
    }

    /// Canonical magnitude, treating a missing value as one
    fn canonical(&self) -> Result<N> {
        let s = self.strategy();
        match &self.value {
            Some(v) => normalize(&self.units, v, s),
            None => normalize(&self.units, &s.one()?, s),
        }
    }

    fn require_value(&self, operation: &'static str) -> Result<&N> {
        self.value.as_ref().ok_or(UnitError::MissingValue { operation })
    }

    fn require_same_base(&self, other: &UnitValue<N>) -> Result<()> {
        if self.dimensions.equals(&other.dimensions, self.strategy()) {
            Ok(())
        } else {
            Err(UnitError::DimensionMismatch {
                left: self.dimensions.to_string(),
                right: other.dimensions.to_string(),
            })
        }
    }

    // Arithmetic

    /// Sum in the units of `self`. Both sides need a value and the same
    /// dimensions.
    pub fn add<'a>(&self, other: impl Into<UnitArg<'a, N>>) -> Result<Self> {
        self.additive(other, "add", Strategy::<N>::add)
    }

    /// Difference in the units of `self`
    pub fn sub<'a>(&self, other: impl Into<UnitArg<'a, N>>) -> Result<Self> {
        self.additive(other, "subtract", Strategy::<N>::sub)
    }

    fn additive<'a>(
        &self,
        other: impl Into<UnitArg<'a, N>>,
        operation: &'static str,
        combine: fn(&Strategy<N>, &N, &N) -> Result<N>,
    ) -> Result<Self> {
        let other = self.operand(other)?;
        let s = self.strategy();
        let left = self.require_value(operation)?;
        let right = other.require_value(operation)?;
        self.require_same_base(&other)?;

        let a = normalize(&self.units, left, s)?;
        let b = normalize(&other.units, right, s)?;
        let value = denormalize(&self.units, &combine(s, &a, &b)?, None, s)?;
        Ok(self.rebuild(Some(value)))
    }

    /// Product; unit pieces are concatenated then combined
    pub fn mul<'a>(&self, other: impl Into<UnitArg<'a, N>>) -> Result<Self> {
        let other = self.operand(other)?;
        self.product(&other, false)
    }

    /// Quotient; the divisor's powers are negated
    pub fn div<'a>(&self, other: impl Into<UnitArg<'a, N>>) -> Result<Self> {
        let other = self.operand(other)?;
        self.product(&other, true)
    }

    fn product(&self, other: &UnitValue<N>, divide: bool) -> Result<Self> {
        let s = self.strategy();

        let mut units = self.units.clone();
        units.extend(other.units.iter().map(|p| UnitPiece {
            unit: Arc::clone(&p.unit),
            prefix: Arc::clone(&p.prefix),
            power: if divide { p.power.negated() } else { p.power.clone() },
        }));
        let dimensions = if divide {
            self.dimensions.sub(&other.dimensions, s)?
        } else {
            self.dimensions.add(&other.dimensions, s)?
        };
        let builder = UnitBuilder::new(&self.ctx, units, dimensions)?;

        let value = if self.value.is_none() && other.value.is_none() {
            None
        } else {
            let a = self.canonical()?;
            let b = other.canonical()?;
            let combined = if divide { s.div(&a, &b)? } else { s.mul(&a, &b)? };
            Some(denormalize(builder.units(), &combined, None, s)?)
        };
        Ok(builder.with_value(value).build())
    }

    /// Raise value and every unit power to `exponent`
    pub fn pow(&self, exponent: &N) -> Result<Self> {
        let s = self.strategy();
        let units = self
            .units
            .iter()
            .map(|p| {
                Ok(UnitPiece {
                    unit: Arc::clone(&p.unit),
                    prefix: Arc::clone(&p.prefix),
                    power: s.mul(&p.power, exponent)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let dimensions = self.dimensions.scale(exponent, s)?;
        let value = self.value.as_ref().map(|v| s.pow(v, exponent)).transpose()?;
        Ok(UnitBuilder::new(&self.ctx, units, dimensions)?.with_value(value).build())
    }

    pub fn sqrt(&self) -> Result<Self> {
        let half = self.strategy().from_literal(0.5)?;
        self.pow(&half)
    }

    /// Absolute value, taken on the canonical magnitude
    pub fn abs(&self) -> Result<Self> {
        self.map_canonical(|v| v.absolute())
    }

    /// Negation, taken on the canonical magnitude
    pub fn neg(&self) -> Result<Self> {
        self.map_canonical(|v| v.negated())
    }

    fn map_canonical(&self, f: impl FnOnce(&N) -> N) -> Result<Self> {
        let Some(value) = &self.value else {
            return Ok(self.get_units());
        };
        let s = self.strategy();
        let canonical = f(&normalize(&self.units, value, s)?);
        let value = denormalize(&self.units, &canonical, None, s)?;
        Ok(self.rebuild(Some(value)))
    }

    // Conversion

    /// Express in the units of a valueless `target` with the same dimensions.
    /// A valueless source converts as one.
    pub fn to<'a>(&self, target: impl Into<UnitArg<'a, N>>) -> Result<Self> {
        let target = self.operand(target)?;
        if target.value.is_some() {
            return Err(UnitError::InvalidConversionTarget(target.to_string()));
        }
        self.require_same_base(&target)?;

        let canonical = self.canonical()?;
        let value = denormalize(&target.units, &canonical, None, self.strategy())?;
        Ok(target.rebuild(Some(value)))
    }

    /// Converted value as a bare number
    pub fn to_number<'a>(&self, target: impl Into<UnitArg<'a, N>>) -> Result<N> {
        self.to(target)?
            .value
            .ok_or(UnitError::MissingValue { operation: "convert" })
    }

    pub fn to_si(&self) -> Result<Self> {
        self.to_system(SI)
    }

    /// Express in the base units of a registered unit system, one piece per
    /// nonzero dimension. A valueless source stays valueless.
    ///
    /// Every system entry maps a quantity to a unit of that quantity; custom
    /// systems that do not are rejected when registered.
    pub fn to_system(&self, name: &str) -> Result<Self> {
        let system = self
            .ctx
            .registry
            .system(name)
            .ok_or_else(|| UnitError::UnknownSystem(name.to_string()))?;

        let mut units = Vec::new();
        for (dimension, exponent) in self.dimensions.iter() {
            if exponent.to_f64().abs() <= SYSTEM_EPSILON {
                continue;
            }
            let entry = system.get(dimension.name()).ok_or_else(|| {
                UnitError::InvalidConversionTarget(format!(
                    "cannot express dimension {dimension} in unit system {name}"
                ))
            })?;
            units.push(UnitPiece {
                unit: Arc::clone(&entry.unit),
                prefix: Arc::clone(&entry.prefix),
                power: exponent.clone(),
            });
        }

        let dimensions = piece::dimensions_of(&units, self.strategy())?;
        let target = UnitBuilder::new(&self.ctx, units, dimensions)?.build();
        match self.value {
            Some(_) => self.to(&target),
            None => Ok(target),
        }
    }

    /// Split across `parts`, e.g. `1.5 h` into `[1 h, 30 min]`.
    ///
    /// Every part but the last takes the whole amount (rounded when already
    /// integral within tolerance, truncated otherwise); the last part takes
    /// the remainder.
    pub fn split<'a, I, A>(&self, parts: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = A>,
        A: Into<UnitArg<'a, N>>,
    {
        self.require_value("split")?;
        let parts = parts
            .into_iter()
            .map(|p| self.operand(p))
            .collect::<Result<Vec<_>>>()?;
        let Some((last, leading)) = parts.split_last() else {
            return Err(UnitError::MalformedArguments(
                "split needs at least one target unit".to_string(),
            ));
        };

        let s = self.strategy();
        let mut result = Vec::with_capacity(parts.len());
        let mut remainder: Option<UnitValue<N>> = None;

        for part in leading {
            let source = remainder.as_ref().unwrap_or(self);
            let converted = source.to(&**part)?;
            let amount = converted.require_value("split")?;
            let rounded = amount.rounded();
            let whole = if s.equals(&rounded, amount) {
                rounded
            } else {
                amount.truncated()
            };
            let taken = part.rebuild(Some(whole));
            remainder = Some(converted.sub(&taken)?);
            result.push(taken);
        }

        let source = remainder.as_ref().unwrap_or(self);
        let mut rest = source.to(&**last)?;
        let zero = s.zero()?;
        if rest.value.as_ref().is_some_and(|v| s.equals(v, &zero)) {
            rest = rest.rebuild(Some(zero));
        }
        result.push(rest);
        Ok(result)
    }

    // Comparison

    /// Same dimensions and equal canonical magnitudes
    pub fn equals<'a>(&self, other: impl Into<UnitArg<'a, N>>) -> Result<bool> {
        let other = self.operand(other)?;
        if !self.dimensions.equals(&other.dimensions, self.strategy()) {
            return Ok(false);
        }
        match (&self.value, &other.value) {
            (None, None) => Ok(true),
            (Some(a), Some(b)) => {
                let s = self.strategy();
                Ok(s.equals(&normalize(&self.units, a, s)?, &normalize(&other.units, b, s)?))
            }
            _ => Ok(false),
        }
    }

    /// Same dimensions, values ignored
    pub fn equal_base<'a>(&self, other: impl Into<UnitArg<'a, N>>) -> Result<bool> {
        let other = self.operand(other)?;
        Ok(self.dimensions.equals(&other.dimensions, self.strategy()))
    }

    /// Whether the dimensions are those of a named quantity (`"LENGTH"`,
    /// `"FORCE"`, ...). Unknown quantities never match.
    pub fn has_base(&self, quantity: &str) -> bool {
        self.ctx
            .registry
            .quantity(quantity)
            .is_some_and(|dims| self.dimensions.equals(dims, self.strategy()))
    }

    pub fn is_compound(&self) -> bool {
        piece::is_compound(&self.units)
    }

    // Copies

    /// Deep copy; the value goes through the configured clone hook
    pub fn try_clone(&self) -> Result<Self> {
        let value = self
            .value
            .as_ref()
            .map(|v| self.strategy().clone_value(v))
            .transpose()?;
        Ok(self.rebuild(value))
    }

    /// The unit expression alone
    pub fn get_units(&self) -> Self {
        self.rebuild(None)
    }

    // Formatting

    /// Render as `value units`, optionally limiting significant digits
    pub fn format(&self, precision: Option<usize>) -> String {
        let units = self.format_units();
        match (&self.value, units.is_empty()) {
            (Some(v), true) => v.render(precision),
            (Some(v), false) => format!("{} {}", v.render(precision), units),
            (None, _) => units,
        }
    }

    /// Unit expression with positive powers over negative ones,
    /// e.g. `(kg m) / s^2`
    pub fn format_units(&self) -> String {
        let numerator: Vec<&UnitPiece<N>> = self.units.iter().filter(|p| p.power.to_f64() > 0.0).collect();
        let denominator: Vec<&UnitPiece<N>> = self.units.iter().filter(|p| p.power.to_f64() < 0.0).collect();

        let num = numerator
            .iter()
            .map(|p| with_power(p, &p.power, 1.0))
            .collect::<Vec<_>>()
            .join(" ");
        let den = denominator
            .iter()
            .map(|p| {
                if numerator.is_empty() {
                    format!("{}^{}", p.symbol(), p.power.render(None))
                } else {
                    with_power(p, &p.power.negated(), -1.0)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        let num = if numerator.len() > 1 && !denominator.is_empty() {
            format!("({num})")
        } else {
            num
        };
        let den = if denominator.len() > 1 && !numerator.is_empty() {
            format!("({den})")
        } else {
            den
        };

        match (numerator.is_empty(), denominator.is_empty()) {
            (false, false) => format!("{num} / {den}"),
            (false, true) => num,
            (true, _) => den,
        }
    }
}

/// `symbol` or `symbol^power` when the original power differs from `unit`
fn with_power<N: Numeric>(piece: &UnitPiece<N>, shown: &N, unit: f64) -> String {
    if (piece.power.to_f64() - unit).abs() > piece::POWER_EPSILON {
        format!("{}^{}", piece.symbol(), shown.render(None))
    } else {
        piece.symbol()
    }
}

impl<N: Numeric> fmt::Display for UnitValue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(None))
    }
}

impl<N: Numeric> fmt::Debug for UnitValue<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitValue")
            .field("value", &self.value)
            .field("units", &self.units)
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::UnitFactory;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn factory() -> UnitFactory<f64> {
        UnitFactory::new()
    }

    #[test]
    fn test_add_converts_to_left_units() {
        let f = factory();
        let sum = f.unit("1 m").unwrap().add("100 cm").unwrap();
        assert_eq!(sum.to_string(), "2 m");
    }

    #[test]
    fn test_sub_keeps_left_prefix() {
        let f = factory();
        let diff = f.unit("1 km").unwrap().sub("250 m").unwrap();
        assert_eq!(diff.to_string(), "0.75 km");
    }

    #[test]
    fn test_add_needs_values() {
        let f = factory();
        let err = f.unit("m").unwrap().add("1 m").unwrap_err();
        assert_eq!(err, crate::UnitError::MissingValue { operation: "add" });
    }

    #[test]
    fn test_mul_valueless_rules() {
        let f = factory();
        let both = f.unit("m").unwrap().mul("s").unwrap();
        assert!(both.is_valueless());
        assert_eq!(both.to_string(), "m s");

        let one_side = f.unit("m").unwrap().mul("3 s").unwrap();
        assert_eq!(one_side.to_string(), "3 m s");
    }

    #[test]
    fn test_div_negates_powers() {
        let f = factory();
        let speed = f.unit("100 km").unwrap().div("2 h").unwrap();
        assert_eq!(speed.format_units(), "km / h");
        assert_relative_eq!(*speed.value().unwrap(), 50.0, max_relative = 1e-12);
        assert!(!speed.has_base("LENGTH"));
    }

    #[test]
    fn test_pow_and_sqrt() {
        let f = factory();
        let area = f.unit("3 m").unwrap().pow(&2.0).unwrap();
        assert_eq!(area.to_string(), "9 m^2");
        assert!(area.has_base("SURFACE"));

        let side = area.sqrt().unwrap();
        assert_eq!(side.to_string(), "3 m");
    }

    #[test]
    fn test_to_affine() {
        let f = factory();
        let hot = f.unit("100 degC").unwrap().to("degF").unwrap();
        assert_relative_eq!(*hot.value().unwrap(), 212.0, max_relative = 1e-12);
        assert_eq!(hot.format_units(), "degF");
    }

    #[test]
    fn test_to_valueless_source() {
        let f = factory();
        let factor = f.unit("km").unwrap().to("m").unwrap();
        assert_eq!(factor.to_string(), "1000 m");
    }

    #[test]
    fn test_to_system() {
        let f = factory();
        let us = f.unit("300 K").unwrap().to_system("us").unwrap();
        assert_relative_eq!(*us.value().unwrap(), 80.33, max_relative = 1e-9);
        assert_eq!(us.format_units(), "degF");

        let cgs = f.unit("1 N").unwrap().to_system("cgs").unwrap();
        assert_eq!(cgs.format_units(), "(g cm) / s^2");
        assert_relative_eq!(*cgs.value().unwrap(), 1e5, max_relative = 1e-9);
    }

    #[test]
    fn test_abs_and_neg_use_canonical_magnitude() {
        let f = factory();
        let minus = f.unit("-5 m").unwrap();
        assert_eq!(minus.abs().unwrap().to_string(), "5 m");
        assert_eq!(minus.neg().unwrap().to_string(), "5 m");

        let celsius = f.unit("1 degC").unwrap().neg().unwrap();
        assert_relative_eq!(*celsius.value().unwrap(), -547.3, max_relative = 1e-12);
    }

    #[test]
    fn test_format_denominator_only() {
        let f = factory();
        assert_eq!(f.unit("5 s^-1").unwrap().to_string(), "5 s^-1");
        assert_eq!(f.unit("1 m / (s kg)").unwrap().format_units(), "m / (s kg)");
    }

    #[test]
    fn test_format_precision() {
        let f = factory();
        let third = f.unit("1 m").unwrap().div("3").unwrap();
        assert_eq!(third.format(Some(3)), "0.333 m");
    }
}
