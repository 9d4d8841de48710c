//! The unit algebra over non-float number types

mod common;

use common::decimal;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};
use unitr_core::{Numeric, NumericOptions, UnitError, UnitFactory};

// Decimal

fn decimal_factory() -> UnitFactory<Decimal> {
    UnitFactory::new()
}

#[test]
fn test_decimal_addition_is_exact() {
    let f = decimal_factory();
    let sum = f.add("0.1 m", "0.2 m").unwrap();
    assert_eq!(sum.value(), Some(&decimal("0.3")));
    assert_eq!(sum.to_string(), "0.3 m");

    let sum = f.add("1 m", "100 cm").unwrap();
    assert_eq!(sum.to_string(), "2 m");
}

#[test]
fn test_decimal_affine_addition() {
    let f = decimal_factory();
    let sum = f.add("1 degC", "1 degC").unwrap();
    assert_eq!(sum.value(), Some(&decimal("275.15")));
}

#[test]
fn test_decimal_conversion() {
    let f = decimal_factory();
    assert_eq!(f.to("1 km", "m").unwrap().to_string(), "1000 m");
    assert_eq!(f.to_si("1 N").unwrap().to_string(), "1 (kg m) / s^2");
    assert_eq!(f.mul("0.1 m", "3").unwrap().to_string(), "0.3 m");
}

#[test]
fn test_decimal_split() {
    let f = decimal_factory();
    let parts = f.unit("1.5 h").unwrap().split(["h", "min"]).unwrap();
    let rendered: Vec<String> = parts.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["1 h", "30 min"]);
}

#[test]
fn test_decimal_division_by_zero() {
    let f = decimal_factory();
    let err = f.div("1 m", "0 s").unwrap_err();
    assert_eq!(err, UnitError::Arithmetic { operation: "divide" });
}

// A closed interval of floats; copying it needs a configured clone hook

#[derive(Debug, Clone, PartialEq)]
struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    fn new(lo: f64, hi: f64) -> Self {
        Self { lo: lo.min(hi), hi: lo.max(hi) }
    }

    fn point(x: f64) -> Self {
        Self { lo: x, hi: x }
    }

    fn spanning(values: [f64; 4]) -> Option<Self> {
        if values.iter().any(|v| v.is_nan()) {
            return None;
        }
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self { lo, hi })
    }
}

impl Numeric for Interval {
    const PRIMITIVE: bool = false;

    fn from_f64(x: f64) -> Option<Self> {
        Some(Self::point(x))
    }

    fn parse_literal(text: &str) -> Option<Self> {
        text.parse().ok().map(Self::point)
    }

    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(Self::new(self.lo + rhs.lo, self.hi + rhs.hi))
    }

    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Some(Self::new(self.lo - rhs.hi, self.hi - rhs.lo))
    }

    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Self::spanning([self.lo * rhs.lo, self.lo * rhs.hi, self.hi * rhs.lo, self.hi * rhs.hi])
    }

    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.lo <= 0.0 && rhs.hi >= 0.0 {
            return None;
        }
        self.checked_mul(&Self::new(1.0 / rhs.hi, 1.0 / rhs.lo))
    }

    fn checked_pow(&self, exponent: &Self) -> Option<Self> {
        if exponent.lo != exponent.hi {
            return None;
        }
        let (a, b) = (self.lo.powf(exponent.lo), self.hi.powf(exponent.lo));
        Self::spanning([a, b, a, b])
    }

    fn nearly_equal(&self, rhs: &Self) -> bool {
        unitr_core::numeric::nearly_equal_f64(self.lo, rhs.lo)
            && unitr_core::numeric::nearly_equal_f64(self.hi, rhs.hi)
    }

    fn to_f64(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    fn absolute(&self) -> Self {
        if self.lo >= 0.0 {
            self.clone()
        } else if self.hi <= 0.0 {
            self.negated()
        } else {
            Self::new(0.0, self.hi.max(-self.lo))
        }
    }

    fn negated(&self) -> Self {
        Self::new(-self.hi, -self.lo)
    }

    fn truncated(&self) -> Self {
        Self::new(self.lo.trunc(), self.hi.trunc())
    }

    fn rounded(&self) -> Self {
        Self::new(self.lo.round(), self.hi.round())
    }

    fn render(&self, precision: Option<usize>) -> String {
        if self.lo == self.hi {
            self.lo.render(precision)
        } else {
            format!("[{}, {}]", self.lo.render(precision), self.hi.render(precision))
        }
    }
}

#[test]
fn test_interval_arithmetic() {
    let f = UnitFactory::<Interval>::new();
    let length = f.quantity(Interval::new(1.0, 2.0), "m").unwrap();
    let sum = length.add("50 cm").unwrap();
    assert_eq!(sum.value(), Some(&Interval::new(1.5, 2.5)));
    assert_eq!(sum.to_string(), "[1.5, 2.5] m");

    let area = length.mul(&length).unwrap();
    assert_eq!(area.value(), Some(&Interval::new(1.0, 4.0)));
    assert_eq!(area.format_units(), "m^2");
}

#[test]
fn test_interval_conversion() {
    let f = UnitFactory::<Interval>::new();
    let minutes = f
        .quantity(Interval::new(1.0, 2.0), "h")
        .unwrap()
        .to_number("min")
        .unwrap();
    assert!(minutes.nearly_equal(&Interval::new(60.0, 120.0)));
    assert!(f.unit("5 N").unwrap().to_si().is_ok());
}

#[test]
fn test_interval_clone_needs_hook() {
    let f = UnitFactory::<Interval>::new();
    let u = f.unit("3 kg").unwrap();
    assert_eq!(u.try_clone().unwrap_err(), UnitError::UnsupportedClone);

    // The bare unit expression carries no value to copy
    assert!(u.get_units().try_clone().is_ok());

    let f = UnitFactory::with_options(NumericOptions::new().with_clone(|v: &Interval| v.clone()));
    let copy = f.unit("3 kg").unwrap().try_clone().unwrap();
    assert_eq!(copy.to_string(), "3 kg");
}

#[test]
fn test_interval_hooks_override_native_arithmetic() {
    // Widen every sum by one unit on each side
    let f = UnitFactory::<Interval>::with_options(
        NumericOptions::new().with_add(|a: &Interval, b: &Interval| {
            Some(Interval::new(a.lo + b.lo - 1.0, a.hi + b.hi + 1.0))
        }),
    );
    let sum = f.add("1 s", "1 s").unwrap();
    assert!(sum.value().is_some_and(|v| v.lo < 2.0 && v.hi > 2.0));
}

// Literal hook

#[test]
fn test_parsed_literals_go_through_literal_hook() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let record = Arc::clone(&seen);
    let f = UnitFactory::<f64>::with_options(NumericOptions::new().with_from_literal(move |x| {
        record.lock().unwrap().push(x);
        Some(x)
    }));
    seen.lock().unwrap().clear();

    let u = f.unit("7 m^3").unwrap();
    assert_eq!(u.value(), Some(&7.0));
    let seen = seen.lock().unwrap();
    assert!(seen.contains(&7.0), "{seen:?}");
    assert!(seen.contains(&3.0), "{seen:?}");
}

#[test]
fn test_literal_hook_shapes_parsed_values() {
    let f = UnitFactory::<f64>::with_options(NumericOptions::new().with_from_literal(|x| Some(x.round())));
    assert_eq!(f.unit("2.4 m").unwrap().value(), Some(&2.0));
    assert_eq!(f.unit("1 m^2.4").unwrap().units()[0].power, 2.0);
}
