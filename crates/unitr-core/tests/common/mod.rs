//! Helpers shared by the integration tests

use rust_decimal::Decimal;
use std::str::FromStr;

/// Decimal from literal text
pub fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}
