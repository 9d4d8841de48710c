//! Operand conversion for unit operations

use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

use super::UnitValue;
use crate::context::Context;
use crate::error::Result;
use crate::numeric::Numeric;

/// Anything an operation accepts as its other operand.
///
/// Text is parsed with the registry of the value the operation is called on.
pub enum UnitArg<'a, N: Numeric> {
    Text(Cow<'a, str>),
    Unit(&'a UnitValue<N>),
    Owned(UnitValue<N>),
    /// Dimensionless bare number
    Value(N),
}

impl<'a, N: Numeric> UnitArg<'a, N> {
    pub(crate) fn resolve(self, ctx: &Arc<Context<N>>) -> Result<Operand<'a, N>> {
        Ok(match self {
            UnitArg::Text(text) => Operand::Owned(UnitValue::parse(&text, ctx)?),
            UnitArg::Unit(unit) => Operand::Borrowed(unit),
            UnitArg::Owned(unit) => Operand::Owned(unit),
            UnitArg::Value(value) => Operand::Owned(UnitValue::dimensionless(value, ctx)?),
        })
    }
}

impl<'a, N: Numeric> From<&'a str> for UnitArg<'a, N> {
    fn from(text: &'a str) -> Self {
        UnitArg::Text(Cow::Borrowed(text))
    }
}

impl<'a, N: Numeric> From<String> for UnitArg<'a, N> {
    fn from(text: String) -> Self {
        UnitArg::Text(Cow::Owned(text))
    }
}

impl<'a, N: Numeric> From<&'a String> for UnitArg<'a, N> {
    fn from(text: &'a String) -> Self {
        UnitArg::Text(Cow::Borrowed(text.as_str()))
    }
}

impl<'a, N: Numeric> From<&'a UnitValue<N>> for UnitArg<'a, N> {
    fn from(unit: &'a UnitValue<N>) -> Self {
        UnitArg::Unit(unit)
    }
}

impl<'a, N: Numeric> From<UnitValue<N>> for UnitArg<'a, N> {
    fn from(unit: UnitValue<N>) -> Self {
        UnitArg::Owned(unit)
    }
}

/// A resolved operand, borrowed when the caller passed a value
pub(crate) enum Operand<'a, N: Numeric> {
    Borrowed(&'a UnitValue<N>),
    Owned(UnitValue<N>),
}

impl<N: Numeric> Deref for Operand<'_, N> {
    type Target = UnitValue<N>;

    fn deref(&self) -> &Self::Target {
        match self {
            Operand::Borrowed(unit) => unit,
            Operand::Owned(unit) => unit,
        }
    }
}
