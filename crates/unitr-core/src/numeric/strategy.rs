//! Configurable numeric strategy
//!
//! [`NumericOptions`] carries optional hooks that replace the native
//! [`Numeric`] behavior of a representation. A [`Strategy`] resolves each
//! primitive to the hook when one is set and to the native implementation
//! otherwise.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::Numeric;
use crate::error::{Result, UnitError};

pub type BinaryHook<N> = Arc<dyn Fn(&N, &N) -> Option<N> + Send + Sync>;
pub type EqualsHook<N> = Arc<dyn Fn(&N, &N) -> bool + Send + Sync>;
pub type LiteralHook<N> = Arc<dyn Fn(f64) -> Option<N> + Send + Sync>;
pub type CloneHook<N> = Arc<dyn Fn(&N) -> N + Send + Sync>;

/// Hook overrides for the arithmetic primitives.
///
/// Unset hooks fall back to the representation's [`Numeric`] implementation.
/// Keys in `extra` are carried along untouched so calling code can stash its
/// own settings next to the numeric ones.
pub struct NumericOptions<N> {
    pub add: Option<BinaryHook<N>>,
    pub sub: Option<BinaryHook<N>>,
    pub mul: Option<BinaryHook<N>>,
    pub div: Option<BinaryHook<N>>,
    pub pow: Option<BinaryHook<N>>,
    pub equals: Option<EqualsHook<N>>,
    pub from_literal: Option<LiteralHook<N>>,
    pub clone: Option<CloneHook<N>>,
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl<N> NumericOptions<N> {
    pub fn new() -> Self {
        Self {
            add: None,
            sub: None,
            mul: None,
            div: None,
            pow: None,
            equals: None,
            from_literal: None,
            clone: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_add(mut self, f: impl Fn(&N, &N) -> Option<N> + Send + Sync + 'static) -> Self {
        self.add = Some(Arc::new(f));
        self
    }

    pub fn with_sub(mut self, f: impl Fn(&N, &N) -> Option<N> + Send + Sync + 'static) -> Self {
        self.sub = Some(Arc::new(f));
        self
    }

    pub fn with_mul(mut self, f: impl Fn(&N, &N) -> Option<N> + Send + Sync + 'static) -> Self {
        self.mul = Some(Arc::new(f));
        self
    }

    pub fn with_div(mut self, f: impl Fn(&N, &N) -> Option<N> + Send + Sync + 'static) -> Self {
        self.div = Some(Arc::new(f));
        self
    }

    pub fn with_pow(mut self, f: impl Fn(&N, &N) -> Option<N> + Send + Sync + 'static) -> Self {
        self.pow = Some(Arc::new(f));
        self
    }

    pub fn with_equals(mut self, f: impl Fn(&N, &N) -> bool + Send + Sync + 'static) -> Self {
        self.equals = Some(Arc::new(f));
        self
    }

    pub fn with_from_literal(mut self, f: impl Fn(f64) -> Option<N> + Send + Sync + 'static) -> Self {
        self.from_literal = Some(Arc::new(f));
        self
    }

    pub fn with_clone(mut self, f: impl Fn(&N) -> N + Send + Sync + 'static) -> Self {
        self.clone = Some(Arc::new(f));
        self
    }

    /// Store a key the engine does not interpret
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Layer `overrides` on top of `self`: every hook set in `overrides` wins,
    /// `extra` maps are merged key by key.
    pub fn merge(&self, overrides: &Self) -> Self {
        let mut extra = self.extra.clone();
        extra.extend(overrides.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self {
            add: overrides.add.clone().or_else(|| self.add.clone()),
            sub: overrides.sub.clone().or_else(|| self.sub.clone()),
            mul: overrides.mul.clone().or_else(|| self.mul.clone()),
            div: overrides.div.clone().or_else(|| self.div.clone()),
            pow: overrides.pow.clone().or_else(|| self.pow.clone()),
            equals: overrides.equals.clone().or_else(|| self.equals.clone()),
            from_literal: overrides
                .from_literal
                .clone()
                .or_else(|| self.from_literal.clone()),
            clone: overrides.clone.clone().or_else(|| self.clone.clone()),
            extra,
        }
    }
}

impl<N> Default for NumericOptions<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Clone for NumericOptions<N> {
    fn clone(&self) -> Self {
        Self::new().merge(self)
    }
}

impl<N> fmt::Debug for NumericOptions<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hooks: Vec<&str> = [
            ("add", self.add.is_some()),
            ("sub", self.sub.is_some()),
            ("mul", self.mul.is_some()),
            ("div", self.div.is_some()),
            ("pow", self.pow.is_some()),
            ("equals", self.equals.is_some()),
            ("from_literal", self.from_literal.is_some()),
            ("clone", self.clone.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect();

        f.debug_struct("NumericOptions")
            .field("hooks", &hooks)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Resolved arithmetic primitives for one factory
#[derive(Clone, Debug)]
pub struct Strategy<N> {
    options: NumericOptions<N>,
}

impl<N: Numeric> Strategy<N> {
    pub fn new(options: NumericOptions<N>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NumericOptions<N> {
        &self.options
    }

    pub fn add(&self, a: &N, b: &N) -> Result<N> {
        apply(&self.options.add, a, b, N::checked_add, "add")
    }

    pub fn sub(&self, a: &N, b: &N) -> Result<N> {
        apply(&self.options.sub, a, b, N::checked_sub, "subtract")
    }

    pub fn mul(&self, a: &N, b: &N) -> Result<N> {
        apply(&self.options.mul, a, b, N::checked_mul, "multiply")
    }

    pub fn div(&self, a: &N, b: &N) -> Result<N> {
        apply(&self.options.div, a, b, N::checked_div, "divide")
    }

    pub fn pow(&self, base: &N, exponent: &N) -> Result<N> {
        apply(&self.options.pow, base, exponent, N::checked_pow, "pow")
    }

    pub fn equals(&self, a: &N, b: &N) -> bool {
        match &self.options.equals {
            Some(hook) => hook(a, b),
            None => a.nearly_equal(b),
        }
    }

    pub fn from_literal(&self, x: f64) -> Result<N> {
        let converted = match &self.options.from_literal {
            Some(hook) => hook(x),
            None => N::from_f64(x),
        };
        converted.ok_or(UnitError::UnrepresentableLiteral(x))
    }

    /// Copy a value the way the configuration allows
    pub fn clone_value(&self, value: &N) -> Result<N> {
        match &self.options.clone {
            Some(hook) => Ok(hook(value)),
            None if N::PRIMITIVE => Ok(value.clone()),
            None => Err(UnitError::UnsupportedClone),
        }
    }

    pub fn zero(&self) -> Result<N> {
        self.from_literal(0.0)
    }

    pub fn one(&self) -> Result<N> {
        self.from_literal(1.0)
    }
}

fn apply<N>(
    hook: &Option<BinaryHook<N>>,
    a: &N,
    b: &N,
    native: fn(&N, &N) -> Option<N>,
    operation: &'static str,
) -> Result<N> {
    let result = match hook {
        Some(hook) => hook(a, b),
        None => native(a, b),
    };
    result.ok_or(UnitError::Arithmetic { operation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_use_native_arithmetic() {
        let strategy = Strategy::<f64>::new(NumericOptions::new());
        assert_eq!(strategy.add(&2.0, &3.0), Ok(5.0));
        assert_eq!(strategy.pow(&2.0, &3.0), Ok(8.0));
        assert!(strategy.equals(&0.3, &(0.1 + 0.2)));
        assert_eq!(strategy.clone_value(&1.5), Ok(1.5));
    }

    #[test]
    fn test_hook_overrides_native() {
        let options = NumericOptions::<f64>::new().with_add(|a, b| Some(a + b + 1.0));
        let strategy = Strategy::new(options);
        assert_eq!(strategy.add(&2.0, &3.0), Ok(6.0));
        assert_eq!(strategy.sub(&2.0, &3.0), Ok(-1.0));
    }

    #[test]
    fn test_hook_without_result_is_arithmetic_error() {
        let options = NumericOptions::<f64>::new().with_div(|_, b| (*b != 0.0).then_some(1.0));
        let strategy = Strategy::new(options);
        assert_eq!(
            strategy.div(&1.0, &0.0),
            Err(UnitError::Arithmetic {
                operation: "divide"
            })
        );
    }

    #[test]
    fn test_merge_keeps_base_and_extra() {
        let base = NumericOptions::<f64>::new()
            .with_mul(|a, b| Some(a * b))
            .with_extra("precision", json!(14));
        let overrides = NumericOptions::<f64>::new()
            .with_add(|a, b| Some(a + b))
            .with_extra("number", json!("BigNumber"));

        let merged = base.merge(&overrides);
        assert!(merged.add.is_some());
        assert!(merged.mul.is_some());
        assert!(merged.sub.is_none());
        assert_eq!(merged.extra.get("precision"), Some(&json!(14)));
        assert_eq!(merged.extra.get("number"), Some(&json!("BigNumber")));

        // The base set is untouched
        assert!(base.add.is_none());
        assert!(base.extra.get("number").is_none());
    }

    #[test]
    fn test_literal_hook() {
        let options = NumericOptions::<f64>::new().with_from_literal(|x| (x.abs() < 1e6).then_some(x));
        let strategy = Strategy::new(options);
        assert_eq!(strategy.from_literal(3.0), Ok(3.0));
        assert_eq!(
            strategy.from_literal(1e9),
            Err(UnitError::UnrepresentableLiteral(1e9))
        );
    }
}
