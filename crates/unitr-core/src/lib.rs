//! unitr-core: dimensionally-checked unit values
//!
//! This crate provides an immutable value type that carries a magnitude
//! together with a unit expression, and the registry that resolves unit
//! names. All arithmetic runs through a pluggable numeric backend, so the
//! same algebra works for `f64`, `rust_decimal::Decimal` or a caller's own
//! number type.
//!
//! # Example
//!
//! ```
//! use unitr_core::UnitFactory;
//!
//! let units = UnitFactory::<f64>::new();
//!
//! // Addition converts to the left operand's units
//! let sum = units.unit("1 m")?.add("100 cm")?;
//! assert_eq!(sum.to_string(), "2 m");
//!
//! // Conversion between compatible expressions
//! let speed = units.unit("36 km/h")?.to("m/s")?;
//! assert_eq!(speed.format(Some(6)), "10 m / s");
//!
//! // Base SI units
//! let force = units.unit("1 N")?.to_si()?;
//! assert_eq!(force.to_string(), "1 (kg m) / s^2");
//! # Ok::<(), unitr_core::UnitError>(())
//! ```

mod context;
pub mod error;
pub mod numeric;
pub mod parser;
pub mod registry;
pub mod types;

pub use error::{Result, UnitError};
pub use numeric::{Numeric, NumericOptions, Strategy};
pub use registry::Registry;
pub use types::{BaseDimension, DimensionVector, UnitArg, UnitJson, UnitPiece, UnitValue};

use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

use context::{Context, CustomSystem};
use types::Operand;

/// Creates unit values that share one numeric configuration and registry
pub struct UnitFactory<N: Numeric> {
    options: NumericOptions<N>,
    systems: Vec<CustomSystem>,
    ctx: Arc<Context<N>>,
}

impl<N: Numeric> UnitFactory<N> {
    /// Create a factory with native arithmetic and the built-in tables
    pub fn new() -> Self {
        Self::with_options(NumericOptions::new())
    }

    pub fn with_options(options: NumericOptions<N>) -> Self {
        let ctx = Context::new(options.clone());
        Self {
            options,
            systems: Vec::new(),
            ctx: Arc::new(ctx),
        }
    }

    /// Register a unit system from `(quantity, unit, prefix)` entries,
    /// usable with [`UnitValue::to_system`]
    pub fn with_system<I, Q, U, P>(self, name: impl Into<String>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Q, U, P)>,
        Q: Into<String>,
        U: Into<String>,
        P: Into<String>,
    {
        let mut systems = self.systems;
        systems.push(CustomSystem {
            name: name.into(),
            entries: entries
                .into_iter()
                .map(|(q, u, p)| (q.into(), u.into(), p.into()))
                .collect(),
        });
        let ctx = Context::with_systems(self.options.clone(), &systems)?;
        Ok(Self {
            options: self.options,
            systems,
            ctx: Arc::new(ctx),
        })
    }

    /// A new factory with `overrides` layered over the current options.
    ///
    /// Values created by `self` keep the old configuration.
    pub fn configure(&self, overrides: NumericOptions<N>) -> Self {
        let options = self.options.merge(&overrides);
        let (ctx, systems) = Context::replay(options.clone(), &self.systems);
        tracing::trace!(?options, systems = systems.len(), "reconfigured unit factory");
        Self {
            options,
            systems,
            ctx: Arc::new(ctx),
        }
    }

    pub fn options(&self) -> &NumericOptions<N> {
        &self.options
    }

    pub fn registry(&self) -> &Registry<N> {
        &self.ctx.registry
    }

    /// Whether `name` resolves to a unit, with or without a prefix
    pub fn exists(&self, name: &str) -> bool {
        self.ctx.registry.exists(name)
    }

    // Constructors

    /// Parse `"[number] [unit expression]"`, e.g. `"5 kg m/s^2"` or `"km"`
    pub fn unit(&self, text: &str) -> Result<UnitValue<N>> {
        UnitValue::parse(text, &self.ctx)
    }

    /// A dimensionless value with no unit pieces
    pub fn value(&self, value: N) -> Result<UnitValue<N>> {
        UnitValue::dimensionless(value, &self.ctx)
    }

    /// `value` in the units of `text`; `text` must not carry its own number
    pub fn quantity(&self, value: N, text: &str) -> Result<UnitValue<N>> {
        UnitValue::parse_with_value(text, Some(value), &self.ctx)
    }

    // Free-function forms; text arguments are parsed first

    pub fn add<'a, 'b>(&self, a: impl Into<UnitArg<'a, N>>, b: impl Into<UnitArg<'b, N>>) -> Result<UnitValue<N>> {
        self.operand(a)?.add(b)
    }

    pub fn sub<'a, 'b>(&self, a: impl Into<UnitArg<'a, N>>, b: impl Into<UnitArg<'b, N>>) -> Result<UnitValue<N>> {
        self.operand(a)?.sub(b)
    }

    pub fn mul<'a, 'b>(&self, a: impl Into<UnitArg<'a, N>>, b: impl Into<UnitArg<'b, N>>) -> Result<UnitValue<N>> {
        self.operand(a)?.mul(b)
    }

    pub fn div<'a, 'b>(&self, a: impl Into<UnitArg<'a, N>>, b: impl Into<UnitArg<'b, N>>) -> Result<UnitValue<N>> {
        self.operand(a)?.div(b)
    }

    pub fn pow<'a>(&self, a: impl Into<UnitArg<'a, N>>, exponent: &N) -> Result<UnitValue<N>> {
        self.operand(a)?.pow(exponent)
    }

    pub fn sqrt<'a>(&self, a: impl Into<UnitArg<'a, N>>) -> Result<UnitValue<N>> {
        self.operand(a)?.sqrt()
    }

    pub fn to<'a, 'b>(&self, a: impl Into<UnitArg<'a, N>>, target: impl Into<UnitArg<'b, N>>) -> Result<UnitValue<N>> {
        self.operand(a)?.to(target)
    }

    pub fn to_si<'a>(&self, a: impl Into<UnitArg<'a, N>>) -> Result<UnitValue<N>> {
        self.operand(a)?.to_si()
    }

    pub fn equals<'a, 'b>(&self, a: impl Into<UnitArg<'a, N>>, b: impl Into<UnitArg<'b, N>>) -> Result<bool> {
        self.operand(a)?.equals(b)
    }

    fn operand<'a>(&self, arg: impl Into<UnitArg<'a, N>>) -> Result<Operand<'a, N>> {
        arg.into().resolve(&self.ctx)
    }
}

impl<N: Numeric + DeserializeOwned> UnitFactory<N> {
    /// Decode `{"mathjs": "Unit", "value": .., "unit": ".."}`
    pub fn from_json(&self, text: &str) -> Result<UnitValue<N>> {
        types::json::from_json(text, &self.ctx)
    }
}

impl<N: Numeric> Default for UnitFactory<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Numeric> fmt::Debug for UnitFactory<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let systems: Vec<&str> = self.systems.iter().map(|s| s.name.as_str()).collect();
        f.debug_struct("UnitFactory")
            .field("options", &self.options)
            .field("systems", &systems)
            .finish()
    }
}
