//! Immutable prefix and unit definitions shared by reference

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::types::DimensionVector;

/// A multiplicative prefix such as `k` (1e3) or `Mi` (2^20)
#[derive(Debug)]
pub struct PrefixDef<N> {
    pub name: String,
    pub factor: N,
    /// Preferred for scientific notation (display hint only)
    pub scientific: bool,
}

/// Named set of prefixes a unit accepts. Always holds the empty prefix.
#[derive(Debug)]
pub struct PrefixTable<N> {
    pub name: &'static str,
    entries: HashMap<String, Arc<PrefixDef<N>>>,
}

impl<N> PrefixTable<N> {
    pub(crate) fn new(name: &'static str, entries: HashMap<String, Arc<PrefixDef<N>>>) -> Self {
        Self { name, entries }
    }

    pub fn get(&self, prefix: &str) -> Option<&Arc<PrefixDef<N>>> {
        self.entries.get(prefix)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.entries.contains_key(prefix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A named unit: dimension, scale to the coherent root unit, affine offset,
/// and the prefixes it accepts.
pub struct UnitDef<N> {
    pub name: String,
    /// Quantity this unit measures (`"LENGTH"`, `"FORCE"`, ...)
    pub quantity: &'static str,
    pub dimensions: DimensionVector<N>,
    pub scale: N,
    pub offset: N,
    pub prefixes: Arc<PrefixTable<N>>,
}

impl<N: fmt::Debug> fmt::Debug for UnitDef<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitDef")
            .field("name", &self.name)
            .field("quantity", &self.quantity)
            .field("scale", &self.scale)
            .field("offset", &self.offset)
            .field("prefixes", &self.prefixes.name)
            .finish()
    }
}

/// Canonical unit for one quantity inside a unit system
#[derive(Debug)]
pub struct SystemEntry<N> {
    pub unit: Arc<UnitDef<N>>,
    pub prefix: Arc<PrefixDef<N>>,
}

/// Mapping from quantity name to its canonical unit, e.g. SI maps `MASS` to `kg`
#[derive(Debug)]
pub struct UnitSystem<N> {
    pub name: String,
    entries: HashMap<String, SystemEntry<N>>,
}

impl<N> UnitSystem<N> {
    pub(crate) fn new(name: impl Into<String>, entries: HashMap<String, SystemEntry<N>>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn get(&self, quantity: &str) -> Option<&SystemEntry<N>> {
        self.entries.get(quantity)
    }
}
