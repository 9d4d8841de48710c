//! Unit registry: prefix tables, unit definitions and unit systems
//!
//! The registry is built once per factory from the static tables in
//! [`tables`], converting every literal through the factory's [`Strategy`].
//! After [`RegistryBuilder::build`] it is immutable and shared behind an
//! `Arc`.

mod defs;
pub mod tables;

pub use defs::{PrefixDef, PrefixTable, SystemEntry, UnitDef, UnitSystem};

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Result, UnitError};
use crate::numeric::{Numeric, Strategy};
use crate::types::DimensionVector;
use tables::{PrefixSpec, SystemSpec};

/// Name of the system used by `to_si`
pub const SI: &str = "si";

/// Resolved unit tables for one numeric strategy
#[derive(Debug)]
pub struct Registry<N> {
    prefix_tables: HashMap<&'static str, Arc<PrefixTable<N>>>,
    quantities: HashMap<&'static str, DimensionVector<N>>,
    /// Primary units in table order, then aliases
    units: Vec<Arc<UnitDef<N>>>,
    index: HashMap<String, usize>,
    systems: HashMap<String, UnitSystem<N>>,
}

impl<N: Numeric> Registry<N> {
    pub fn builder(strategy: &Strategy<N>) -> RegistryBuilder<'_, N> {
        RegistryBuilder {
            strategy,
            systems: Vec::new(),
        }
    }

    /// Registry with the built-in tables only.
    ///
    /// Constants the strategy cannot represent are skipped, so this never
    /// fails.
    pub fn new(strategy: &Strategy<N>) -> Self {
        let prefix_tables = build_prefix_tables(strategy);
        let quantities = build_quantities(strategy);
        let units = build_units(strategy, &prefix_tables, &quantities);

        let mut index = HashMap::with_capacity(units.len());
        for (i, unit) in units.iter().enumerate() {
            index.entry(unit.name.clone()).or_insert(i);
        }

        let mut registry = Self {
            prefix_tables,
            quantities,
            units,
            index,
            systems: HashMap::new(),
        };
        for (name, specs) in tables::SYSTEMS {
            let system = builtin_system(&registry, strategy, name, specs);
            registry.systems.insert(name.to_string(), system);
        }

        tracing::debug!(
            units = registry.units.len(),
            prefix_tables = registry.prefix_tables.len(),
            "built unit registry"
        );
        registry
    }

    /// Register a unit system whose entries must all resolve.
    ///
    /// A system named like an existing one replaces it.
    pub(crate) fn add_system(
        &mut self,
        strategy: &Strategy<N>,
        name: &str,
        entries: &[(String, String, String)],
    ) -> Result<()> {
        let system = custom_system(self, strategy, name, entries)?;
        self.systems.insert(name.to_string(), system);
        Ok(())
    }

    /// Resolve a possibly prefixed unit name.
    ///
    /// An exact name wins. Otherwise the first unit, in table order, whose
    /// name is a suffix of `name` and whose prefix table holds the leading
    /// remainder is returned. No longest-match rule applies.
    pub fn resolve(&self, name: &str) -> Option<(Arc<UnitDef<N>>, Arc<PrefixDef<N>>)> {
        if let Some(&i) = self.index.get(name) {
            let unit = &self.units[i];
            if let Some(prefix) = unit.prefixes.get("") {
                tracing::trace!(name, unit = %unit.name, "resolved exact unit");
                return Some((Arc::clone(unit), Arc::clone(prefix)));
            }
        }

        for unit in &self.units {
            let Some(candidate) = name.strip_suffix(unit.name.as_str()) else {
                continue;
            };
            if let Some(prefix) = unit.prefixes.get(candidate) {
                tracing::trace!(name, unit = %unit.name, prefix = candidate, "resolved prefixed unit");
                return Some((Arc::clone(unit), Arc::clone(prefix)));
            }
        }

        tracing::trace!(name, "unit not found");
        None
    }

    pub fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Definition registered under exactly `name` (no prefix handling)
    pub fn unit(&self, name: &str) -> Option<&Arc<UnitDef<N>>> {
        self.index.get(name).map(|&i| &self.units[i])
    }

    /// All definitions in resolution order
    pub fn units(&self) -> impl Iterator<Item = &Arc<UnitDef<N>>> {
        self.units.iter()
    }

    pub fn quantity(&self, name: &str) -> Option<&DimensionVector<N>> {
        self.quantities.get(name)
    }

    pub fn prefix_table(&self, name: &str) -> Option<&Arc<PrefixTable<N>>> {
        self.prefix_tables.get(name)
    }

    pub fn system(&self, name: &str) -> Option<&UnitSystem<N>> {
        self.systems.get(name)
    }
}

/// Collects extra unit systems before the registry is frozen
pub struct RegistryBuilder<'a, N> {
    strategy: &'a Strategy<N>,
    systems: Vec<(String, Vec<(String, String, String)>)>,
}

impl<'a, N: Numeric> RegistryBuilder<'a, N> {
    /// Register a unit system from `(quantity, unit, prefix)` entries
    pub fn with_system<I, Q, U, P>(mut self, name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (Q, U, P)>,
        Q: Into<String>,
        U: Into<String>,
        P: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(q, u, p)| (q.into(), u.into(), p.into()))
            .collect();
        self.systems.push((name.into(), entries));
        self
    }

    pub fn build(self) -> Result<Registry<N>> {
        let mut registry = Registry::new(self.strategy);
        for (name, entries) in &self.systems {
            registry.add_system(self.strategy, name, entries)?;
        }
        Ok(registry)
    }
}

fn build_prefix_tables<N: Numeric>(
    strategy: &Strategy<N>,
) -> HashMap<&'static str, Arc<PrefixTable<N>>> {
    tables::PREFIX_TABLES
        .iter()
        .map(|(name, parts)| {
            let mut entries = HashMap::new();
            for spec in parts.iter().flat_map(|part| part.iter()) {
                let PrefixSpec(prefix, factor, scientific) = *spec;
                match table_literal(strategy, factor) {
                    Ok(factor) => {
                        entries.insert(
                            prefix.to_string(),
                            Arc::new(PrefixDef {
                                name: prefix.to_string(),
                                factor,
                                scientific,
                            }),
                        );
                    }
                    Err(err) => {
                        tracing::debug!(table = *name, prefix, %err, "skipping prefix");
                    }
                }
            }
            (*name, Arc::new(PrefixTable::new(*name, entries)))
        })
        .collect()
}

fn build_quantities<N: Numeric>(strategy: &Strategy<N>) -> HashMap<&'static str, DimensionVector<N>> {
    tables::QUANTITIES
        .iter()
        .filter_map(|spec| match DimensionVector::from_f64(&spec.1, strategy) {
            Ok(dimensions) => Some((spec.0, dimensions)),
            Err(err) => {
                tracing::debug!(quantity = spec.0, %err, "skipping quantity");
                None
            }
        })
        .collect()
}

fn build_units<N: Numeric>(
    strategy: &Strategy<N>,
    prefix_tables: &HashMap<&'static str, Arc<PrefixTable<N>>>,
    quantities: &HashMap<&'static str, DimensionVector<N>>,
) -> Vec<Arc<UnitDef<N>>> {
    let mut units: Vec<Arc<UnitDef<N>>> = Vec::with_capacity(tables::UNITS.len() + tables::ALIASES.len());

    for spec in tables::UNITS {
        let tables::UnitSpec(name, quantity, prefixes, scale, offset) = *spec;
        let (Some(dimensions), Some(prefixes)) = (quantities.get(quantity), prefix_tables.get(prefixes)) else {
            tracing::debug!(unit = name, quantity, "skipping unit with unbuilt table");
            continue;
        };
        let converted = table_literal(strategy, scale)
            .and_then(|scale| Ok((scale, table_literal(strategy, offset)?)));
        match converted {
            Ok((scale, offset)) => units.push(Arc::new(UnitDef {
                name: name.to_string(),
                quantity,
                dimensions: dimensions.clone(),
                scale,
                offset,
                prefixes: Arc::clone(prefixes),
            })),
            Err(err) => tracing::debug!(unit = name, %err, "skipping unit"),
        }
    }

    for (alias, target) in tables::ALIASES {
        let Some(def) = units.iter().find(|u| u.name == *target).cloned() else {
            tracing::debug!(alias, target, "skipping alias of missing unit");
            continue;
        };
        units.push(Arc::new(UnitDef {
            name: alias.to_string(),
            quantity: def.quantity,
            dimensions: def.dimensions.clone(),
            scale: def.scale.clone(),
            offset: def.offset.clone(),
            prefixes: Arc::clone(&def.prefixes),
        }));
    }

    units
}

/// Convert a table constant, rejecting nonzero constants that collapse to zero
fn table_literal<N: Numeric>(strategy: &Strategy<N>, x: f64) -> Result<N> {
    let value = strategy.from_literal(x)?;
    if x != 0.0 && value.to_f64() == 0.0 {
        return Err(UnitError::UnrepresentableLiteral(x));
    }
    Ok(value)
}

fn builtin_system<N: Numeric>(
    registry: &Registry<N>,
    strategy: &Strategy<N>,
    name: &str,
    specs: &[SystemSpec],
) -> UnitSystem<N> {
    let mut entries = HashMap::new();
    for (quantity, unit, prefix) in specs {
        match system_entry(registry, strategy, quantity, unit, prefix) {
            Ok(entry) => {
                entries.insert(quantity.to_string(), entry);
            }
            Err(err) => tracing::debug!(system = name, quantity, %err, "skipping system entry"),
        }
    }
    UnitSystem::new(name, entries)
}

fn custom_system<N: Numeric>(
    registry: &Registry<N>,
    strategy: &Strategy<N>,
    name: &str,
    specs: &[(String, String, String)],
) -> Result<UnitSystem<N>> {
    let mut entries = HashMap::with_capacity(specs.len());
    for (quantity, unit, prefix) in specs {
        let entry = system_entry(registry, strategy, quantity, unit, prefix)?;
        entries.insert(quantity.clone(), entry);
    }
    Ok(UnitSystem::new(name, entries))
}

/// Entry for `quantity`, which the unit must measure
fn system_entry<N: Numeric>(
    registry: &Registry<N>,
    strategy: &Strategy<N>,
    quantity: &str,
    unit: &str,
    prefix: &str,
) -> Result<SystemEntry<N>> {
    let expected = registry.quantity(quantity).ok_or_else(|| {
        UnitError::InvalidConversionTarget(format!("unknown quantity {quantity}"))
    })?;
    let unit = registry
        .unit(unit)
        .ok_or_else(|| UnitError::UnknownUnit(unit.to_string()))?;
    if !unit.dimensions.equals(expected, strategy) {
        return Err(UnitError::InvalidConversionTarget(format!(
            "unit {} measures {}, not {quantity}",
            unit.name, unit.quantity
        )));
    }
    let prefix = unit.prefixes.get(prefix).ok_or_else(|| UnitError::UnknownPrefix {
        unit: unit.name.clone(),
        prefix: prefix.to_string(),
    })?;
    Ok(SystemEntry {
        unit: Arc::clone(unit),
        prefix: Arc::clone(prefix),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericOptions;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn registry() -> Registry<f64> {
        Registry::new(&Strategy::new(NumericOptions::new()))
    }

    fn resolved(registry: &Registry<f64>, name: &str) -> Option<(String, String)> {
        registry
            .resolve(name)
            .map(|(unit, prefix)| (unit.name.clone(), prefix.name.clone()))
    }

    fn pair(unit: &str, prefix: &str) -> Option<(String, String)> {
        Some((unit.to_string(), prefix.to_string()))
    }

    #[test]
    fn test_exact_match() {
        let r = registry();
        assert_eq!(resolved(&r, "m"), pair("m", ""));
        assert_eq!(resolved(&r, "degC"), pair("degC", ""));
        assert_eq!(resolved(&r, "feet"), pair("feet", ""));
    }

    #[test]
    fn test_exact_match_beats_prefixed_reading() {
        let r = registry();
        // "ft" also reads as femto-tonne
        assert_eq!(resolved(&r, "ft"), pair("ft", ""));
        assert_eq!(resolved(&r, "min"), pair("min", ""));
    }

    #[test]
    fn test_prefixed_units() {
        let r = registry();
        assert_eq!(resolved(&r, "cm"), pair("m", "c"));
        assert_eq!(resolved(&r, "kg"), pair("g", "k"));
        assert_eq!(resolved(&r, "kilometer"), pair("meter", "kilo"));
        assert_eq!(resolved(&r, "kWh"), pair("Wh", "k"));
        assert_eq!(resolved(&r, "GiB"), pair("B", "Gi"));
        assert_eq!(resolved(&r, "dam"), pair("m", "da"));
    }

    #[test]
    fn test_prefix_must_belong_to_unit_table() {
        let r = registry();
        // NONE table: inch takes no prefix
        assert_eq!(resolved(&r, "kin"), None);
        // BINARY_SHORT has no milli
        assert_eq!(resolved(&r, "mb"), None);
        assert!(!r.exists("furlong"));
        assert!(r.exists("mm"));
    }

    #[test]
    fn test_aliases_share_definition() {
        let r = registry();
        let feet = r.unit("feet").unwrap();
        let foot = r.unit("foot").unwrap();
        assert_eq!(feet.scale, foot.scale);
        assert_eq!(feet.quantity, "LENGTH");
        assert!(Arc::ptr_eq(&feet.prefixes, &foot.prefixes));
    }

    #[test]
    fn test_builtin_systems() {
        let r = registry();
        let si = r.system(SI).unwrap();
        let mass = si.get("MASS").unwrap();
        assert_eq!(mass.unit.name, "g");
        assert_eq!(mass.prefix.name, "k");
        assert_eq!(r.system("cgs").unwrap().get("LENGTH").unwrap().prefix.name, "c");
        assert_eq!(r.system("us").unwrap().get("TEMPERATURE").unwrap().unit.name, "degF");
        assert!(r.system("imperial").is_none());
    }

    #[test]
    fn test_custom_system() {
        let strategy = Strategy::new(NumericOptions::new());
        let r = Registry::<f64>::builder(&strategy)
            .with_system("astro", [("LENGTH", "m", "k"), ("TIME", "year", "")])
            .build()
            .unwrap();
        let astro = r.system("astro").unwrap();
        assert_eq!(astro.get("LENGTH").unwrap().prefix.name, "k");
        assert!(astro.get("MASS").is_none());
    }

    #[test]
    fn test_custom_system_errors() {
        let strategy = Strategy::new(NumericOptions::new());
        let err = Registry::<f64>::builder(&strategy)
            .with_system("bad", [("LENGTH", "furlong", "")])
            .build()
            .unwrap_err();
        assert_eq!(err, UnitError::UnknownUnit("furlong".to_string()));

        let err = Registry::<f64>::builder(&strategy)
            .with_system("bad", [("LENGTH", "inch", "k")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            UnitError::UnknownPrefix {
                unit: "inch".to_string(),
                prefix: "k".to_string()
            }
        );
    }

    #[test]
    fn test_custom_system_entry_must_measure_its_quantity() {
        let strategy = Strategy::new(NumericOptions::new());
        let err = Registry::<f64>::builder(&strategy)
            .with_system("odd", [("LENGTH", "s", "")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            UnitError::InvalidConversionTarget("unit s measures TIME, not LENGTH".to_string())
        );

        let err = Registry::<f64>::builder(&strategy)
            .with_system("odd", [("DISTANCE", "m", "")])
            .build()
            .unwrap_err();
        assert!(matches!(err, UnitError::InvalidConversionTarget(msg) if msg.contains("DISTANCE")));
    }

    #[test]
    fn test_builtin_system_entries_match_their_quantity() {
        let r = registry();
        for (name, specs) in tables::SYSTEMS {
            let system = r.system(name).unwrap();
            for (quantity, unit, _) in specs.iter() {
                let entry = system.get(quantity).unwrap_or_else(|| panic!("{name} lacks {quantity}"));
                assert_eq!(entry.unit.name, *unit);
                assert_eq!(&entry.unit.dimensions, r.quantity(quantity).unwrap());
            }
        }
    }

    #[test]
    fn test_decimal_skips_unrepresentable_prefixes() {
        let r = Registry::<Decimal>::new(&Strategy::new(NumericOptions::new()));
        let short = r.prefix_table("SHORT").unwrap();
        assert!(short.contains("k"));
        assert!(!short.contains("Q"));
        assert!(r.exists("km"));
        assert!(!r.exists("Qm"));
        // Below the smallest decimal step
        assert!(!short.contains("q"));
        assert!(short.contains("y"));
    }
}
