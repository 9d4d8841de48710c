//! Strategy and registry shared by every value a factory creates

use crate::error::Result;
use crate::numeric::{Numeric, NumericOptions, Strategy};
use crate::registry::Registry;

/// Unit system registered on a factory, replayed when it is reconfigured
#[derive(Debug, Clone)]
pub(crate) struct CustomSystem {
    pub name: String,
    /// `(quantity, unit, prefix)`
    pub entries: Vec<(String, String, String)>,
}

#[derive(Debug)]
pub(crate) struct Context<N> {
    pub strategy: Strategy<N>,
    pub registry: Registry<N>,
}

impl<N: Numeric> Context<N> {
    pub fn new(options: NumericOptions<N>) -> Self {
        let strategy = Strategy::new(options);
        let registry = Registry::new(&strategy);
        Self { strategy, registry }
    }

    /// Built-in tables plus `systems`; any unresolvable entry fails
    pub fn with_systems(options: NumericOptions<N>, systems: &[CustomSystem]) -> Result<Self> {
        let mut ctx = Self::new(options);
        for system in systems {
            ctx.registry.add_system(&ctx.strategy, &system.name, &system.entries)?;
        }
        Ok(ctx)
    }

    /// Built-in tables plus the `systems` that still resolve under `options`.
    /// Returns the systems kept.
    pub fn replay(options: NumericOptions<N>, systems: &[CustomSystem]) -> (Self, Vec<CustomSystem>) {
        let mut ctx = Self::new(options);
        let mut kept = Vec::with_capacity(systems.len());
        for system in systems {
            match ctx.registry.add_system(&ctx.strategy, &system.name, &system.entries) {
                Ok(()) => kept.push(system.clone()),
                Err(err) => tracing::warn!(system = %system.name, %err, "dropping unit system"),
            }
        }
        (ctx, kept)
    }
}
