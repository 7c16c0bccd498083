//! Effect discovery by name.
//!
//! The registry maps user effect names to adapters and resolves any derived
//! entry-point name back to its adapter, mirroring the manifest files host
//! tooling uses to enumerate effects.

use std::collections::BTreeMap;

use crate::effect::{EffectAdapter, EffectDescriptor};
use crate::foundation::error::{StitchError, StitchResult};

/// A name-keyed collection of effect adapters.
#[derive(Debug, Default)]
pub struct EffectRegistry {
    effects: BTreeMap<String, EffectAdapter>,
}

impl EffectRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under its effect name.
    ///
    /// Registering a second effect with the same name fails with
    /// [`StitchError::Validation`]; entry-point names must stay unambiguous.
    pub fn register(&mut self, adapter: EffectAdapter) -> StitchResult<()> {
        let name = adapter.name().to_owned();
        if self.effects.contains_key(&name) {
            return Err(StitchError::validation(format!(
                "effect '{name}' is already registered"
            )));
        }
        tracing::debug!(effect = %name, kind = ?adapter.kind(), "registered effect");
        self.effects.insert(name, adapter);
        Ok(())
    }

    /// Look up an adapter by its effect name.
    pub fn get(&self, name: &str) -> Option<&EffectAdapter> {
        self.effects.get(name)
    }

    /// Resolve any derived entry-point name (stitchable, fragment or
    /// private) to its adapter.
    pub fn resolve(&self, entry_point: &str) -> Option<&EffectAdapter> {
        self.effects.values().find(|a| {
            a.stitchable_name() == entry_point
                || a.fragment_name() == entry_point
                || a.private_name() == entry_point
        })
    }

    /// Number of registered effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// True when no effects are registered.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Descriptors of every registered effect, ordered by name.
    pub fn manifest(&self) -> Vec<EffectDescriptor> {
        self.effects.values().map(EffectAdapter::descriptor).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/registry.rs"]
mod tests;
