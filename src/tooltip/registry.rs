//! Ordered provider collection for one entity category.

use bevy::prelude::*;
use std::collections::HashMap;

use super::provider::TooltipProvider;
use super::record::Tooltip;

/// Holds the providers registered for one entity category, in insertion
/// order. Insertion order is the only tie-break for output ordering; no
/// provider is prioritized by content.
pub struct CategoryRegistry<E> {
    providers: Vec<Box<dyn TooltipProvider<E>>>,
}

impl<E> Default for CategoryRegistry<E> {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
        }
    }
}

impl<E> CategoryRegistry<E> {
    /// Append a provider. Duplicate ids are allowed; they share one
    /// enable key.
    pub fn add(&mut self, provider: Box<dyn TooltipProvider<E>>) {
        self.providers.push(provider);
    }

    /// Remove every provider with this id; no-op if absent
    pub fn remove(&mut self, id: &str) {
        self.providers.retain(|p| p.id() != id);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Iterate the registered providers read-only
    pub fn iter(&self) -> impl Iterator<Item = &dyn TooltipProvider<E>> {
        self.providers.iter().map(|p| p.as_ref())
    }

    /// Fan a batch of entities out to every enabled provider.
    ///
    /// Ordering is provider-major, entity-minor: all matches for the first
    /// provider precede all matches for the second, regardless of entity
    /// order. This groups same-kind annotations together, which the layout
    /// engine's icon grouping relies on.
    ///
    /// A provider whose `generate` fails is isolated: its entire
    /// contribution for the frame is dropped and the remaining providers
    /// run untouched.
    pub fn generate(&mut self, entities: &[E], enabled: &HashMap<String, bool>) -> Vec<Tooltip> {
        let mut out = Vec::new();

        for provider in &mut self.providers {
            if !enabled.get(provider.id()).copied().unwrap_or(true) {
                continue;
            }

            let mut matched = Vec::new();
            let mut poisoned = false;
            for entity in entities {
                if !provider.has_tooltip(entity) {
                    continue;
                }
                match provider.generate(entity) {
                    Ok(tooltip) => matched.push(tooltip),
                    Err(e) => {
                        warn!(
                            "tooltip provider '{}' dropped for this frame: {}",
                            provider.id(),
                            e
                        );
                        poisoned = true;
                        break;
                    }
                }
            }

            if !poisoned {
                out.append(&mut matched);
            }
        }

        out
    }
}
