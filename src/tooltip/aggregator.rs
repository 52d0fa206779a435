//! One registry per entity category behind a single facade.

use bevy::prelude::*;
use std::collections::HashMap;

use super::provider::TooltipProvider;
use super::query::HoverWorld;
use super::record::Tooltip;
use super::registry::CategoryRegistry;

/// The closed set of entity categories a provider can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Terrain,
    Object,
    Character,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Terrain => "terrain",
            Category::Object => "object",
            Category::Character => "character",
        }
    }
}

/// Read-only description of a registered provider, for introspection and
/// config UI.
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    pub category: Category,
    pub id: String,
    pub display_name: String,
    pub description: String,
}

/// Owns one [`CategoryRegistry`] per category, lazily created on first add,
/// so callers add and remove providers without caring which category a
/// provider targets. Mutation is expected at startup, not mid-frame.
#[derive(Resource)]
pub struct TooltipRegistry<W: HoverWorld> {
    terrain: Option<CategoryRegistry<W::Terrain>>,
    objects: Option<CategoryRegistry<W::Object>>,
    characters: Option<CategoryRegistry<W::Character>>,
}

impl<W: HoverWorld> Default for TooltipRegistry<W> {
    fn default() -> Self {
        Self {
            terrain: None,
            objects: None,
            characters: None,
        }
    }
}

impl<W: HoverWorld> TooltipRegistry<W> {
    pub fn add_terrain(&mut self, provider: impl TooltipProvider<W::Terrain> + 'static) {
        self.terrain
            .get_or_insert_with(CategoryRegistry::default)
            .add(Box::new(provider));
    }

    pub fn add_object(&mut self, provider: impl TooltipProvider<W::Object> + 'static) {
        self.objects
            .get_or_insert_with(CategoryRegistry::default)
            .add(Box::new(provider));
    }

    pub fn add_character(&mut self, provider: impl TooltipProvider<W::Character> + 'static) {
        self.characters
            .get_or_insert_with(CategoryRegistry::default)
            .add(Box::new(provider));
    }

    /// Remove every provider with this id, across all categories.
    /// Cheap no-op for categories that never had it.
    pub fn remove(&mut self, id: &str) {
        if let Some(registry) = &mut self.terrain {
            registry.remove(id);
        }
        if let Some(registry) = &mut self.objects {
            registry.remove(id);
        }
        if let Some(registry) = &mut self.characters {
            registry.remove(id);
        }
    }

    /// Enumerate all registered providers, category by category
    pub fn providers(&self) -> Vec<ProviderInfo> {
        let mut out = Vec::new();
        if let Some(registry) = &self.terrain {
            out.extend(registry.iter().map(|p| info(Category::Terrain, p)));
        }
        if let Some(registry) = &self.objects {
            out.extend(registry.iter().map(|p| info(Category::Object, p)));
        }
        if let Some(registry) = &self.characters {
            out.extend(registry.iter().map(|p| info(Category::Character, p)));
        }
        out
    }

    pub(crate) fn generate_terrain(
        &mut self,
        entities: &[W::Terrain],
        enabled: &HashMap<String, bool>,
    ) -> Vec<Tooltip> {
        match &mut self.terrain {
            Some(registry) => registry.generate(entities, enabled),
            None => Vec::new(),
        }
    }

    pub(crate) fn generate_objects(
        &mut self,
        entities: &[W::Object],
        enabled: &HashMap<String, bool>,
    ) -> Vec<Tooltip> {
        match &mut self.objects {
            Some(registry) => registry.generate(entities, enabled),
            None => Vec::new(),
        }
    }

    pub(crate) fn generate_characters(
        &mut self,
        entities: &[W::Character],
        enabled: &HashMap<String, bool>,
    ) -> Vec<Tooltip> {
        match &mut self.characters {
            Some(registry) => registry.generate(entities, enabled),
            None => Vec::new(),
        }
    }
}

fn info<E>(category: Category, provider: &dyn TooltipProvider<E>) -> ProviderInfo {
    ProviderInfo {
        category,
        id: provider.id().to_string(),
        display_name: provider.display_name(),
        description: provider.description(),
    }
}
