//! The annotation overlay engine: provider registries, per-frame query
//! resolution, tooltip layout and rendering.
//!
//! ## Module Structure
//!
//! - [`record`] - The annotation record shape ([`Tooltip`], [`Badge`], [`BadgeAnchor`])
//! - [`provider`] - The provider contract and its two-phase match cache
//! - [`registry`] - Ordered per-category provider collections
//! - [`aggregator`] - One registry per category behind a single facade
//! - [`query`] - The world collaborator trait and per-frame resolution
//! - [`layout`] - The pure layout algorithm (clamp, expand, shift, group)
//! - [`render`] - The painter collaborator and its egui backend
//!
//! The whole pipeline runs frame-synchronously on the thread driving the
//! host's update/render loop; nothing suspends, blocks or retries.

pub mod aggregator;
pub mod layout;
pub mod provider;
pub mod query;
pub mod record;
pub mod registry;
pub mod render;

#[cfg(test)]
mod tests;

pub use aggregator::{Category, ProviderInfo, TooltipRegistry};
pub use layout::{BadgePlacement, RowLayout, TextMeasurer, TooltipLayout, layout_tooltips};
pub use provider::{MatchCache, ProviderError, TooltipProvider};
pub use query::{HoverState, HoverWorld, ResolvedFrame, ScreenId};
pub use record::{Badge, BadgeAnchor, Tooltip};
pub use registry::CategoryRegistry;
pub use render::{EguiTextMeasurer, EguiTooltipPainter, TooltipPainter, render_layout};

use std::marker::PhantomData;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// The overlay engine as a Bevy plugin, generic over the host's world
/// model. The host inserts its `W` resource and registers providers on
/// [`TooltipRegistry<W>`] at startup.
pub struct HovertipPlugin<W: HoverWorld>(PhantomData<W>);

impl<W: HoverWorld> Default for HovertipPlugin<W> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<W: HoverWorld> Plugin for HovertipPlugin<W> {
    fn build(&self, app: &mut App) {
        app.init_resource::<TooltipRegistry<W>>()
            .init_resource::<HoverState>()
            .add_systems(Update, query::resolve_tooltips::<W>)
            .add_systems(EguiPrimaryContextPass, render::render_tooltips);
    }
}
