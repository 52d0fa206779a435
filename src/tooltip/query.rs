//! Per-frame resolution: gate, suppression, candidate lookup, generation.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::config::{OverlayConfig, OverlayConfigData, TooltipTrigger, TriggerButton};

use super::aggregator::TooltipRegistry;
use super::record::Tooltip;

/// Identifies one logical screen (split-screen / local multiplayer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(pub u32);

impl ScreenId {
    pub const PRIMARY: ScreenId = ScreenId(0);
}

/// The world-model collaborator the engine queries once per frame.
///
/// All lookups must be deterministic for a given frame snapshot. Upstream
/// failures (no cursor, no location data) degrade to empty results, never
/// errors.
pub trait HoverWorld: Resource {
    type Terrain: Send + Sync + 'static;
    type Object: Send + Sync + 'static;
    type Character: Send + Sync + 'static;

    /// Screens that currently need tooltip resolution
    fn screens(&self) -> Vec<ScreenId> {
        vec![ScreenId::PRIMARY]
    }

    /// False while this screen's player is in a menu, cutscene or
    /// otherwise not free to interact with the world
    fn player_free(&self, screen: ScreenId) -> bool;

    /// Cursor position in screen pixels, if this screen has one
    fn cursor(&self, screen: ScreenId) -> Option<Vec2>;

    /// Viewport size in pixels, polled once per frame
    fn viewport(&self, screen: ScreenId) -> Vec2;

    /// True when the cursor is over a reserved UI region (toolbar etc.);
    /// tooltips never render under other UI
    fn cursor_over_reserved_ui(&self, screen: ScreenId, cursor: Vec2) -> bool;

    /// True when a gamepad drives the cursor and it has faded out
    fn gamepad_cursor_faded(&self, screen: ScreenId) -> bool {
        false
    }

    /// Whether the configured trigger button is currently held
    fn button_held(&self, screen: ScreenId, button: TriggerButton) -> bool;

    /// Terrain features whose tile contains the cursor
    fn terrain_at(&self, screen: ScreenId, cursor: Vec2) -> Vec<Self::Terrain>;

    /// Static objects whose tile contains the cursor
    fn objects_at(&self, screen: ScreenId, cursor: Vec2) -> Vec<Self::Object>;

    /// Characters whose bounding box contains the cursor
    fn characters_at(&self, screen: ScreenId, cursor: Vec2) -> Vec<Self::Character>;
}

/// Resolved annotation set for one screen, one frame.
///
/// Cursor and viewport are captured at resolve time so layout and render
/// work from the same frame snapshot.
#[derive(Debug, Clone, Default)]
pub struct ResolvedFrame {
    pub cursor: Vec2,
    pub viewport: Vec2,
    pub tooltips: Vec<Tooltip>,
}

/// Per-screen frame-local tooltip state. Screen-scoped, never
/// process-global, so one screen's hover cannot flash another's.
#[derive(Resource, Default)]
pub struct HoverState {
    screens: HashMap<ScreenId, ResolvedFrame>,
}

impl HoverState {
    pub fn frame(&self, screen: ScreenId) -> Option<&ResolvedFrame> {
        self.screens.get(&screen)
    }

    pub(crate) fn set(&mut self, screen: ScreenId, frame: ResolvedFrame) {
        self.screens.insert(screen, frame);
    }

    pub(crate) fn retain(&mut self, live: &[ScreenId]) {
        self.screens.retain(|screen, _| live.contains(screen));
    }
}

/// Once-per-frame resolve system. Terminal each tick; every outcome is a
/// full replacement of the per-screen state.
pub fn resolve_tooltips<W: HoverWorld>(
    world: Res<W>,
    mut registry: ResMut<TooltipRegistry<W>>,
    config: Res<OverlayConfig>,
    mut state: ResMut<HoverState>,
) {
    let screens = world.screens();
    state.retain(&screens);
    for screen in screens {
        let frame = resolve_screen(&*world, &mut registry, &config.data, screen);
        state.set(screen, frame);
    }
}

/// Resolve one screen: gate, suppression, candidates, generation.
pub fn resolve_screen<W: HoverWorld>(
    world: &W,
    registry: &mut TooltipRegistry<W>,
    config: &OverlayConfigData,
    screen: ScreenId,
) -> ResolvedFrame {
    let viewport = world.viewport(screen);

    let Some(cursor) = world.cursor(screen) else {
        return ResolvedFrame {
            viewport,
            ..Default::default()
        };
    };

    let empty = ResolvedFrame {
        cursor,
        viewport,
        tooltips: Vec::new(),
    };

    // gate: player must be free and the trigger condition satisfied
    if !world.player_free(screen) {
        return empty;
    }
    let triggered = match config.trigger {
        TooltipTrigger::Hover => true,
        TooltipTrigger::ButtonHeld => world.button_held(screen, config.trigger_button),
    };
    if !triggered || world.gamepad_cursor_faded(screen) {
        return empty;
    }

    // suppression: never render under other UI
    if world.cursor_over_reserved_ui(screen, cursor) {
        return empty;
    }

    // fixed category declaration order: terrain, objects, characters
    let mut tooltips =
        registry.generate_terrain(&world.terrain_at(screen, cursor), &config.display_ids);
    tooltips.extend(registry.generate_objects(&world.objects_at(screen, cursor), &config.display_ids));
    tooltips.extend(
        registry.generate_characters(&world.characters_at(screen, cursor), &config.display_ids),
    );

    ResolvedFrame {
        cursor,
        viewport,
        tooltips,
    }
}
