//! Cross-module tests driving the resolver pipeline end to end with a mock
//! world and mock providers.

use bevy::prelude::*;

use crate::config::{OverlayConfigData, TooltipTrigger, TriggerButton};

use super::aggregator::{Category, TooltipRegistry};
use super::provider::{MatchCache, ProviderError, TooltipProvider};
use super::query::{HoverState, HoverWorld, ResolvedFrame, ScreenId, resolve_screen};
use super::record::Tooltip;

#[derive(Resource)]
struct MockWorld {
    free: bool,
    cursor: Option<Vec2>,
    viewport: Vec2,
    toolbar: Option<Rect>,
    gamepad_faded: bool,
    held: Vec<TriggerButton>,
    terrain: Vec<String>,
    objects: Vec<String>,
    characters: Vec<String>,
}

impl Default for MockWorld {
    fn default() -> Self {
        Self {
            free: true,
            cursor: Some(Vec2::new(100.0, 100.0)),
            viewport: Vec2::new(800.0, 600.0),
            toolbar: None,
            gamepad_faded: false,
            held: Vec::new(),
            terrain: vec!["parsnip".to_string()],
            objects: vec!["furnace".to_string()],
            characters: vec!["chicken".to_string()],
        }
    }
}

impl HoverWorld for MockWorld {
    type Terrain = String;
    type Object = String;
    type Character = String;

    fn player_free(&self, _screen: ScreenId) -> bool {
        self.free
    }

    fn cursor(&self, _screen: ScreenId) -> Option<Vec2> {
        self.cursor
    }

    fn viewport(&self, _screen: ScreenId) -> Vec2 {
        self.viewport
    }

    fn cursor_over_reserved_ui(&self, _screen: ScreenId, cursor: Vec2) -> bool {
        self.toolbar.is_some_and(|r| r.contains(cursor))
    }

    fn gamepad_cursor_faded(&self, _screen: ScreenId) -> bool {
        self.gamepad_faded
    }

    fn button_held(&self, _screen: ScreenId, button: TriggerButton) -> bool {
        self.held.contains(&button)
    }

    fn terrain_at(&self, _screen: ScreenId, _cursor: Vec2) -> Vec<String> {
        self.terrain.clone()
    }

    fn objects_at(&self, _screen: ScreenId, _cursor: Vec2) -> Vec<String> {
        self.objects.clone()
    }

    fn characters_at(&self, _screen: ScreenId, _cursor: Vec2) -> Vec<String> {
        self.characters.clone()
    }
}

/// Annotates every entity with a fixed prefix
struct EchoProvider {
    id: &'static str,
}

impl TooltipProvider<String> for EchoProvider {
    fn id(&self) -> &str {
        self.id
    }

    fn has_tooltip(&mut self, _entity: &String) -> bool {
        true
    }

    fn generate(&mut self, entity: &String) -> Result<Tooltip, ProviderError> {
        Ok(Tooltip::new(format!("{}:{}", self.id, entity)))
    }
}

/// Claims matches but never fills its cache, so `generate` is out of phase
struct ForgetfulProvider {
    cache: MatchCache<String>,
}

impl TooltipProvider<String> for ForgetfulProvider {
    fn id(&self) -> &str {
        "forgetful"
    }

    fn has_tooltip(&mut self, _entity: &String) -> bool {
        true
    }

    fn generate(&mut self, _entity: &String) -> Result<Tooltip, ProviderError> {
        let hit = self.cache.take()?;
        Ok(Tooltip::new(hit))
    }
}

fn registry_with_all_categories() -> TooltipRegistry<MockWorld> {
    let mut registry = TooltipRegistry::default();
    registry.add_terrain(EchoProvider { id: "crop" });
    registry.add_object(EchoProvider { id: "machine" });
    registry.add_character(EchoProvider { id: "critter" });
    registry
}

fn texts(frame: &ResolvedFrame) -> Vec<&str> {
    frame.tooltips.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn test_resolve_concatenates_categories_in_declaration_order() {
    let world = MockWorld::default();
    let mut registry = registry_with_all_categories();

    let frame = resolve_screen(
        &world,
        &mut registry,
        &OverlayConfigData::default(),
        ScreenId::PRIMARY,
    );
    assert_eq!(
        texts(&frame),
        vec!["crop:parsnip", "machine:furnace", "critter:chicken"]
    );
}

#[test]
fn test_player_not_free_yields_empty_frame() {
    let world = MockWorld {
        free: false,
        ..Default::default()
    };
    let mut registry = registry_with_all_categories();

    let frame = resolve_screen(
        &world,
        &mut registry,
        &OverlayConfigData::default(),
        ScreenId::PRIMARY,
    );
    assert!(frame.tooltips.is_empty());
    // frame snapshot still captured for the renderer
    assert_eq!(frame.viewport, Vec2::new(800.0, 600.0));
}

#[test]
fn test_missing_cursor_degrades_to_empty() {
    let world = MockWorld {
        cursor: None,
        ..Default::default()
    };
    let mut registry = registry_with_all_categories();

    let frame = resolve_screen(
        &world,
        &mut registry,
        &OverlayConfigData::default(),
        ScreenId::PRIMARY,
    );
    assert!(frame.tooltips.is_empty());
}

#[test]
fn test_button_held_trigger_gates_on_button_state() {
    let config = OverlayConfigData {
        trigger: TooltipTrigger::ButtonHeld,
        trigger_button: TriggerButton::MouseRight,
        ..Default::default()
    };

    let world = MockWorld::default();
    let mut registry = registry_with_all_categories();
    let frame = resolve_screen(&world, &mut registry, &config, ScreenId::PRIMARY);
    assert!(frame.tooltips.is_empty());

    let world = MockWorld {
        held: vec![TriggerButton::MouseRight],
        ..Default::default()
    };
    let frame = resolve_screen(&world, &mut registry, &config, ScreenId::PRIMARY);
    assert_eq!(frame.tooltips.len(), 3);
}

#[test]
fn test_faded_gamepad_cursor_suppresses_render() {
    let world = MockWorld {
        gamepad_faded: true,
        ..Default::default()
    };
    let mut registry = registry_with_all_categories();

    let frame = resolve_screen(
        &world,
        &mut registry,
        &OverlayConfigData::default(),
        ScreenId::PRIMARY,
    );
    assert!(frame.tooltips.is_empty());
}

#[test]
fn test_cursor_over_toolbar_suppresses_annotations() {
    let world = MockWorld {
        toolbar: Some(Rect::new(0.0, 0.0, 800.0, 150.0)),
        ..Default::default()
    };
    let mut registry = registry_with_all_categories();

    let frame = resolve_screen(
        &world,
        &mut registry,
        &OverlayConfigData::default(),
        ScreenId::PRIMARY,
    );
    assert!(frame.tooltips.is_empty());
}

#[test]
fn test_disabled_provider_filtered_per_frame() {
    let world = MockWorld::default();
    let mut registry = registry_with_all_categories();

    let mut config = OverlayConfigData::default();
    config.set_enabled("machine", false);

    let frame = resolve_screen(&world, &mut registry, &config, ScreenId::PRIMARY);
    assert_eq!(texts(&frame), vec!["crop:parsnip", "critter:chicken"]);
}

#[test]
fn test_out_of_phase_provider_is_isolated_from_the_frame() {
    let world = MockWorld::default();
    let mut registry = registry_with_all_categories();
    registry.add_terrain(ForgetfulProvider {
        cache: MatchCache::default(),
    });

    let frame = resolve_screen(
        &world,
        &mut registry,
        &OverlayConfigData::default(),
        ScreenId::PRIMARY,
    );
    // the violating provider contributes nothing; everyone else renders
    assert_eq!(
        texts(&frame),
        vec!["crop:parsnip", "machine:furnace", "critter:chicken"]
    );
}

#[test]
fn test_out_of_phase_is_distinct_from_no_match() {
    let mut provider = ForgetfulProvider {
        cache: MatchCache::default(),
    };
    let entity = "parsnip".to_string();
    assert!(provider.has_tooltip(&entity));
    assert_eq!(provider.generate(&entity), Err(ProviderError::OutOfPhase));
}

#[test]
fn test_remove_fans_out_across_categories() {
    let mut registry: TooltipRegistry<MockWorld> = TooltipRegistry::default();
    registry.add_terrain(EchoProvider { id: "shared" });
    registry.add_character(EchoProvider { id: "shared" });
    registry.add_object(EchoProvider { id: "machine" });

    registry.remove("shared");
    let infos = registry.providers();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].id, "machine");
    assert_eq!(infos[0].category, Category::Object);

    // idempotent, including for categories that never had the id
    registry.remove("shared");
    assert_eq!(registry.providers().len(), 1);
}

#[test]
fn test_provider_enumeration_lists_all_categories() {
    let registry = registry_with_all_categories();
    let infos = registry.providers();

    let mut pairs: Vec<(Category, &str)> =
        infos.iter().map(|i| (i.category, i.id.as_str())).collect();
    pairs.sort_by_key(|(c, _)| c.label());
    assert_eq!(
        pairs,
        vec![
            (Category::Character, "critter"),
            (Category::Object, "machine"),
            (Category::Terrain, "crop"),
        ]
    );
}

#[test]
fn test_hover_state_is_screen_scoped() {
    let mut state = HoverState::default();
    let one = ScreenId(1);
    let two = ScreenId(2);

    state.set(
        one,
        ResolvedFrame {
            cursor: Vec2::ZERO,
            viewport: Vec2::new(800.0, 600.0),
            tooltips: vec![Tooltip::new("screen one")],
        },
    );
    state.set(two, ResolvedFrame::default());

    assert_eq!(state.frame(one).unwrap().tooltips.len(), 1);
    assert!(state.frame(two).unwrap().tooltips.is_empty());

    // screens that disappear are dropped
    state.retain(&[two]);
    assert!(state.frame(one).is_none());
    assert!(state.frame(two).is_some());
}
