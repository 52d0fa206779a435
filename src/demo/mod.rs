//! Demo host: a fake farm world, three providers and a settings window,
//! wired around the overlay engine.

mod providers;
mod settings_ui;
mod world;

pub use world::{FarmWorld, WINDOW_HEIGHT, WINDOW_WIDTH};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use hovertip::config::ConfigLoaded;

use settings_ui::SettingsWindowState;

pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FarmWorld>()
            .init_resource::<SettingsWindowState>()
            .add_systems(
                Startup,
                (world::spawn_scene, providers::register_providers).after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    world::sync_input.before(hovertip::tooltip::query::resolve_tooltips::<FarmWorld>),
                    settings_ui::toggle_settings_window,
                ),
            )
            .add_systems(EguiPrimaryContextPass, settings_ui::settings_window_ui);
    }
}
