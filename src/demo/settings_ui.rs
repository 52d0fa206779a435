//! Settings window: per-provider enable checkboxes grouped by category,
//! plus the trigger mode and button binding. Toggled with F1.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use hovertip::config::{OverlayConfig, SaveConfigRequest, TooltipTrigger, TriggerButton};
use hovertip::tooltip::{Category, TooltipRegistry};

use super::world::FarmWorld;

/// State for the settings window
#[derive(Resource, Default)]
pub struct SettingsWindowState {
    /// Whether the window is open
    pub is_open: bool,
}

const TRIGGER_BUTTONS: [TriggerButton; 6] = [
    TriggerButton::MouseLeft,
    TriggerButton::MouseRight,
    TriggerButton::MouseMiddle,
    TriggerButton::ShiftLeft,
    TriggerButton::ControlLeft,
    TriggerButton::AltLeft,
];

fn button_label(button: TriggerButton) -> &'static str {
    match button {
        TriggerButton::MouseLeft => "Left Mouse",
        TriggerButton::MouseRight => "Right Mouse",
        TriggerButton::MouseMiddle => "Middle Mouse",
        TriggerButton::ShiftLeft => "Left Shift",
        TriggerButton::ControlLeft => "Left Ctrl",
        TriggerButton::AltLeft => "Left Alt",
    }
}

/// Toggle the settings window with F1
pub fn toggle_settings_window(
    keys: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<SettingsWindowState>,
) {
    if keys.just_pressed(KeyCode::F1) {
        state.is_open = !state.is_open;
    }
}

/// Renders the settings window
pub fn settings_window_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<SettingsWindowState>,
    mut config: ResMut<OverlayConfig>,
    registry: Res<TooltipRegistry<FarmWorld>>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    if !state.is_open {
        return Ok(());
    }

    let mut changed = false;
    let mut is_open = state.is_open;

    let ctx = contexts.ctx_mut()?;
    egui::Window::new("Overlay Settings")
        .open(&mut is_open)
        .collapsible(false)
        .resizable(false)
        .min_width(320.0)
        .show(ctx, |ui| {
            ui.heading("Trigger");
            let mut trigger = config.data.trigger;
            ui.horizontal(|ui| {
                changed |= ui
                    .radio_value(&mut trigger, TooltipTrigger::Hover, "On hover")
                    .changed();
                changed |= ui
                    .radio_value(&mut trigger, TooltipTrigger::ButtonHeld, "While button held")
                    .changed();
            });
            config.data.trigger = trigger;

            if config.data.trigger == TooltipTrigger::ButtonHeld {
                let mut button = config.data.trigger_button;
                egui::ComboBox::from_label("Trigger button")
                    .selected_text(button_label(button))
                    .show_ui(ui, |ui| {
                        for candidate in TRIGGER_BUTTONS {
                            changed |= ui
                                .selectable_value(&mut button, candidate, button_label(candidate))
                                .changed();
                        }
                    });
                config.data.trigger_button = button;
            }

            ui.separator();

            let infos = registry.providers();
            for category in [Category::Terrain, Category::Object, Category::Character] {
                let in_category: Vec<_> =
                    infos.iter().filter(|i| i.category == category).collect();
                if in_category.is_empty() {
                    continue;
                }
                ui.heading(category.label());
                for info in in_category {
                    let mut enabled = config.data.is_enabled(&info.id);
                    let checkbox = ui
                        .checkbox(&mut enabled, &info.display_name)
                        .on_hover_text(&info.description);
                    if checkbox.changed() {
                        config.data.set_enabled(&info.id, enabled);
                        changed = true;
                    }
                }
                ui.add_space(4.0);
            }
        });

    state.is_open = is_open;

    if changed {
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }

    Ok(())
}
