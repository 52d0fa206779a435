use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// How tooltip display is triggered each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TooltipTrigger {
    /// Tooltips show whenever the cursor hovers an entity
    #[default]
    Hover,
    /// Tooltips show only while the trigger button is held
    ButtonHeld,
}

/// Button a [`TooltipTrigger::ButtonHeld`] trigger can bind to.
///
/// The host decides how these map onto its input backend; the engine only
/// asks the world whether the configured button is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TriggerButton {
    MouseLeft,
    #[default]
    MouseRight,
    MouseMiddle,
    ShiftLeft,
    ControlLeft,
    AltLeft,
}

/// Overlay configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OverlayConfigData {
    /// Per-provider enable flags keyed by provider id.
    /// A missing id never disables a provider.
    #[serde(default)]
    pub display_ids: HashMap<String, bool>,

    /// Trigger mode for tooltip display
    #[serde(default)]
    pub trigger: TooltipTrigger,

    /// Button bound to the ButtonHeld trigger mode
    #[serde(default)]
    pub trigger_button: TriggerButton,
}

impl OverlayConfigData {
    /// Whether the provider with this id is enabled (missing id ⇒ enabled)
    pub fn is_enabled(&self, id: &str) -> bool {
        self.display_ids.get(id).copied().unwrap_or(true)
    }

    /// Set the enable flag for a provider id
    pub fn set_enabled(&mut self, id: &str, enabled: bool) {
        self.display_ids.insert(id.to_string(), enabled);
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct OverlayConfig {
    /// The persisted configuration data
    pub data: OverlayConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            data: OverlayConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Load configuration from disk, degrading to defaults on any error
fn load_config() -> OverlayConfig {
    let config_path = crate::paths::config_file();

    let data = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    data
                }
                Err(e) => {
                    warn!("Failed to parse config file, using defaults: {}", e);
                    OverlayConfigData::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file, using defaults: {}", e);
                OverlayConfigData::default()
            }
        }
    } else {
        info!("No config file found, using defaults");
        OverlayConfigData::default()
    };

    OverlayConfig {
        data,
        config_path,
        dirty: false,
    }
}

/// Save configuration to disk
fn save_config(config: &OverlayConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(mut config: ResMut<OverlayConfig>) {
    let loaded = load_config();
    config.data = loaded.data;
    config.config_path = loaded.config_path;
    config.dirty = false;
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<OverlayConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverlayConfig>()
            .add_message::<SaveConfigRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                save_config_system.run_if(on_message::<SaveConfigRequest>),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_data_default() {
        let data = OverlayConfigData::default();
        assert!(data.display_ids.is_empty());
        assert_eq!(data.trigger, TooltipTrigger::Hover);
        assert_eq!(data.trigger_button, TriggerButton::MouseRight);
    }

    #[test]
    fn test_missing_id_is_enabled() {
        let data = OverlayConfigData::default();
        assert!(data.is_enabled("crop"));
    }

    #[test]
    fn test_set_enabled_round_trip() {
        let mut data = OverlayConfigData::default();
        data.set_enabled("crop", false);
        assert!(!data.is_enabled("crop"));
        data.set_enabled("crop", true);
        assert!(data.is_enabled("crop"));
    }

    #[test]
    fn test_config_data_serialization() {
        let mut data = OverlayConfigData {
            trigger: TooltipTrigger::ButtonHeld,
            trigger_button: TriggerButton::ShiftLeft,
            ..Default::default()
        };
        data.set_enabled("machine", false);

        let json = serde_json::to_string(&data).unwrap();
        let parsed: OverlayConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.trigger, TooltipTrigger::ButtonHeld);
        assert_eq!(parsed.trigger_button, TriggerButton::ShiftLeft);
        assert!(!parsed.is_enabled("machine"));
        assert!(parsed.is_enabled("crop"));
    }

    #[test]
    fn test_unknown_fields_degrade_to_defaults() {
        // Older config files may miss fields entirely
        let parsed: OverlayConfigData = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.trigger, TooltipTrigger::Hover);
        assert!(parsed.display_ids.is_empty());
    }
}
