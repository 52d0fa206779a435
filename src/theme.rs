//! Centralized color theme for the tooltip overlay.
//!
//! This module provides all colors used by the renderer and the demo.
//! Modify values here to change the overlay's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Tooltip Panel Colors
// ============================================================================

/// Panel fill behind the tooltip text
pub const PANEL_FILL: egui::Color32 = egui::Color32::from_rgb(40, 34, 28);

/// Panel border stroke
pub const PANEL_BORDER: egui::Color32 = egui::Color32::from_rgb(160, 120, 60);

/// Foreground tooltip text
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(230, 220, 200);

/// Drop-shadow passes behind tooltip text
pub const TEXT_SHADOW: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 160);

// ============================================================================
// Badge Colors
// ============================================================================

/// Fill for badges whose texture could not be resolved
pub const BADGE_PLACEHOLDER: egui::Color32 = egui::Color32::from_rgb(60, 60, 60);

/// Counter label colors indexed by item quality (normal, silver, gold, iridium)
pub const COUNTER_QUALITY: [egui::Color32; 4] = [
    egui::Color32::WHITE,
    egui::Color32::WHITE,
    egui::Color32::GOLD,
    egui::Color32::from_rgb(147, 112, 219),
];

/// Counter label color for a given quality tier (clamped to the palette)
pub fn counter_color_for_quality(quality: usize) -> egui::Color32 {
    COUNTER_QUALITY[quality.min(COUNTER_QUALITY.len() - 1)]
}

// ============================================================================
// Demo World Colors (bevy)
// ============================================================================

/// Tilled soil tiles with a crop
pub const DEMO_CROP_TILE: Color = Color::srgb(0.45, 0.30, 0.15);

/// Machine tiles
pub const DEMO_MACHINE_TILE: Color = Color::srgb(0.35, 0.35, 0.40);

/// Wandering critters
pub const DEMO_CRITTER: Color = Color::srgb(0.85, 0.75, 0.50);

/// Reserved toolbar strip at the bottom of the screen
pub const DEMO_TOOLBAR: Color = Color::srgba(0.1, 0.1, 0.12, 0.9);

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (preserving alpha)
pub fn bevy_to_egui(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        (srgba.alpha * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_color_clamps_to_palette() {
        assert_eq!(counter_color_for_quality(0), COUNTER_QUALITY[0]);
        assert_eq!(counter_color_for_quality(3), COUNTER_QUALITY[3]);
        assert_eq!(counter_color_for_quality(99), COUNTER_QUALITY[3]);
    }

    #[test]
    fn test_bevy_to_egui_preserves_alpha() {
        let color = bevy_to_egui(Color::srgba(1.0, 0.0, 0.0, 0.5));
        assert_eq!(color.r(), 255);
        assert_eq!(color.a(), 127);
    }
}
