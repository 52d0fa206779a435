//! Centralized constants used across the overlay engine.
//!
//! This module contains magic numbers and layout values that are used
//! in multiple places or would benefit from being named constants.

/// Gap between the cursor and the tooltip box anchor, in pixels.
/// Also added to the measured text size as box padding.
pub const CURSOR_PADDING: f32 = 32.0;

/// Inset from the box edge to the text, in pixels.
pub const TEXT_INSET: f32 = 16.0;

/// Extra vertical inset applied to text on top of [`TEXT_INSET`].
pub const TEXT_INSET_EXTRA_Y: f32 = 4.0;

/// Minimum height of one stacked tooltip row, in pixels.
/// Keeps single-line rows from collapsing below the border art.
pub const MIN_ROW_HEIGHT: f32 = 60.0;

/// Width of the drawn panel border. Consecutive rows overlap by this
/// amount so their borders merge into one box.
pub const BORDER_SIZE: f32 = 12.0;

/// Sideways nudge applied when a viewport clamp moves the box, so the
/// cursor does not end up covering the first line of text.
pub const CLAMP_NUDGE: f32 = 16.0;

/// Drop-shadow pass offsets for tooltip text, applied before the
/// foreground pass.
pub const SHADOW_OFFSETS: [(f32, f32); 4] = [(2.0, 2.0), (0.0, 2.0), (2.0, 0.0), (1.0, 1.0)];

/// Font size for tooltip body text, in points.
pub const TOOLTIP_FONT_SIZE: f32 = 16.0;

/// Font size for the counter label drawn over a badge, in points.
pub const COUNTER_FONT_SIZE: f32 = 12.0;

/// Default edge length for icon badges, in pixels.
pub const DEFAULT_BADGE_SIZE: f32 = 32.0;
