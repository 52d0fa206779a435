//! The annotation record shape providers produce and the layout consumes.

use bevy::math::{Rect, Vec2};
use bevy_egui::egui;

/// Named reference point on the tooltip box that a badge is resolved
/// against.
///
/// Badges hang *outward* past the anchored edge: a `CenterRight` badge sits
/// to the right of the box, a `TopLeft` badge above and to the left of the
/// corner. The layout engine expands the box to make room and shifts the
/// whole layout so nothing clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeAnchor {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl BadgeAnchor {
    pub const ALL: [BadgeAnchor; 8] = [
        BadgeAnchor::TopLeft,
        BadgeAnchor::TopCenter,
        BadgeAnchor::TopRight,
        BadgeAnchor::CenterLeft,
        BadgeAnchor::CenterRight,
        BadgeAnchor::BottomLeft,
        BadgeAnchor::BottomCenter,
        BadgeAnchor::BottomRight,
    ];

    /// Resolve a badge of `size` against `container`, offset by `offset`.
    ///
    /// The anchor point is on the container; the badge extends outward from
    /// the anchored edge(s) and is centered on `Center*`/`*Center` axes.
    pub fn resolve(self, container: Rect, size: Vec2, offset: Vec2) -> Rect {
        use BadgeAnchor::*;

        let x = match self {
            TopLeft | CenterLeft | BottomLeft => container.min.x - size.x,
            TopRight | CenterRight | BottomRight => container.max.x,
            TopCenter | BottomCenter => container.center().x - size.x / 2.0,
        };
        let y = match self {
            TopLeft | TopCenter | TopRight => container.min.y - size.y,
            BottomLeft | BottomCenter | BottomRight => container.max.y,
            CenterLeft | CenterRight => container.center().y - size.y / 2.0,
        };

        let min = Vec2::new(x, y) + offset;
        Rect::from_corners(min, min + size)
    }
}

/// One positioned icon badge on a tooltip.
///
/// `anchor` + `offset` are resolved against the final box rectangle, never
/// absolute screen coordinates; that indirection is what lets the layout
/// engine grow the box after the badge was produced.
#[derive(Debug, Clone)]
pub struct Badge {
    /// Texture to draw; `None` renders a placeholder fill instead of
    /// aborting the frame.
    pub texture: Option<egui::TextureId>,
    /// Normalized sub-region of the texture (full texture by default)
    pub uv: Rect,
    /// Draw size in pixels
    pub size: Vec2,
    pub anchor: BadgeAnchor,
    /// Pixel offset applied after anchor resolution
    pub offset: Vec2,
    /// Optional numeric label drawn over the badge
    pub counter: Option<u32>,
    pub counter_color: egui::Color32,
}

impl Badge {
    pub fn new(texture: egui::TextureId, size: Vec2) -> Self {
        Self {
            texture: Some(texture),
            ..Self::placeholder(size)
        }
    }

    /// A badge with no texture; the renderer draws a neutral fill.
    pub fn placeholder(size: Vec2) -> Self {
        Self {
            texture: None,
            uv: Rect::new(0.0, 0.0, 1.0, 1.0),
            size,
            anchor: BadgeAnchor::default(),
            offset: Vec2::ZERO,
            counter: None,
            counter_color: egui::Color32::WHITE,
        }
    }

    pub fn anchored(mut self, anchor: BadgeAnchor, offset: Vec2) -> Self {
        self.anchor = anchor;
        self.offset = offset;
        self
    }

    pub fn with_counter(mut self, counter: u32, color: egui::Color32) -> Self {
        self.counter = Some(counter);
        self.counter_color = color;
        self
    }

    /// Absolute rectangle for this badge against a container box
    pub fn resolve(&self, container: Rect) -> Rect {
        self.anchor.resolve(container, self.size, self.offset)
    }
}

/// One provider's annotation for one entity: lines of text plus zero or
/// more icon badges. Immutable once produced, owned by the frame that
/// produced it and discarded with it.
#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    pub text: String,
    pub badges: Vec<Badge>,
}

impl Tooltip {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            badges: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badges.push(badge);
        self
    }
}
