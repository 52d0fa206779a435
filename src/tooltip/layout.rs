//! Tooltip layout: merges the frame's annotation records into one stacked,
//! viewport-clamped box and positions every icon badge.
//!
//! The pipeline per frame is:
//! 1. measure the blank-line-joined text of all records,
//! 2. anchor an approximate box at cursor + padding and clamp it into the
//!    viewport (right edge first, then bottom),
//! 3. resolve every badge against the approximate box and expand to the
//!    union (the extended box),
//! 4. shift both boxes right/down by whatever the extension grew on the
//!    left/top, so the text box's on-screen anchor point never moves and
//!    nothing clips off-box,
//! 5. stack one row per record and place badge groups per anchor.
//!
//! Everything here is pure math over the record shape; text measurement is
//! the host's concern behind [`TextMeasurer`].

use bevy::math::{Rect, Vec2};

use crate::constants::{
    BORDER_SIZE, CLAMP_NUDGE, CURSOR_PADDING, MIN_ROW_HEIGHT, TEXT_INSET, TEXT_INSET_EXTRA_Y,
};

use super::record::{Badge, BadgeAnchor, Tooltip};

/// Text-metrics collaborator: measures a block of text in pixels.
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> Vec2;
}

/// Final geometry for one frame's tooltip overlay, in screen pixels.
#[derive(Debug, Clone)]
pub struct TooltipLayout {
    /// Union of every row panel and badge; never exceeds what the clamped
    /// text box plus badge overhang requires
    pub panel: Rect,
    /// The approximate (text-only) box after clamping and compensation
    pub text_box: Rect,
    /// One stacked row per record, top to bottom
    pub rows: Vec<RowLayout>,
    /// Absolute draw rectangle per badge
    pub badges: Vec<BadgePlacement>,
}

#[derive(Debug, Clone)]
pub struct RowLayout {
    pub tooltip_index: usize,
    /// Bordered panel rect for this record's section
    pub panel: Rect,
    /// Top-left corner the record's text is drawn at
    pub text_pos: Vec2,
}

#[derive(Debug, Clone)]
pub struct BadgePlacement {
    pub tooltip_index: usize,
    pub badge_index: usize,
    pub rect: Rect,
}

/// Lay out the frame's records. Zero records produce no box at all.
pub fn layout_tooltips(
    tooltips: &[Tooltip],
    cursor: Vec2,
    viewport: Vec2,
    measurer: &dyn TextMeasurer,
) -> Option<TooltipLayout> {
    if tooltips.is_empty() {
        return None;
    }

    // the blank-line join is a good approximation of the stacked rows
    let joined = tooltips
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    let text_size = measurer.measure(&joined);

    let approx = approximate_box(text_size, cursor, viewport);
    let extended = expand_for_badges(approx, tooltips);

    // growth to the left/top is compensated by shifting right/down, which
    // pins the layout's top-left to the cursor-relative anchor point
    let shift = approx.min - extended.min;
    let approx = translate(approx, shift);
    let extended = translate(extended, shift);

    let mut rows = Vec::with_capacity(tooltips.len());
    let mut badges = Vec::new();
    let mut panel = extended;
    let mut y = approx.min.y;

    for (index, tooltip) in tooltips.iter().enumerate() {
        let row_height = (measurer.measure(&tooltip.text).y + CURSOR_PADDING).max(MIN_ROW_HEIGHT);
        let row = Rect::new(extended.min.x, y, extended.max.x, y + row_height);

        place_badges(index, tooltip, row.inflate(-BORDER_SIZE), &mut badges);
        rows.push(RowLayout {
            tooltip_index: index,
            panel: row,
            text_pos: Vec2::new(
                approx.min.x + TEXT_INSET,
                y + TEXT_INSET + TEXT_INSET_EXTRA_Y,
            ),
        });

        panel = panel.union(row);
        // rows overlap by the border width so their frames merge
        y += row_height - BORDER_SIZE;
    }

    Some(TooltipLayout {
        panel,
        text_box: approx,
        rows,
        badges,
    })
}

/// Text-only box anchored at cursor + padding, clamped into the viewport.
/// Clamp order is fixed: right edge first, then bottom; each clamp nudges
/// the other axis away from the cursor.
fn approximate_box(text_size: Vec2, cursor: Vec2, viewport: Vec2) -> Rect {
    let size = Vec2::new(text_size.x + CURSOR_PADDING, text_size.y);
    let clamp_height = (text_size.y + CURSOR_PADDING).max(MIN_ROW_HEIGHT);
    let mut pos = cursor + Vec2::splat(CURSOR_PADDING);

    if pos.x + size.x > viewport.x {
        pos.x = viewport.x - size.x;
        pos.y += CLAMP_NUDGE;
    }
    if pos.y + clamp_height > viewport.y {
        pos.y = viewport.y - clamp_height;
        // the nudge must not push the box back over the right edge
        pos.x = (pos.x + CLAMP_NUDGE).min(viewport.x - size.x);
    }

    Rect::from_corners(pos, pos + size)
}

/// Union of the approximate box and every badge of every record, each
/// resolved against the approximate box.
fn expand_for_badges(approx: Rect, tooltips: &[Tooltip]) -> Rect {
    let mut result = approx;
    for tooltip in tooltips {
        for badge in &tooltip.badges {
            result = result.union(badge.resolve(approx));
        }
    }
    result
}

fn translate(rect: Rect, delta: Vec2) -> Rect {
    Rect::from_corners(rect.min + delta, rect.max + delta)
}

/// Place one record's badges against its border-shrunk row box.
///
/// Badges sharing an anchor form a group laid out contiguously in their
/// original order and centered as a unit along the axis perpendicular to
/// the anchored edge.
fn place_badges(tooltip_index: usize, tooltip: &Tooltip, inner: Rect, out: &mut Vec<BadgePlacement>) {
    for anchor in BadgeAnchor::ALL {
        let group: Vec<(usize, &Badge)> = tooltip
            .badges
            .iter()
            .enumerate()
            .filter(|(_, b)| b.anchor == anchor)
            .collect();
        if group.is_empty() {
            continue;
        }

        let resolved: Vec<Rect> = group.iter().map(|(_, b)| b.resolve(inner)).collect();

        if group.len() == 1 {
            out.push(BadgePlacement {
                tooltip_index,
                badge_index: group[0].0,
                rect: resolved[0],
            });
            continue;
        }

        // multiple badges on one anchor: center the group as a unit
        let horizontal = is_horizontal_aligned(inner, resolved[0]);
        let total_width: f32 = resolved.iter().map(|r| r.width()).sum();
        let total_height: f32 = resolved.iter().map(|r| r.height()).sum();
        let count = resolved.len() as f32;
        let avg_x = resolved.iter().map(|r| r.min.x).sum::<f32>() / count;
        let avg_y = resolved.iter().map(|r| r.min.y).sum::<f32>() / count;

        let mut pen = if horizontal {
            Vec2::new(inner.min.x + (inner.width() - total_width) / 2.0, avg_y)
        } else {
            Vec2::new(avg_x, inner.min.y + (inner.height() - total_height) / 2.0)
        };

        for ((badge_index, _), rect) in group.iter().zip(&resolved) {
            out.push(BadgePlacement {
                tooltip_index,
                badge_index: *badge_index,
                rect: Rect::from_corners(pen, pen + rect.size()),
            });
            if horizontal {
                pen.x += rect.width();
            } else {
                pen.y += rect.height();
            }
        }
    }
}

/// Pick the centering axis for a badge group: the axis whose
/// distance-to-nearest-edge is larger wins, ties favor horizontal.
fn is_horizontal_aligned(container: Rect, element: Rect) -> bool {
    let dx = (container.min.x - element.min.x)
        .abs()
        .min((container.max.x - element.max.x).abs());
    let dy = (container.min.y - element.min.y)
        .abs()
        .min((container.max.y - element.max.y).abs());
    dx >= dy
}
