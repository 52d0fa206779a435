//! Renders a computed tooltip layout. Pure side-effecting sink; every
//! decision was made by the layout engine.

use bevy::math::{Rect, Vec2};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::constants::{COUNTER_FONT_SIZE, SHADOW_OFFSETS, TOOLTIP_FONT_SIZE};
use crate::theme;

use super::layout::{TextMeasurer, TooltipLayout, layout_tooltips};
use super::query::{HoverState, ScreenId};
use super::record::{Badge, Tooltip};

/// Drawing collaborator the renderer hands its primitives to.
pub trait TooltipPainter {
    fn draw_panel(&mut self, rect: Rect);
    fn draw_text(&mut self, pos: Vec2, text: &str);
    fn draw_badge(&mut self, badge: &Badge, rect: Rect);
}

/// Walk a layout: row panels first, then text, then badges on top.
pub fn render_layout(layout: &TooltipLayout, tooltips: &[Tooltip], painter: &mut dyn TooltipPainter) {
    for row in &layout.rows {
        painter.draw_panel(row.panel);
    }
    for row in &layout.rows {
        painter.draw_text(row.text_pos, &tooltips[row.tooltip_index].text);
    }
    for placement in &layout.badges {
        let badge = &tooltips[placement.tooltip_index].badges[placement.badge_index];
        painter.draw_badge(badge, placement.rect);
    }
}

/// Text measurement over egui's font atlas.
pub struct EguiTextMeasurer<'a> {
    ctx: &'a egui::Context,
    font: egui::FontId,
}

impl<'a> EguiTextMeasurer<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self {
            ctx,
            font: egui::FontId::proportional(TOOLTIP_FONT_SIZE),
        }
    }
}

impl TextMeasurer for EguiTextMeasurer<'_> {
    fn measure(&self, text: &str) -> Vec2 {
        let size = self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), self.font.clone(), egui::Color32::WHITE)
                .size()
        });
        Vec2::new(size.x, size.y)
    }
}

/// Painter implementation over an egui layer painter.
pub struct EguiTooltipPainter<'a> {
    painter: &'a egui::Painter,
    font: egui::FontId,
    counter_font: egui::FontId,
}

impl<'a> EguiTooltipPainter<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self {
            painter,
            font: egui::FontId::proportional(TOOLTIP_FONT_SIZE),
            counter_font: egui::FontId::proportional(COUNTER_FONT_SIZE),
        }
    }
}

fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        egui::pos2(rect.min.x, rect.min.y),
        egui::pos2(rect.max.x, rect.max.y),
    )
}

impl TooltipPainter for EguiTooltipPainter<'_> {
    fn draw_panel(&mut self, rect: Rect) {
        let rect = to_egui_rect(rect);
        self.painter.rect_filled(rect, 4.0, theme::PANEL_FILL);
        self.painter.rect_stroke(
            rect,
            4.0,
            egui::Stroke::new(2.0, theme::PANEL_BORDER),
            egui::StrokeKind::Inside,
        );
    }

    fn draw_text(&mut self, pos: Vec2, text: &str) {
        for (dx, dy) in SHADOW_OFFSETS {
            self.painter.text(
                egui::pos2(pos.x + dx, pos.y + dy),
                egui::Align2::LEFT_TOP,
                text,
                self.font.clone(),
                theme::TEXT_SHADOW,
            );
        }
        self.painter.text(
            egui::pos2(pos.x, pos.y),
            egui::Align2::LEFT_TOP,
            text,
            self.font.clone(),
            theme::TEXT,
        );
    }

    fn draw_badge(&mut self, badge: &Badge, rect: Rect) {
        let rect = to_egui_rect(rect);
        match badge.texture {
            Some(texture) => {
                let uv = egui::Rect::from_min_max(
                    egui::pos2(badge.uv.min.x, badge.uv.min.y),
                    egui::pos2(badge.uv.max.x, badge.uv.max.y),
                );
                self.painter.image(texture, rect, uv, egui::Color32::WHITE);
            }
            // unknown texture: degraded badge instead of an aborted frame
            None => self
                .painter
                .rect_filled(rect, 2.0, theme::BADGE_PLACEHOLDER),
        }
        if let Some(counter) = badge.counter {
            self.painter.text(
                rect.right_bottom(),
                egui::Align2::RIGHT_BOTTOM,
                counter.to_string(),
                self.counter_font.clone(),
                badge.counter_color,
            );
        }
    }
}

/// Per-frame render system for the primary screen's egui context.
pub fn render_tooltips(mut contexts: EguiContexts, state: Res<HoverState>) -> Result {
    let Some(frame) = state.frame(ScreenId::PRIMARY) else {
        return Ok(());
    };
    if frame.tooltips.is_empty() {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let measurer = EguiTextMeasurer::new(ctx);
    let Some(layout) = layout_tooltips(&frame.tooltips, frame.cursor, frame.viewport, &measurer)
    else {
        return Ok(());
    };

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("hovertip-overlay"),
    ));
    let mut tooltip_painter = EguiTooltipPainter::new(&painter);
    render_layout(&layout, &frame.tooltips, &mut tooltip_painter);

    Ok(())
}
