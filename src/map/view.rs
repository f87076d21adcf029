// Copyright 2026 The Pigeon Desktop Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Map area composition.
//!
//! Everything on the map is painted onto one allocated canvas: the
//! placeholder surface and grid, the four incident markers, and the
//! user-location pulse. The glass overlay controls float above the canvas as
//! fixed-position frameless windows pinned to the map rect. No real map
//! rendering happens here; the canvas stands in for the tile layer.

use bias_layout::{Bias, Size};
use egui;
use log::debug;

use crate::map::markers::{demo_markers, MapMarker};
use crate::map::pulse::PulsePhase;
use crate::theme;
use crate::ui::glass;

/// Gap between overlay controls and the map edge.
const OVERLAY_PADDING: f32 = 16.0;
/// Inset of the action button row from the bottom of the map.
const ACTION_INSET: f32 = 24.0;
const ACTION_HEIGHT: f32 = 64.0;
const ACTION_GAP: f32 = 16.0;
const CONTROL_DIAMETER: f32 = 48.0;
const GRID_SPACING: f32 = 48.0;
/// Nominal box of the animated ping at scale 1.0.
const PING_DIAMETER: u32 = 120;

pub struct MapView {
    pub show_grid: bool,
    pub animate_pulse: bool,
    markers: Vec<MapMarker>,
}

impl MapView {
    pub fn new(show_grid: bool, animate_pulse: bool) -> Self {
        Self {
            show_grid,
            animate_pulse,
            markers: demo_markers(),
        }
    }

    /// Paints the map canvas and hangs the overlay controls over it.
    pub fn show(&self, ui: &mut egui::Ui) {
        let time = if self.animate_pulse {
            ui.input(|i| i.time)
        } else {
            0.0
        };

        let (response, painter) = ui.allocate_painter(
            egui::vec2(ui.available_width(), ui.available_height()),
            egui::Sense::click(),
        );
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, theme::MAP_SURFACE);
        if self.show_grid {
            draw_grid(&painter, rect);
        }
        for marker in &self.markers {
            draw_marker(&painter, &response, rect, marker);
        }
        draw_pulse(&painter, rect, time);

        let ctx = ui.ctx();
        search_bar(ctx, rect);
        map_controls(ctx, rect);
        action_bar(ctx, rect);
    }
}

/// Map rect as a pixel container for the positional mapper.
fn container_size(rect: egui::Rect) -> Size {
    Size::new(rect.width() as u32, rect.height() as u32)
}

fn draw_grid(painter: &egui::Painter, rect: egui::Rect) {
    let stroke = egui::Stroke::new(1.0, theme::translucent(theme::INK_MUTED, 0.08));

    let mut x = rect.left() + GRID_SPACING;
    while x < rect.right() {
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            stroke,
        );
        x += GRID_SPACING;
    }

    let mut y = rect.top() + GRID_SPACING;
    while y < rect.bottom() {
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            stroke,
        );
        y += GRID_SPACING;
    }
}

fn draw_pulse(painter: &egui::Painter, rect: egui::Rect, time: f64) {
    let offset = Bias::CENTER.align(Size::square(PING_DIAMETER), container_size(rect));
    let half = PING_DIAMETER as f32 / 2.0;
    let center = rect.min + egui::vec2(offset.x as f32 + half, offset.y as f32 + half);

    // Expanding ping. The fill's own 0.3 opacity is scaled by the fading
    // phase, so the halo dies out completely before the restart.
    let phase = PulsePhase::at(time);
    painter.circle_filled(
        center,
        half * phase.scale,
        theme::translucent(theme::CALM_BLUE, 0.3 * phase.alpha),
    );

    // Static ring
    painter.circle_filled(center, 30.0, theme::translucent(theme::CALM_BLUE, 0.1));
    painter.circle_stroke(
        center,
        30.0,
        egui::Stroke::new(1.0, theme::translucent(theme::CALM_BLUE, 0.2)),
    );

    // Center dot
    painter.circle_filled(
        center + egui::vec2(0.0, 1.0),
        8.0,
        theme::translucent(theme::INK_DARK, 0.2),
    );
    painter.circle_filled(center, 8.0, theme::CALM_BLUE);
    painter.circle_stroke(center, 8.0, egui::Stroke::new(2.0, egui::Color32::WHITE));
}

fn draw_marker(
    painter: &egui::Painter,
    response: &egui::Response,
    rect: egui::Rect,
    marker: &MapMarker,
) {
    let diameter = marker.kind.disc_diameter();
    let offset = marker.bias.align(Size::square(diameter), container_size(rect));
    let disc = egui::Rect::from_min_size(
        rect.min + egui::vec2(offset.x as f32, offset.y as f32),
        egui::Vec2::splat(diameter as f32),
    );
    let radius = diameter as f32 / 2.0;

    painter.circle_filled(
        disc.center() + egui::vec2(0.0, 2.0),
        radius,
        theme::translucent(theme::INK_DARK, 0.15),
    );
    painter.circle_filled(disc.center(), radius, marker.kind.accent());
    painter.circle_stroke(
        disc.center(),
        radius,
        egui::Stroke::new(4.0, theme::translucent(egui::Color32::WHITE, 0.6)),
    );
    painter.text(
        disc.center(),
        egui::Align2::CENTER_CENTER,
        marker.kind.glyph(),
        egui::FontId::proportional(20.0),
        egui::Color32::WHITE,
    );

    let chip_text = match marker.kind.chip_glyph() {
        Some(glyph) => format!("{glyph} {}", marker.label),
        None => marker.label.to_string(),
    };
    let chip_center = egui::pos2(disc.center().x, disc.bottom() + 15.0);
    let chip = glass::paint_chip(painter, chip_center, &chip_text, marker.kind.label_color());

    let resolve = marker.kind.has_resolve_action().then(|| {
        draw_resolve_button(painter, egui::pos2(chip.center().x, chip.bottom() + 18.0))
    });

    if response.clicked() {
        if let Some(click) = response.interact_pointer_pos() {
            if resolve.is_some_and(|r| r.contains(click)) {
                debug!("resolve tapped for {}", marker.label);
            } else if click.distance(disc.center()) <= radius {
                debug!("{} marker tapped", marker.label);
            }
        }
    }
}

fn draw_resolve_button(painter: &egui::Painter, center: egui::Pos2) -> egui::Rect {
    let label = "✓ RESOLVE";
    let galley = painter.layout_no_wrap(
        label.to_string(),
        egui::FontId::proportional(10.0),
        egui::Color32::WHITE,
    );
    let rect = egui::Rect::from_center_size(center, egui::vec2(galley.size().x + 24.0, 28.0));

    painter.rect_filled(
        rect.translate(egui::vec2(0.0, 2.0)),
        14.0,
        theme::translucent(theme::INK_DARK, 0.15),
    );
    painter.rect_filled(rect, 14.0, theme::CALM_BLUE);
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(10.0),
        egui::Color32::WHITE,
    );

    rect
}

fn search_bar(ctx: &egui::Context, map_rect: egui::Rect) {
    egui::Window::new("search_bar")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(map_rect.min + egui::vec2(OVERLAY_PADDING, OVERLAY_PADDING))
        .fixed_size(egui::vec2(272.0, 40.0))
        .frame(glass::window_frame(ctx, 24.0).inner_margin(4))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (icon_rect, _) =
                    ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
                let painter = ui.painter();
                painter.circle_filled(icon_rect.center(), 20.0, theme::BEIGE_BG);
                painter.text(
                    icon_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "🎯",
                    egui::FontId::proportional(16.0),
                    theme::INK_MUTED,
                );

                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Lat: 40.7128, Lon: -74.0060")
                        .color(theme::INK_DARK)
                        .size(13.0),
                );
            });

            let response = ui
                .interact(ui.max_rect(), ui.id().with("field"), egui::Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() {
                debug!("search bar tapped");
            }
        });
}

fn map_controls(ctx: &egui::Context, map_rect: egui::Rect) {
    let pos = egui::pos2(
        map_rect.right() - OVERLAY_PADDING - CONTROL_DIAMETER,
        map_rect.top() + OVERLAY_PADDING,
    );

    // Frameless window sized by its contents; the glass look comes from the
    // individual controls.
    egui::Window::new("map_controls")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(pos)
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;
            locate_button(ui);
            zoom_group(ui);
        });
}

fn locate_button(ui: &mut egui::Ui) {
    let (rect, response) =
        ui.allocate_exact_size(egui::Vec2::splat(CONTROL_DIAMETER), egui::Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    let painter = ui.painter();

    painter.circle_filled(
        rect.center(),
        CONTROL_DIAMETER / 2.0,
        theme::translucent(theme::BEIGE_SURFACE, glass::SURFACE_OPACITY),
    );
    painter.circle_stroke(
        rect.center(),
        CONTROL_DIAMETER / 2.0,
        egui::Stroke::new(1.0, theme::translucent(theme::BEIGE_BORDER, glass::BORDER_OPACITY)),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "📍",
        egui::FontId::proportional(18.0),
        theme::INK_DARK,
    );

    if response.clicked() {
        debug!("locate tapped");
    }
}

fn zoom_group(ui: &mut egui::Ui) {
    glass::group_frame(24.0).inner_margin(4).show(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 4.0;
        zoom_button(ui, "+", "zoom in");
        zoom_divider(ui);
        zoom_button(ui, "−", "zoom out");
    });
}

fn zoom_button(ui: &mut egui::Ui, glyph: &str, action: &str) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(40.0, 32.0), egui::Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(18.0),
        theme::INK_DARK,
    );

    if response.clicked() {
        debug!("{action} tapped");
    }
}

fn zoom_divider(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(40.0, 1.0), egui::Sense::hover());
    let center = rect.center();
    ui.painter().hline(
        (center.x - 12.0)..=(center.x + 12.0),
        center.y,
        egui::Stroke::new(1.0, theme::translucent(theme::INK_DARK, 0.1)),
    );
}

fn action_bar(ctx: &egui::Context, map_rect: egui::Rect) {
    let width = map_rect.width() - 2.0 * ACTION_INSET;
    let button_width = (width - ACTION_GAP) / 2.0;

    egui::Window::new("action_bar")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(egui::pos2(
            map_rect.left() + ACTION_INSET,
            map_rect.bottom() - ACTION_INSET - ACTION_HEIGHT,
        ))
        .fixed_size(egui::vec2(width, ACTION_HEIGHT))
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.x = ACTION_GAP;
            ui.horizontal(|ui| {
                action_button(ui, button_width, "🚨", "Report", theme::CALM_RED);
                action_button(ui, button_width, "❓", "Need Help", theme::CALM_YELLOW);
            });
        });
}

fn action_button(ui: &mut egui::Ui, width: f32, glyph: &str, label: &str, fill: egui::Color32) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, ACTION_HEIGHT), egui::Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    let painter = ui.painter();

    painter.rect_filled(
        rect.translate(egui::vec2(0.0, 3.0)),
        16.0,
        theme::translucent(theme::INK_DARK, 0.2),
    );
    let fill = if response.hovered() {
        fill.gamma_multiply(0.92)
    } else {
        fill
    };
    painter.rect_filled(rect, 16.0, fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        format!("{glyph}  {}", label.to_uppercase()),
        egui::FontId::proportional(16.0),
        egui::Color32::WHITE,
    );

    if response.clicked() {
        debug!("{label} button tapped");
    }
}
