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

//! Glass-morphism building blocks shared by the map overlays.

use egui;

use crate::theme;

/// Opacity of glass surfaces floating over the map.
pub const SURFACE_OPACITY: f32 = 0.85;
/// Opacity of the hairline border around glass surfaces.
pub const BORDER_OPACITY: f32 = 0.6;

/// Window frame restyled into the glass look, keeping the themed shadow.
pub fn window_frame(ctx: &egui::Context, corner_radius: f32) -> egui::Frame {
    egui::Frame::window(&ctx.style())
        .fill(theme::translucent(theme::BEIGE_SURFACE, SURFACE_OPACITY))
        .stroke(egui::Stroke::new(
            1.0,
            theme::translucent(theme::BEIGE_BORDER, BORDER_OPACITY),
        ))
        .corner_radius(corner_radius)
}

/// Shadowless variant for glass groups nested inside another overlay.
pub fn group_frame(corner_radius: f32) -> egui::Frame {
    egui::Frame::new()
        .fill(theme::translucent(theme::BEIGE_SURFACE, SURFACE_OPACITY))
        .stroke(egui::Stroke::new(
            1.0,
            theme::translucent(theme::BEIGE_BORDER, BORDER_OPACITY),
        ))
        .corner_radius(corner_radius)
}

/// Paints an uppercase label chip centered at `center` and returns the chip
/// rect so callers can stack further chips beneath it.
pub fn paint_chip(
    painter: &egui::Painter,
    center: egui::Pos2,
    text: &str,
    text_color: egui::Color32,
) -> egui::Rect {
    let label = text.to_uppercase();
    let galley = painter.layout_no_wrap(
        label.clone(),
        egui::FontId::proportional(10.0),
        text_color,
    );

    let padding = egui::vec2(8.0, 4.0);
    let chip_rect = egui::Rect::from_center_size(center, galley.size() + padding * 2.0);
    // Backing rect one pixel larger stands in for a hairline border.
    painter.rect_filled(chip_rect.expand(1.0), 7.0, theme::BEIGE_BORDER);
    painter.rect_filled(
        chip_rect,
        6.0,
        theme::translucent(egui::Color32::WHITE, 0.9),
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(10.0),
        text_color,
    );

    chip_rect
}
