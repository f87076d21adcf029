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

//! Bottom navigation bar. Map is the active tab; the rest are stubs that
//! only log a tap.

use egui;
use log::debug;

use crate::theme;

struct NavItem {
    glyph: &'static str,
    label: &'static str,
    active: bool,
    badged: bool,
}

const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        glyph: "🌍",
        label: "Map",
        active: true,
        badged: false,
    },
    NavItem {
        glyph: "🕐",
        label: "Log",
        active: false,
        badged: false,
    },
    NavItem {
        glyph: "🔄",
        label: "Sync",
        active: false,
        badged: true,
    },
    NavItem {
        glyph: "👤",
        label: "Profile",
        active: false,
        badged: false,
    },
];

pub fn show(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("nav")
        .frame(
            egui::Frame::new()
                .fill(theme::BEIGE_SURFACE)
                .inner_margin(egui::Margin::symmetric(24, 12)),
        )
        .show(ctx, |ui| {
            ui.columns(NAV_ITEMS.len(), |columns| {
                for (column, item) in columns.iter_mut().zip(&NAV_ITEMS) {
                    draw_nav_item(column, item);
                }
            });
        });
}

fn draw_nav_item(ui: &mut egui::Ui, item: &NavItem) {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 48.0),
        egui::Sense::click(),
    );
    let painter = ui.painter();

    let tint = if item.active {
        theme::CALM_BLUE
    } else {
        theme::INK_MUTED
    };

    // Pill hugs the glyph; the label sits below it.
    let glyph_pos = rect.center() - egui::vec2(0.0, 8.0);
    if item.active {
        let pill = egui::Rect::from_center_size(glyph_pos, egui::vec2(56.0, 32.0));
        painter.rect_filled(pill, 16.0, theme::translucent(theme::CALM_BLUE, 0.1));
    }

    painter.text(
        glyph_pos,
        egui::Align2::CENTER_CENTER,
        item.glyph,
        egui::FontId::proportional(18.0),
        tint,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 14.0),
        egui::Align2::CENTER_CENTER,
        item.label.to_uppercase(),
        egui::FontId::proportional(10.0),
        tint,
    );

    if item.badged {
        let badge_center = glyph_pos + egui::vec2(20.0, -8.0);
        painter.circle_filled(badge_center, 4.0, theme::ONLINE_GREEN);
        painter.circle_stroke(
            badge_center,
            4.0,
            egui::Stroke::new(1.0, theme::BEIGE_SURFACE),
        );
    }

    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.clicked() {
        debug!("{} tab tapped", item.label);
    }
}
