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

//! Top header bar: mesh status on the left, sync status on the right.

use egui;

use crate::status::MeshStatus;
use crate::theme;

const BADGE_DIAMETER: f32 = 40.0;

pub fn show(ctx: &egui::Context, status: &MeshStatus) {
    // The separator line under the panel picks up the border color from the
    // app-wide visuals.
    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::new()
                .fill(theme::BEIGE_SURFACE)
                .inner_margin(egui::Margin::symmetric(20, 16)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                draw_mesh_badge(ui, status.state.is_online());

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(status.state.label())
                            .color(theme::INK_DARK)
                            .size(14.0)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(status.connection_summary())
                            .color(theme::INK_MUTED)
                            .size(12.0),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                        ui.label(
                            egui::RichText::new(status.sync_age_label())
                                .color(theme::INK_DARK)
                                .size(14.0)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(status.sync.label())
                                .color(theme::INK_MUTED)
                                .size(10.0),
                        );
                    });
                });
            });
        });
}

fn draw_mesh_badge(ui: &mut egui::Ui, online: bool) {
    let (rect, _response) = ui.allocate_exact_size(
        egui::vec2(BADGE_DIAMETER, BADGE_DIAMETER),
        egui::Sense::hover(),
    );
    let painter = ui.painter();

    painter.circle_filled(
        rect.center(),
        BADGE_DIAMETER / 2.0,
        theme::translucent(theme::CALM_BLUE, 0.1),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "📡",
        egui::FontId::proportional(18.0),
        theme::CALM_BLUE,
    );

    // Presence dot in the badge's upper-right, ringed in the surface color so
    // it reads as sitting on top of the circle.
    let dot_center = egui::pos2(rect.max.x - 9.0, rect.min.y + 9.0);
    let dot_color = if online {
        theme::ONLINE_GREEN
    } else {
        theme::INK_MUTED
    };
    painter.circle_filled(dot_center, 5.0, dot_color);
    painter.circle_stroke(dot_center, 5.0, egui::Stroke::new(1.0, theme::BEIGE_SURFACE));
}
