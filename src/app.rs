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

//! Application shell: panel composition and window-size persistence.

use eframe::egui;
use log::{info, warn};

use crate::config::AppConfig;
use crate::map::MapView;
use crate::status::MeshStatus;
use crate::theme;
use crate::ui::{header, nav};

pub struct PigeonApp {
    /// Preferences as loaded from disk. Session overrides never land here.
    config: AppConfig,
    status: MeshStatus,
    map: MapView,
    window_size: egui::Vec2,
}

impl PigeonApp {
    /// `saved` is the on-disk configuration; `session` carries the command
    /// line overrides on top of it.
    pub fn new(cc: &eframe::CreationContext<'_>, saved: AppConfig, session: &AppConfig) -> Self {
        apply_visuals(&cc.egui_ctx);

        Self {
            config: saved,
            status: MeshStatus::demo(),
            map: MapView::new(session.show_grid, session.animate_pulse),
            window_size: egui::vec2(session.window_width, session.window_height),
        }
    }
}

/// Light beige theme shared by the panels, separators, and glass windows.
fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = theme::BEIGE_BG;
    visuals.window_fill = theme::BEIGE_SURFACE;
    visuals.window_stroke = egui::Stroke::new(1.0, theme::BEIGE_BORDER);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, theme::BEIGE_BORDER);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, theme::INK_DARK);
    ctx.set_visuals(visuals);
}

impl eframe::App for PigeonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The pulse is the only animated element; keep frames coming while
        // it runs.
        if self.map.animate_pulse {
            ctx.request_repaint();
        }

        self.window_size = ctx.screen_rect().size();

        header::show(ctx, &self.status);
        nav::show(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.map.show(ui);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if !self.config.remember_window_size {
            return;
        }

        self.config.window_width = self.window_size.x;
        self.config.window_height = self.window_size.y;
        match self.config.save() {
            Ok(()) => info!(
                "Saved window size {}x{}",
                self.config.window_width, self.config.window_height
            ),
            Err(err) => warn!("Failed to save configuration: {}", err),
        }
    }
}
