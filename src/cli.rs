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

//! Command line options: session-only overrides of the saved preferences.

use clap::Parser;

use crate::config::AppConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "pigeon-desktop")]
#[command(about = "Desktop preview of the Pigeon mesh-response map screen")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Window width in pixels, overriding the saved value")]
    pub width: Option<f32>,

    #[arg(long, help = "Window height in pixels, overriding the saved value")]
    pub height: Option<f32>,

    #[arg(long, help = "Freeze the user-location pulse")]
    pub no_animation: bool,

    #[arg(long, help = "Hide the placeholder grid on the map surface")]
    pub no_grid: bool,
}

impl Cli {
    /// Applies the overrides to a loaded configuration. Nothing here is
    /// written back to disk.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(width) = self.width {
            config.window_width = width;
        }
        if let Some(height) = self.height {
            config.window_height = height;
        }
        if self.no_animation {
            config.animate_pulse = false;
        }
        if self.no_grid {
            config.show_grid = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_change_nothing() {
        let cli = Cli::try_parse_from(["pigeon-desktop"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config.window_width, 420.0);
        assert!(config.animate_pulse);
        assert!(config.show_grid);
    }

    #[test]
    fn test_overrides_apply_without_persisting_flags() {
        let cli = Cli::try_parse_from([
            "pigeon-desktop",
            "--width",
            "800",
            "--no-animation",
            "--no-grid",
        ])
        .unwrap();
        let mut config = AppConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config.window_width, 800.0);
        assert_eq!(config.window_height, 900.0);
        assert!(!config.animate_pulse);
        assert!(!config.show_grid);
        assert!(config.remember_window_size);
    }
}
