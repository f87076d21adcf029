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

//! Application configuration management.
//!
//! This module handles persistent configuration storage using TOML format.
//! Only UI preferences are persisted; the preview has no domain data.

use log::warn;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "pigeon-desktop";
const CONFIG_NAME: &str = "config";

/// Application configuration stored in TOML format
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Configuration schema version for migrations
    #[serde(default = "default_config_version")]
    pub config_version: u32,

    /// Initial window width in pixels
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in pixels
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Draw the placeholder grid over the map surface
    #[serde(default = "default_true")]
    pub show_grid: bool,

    /// Animate the user-location pulse
    #[serde(default = "default_true")]
    pub animate_pulse: bool,

    /// Persist the window size on exit
    #[serde(default = "default_true")]
    pub remember_window_size: bool,
}

// Default value functions for serde
fn default_config_version() -> u32 {
    1
}

fn default_window_width() -> f32 {
    420.0
}

fn default_window_height() -> f32 {
    900.0
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            show_grid: true,
            animate_pulse: true,
            remember_window_size: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self, confy::ConfyError> {
        confy::load(APP_NAME, CONFIG_NAME)
    }

    /// Load configuration, falling back to defaults when the file is missing
    /// or malformed
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            warn!("Failed to load configuration, using defaults: {}", err);
            Self::default()
        })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, CONFIG_NAME, self)
    }

    /// Get the config file path for display to user
    pub fn get_config_path() -> Result<std::path::PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.config_version, 1);
        assert_eq!(config.window_width, 420.0);
        assert_eq!(config.window_height, 900.0);
        assert!(config.show_grid);
        assert!(config.animate_pulse);
        assert!(config.remember_window_size);
    }

    #[test]
    fn test_empty_document_deserializes_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.config_version, 1);
        assert_eq!(config.window_width, 420.0);
        assert!(config.animate_pulse);
    }

    #[test]
    fn test_partial_document_keeps_remaining_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"window_width": 800.0, "show_grid": false}"#).unwrap();
        assert_eq!(config.window_width, 800.0);
        assert!(!config.show_grid);
        assert_eq!(config.window_height, 900.0);
        assert!(config.remember_window_size);
    }
}
