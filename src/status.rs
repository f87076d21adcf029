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

//! Presentational mesh and sync status shown in the header.
//!
//! The preview has no transport, so the status is a fixed demo value built at
//! launch; the types exist so the header renders from data rather than from
//! scattered string literals.

use chrono::{DateTime, Duration, Utc};

/// Health of the mesh link, as the header badge reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshState {
    Active,
    Degraded,
    Offline,
}

impl MeshState {
    /// Header headline for this state.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "MESH ACTIVE",
            Self::Degraded => "MESH DEGRADED",
            Self::Offline => "MESH OFFLINE",
        }
    }

    /// Whether the green online dot is shown on the badge.
    pub fn is_online(self) -> bool {
        !matches!(self, Self::Offline)
    }

    fn connection_word(self) -> &'static str {
        match self {
            Self::Active => "Connected",
            Self::Degraded => "Limited",
            Self::Offline => "Offline",
        }
    }
}

/// Whether the local log has been reconciled with the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Synced,
    Pending,
}

impl SyncState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Synced => "SYNCED",
            Self::Pending => "PENDING",
        }
    }
}

/// Everything the top header displays.
#[derive(Debug, Clone)]
pub struct MeshStatus {
    pub state: MeshState,
    /// Free-form link descriptor, e.g. "Low Latency".
    pub link_quality: String,
    pub sync: SyncState,
    pub last_synced: DateTime<Utc>,
}

impl MeshStatus {
    /// The fixed status the preview launches with: healthy mesh, synced two
    /// minutes ago.
    pub fn demo() -> Self {
        Self {
            state: MeshState::Active,
            link_quality: "Low Latency".to_string(),
            sync: SyncState::Synced,
            last_synced: Utc::now() - Duration::minutes(2),
        }
    }

    /// Second header line, e.g. "Connected • Low Latency".
    pub fn connection_summary(&self) -> String {
        format!("{} • {}", self.state.connection_word(), self.link_quality)
    }

    /// Relative age of the last sync, e.g. "2m ago".
    pub fn sync_age_label(&self) -> String {
        format_relative_age((Utc::now() - self.last_synced).num_seconds())
    }
}

/// Format a past age in seconds as a compact relative label.
fn format_relative_age(seconds: i64) -> String {
    if seconds < 10 {
        // Covers clock skew producing slightly negative ages.
        "just now".to_string()
    } else if seconds < 60 {
        format!("{}s ago", seconds)
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_relative_age_brackets() {
        assert_eq!(format_relative_age(-5), "just now");
        assert_eq!(format_relative_age(0), "just now");
        assert_eq!(format_relative_age(45), "45s ago");
        assert_eq!(format_relative_age(120), "2m ago");
        assert_eq!(format_relative_age(3599), "59m ago");
        assert_eq!(format_relative_age(7200), "2h ago");
        assert_eq!(format_relative_age(90000), "1d ago");
    }

    #[test]
    fn test_demo_status_matches_screen() {
        let status = MeshStatus::demo();
        assert_eq!(status.state.label(), "MESH ACTIVE");
        assert_eq!(status.connection_summary(), "Connected • Low Latency");
        assert_eq!(status.sync.label(), "SYNCED");
        assert_eq!(status.sync_age_label(), "2m ago");
        assert!(status.state.is_online());
    }

    #[test]
    fn test_offline_state_has_no_badge() {
        assert!(!MeshState::Offline.is_online());
        assert_eq!(MeshState::Offline.connection_word(), "Offline");
    }
}
