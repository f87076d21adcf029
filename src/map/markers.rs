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

//! Decorative incident markers scattered over the map placeholder.
//!
//! Markers are plain values with no identity or lifecycle; the preview set is
//! hard-coded and never changes. Placement is a [`Bias`] resolved against the
//! map area at paint time.

use bias_layout::Bias;
use egui::Color32;

use crate::theme;

/// Incident category, which fixes the disc styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Hazard,
    Resource,
    Conflict,
    Medical,
}

impl MarkerKind {
    /// Disc fill color.
    pub fn accent(self) -> Color32 {
        match self {
            Self::Hazard => theme::CALM_RED,
            Self::Resource => theme::CALM_BLUE,
            Self::Conflict => theme::CALM_ORANGE,
            Self::Medical => theme::CALM_YELLOW,
        }
    }

    /// Glyph drawn on the disc.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Hazard => "!",
            Self::Resource => "💧",
            Self::Conflict => "⚠",
            Self::Medical => "+",
        }
    }

    /// Disc diameter in pixels. Conflicts read larger on the map.
    pub fn disc_diameter(self) -> u32 {
        match self {
            Self::Conflict => 56,
            _ => 48,
        }
    }

    /// Chip text color: light accents stay readable only as ink.
    pub fn label_color(self) -> Color32 {
        match self {
            Self::Resource | Self::Medical => theme::INK_DARK,
            other => other.accent(),
        }
    }

    /// Glyph shown inside the label chip, if the chip carries one.
    pub fn chip_glyph(self) -> Option<&'static str> {
        match self {
            Self::Conflict => Some("🔄"),
            _ => None,
        }
    }

    /// Hazards offer an inline RESOLVE chip under the label.
    pub fn has_resolve_action(self) -> bool {
        matches!(self, Self::Hazard)
    }
}

/// One marker on the map: a kind, a label, and where to put it.
#[derive(Debug, Clone)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub label: &'static str,
    pub bias: Bias,
}

impl MapMarker {
    pub fn new(kind: MarkerKind, label: &'static str, bias: Bias) -> Self {
        Self { kind, label, bias }
    }
}

/// The fixed preview scatter. Biases are hand-placed to echo the mock.
pub fn demo_markers() -> Vec<MapMarker> {
    vec![
        MapMarker::new(MarkerKind::Hazard, "Fire Hazard", Bias::new(-0.24, -0.2)),
        MapMarker::new(MarkerKind::Resource, "Water", Bias::new(0.5, -0.6)),
        MapMarker::new(MarkerKind::Conflict, "Conflict", Bias::new(0.5, -0.3)),
        MapMarker::new(MarkerKind::Medical, "Med Assist", Bias::new(-0.5, 0.3)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scatter_shape() {
        let markers = demo_markers();
        assert_eq!(markers.len(), 4);

        // All biases stay inside the nominal range so every marker lands on
        // the visible map area.
        for marker in &markers {
            assert!(marker.bias.x.abs() <= 1.0);
            assert!(marker.bias.y.abs() <= 1.0);
        }
    }

    #[test]
    fn test_conflict_disc_is_larger() {
        assert_eq!(MarkerKind::Conflict.disc_diameter(), 56);
        assert_eq!(MarkerKind::Hazard.disc_diameter(), 48);
        assert_eq!(MarkerKind::Resource.disc_diameter(), 48);
        assert_eq!(MarkerKind::Medical.disc_diameter(), 48);
    }

    #[test]
    fn test_only_hazard_offers_resolve() {
        let markers = demo_markers();
        let resolvable: Vec<_> = markers
            .iter()
            .filter(|m| m.kind.has_resolve_action())
            .collect();
        assert_eq!(resolvable.len(), 1);
        assert_eq!(resolvable[0].label, "Fire Hazard");
    }

    #[test]
    fn test_light_accents_use_ink_labels() {
        assert_eq!(MarkerKind::Resource.label_color(), theme::INK_DARK);
        assert_eq!(MarkerKind::Medical.label_color(), theme::INK_DARK);
        assert_eq!(MarkerKind::Hazard.label_color(), theme::CALM_RED);
        assert_eq!(MarkerKind::Conflict.label_color(), theme::CALM_ORANGE);
    }

    #[test]
    fn test_only_conflict_chip_carries_glyph() {
        assert!(MarkerKind::Conflict.chip_glyph().is_some());
        assert!(MarkerKind::Hazard.chip_glyph().is_none());
        assert!(MarkerKind::Resource.chip_glyph().is_none());
        assert!(MarkerKind::Medical.chip_glyph().is_none());
    }
}
