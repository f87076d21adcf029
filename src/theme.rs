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

//! Screen palette for the map preview.
//!
//! The calm beige/ink scheme comes from the Pigeon app's design system; the
//! same constants serve the header, map overlays, and navigation bar.

use egui::Color32;

/// App background behind all panels.
pub const BEIGE_BG: Color32 = Color32::from_rgb(240, 237, 230);

/// Raised surface color (header, nav bar, glass fills).
pub const BEIGE_SURFACE: Color32 = Color32::from_rgb(253, 251, 247);

/// Hairline border tone for beige surfaces.
pub const BEIGE_BORDER: Color32 = Color32::from_rgb(229, 224, 214);

/// Primary text.
pub const INK_DARK: Color32 = Color32::from_rgb(44, 51, 58);

/// Secondary/muted text.
pub const INK_MUTED: Color32 = Color32::from_rgb(100, 116, 139);

/// Mesh/location accent.
pub const CALM_BLUE: Color32 = Color32::from_rgb(91, 139, 223);

/// Hazard/report accent.
pub const CALM_RED: Color32 = Color32::from_rgb(214, 93, 93);

/// Assistance accent.
pub const CALM_YELLOW: Color32 = Color32::from_rgb(217, 165, 54);

/// Conflict accent.
pub const CALM_ORANGE: Color32 = Color32::from_rgb(217, 119, 6);

/// Fill of the map placeholder area (stands in for real tiles).
pub const MAP_SURFACE: Color32 = Color32::from_rgb(232, 228, 218);

/// Online indicator green (header badge, sync badge).
pub const ONLINE_GREEN: Color32 = Color32::from_rgb(34, 197, 94);

/// A color at the given opacity, `alpha` in `0.0..=1.0`.
pub fn translucent(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (alpha.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translucent_half_alpha() {
        assert_eq!(
            translucent(CALM_BLUE, 0.5),
            Color32::from_rgba_unmultiplied(91, 139, 223, 127)
        );
    }

    #[test]
    fn test_translucent_clamps_out_of_range_alpha() {
        // 2.0 clamps to fully opaque, negative clamps to fully transparent.
        assert_eq!(translucent(INK_DARK, 2.0), INK_DARK);
        assert_eq!(translucent(INK_DARK, -1.0).a(), 0);
    }
}
