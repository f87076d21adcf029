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

//! Bias-based alignment of fixed-size elements inside a pixel container.
//!
//! A [`Bias`] is a pair of normalized scalars, each nominally in `[-1, 1]`,
//! describing how far an element should be displaced from the center of its
//! container toward one edge: `-1` is flush to the start edge, `0` is
//! centered, `+1` is displaced by the full centering distance toward the end
//! edge. [`Bias::align`] converts a bias into the top-left pixel [`Offset`]
//! at which to draw a child of a given [`Size`] inside a container.
//!
//! The mapping is a plain affine function of the bias and is total: biases
//! outside `[-1, 1]` extrapolate linearly (the offset may be negative or
//! beyond the container), oversized children produce negative centering
//! distances, and no input is ever rejected.
//!
//! # Quick start
//!
//! ```
//! use bias_layout::{Bias, Size};
//!
//! let container = Size::new(300, 300);
//! let marker = Size::new(50, 50);
//!
//! // Centered.
//! let offset = Bias::CENTER.align(marker, container);
//! assert_eq!((offset.x, offset.y), (125, 125));
//!
//! // Flush to the left edge, vertically centered.
//! let offset = Bias::new(-1.0, 0.0).align(marker, container);
//! assert_eq!((offset.x, offset.y), (0, 125));
//!
//! // Halfway toward the right edge, halfway toward the top.
//! let offset = Bias::new(0.5, -0.5).align(marker, container);
//! assert_eq!((offset.x, offset.y), (187, 62));
//! ```

/// Pixel dimensions of a container or child element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A square of the given side length.
    #[must_use]
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Top-left pixel coordinate of a child element, measured from the
/// container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Normalized alignment bias.
///
/// Each axis is conventionally in `[-1, 1]`: `-1` is flush to the start edge
/// (left/top), `0` is centered, `+1` is displaced toward the end edge
/// (right/bottom) by the full centering distance. Values are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bias {
    pub x: f32,
    pub y: f32,
}

impl Bias {
    /// Exact centering on both axes.
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };
    /// Flush to the top-left corner.
    pub const TOP_LEFT: Self = Self { x: -1.0, y: -1.0 };
    /// Flush toward the top-right corner.
    pub const TOP_RIGHT: Self = Self { x: 1.0, y: -1.0 };
    /// Flush toward the bottom-left corner.
    pub const BOTTOM_LEFT: Self = Self { x: -1.0, y: 1.0 };
    /// Flush toward the bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self { x: 1.0, y: 1.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Compute the top-left offset that places `child` inside `container`
    /// displaced from center according to this bias.
    ///
    /// Per axis, with `center = (container - child) / 2` in `f32`, the
    /// result is `center + center * bias`, truncated toward zero. A bias of
    /// `0` therefore matches integer-division centering exactly (including
    /// for children larger than the container, where `center` is negative),
    /// `-1` lands on offset `0`, and `+1` lands on `2 * center`. No
    /// clamping, no validation, no failure path: every finite bias and
    /// every pair of sizes maps to a defined offset.
    #[must_use]
    pub fn align(self, child: Size, container: Size) -> Offset {
        let center_x = (container.width as f32 - child.width as f32) / 2.0;
        let center_y = (container.height as f32 - child.height as f32) / 2.0;

        Offset {
            x: (center_x + center_x * self.x) as i32,
            y: (center_y + center_y * self.y) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_center_bias_centers_exactly() {
        let offset = Bias::CENTER.align(Size::square(50), Size::square(300));
        assert_eq!(offset, Offset::new(125, 125));

        // Odd remainders truncate like integer division.
        let offset = Bias::CENTER.align(Size::new(50, 51), Size::new(301, 201));
        assert_eq!(offset, Offset::new((301 - 50) / 2, (201 - 51) / 2));
    }

    #[test]
    fn test_center_bias_with_oversized_child() {
        // (100 - 121) / 2 truncates toward zero on both paths.
        let offset = Bias::CENTER.align(Size::square(121), Size::square(100));
        assert_eq!(offset, Offset::new(-10, -10));
    }

    #[test]
    fn test_flush_to_near_edge() {
        let offset = Bias::new(-1.0, 0.0).align(Size::square(50), Size::square(300));
        assert_eq!(offset, Offset::new(0, 125));

        let offset = Bias::TOP_LEFT.align(Size::square(50), Size::square(300));
        assert_eq!(offset, Offset::new(0, 0));
    }

    #[test]
    fn test_full_positive_bias_lands_on_twice_center() {
        let offset = Bias::BOTTOM_RIGHT.align(Size::square(50), Size::square(300));
        assert_eq!(offset, Offset::new(250, 250));
    }

    #[test]
    fn test_half_bias_truncates() {
        let offset = Bias::new(0.5, -0.5).align(Size::square(50), Size::square(300));
        assert_eq!(offset, Offset::new(187, 62));
    }

    #[test]
    fn test_doubling_bias_doubles_displacement() {
        let container = Size::square(300);
        let child = Size::square(50);

        let near = Bias::new(0.2, 0.2).align(child, container);
        let far = Bias::new(0.4, 0.4).align(child, container);

        // Displacement from the center point (125, 125) doubles with the bias.
        assert_eq!(near, Offset::new(150, 150));
        assert_eq!(far, Offset::new(175, 175));
        assert_eq!(far.x - 125, 2 * (near.x - 125));
    }

    #[test]
    fn test_out_of_range_bias_extrapolates() {
        let container = Size::square(300);
        let child = Size::square(50);

        let offset = Bias::new(-3.0, 2.0).align(child, container);
        assert_eq!(offset, Offset::new(-250, 375));
    }

    #[test]
    fn test_child_filling_container_pins_to_origin() {
        // Center distance is zero, so every bias maps to (0, 0).
        for bias in [Bias::CENTER, Bias::TOP_LEFT, Bias::new(7.5, -42.0)] {
            let offset = bias.align(Size::square(300), Size::square(300));
            assert_eq!(offset, Offset::new(0, 0));
        }
    }

    #[test]
    fn test_degenerate_container() {
        let offset = Bias::CENTER.align(Size::square(50), Size::new(0, 0));
        assert_eq!(offset, Offset::new(-25, -25));
    }

    proptest! {
        #[test]
        fn prop_opposite_biases_sum_to_twice_center(
            container in 1u32..4096,
            child in 0u32..4096,
            bx in -1.0f32..=1.0,
            by in -1.0f32..=1.0,
        ) {
            prop_assume!(child <= container);

            let c = Size::square(container);
            let s = Size::square(child);
            let a = Bias::new(bx, by).align(s, c);
            let b = Bias::new(-bx, -by).align(s, c);

            let span = i64::from(container - child);
            prop_assert!((span - i64::from(a.x) - i64::from(b.x)).abs() <= 1);
            prop_assert!((span - i64::from(a.y) - i64::from(b.y)).abs() <= 1);
        }

        #[test]
        fn prop_in_range_bias_stays_within_centering_span(
            container in 0u32..4096,
            child in 0u32..4096,
            bx in -1.0f32..=1.0,
            by in -1.0f32..=1.0,
        ) {
            prop_assume!(child <= container);

            let offset = Bias::new(bx, by).align(Size::square(child), Size::square(container));
            let span = (container - child) as i32;

            prop_assert!(offset.x >= 0 && offset.x <= span);
            prop_assert!(offset.y >= 0 && offset.y <= span);
        }

        #[test]
        fn prop_align_is_total_over_finite_inputs(
            cw in any::<u32>(),
            ch in any::<u32>(),
            w in any::<u32>(),
            h in any::<u32>(),
            bx in proptest::num::f32::NORMAL | proptest::num::f32::ZERO | proptest::num::f32::SUBNORMAL,
            by in proptest::num::f32::NORMAL | proptest::num::f32::ZERO | proptest::num::f32::SUBNORMAL,
        ) {
            // Must return a defined pair for every finite bias, however
            // extreme; the cast saturates rather than panicking.
            let _ = Bias::new(bx, by).align(Size::new(w, h), Size::new(cw, ch));
        }
    }
}
