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

//! Phase curve for the user-location ping.
//!
//! The ping is a sawtooth: over each two-second cycle the halo scales from
//! 1.0x to 1.5x while fading from half opacity to fully transparent, then
//! snaps back and repeats. The curve is linear in both channels; there is no
//! easing and no blending across the restart.

/// Length of one ping cycle in seconds.
pub const PERIOD_SECONDS: f64 = 2.0;

/// Snapshot of the ping animation at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulsePhase {
    /// Halo scale factor, in `[1.0, 1.5)`.
    pub scale: f32,
    /// Halo opacity, in `(0.0, 0.5]`.
    pub alpha: f32,
}

impl PulsePhase {
    /// Samples the curve at `time` seconds. Any finite time works; the curve
    /// wraps modulo the period.
    pub fn at(time: f64) -> Self {
        let t = (time.rem_euclid(PERIOD_SECONDS) / PERIOD_SECONDS) as f32;
        Self {
            scale: 1.0 + 0.5 * t,
            alpha: 0.5 * (1.0 - t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_start() {
        let phase = PulsePhase::at(0.0);
        assert_eq!(phase.scale, 1.0);
        assert_eq!(phase.alpha, 0.5);
    }

    #[test]
    fn test_cycle_midpoint() {
        let phase = PulsePhase::at(1.0);
        assert!((phase.scale - 1.25).abs() < 1e-6);
        assert!((phase.alpha - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_cycle_end_approaches_limits() {
        let phase = PulsePhase::at(1.999);
        assert!(phase.scale < 1.5);
        assert!(phase.scale > 1.49);
        assert!(phase.alpha > 0.0);
        assert!(phase.alpha < 0.001);
    }

    #[test]
    fn test_restart_snaps_back() {
        assert_eq!(PulsePhase::at(PERIOD_SECONDS), PulsePhase::at(0.0));
        assert_eq!(PulsePhase::at(7.25), PulsePhase::at(1.25));
    }

    #[test]
    fn test_bounds_hold_across_a_cycle() {
        for i in 0..200 {
            let phase = PulsePhase::at(f64::from(i) * 0.01);
            assert!(phase.scale >= 1.0 && phase.scale < 1.5);
            assert!(phase.alpha > 0.0 && phase.alpha <= 0.5);
        }
    }
}
