// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar 2D math helpers: vectors, rotation frames, lines, and a
//! deterministic pseudo-random generator for scene construction.
//!
//! All operations round to `f32`.

use std::f32::consts::TAU;

mod line;
mod mat2;
mod prng;
mod vec2;

pub use line::Line;
pub use mat2::Mat2;
pub use prng::Prng;
pub use vec2::Vec2;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Returns `-1.0` for negative values and `1.0` otherwise (zero maps to `1.0`).
pub fn sign(value: f32) -> f32 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_treats_zero_as_positive() {
        assert_eq!(sign(0.0), 1.0);
        assert_eq!(sign(-0.5), -1.0);
        assert_eq!(sign(3.0), 1.0);
    }

    #[test]
    fn degree_conversions_round_trip_quarter_turn() {
        let r = deg_to_rad(90.0);
        assert!((r - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((rad_to_deg(r) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn clamp_limits_both_ends() {
        assert_eq!(clamp(5.0, -1.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, -1.0, 1.0), -1.0);
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
    }
}
