// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::math::{clamp, rad_to_deg, sign, EPSILON};

/// 2D vector used for positions, directions, and half-extents.
///
/// * Components are world-space units and may represent points or directions
///   depending on the calling context.
/// * Arithmetic uses `f32` without fused multiply-add so the scalar and the
///   4-lane kernels round identically.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Creates a vector with both components set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Z component of the 3D cross product of `self` and `other`.
    pub fn cross(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x().max(other.x()), self.y().max(other.y()))
    }

    /// Componentwise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.x().abs(), self.y().abs())
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    pub fn perp(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Reflects the vector about `normal` (expected unit length).
    ///
    /// `elasticity = 1.0` is a perfect mirror; `0.0` removes the normal
    /// component entirely.
    pub fn reflect(&self, normal: &Self, elasticity: f32) -> Self {
        let along = self.dot(normal);
        *self - normal.scale((1.0 + elasticity) * along)
    }

    /// Signed angle in degrees from `self` to `to`; positive is
    /// counter-clockwise.
    pub fn angle_to(&self, to: &Self) -> f32 {
        let cos_angle = clamp(self.normalize().dot(&to.normalize()), -1.0, 1.0);
        rad_to_deg(cos_angle.acos()) * sign(self.cross(to))
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_mirrors_normal_component() {
        let v = Vec2::new(1.0, -1.0);
        let r = v.reflect(&Vec2::UNIT_Y, 1.0);
        assert_eq!(r.to_array(), [1.0, 1.0]);
        let damped = v.reflect(&Vec2::UNIT_Y, 0.0);
        assert_eq!(damped.to_array(), [1.0, 0.0]);
    }

    #[test]
    fn angle_to_is_signed() {
        let a = Vec2::UNIT_X.angle_to(&Vec2::UNIT_Y);
        let b = Vec2::UNIT_Y.angle_to(&Vec2::UNIT_X);
        assert!((a - 90.0).abs() < 1e-3, "{a}");
        assert!((b + 90.0).abs() < 1e-3, "{b}");
    }

    #[test]
    fn degenerate_normalize_is_zero() {
        assert_eq!(Vec2::new(1e-9, 0.0).normalize(), Vec2::ZERO);
    }

    #[test]
    fn operators_are_componentwise() {
        let a = Vec2::new(1.5, -2.0);
        let b = Vec2::new(0.25, 4.0);
        assert_eq!((a + b).to_array(), [1.75, 2.0]);
        assert_eq!((a - b).to_array(), [1.25, -6.0]);
        assert_eq!(a * 2.0, a.scale(2.0));
        assert_eq!(-a, Vec2::new(-1.5, 2.0));
        assert_eq!(a.perp().dot(&a), 0.0);
    }
}
