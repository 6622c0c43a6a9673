// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::Mul;

use crate::math::Vec2;

/// Column-major 2×2 matrix, used as an orthonormal rotation frame.
///
/// - Column `x_axis` is the image of `+X`, column `y_axis` the image of `+Y`.
/// - For a rotation by `θ`: `x_axis = (cos θ, sin θ)`, `y_axis = (−sin θ, cos θ)`.
/// - Angles are radians, counter-clockwise positive.
///
/// # Examples
/// ```
/// use core::f32::consts::FRAC_PI_2;
/// use collide_geom::math::{Mat2, Vec2};
/// let r = Mat2::from_angle(FRAC_PI_2);
/// let v = r.transform(Vec2::UNIT_X);
/// assert!((v.y() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat2 {
    x_axis: Vec2,
    y_axis: Vec2,
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat2 {
    /// The identity frame.
    pub const IDENTITY: Self = Self::from_cols(Vec2::UNIT_X, Vec2::UNIT_Y);

    /// Builds a matrix from its two columns.
    pub const fn from_cols(x_axis: Vec2, y_axis: Vec2) -> Self {
        Self { x_axis, y_axis }
    }

    /// Rotation by `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(Vec2::new(c, s), Vec2::new(-s, c))
    }

    /// First column (local `+X` expressed in the parent frame).
    pub const fn x_axis(&self) -> Vec2 {
        self.x_axis
    }

    /// Second column (local `+Y` expressed in the parent frame).
    pub const fn y_axis(&self) -> Vec2 {
        self.y_axis
    }

    /// Rotation angle in radians in `(-π, π]`, read from the first column.
    pub fn angle(&self) -> f32 {
        self.x_axis.y().atan2(self.x_axis.x())
    }

    /// Transposed matrix; the inverse for an orthonormal frame.
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec2::new(self.x_axis.x(), self.y_axis.x()),
            Vec2::new(self.x_axis.y(), self.y_axis.y()),
        )
    }

    /// Applies the matrix to a vector.
    pub fn transform(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.x_axis.x() * v.x() + self.y_axis.x() * v.y(),
            self.x_axis.y() * v.x() + self.y_axis.y() * v.y(),
        )
    }

    /// Multiplies two matrices (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_cols(self.transform(rhs.x_axis), self.transform(rhs.y_axis))
    }

    /// Post-multiplies the frame by a rotation of `angle` radians.
    pub fn rotate(&mut self, angle: f32) {
        *self = self.multiply(&Self::from_angle(angle));
    }
}

impl Mul for Mat2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform(rhs)
    }
}
