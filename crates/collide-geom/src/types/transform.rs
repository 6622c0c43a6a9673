// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Mat2, Vec2};

/// Rigid 2D transform used for shape placement and the broad phase.
///
/// Conventions:
/// - `position` in world units.
/// - `rotation` is an orthonormal frame; local points map to
///   `position + rotation * p`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Transform {
    position: Vec2,
    rotation: Mat2,
}

impl Transform {
    /// Identity transform (no translation, no rotation).
    pub const IDENTITY: Self = Self::new(Vec2::ZERO, Mat2::IDENTITY);

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(position: Vec2, rotation: Mat2) -> Self {
        Self { position, rotation }
    }

    /// Translation component.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation component.
    #[must_use]
    pub const fn rotation(&self) -> Mat2 {
        self.rotation
    }

    /// Maps a local point into the parent frame.
    #[must_use]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.position + self.rotation.transform(p)
    }

    /// Maps a parent-frame point back into local space.
    #[must_use]
    pub fn inverse_transform_point(&self, p: Vec2) -> Vec2 {
        self.rotation.transpose().transform(p - self.position)
    }
}
