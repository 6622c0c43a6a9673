// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use collide_geom::Transform;

/// Source of per-polygon world transforms, read once per step.
///
/// Index `i` must refer to the same polygon as local box `i` in the engine.
pub trait TransformProvider {
    /// Number of polygons currently placed.
    fn polygon_count(&self) -> usize;

    /// World transform of polygon `index`; `index < polygon_count()`.
    fn world_transform(&self, index: usize) -> Transform;
}

impl TransformProvider for [Transform] {
    fn polygon_count(&self) -> usize {
        self.len()
    }

    fn world_transform(&self, index: usize) -> Transform {
        self[index]
    }
}

impl TransformProvider for Vec<Transform> {
    fn polygon_count(&self) -> usize {
        self.len()
    }

    fn world_transform(&self, index: usize) -> Transform {
        self[index]
    }
}
