// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors emitted by the physics engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    /// The transform provider and the engine disagree on the polygon count.
    #[error("index mismatch: provider has {polygons} polygons, engine has {shapes} local boxes")]
    IndexMismatch {
        /// Count reported by the transform provider.
        polygons: usize,
        /// Count of local boxes registered with the engine.
        shapes: usize,
    },
    /// A shape index was out of range.
    #[error("unknown shape index: {0}")]
    UnknownShape(usize),
    /// A shape could not be registered.
    #[error("degenerate shape: {0}")]
    DegenerateShape(&'static str),
}
