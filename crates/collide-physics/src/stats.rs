// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::time::Duration;

/// Timings and counts from the most recent active step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepStats {
    /// Time step passed by the caller.
    pub dt: f32,
    /// Polygons processed.
    pub polygons: usize,
    /// Candidate pairs from the broad phase.
    pub candidates: usize,
    /// Pairs confirmed by the narrow phase.
    pub collisions: usize,
    /// 4-ary tree depth after the rebuild.
    pub tree_depth: usize,
    /// World boxes plus tree build.
    pub rebuild: Duration,
    /// Candidate pair collection.
    pub broad_phase: Duration,
    /// Exact overlap tests.
    pub narrow_phase: Duration,
}

impl StepStats {
    /// Sum of the phase durations.
    pub fn total(&self) -> Duration {
        self.rebuild + self.broad_phase + self.narrow_phase
    }
}
