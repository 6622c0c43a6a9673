// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-step frame loop.

use std::time::Duration;

use collide_physics::{PhysicsError, Sandbox};
use serde::Serialize;
use tracing::{debug, info, instrument, trace};

use crate::behaviors::Behavior;

/// Frames between periodic progress logs.
const PROGRESS_INTERVAL: u64 = 60;

/// Totals over one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    /// Frames simulated.
    pub frames: u64,
    /// Frames in which the engine ran.
    pub active_frames: u64,
    /// Polygons at the end of the run.
    pub polygons: usize,
    /// Broad-phase candidates summed over active frames.
    pub total_candidates: u64,
    /// Collisions summed over active frames.
    pub total_collisions: u64,
    /// Largest collision count in a single frame.
    pub peak_collisions: usize,
    /// Behavior responses (see [`Behavior::events`]).
    pub behavior_events: u64,
    /// Engine time summed over active frames.
    #[serde(serialize_with = "as_micros")]
    pub engine_time: Duration,
}

fn as_micros<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(d.as_micros())
}

impl RunSummary {
    /// Mean collisions per active frame.
    pub fn mean_collisions(&self) -> f64 {
        if self.active_frames == 0 {
            return 0.0;
        }
        self.total_collisions as f64 / self.active_frames as f64
    }
}

/// Steps the engine and then the behavior, `frames` times with a fixed `dt`.
///
/// # Errors
/// Stops at the first [`PhysicsError`] from the engine.
#[instrument(level = "info", skip(sandbox, behavior))]
pub fn run(
    sandbox: &mut Sandbox,
    behavior: &mut Behavior,
    frames: u64,
    dt: f32,
) -> Result<RunSummary, PhysicsError> {
    let mut summary = RunSummary::default();
    for frame in 0..frames {
        let active = sandbox.engine().is_active();
        sandbox.step(dt)?;
        if active {
            let stats = sandbox.engine().stats();
            summary.active_frames += 1;
            summary.total_candidates += stats.candidates as u64;
            summary.total_collisions += stats.collisions as u64;
            summary.peak_collisions = summary.peak_collisions.max(stats.collisions);
            summary.engine_time += stats.total();
            trace!(frame, collisions = stats.collisions, "frame stepped");
        }
        behavior.update(sandbox, dt);
        summary.frames += 1;

        if (frame + 1) % PROGRESS_INTERVAL == 0 {
            debug!(
                frame = frame + 1,
                collisions = sandbox.engine().collisions().len(),
                events = behavior.events(),
                "progress"
            );
        }
    }
    summary.polygons = sandbox.world().len();
    summary.behavior_events = behavior.events();
    info!(
        frames = summary.frames,
        active_frames = summary.active_frames,
        peak_collisions = summary.peak_collisions,
        mean_collisions = summary.mean_collisions(),
        engine_us = summary.engine_time.as_micros(),
        "run complete"
    );
    Ok(summary)
}
