// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::broad::BroadPhase;
use crate::narrow::SatKernel;

/// Construction-time engine settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Candidate pair strategy.
    pub broad_phase: BroadPhase,
    /// Narrow-phase kernel.
    pub sat_kernel: SatKernel,
    /// Whether `step` runs before the first `activate` call.
    pub start_active: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            broad_phase: BroadPhase::default(),
            sat_kernel: SatKernel::default(),
            start_active: true,
        }
    }
}
