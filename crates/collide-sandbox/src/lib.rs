// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Headless Collide sandbox: persistent configuration, demo scenes, scene
//! behaviors, and a fixed-step runner driving [`collide_physics::Sandbox`].

pub mod behaviors;
pub mod config;
pub mod runner;
pub mod scenes;

pub use behaviors::Behavior;
pub use config::{ConfigError, ConfigService, ConfigStore, FsConfigStore, SandboxConfig};
pub use runner::{run, RunSummary};
pub use scenes::{SceneKind, SceneParams};
