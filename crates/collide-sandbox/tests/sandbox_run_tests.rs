// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used)]
//! Scene runs and config persistence through the filesystem store.

use collide_physics::{BroadPhase, EngineConfig, Sandbox};
use collide_sandbox::config::SANDBOX_CONFIG_KEY;
use collide_sandbox::{
    run, scenes, ConfigService, FsConfigStore, SandboxConfig, SceneKind, SceneParams,
};

fn run_scene(cfg: &SandboxConfig) -> collide_sandbox::RunSummary {
    let mut sandbox = Sandbox::new(cfg.engine);
    let mut behavior = scenes::build(cfg.scene, &SceneParams::from(cfg), &mut sandbox).unwrap();
    run(&mut sandbox, &mut behavior, cfg.frames, cfg.dt).unwrap()
}

#[test]
fn bouncing_scene_runs_and_collides() {
    let cfg = SandboxConfig {
        frames: 30,
        polygons: 150,
        ..SandboxConfig::default()
    };
    let summary = run_scene(&cfg);
    assert_eq!(summary.frames, 30);
    assert_eq!(summary.active_frames, 30);
    assert_eq!(summary.polygons, 154);
    assert!(summary.total_collisions > 0);
    assert!(summary.total_candidates >= summary.total_collisions);
}

#[test]
fn broad_phase_choice_does_not_change_the_run() {
    let tree = SandboxConfig {
        frames: 20,
        polygons: 80,
        ..SandboxConfig::default()
    };
    let mut brute = tree.clone();
    brute.engine.broad_phase = BroadPhase::BruteForce;

    let a = run_scene(&tree);
    let b = run_scene(&brute);
    assert_eq!(a.total_collisions, b.total_collisions);
    assert_eq!(a.behavior_events, b.behavior_events);
    assert!(b.total_candidates > a.total_candidates);
}

#[test]
fn spheres_scene_runs_without_the_engine() {
    let cfg = SandboxConfig {
        scene: SceneKind::Spheres,
        frames: 120,
        ..SandboxConfig::default()
    };
    let summary = run_scene(&cfg);
    assert_eq!(summary.active_frames, 0);
    assert_eq!(summary.total_collisions, 0);
    assert_eq!(summary.polygons, 33);
}

#[test]
fn debug_scene_inspects_every_frame() {
    let cfg = SandboxConfig {
        scene: SceneKind::DebugCollisions,
        frames: 10,
        ..SandboxConfig::default()
    };
    let summary = run_scene(&cfg);
    // The inspector disables the engine after the first frame.
    assert_eq!(summary.active_frames, 1);
    assert_eq!(summary.behavior_events, 10);
}

#[test]
fn config_round_trips_through_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::in_dir(dir.path().join("nested")).unwrap();
    let service = ConfigService::new(store);
    assert!(service.load::<SandboxConfig>(SANDBOX_CONFIG_KEY).unwrap().is_none());

    let cfg = SandboxConfig {
        scene: SceneKind::DebugCollisions,
        engine: EngineConfig {
            broad_phase: BroadPhase::BruteForce,
            ..EngineConfig::default()
        },
        frames: 42,
        ..SandboxConfig::default()
    };
    service.save(SANDBOX_CONFIG_KEY, &cfg).unwrap();

    let loaded: SandboxConfig = service.load(SANDBOX_CONFIG_KEY).unwrap().unwrap();
    assert_eq!(loaded, cfg);
    assert!(service.into_inner().base().join("sandbox.json").exists());
}
