// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used)]
//! Step driver and sandbox lockstep behavior.

use core::f32::consts::FRAC_PI_4;

use collide_geom::{Aabb, Mat2, Transform, Vec2};
use collide_physics::shapes::{self, RandomPolyParams};
use collide_physics::{
    BroadPhase, EngineConfig, PhysicsEngine, PhysicsError, PolygonPair, Sandbox, SatKernel,
};

fn placed(x: f32, y: f32, angle: f32) -> Transform {
    Transform::new(Vec2::new(x, y), Mat2::from_angle(angle))
}

fn engine_with_boxes(half: &[f32]) -> PhysicsEngine {
    let mut engine = PhysicsEngine::default();
    for &h in half {
        engine
            .add_local_aabb(Aabb::from_center_half_extents(Vec2::ZERO, h, h))
            .unwrap();
    }
    engine
}

fn collided_pairs(engine: &PhysicsEngine) -> Vec<PolygonPair> {
    let mut out = Vec::new();
    engine.for_each_collision(|c| out.push(c.pair()));
    out
}

#[test]
fn zero_polygons_step_cleanly() {
    let mut engine = PhysicsEngine::default();
    engine.step(&Vec::<Transform>::new(), 1.0 / 60.0).unwrap();
    assert!(engine.collisions().is_empty());
    assert!(engine.candidates().is_empty());
    assert!(engine.bvh().is_empty());
}

#[test]
fn scenario_pairs_through_the_engine() {
    let mut engine = engine_with_boxes(&[0.5, 0.5]);

    engine.step(&vec![placed(0.0, 0.0, 0.0), placed(0.5, 0.0, 0.0)], 0.1).unwrap();
    assert_eq!(collided_pairs(&engine), vec![PolygonPair { a: 0, b: 1 }]);
    assert_eq!(engine.collisions()[0].contact, None);

    engine.step(&vec![placed(0.0, 0.0, 0.0), placed(3.0, 0.0, 0.0)], 0.1).unwrap();
    assert!(engine.collisions().is_empty());
    assert!(engine.candidates().is_empty());
}

#[test]
fn world_boxes_overlap_but_oriented_boxes_do_not() {
    let mut engine = engine_with_boxes(&[1.0, 0.5]);
    engine
        .step(&vec![placed(0.0, 0.0, FRAC_PI_4), placed(1.3, 1.3, 0.0)], 0.1)
        .unwrap();
    assert_eq!(engine.candidates(), &[PolygonPair { a: 0, b: 1 }]);
    assert!(engine.collisions().is_empty());
}

#[test]
fn inactive_engine_keeps_last_results() {
    let mut engine = engine_with_boxes(&[0.5, 0.5]);
    let touching = vec![placed(0.0, 0.0, 0.0), placed(0.5, 0.0, 0.0)];
    engine.step(&touching, 0.1).unwrap();
    assert_eq!(engine.collisions().len(), 1);

    engine.activate(false);
    assert!(!engine.is_active());
    // Mismatched input is not even looked at while inactive.
    engine.step(&Vec::<Transform>::new(), 0.1).unwrap();
    assert_eq!(engine.collisions().len(), 1);
}

#[test]
fn count_mismatch_is_reported_and_clears_results() {
    let mut engine = engine_with_boxes(&[0.5, 0.5]);
    engine
        .step(&vec![placed(0.0, 0.0, 0.0), placed(0.5, 0.0, 0.0)], 0.1)
        .unwrap();
    let err = engine.step(&vec![placed(0.0, 0.0, 0.0)], 0.1).unwrap_err();
    assert_eq!(err, PhysicsError::IndexMismatch { polygons: 1, shapes: 2 });
    assert!(engine.collisions().is_empty());
    assert!(engine.candidates().is_empty());
}

#[test]
fn removal_drops_per_frame_state_for_the_old_indices() {
    let mut engine = engine_with_boxes(&[0.5, 0.5, 0.5]);
    engine
        .step(
            &vec![placed(0.0, 0.0, 0.0), placed(0.5, 0.0, 0.0), placed(1.0, 0.0, 0.0)],
            0.1,
        )
        .unwrap();
    assert_eq!(engine.world_aabbs().len(), 3);
    assert!(engine.world_aabb(2).is_some());

    engine.remove_shape(0).unwrap();
    assert_eq!(engine.shape_count(), 2);
    assert!(engine.world_aabbs().is_empty());
    assert_eq!(engine.world_aabb(2), None);
    assert!(engine.bvh().leaf_indices().is_empty());
    assert!(engine.collisions().is_empty());
    assert!(engine.candidates().is_empty());
    assert_eq!(engine.stats().polygons, 0);

    // The next step rebuilds over the shrunk index range.
    engine.step(&vec![placed(0.0, 0.0, 0.0), placed(0.5, 0.0, 0.0)], 0.1).unwrap();
    assert_eq!(engine.world_aabbs().len(), engine.shape_count());
    let mut leaves = engine.bvh().leaf_indices();
    leaves.sort_unstable();
    assert_eq!(leaves, vec![0, 1]);
    assert_eq!(collided_pairs(&engine), vec![PolygonPair { a: 0, b: 1 }]);
}

#[test]
fn degenerate_shapes_are_rejected() {
    let mut engine = PhysicsEngine::default();
    assert_eq!(
        engine.add_shape(&[Vec2::ZERO, Vec2::UNIT_X]),
        Err(PhysicsError::DegenerateShape("fewer than three points"))
    );
    assert!(engine
        .add_shape(&[Vec2::ZERO, Vec2::UNIT_X, Vec2::new(0.0, f32::INFINITY)])
        .is_err());
    assert_eq!(engine.shape_count(), 0);
    assert_eq!(engine.add_shape(&[Vec2::ZERO, Vec2::UNIT_X, Vec2::UNIT_Y]), Ok(0));
}

#[test]
fn strategies_and_kernels_agree_on_a_random_scene() {
    let params = RandomPolyParams {
        min_bounds: Vec2::splat(-15.0),
        max_bounds: Vec2::splat(15.0),
        radius: (0.5, 2.5),
        ..RandomPolyParams::default()
    };
    let mut rng = collide_geom::Prng::from_seed(0x5eed);
    let polygons: Vec<_> = (0..120)
        .map(|_| shapes::random(&mut rng, &params).unwrap())
        .collect();

    let mut results = Vec::new();
    for broad_phase in [BroadPhase::BruteForce, BroadPhase::Tree] {
        for sat_kernel in [SatKernel::Scalar, SatKernel::Wide] {
            let mut sandbox = Sandbox::new(EngineConfig {
                broad_phase,
                sat_kernel,
                start_active: true,
            });
            for p in &polygons {
                sandbox.add(p.clone()).unwrap();
            }
            sandbox.step(0.016).unwrap();
            let mut pairs = collided_pairs(sandbox.engine());
            pairs.sort_unstable();
            results.push(pairs);
        }
    }
    assert!(!results[0].is_empty(), "scene should contain collisions");
    for r in &results[1..] {
        assert_eq!(r, &results[0]);
    }
}

#[test]
fn sandbox_remove_keeps_indices_in_lockstep() {
    let mut sandbox = Sandbox::default();
    for (i, size) in [1.0, 2.0, 3.0, 4.0].into_iter().enumerate() {
        let mut sq = shapes::square(size).unwrap();
        sq.position = Vec2::new(i as f32 * 10.0, 0.0);
        sandbox.add(sq).unwrap();
    }

    let removed = sandbox.remove(1).unwrap();
    assert!((removed.area() - 4.0).abs() < 1e-5);
    assert_eq!(sandbox.world().len(), 3);
    assert_eq!(sandbox.engine().shape_count(), 3);

    // The 4x4 square moved into slot 1, in both halves.
    let moved = sandbox.world().get(1).unwrap();
    assert!((moved.area() - 16.0).abs() < 1e-5);
    assert_eq!(sandbox.engine().local_aabb(1), Some(moved.local_aabb()));

    assert_eq!(sandbox.remove(3).unwrap_err(), PhysicsError::UnknownShape(3));
    sandbox.step(0.016).unwrap();
    assert_eq!(sandbox.engine().world_aabbs().len(), 3);
}

#[test]
fn sandbox_clear_resets_everything() {
    let mut sandbox = Sandbox::default();
    sandbox.add(shapes::triangle(1.0, 1.0).unwrap()).unwrap();
    sandbox.engine_mut().activate(false);
    sandbox.clear();
    assert!(sandbox.world().is_empty());
    assert!(sandbox.engine().is_active());
    sandbox.step(0.016).unwrap();
}
