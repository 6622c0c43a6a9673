// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Headless demo scenes.

use clap::ValueEnum;
use collide_geom::{Prng, Vec2};
use collide_physics::shapes::{self, RandomPolyParams};
use collide_physics::{PhysicsError, Sandbox};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::behaviors::{
    Behavior, PairInspector, PolygonBounce, SphereSimulation, Walls, CHAIN_LINK, SPHERE_RADIUS,
};
use crate::config::SandboxConfig;

/// Available scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Random polygons bouncing inside a border frame.
    #[default]
    Bouncing,
    /// Circle grid and hanging chain under gravity.
    Spheres,
    /// Two overlapping rectangles inspected every frame.
    DebugCollisions,
}

/// Inputs shared by every scene builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    /// Layout seed.
    pub seed: u64,
    /// Polygon count for [`SceneKind::Bouncing`].
    pub polygons: usize,
    /// World width.
    pub width: f32,
    /// World height.
    pub height: f32,
    /// Thickness of the border rectangles.
    pub border: f32,
}

impl From<&SandboxConfig> for SceneParams {
    fn from(cfg: &SandboxConfig) -> Self {
        Self {
            seed: cfg.seed,
            polygons: cfg.polygons,
            width: cfg.world_width(),
            height: cfg.world_height,
            border: 1.0,
        }
    }
}

/// Clears `sandbox`, populates it for `kind`, and returns the behavior that
/// drives it.
///
/// # Errors
/// Propagates shape registration failures.
pub fn build(
    kind: SceneKind,
    params: &SceneParams,
    sandbox: &mut Sandbox,
) -> Result<Behavior, PhysicsError> {
    sandbox.clear();
    let behavior = match kind {
        SceneKind::Bouncing => bouncing(params, sandbox)?,
        SceneKind::Spheres => spheres(params, sandbox)?,
        SceneKind::DebugCollisions => debug_collisions(params, sandbox)?,
    };
    info!(?kind, polygons = sandbox.world().len(), "scene built");
    Ok(behavior)
}

/// Four static rectangles lining the world edges. Returns how many were added.
fn add_borders(params: &SceneParams, sandbox: &mut Sandbox) -> Result<usize, PhysicsError> {
    let (hw, hh, t) = (params.width * 0.5, params.height * 0.5, params.border);
    let frame = [
        (params.width, t, Vec2::new(0.0, -hh + 0.5 * t)),
        (params.width, t, Vec2::new(0.0, hh - 0.5 * t)),
        (t, params.height, Vec2::new(-hw + 0.5 * t, 0.0)),
        (t, params.height, Vec2::new(hw - 0.5 * t, 0.0)),
    ];
    for (w, h, position) in frame {
        let mut rect = shapes::rectangle(w, h)?;
        rect.position = position;
        rect.density = 0.0;
        sandbox.add(rect)?;
    }
    Ok(frame.len())
}

fn bouncing(params: &SceneParams, sandbox: &mut Sandbox) -> Result<Behavior, PhysicsError> {
    let borders = add_borders(params, sandbox)?;
    let max_radius = 1.0;
    let min_bounds = Vec2::new(
        -params.width * 0.5 + max_radius * 3.0,
        -params.height * 0.5 + max_radius * 3.0,
    );
    let poly_params = RandomPolyParams {
        min_bounds,
        max_bounds: -min_bounds,
        radius: (1.0, max_radius),
        points: (3, 8),
        speed: (1.0, 3.0),
    };
    let mut rng = Prng::from_seed(params.seed);
    for _ in 0..params.polygons {
        let mut poly = shapes::random(&mut rng, &poly_params)?;
        poly.density = 0.0;
        sandbox.add(poly)?;
    }
    Ok(Behavior::Bounce(PolygonBounce::new(
        Walls::new(params.width, params.height),
        borders,
    )))
}

fn spheres(params: &SceneParams, sandbox: &mut Sandbox) -> Result<Behavior, PhysicsError> {
    let mut rng = Prng::from_seed(params.seed);
    let add_circle = |sandbox: &mut Sandbox, position: Vec2| -> Result<usize, PhysicsError> {
        let mut circle = shapes::regular(SPHERE_RADIUS, 50)?;
        circle.density = 0.0;
        circle.position = position;
        sandbox.add(circle)
    };

    let mut circles = Vec::new();
    for col in 0..5 {
        for row in 0..5 {
            let x = -12.0 + 5.0 * col as f32 + rng.range_f32(-0.1, 0.1);
            let y = -22.0 + 10.0 * row as f32 + rng.range_f32(-0.1, 0.1);
            let index = add_circle(sandbox, Vec2::new(x, y))?;
            if let Some(c) = sandbox.world_mut().get_mut(index) {
                c.velocity = Vec2::new(50.0, 0.0);
            }
            circles.push(index);
        }
    }

    let anchor = Vec2::new(20.0, 20.0);
    let mut chain = Vec::new();
    for link in 0..8 {
        let index = add_circle(sandbox, anchor + Vec2::new(0.0, -CHAIN_LINK * link as f32))?;
        chain.push(index);
        circles.push(index);
    }

    sandbox.engine_mut().activate(false);
    Ok(Behavior::Spheres(SphereSimulation::new(
        Walls::new(params.width, params.height),
        circles,
        chain,
        anchor,
    )))
}

fn debug_collisions(params: &SceneParams, sandbox: &mut Sandbox) -> Result<Behavior, PhysicsError> {
    add_borders(params, sandbox)?;
    let mut first = shapes::rectangle(30.0, 20.0)?;
    first.position = Vec2::new(-5.0, -5.0);
    first.density = 0.0;
    let mut second = shapes::rectangle(15.0, 25.0)?;
    second.position = Vec2::new(5.0, 5.0);
    second.density = 0.0;
    let a = sandbox.add(first)?;
    let b = sandbox.add(second)?;
    let kernel = sandbox.engine().config().sat_kernel;
    Ok(Behavior::Inspect(PairInspector::new(a, b, kernel)))
}
