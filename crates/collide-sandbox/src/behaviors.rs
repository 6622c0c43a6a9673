// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-frame scene logic run after each engine step.

use collide_geom::{Obb, Vec2};
use collide_physics::{Polygon, Sandbox, SatKernel};
use tracing::{debug, info};

/// Axis-aligned walls centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walls {
    /// Half of the world width.
    pub half_width: f32,
    /// Half of the world height.
    pub half_height: f32,
}

impl Walls {
    /// Walls around a `width` by `height` area.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            half_width: width.abs() * 0.5,
            half_height: height.abs() * 0.5,
        }
    }
}

/// Closed set of scene behaviors.
#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
    /// Moving polygons bouncing off walls and each other.
    Bounce(PolygonBounce),
    /// Circle field and chain under gravity, engine disabled.
    Spheres(SphereSimulation),
    /// Checks one fixed pair every frame, engine disabled.
    Inspect(PairInspector),
}

impl Behavior {
    /// Advances the scene by `dt` seconds using the engine's latest results.
    pub fn update(&mut self, sandbox: &mut Sandbox, dt: f32) {
        match self {
            Self::Bounce(b) => b.update(sandbox, dt),
            Self::Spheres(s) => s.update(sandbox, dt),
            Self::Inspect(i) => i.update(sandbox),
        }
    }

    /// Responses applied so far: bounces, sphere contacts, or frames the
    /// inspected pair spent overlapping.
    pub const fn events(&self) -> u64 {
        match self {
            Self::Bounce(b) => b.responses,
            Self::Spheres(s) => s.contacts,
            Self::Inspect(i) => i.overlapping_frames,
        }
    }
}

/// Reflects one coordinate off the `[-half, half]` range.
fn bounce_axis(position: f32, velocity: f32, half: f32) -> (f32, f32) {
    if position < -half {
        (-half, -velocity)
    } else if position > half {
        (half, -velocity)
    } else {
        (position, velocity)
    }
}

/// Integrates velocities and reflects polygons off the walls and off each
/// other.
///
/// Contact geometry is not computed by the engine, so the collision normal
/// is the direction between the two centers. Pairs already moving apart are
/// left alone. Polygons below `first_dynamic` (the border frame) neither
/// move nor respond.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonBounce {
    walls: Walls,
    first_dynamic: usize,
    responses: u64,
}

impl PolygonBounce {
    /// Bounce behavior for polygons from `first_dynamic` onward.
    pub const fn new(walls: Walls, first_dynamic: usize) -> Self {
        Self {
            walls,
            first_dynamic,
            responses: 0,
        }
    }

    fn update(&mut self, sandbox: &mut Sandbox, dt: f32) {
        let (world, engine) = sandbox.split_mut();
        for c in engine.collisions() {
            if c.a < self.first_dynamic || c.b < self.first_dynamic {
                continue;
            }
            let Some((a, b)) = world.pair_mut(c.a, c.b) else {
                continue;
            };
            let normal = (b.position - a.position).normalize();
            if (b.velocity - a.velocity).dot(&normal) >= 0.0 {
                continue;
            }
            a.velocity = a.velocity.reflect(&normal, 1.0);
            b.velocity = b.velocity.reflect(&normal, 1.0);
            self.responses += 1;
        }

        let Walls { half_width, half_height } = self.walls;
        for poly in world.iter_mut().skip(self.first_dynamic) {
            poly.position += poly.velocity * dt;
            let (px, vx) = bounce_axis(poly.position.x(), poly.velocity.x(), half_width);
            let (py, vy) = bounce_axis(poly.position.y(), poly.velocity.y(), half_height);
            poly.position = Vec2::new(px, py);
            poly.velocity = Vec2::new(vx, vy);
        }
    }
}

/// Radius of every simulated circle.
pub const SPHERE_RADIUS: f32 = 2.0;
/// Rest length between chain links.
pub const CHAIN_LINK: f32 = 5.0;
const GRAVITY: f32 = 20.0;
const DAMPING: f32 = 0.3;

/// Circles under gravity and linear damping with equal-mass elastic contacts,
/// plus a chain hanging from a pinned first link.
///
/// Runs without the engine: contacts come from center distances.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereSimulation {
    walls: Walls,
    circles: Vec<usize>,
    chain: Vec<usize>,
    anchor: Vec2,
    contacts: u64,
}

impl SphereSimulation {
    /// Simulation over `circles`; `chain` lists the linked subset in order,
    /// its first entry pinned at `anchor`.
    pub fn new(walls: Walls, circles: Vec<usize>, chain: Vec<usize>, anchor: Vec2) -> Self {
        Self {
            walls,
            circles,
            chain,
            anchor,
            contacts: 0,
        }
    }

    fn update(&mut self, sandbox: &mut Sandbox, dt: f32) {
        let world = sandbox.world_mut();
        let gravity = Vec2::new(0.0, -GRAVITY * dt);
        for &i in &self.circles {
            if let Some(c) = world.get_mut(i) {
                c.velocity += gravity;
                c.velocity -= c.velocity * (DAMPING * dt);
            }
        }

        let reach = 4.0 * SPHERE_RADIUS * SPHERE_RADIUS;
        for (k, &i) in self.circles.iter().enumerate() {
            for &j in &self.circles[k + 1..] {
                let Some((a, b)) = world.pair_mut(i, j) else {
                    continue;
                };
                let diff = b.position - a.position;
                let closing = (b.velocity - a.velocity).dot(&diff);
                if diff.length_squared() < reach && closing < 0.0 {
                    let normal = diff.normalize();
                    let impulse = (b.velocity - a.velocity).dot(&normal);
                    a.velocity += normal * impulse;
                    b.velocity -= normal * impulse;
                    self.contacts += 1;
                }
            }
        }

        let hw = self.walls.half_width - SPHERE_RADIUS;
        let hh = self.walls.half_height - SPHERE_RADIUS;
        for &i in &self.circles {
            let Some(c) = world.get_mut(i) else { continue };
            let (p, v) = (c.position, c.velocity);
            let vx = if (p.x() < -hw && v.x() < 0.0) || (p.x() > hw && v.x() > 0.0) {
                -v.x()
            } else {
                v.x()
            };
            let vy = if (p.y() < -hh && v.y() < 0.0) || (p.y() > hh && v.y() > 0.0) {
                -v.y()
            } else {
                v.y()
            };
            c.velocity = Vec2::new(vx, vy);
            c.position += c.velocity * dt;
        }

        self.solve_chain(sandbox);
    }

    /// One relaxation pass over the chain links.
    fn solve_chain(&self, sandbox: &mut Sandbox) {
        let world = sandbox.world_mut();
        if let Some(first) = self.chain.first().and_then(|&i| world.get_mut(i)) {
            first.position = self.anchor;
            first.velocity = Vec2::ZERO;
        }
        for (k, link) in self.chain.windows(2).enumerate() {
            let Some((prev, next)) = world.pair_mut(link[0], link[1]) else {
                continue;
            };
            let delta = next.position - prev.position;
            let len = delta.length();
            if len <= f32::EPSILON {
                continue;
            }
            let correction = delta * ((len - CHAIN_LINK) / len);
            if k == 0 {
                next.position -= correction;
            } else {
                prev.position += correction * 0.5;
                next.position -= correction * 0.5;
            }
        }
    }
}

/// Tests one fixed pair with the SAT kernel every frame and logs state
/// changes. Keeps the engine disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct PairInspector {
    a: usize,
    b: usize,
    kernel: SatKernel,
    last: Option<bool>,
    overlapping_frames: u64,
}

impl PairInspector {
    /// Inspector for polygons `a` and `b`.
    pub const fn new(a: usize, b: usize, kernel: SatKernel) -> Self {
        Self {
            a,
            b,
            kernel,
            last: None,
            overlapping_frames: 0,
        }
    }

    /// Overlap state from the latest frame.
    pub const fn last(&self) -> Option<bool> {
        self.last
    }

    fn update(&mut self, sandbox: &mut Sandbox) {
        sandbox.engine_mut().activate(false);
        let world = sandbox.world();
        let (Some(a), Some(b)) = (world.get(self.a), world.get(self.b)) else {
            debug!(a = self.a, b = self.b, "inspected pair missing");
            return;
        };
        let overlap = self.kernel.overlaps(&oriented(a), &oriented(b));
        if self.last != Some(overlap) {
            info!(a = self.a, b = self.b, overlap, "inspected pair changed state");
        }
        self.last = Some(overlap);
        if overlap {
            self.overlapping_frames += 1;
        }
    }
}

fn oriented(poly: &Polygon) -> Obb {
    Obb::from_local_aabb(&poly.local_aabb(), &poly.transform())
}
