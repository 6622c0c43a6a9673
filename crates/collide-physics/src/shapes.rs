// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Polygon factories. All shapes are centered on their local origin and
//! wound counter-clockwise.

use collide_geom::math::deg_to_rad;
use collide_geom::{Mat2, Prng, Vec2};

use crate::error::PhysicsError;
use crate::world::Polygon;

/// Axis-aligned rectangle of the given full size.
///
/// # Errors
/// Returns [`PhysicsError::DegenerateShape`] for non-finite sizes.
pub fn rectangle(width: f32, height: f32) -> Result<Polygon, PhysicsError> {
    let (hw, hh) = (width.abs() * 0.5, height.abs() * 0.5);
    Polygon::new(vec![
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ])
}

/// Square with side `size`.
///
/// # Errors
/// See [`rectangle`].
pub fn square(size: f32) -> Result<Polygon, PhysicsError> {
    rectangle(size, size)
}

/// Isosceles triangle with its apex on `+y`.
///
/// # Errors
/// Returns [`PhysicsError::DegenerateShape`] for non-finite sizes.
pub fn triangle(base: f32, height: f32) -> Result<Polygon, PhysicsError> {
    let (hb, hh) = (base.abs() * 0.5, height.abs() * 0.5);
    Polygon::new(vec![Vec2::new(-hb, -hh), Vec2::new(hb, -hh), Vec2::new(0.0, hh)])
}

/// Regular polygon with `sides` vertices on a circle of `radius`, the first
/// vertex on `+x`.
///
/// # Errors
/// Returns [`PhysicsError::DegenerateShape`] for fewer than three sides.
pub fn regular(radius: f32, sides: usize) -> Result<Polygon, PhysicsError> {
    let step = 360.0 / sides as f32;
    Polygon::new(ring(radius, sides, |i| i as f32 * step))
}

fn ring(radius: f32, sides: usize, angle_deg: impl Fn(usize) -> f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let a = deg_to_rad(angle_deg(i));
            Vec2::new(a.cos() * radius, a.sin() * radius)
        })
        .collect()
}

/// Ranges for [`random`]. Each pair is `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomPolyParams {
    /// Lower corner of the spawn area.
    pub min_bounds: Vec2,
    /// Upper corner of the spawn area.
    pub max_bounds: Vec2,
    /// Radius range.
    pub radius: (f32, f32),
    /// Vertex count range, inclusive.
    pub points: (usize, usize),
    /// Speed range.
    pub speed: (f32, f32),
}

impl Default for RandomPolyParams {
    fn default() -> Self {
        Self {
            min_bounds: Vec2::splat(-10.0),
            max_bounds: Vec2::splat(10.0),
            radius: (1.0, 1.0),
            points: (3, 8),
            speed: (1.0, 3.0),
        }
    }
}

/// Convex-ish polygon with jittered vertex angles, placed, rotated and
/// launched at random within `params`.
///
/// Each vertex angle moves by up to a third of the even spacing, so the
/// winding stays counter-clockwise.
///
/// # Errors
/// Returns [`PhysicsError::DegenerateShape`] when the vertex range allows
/// fewer than three points.
pub fn random(rng: &mut Prng, params: &RandomPolyParams) -> Result<Polygon, PhysicsError> {
    let (min_points, max_points) = params.points;
    if min_points > max_points {
        return Err(PhysicsError::DegenerateShape("empty vertex count range"));
    }
    let count = rng.range_usize(min_points, max_points);
    let radius = rng.range_f32(params.radius.0, params.radius.1);
    let step = 360.0 / count as f32;
    let jitter: Vec<f32> = (0..count).map(|_| rng.range_f32(-step / 3.0, step / 3.0)).collect();

    let mut poly = Polygon::new(ring(radius, count, |i| i as f32 * step + jitter[i]))?;
    poly.rotation = Mat2::from_angle(deg_to_rad(rng.range_f32(-180.0, 180.0)));
    poly.position = Vec2::new(
        rng.range_f32(params.min_bounds.x(), params.max_bounds.x()),
        rng.range_f32(params.min_bounds.y(), params.max_bounds.y()),
    );
    let heading = Mat2::from_angle(deg_to_rad(rng.range_f32(-180.0, 180.0)));
    poly.velocity = heading.x_axis() * rng.range_f32(params.speed.0, params.speed.1);
    Ok(poly)
}
