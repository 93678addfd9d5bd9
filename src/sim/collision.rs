//! Collision detection and response between circles and the arena walls
//!
//! Pairs are resolved as a 1D elastic collision projected onto the contact
//! normal; only the normal component of each velocity changes. Walls reflect
//! one velocity axis at a time. Neither response moves a body.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::MIN_CONTACT_DISTANCE;

/// Axis-aligned arena spanning `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a circle lies fully inside the arena
    pub fn contains(&self, position: Vec2, radius: f32) -> bool {
        position.x - radius >= 0.0
            && position.x + radius <= self.width
            && position.y - radius >= 0.0
            && position.y + radius <= self.height
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(crate::consts::ARENA_WIDTH, crate::consts::ARENA_HEIGHT)
    }
}

/// Result of a pairwise resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the pair overlapped and was resolved
    pub hit: bool,
    /// Unit normal from A toward B (zero on miss)
    pub normal: Vec2,
    /// A's velocity after resolution
    pub velocity_a: Vec2,
    /// B's velocity after resolution
    pub velocity_b: Vec2,
}

impl CollisionResult {
    pub fn miss(a: &Body, b: &Body) -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            velocity_a: a.velocity(),
            velocity_b: b.velocity(),
        }
    }
}

/// Euclidean distance between two body centers
#[inline]
pub fn distance(a: &Body, b: &Body) -> f32 {
    a.position().distance(b.position())
}

/// Sum of radii, the overlap threshold
#[inline]
pub fn total_radius(a: &Body, b: &Body) -> f32 {
    a.radius() + b.radius()
}

/// Post-collision normal speeds for a 1D collision with restitution
///
/// Total momentum `m1*v1 + m2*v2` is preserved and the relative normal
/// speed is scaled by `-restitution`.
#[inline]
pub fn normal_speeds_after(m1: f32, v1: f32, m2: f32, v2: f32, restitution: f32) -> (f32, f32) {
    let momentum = m1 * v1 + m2 * v2;
    let total_mass = m1 + m2;
    let v1_after = (momentum - m2 * (v1 - v2) * restitution) / total_mass;
    let v2_after = (momentum - m1 * (v2 - v1) * restitution) / total_mass;
    (v1_after, v2_after)
}

/// Detect and resolve an overlap between two distinct bodies
///
/// Overlap means `distance < total_radius`. Positions are left alone, so a
/// pair may stay interpenetrated for a few steps after the first hit.
/// Coincident centers have no defined normal; such a pair is skipped.
pub fn resolve_pair_collision(a: &mut Body, b: &mut Body, restitution: f32) -> CollisionResult {
    let dist = distance(a, b);
    if dist >= total_radius(a, b) {
        return CollisionResult::miss(a, b);
    }
    if dist <= MIN_CONTACT_DISTANCE {
        log::debug!("Skipping coincident pair at {} (distance {dist})", a.position());
        return CollisionResult::miss(a, b);
    }

    let normal = (b.position() - a.position()) / dist;

    let v1n = a.velocity().dot(normal);
    let v2n = b.velocity().dot(normal);
    let (v1n_after, v2n_after) = normal_speeds_after(a.mass(), v1n, b.mass(), v2n, restitution);

    // Tangential components pass through untouched
    let velocity_a = a.velocity() + (v1n_after - v1n) * normal;
    let velocity_b = b.velocity() + (v2n_after - v2n) * normal;

    a.set_velocity(velocity_a);
    b.set_velocity(velocity_b);

    CollisionResult {
        hit: true,
        normal,
        velocity_a,
        velocity_b,
    }
}

/// Reflect a body off the arena walls
///
/// Each axis is checked independently and flips the sign of that velocity
/// component. The body is not pushed back inside. Returns true if either
/// axis reflected.
pub fn resolve_boundary_collision(body: &mut Body, arena: Arena) -> bool {
    let position = body.position();
    let radius = body.radius();
    let mut velocity = body.velocity();
    let mut hit = false;

    if position.x - radius < 0.0 || position.x + radius > arena.width {
        velocity.x = -velocity.x;
        hit = true;
    }
    if position.y - radius < 0.0 || position.y + radius > arena.height {
        velocity.y = -velocity.y;
        hit = true;
    }

    if hit {
        body.set_velocity(velocity);
    }
    hit
}
