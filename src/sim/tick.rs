//! Per-frame simulation pipeline
//!
//! One frame: integrate every body through all sub-steps, then resolve every
//! candidate pair, then reflect every body off the walls. The pipeline keeps
//! no state of its own between frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::broad_phase::{BroadPhase, pair_mut};
use super::collision::{Arena, resolve_boundary_collision, resolve_pair_collision};
use super::world::World;
use crate::settings::SimConfig;

/// Debug data for one resolved pair, ready for an overlay renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Index of the first body of the pair
    pub a: usize,
    /// Index of the second body of the pair
    pub b: usize,
    /// Center of body `a` at resolution time
    pub point: Vec2,
    /// Unit normal from `a` toward `b`
    pub normal: Vec2,
    /// Velocity of `a` after resolution
    pub velocity: Vec2,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Pair resolutions that found an overlap
    pub pair_hits: usize,
    /// Bodies that reflected off a wall
    pub boundary_hits: usize,
    /// One entry per pair hit, in resolution order
    pub contacts: Vec<Contact>,
}

/// Frame parameters threaded explicitly into every stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub substeps: u32,
    pub frame_time: f32,
    pub restitution: f32,
}

impl FrameParams {
    /// Length of one integration sub-step
    #[inline]
    pub fn substep_dt(&self) -> f32 {
        self.frame_time / self.substeps.max(1) as f32
    }
}

impl From<&SimConfig> for FrameParams {
    fn from(config: &SimConfig) -> Self {
        Self {
            substeps: config.substeps,
            frame_time: config.frame_time,
            restitution: config.restitution,
        }
    }
}

/// Advance every body through `substeps` equal increments
pub fn integrate(bodies: &mut [Body], substeps: u32, dt: f32) {
    for _ in 0..substeps {
        for body in bodies.iter_mut() {
            body.advance(dt);
        }
    }
}

/// Resolve every candidate pair the broad phase yields
pub fn resolve_pairs(
    bodies: &mut [Body],
    broad_phase: &dyn BroadPhase,
    restitution: f32,
    report: &mut FrameReport,
) {
    let mut pairs = Vec::new();
    broad_phase.candidate_pairs(bodies, &mut pairs);

    for (i, j) in pairs {
        let Some((a, b)) = pair_mut(bodies, i, j) else {
            continue;
        };
        let result = resolve_pair_collision(a, b, restitution);
        if result.hit {
            report.pair_hits += 1;
            report.contacts.push(Contact {
                a: i,
                b: j,
                point: a.position(),
                normal: result.normal,
                velocity: result.velocity_a,
            });
        }
    }
}

/// Reflect every body off the arena walls
pub fn resolve_boundaries(bodies: &mut [Body], arena: Arena, report: &mut FrameReport) {
    for (i, body) in bodies.iter_mut().enumerate() {
        if resolve_boundary_collision(body, arena) {
            log::debug!("Wall hit: body {i} at {}", body.position());
            report.boundary_hits += 1;
        }
    }
}

/// Run one frame with an explicit broad phase
pub fn step_frame_with(
    world: &mut World,
    params: FrameParams,
    broad_phase: &dyn BroadPhase,
) -> FrameReport {
    let mut report = FrameReport::default();
    let arena = world.arena;
    let bodies = world.bodies_mut();

    integrate(bodies, params.substeps, params.substep_dt());
    resolve_pairs(bodies, broad_phase, params.restitution, &mut report);
    resolve_boundaries(bodies, arena, &mut report);

    report
}

/// Run one frame using the configured pair mode
pub fn step_frame(world: &mut World, config: &SimConfig) -> FrameReport {
    step_frame_with(world, FrameParams::from(config), config.pair_mode.broad_phase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PairMode;
    use crate::sim::broad_phase::{OrderedPairs, UniquePairs};

    fn head_on_world() -> World {
        let bodies = vec![
            Body::with_mass(10.0, 1.0, Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0)).unwrap(),
            Body::with_mass(10.0, 1.0, Vec2::new(115.0, 100.0), Vec2::new(-1.0, 0.0)).unwrap(),
        ];
        World::new(Arena::new(800.0, 800.0), bodies)
    }

    fn frozen() -> FrameParams {
        // Zero frame time: no motion, collisions only
        FrameParams {
            substeps: 20,
            frame_time: 0.0,
            restitution: 1.0,
        }
    }

    #[test]
    fn test_substep_dt() {
        let params = FrameParams::from(&SimConfig::default());
        assert!((params.substep_dt() - 0.05).abs() < 1e-7);
    }

    #[test]
    fn test_ordered_pairs_resolve_twice() {
        let mut world = head_on_world();
        let report = step_frame_with(&mut world, frozen(), &OrderedPairs);

        assert_eq!(report.pair_hits, 2);
        assert_eq!(report.contacts[0].a, 0);
        assert_eq!(report.contacts[0].b, 1);
        assert_eq!(report.contacts[1].a, 1);
        assert_eq!(report.contacts[1].b, 0);
        // Second resolution restores the pre-collision velocities
        assert!((world.bodies()[0].velocity() - Vec2::new(1.0, 0.0)).length() < 1e-6);
        assert!((world.bodies()[1].velocity() - Vec2::new(-1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_unique_pairs_resolve_once() {
        let mut world = head_on_world();
        let report = step_frame_with(&mut world, frozen(), &UniquePairs);

        assert_eq!(report.pair_hits, 1);
        assert_eq!(report.contacts[0].normal, Vec2::new(1.0, 0.0));
        assert_eq!(report.contacts[0].point, Vec2::new(100.0, 100.0));
        assert!((world.bodies()[0].velocity() - Vec2::new(-1.0, 0.0)).length() < 1e-6);
        assert!((world.bodies()[1].velocity() - Vec2::new(1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_frame_integrates_before_collisions() {
        // Bodies start apart and only overlap once the frame's motion is applied
        let bodies = vec![
            Body::with_mass(10.0, 1.0, Vec2::new(100.0, 100.0), Vec2::new(3.0, 0.0)).unwrap(),
            Body::with_mass(10.0, 1.0, Vec2::new(120.0, 100.0), Vec2::new(0.0, 0.0)).unwrap(),
        ];
        let mut world = World::new(Arena::new(800.0, 800.0), bodies);
        let config = SimConfig {
            pair_mode: PairMode::Unique,
            ..Default::default()
        };

        let report = step_frame(&mut world, &config);
        // 3 * 50/30 * 1.0 = 5 units of travel
        assert!((world.bodies()[0].position().x - 105.0).abs() < 1e-3);
        assert_eq!(report.pair_hits, 1);
        assert!(world.bodies()[0].velocity().length() < 1e-5);
        assert!((world.bodies()[1].velocity() - Vec2::new(3.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_boundary_hits_counted() {
        let bodies = vec![
            Body::new(10.0, Vec2::new(5.0, 400.0), Vec2::new(-2.0, 0.0)).unwrap(),
            Body::new(10.0, Vec2::new(400.0, 400.0), Vec2::new(1.0, 1.0)).unwrap(),
        ];
        let mut world = World::new(Arena::new(800.0, 800.0), bodies);
        let report = step_frame_with(&mut world, frozen(), &OrderedPairs);

        assert_eq!(report.pair_hits, 0);
        assert_eq!(report.boundary_hits, 1);
        assert_eq!(world.bodies()[0].velocity(), Vec2::new(2.0, 0.0));
        assert_eq!(world.bodies()[1].velocity(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_empty_world() {
        let mut world = World::new(Arena::default(), Vec::new());
        let report = step_frame(&mut world, &SimConfig::default());
        assert_eq!(report, FrameReport::default());
    }
}
