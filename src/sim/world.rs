//! Simulation world: the bodies and the arena they live in
//!
//! The world owns every body for the whole run. Nothing here creates or
//! removes bodies after construction.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::Arena;
use crate::settings::{ConfigError, SimConfig};

/// Bodies plus arena bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub arena: Arena,
    bodies: Vec<Body>,
}

impl World {
    pub fn new(arena: Arena, bodies: Vec<Body>) -> Self {
        Self { arena, bodies }
    }

    /// Scatter `config.body_count` bodies with a seeded RNG
    ///
    /// Radii, positions and velocity components are drawn as whole numbers
    /// from the configured ranges. Placement ignores overlaps, so bodies may
    /// start out interpenetrating or clipping a wall. Centers are drawn from
    /// `0..floor(width)` and `0..floor(height)`, so a fractional arena size
    /// never yields a center past the far edge.
    pub fn populate(config: &SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let (min_r, max_r) = config.radius_range;
        let (min_v, max_v) = config.speed_range;
        let width = (config.arena_width.floor() as u32).max(1);
        let height = (config.arena_height.floor() as u32).max(1);

        let mut bodies = Vec::with_capacity(config.body_count);
        for _ in 0..config.body_count {
            let radius = rng.random_range(min_r..=max_r) as f32;
            let position = Vec2::new(
                rng.random_range(0..width) as f32,
                rng.random_range(0..height) as f32,
            );
            let velocity = Vec2::new(
                rng.random_range(min_v..=max_v) as f32,
                rng.random_range(min_v..=max_v) as f32,
            );
            bodies.push(Body::new(radius, position, velocity)?);
        }

        log::info!(
            "Populated {} bodies in {}x{} arena (seed {seed})",
            bodies.len(),
            config.arena_width,
            config.arena_height
        );
        Ok(Self::new(config.arena(), bodies))
    }

    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[inline]
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Sum of body momenta
    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Sum of body kinetic energies
    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_is_deterministic() {
        let config = SimConfig::default();
        let w1 = World::populate(&config, 42).unwrap();
        let w2 = World::populate(&config, 42).unwrap();
        assert_eq!(w1, w2);
        assert_eq!(w1.len(), config.body_count);
    }

    #[test]
    fn test_populate_respects_ranges() {
        let config = SimConfig::default();
        let world = World::populate(&config, 7).unwrap();
        for body in world.bodies() {
            assert!(body.radius() >= 10.0 && body.radius() <= 30.0);
            assert_eq!(body.radius().fract(), 0.0);
            assert!(body.position().x >= 0.0 && body.position().x < 800.0);
            assert!(body.position().y >= 0.0 && body.position().y < 800.0);
            assert!(body.velocity().x >= 1.0 && body.velocity().x <= 2.0);
            assert!(body.velocity().y >= 1.0 && body.velocity().y <= 2.0);
            assert_eq!(body.mass(), crate::consts::DEFAULT_MASS);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = SimConfig::default();
        let w1 = World::populate(&config, 1).unwrap();
        let w2 = World::populate(&config, 2).unwrap();
        assert_ne!(w1, w2);
    }

    #[test]
    fn test_populate_fractional_arena() {
        let config = SimConfig {
            arena_width: 10.9,
            arena_height: 0.5,
            body_count: 50,
            ..Default::default()
        };
        let world = World::populate(&config, 3).unwrap();
        assert_eq!(world.arena, Arena::new(10.9, 0.5));
        for body in world.bodies() {
            assert!(body.position().x >= 0.0 && body.position().x <= 9.0);
            assert_eq!(body.position().y, 0.0);
        }
    }

    #[test]
    fn test_populate_rejects_invalid_config() {
        let config = SimConfig {
            radius_range: (30, 10),
            ..Default::default()
        };
        assert!(World::populate(&config, 1).is_err());

        let config = SimConfig::from_json(r#"{"body_count": 18446744073709551615}"#);
        assert!(matches!(config, Err(ConfigError::Invalid(_))));
        let config = SimConfig {
            body_count: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(World::populate(&config, 1), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_totals() {
        let bodies = vec![
            Body::with_mass(5.0, 1.0, Vec2::ZERO, Vec2::new(1.0, 0.0)).unwrap(),
            Body::with_mass(5.0, 2.0, Vec2::new(50.0, 0.0), Vec2::new(0.0, -1.0)).unwrap(),
        ];
        let world = World::new(Arena::default(), bodies);
        assert_eq!(world.total_momentum(), Vec2::new(1.0, -2.0));
        assert!((world.total_kinetic_energy() - 1.5).abs() < 1e-6);
    }
}
