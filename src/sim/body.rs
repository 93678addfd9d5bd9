//! Rigid circular body and its motion integration
//!
//! A body is a point-mass circle moving at constant velocity between
//! collisions. Only the collision engine changes its velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MASS, MOTION_SCALE};

/// Reasons a body cannot be constructed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    /// Radius is zero, negative or not finite
    InvalidRadius(f32),
    /// Mass is zero, negative or not finite
    InvalidMass(f32),
    /// Position has a NaN or infinite component
    NonFinitePosition(Vec2),
    /// Velocity has a NaN or infinite component
    NonFiniteVelocity(Vec2),
}

impl std::fmt::Display for BodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyError::InvalidRadius(r) => write!(f, "radius must be positive and finite, got {r}"),
            BodyError::InvalidMass(m) => write!(f, "mass must be positive and finite, got {m}"),
            BodyError::NonFinitePosition(p) => write!(f, "position must be finite, got {p}"),
            BodyError::NonFiniteVelocity(v) => write!(f, "velocity must be finite, got {v}"),
        }
    }
}

impl std::error::Error for BodyError {}

/// Serialized form of a body, validated on the way back in
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodySpec {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    #[serde(default = "default_mass")]
    pub mass: f32,
}

fn default_mass() -> f32 {
    DEFAULT_MASS
}

/// A simulated circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodySpec", into = "BodySpec")]
pub struct Body {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    mass: f32,
}

impl Body {
    /// Create a body with the shared default mass
    pub fn new(radius: f32, position: Vec2, velocity: Vec2) -> Result<Self, BodyError> {
        Self::with_mass(radius, DEFAULT_MASS, position, velocity)
    }

    /// Create a body with an explicit mass
    pub fn with_mass(
        radius: f32,
        mass: f32,
        position: Vec2,
        velocity: Vec2,
    ) -> Result<Self, BodyError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(BodyError::InvalidRadius(radius));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(BodyError::InvalidMass(mass));
        }
        if !position.is_finite() {
            return Err(BodyError::NonFinitePosition(position));
        }
        if !velocity.is_finite() {
            return Err(BodyError::NonFiniteVelocity(velocity));
        }
        Ok(Self {
            position,
            velocity,
            radius,
            mass,
        })
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Replace the velocity (collision response only)
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Move along the current velocity for `dt`
    ///
    /// A zero, negative or non-finite `dt` leaves the body where it is, as
    /// does a step whose result would overflow to a non-finite position.
    pub fn advance(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            log::debug!("Ignoring advance with invalid dt {dt}");
            return;
        }
        let next = self.position + self.velocity * MOTION_SCALE * dt;
        if !next.is_finite() {
            log::debug!(
                "Ignoring advance from {} with velocity {}: position would overflow",
                self.position,
                self.velocity
            );
            return;
        }
        self.position = next;
    }

    /// Linear momentum `m * v`
    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    /// Kinetic energy `m * |v|² / 2`
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

impl TryFrom<BodySpec> for Body {
    type Error = BodyError;

    fn try_from(spec: BodySpec) -> Result<Self, Self::Error> {
        Body::with_mass(spec.radius, spec.mass, spec.position, spec.velocity)
    }
}

impl From<Body> for BodySpec {
    fn from(body: Body) -> Self {
        Self {
            position: body.position,
            velocity: body.velocity,
            radius: body.radius,
            mass: body.mass,
        }
    }
}
