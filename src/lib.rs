//! Circle Arena - rigid circles bouncing around a bounded 2D arena
//!
//! Core modules:
//! - `sim`: Deterministic physics kernel (bodies, collisions, frame pipeline)
//! - `settings`: Data-driven simulation configuration
//!
//! Windowing, drawing and colors live outside this crate. A driver owns the
//! loop, calls [`sim::step_frame`] once per frame and reads body state back out.

pub mod settings;
pub mod sim;

pub use settings::{ConfigError, PairMode, SimConfig};

/// Simulation tuning constants
pub mod consts {
    /// Displacement scale applied to a unit velocity
    pub const SPEED_SCALE: f32 = 50.0;
    /// Time scale dividing each increment
    pub const TIME_SCALE: f32 = 30.0;
    /// Combined factor: `position += velocity * MOTION_SCALE * dt`
    pub const MOTION_SCALE: f32 = SPEED_SCALE / TIME_SCALE;

    /// Mass shared by every body created without an explicit mass
    pub const DEFAULT_MASS: f32 = 0.5;

    /// Integration sub-steps per frame
    pub const SUBSTEPS: u32 = 20;
    /// Simulated time covered by one frame
    pub const FRAME_TIME: f32 = 1.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Perfectly elastic along the contact normal
    pub const RESTITUTION: f32 = 1.0;

    /// Start-up population
    pub const BODY_COUNT: usize = 20;
    /// Upper bound on bodies; pairs are checked all-against-all
    pub const MAX_BODY_COUNT: usize = 4096;
    pub const MIN_RADIUS: u32 = 10;
    pub const MAX_RADIUS: u32 = 30;
    pub const MIN_SPEED: u32 = 1;
    pub const MAX_SPEED: u32 = 2;

    /// Below this center distance a pair is treated as coincident
    pub const MIN_CONTACT_DISTANCE: f32 = f32::EPSILON;
}
