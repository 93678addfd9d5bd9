//! Deterministic physics kernel
//!
//! This module must stay pure and deterministic:
//! - No randomness inside a frame (seeded RNG only at world creation)
//! - Stable iteration order (by body index)
//! - No rendering or platform dependencies

pub mod body;
pub mod broad_phase;
pub mod collision;
pub mod tick;
pub mod world;

pub use body::{Body, BodyError, BodySpec};
pub use broad_phase::{BroadPhase, OrderedPairs, PairMode, UniquePairs, pair_mut};
pub use collision::{
    Arena, CollisionResult, distance, normal_speeds_after, resolve_boundary_collision,
    resolve_pair_collision, total_radius,
};
pub use tick::{Contact, FrameParams, FrameReport, step_frame, step_frame_with};
pub use world::World;
