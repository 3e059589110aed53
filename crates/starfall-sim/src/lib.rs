//! Simulation engine for STARFALL.
//!
//! Owns the hecs ECS world, advances it one fixed step per frame
//! through an ordered system pipeline, and produces a `FrameSnapshot`
//! for an external renderer. Completely headless.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimEngine};
pub use starfall_core as core;
