//! Frame snapshot — the complete drawable state produced each frame.
//!
//! The renderer consumes a snapshot read-only after the update pass;
//! the canonical draw order is starfield, fighters, debris,
//! explosions, bullets.

use serde::{Deserialize, Serialize};

use crate::components::Rgb;
use crate::enums::SpriteId;
use crate::events::SimEvent;
use crate::types::SpriteRegion;

/// Everything an external renderer needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Frame number (increments by 1 each tick).
    pub frame: u64,
    /// Scrolling background offset (non-positive).
    pub background_x: i32,
    pub stars: Vec<StarStreak>,
    pub fighters: Vec<SpriteDraw>,
    pub bullets: Vec<SpriteDraw>,
    pub debris: Vec<RegionDraw>,
    pub explosions: Vec<ParticleDraw>,
    /// Events that occurred during this frame's update.
    pub events: Vec<SimEvent>,
}

/// Whole-sprite draw at a position.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SpriteDraw {
    pub sprite: SpriteId,
    pub x: f32,
    pub y: f32,
}

/// Sub-rectangle draw for a debris fragment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RegionDraw {
    pub sprite: SpriteId,
    pub region: SpriteRegion,
    pub x: f32,
    pub y: f32,
}

/// Explosion particle draw; alpha is the particle's remaining life.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParticleDraw {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    pub alpha: u8,
}

/// Star rendered as a short horizontal line streak with a grayscale
/// intensity derived from its scroll speed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StarStreak {
    pub x: i32,
    pub y: i32,
    pub length: i32,
    pub intensity: u8,
}
