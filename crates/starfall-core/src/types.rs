//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in field space (pixels, top-left origin, y down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// 2D velocity in pixels per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned bounding rectangle in field space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Integer sub-rectangle into a sprite's source image, used to render
/// debris fragments as torn quadrants of their parent sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteRegion {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// A background star. The starfield is a fixed-size array recycled
/// forever; stars are never created or destroyed after seeding.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    /// Leftward scroll speed in [1, STAR_SPEED].
    pub speed: i32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict AABB overlap test. Symmetric; rectangles that merely
    /// touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x.max(other.x) < (self.x + self.w).min(other.x + other.w)
            && self.y.max(other.y) < (self.y + self.h).min(other.y + other.h)
    }
}

/// Aim slope from (x2, y2) toward (x1, y1), normalized so the larger
/// component has magnitude 1 (Chebyshev normalization). Returns the
/// zero vector when the points coincide.
pub fn calc_slope(x1: f32, y1: f32, x2: f32, y2: f32) -> (f32, f32) {
    let steps = (x1 - x2).abs().max((y1 - y2).abs());
    if steps == 0.0 {
        return (0.0, 0.0);
    }
    ((x1 - x2) / steps, (y1 - y2) / steps)
}
