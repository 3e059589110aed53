//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic;
//! behavior lives in the systems of the sim crate.

use serde::{Deserialize, Serialize};

use crate::enums::SpriteId;
use crate::types::{Position, Rect, SpriteRegion};

/// Marks an entity as a fighter (player- or enemy-controlled,
/// a valid collision target).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fighter;

/// Marks an entity as a bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet;

/// Binary alive/dead state. 0 = dead; in practice never above 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health(pub i32);

/// Frames until the entity's next firing action is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reload(pub i32);

/// Non-owning visual resource reference plus the intrinsic size
/// queried from the catalog at spawn time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sprite {
    pub id: SpriteId,
    pub w: f32,
    pub h: f32,
}

impl Sprite {
    /// Bounding rectangle of this sprite placed at `pos`.
    pub fn rect_at(&self, pos: &Position) -> Rect {
        Rect::new(pos.x, pos.y, self.w, self.h)
    }
}

/// RGB color for explosion particles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The four explosion color presets: red, orange, yellow, white.
    pub const EXPLOSION_PALETTE: [Rgb; 4] = [
        Rgb::new(255, 0, 0),
        Rgb::new(255, 128, 0),
        Rgb::new(255, 255, 0),
        Rgb::new(255, 255, 255),
    ];
}

/// Decorative explosion particle. No collision role; expires when
/// `life` counts down to zero. `life` doubles as the render alpha.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub color: Rgb,
    pub life: i32,
}

/// A torn quadrant of a destroyed fighter's sprite, subject to gravity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debris {
    /// Source sub-rectangle into the parent fighter's sprite.
    pub region: SpriteRegion,
    pub life: i32,
}
