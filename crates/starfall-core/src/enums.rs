//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Faction tag governing valid collision pairs and aiming.
/// Only entities of opposite sides collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Friendly,
    Hostile,
}

/// The six named image assets the simulation references.
/// Handles are non-owning; intrinsic sizes live in the [`SpriteCatalog`].
///
/// [`SpriteCatalog`]: crate::resources::SpriteCatalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum SpriteId {
    #[default]
    Player,
    Bullet,
    Enemy,
    AlienBullet,
    Background,
    Star,
}

impl SpriteId {
    /// Every sprite the resource provider must supply.
    pub const ALL: [SpriteId; 6] = [
        SpriteId::Player,
        SpriteId::Bullet,
        SpriteId::Enemy,
        SpriteId::AlienBullet,
        SpriteId::Background,
        SpriteId::Star,
    ];

    pub const COUNT: usize = Self::ALL.len();
}
