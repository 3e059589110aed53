//! Visual resource catalog.
//!
//! Texture loading belongs to the external resource provider; the
//! simulation only needs each sprite's intrinsic size for collision
//! rectangles and spawn placement. A failed asset load is fatal to
//! startup and surfaces here as an incomplete catalog.

use std::collections::HashMap;

use thiserror::Error;

use crate::enums::SpriteId;

/// Intrinsic pixel size of a loaded image asset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpriteSize {
    pub w: f32,
    pub h: f32,
}

impl SpriteSize {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// Resource-acquisition failure. The only error class the core owns;
/// all simulation transitions are total once a catalog exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("missing sprite resource: {0:?}")]
    MissingSprite(SpriteId),
}

/// Complete-by-construction table of sprite sizes, one entry per
/// [`SpriteId`]. Lookups are total functions.
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    sizes: [SpriteSize; SpriteId::COUNT],
}

impl SpriteCatalog {
    /// Build a catalog from the sizes the resource provider queried at
    /// load time. Fails if any of the six named assets is missing.
    pub fn from_sizes(sizes: &HashMap<SpriteId, SpriteSize>) -> Result<Self, ResourceError> {
        let mut table = [SpriteSize::default(); SpriteId::COUNT];
        for id in SpriteId::ALL {
            let size = sizes
                .get(&id)
                .copied()
                .ok_or(ResourceError::MissingSprite(id))?;
            table[id as usize] = size;
        }
        Ok(Self { sizes: table })
    }

    /// Catalog with the reference asset sizes, for headless runs and
    /// tests that never touch a real texture loader.
    pub fn with_reference_sizes() -> Self {
        let mut table = [SpriteSize::default(); SpriteId::COUNT];
        table[SpriteId::Player as usize] = SpriteSize::new(64.0, 64.0);
        table[SpriteId::Bullet as usize] = SpriteSize::new(16.0, 16.0);
        table[SpriteId::Enemy as usize] = SpriteSize::new(64.0, 64.0);
        table[SpriteId::AlienBullet as usize] = SpriteSize::new(16.0, 16.0);
        table[SpriteId::Background as usize] = SpriteSize::new(800.0, 600.0);
        table[SpriteId::Star as usize] = SpriteSize::new(3.0, 1.0);
        Self { sizes: table }
    }

    pub fn size(&self, id: SpriteId) -> SpriteSize {
        self.sizes[id as usize]
    }
}
