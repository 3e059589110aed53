//! Snapshot system: queries the world and builds a complete
//! `FrameSnapshot` for the renderer.
//!
//! This system is read-only — it never modifies the world. Draw lists
//! are sorted by entity id so equal simulations serialize identically.

use hecs::World;

use starfall_core::components::{Bullet, Debris, Explosion, Fighter, Sprite};
use starfall_core::constants::{STAR_INTENSITY_STEP, STAR_STREAK_LENGTH};
use starfall_core::events::SimEvent;
use starfall_core::state::*;
use starfall_core::types::{Position, Star};

/// Build a complete frame snapshot from the current world state.
pub fn build(
    world: &World,
    stars: &[Star],
    background_x: i32,
    frame: u64,
    events: Vec<SimEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        frame,
        background_x,
        stars: build_stars(stars),
        fighters: build_sprites::<Fighter>(world),
        bullets: build_sprites::<Bullet>(world),
        debris: build_debris(world),
        explosions: build_explosions(world),
        events,
    }
}

/// Star streaks with grayscale intensity proportional to scroll speed.
fn build_stars(stars: &[Star]) -> Vec<StarStreak> {
    stars
        .iter()
        .map(|star| StarStreak {
            x: star.x,
            y: star.y,
            length: STAR_STREAK_LENGTH,
            intensity: (star.speed * STAR_INTENSITY_STEP).min(255) as u8,
        })
        .collect()
}

/// Whole-sprite draws for every entity carrying the marker `M`.
fn build_sprites<M: hecs::Component>(world: &World) -> Vec<SpriteDraw> {
    let mut draws: Vec<(u64, SpriteDraw)> = world
        .query::<(&Position, &Sprite, &M)>()
        .iter()
        .map(|(entity, (pos, sprite, _marker))| {
            (
                entity.to_bits().get(),
                SpriteDraw {
                    sprite: sprite.id,
                    x: pos.x,
                    y: pos.y,
                },
            )
        })
        .collect();
    draws.sort_by_key(|(bits, _)| *bits);
    draws.into_iter().map(|(_, draw)| draw).collect()
}

fn build_debris(world: &World) -> Vec<RegionDraw> {
    let mut draws: Vec<(u64, RegionDraw)> = world
        .query::<(&Position, &Sprite, &Debris)>()
        .iter()
        .map(|(entity, (pos, sprite, debris))| {
            (
                entity.to_bits().get(),
                RegionDraw {
                    sprite: sprite.id,
                    region: debris.region,
                    x: pos.x,
                    y: pos.y,
                },
            )
        })
        .collect();
    draws.sort_by_key(|(bits, _)| *bits);
    draws.into_iter().map(|(_, draw)| draw).collect()
}

fn build_explosions(world: &World) -> Vec<ParticleDraw> {
    let mut draws: Vec<(u64, ParticleDraw)> = world
        .query::<(&Position, &Explosion)>()
        .iter()
        .map(|(entity, (pos, explosion))| {
            (
                entity.to_bits().get(),
                ParticleDraw {
                    x: pos.x,
                    y: pos.y,
                    color: explosion.color,
                    alpha: explosion.life.clamp(0, 255) as u8,
                },
            )
        })
        .collect();
    draws.sort_by_key(|(bits, _)| *bits);
    draws.into_iter().map(|(_, draw)| draw).collect()
}
