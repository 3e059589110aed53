//! Bullet movement, collision resolution, and bounds removal.
//!
//! Each bullet moves, then hits at most one opposing fighter: on a
//! hit both healths drop to zero and the bullet is removed this
//! frame. Struck fighters are reaped by the fighter lifecycle pass on
//! the next frame. Bullets that miss are removed once they leave the
//! field with a one-sprite margin past the left/top edges.

use hecs::{Entity, World};

use starfall_core::components::{Bullet, Fighter, Health, Sprite};
use starfall_core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use starfall_core::enums::Side;
use starfall_core::types::{Position, Rect, Velocity};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (_entity, (pos, vel, _bullet)) in
        world.query_mut::<(&mut Position, &Velocity, &Bullet)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
    }

    let bullets: Vec<(Entity, Rect, Side)> = world
        .query_mut::<(&Position, &Sprite, &Side, &Bullet)>()
        .into_iter()
        .map(|(entity, (pos, sprite, side, _bullet))| (entity, sprite.rect_at(pos), *side))
        .collect();

    despawn_buffer.clear();
    for (entity, rect, side) in bullets {
        if let Some(fighter) = first_hit_fighter(world, &rect, side) {
            if let Ok(mut health) = world.get::<&mut Health>(fighter) {
                health.0 = 0;
            }
            if let Ok(mut health) = world.get::<&mut Health>(entity) {
                health.0 = 0;
            }
            despawn_buffer.push(entity);
        } else if out_of_bounds(&rect) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Scan fighters for the first one of the opposing side whose
/// bounding rectangle overlaps the bullet's. At most one fighter is
/// hit per bullet per frame.
fn first_hit_fighter(world: &World, bullet_rect: &Rect, bullet_side: Side) -> Option<Entity> {
    world
        .query::<(&Position, &Sprite, &Side, &Fighter)>()
        .iter()
        .find(|(_, (pos, sprite, side, _fighter))| {
            **side != bullet_side && bullet_rect.overlaps(&sprite.rect_at(pos))
        })
        .map(|(entity, _)| entity)
}

/// Left/top exits get a one-sprite margin; right/bottom exits are
/// checked against the raw field bounds.
fn out_of_bounds(rect: &Rect) -> bool {
    rect.x < -rect.w
        || rect.y < -rect.h
        || rect.x > FIELD_WIDTH as f32
        || rect.y > FIELD_HEIGHT as f32
}
