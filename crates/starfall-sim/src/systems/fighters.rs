//! Fighter movement and lifecycle.
//!
//! Integrates fighter positions, force-kills non-player fighters that
//! scroll off the left edge, then removes every dead fighter: each
//! one bursts into debris, and if it was the player the player handle
//! is cleared (entering the post-death interlude).

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use starfall_core::components::{Fighter, Health, Sprite};
use starfall_core::enums::Side;
use starfall_core::events::SimEvent;
use starfall_core::types::{Position, Velocity};

use crate::world_setup;

pub fn run(
    world: &mut World,
    player: &mut Option<Entity>,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    // Move, then force-kill non-player fighters one sprite width past
    // the left edge.
    for (entity, (pos, vel, sprite, health, _fighter)) in world.query_mut::<(
        &mut Position,
        &Velocity,
        &Sprite,
        &mut Health,
        &Fighter,
    )>() {
        pos.x += vel.x;
        pos.y += vel.y;

        if Some(entity) != *player && pos.x < -sprite.w {
            health.0 = 0;
        }
    }

    // Collect the dead; despawn after the query borrow ends.
    despawn_buffer.clear();
    for (entity, (health, _fighter)) in world.query_mut::<(&Health, &Fighter)>() {
        if health.0 == 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let remains = {
            let pos = world.get::<&Position>(entity).map(|p| *p);
            let sprite = world.get::<&Sprite>(entity).map(|s| *s);
            match (pos, sprite) {
                (Ok(pos), Ok(sprite)) => Some((pos, sprite)),
                _ => None,
            }
        };
        if let Some((pos, sprite)) = remains {
            world_setup::spawn_debris_burst(world, pos, sprite, rng);
        }

        if *player == Some(entity) {
            *player = None;
            events.push(SimEvent::PlayerDestroyed);
        } else {
            let side = world
                .get::<&Side>(entity)
                .map(|s| *s)
                .unwrap_or(Side::Hostile);
            events.push(SimEvent::FighterDestroyed { side });
        }

        let _ = world.despawn(entity);
    }
}
