//! Enemy fire timers.
//!
//! Every non-player fighter's reload counter is decremented each
//! frame the player is alive; when it reaches zero or below, the
//! enemy fires an aimed bullet and the counter is reseeded randomly.
//! A freshly spawned enemy starts at zero, so its first decrement can
//! trigger a shot one frame after spawning.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::{Fighter, Reload, Sprite};
use starfall_core::constants::ALIEN_RELOAD_MAX;
use starfall_core::events::SimEvent;
use starfall_core::resources::SpriteCatalog;
use starfall_core::types::Position;

use crate::world_setup;

pub fn run(
    world: &mut World,
    player: Option<Entity>,
    rng: &mut ChaCha8Rng,
    catalog: &SpriteCatalog,
    events: &mut Vec<SimEvent>,
) {
    let Some(player_entity) = player else { return };

    let player_center = {
        let pos = world.get::<&Position>(player_entity).map(|p| *p);
        let sprite = world.get::<&Sprite>(player_entity).map(|s| *s);
        match (pos, sprite) {
            (Ok(pos), Ok(sprite)) => (pos.x + sprite.w / 2.0, pos.y + sprite.h / 2.0),
            _ => return,
        }
    };

    let mut shooters: Vec<(Entity, Position, Sprite)> = Vec::new();
    for (entity, (pos, sprite, reload, _fighter)) in
        world.query_mut::<(&Position, &Sprite, &mut Reload, &Fighter)>()
    {
        if entity == player_entity {
            continue;
        }
        reload.0 -= 1;
        if reload.0 <= 0 {
            shooters.push((entity, *pos, *sprite));
        }
    }

    for (entity, pos, sprite) in shooters {
        world_setup::spawn_alien_bullet(world, pos, sprite, player_center, catalog);
        if let Ok(mut reload) = world.get::<&mut Reload>(entity) {
            reload.0 = rng.gen_range(0..ALIEN_RELOAD_MAX);
        }
        events.push(SimEvent::AlienFired);
    }
}
