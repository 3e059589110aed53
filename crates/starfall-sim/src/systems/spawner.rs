//! Enemy spawn timer: counts down every frame and spawns one hostile
//! fighter at the right edge when it expires, then reseeds itself.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::constants::{ENEMY_SPAWN_MAX, ENEMY_SPAWN_MIN};
use starfall_core::events::SimEvent;
use starfall_core::resources::SpriteCatalog;
use starfall_core::types::Position;

use crate::world_setup;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawn_timer: &mut i32,
    catalog: &SpriteCatalog,
    events: &mut Vec<SimEvent>,
) {
    *spawn_timer -= 1;
    if *spawn_timer <= 0 {
        let entity = world_setup::spawn_enemy(world, rng, catalog);
        *spawn_timer = rng.gen_range(ENEMY_SPAWN_MIN..ENEMY_SPAWN_MAX);

        if let Ok(pos) = world.get::<&Position>(entity) {
            events.push(SimEvent::EnemySpawned { x: pos.x, y: pos.y });
        }
    }
}
