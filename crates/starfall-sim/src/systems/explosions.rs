//! Explosion particle aging: particles drift at constant velocity and
//! expire when their life counter runs out.
//!
//! Nothing in the frame pipeline spawns these; the burst factory in
//! `world_setup` exists for frontends that want to wire a trigger.

use hecs::{Entity, World};

use starfall_core::components::Explosion;
use starfall_core::types::{Position, Velocity};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, (pos, vel, explosion)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Explosion)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;

        explosion.life -= 1;
        if explosion.life <= 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
