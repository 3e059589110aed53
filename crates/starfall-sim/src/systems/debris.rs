//! Debris aging: fragments move, accelerate downward under gravity,
//! and expire when their life counter runs out.

use hecs::{Entity, World};

use starfall_core::components::Debris;
use starfall_core::constants::DEBRIS_GRAVITY;
use starfall_core::types::{Position, Velocity};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, (pos, vel, debris)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Debris)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;

        // Gravity applies after the move; it affects next frame's step.
        vel.y += DEBRIS_GRAVITY;

        debris.life -= 1;
        if debris.life <= 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
