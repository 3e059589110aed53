//! Player clamp: after all movement, the player is restricted to the
//! left half of the field horizontally and to the field vertically.

use hecs::{Entity, World};

use starfall_core::components::Sprite;
use starfall_core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use starfall_core::types::Position;

pub fn run(world: &mut World, player: Option<Entity>) {
    let Some(entity) = player else { return };

    if let Ok((pos, sprite)) = world.query_one_mut::<(&mut Position, &Sprite)>(entity) {
        pos.x = pos.x.clamp(0.0, (FIELD_WIDTH / 2) as f32);
        pos.y = pos.y.clamp(0.0, FIELD_HEIGHT as f32 - sprite.h);
    }
}
