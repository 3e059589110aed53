//! Player input system: translates held keys into velocity, runs the
//! reload countdown, and fires when the fire key is held with the
//! reload counter at zero.
//!
//! A missing player handle is the valid post-death state, not an
//! error; the system is a no-op until the next stage reset.

use hecs::{Entity, World};

use starfall_core::components::{Reload, Sprite};
use starfall_core::constants::{PLAYER_RELOAD, PLAYER_SPEED};
use starfall_core::events::SimEvent;
use starfall_core::input::{KeyBindings, KeyState};
use starfall_core::resources::SpriteCatalog;
use starfall_core::types::{Position, Velocity};

use crate::world_setup;

pub fn run(
    world: &mut World,
    player: Option<Entity>,
    keys: &KeyState,
    bindings: &KeyBindings,
    catalog: &SpriteCatalog,
    events: &mut Vec<SimEvent>,
) {
    let Some(entity) = player else { return };

    let mut fire = false;
    {
        let Ok(mut vel) = world.get::<&mut Velocity>(entity) else {
            return;
        };
        let Ok(mut reload) = world.get::<&mut Reload>(entity) else {
            return;
        };

        vel.x = 0.0;
        vel.y = 0.0;

        if reload.0 > 0 {
            reload.0 -= 1;
        }

        if keys.pressed(bindings.up) {
            vel.y = -PLAYER_SPEED;
        }
        if keys.pressed(bindings.down) {
            vel.y = PLAYER_SPEED;
        }
        if keys.pressed(bindings.left) {
            vel.x = -PLAYER_SPEED;
        }
        if keys.pressed(bindings.right) {
            vel.x = PLAYER_SPEED;
        }

        if keys.pressed(bindings.fire) && reload.0 == 0 {
            fire = true;
            reload.0 = PLAYER_RELOAD;
        }
    }

    if fire {
        let spawn_info = {
            let pos = world.get::<&Position>(entity).map(|p| *p);
            let sprite = world.get::<&Sprite>(entity).map(|s| s.h);
            match (pos, sprite) {
                (Ok(pos), Ok(player_h)) => Some((pos, player_h)),
                _ => None,
            }
        };
        if let Some((pos, player_h)) = spawn_info {
            world_setup::spawn_player_bullet(world, pos, player_h, catalog);
            events.push(SimEvent::PlayerFired);
        }
    }
}
