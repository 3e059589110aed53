//! Entity spawn factories.
//!
//! Creates the player, enemy fighters, bullets, debris bursts, and
//! explosion bursts with appropriate component bundles, and seeds
//! the starfield.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::*;
use starfall_core::constants::*;
use starfall_core::enums::{Side, SpriteId};
use starfall_core::resources::SpriteCatalog;
use starfall_core::types::{calc_slope, Position, SpriteRegion, Star, Velocity};

/// Spawn the player fighter at the fixed start position: 1 health,
/// no velocity, reload ready.
pub fn spawn_player(world: &mut World, catalog: &SpriteCatalog) -> hecs::Entity {
    let size = catalog.size(SpriteId::Player);
    world.spawn((
        Fighter,
        Side::Friendly,
        Position::new(PLAYER_START_X, PLAYER_START_Y),
        Velocity::default(),
        Health(1),
        Reload(0),
        Sprite {
            id: SpriteId::Player,
            w: size.w,
            h: size.h,
        },
    ))
}

/// Reseed the starfield: MAX_STARS stars at random field positions
/// with individual speeds in [1, STAR_SPEED].
pub fn seed_starfield(stars: &mut Vec<Star>, rng: &mut ChaCha8Rng) {
    stars.clear();
    for _ in 0..MAX_STARS {
        stars.push(Star {
            x: rng.gen_range(0..FIELD_WIDTH),
            y: rng.gen_range(0..FIELD_HEIGHT),
            speed: rng.gen_range(1..=STAR_SPEED),
        });
    }
}

/// Spawn a hostile fighter at the right edge with a random vertical
/// position and a random leftward speed. Reload starts at zero, so
/// its first fire check can trigger one frame after spawning.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    catalog: &SpriteCatalog,
) -> hecs::Entity {
    let size = catalog.size(SpriteId::Enemy);
    let y = rng.gen_range(0..FIELD_HEIGHT) as f32;
    let dx = -(rng.gen_range(ENEMY_SPEED_MIN..=ENEMY_SPEED_MAX) as f32);
    world.spawn((
        Fighter,
        Side::Hostile,
        Position::new(FIELD_WIDTH as f32, y),
        Velocity::new(dx, 0.0),
        Health(1),
        Reload(0),
        Sprite {
            id: SpriteId::Enemy,
            w: size.w,
            h: size.h,
        },
    ))
}

/// Spawn a friendly bullet traveling rightward at the fixed bullet
/// speed, vertically centered on the player sprite.
pub fn spawn_player_bullet(
    world: &mut World,
    player_pos: Position,
    player_h: f32,
    catalog: &SpriteCatalog,
) -> hecs::Entity {
    let size = catalog.size(SpriteId::Bullet);
    let y = player_pos.y + player_h / 2.0 - size.h / 2.0;
    world.spawn((
        Bullet,
        Side::Friendly,
        Position::new(player_pos.x, y),
        Velocity::new(BULLET_SPEED, 0.0),
        Health(1),
        Sprite {
            id: SpriteId::Bullet,
            w: size.w,
            h: size.h,
        },
    ))
}

/// Spawn a hostile bullet centered on the firing enemy, aimed at the
/// player's center and scaled by the alien bullet speed. The aim
/// slope is taken from the enemy's top-left corner.
pub fn spawn_alien_bullet(
    world: &mut World,
    enemy_pos: Position,
    enemy_sprite: Sprite,
    player_center: (f32, f32),
    catalog: &SpriteCatalog,
) -> hecs::Entity {
    let size = catalog.size(SpriteId::AlienBullet);
    let x = enemy_pos.x + enemy_sprite.w / 2.0 - size.w / 2.0;
    let y = enemy_pos.y + enemy_sprite.h / 2.0 - size.h / 2.0;
    let (dx, dy) = calc_slope(player_center.0, player_center.1, enemy_pos.x, enemy_pos.y);
    world.spawn((
        Bullet,
        Side::Hostile,
        Position::new(x, y),
        Velocity::new(dx * ALIEN_BULLET_SPEED, dy * ALIEN_BULLET_SPEED),
        Health(1),
        Sprite {
            id: SpriteId::AlienBullet,
            w: size.w,
            h: size.h,
        },
    ))
}

/// Burst a destroyed fighter into up to four debris fragments, one
/// per sprite quadrant. Each fragment starts at the sprite's center
/// with a modest horizontal drift and a strong upward velocity, and
/// inherits the parent's visual resource.
pub fn spawn_debris_burst(
    world: &mut World,
    pos: Position,
    sprite: Sprite,
    rng: &mut ChaCha8Rng,
) {
    let half_w = sprite.w as i32 / 2;
    let half_h = sprite.h as i32 / 2;
    let center = Position::new(pos.x + sprite.w / 2.0, pos.y + sprite.h / 2.0);

    for row in 0..2 {
        for col in 0..2 {
            let dx = rng.gen_range(-DEBRIS_DRIFT_MAX..=DEBRIS_DRIFT_MAX) as f32;
            let dy = -(rng.gen_range(DEBRIS_BURST_MIN..=DEBRIS_BURST_MAX) as f32);
            world.spawn((
                Debris {
                    region: SpriteRegion {
                        x: col * half_w,
                        y: row * half_h,
                        w: half_w,
                        h: half_h,
                    },
                    life: DEBRIS_LIFETIME,
                },
                center,
                Velocity::new(dx, dy),
                Sprite {
                    id: sprite.id,
                    w: sprite.w,
                    h: sprite.h,
                },
            ));
        }
    }
}

/// Burst `count` decorative explosion particles around (x, y):
/// jittered positions, fractional velocities, a color from the
/// four-preset palette, and a random bounded lifetime.
pub fn spawn_explosion_burst(world: &mut World, x: f32, y: f32, count: usize, rng: &mut ChaCha8Rng) {
    for _ in 0..count {
        let px = x + rng.gen_range(-EXPLOSION_JITTER..=EXPLOSION_JITTER) as f32;
        let py = y + rng.gen_range(-EXPLOSION_JITTER..=EXPLOSION_JITTER) as f32;
        let dx = rng.gen_range(-9..=9) as f32 / 10.0;
        let dy = rng.gen_range(-9..=9) as f32 / 10.0;
        let color = Rgb::EXPLOSION_PALETTE[rng.gen_range(0..Rgb::EXPLOSION_PALETTE.len())];
        let life = rng.gen_range(0..EXPLOSION_LIFETIME_MAX);
        world.spawn((
            Explosion { color, life },
            Position::new(px, py),
            Velocity::new(dx, dy),
        ));
    }
}
