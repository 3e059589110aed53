//! Simulation constants and tuning parameters.
//!
//! All values are compiled-in; there is no runtime configuration.

/// Target frame rate. The caller is responsible for pacing `tick` calls;
/// the simulation itself is frame-coupled with no delta-time scaling.
pub const FPS: i32 = 60;

// --- Field bounds ---

/// Playfield width in pixels.
pub const FIELD_WIDTH: i32 = 800;

/// Playfield height in pixels.
pub const FIELD_HEIGHT: i32 = 600;

// --- Player ---

/// Player movement speed (pixels per frame).
pub const PLAYER_SPEED: f32 = 4.0;

/// Frames between player shots.
pub const PLAYER_RELOAD: i32 = 8;

/// Player spawn position after a stage reset.
pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_START_Y: f32 = 100.0;

// --- Bullets ---

/// Player bullet speed (pixels per frame, rightward).
pub const BULLET_SPEED: f32 = 16.0;

/// Alien bullet speed multiplier applied to the aim slope.
pub const ALIEN_BULLET_SPEED: f32 = 8.0;

/// Upper bound (exclusive) for an enemy's reseeded reload counter.
pub const ALIEN_RELOAD_MAX: i32 = FPS * 2;

// --- Enemy spawning ---

/// Enemy spawn countdown reseed range (frames), lower bound inclusive.
pub const ENEMY_SPAWN_MIN: i32 = 30;

/// Enemy spawn countdown reseed range (frames), upper bound exclusive.
pub const ENEMY_SPAWN_MAX: i32 = 90;

/// Enemy leftward speed range (pixels per frame), inclusive.
pub const ENEMY_SPEED_MIN: i32 = 2;
pub const ENEMY_SPEED_MAX: i32 = 5;

// --- Starfield ---

/// Number of stars in the recycled starfield array.
pub const MAX_STARS: usize = 200;

/// Maximum star scroll speed; individual speeds are in [1, STAR_SPEED].
pub const STAR_SPEED: i32 = 4;

/// Length of a star's rendered streak in pixels.
pub const STAR_STREAK_LENGTH: i32 = 3;

/// Grayscale intensity per unit of star speed.
pub const STAR_INTENSITY_STEP: i32 = 32;

// --- Debris ---

/// Downward acceleration added to debris vertical velocity each frame.
pub const DEBRIS_GRAVITY: f32 = 0.5;

/// Debris fragment lifetime in frames.
pub const DEBRIS_LIFETIME: i32 = FPS * 2;

/// Maximum horizontal drift speed for a debris fragment (inclusive).
pub const DEBRIS_DRIFT_MAX: i32 = 4;

/// Upward burst speed range for debris fragments (inclusive).
pub const DEBRIS_BURST_MIN: i32 = 5;
pub const DEBRIS_BURST_MAX: i32 = 16;

// --- Explosions ---

/// Position jitter box half-extent for explosion particles (pixels).
pub const EXPLOSION_JITTER: i32 = 32;

/// Upper bound (exclusive) for explosion particle lifetime (frames).
pub const EXPLOSION_LIFETIME_MAX: i32 = FPS * 3;

// --- Stage ---

/// Frames between player death and the stage reset.
pub const STAGE_RESET_DELAY: i32 = FPS * 3;

// --- Input ---

/// Size of the boolean keyboard state array (distinct key codes).
pub const MAX_KEYBOARD_KEYS: usize = 350;
