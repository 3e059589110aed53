//! Simulation engine — the core of the game.
//!
//! `SimEngine` owns the hecs ECS world and all per-stage state,
//! advances the world one fixed step per `tick`, and produces
//! `FrameSnapshot`s. Completely headless, enabling deterministic
//! testing; the caller paces `tick` at the target frame rate.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::constants::STAGE_RESET_DELAY;
use starfall_core::events::SimEvent;
use starfall_core::input::{KeyBindings, KeyState};
use starfall_core::resources::SpriteCatalog;
use starfall_core::state::FrameSnapshot;
use starfall_core::types::Star;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
    /// Key codes for the five logical inputs.
    pub bindings: KeyBindings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bindings: KeyBindings::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all stage state.
pub struct SimEngine {
    world: World,
    rng: ChaCha8Rng,
    catalog: SpriteCatalog,
    bindings: KeyBindings,
    /// Handle into the fighter set; `None` while the player is dead.
    player: Option<hecs::Entity>,
    stars: Vec<Star>,
    enemy_spawn_timer: i32,
    /// Counts down only while the player is dead.
    stage_reset_timer: i32,
    background_x: i32,
    frame: u64,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimEngine {
    /// Create a new engine and perform the initial stage reset.
    pub fn new(config: SimConfig, catalog: SpriteCatalog) -> Self {
        let mut engine = Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            catalog,
            bindings: config.bindings,
            player: None,
            stars: Vec::new(),
            enemy_spawn_timer: 0,
            stage_reset_timer: STAGE_RESET_DELAY,
            background_x: 0,
            frame: 0,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        engine.reset_stage();
        engine
    }

    /// Advance the simulation by one frame and return the resulting
    /// snapshot. `keys` is the collaborator-provided keyboard state
    /// for this frame.
    pub fn tick(&mut self, keys: &KeyState) -> FrameSnapshot {
        self.run_systems(keys);

        // Post-death interlude: the reset countdown runs only while
        // the player handle is empty.
        if self.player.is_none() {
            self.stage_reset_timer -= 1;
            if self.stage_reset_timer <= 0 {
                self.reset_stage();
            }
        }

        self.frame += 1;
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, &self.stars, self.background_x, self.frame, events)
    }

    /// Clear every collection, re-seed the player and starfield, and
    /// re-arm the spawn and reset timers. Called once at startup and
    /// again whenever the post-death countdown elapses.
    pub fn reset_stage(&mut self) {
        self.world.clear();
        self.player = Some(world_setup::spawn_player(&mut self.world, &self.catalog));
        world_setup::seed_starfield(&mut self.stars, &mut self.rng);
        self.enemy_spawn_timer = 0;
        self.background_x = 0;
        self.stage_reset_timer = STAGE_RESET_DELAY;
        self.events.push(SimEvent::StageReset);
    }

    /// Run all systems in the fixed per-frame order. The sequence is
    /// a contract (offscreen kills happen before enemy fire, bullet
    /// hits before bounds checks, clamping after all movement).
    fn run_systems(&mut self, keys: &KeyState) {
        // 1. Background scroll
        systems::background::run(&mut self.background_x);
        // 2. Starfield scroll
        systems::starfield::run(&mut self.stars);
        // 3. Player input, reload, fire
        systems::player::run(
            &mut self.world,
            self.player,
            keys,
            &self.bindings,
            &self.catalog,
            &mut self.events,
        );
        // 4. Fighter movement, offscreen kill, debris burst, removal
        systems::fighters::run(
            &mut self.world,
            &mut self.player,
            &mut self.rng,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 5. Enemy fire timers and aimed shots
        systems::enemy_fire::run(
            &mut self.world,
            self.player,
            &mut self.rng,
            &self.catalog,
            &mut self.events,
        );
        // 6. Bullet movement, collision, bounds removal
        systems::bullets::run(&mut self.world, &mut self.despawn_buffer);
        // 7. Enemy spawn timer
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.enemy_spawn_timer,
            &self.catalog,
            &mut self.events,
        );
        // 8. Explosion particle aging
        systems::explosions::run(&mut self.world, &mut self.despawn_buffer);
        // 9. Debris aging and gravity
        systems::debris::run(&mut self.world, &mut self.despawn_buffer);
        // 10. Player clamp to bounds
        systems::clip::run(&mut self.world, self.player);
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Handle of the live player fighter, if any.
    pub fn player(&self) -> Option<hecs::Entity> {
        self.player
    }

    /// Current frame number.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Current scrolling background offset.
    pub fn background_x(&self) -> i32 {
        self.background_x
    }

    /// The recycled starfield array.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Get a mutable reference to the world (for tests that set up
    /// specific scenarios).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Remaining frames on the stage-reset countdown.
    #[cfg(test)]
    pub fn stage_reset_timer(&self) -> i32 {
        self.stage_reset_timer
    }
}
