//! Systems that operate on the simulation world each frame.
//!
//! The engine calls these in a fixed documented order; the sequence
//! is a contract, and reordering is a conscious design decision.

pub mod background;
pub mod bullets;
pub mod clip;
pub mod debris;
pub mod enemy_fire;
pub mod explosions;
pub mod fighters;
pub mod player;
pub mod snapshot;
pub mod spawner;
pub mod starfield;
