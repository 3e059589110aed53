//! Events emitted by the simulation for frontend feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Side;

/// Notable state transitions from one frame, returned inside the
/// frame snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A hostile fighter entered at the right edge.
    EnemySpawned { x: f32, y: f32 },
    /// The player fired a bullet.
    PlayerFired,
    /// An enemy fired an aimed bullet at the player.
    AlienFired,
    /// A non-player fighter was destroyed (shot down or scrolled off).
    FighterDestroyed { side: Side },
    /// The player fighter was destroyed; the post-death interlude begins.
    PlayerDestroyed,
    /// The stage was reinitialized.
    StageReset,
}
