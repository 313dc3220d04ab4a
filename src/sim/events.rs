//! Presentation-relevant simulation events
//!
//! The session appends events while stepping; the driver drains them once
//! per frame and mirrors them into the presentation layer. Entity ids are
//! the only scene-graph handles the core ever sees.

use glam::Vec3;

/// One event per presentation-visible state change
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// A bullet entered the playfield
    BulletSpawned { id: u32 },
    /// A bullet left the playfield or hit an asteroid
    BulletDespawned { id: u32 },
    /// An asteroid entered the playfield
    AsteroidSpawned { id: u32 },
    /// An asteroid was destroyed or slipped past the player
    AsteroidDespawned { id: u32 },
    /// Fire-and-forget cosmetic burst
    Explosion { pos: Vec3, size: f32 },
    /// Lives changed after a player-asteroid collision
    PlayerHit { lives: u8 },
    /// The session froze; show the overlay with the final score
    GameOver { score: u64 },
    /// A restart wiped the session back to initial state
    Restarted,
}
