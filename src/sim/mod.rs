//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod events;
pub mod input;
pub mod session;
pub mod spawner;

pub use collision::{find_bullet_hits, find_player_hit, spheres_overlap};
pub use entity::{Asteroid, Bullet, Player};
pub use events::SimEvent;
pub use input::{Action, InputState};
pub use session::{Phase, Session, Shake};
pub use spawner::Spawner;
