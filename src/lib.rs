//! Astro Dodge - a 3D asteroid-dodging shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawner, collisions, session)
//! - `present`: Presentation adapter seam (scene/HUD mirroring)
//! - `settings`: User preferences
//! - `highscores`: LocalStorage leaderboard

pub mod highscores;
pub mod present;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Cap on real-time frame delta fed to the session (tab-background guard)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player movement speed (world units/s)
    pub const PLAYER_SPEED: f32 = 20.0;
    /// Player collision radius
    pub const PLAYER_RADIUS: f32 = 1.0;
    /// Seconds between shots
    pub const PLAYER_COOLDOWN: f32 = 0.25;
    /// Starting (and maximum) life count
    pub const PLAYER_LIVES: u8 = 3;
    /// Invulnerability window after taking a hit (s)
    pub const PLAYER_INVULN: f32 = 0.6;
    /// Damage-flash duration (s), sampled by the presentation layer
    pub const PLAYER_FLASH: f32 = 0.12;
    /// Player spawn position on the z axis
    pub const PLAYER_START_Z: f32 = 8.0;

    /// Playfield bounds for the player
    pub const PLAYER_MIN_X: f32 = -10.0;
    pub const PLAYER_MAX_X: f32 = 10.0;
    pub const PLAYER_MIN_Z: f32 = 4.0;
    pub const PLAYER_MAX_Z: f32 = 12.0;

    /// Bullet forward speed (travels toward -z)
    pub const BULLET_SPEED: f32 = 60.0;
    pub const BULLET_RADIUS: f32 = 0.2;
    /// Muzzle offset ahead of the player nose
    pub const BULLET_MUZZLE_OFFSET: f32 = 1.5;
    /// Bullets past this z have left the playfield
    pub const BULLET_DESPAWN_Z: f32 = -80.0;
    /// Trail history capacity (most-recent-first)
    pub const BULLET_TRAIL_LEN: usize = 6;

    /// Asteroid attribute ranges, drawn once at creation
    pub const ASTEROID_MIN_RADIUS: f32 = 0.8;
    pub const ASTEROID_MAX_RADIUS: f32 = 2.8;
    pub const ASTEROID_MIN_SPEED: f32 = 10.0;
    pub const ASTEROID_MAX_SPEED: f32 = 18.0;
    /// Spawn lane half-width on x
    pub const ASTEROID_SPAWN_HALF_WIDTH: f32 = 10.0;
    /// Spawn depth band on z
    pub const ASTEROID_SPAWN_Z_NEAR: f32 = -60.0;
    pub const ASTEROID_SPAWN_Z_FAR: f32 = -100.0;
    /// Asteroids past this z have slipped behind the player
    pub const ASTEROID_DESPAWN_Z: f32 = 25.0;
    /// Cosmetic tumble rate bound (rad/s, each axis)
    pub const ASTEROID_MAX_ROT: f32 = 1.0;

    /// Spawn interval ramp: start, per-spawn tightening step, floor
    pub const SPAWN_INTERVAL_START: f32 = 0.9;
    pub const SPAWN_INTERVAL_STEP: f32 = 0.001;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.3;

    /// Score awarded per destroyed asteroid
    pub const SCORE_PER_ASTEROID: u64 = 10;
    /// Grace period after a player hit (s)
    pub const HIT_COOLDOWN: f32 = 0.3;
}
