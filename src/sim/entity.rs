//! Simulation entities: player ship, bullets, asteroids
//!
//! Entities hold position/velocity/flags only; meshes live behind the
//! presentation adapter. Every `update` is a no-op once `alive` is false,
//! and `destroy` tolerates repeat calls.

use glam::Vec3;
use rand::Rng;

use super::input::InputState;
use crate::consts::*;

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec3,
    pub alive: bool,
    /// Remaining lives, clamped to [0, PLAYER_LIVES]
    pub life: u8,
    /// Seconds until the next shot is allowed
    pub cooldown: f32,
    /// Invulnerability window remaining after a hit
    pub invuln: f32,
    /// Damage-flash timer, sampled by the presentation layer
    pub flash: f32,
    /// Banking roll (radians), eased toward the strafe direction
    pub roll: f32,
    /// Engine-pulse phase (cosmetic)
    pub pulse_t: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, PLAYER_START_Z),
            alive: true,
            life: PLAYER_LIVES,
            cooldown: 0.0,
            invuln: 0.0,
            flash: 0.0,
            roll: 0.0,
            pulse_t: 0.0,
        }
    }

    /// Fixed collision radius
    pub fn radius(&self) -> f32 {
        PLAYER_RADIUS
    }

    /// Advance timers and input-driven movement, then clamp to the playfield
    pub fn update(&mut self, dt: f32, input: &InputState) {
        if !self.alive {
            return;
        }

        if self.cooldown > 0.0 {
            self.cooldown -= dt;
        }
        if self.invuln > 0.0 {
            self.invuln -= dt;
        }
        if self.flash > 0.0 {
            self.flash = (self.flash - dt).max(0.0);
        }

        let move_x = input.axis_x() * PLAYER_SPEED * dt;
        let move_z = input.axis_z() * PLAYER_SPEED * dt;

        self.pos.x = (self.pos.x + move_x).clamp(PLAYER_MIN_X, PLAYER_MAX_X);
        self.pos.z = (self.pos.z + move_z).clamp(PLAYER_MIN_Z, PLAYER_MAX_Z);

        // Bank into the strafe
        let target_roll = (-move_x * 1.2).clamp(-0.5, 0.5);
        self.roll += (target_roll - self.roll) * 0.15;

        self.pulse_t += dt * 10.0;
    }

    /// True iff a shot may be fired this frame
    pub fn can_shoot(&self) -> bool {
        self.alive && self.cooldown <= 0.0
    }

    /// Start the shot cooldown. The caller spawns the bullet.
    pub fn shoot(&mut self) {
        self.cooldown = PLAYER_COOLDOWN;
    }

    /// Muzzle position for a newly fired bullet
    pub fn muzzle(&self) -> Vec3 {
        self.pos - Vec3::new(0.0, 0.0, BULLET_MUZZLE_OFFSET)
    }

    /// Apply damage unless dead or inside the invulnerability window.
    /// Reaching zero life destroys the ship exactly once.
    pub fn take_damage(&mut self, amount: u8) {
        if !self.alive || self.invuln > 0.0 {
            return;
        }

        self.invuln = PLAYER_INVULN;
        self.flash = PLAYER_FLASH;
        self.life = self.life.saturating_sub(amount);

        if self.life == 0 {
            self.destroy();
        }
    }

    /// Idempotent: repeat calls are no-ops
    pub fn destroy(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
    }
}

/// A player bullet, travelling toward -z
#[derive(Debug, Clone)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec3,
    pub alive: bool,
    /// Past positions for trail fade, newest first (not physically meaningful)
    pub trail: Vec<Vec3>,
}

impl Bullet {
    pub fn new(id: u32, pos: Vec3) -> Self {
        Self {
            id,
            pos,
            alive: true,
            trail: Vec::with_capacity(BULLET_TRAIL_LEN),
        }
    }

    pub fn radius(&self) -> f32 {
        BULLET_RADIUS
    }

    /// Advance along -z, record the trail, expire once off-world
    pub fn update(&mut self, dt: f32) {
        if !self.alive {
            return;
        }

        self.pos.z -= BULLET_SPEED * dt;

        self.trail.insert(0, self.pos);
        if self.trail.len() > BULLET_TRAIL_LEN {
            self.trail.pop();
        }

        if self.pos.z < BULLET_DESPAWN_Z {
            self.alive = false;
        }
    }

    pub fn destroy(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
    }
}

/// An inbound asteroid. All random attributes are drawn once at creation.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec3,
    pub alive: bool,
    pub radius: f32,
    /// Forward speed toward +z
    pub speed: f32,
    /// Cosmetic tumble rates per axis (rad/s)
    pub rot_speed: Vec3,
    /// Accumulated rotation, mirrored by the presentation layer
    pub rotation: Vec3,
}

impl Asteroid {
    pub fn new<R: Rng>(id: u32, rng: &mut R) -> Self {
        let radius = rng.random_range(ASTEROID_MIN_RADIUS..ASTEROID_MAX_RADIUS);
        let speed = rng.random_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED);
        let x = rng.random_range(-ASTEROID_SPAWN_HALF_WIDTH..ASTEROID_SPAWN_HALF_WIDTH);
        let z = rng.random_range(ASTEROID_SPAWN_Z_FAR..ASTEROID_SPAWN_Z_NEAR);
        let rot_speed = Vec3::new(
            rng.random_range(-ASTEROID_MAX_ROT..ASTEROID_MAX_ROT),
            rng.random_range(-ASTEROID_MAX_ROT..ASTEROID_MAX_ROT),
            rng.random_range(-ASTEROID_MAX_ROT..ASTEROID_MAX_ROT),
        );

        Self {
            id,
            pos: Vec3::new(x, 0.0, z),
            alive: true,
            radius,
            speed,
            rot_speed,
            rotation: Vec3::ZERO,
        }
    }

    /// Advance toward the player, tumble, expire once past the miss plane
    pub fn update(&mut self, dt: f32) {
        if !self.alive {
            return;
        }

        self.pos.z += self.speed * dt;
        self.rotation += self.rot_speed * dt;

        if self.pos.z > ASTEROID_DESPAWN_Z {
            self.alive = false;
        }
    }

    pub fn destroy(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
    }
}
