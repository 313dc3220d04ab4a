//! Session state machine
//!
//! Owns the entity collections, score/lives, the spawner and the
//! Playing/GameOver phase. One `update(dt, input)` call per frame advances
//! everything in a fixed order; presentation-visible changes accumulate as
//! events for the driver to drain.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{find_bullet_hits, find_player_hit};
use super::entity::{Asteroid, Bullet, Player};
use super::events::SimEvent;
use super::input::InputState;
use super::spawner::Spawner;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Active gameplay
    Playing,
    /// Session frozen; only the restart edge is watched
    GameOver,
}

/// Camera shake request state. Concurrent requests take the maximum of
/// strength and time, never stack additively.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shake {
    pub strength: f32,
    /// Seconds remaining
    pub time: f32,
}

impl Shake {
    /// Merge a new request by max
    pub fn add(&mut self, strength: f32, time: f32) {
        self.strength = self.strength.max(strength);
        self.time = self.time.max(time);
    }

    /// Decay; strength zeroes once the timer runs out
    pub fn tick(&mut self, dt: f32) {
        if self.time > 0.0 {
            self.time -= dt;
        } else {
            self.strength = 0.0;
        }
    }

    pub fn is_active(&self) -> bool {
        self.time > 0.0
    }
}

/// Complete game session (single live instance per page)
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed, for log correlation
    pub seed: u64,
    pub phase: Phase,
    pub score: u64,
    /// Session-level life counter (floor 0); mirrors Player.life
    pub lives: u8,
    pub player: Player,
    /// Alive bullets in spawn order
    pub bullets: Vec<Bullet>,
    /// Alive asteroids in spawn order
    pub asteroids: Vec<Asteroid>,
    pub spawner: Spawner,
    /// Grace period after a player hit; player-asteroid checks are skipped
    /// entirely while positive
    pub hit_cooldown: f32,
    pub shake: Shake,
    rng: Pcg32,
    prev_restart: bool,
    next_id: u32,
    events: Vec<SimEvent>,
}

impl Session {
    /// Create a fresh session with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: Phase::Playing,
            score: 0,
            lives: PLAYER_LIVES,
            player: Player::new(),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            spawner: Spawner::new(),
            hit_cooldown: 0.0,
            shake: Shake::default(),
            rng: Pcg32::seed_from_u64(seed),
            prev_restart: false,
            next_id: 1,
            events: Vec::new(),
        }
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the session by one frame
    pub fn update(&mut self, dt: f32, input: &InputState) {
        self.shake.tick(dt);
        if self.hit_cooldown > 0.0 {
            self.hit_cooldown -= dt;
        }

        let restart_held = input.restart;
        if self.phase == Phase::GameOver {
            // Edge-detected restart only; a held key never auto-restarts
            if restart_held && !self.prev_restart {
                self.restart();
            }
            self.prev_restart = restart_held;
            return;
        }

        self.player.update(dt, input);

        // Level-triggered fire, rate-limited by the cooldown
        if input.shoot && self.player.can_shoot() {
            self.player.shoot();
            self.spawn_bullet();
        }

        if self.spawner.tick(dt) {
            self.spawn_asteroid();
        }

        for bullet in &mut self.bullets {
            bullet.update(dt);
        }
        self.reap_bullets();

        for asteroid in &mut self.asteroids {
            asteroid.update(dt);
        }
        self.reap_asteroids();

        self.resolve_collisions();

        self.prev_restart = restart_held;
    }

    /// Wipe entities and counters back to initial values. Atomic from the
    /// caller's point of view: no frame ever observes a partial reset.
    pub fn restart(&mut self) {
        for bullet in &mut self.bullets {
            bullet.destroy();
        }
        self.reap_bullets();
        for asteroid in &mut self.asteroids {
            asteroid.destroy();
        }
        self.reap_asteroids();

        self.player.destroy();
        self.player = Player::new();

        self.score = 0;
        self.lives = PLAYER_LIVES;
        self.spawner.reset();
        self.hit_cooldown = 0.0;
        self.shake = Shake::default();
        self.phase = Phase::Playing;

        self.events.push(SimEvent::Restarted);
        log::info!("session restarted (seed {})", self.seed);
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn spawn_bullet(&mut self) {
        let id = self.next_entity_id();
        self.bullets.push(Bullet::new(id, self.player.muzzle()));
        self.events.push(SimEvent::BulletSpawned { id });
    }

    fn spawn_asteroid(&mut self) {
        let id = self.next_entity_id();
        self.asteroids.push(Asteroid::new(id, &mut self.rng));
        self.events.push(SimEvent::AsteroidSpawned { id });
    }

    /// Remove dead bullets, emitting despawn events
    fn reap_bullets(&mut self) {
        let events = &mut self.events;
        self.bullets.retain(|b| {
            if b.alive {
                true
            } else {
                events.push(SimEvent::BulletDespawned { id: b.id });
                false
            }
        });
    }

    /// Remove dead asteroids, emitting despawn events
    fn reap_asteroids(&mut self) {
        let events = &mut self.events;
        self.asteroids.retain(|a| {
            if a.alive {
                true
            } else {
                events.push(SimEvent::AsteroidDespawned { id: a.id });
                false
            }
        });
    }

    fn resolve_collisions(&mut self) {
        if !self.player.alive {
            return;
        }

        for (bi, ai) in find_bullet_hits(&self.bullets, &self.asteroids) {
            self.bullets[bi].destroy();
            let asteroid = &mut self.asteroids[ai];
            let pos = asteroid.pos;
            let size = (asteroid.radius * 0.6).max(0.8);
            asteroid.destroy();

            self.score += SCORE_PER_ASTEROID;
            self.events.push(SimEvent::Explosion { pos, size });
            self.shake.add(0.25, 0.12);
        }
        self.reap_bullets();
        self.reap_asteroids();

        // Grace period after the last player hit
        if self.hit_cooldown > 0.0 {
            return;
        }

        if let Some(ai) = find_player_hit(&self.player, &self.asteroids) {
            self.asteroids[ai].destroy();
            self.reap_asteroids();

            self.hit_cooldown = HIT_COOLDOWN;
            self.lives = self.lives.saturating_sub(1);
            let pos = self.player.pos;
            self.events.push(SimEvent::Explosion { pos, size: 1.1 });
            self.shake.add(0.6, 0.2);
            self.player.take_damage(1);
            self.events.push(SimEvent::PlayerHit { lives: self.lives });

            if self.lives == 0 {
                self.events.push(SimEvent::Explosion { pos, size: 2.2 });
                self.shake.add(1.2, 0.35);
                self.phase = Phase::GameOver;
                self.events.push(SimEvent::GameOver { score: self.score });
                log::info!("game over, score {}", self.score);
            }
        }
    }
}
