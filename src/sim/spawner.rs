//! Timer-driven asteroid spawner
//!
//! A countdown crosses zero, one asteroid spawns, and the interval tightens
//! by a fixed step down to a floor. The ramp is monotonic; only per-asteroid
//! attributes are randomized.

use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Spawner {
    /// Seconds until the next spawn
    pub timer: f32,
    /// Current countdown reset value
    pub interval: f32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            timer: SPAWN_INTERVAL_START,
            interval: SPAWN_INTERVAL_START,
        }
    }

    /// Advance the countdown. Returns true when an asteroid should spawn
    /// this frame (at most one per frame).
    pub fn tick(&mut self, dt: f32) -> bool {
        self.timer -= dt;
        if self.timer > 0.0 {
            return false;
        }

        self.timer = self.interval;
        self.interval = (self.interval - SPAWN_INTERVAL_STEP).max(SPAWN_INTERVAL_MIN);
        true
    }

    /// Back to the initial ramp
    pub fn reset(&mut self) {
        self.timer = SPAWN_INTERVAL_START;
        self.interval = SPAWN_INTERVAL_START;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_spawn_before_first_interval() {
        let mut spawner = Spawner::new();
        let dt = 0.01;
        let mut spawns = 0;
        // 0.9s of frames: the initial countdown has not yet elapsed
        for _ in 0..90 {
            if spawner.tick(dt) {
                spawns += 1;
            }
        }
        assert_eq!(spawns, 0);

        // One more frame crosses zero
        assert!(spawner.tick(dt));
    }

    #[test]
    fn test_interval_tightens_per_spawn() {
        let mut spawner = Spawner::new();
        assert!(spawner.tick(1.0));
        assert!((spawner.interval - (SPAWN_INTERVAL_START - SPAWN_INTERVAL_STEP)).abs() < 1e-6);

        assert!(spawner.tick(1.0));
        assert!(
            (spawner.interval - (SPAWN_INTERVAL_START - 2.0 * SPAWN_INTERVAL_STEP)).abs() < 1e-6
        );
    }

    #[test]
    fn test_interval_floor() {
        let mut spawner = Spawner::new();
        for _ in 0..2000 {
            spawner.tick(10.0);
        }
        assert!((spawner.interval - SPAWN_INTERVAL_MIN).abs() < 1e-6);

        // Stays at the floor
        spawner.tick(10.0);
        assert!((spawner.interval - SPAWN_INTERVAL_MIN).abs() < 1e-6);
    }

    #[test]
    fn test_at_most_one_spawn_per_frame() {
        let mut spawner = Spawner::new();
        // A frame gap spanning several intervals still yields a single spawn
        assert!(spawner.tick(10.0));
        assert!(spawner.timer > 0.0);
    }

    #[test]
    fn test_reset_restores_ramp() {
        let mut spawner = Spawner::new();
        for _ in 0..50 {
            spawner.tick(1.0);
        }
        spawner.reset();
        assert_eq!(spawner.timer, SPAWN_INTERVAL_START);
        assert_eq!(spawner.interval, SPAWN_INTERVAL_START);
    }
}
