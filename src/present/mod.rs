//! Presentation adapter seam
//!
//! The simulation core never touches a scene graph or the DOM. It emits
//! `SimEvent`s and exposes plain state; a `Presenter` mirrors both into
//! whatever display exists. Entity ids are the only handles crossing the
//! boundary, so the core stays testable without a graphics context.

#[cfg(target_arch = "wasm32")]
pub mod hud;

use glam::Vec3;

use crate::sim::{Session, SimEvent};

/// One-way sink for presentation requests. No method has a failure mode
/// visible to the caller; a missing display element is the adapter's
/// problem and the session continues regardless.
pub trait Presenter {
    /// A new entity needs a renderable; `id` is its only handle
    fn add_to_scene(&mut self, id: u32);
    /// The entity's renderable should be released
    fn remove_from_scene(&mut self, id: u32);
    /// Fire-and-forget cosmetic burst
    fn spawn_explosion(&mut self, pos: Vec3, size: f32);
    /// Camera perturbation request (max-merged upstream, never additive)
    fn add_shake(&mut self, strength: f32, duration: f32);
    /// Display sync for the score/lives readout
    fn update_ui(&mut self, score: u64, lives: u8);
    fn show_game_over(&mut self, score: u64);
    fn hide_game_over(&mut self);
}

/// Mirror one frame's worth of drained events plus current state into a
/// presenter. Called by the driver after every session step.
pub fn apply<P: Presenter>(presenter: &mut P, session: &Session, events: &[SimEvent]) {
    for event in events {
        match *event {
            SimEvent::BulletSpawned { id } | SimEvent::AsteroidSpawned { id } => {
                presenter.add_to_scene(id);
            }
            SimEvent::BulletDespawned { id } | SimEvent::AsteroidDespawned { id } => {
                presenter.remove_from_scene(id);
            }
            SimEvent::Explosion { pos, size } => presenter.spawn_explosion(pos, size),
            SimEvent::PlayerHit { .. } => {}
            SimEvent::GameOver { score } => presenter.show_game_over(score),
            SimEvent::Restarted => presenter.hide_game_over(),
        }
    }

    if session.shake.is_active() {
        presenter.add_shake(session.shake.strength, session.shake.time);
    }

    presenter.update_ui(session.score, session.lives);
}

/// Presenter that discards everything. Headless runs and tests.
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn add_to_scene(&mut self, _id: u32) {}
    fn remove_from_scene(&mut self, _id: u32) {}
    fn spawn_explosion(&mut self, _pos: Vec3, _size: f32) {}
    fn add_shake(&mut self, _strength: f32, _duration: f32) {}
    fn update_ui(&mut self, _score: u64, _lives: u8) {}
    fn show_game_over(&mut self, _score: u64) {}
    fn hide_game_over(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::InputState;

    /// Records calls for assertions
    #[derive(Debug, Default)]
    struct Recorder {
        scene: Vec<u32>,
        explosions: usize,
        game_over_shown: usize,
        game_over_hidden: usize,
        last_ui: Option<(u64, u8)>,
    }

    impl Presenter for Recorder {
        fn add_to_scene(&mut self, id: u32) {
            self.scene.push(id);
        }
        fn remove_from_scene(&mut self, id: u32) {
            self.scene.retain(|&x| x != id);
        }
        fn spawn_explosion(&mut self, _pos: Vec3, _size: f32) {
            self.explosions += 1;
        }
        fn add_shake(&mut self, _strength: f32, _duration: f32) {}
        fn update_ui(&mut self, score: u64, lives: u8) {
            self.last_ui = Some((score, lives));
        }
        fn show_game_over(&mut self, _score: u64) {
            self.game_over_shown += 1;
        }
        fn hide_game_over(&mut self) {
            self.game_over_hidden += 1;
        }
    }

    #[test]
    fn test_scene_mirrors_spawn_and_despawn() {
        let mut session = Session::new(7);
        let mut recorder = Recorder::default();

        // Run long enough for asteroids to spawn and bullets to expire
        let input = InputState {
            shoot: true,
            ..Default::default()
        };
        for _ in 0..200 {
            session.update(0.016, &input);
            let events = session.drain_events();
            apply(&mut recorder, &session, &events);
        }

        // Scene handle set matches the live entity set exactly
        let mut live: Vec<u32> = session
            .bullets
            .iter()
            .map(|b| b.id)
            .chain(session.asteroids.iter().map(|a| a.id))
            .collect();
        live.sort_unstable();
        let mut mirrored = recorder.scene.clone();
        mirrored.sort_unstable();
        assert_eq!(mirrored, live);
        assert_eq!(recorder.last_ui, Some((session.score, session.lives)));
    }

    #[test]
    fn test_game_over_overlay_toggles() {
        let mut session = Session::new(7);
        let mut recorder = Recorder::default();
        let input = InputState::default();

        // Force a game over through the public surface: repeated planted hits
        for _ in 0..3 {
            let mut rng = <rand_pcg::Pcg32 as rand::SeedableRng>::seed_from_u64(1);
            let mut a = crate::sim::Asteroid::new(9999, &mut rng);
            a.pos = session.player.pos;
            a.speed = 0.0;
            session.asteroids.push(a);
            for _ in 0..40 {
                session.update(0.01, &input);
            }
        }
        let events = session.drain_events();
        apply(&mut recorder, &session, &events);
        assert_eq!(recorder.game_over_shown, 1);

        // Restart hides the overlay
        session.update(0.01, &input);
        session.update(
            0.01,
            &InputState {
                restart: true,
                ..Default::default()
            },
        );
        let events = session.drain_events();
        apply(&mut recorder, &session, &events);
        assert_eq!(recorder.game_over_hidden, 1);
        assert_eq!(recorder.last_ui, Some((0, 3)));
    }
}
