//! Astro Dodge entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use astro_dodge::consts::MAX_FRAME_DT;
    use astro_dodge::present::{apply, hud::HudPresenter};
    use astro_dodge::sim::{Action, InputState, Phase, Session};
    use astro_dodge::{HighScores, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session,
        input: InputState,
        presenter: HudPresenter,
        highscores: HighScores,
        last_time: f64,
        last_phase: Phase,
    }

    impl Game {
        fn new(seed: u64, settings: &Settings) -> Self {
            let mut presenter = HudPresenter::new();
            presenter.shake_enabled = settings.effective_screen_shake();
            Self {
                session: Session::new(seed),
                input: InputState::default(),
                presenter,
                highscores: HighScores::load(),
                last_time: 0.0,
                last_phase: Phase::Playing,
            }
        }

        /// One animation frame: step the session with a clamped real-time
        /// delta and mirror the result into the HUD
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                1.0 / 60.0
            };
            self.last_time = time;

            // A backgrounded tab can hand us a huge gap; clamp it so
            // entities cannot tunnel through the collision radius
            self.session.update(dt.min(MAX_FRAME_DT), &self.input);
            let events = self.session.drain_events();

            // Record the run on the Playing -> GameOver transition
            if self.session.phase == Phase::GameOver && self.last_phase == Phase::Playing {
                let rank = self
                    .highscores
                    .add_score(self.session.score, js_sys::Date::now());
                if let Some(rank) = rank {
                    log::info!("New high score, rank {}", rank);
                    self.highscores.save();
                }
            }
            self.last_phase = self.session.phase;

            apply(&mut self.presenter, &self.session, &events);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Astro Dodge starting...");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, &settings)));

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Astro Dodge running (seed {})", seed);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key_code(&event.code()) {
                    event.prevent_default();
                    game.borrow_mut().input.set(action, true);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key_code(&event.code()) {
                    game.borrow_mut().input.set(action, false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use astro_dodge::present::{NullPresenter, apply};
    use astro_dodge::sim::{InputState, Phase, Session};

    env_logger::init();
    log::info!("Astro Dodge (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Short scripted run as a smoke check: strafe and hold fire for 30
    // simulated seconds at 60 Hz
    let mut session = Session::new(0xD0D6E);
    let mut presenter = NullPresenter;
    let mut input = InputState {
        shoot: true,
        ..Default::default()
    };

    for frame in 0..1800 {
        // Sweep left and right across the lane
        input.left = (frame / 120) % 2 == 0;
        input.right = !input.left;

        session.update(1.0 / 60.0, &input);
        let events = session.drain_events();
        apply(&mut presenter, &session, &events);

        if session.phase == Phase::GameOver {
            break;
        }
    }

    println!(
        "Demo finished: score {}, lives {}, {} asteroids on screen",
        session.score,
        session.lives,
        session.asteroids.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
