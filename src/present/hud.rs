//! DOM HUD presenter (wasm32)
//!
//! Mirrors score/lives into the page and toggles the game-over overlay.
//! The 3D scene itself is mounted by the page's view layer; this adapter
//! only handles the readouts the core is contractually allowed to drive.
//! Every element lookup tolerates absence: the session never notices a
//! missing node.

use glam::Vec3;
use web_sys::Document;

use super::Presenter;

/// Element ids this presenter drives
const SCORE_ID: &str = "score";
const LIVES_ID: &str = "lives";
const OVERLAY_ID: &str = "game-over";
const OVERLAY_SCORE_ID: &str = "go-score";

pub struct HudPresenter {
    document: Option<Document>,
    /// Driver sets this from Settings::effective_screen_shake
    pub shake_enabled: bool,
    last_score: Option<u64>,
    last_lives: Option<u8>,
}

impl HudPresenter {
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
            shake_enabled: true,
            last_score: None,
            last_lives: None,
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(doc) = &self.document {
            if let Some(el) = doc.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_overlay_visible(&self, visible: bool) {
        if let Some(doc) = &self.document {
            if let Some(el) = doc.get_element_by_id(OVERLAY_ID) {
                let class = if visible { "overlay" } else { "overlay hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }
}

impl Default for HudPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for HudPresenter {
    fn add_to_scene(&mut self, id: u32) {
        // Renderable construction belongs to the view layer
        log::debug!("scene add {}", id);
    }

    fn remove_from_scene(&mut self, id: u32) {
        log::debug!("scene remove {}", id);
    }

    fn spawn_explosion(&mut self, pos: Vec3, size: f32) {
        log::debug!("explosion at {:?} size {}", pos, size);
    }

    fn add_shake(&mut self, strength: f32, _duration: f32) {
        if !self.shake_enabled {
            return;
        }
        // Expose shake strength as a CSS variable for the view layer
        if let Some(doc) = &self.document {
            if let Some(body) = doc.body() {
                let _ = body
                    .style()
                    .set_property("--shake", &format!("{:.3}", strength));
            }
        }
    }

    fn update_ui(&mut self, score: u64, lives: u8) {
        // Avoid redundant DOM writes on unchanged frames
        if self.last_score != Some(score) {
            self.set_text(SCORE_ID, &score.to_string());
            self.last_score = Some(score);
        }
        if self.last_lives != Some(lives) {
            self.set_text(LIVES_ID, &lives.to_string());
            self.last_lives = Some(lives);
        }
    }

    fn show_game_over(&mut self, score: u64) {
        self.set_text(OVERLAY_SCORE_ID, &score.to_string());
        self.set_overlay_visible(true);
    }

    fn hide_game_over(&mut self) {
        self.set_overlay_visible(false);
    }
}
