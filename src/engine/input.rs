//! Key handling and effect dispatch for [`PongEngine`].

use super::PongEngine;
use crate::input::{Effect, KeyInput};
use crate::scene::{Direction, PaddleSide};
use crate::surface::{toggle_overlay, RenderSurface};

impl<S: RenderSurface> PongEngine<S> {
    /// Route a key-down event and queue its effect for the next
    /// [`update`](Self::update).
    ///
    /// The returned effect lets the caller suppress the platform default
    /// (see [`Effect::suppresses_default`]). Unbound keys return
    /// [`Effect::NoOp`] and queue nothing.
    pub fn handle_key(&mut self, input: &KeyInput) -> Effect {
        let effect = self.router.route(input);
        if !effect.is_noop() {
            self.pending.push_back(effect);
        }
        effect
    }

    /// Apply one effect immediately.
    pub fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::MovePaddle(side, direction) => {
                self.move_paddle(side, direction);
            }
            Effect::ToggleView => self.toggle_view(),
            Effect::ToggleDebugOverlay => {
                let _ = self.toggle_debug_overlay();
            }
            Effect::NoOp => {}
        }
    }

    /// Move one paddle a single step, clamped to the configured limit.
    pub fn move_paddle(&mut self, side: PaddleSide, direction: Direction) {
        self.scene.move_paddle(side, direction, &self.options.paddle);
    }

    /// Switch view and start the camera transition from wherever the
    /// camera currently is.
    pub fn toggle_view(&mut self) {
        self.view.request_toggle(&self.camera, &mut self.animator);
    }

    /// Flip debug overlay visibility. Returns the new visibility.
    pub fn toggle_debug_overlay(&mut self) -> bool {
        let visible = toggle_overlay(&mut self.surface);
        log::debug!("debug overlay {}", if visible { "shown" } else { "hidden" });
        visible
    }

    /// Number of effects waiting for the next update.
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.pending.len()
    }
}
