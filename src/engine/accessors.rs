//! Read-only queries and direct state access for [`PongEngine`].

use super::PongEngine;
use crate::animation::AnimationPlayer;
use crate::camera::{Camera, ViewController, ViewState};
use crate::scene::Scene;
use crate::surface::RenderSurface;

// ── View ──

impl<S: RenderSurface> PongEngine<S> {
    /// Current (or destination) view.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view.state()
    }

    /// The view state machine.
    #[must_use]
    pub fn view(&self) -> &ViewController {
        &self.view
    }

    /// Whether the latest view transition has finished.
    #[must_use]
    pub fn is_at_target(&self) -> bool {
        self.view.is_at_target(&self.animator)
    }

    /// The orientation clip player.
    #[must_use]
    pub fn animator(&self) -> &AnimationPlayer {
        &self.animator
    }

    /// The live camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

// ── Scene access ──

impl<S: RenderSurface> PongEngine<S> {
    /// Paddle state.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable paddle state, e.g. to place paddles for a new round.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }
}

// ── Surface ──

impl<S: RenderSurface> PongEngine<S> {
    /// The render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether the debug overlay is visible.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.surface.is_visible()
    }

    /// Menu markup loaded at init (empty when unavailable).
    #[must_use]
    pub fn menu_content(&self) -> &str {
        &self.menu_content
    }
}
