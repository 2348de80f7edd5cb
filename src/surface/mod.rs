//! The rendering collaborator the engine draws through.
//!
//! The engine never talks to a GPU or window directly. Each frame it hands
//! a [`FrameSnapshot`] to a [`RenderSurface`]; the surface also owns the
//! debug overlay's visibility.

/// Recording surface for tests and embedders.
pub mod headless;

use glam::{Mat4, Quat, Vec3};

use crate::camera::ViewState;

pub use headless::HeadlessSurface;

/// Show/hide capability of a debug overlay.
pub trait DebugOverlay {
    /// Make the overlay visible.
    fn show(&mut self);
    /// Hide the overlay.
    fn hide(&mut self);
    /// Whether the overlay is currently visible.
    fn is_visible(&self) -> bool;
}

/// Flip overlay visibility. Returns the new visibility.
pub fn toggle_overlay(overlay: &mut dyn DebugOverlay) -> bool {
    if overlay.is_visible() {
        overlay.hide();
    } else {
        overlay.show();
    }
    overlay.is_visible()
}

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    /// Current (or destination) view.
    pub view: ViewState,
    /// Live camera orientation.
    pub camera_orientation: Quat,
    /// Combined view-projection matrix.
    pub view_proj: Mat4,
    /// World position of the left paddle.
    pub left_paddle: Vec3,
    /// World position of the right paddle.
    pub right_paddle: Vec3,
    /// Overlay visibility at the time of the frame.
    pub overlay_visible: bool,
    /// Progress of the running view transition, `None` when at rest.
    pub transition_progress: Option<f32>,
}

/// A render target driven by [`PongEngine`](crate::PongEngine).
pub trait RenderSurface: DebugOverlay {
    /// Draw one frame.
    fn render(&mut self, frame: &FrameSnapshot);

    /// The drawable area changed size.
    fn resize(&mut self, width: u32, height: u32);

    /// Supply the main-menu markup. Called once at engine init.
    fn set_menu_content(&mut self, content: &str);
}
