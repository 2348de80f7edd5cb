//! Camera and named-view transitions.
//!
//! Provides a free camera whose orientation is animated between the
//! gameplay and menu views.

/// Core camera struct and projection helpers.
pub mod core;
/// View states, their target orientations, and the view controller.
pub mod view;

pub use self::core::Camera;
pub use view::{orientation_from_euler, ViewController, ViewState, ViewTargets};
