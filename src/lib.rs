// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! View-state and input core of a 3D Pong game.
//!
//! Two paddles move along a court, and the camera swings between a
//! gameplay view and a main-menu view with a quaternion interpolation.
//! Rendering is delegated to a [`surface::RenderSurface`]; everything in
//! this crate is an in-memory update testable without a window.
//!
//! # Key entry points
//!
//! - [`engine::PongEngine`] - the application context (`init` / `update` /
//!   `dispose`)
//! - [`input::InputRouter`] - key events to [`input::Effect`]s
//! - [`camera::ViewController`] - the gameplay/menu state machine
//! - [`options::Options`] - runtime configuration persisted as TOML
//!
//! # Frame loop
//!
//! Key events are routed and queued as they arrive. Once per frame the
//! host calls [`PongEngine::update`], which applies the queue in order,
//! advances the camera transition, then renders one
//! [`surface::FrameSnapshot`].

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod menu;
pub mod options;
pub mod scene;
pub mod surface;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::ViewState;
pub use engine::PongEngine;
pub use error::PongError;
pub use input::{Effect, KeyInput};
pub use options::Options;
pub use surface::{DebugOverlay, HeadlessSurface, RenderSurface};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
