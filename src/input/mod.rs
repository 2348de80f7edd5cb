//! Input handling: key event types, bindable actions, and the router that
//! turns key events into engine effects.

/// Platform-agnostic key events.
pub mod event;
/// Bindable game actions.
pub mod keyboard;
/// Converts key events into effects.
pub mod router;

pub use event::{KeyInput, Modifiers};
pub use keyboard::KeyAction;
pub use router::{Effect, InputRouter, KeyChord};
