use serde::{Deserialize, Serialize};

use super::router::Effect;
use crate::scene::{Direction, PaddleSide};

/// Game actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_view = ["Space"]
/// left_paddle_up = ["ArrowUp"]
/// ```
///
/// Declaration order breaks ties between equally specific chords.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move the left paddle towards `+limit`.
    LeftPaddleUp,
    /// Move the left paddle towards `-limit`.
    LeftPaddleDown,
    /// Move the right paddle towards `+limit`.
    RightPaddleUp,
    /// Move the right paddle towards `-limit`.
    RightPaddleDown,
    /// Switch between the gameplay and menu views.
    ToggleView,
    /// Show or hide the debug overlay.
    ToggleDebugOverlay,
}

impl KeyAction {
    /// The effect this action produces.
    #[must_use]
    pub fn effect(self) -> Effect {
        match self {
            Self::LeftPaddleUp => {
                Effect::MovePaddle(PaddleSide::Left, Direction::Up)
            }
            Self::LeftPaddleDown => {
                Effect::MovePaddle(PaddleSide::Left, Direction::Down)
            }
            Self::RightPaddleUp => {
                Effect::MovePaddle(PaddleSide::Right, Direction::Up)
            }
            Self::RightPaddleDown => {
                Effect::MovePaddle(PaddleSide::Right, Direction::Down)
            }
            Self::ToggleView => Effect::ToggleView,
            Self::ToggleDebugOverlay => Effect::ToggleDebugOverlay,
        }
    }
}
