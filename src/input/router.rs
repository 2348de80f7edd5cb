//! Key event → [`Effect`] dispatch.
//!
//! The `InputRouter` compiles the `[keybindings]` chord strings once and
//! then answers each key event with an effect descriptor. It holds no
//! transient state: routing the same event twice gives the same effect.

use super::event::{KeyInput, Modifiers};
use super::keyboard::KeyAction;
use crate::options::KeybindingOptions;
use crate::scene::{Direction, PaddleSide};

/// What a key press asks the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Nudge one paddle by the configured speed.
    MovePaddle(PaddleSide, Direction),
    /// Switch between the gameplay and menu views.
    ToggleView,
    /// Show or hide the debug overlay.
    ToggleDebugOverlay,
    /// The key is not bound.
    NoOp,
}

impl Effect {
    /// Whether the platform's default action for the key must be
    /// suppressed (Space would otherwise scroll a hosting page).
    #[must_use]
    pub fn suppresses_default(self) -> bool {
        matches!(self, Self::ToggleView)
    }

    /// Whether the effect changes anything.
    #[must_use]
    pub fn is_noop(self) -> bool {
        self == Self::NoOp
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// KeyChord
// ─────────────────────────────────────────────────────────────────────────────

/// A parsed binding string such as `"Shift+Ctrl+Alt+I"` or `"ArrowUp"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    /// Modifiers that must be held.
    pub modifiers: Modifiers,
    /// Logical key or physical code to match (case-sensitive).
    pub key: String,
}

impl KeyChord {
    /// Parse a chord string. Leading `Shift+`, `Ctrl+` and `Alt+` prefixes
    /// may appear in any order; the remainder is the key name. Returns
    /// `None` when no key name remains.
    #[must_use]
    pub fn parse(chord: &str) -> Option<Self> {
        let mut modifiers = Modifiers::NONE;
        let mut rest = chord;
        loop {
            if let Some(tail) = rest.strip_prefix("Shift+") {
                modifiers.shift = true;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("Ctrl+") {
                modifiers.ctrl = true;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("Alt+") {
                modifiers.alt = true;
                rest = tail;
            } else {
                break;
            }
        }
        if rest.is_empty() {
            return None;
        }
        Some(Self {
            modifiers,
            key: rest.to_owned(),
        })
    }

    /// Whether `input` triggers this chord.
    #[must_use]
    pub fn matches(&self, input: &KeyInput) -> bool {
        input.modifiers.contains(self.modifiers)
            && (input.key == self.key || input.code == self.key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputRouter
// ─────────────────────────────────────────────────────────────────────────────

/// Routes key events to [`Effect`]s using compiled key bindings.
///
/// # Usage
///
/// ```
/// # use pong3d::input::{Effect, InputRouter, KeyInput};
/// # use pong3d::options::KeybindingOptions;
/// let router = InputRouter::new(&KeybindingOptions::default());
/// assert_eq!(router.route(&KeyInput::new(" ", "Space")), Effect::ToggleView);
/// assert_eq!(router.route(&KeyInput::new("q", "KeyQ")), Effect::NoOp);
/// ```
#[derive(Debug, Clone)]
pub struct InputRouter {
    /// Chords ordered most specific first, then by action.
    chords: Vec<(KeyChord, KeyAction)>,
}

impl InputRouter {
    /// Compile the bindings. Malformed chord strings are logged and
    /// skipped.
    #[must_use]
    pub fn new(bindings: &KeybindingOptions) -> Self {
        let mut chords = Vec::new();
        for (&action, strings) in &bindings.bindings {
            for chord in strings {
                match KeyChord::parse(chord) {
                    Some(parsed) => chords.push((parsed, action)),
                    None => {
                        log::warn!("ignoring empty key chord {chord:?} for {action:?}");
                    }
                }
            }
        }
        chords.sort_by(|(a, a_action), (b, b_action)| {
            b.modifiers
                .count()
                .cmp(&a.modifiers.count())
                .then(a_action.cmp(b_action))
        });
        Self { chords }
    }

    /// The action bound to `input`, if any.
    #[must_use]
    pub fn action_for(&self, input: &KeyInput) -> Option<KeyAction> {
        self.chords
            .iter()
            .find(|(chord, _)| chord.matches(input))
            .map(|&(_, action)| action)
    }

    /// Route one key event.
    #[must_use]
    pub fn route(&self, input: &KeyInput) -> Effect {
        match self.action_for(input) {
            Some(action) => action.effect(),
            None => {
                log::trace!("unbound key {:?} ({})", input.key, input.code);
                Effect::NoOp
            }
        }
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(&KeybindingOptions::default())
    }
}
