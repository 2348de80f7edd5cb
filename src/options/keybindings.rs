use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key chords.
///
/// A chord is zero or more `Shift+`, `Ctrl+`, `Alt+` prefixes followed by
/// a key name, e.g. `"ArrowUp"`, `"w"`, `"Space"`, `"Shift+Ctrl+Alt+I"`.
/// The key name is compared case-sensitively against both the logical key
/// and the physical key code of an event.
///
/// Actions listed in a TOML file replace only their own default chords;
/// unlisted actions keep theirs. An empty list unbinds an action.
pub struct KeybindingOptions {
    /// Maps action → chords (e.g. `ToggleView` → `["Space"]`).
    #[serde(deserialize_with = "merge_over_defaults")]
    pub bindings: HashMap<KeyAction, Vec<String>>,
}

fn merge_over_defaults<'de, D>(
    deserializer: D,
) -> Result<HashMap<KeyAction, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = HashMap::<KeyAction, Vec<String>>::deserialize(deserializer)?;
    let mut bindings = KeybindingOptions::default().bindings;
    bindings.extend(overrides);
    Ok(bindings)
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::LeftPaddleUp, vec!["ArrowUp".into()]),
            (KeyAction::LeftPaddleDown, vec!["ArrowDown".into()]),
            (KeyAction::RightPaddleUp, vec!["w".into()]),
            (KeyAction::RightPaddleDown, vec!["s".into()]),
            (KeyAction::ToggleView, vec!["Space".into()]),
            (
                KeyAction::ToggleDebugOverlay,
                vec![
                    "Shift+Ctrl+Alt+I".into(),
                    "Shift+Ctrl+Alt+i".into(),
                    // Physical key; Alt rewrites the logical character on macOS.
                    "Shift+Ctrl+Alt+KeyI".into(),
                ],
            ),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Chords bound to `action`, empty when unbound.
    #[must_use]
    pub fn chords(&self, action: KeyAction) -> &[String] {
        self.bindings.get(&action).map_or(&[], Vec::as_slice)
    }
}
