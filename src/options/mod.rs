//! Centralized game options with TOML preset support.
//!
//! All tweakable settings (paddle tuning, view targets and transition
//! timing, camera, keybindings, debug overlay, menu content) are
//! consolidated here. Options serialize to/from TOML presets.

mod camera;
mod debug;
mod keybindings;
mod menu;
mod paddle;
mod view;

use std::path::Path;

pub use camera::CameraOptions;
pub use debug::DebugOptions;
pub use keybindings::KeybindingOptions;
pub use menu::MenuOptions;
pub use paddle::PaddleOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use view::ViewOptions;

use crate::error::PongError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[paddle]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Paddle movement tunables.
    pub paddle: PaddleOptions,
    /// View targets and transition timing.
    pub view: ViewOptions,
    /// Camera placement and projection.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Debug overlay options.
    pub debug: DebugOptions,
    /// Main-menu content source.
    #[schemars(skip)]
    pub menu: MenuOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PongError::Io`] if the file cannot be read, or
    /// [`PongError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, PongError> {
        let content = std::fs::read_to_string(path).map_err(PongError::Io)?;
        toml::from_str(&content)
            .map_err(|e| PongError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`PongError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), PongError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PongError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PongError::Io)?;
        }
        std::fs::write(path, content).map_err(PongError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
