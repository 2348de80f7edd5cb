use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug overlay settings.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Show the debug overlay when the engine starts.
    #[schemars(title = "Overlay Visible")]
    pub overlay_visible: bool,
}
