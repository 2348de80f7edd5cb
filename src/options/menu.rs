use serde::{Deserialize, Serialize};

/// Where the main-menu HTML comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MenuOptions {
    /// File path or `http(s)://` URL. `None` renders an empty menu.
    pub source: Option<String>,
}
