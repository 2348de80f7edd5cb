use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Paddles", inline)]
#[serde(default)]
/// Paddle movement tunables.
pub struct PaddleOptions {
    /// Offset change per key press, in scene meters.
    #[schemars(title = "Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub speed: f32,
    /// Paddles are clamped to `[-limit, +limit]`.
    #[schemars(title = "Travel Limit", range(min = 0.1, max = 2.0), extend("step" = 0.01))]
    pub limit: f32,
    /// Horizontal distance of each paddle from the court center.
    #[schemars(skip)]
    pub x_offset: f32,
}

impl Default for PaddleOptions {
    fn default() -> Self {
        Self {
            speed: 0.07,
            limit: 0.66,
            x_offset: 1.4,
        }
    }
}
