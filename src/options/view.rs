use std::f32::consts::{FRAC_PI_2, PI};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::ClipTiming;
use crate::camera::{ViewState, ViewTargets};
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "View", inline)]
#[serde(default)]
/// View targets and transition timing.
pub struct ViewOptions {
    /// View the session starts in.
    #[schemars(title = "Initial View")]
    pub initial: ViewState,
    /// Gameplay orientation as `[x, y, z]` Euler angles in radians
    /// (pitch, yaw, roll).
    #[schemars(skip)]
    pub gameplay_euler: [f32; 3],
    /// Menu orientation as `[x, y, z]` Euler angles in radians.
    #[schemars(skip)]
    pub menu_euler: [f32; 3],
    /// Transition length in keyframes.
    #[schemars(title = "Frames", range(min = 1.0, max = 240.0), extend("step" = 1.0))]
    pub frame_count: f32,
    /// Keyframes per second.
    #[schemars(title = "Frame Rate", range(min = 1.0, max = 240.0), extend("step" = 1.0))]
    pub frame_rate: f32,
    /// Playback speed multiplier.
    #[schemars(title = "Speed Ratio", range(min = 0.1, max = 4.0), extend("step" = 0.1))]
    pub speed_ratio: f32,
    /// Easing applied to transition progress.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Animate from the identity orientation into the initial view on
    /// startup instead of starting on target.
    #[schemars(title = "Animate On Start")]
    pub animate_on_start: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            initial: ViewState::Menu,
            gameplay_euler: [PI, 0.0, PI],
            menu_euler: [FRAC_PI_2, PI, 0.0],
            frame_count: 50.0,
            frame_rate: 50.0,
            speed_ratio: 1.0,
            easing: EasingFunction::Linear,
            animate_on_start: true,
        }
    }
}

impl ViewOptions {
    /// Orientation targets for both views.
    #[must_use]
    pub fn targets(&self) -> ViewTargets {
        ViewTargets::from_euler(self.gameplay_euler, self.menu_euler)
    }

    /// Playback timing shared by every view transition.
    #[must_use]
    pub fn clip_timing(&self) -> ClipTiming {
        ClipTiming {
            frame_count: self.frame_count,
            frame_rate: self.frame_rate,
            speed_ratio: self.speed_ratio,
        }
    }
}
