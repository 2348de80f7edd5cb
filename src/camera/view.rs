//! The two named camera views and the controller that transitions
//! between them.

use glam::{EulerRot, Quat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::core::Camera;
use crate::animation::{AnimationPlayer, ClipTiming, OrientationClip};
use crate::options::ViewOptions;
use crate::util::easing::EasingFunction;

/// Which view the camera is in (or heading to).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Looking at the court.
    Gameplay,
    /// Looking at the main menu.
    #[default]
    Menu,
}

impl ViewState {
    /// The other view.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Gameplay => Self::Menu,
            Self::Menu => Self::Gameplay,
        }
    }

    fn clip_name(self) -> &'static str {
        match self {
            Self::Gameplay => "view:gameplay",
            Self::Menu => "view:menu",
        }
    }
}

/// Convert `[x, y, z]` Euler angles (pitch about X, yaw about Y, roll
/// about Z; applied roll, then pitch, then yaw) to a quaternion.
#[must_use]
pub fn orientation_from_euler(euler: [f32; 3]) -> Quat {
    let [x, y, z] = euler;
    Quat::from_euler(EulerRot::YXZ, y, x, z)
}

/// Fixed target orientation of each view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTargets {
    /// Orientation for [`ViewState::Gameplay`].
    pub gameplay: Quat,
    /// Orientation for [`ViewState::Menu`].
    pub menu: Quat,
}

impl ViewTargets {
    /// Targets from `[x, y, z]` Euler angles.
    #[must_use]
    pub fn from_euler(gameplay: [f32; 3], menu: [f32; 3]) -> Self {
        Self {
            gameplay: orientation_from_euler(gameplay),
            menu: orientation_from_euler(menu),
        }
    }

    /// Target orientation for `state`.
    #[must_use]
    pub fn target(&self, state: ViewState) -> Quat {
        match state {
            ViewState::Gameplay => self.gameplay,
            ViewState::Menu => self.menu,
        }
    }
}

/// Two-state view machine driving camera orientation transitions.
///
/// The controller never advances animations itself: it only halts and
/// begins clips on the [`AnimationPlayer`] the render loop ticks.
#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    targets: ViewTargets,
    timing: ClipTiming,
    easing: EasingFunction,
}

impl ViewController {
    /// Controller starting in `initial`.
    #[must_use]
    pub fn new(
        initial: ViewState,
        targets: ViewTargets,
        timing: ClipTiming,
    ) -> Self {
        Self {
            state: initial,
            targets,
            timing,
            easing: EasingFunction::Linear,
        }
    }

    /// Controller configured from the `[view]` options section.
    #[must_use]
    pub fn from_options(options: &ViewOptions) -> Self {
        Self {
            easing: options.easing,
            ..Self::new(options.initial, options.targets(), options.clip_timing())
        }
    }

    /// Replace targets, timing and easing. The current state is kept; the
    /// new values apply from the next transition.
    pub fn apply_options(&mut self, options: &ViewOptions) {
        self.targets = options.targets();
        self.timing = options.clip_timing();
        self.easing = options.easing;
    }

    /// Current view.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Orientation targets of both views.
    #[must_use]
    pub fn targets(&self) -> &ViewTargets {
        &self.targets
    }

    /// Target orientation of the current view.
    #[must_use]
    pub fn target(&self) -> Quat {
        self.targets.target(self.state)
    }

    /// Transition timing.
    #[must_use]
    pub fn timing(&self) -> ClipTiming {
        self.timing
    }

    /// Flip to the other view and start animating the camera towards it.
    ///
    /// Any clip in flight is halted first, then the live camera
    /// orientation is sampled as the start keyframe. An interrupted
    /// transition therefore continues from wherever the camera actually
    /// is, never from the previous view's target.
    pub fn request_toggle(
        &mut self,
        camera: &Camera,
        animator: &mut AnimationPlayer,
    ) {
        let from = self.state;
        self.state = self.state.toggled();
        log::info!("view {from:?} -> {:?}", self.state);
        self.animate_to_current(camera, animator);
    }

    /// Start a transition from the live camera orientation to the current
    /// view's target.
    pub fn animate_to_current(
        &self,
        camera: &Camera,
        animator: &mut AnimationPlayer,
    ) {
        animator.halt();
        let start = camera.orientation;
        let clip = OrientationClip::new(
            self.state.clip_name(),
            start,
            self.target(),
            self.timing,
        )
        .with_easing(self.easing);
        animator.begin(clip);
    }

    /// Place the camera on the current view's target immediately.
    pub fn snap_to_current(
        &self,
        camera: &mut Camera,
        animator: &mut AnimationPlayer,
    ) {
        animator.halt();
        camera.orientation = self.target();
    }

    /// Whether the latest transition has run its full duration.
    #[must_use]
    pub fn is_at_target(&self, animator: &AnimationPlayer) -> bool {
        !animator.is_playing()
    }
}
