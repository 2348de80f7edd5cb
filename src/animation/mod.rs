//! Keyframe orientation animation: clips and the frame-driven player.

pub mod clip;
pub mod player;

pub use clip::{ClipTiming, OrientationClip};
pub use player::AnimationPlayer;
