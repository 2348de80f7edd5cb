//! A single non-looping orientation keyframe clip.

use std::time::Duration;

use glam::Quat;

use crate::util::easing::EasingFunction;

/// Playback timing expressed the way keyframe animations are authored:
/// a frame count played at a frame rate, scaled by a speed ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipTiming {
    /// Index of the final keyframe (the first is frame 0).
    pub frame_count: f32,
    /// Keyframes per second at speed ratio 1.
    pub frame_rate: f32,
    /// Playback speed multiplier.
    pub speed_ratio: f32,
}

impl ClipTiming {
    /// Keyframes advanced per second of wall time. Zero when the timing is
    /// degenerate (non-positive or non-finite rate or ratio).
    #[must_use]
    pub fn frames_per_second(&self) -> f32 {
        let rate = self.frame_rate * self.speed_ratio;
        if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            0.0
        }
    }

    /// Whether the clip should complete immediately instead of playing.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        !(self.frame_count.is_finite() && self.frame_count > 0.0)
            || self.frames_per_second() == 0.0
    }

    /// Wall-clock length of one playback.
    #[must_use]
    pub fn duration(&self) -> Duration {
        if self.is_instant() {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f32(self.frame_count / self.frames_per_second())
            .unwrap_or(Duration::MAX)
    }
}

impl Default for ClipTiming {
    fn default() -> Self {
        Self {
            frame_count: 50.0,
            frame_rate: 50.0,
            speed_ratio: 1.0,
        }
    }
}

/// Interpolation from a start orientation (keyframe 0) to a target
/// orientation (the final keyframe).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationClip {
    /// Debug name.
    pub name: &'static str,
    /// Orientation at keyframe 0.
    pub from: Quat,
    /// Orientation at the final keyframe.
    pub to: Quat,
    /// Playback timing.
    pub timing: ClipTiming,
    /// Easing applied to progress.
    pub easing: EasingFunction,
}

impl OrientationClip {
    /// Clip with linear easing.
    #[must_use]
    pub fn new(
        name: &'static str,
        from: Quat,
        to: Quat,
        timing: ClipTiming,
    ) -> Self {
        Self {
            name,
            from,
            to,
            timing,
            easing: EasingFunction::Linear,
        }
    }

    /// Replace the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Orientation at normalized progress `t` in `[0, 1]`.
    ///
    /// Interpolates along the shortest arc: when `from` and `to` lie in
    /// opposite hemispheres the target is negated first, so the camera
    /// never swings the long way round. `t >= 1` returns `to` unchanged
    /// (bitwise), so a finished clip leaves no residual drift.
    #[must_use]
    pub fn sample(&self, t: f32) -> Quat {
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.easing.evaluate(t);
        let to = if self.from.dot(self.to) < 0.0 {
            -self.to
        } else {
            self.to
        };
        self.from.slerp(to, eased).normalize()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use glam::EulerRot;

    use super::*;

    #[test]
    fn default_timing_is_one_second() {
        let timing = ClipTiming::default();
        assert_eq!(timing.duration(), Duration::from_secs(1));
        assert!(!timing.is_instant());
    }

    #[test]
    fn speed_ratio_shortens_duration() {
        let timing = ClipTiming {
            speed_ratio: 2.0,
            ..ClipTiming::default()
        };
        assert_eq!(timing.duration(), Duration::from_millis(500));
    }

    #[test]
    fn degenerate_timing_is_instant() {
        for timing in [
            ClipTiming { frame_rate: 0.0, ..ClipTiming::default() },
            ClipTiming { speed_ratio: -1.0, ..ClipTiming::default() },
            ClipTiming { frame_count: 0.0, ..ClipTiming::default() },
            ClipTiming { frame_rate: f32::NAN, ..ClipTiming::default() },
        ] {
            assert!(timing.is_instant(), "{timing:?}");
            assert_eq!(timing.duration(), Duration::ZERO);
        }
    }

    #[test]
    fn sample_endpoints() {
        let from = Quat::IDENTITY;
        let to = Quat::from_rotation_y(1.0);
        let clip =
            OrientationClip::new("test", from, to, ClipTiming::default());
        assert!(clip.sample(0.0).abs_diff_eq(from, 1e-6));
        assert_eq!(clip.sample(1.0), to);
        assert_eq!(clip.sample(7.0), to);
    }

    #[test]
    fn sample_follows_shortest_arc() {
        // Same rotation as +0.4 rad about Y, expressed in the opposite
        // hemisphere. Halfway must be ~0.2 rad, not ~π.
        let to = -Quat::from_rotation_y(0.4);
        let clip = OrientationClip::new(
            "test",
            Quat::IDENTITY,
            to,
            ClipTiming::default(),
        );
        let mid = clip.sample(0.5);
        assert!(mid.angle_between(Quat::from_rotation_y(0.2)) < 5e-3);
    }

    #[test]
    fn sample_between_view_targets_stays_unit() {
        let from = Quat::from_euler(EulerRot::YXZ, 0.0, PI, PI);
        let to = Quat::from_euler(EulerRot::YXZ, PI, FRAC_PI_2, 0.0);
        let clip =
            OrientationClip::new("test", from, to, ClipTiming::default());
        for step in 0..=10 {
            let q = clip.sample(step as f32 / 10.0);
            assert!(q.is_normalized());
        }
    }

    #[test]
    fn easing_reshapes_progress_only() {
        let to = Quat::from_rotation_x(1.0);
        let clip = OrientationClip::new(
            "test",
            Quat::IDENTITY,
            to,
            ClipTiming::default(),
        )
        .with_easing(EasingFunction::QuadraticIn);
        let quarter = clip.sample(0.5);
        assert!(quarter.angle_between(Quat::from_rotation_x(0.25)) < 5e-3);
        assert_eq!(clip.sample(1.0), to);
    }
}
