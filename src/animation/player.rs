//! Frame-driven playback of orientation clips.

use glam::Quat;

use super::clip::OrientationClip;

/// A clip in flight and how many keyframes it has advanced.
#[derive(Debug, Clone, Copy)]
struct ActiveClip {
    clip: OrientationClip,
    frame: f32,
}

impl ActiveClip {
    fn progress(&self) -> f32 {
        if self.clip.timing.is_instant() {
            1.0
        } else {
            (self.frame / self.clip.timing.frame_count).min(1.0)
        }
    }
}

/// Plays at most one orientation clip at a time, advanced by the
/// per-frame tick of the render loop.
///
/// Clips play once (no looping). [`begin`](Self::begin) on a busy player
/// halts the current clip first; the halted clip's last written value
/// stays on the animated orientation.
#[derive(Debug, Default)]
pub struct AnimationPlayer {
    active: Option<ActiveClip>,
}

impl AnimationPlayer {
    /// An idle player.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playing `clip` from keyframe 0, halting any clip in flight.
    pub fn begin(&mut self, clip: OrientationClip) {
        self.halt();
        if clip.timing.frames_per_second() == 0.0 {
            log::warn!(
                "clip '{}' has no playback rate; completing on next tick",
                clip.name
            );
        }
        log::debug!(
            "begin clip '{}' ({:?})",
            clip.name,
            clip.timing.duration()
        );
        self.active = Some(ActiveClip { clip, frame: 0.0 });
    }

    /// Stop the clip in flight without touching the animated value.
    pub fn halt(&mut self) {
        if let Some(active) = self.active.take() {
            log::debug!(
                "halt clip '{}' at {:.0}%",
                active.clip.name,
                active.progress() * 100.0
            );
        }
    }

    /// Whether a clip is in flight.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    /// Normalized progress of the clip in flight, `None` when idle.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.active.as_ref().map(ActiveClip::progress)
    }

    /// The clip in flight.
    #[must_use]
    pub fn current_clip(&self) -> Option<&OrientationClip> {
        self.active.as_ref().map(|active| &active.clip)
    }

    /// Advance by `dt` seconds and write the sampled orientation into
    /// `orientation`.
    ///
    /// When the clip reaches its final keyframe the exact target is
    /// written and the player goes idle. Returns `true` while a clip is
    /// still playing after this tick.
    pub fn tick(&mut self, dt: f32, orientation: &mut Quat) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        active.frame += dt * active.clip.timing.frames_per_second();

        let t = active.progress();
        *orientation = active.clip.sample(t);

        if t >= 1.0 {
            log::debug!("clip '{}' complete", active.clip.name);
            self.active = None;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ClipTiming;

    fn clip_to(to: Quat) -> OrientationClip {
        OrientationClip::new("test", Quat::IDENTITY, to, ClipTiming::default())
    }

    #[test]
    fn idle_tick_leaves_orientation() {
        let mut player = AnimationPlayer::new();
        let mut q = Quat::from_rotation_z(0.3);
        assert!(!player.tick(0.1, &mut q));
        assert_eq!(q, Quat::from_rotation_z(0.3));
        assert_eq!(player.progress(), None);
    }

    #[test]
    fn plays_once_and_pins_target() {
        let target = Quat::from_rotation_y(2.0);
        let mut player = AnimationPlayer::new();
        let mut q = Quat::IDENTITY;
        player.begin(clip_to(target));

        assert!(player.tick(0.5, &mut q));
        assert!((player.progress().unwrap() - 0.5).abs() < 1e-6);
        assert!(q.angle_between(Quat::from_rotation_y(1.0)) < 5e-3);

        assert!(!player.tick(0.5, &mut q));
        assert_eq!(q, target);
        assert!(!player.is_playing());

        // No looping: further ticks do nothing.
        assert!(!player.tick(1.0, &mut q));
        assert_eq!(q, target);
    }

    #[test]
    fn many_small_ticks_finish_on_target() {
        let target = Quat::from_rotation_x(-1.2);
        let mut player = AnimationPlayer::new();
        let mut q = Quat::IDENTITY;
        player.begin(clip_to(target));

        let mut ticks = 0;
        while player.tick(1.0 / 60.0, &mut q) {
            ticks += 1;
            assert!(ticks < 120, "clip never finished");
        }
        assert_eq!(q, target);
    }

    #[test]
    fn halt_keeps_last_value() {
        let mut player = AnimationPlayer::new();
        let mut q = Quat::IDENTITY;
        player.begin(clip_to(Quat::from_rotation_y(1.0)));
        let _ = player.tick(0.25, &mut q);
        let sampled = q;

        player.halt();
        assert!(!player.is_playing());
        let _ = player.tick(1.0, &mut q);
        assert_eq!(q, sampled);
    }

    #[test]
    fn begin_replaces_clip_in_flight() {
        let mut player = AnimationPlayer::new();
        let mut q = Quat::IDENTITY;
        player.begin(clip_to(Quat::from_rotation_y(1.0)));
        let _ = player.tick(0.5, &mut q);

        let second = OrientationClip::new(
            "second",
            q,
            Quat::from_rotation_x(1.0),
            ClipTiming::default(),
        );
        player.begin(second);
        assert_eq!(player.current_clip().map(|c| c.name), Some("second"));
        assert_eq!(player.progress(), Some(0.0));
    }

    #[test]
    fn instant_clip_completes_on_first_tick() {
        let target = Quat::from_rotation_z(0.7);
        let clip = OrientationClip::new(
            "instant",
            Quat::IDENTITY,
            target,
            ClipTiming {
                frame_count: 0.0,
                ..ClipTiming::default()
            },
        );
        let mut player = AnimationPlayer::new();
        let mut q = Quat::IDENTITY;
        player.begin(clip);
        assert!(!player.tick(0.0, &mut q));
        assert_eq!(q, target);
    }

    #[test]
    fn invalid_dt_does_not_advance() {
        let mut player = AnimationPlayer::new();
        let mut q = Quat::IDENTITY;
        player.begin(clip_to(Quat::from_rotation_y(1.0)));
        assert!(player.tick(f32::NAN, &mut q));
        assert!(player.tick(-3.0, &mut q));
        assert_eq!(player.progress(), Some(0.0));
    }
}
