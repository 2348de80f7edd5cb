//! Game-side scene state: the two paddles.
//!
//! Meshes, materials and the ball live in the rendering collaborator; the
//! scene here only tracks what key effects mutate.

pub mod paddle;

pub use paddle::{clamp_offset, Direction, PaddleActor, PaddleSide};

use crate::options::PaddleOptions;

/// The paddles of one session. Created at engine init, never destroyed
/// before dispose.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    left: PaddleActor,
    right: PaddleActor,
}

impl Scene {
    /// Both paddles centered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            left: PaddleActor::new(PaddleSide::Left),
            right: PaddleActor::new(PaddleSide::Right),
        }
    }

    /// The paddle on `side`.
    #[must_use]
    pub fn paddle(&self, side: PaddleSide) -> &PaddleActor {
        match side {
            PaddleSide::Left => &self.left,
            PaddleSide::Right => &self.right,
        }
    }

    /// Replace the paddle on its own side.
    pub fn set_paddle(&mut self, paddle: PaddleActor) {
        match paddle.side() {
            PaddleSide::Left => self.left = paddle,
            PaddleSide::Right => self.right = paddle,
        }
    }

    /// Move one paddle by a single step. Only that paddle changes.
    pub fn move_paddle(
        &mut self,
        side: PaddleSide,
        direction: Direction,
        tuning: &PaddleOptions,
    ) {
        let moved = self.paddle(side).moved(direction, tuning);
        log::debug!(
            "{side:?} paddle {direction:?} -> {:.2}",
            moved.offset()
        );
        self.set_paddle(moved);
    }

    /// Re-clamp both paddles, e.g. after the limit was tightened.
    pub fn reclamp(&mut self, tuning: &PaddleOptions) {
        self.left = PaddleActor::at(PaddleSide::Left, self.left.offset(), tuning);
        self.right =
            PaddleActor::at(PaddleSide::Right, self.right.offset(), tuning);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
