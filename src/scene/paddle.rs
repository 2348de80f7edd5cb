//! Paddle actors and the clamped translation applied by paddle effects.

use glam::Vec3;

use crate::options::PaddleOptions;

/// Which paddle an effect targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddleSide {
    /// Paddle on the negative-x side of the court.
    Left,
    /// Paddle on the positive-x side of the court.
    Right,
}

/// Vertical direction of a paddle move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards `+limit`.
    Up,
    /// Towards `-limit`.
    Down,
}

impl Direction {
    /// `+1.0` for up, `-1.0` for down.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
        }
    }
}

/// Clamp a paddle offset into `[-limit, +limit]`.
///
/// Idempotent. A negative `limit` is treated as its magnitude.
#[must_use]
pub fn clamp_offset(offset: f32, limit: f32) -> f32 {
    let limit = limit.abs();
    offset.max(-limit).min(limit)
}

/// A paddle and its vertical offset in scene meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleActor {
    side: PaddleSide,
    offset: f32,
}

impl PaddleActor {
    /// A centered paddle.
    #[must_use]
    pub fn new(side: PaddleSide) -> Self {
        Self { side, offset: 0.0 }
    }

    /// A paddle at `offset`, clamped to the tuning limit.
    #[must_use]
    pub fn at(side: PaddleSide, offset: f32, tuning: &PaddleOptions) -> Self {
        Self {
            side,
            offset: clamp_offset(offset, tuning.limit),
        }
    }

    /// Which side this paddle is on.
    #[must_use]
    pub fn side(&self) -> PaddleSide {
        self.side
    }

    /// Current vertical offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The paddle after one move of `tuning.speed` in `direction`.
    #[must_use]
    pub fn moved(self, direction: Direction, tuning: &PaddleOptions) -> Self {
        let raw = self.offset + direction.sign() * tuning.speed;
        Self {
            offset: clamp_offset(raw, tuning.limit),
            ..self
        }
    }

    /// World-space center of the paddle.
    #[must_use]
    pub fn position(&self, tuning: &PaddleOptions) -> Vec3 {
        let x = match self.side {
            PaddleSide::Left => -tuning.x_offset,
            PaddleSide::Right => tuning.x_offset,
        };
        Vec3::new(x, self.offset, 0.0)
    }
}
