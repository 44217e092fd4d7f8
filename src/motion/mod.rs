//! Per-frame motion: easing, facing, and sprite placement.

mod frame_timing;
mod renderer;

pub use frame_timing::FrameTiming;
use glam::Vec2;
pub use renderer::MotionRenderer;

use crate::sprite::Visual;

/// Which way the sprite faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Facing toward negative x.
    Left,
    /// Facing toward positive x.
    Right,
}

impl Facing {
    /// Horizontal scale to apply to a right-facing sprite.
    #[must_use]
    pub fn scale_x(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Where the sprite's top-left corner sits relative to the eased position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Center a sprite of the given size on the eased position.
    Center {
        /// Sprite width and height in pixels.
        size: Vec2,
    },
    /// Place the sprite's top-left corner at a fixed offset.
    Offset(Vec2),
}

impl Default for Anchor {
    fn default() -> Self {
        Self::Center {
            size: Vec2::splat(64.0),
        }
    }
}

impl Anchor {
    /// Top-left corner for a sprite tracking `position`.
    #[must_use]
    pub fn origin(self, position: Vec2) -> Vec2 {
        match self {
            Self::Center { size } => position - size * 0.5,
            Self::Offset(offset) => position + offset,
        }
    }
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Eased position the sprite tracks.
    pub position: Vec2,
    /// Top-left corner to draw the sprite at.
    pub origin: Vec2,
    /// Which way the sprite faces.
    pub facing: Facing,
    /// Which sprite to draw.
    pub visual: Visual,
}
