//! The follow loop: eases the sprite toward the pointer once per frame.

use glam::Vec2;

use super::{Anchor, Facing, Frame};
use crate::{input::PointerSample, sprite::Visual};

/// Eases a tracked position toward the pointer and picks facing.
///
/// Each [`tick`](Self::tick) moves the eased position a fixed fraction of the
/// remaining distance (`eased += (pointer - eased) * speed_factor`). With the
/// factor in `(0, 1]` the position approaches the pointer monotonically and
/// never overshoots.
#[derive(Debug, Clone)]
pub struct MotionRenderer {
    eased: Vec2,
    speed_factor: f32,
    anchor: Anchor,
    facing: Facing,
    visual: Visual,
    ticks: u64,
}

impl MotionRenderer {
    /// Create a renderer at the origin. `speed_factor` must already be
    /// validated (see [`MotionOptions::validate`](crate::options::MotionOptions::validate)).
    #[must_use]
    pub fn new(speed_factor: f32) -> Self {
        Self {
            eased: Vec2::ZERO,
            speed_factor,
            anchor: Anchor::default(),
            facing: Facing::Right,
            visual: Visual::Active,
            ticks: 0,
        }
    }

    /// Use a different anchoring rule for the sprite origin.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Replace the anchoring rule in place.
    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }

    /// Start from a position other than the origin.
    #[must_use]
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.eased = position;
        self
    }

    /// Advance one frame toward `pointer`, displaying `visual`.
    ///
    /// Changing `visual` never moves the eased position.
    pub fn tick(&mut self, pointer: PointerSample, visual: Visual) -> Frame {
        let target = pointer.to_vec2();
        self.eased += (target - self.eased) * self.speed_factor;

        // Compared against the freshly eased position, so facing can flip
        // mid-approach.
        self.facing = if target.x > self.eased.x {
            Facing::Right
        } else {
            Facing::Left
        };

        if visual != self.visual {
            log::trace!(
                "sprite {} -> {} at ({:.1}, {:.1})",
                self.visual.name(),
                visual.name(),
                self.eased.x,
                self.eased.y
            );
            self.visual = visual;
        }
        self.ticks += 1;

        Frame {
            position: self.eased,
            origin: self.anchor.origin(self.eased),
            facing: self.facing,
            visual,
        }
    }

    /// Current eased position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.eased
    }

    /// Facing computed on the last tick.
    #[must_use]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Visual shown on the last tick.
    #[must_use]
    pub fn visual(&self) -> Visual {
        self.visual
    }

    /// Easing factor.
    #[must_use]
    pub fn speed_factor(&self) -> f32 {
        self.speed_factor
    }

    /// Anchoring rule for the sprite origin.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Ticks applied so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(x: f32, y: f32) -> PointerSample {
        PointerSample { x, y }
    }

    #[test]
    fn converges_geometrically_toward_stationary_pointer() {
        let mut renderer = MotionRenderer::new(0.17);
        for n in 1..=5 {
            let frame = renderer.tick(pointer(100.0, 100.0), Visual::Active);
            let expected = 100.0 * (1.0 - 0.83_f32.powi(n));
            assert!(
                (frame.position.x - expected).abs() < 1e-3,
                "n={n}: {} vs {expected}",
                frame.position.x
            );
            assert!((frame.position.y - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn never_overshoots() {
        let mut renderer = MotionRenderer::new(0.17);
        let mut previous = 0.0;
        for _ in 0..200 {
            let x = renderer.tick(pointer(50.0, 0.0), Visual::Active).position.x;
            assert!(x <= 50.0);
            assert!(x >= previous);
            previous = x;
        }
        assert!((previous - 50.0).abs() < 1e-3);
    }

    #[test]
    fn faces_toward_the_pointer() {
        let mut renderer = MotionRenderer::new(0.17);
        let frame = renderer.tick(pointer(100.0, 0.0), Visual::Active);
        assert_eq!(frame.facing, Facing::Right);

        // Mid-approach, the pointer jumps behind the sprite.
        let frame = renderer.tick(pointer(-10.0, 0.0), Visual::Active);
        assert!(frame.position.x > -10.0);
        assert_eq!(frame.facing, Facing::Left);
    }

    #[test]
    fn settled_on_the_pointer_faces_left() {
        let mut renderer = MotionRenderer::new(1.0);
        let frame = renderer.tick(pointer(30.0, 40.0), Visual::Active);
        assert_eq!(frame.position, Vec2::new(30.0, 40.0));
        assert_eq!(frame.facing, Facing::Left);
    }

    #[test]
    fn switching_visual_keeps_position() {
        let mut renderer = MotionRenderer::new(0.17);
        let _ = renderer.tick(pointer(100.0, 0.0), Visual::Active);
        let before = renderer.position();
        let frame = renderer.tick(pointer(before.x, before.y), Visual::Sleeping);
        assert_eq!(frame.position, before);
        assert_eq!(frame.visual, Visual::Sleeping);
        assert_eq!(renderer.visual(), Visual::Sleeping);
        assert_eq!(renderer.ticks(), 2);
    }

    #[test]
    fn origin_follows_the_anchor() {
        let mut centered = MotionRenderer::new(1.0)
            .with_anchor(Anchor::Center { size: Vec2::new(40.0, 20.0) });
        let frame = centered.tick(pointer(100.0, 100.0), Visual::Idle);
        assert_eq!(frame.origin, Vec2::new(80.0, 90.0));

        let mut offset = MotionRenderer::new(1.0)
            .with_anchor(Anchor::Offset(Vec2::new(12.0, -8.0)));
        let frame = offset.tick(pointer(100.0, 100.0), Visual::Idle);
        assert_eq!(frame.origin, Vec2::new(112.0, 92.0));
    }
}
