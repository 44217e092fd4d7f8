//! Host-facing lifecycle wrapper around the state controller and the follow
//! loop.
//!
//! The host owns a [`Companion`] and drives it from a single thread: pointer
//! events go to [`handle_event`](Companion::handle_event), every display
//! refresh calls [`frame`](Companion::frame), and teardown calls
//! [`dispose`](Companion::dispose). All three take `&mut self`, so an event is
//! always processed to completion before the next frame reads the state.

use web_time::Instant;

use crate::{
    behavior::{StateController, Transition},
    error::CompanionError,
    input::{InputEvent, PointerSample},
    motion::{Anchor, Frame, FrameTiming, MotionRenderer},
    options::Options,
    sprite::Visual,
};

/// Where a [`Companion`] is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Constructed, not yet listening or rendering.
    Created,
    /// Listening for pointer events and producing frames.
    Running,
    /// Torn down; every callback is a no-op.
    Disposed,
}

/// A cursor-following companion.
#[derive(Debug)]
pub struct Companion {
    controller: StateController,
    renderer: MotionRenderer,
    timing: FrameTiming,
    lifecycle: Lifecycle,
}

impl Companion {
    /// Validate `options` and build a companion that has not started yet.
    pub fn new(options: &Options) -> Result<Self, CompanionError> {
        let timings = options.timing.validate()?;
        let speed_factor = options.motion.validate()?;
        Ok(Self {
            controller: StateController::new(timings),
            renderer: MotionRenderer::new(speed_factor),
            timing: FrameTiming::new(),
            lifecycle: Lifecycle::Created,
        })
    }

    /// Use a different anchoring rule for the sprite origin.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.renderer.set_anchor(anchor);
        self
    }

    /// Begin listening and rendering.
    ///
    /// The companion wakes up `Active` with the idle timer armed from `now`.
    /// Starting twice, or after disposal, is rejected and changes nothing.
    pub fn start(&mut self, now: Instant) -> Result<(), CompanionError> {
        match self.lifecycle {
            Lifecycle::Created => {
                let _ = self.controller.begin(now);
                self.lifecycle = Lifecycle::Running;
                log::info!("companion started");
                Ok(())
            }
            Lifecycle::Running => {
                log::warn!("companion start requested while already running");
                Err(CompanionError::AlreadyStarted)
            }
            Lifecycle::Disposed => {
                log::warn!("companion start requested after disposal");
                Err(CompanionError::Disposed)
            }
        }
    }

    /// Feed one input event. Ignored unless running.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Option<Transition> {
        if self.lifecycle != Lifecycle::Running {
            return None;
        }
        self.controller.on_pointer_move(PointerSample::from(event), now)
    }

    /// Shorthand for a [`InputEvent::CursorMoved`] event.
    pub fn pointer_moved(
        &mut self,
        x: f32,
        y: f32,
        now: Instant,
    ) -> Option<Transition> {
        self.handle_event(InputEvent::CursorMoved { x, y }, now)
    }

    /// Fire every behavior timer due by `now` without rendering.
    pub fn advance(&mut self, now: Instant) -> Vec<Transition> {
        if self.lifecycle != Lifecycle::Running {
            return Vec::new();
        }
        self.controller.advance(now)
    }

    /// Produce the next frame: fire due timers, then apply one easing step.
    ///
    /// Returns `None` unless running.
    pub fn frame(&mut self, now: Instant) -> Option<Frame> {
        if self.lifecycle != Lifecycle::Running {
            return None;
        }
        let _ = self.controller.advance(now);
        let _ = self.timing.record(now);
        Some(
            self.renderer
                .tick(self.controller.pointer(), self.controller.visual()),
        )
    }

    /// Tear down: cancel every timer and stop the follow loop. Idempotent.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.controller.dispose();
        self.lifecycle = Lifecycle::Disposed;
        log::info!(
            "companion disposed after {} frames ({} stalled)",
            self.timing.frames(),
            self.timing.stalls()
        );
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether the companion is listening and rendering.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Current visual representation.
    #[must_use]
    pub fn visual(&self) -> Visual {
        self.controller.visual()
    }

    /// Behavior state machine.
    #[must_use]
    pub fn controller(&self) -> &StateController {
        &self.controller
    }

    /// Follow loop.
    #[must_use]
    pub fn renderer(&self) -> &MotionRenderer {
        &self.renderer
    }

    /// Frame timing statistics.
    #[must_use]
    pub fn frame_timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Earliest instant at which a behavior timer is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.lifecycle != Lifecycle::Running {
            return None;
        }
        self.controller.next_deadline()
    }
}

impl Drop for Companion {
    fn drop(&mut self) {
        self.dispose();
    }
}
