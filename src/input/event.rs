/// Platform-agnostic input events.
///
/// These are fed into [`Companion::handle_event`](crate::Companion::handle_event).
///
/// # Example
///
/// ```
/// # use cursor_companion::{Companion, InputEvent, Options};
/// # use web_time::Instant;
/// let mut companion = Companion::new(&Options::default())?;
/// companion.start(Instant::now())?;
/// let _ = companion.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
///     Instant::now(),
/// );
/// # Ok::<(), cursor_companion::CompanionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute viewport position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
}

/// Latest known pointer coordinates. No history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Horizontal position in pixels.
    pub x: f32,
    /// Vertical position in pixels.
    pub y: f32,
}

impl PointerSample {
    /// Sample as a vector.
    #[must_use]
    pub fn to_vec2(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }
}

impl From<InputEvent> for PointerSample {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::CursorMoved { x, y } => Self { x, y },
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::dpi::PhysicalPosition<f64>> for InputEvent {
    fn from(position: winit::dpi::PhysicalPosition<f64>) -> Self {
        Self::CursorMoved {
            x: position.x as f32,
            y: position.y as f32,
        }
    }
}
