//! Standalone window backed by winit.
//!
//! The viewer has no drawing surface of its own: it feeds cursor movement
//! into a [`Companion`], asks for a frame on every redraw, and reports the
//! sprite, facing, and eased position in the window title.
//!
//! ```no_run
//! # use cursor_companion::Viewer;
//! Viewer::builder()
//!     .with_title("companion")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::CompanionError, motion::Frame, options::Options, Companion,
    Facing, InputEvent,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with the default title and options.
    fn new() -> Self {
        Self {
            options: None,
            title: "Cursor Companion".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window that hosts one companion.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), CompanionError> {
        let companion = Companion::new(&self.options)?;
        let event_loop = EventLoop::new()
            .map_err(|e| CompanionError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            companion,
            title: self.title,
            last_title: String::new(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| CompanionError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    companion: Companion,
    title: String,
    last_title: String,
}

fn frame_title(prefix: &str, frame: &Frame) -> String {
    let arrow = match frame.facing {
        Facing::Left => '<',
        Facing::Right => '>',
    };
    format!(
        "{prefix} {} {arrow} ({:.0}, {:.0})",
        frame.visual.glyph(),
        frame.position.x,
        frame.position.y
    )
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes().with_title(&self.title);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.companion.start(Instant::now()) {
            log::error!("Failed to start companion: {e}");
            event_loop.exit();
            return;
        }
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.companion.dispose();
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let _ = self
                    .companion
                    .handle_event(InputEvent::from(position), Instant::now());
            }

            WindowEvent::RedrawRequested => {
                let Some(frame) = self.companion.frame(Instant::now()) else {
                    return;
                };
                let title = frame_title(&self.title, &frame);
                if title != self.last_title {
                    if let Some(window) = &self.window {
                        window.set_title(&title);
                    }
                    self.last_title = title;
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
