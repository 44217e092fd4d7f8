//! Input handling: pointer events and the sample they leave behind.

/// Platform-agnostic input events.
pub mod event;

pub use event::{InputEvent, PointerSample};
