// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert with unwrap/panic freely.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! A cursor-following sprite companion.
//!
//! The companion eases toward the pointer, faces its direction of travel,
//! and drifts from active to idle to asleep (with a brief show of affection)
//! while the pointer stays still. Any movement wakes it instantly.
//!
//! The crate computes *what* to show *where*; drawing is left to the host.
//!
//! # Key entry points
//!
//! - [`Companion`] - lifecycle wrapper the host drives (`start`, events,
//!   `frame`, `dispose`)
//! - [`behavior::StateController`] - the timer-driven state machine
//! - [`motion::MotionRenderer`] - per-frame easing and facing
//! - [`options::Options`] - the delay and easing configuration
//! - [`Visual`] - which sprite to draw; hosts map it to art via
//!   [`Visual::glyph`], DOM class lists via [`Visual::css_classes`], and
//!   can test [`Visual::is_sleeping`] to dim or pause their own effects
//!
//! # Driving a companion
//!
//! ```
//! use std::time::Duration;
//!
//! use cursor_companion::{Companion, Options, Visual};
//! use web_time::Instant;
//!
//! let t0 = Instant::now();
//! let mut companion = Companion::new(&Options::default())?;
//! companion.start(t0)?;
//!
//! let _ = companion.pointer_moved(120.0, 80.0, t0);
//! let frame = companion.frame(t0 + Duration::from_millis(16));
//! assert_eq!(frame.map(|f| f.visual), Some(Visual::Active));
//!
//! // Three seconds of stillness later the companion is asleep.
//! let frame = companion.frame(t0 + Duration::from_secs(3));
//! assert_eq!(frame.map(|f| f.visual), Some(Visual::Sleeping));
//!
//! companion.dispose();
//! # Ok::<(), cursor_companion::CompanionError>(())
//! ```
//!
//! # Time
//!
//! Nothing in the crate reads the clock. Every operation takes the current
//! [`web_time::Instant`], which makes the timeout chain deterministic under
//! test and lets the host decide where time comes from.

pub mod behavior;
mod companion;
pub mod error;
pub mod input;
pub mod motion;
pub mod options;
pub mod sprite;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use companion::{Companion, Lifecycle};
pub use error::CompanionError;
pub use input::{InputEvent, PointerSample};
pub use motion::{Facing, Frame};
pub use options::Options;
pub use sprite::Visual;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
