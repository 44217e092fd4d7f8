//! Behavioral state machine: the companion's mood and the timers that move
//! it along the `Active → Idle → Sleeping → affection` chain.

mod controller;
pub mod timers;

use std::time::Duration;

pub use controller::StateController;
pub use timers::{TimerHandle, TimerPurpose, TimerTable};
use web_time::Instant;

use crate::sprite::Visual;

/// The companion's exclusive behavioral mode.
///
/// Affection is not a state of its own: it is an overlay on
/// [`BehaviorState::Sleeping`], tracked separately by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BehaviorState {
    /// Pointer moved recently.
    #[default]
    Active,
    /// Pointer has been still for the idle delay.
    Idle,
    /// Pointer has been still long enough to fall asleep.
    Sleeping,
}

/// Validated delays for the timeout chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorTimings {
    /// Stillness before `Active → Idle`.
    pub idle: Duration,
    /// Time idle before `Idle → Sleeping`.
    pub sleep: Duration,
    /// Time asleep before the affection overlay appears.
    pub affection: Duration,
    /// How long the affection overlay stays up.
    pub affection_duration: Duration,
}

impl Default for BehaviorTimings {
    fn default() -> Self {
        Self {
            idle: Duration::from_millis(800),
            sleep: Duration::from_millis(2000),
            affection: Duration::from_millis(3000),
            affection_duration: Duration::from_millis(2000),
        }
    }
}

/// A change of visual representation, stamped with when it happened.
///
/// For timer-driven changes `at` is the timer's deadline, not the time the
/// host got around to advancing the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Visual before the change.
    pub from: Visual,
    /// Visual after the change.
    pub to: Visual,
    /// Instant the change took effect.
    pub at: Instant,
}
