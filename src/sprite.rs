//! Visual representation identifiers.
//!
//! The crate never draws anything itself. It only decides *which* sprite
//! should be shown; the host maps a [`Visual`] to pixel art, CSS classes,
//! a texture, or whatever its display surface needs.

use crate::behavior::BehaviorState;

/// Which sprite the companion should currently display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visual {
    /// Awake and following the pointer.
    #[default]
    Active,
    /// Awake but resting.
    Idle,
    /// Asleep.
    Sleeping,
    /// Asleep with the affection indicator showing.
    SleepingAffection,
}

impl Visual {
    /// Every visual, in chain order.
    pub const ALL: [Self; 4] = [
        Self::Active,
        Self::Idle,
        Self::Sleeping,
        Self::SleepingAffection,
    ];

    /// Select the visual for a state and affection overlay.
    ///
    /// The overlay only shows on top of [`BehaviorState::Sleeping`].
    #[must_use]
    pub fn from_state(state: BehaviorState, affection: bool) -> Self {
        match (state, affection) {
            (BehaviorState::Active, _) => Self::Active,
            (BehaviorState::Idle, _) => Self::Idle,
            (BehaviorState::Sleeping, false) => Self::Sleeping,
            (BehaviorState::Sleeping, true) => Self::SleepingAffection,
        }
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
            Self::Sleeping => "sleeping",
            Self::SleepingAffection => "sleeping+affection",
        }
    }

    /// Class list a DOM host applies to the sprite container.
    #[must_use]
    pub fn css_classes(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
            Self::Sleeping => "sleeping",
            Self::SleepingAffection => "sleeping affection",
        }
    }

    /// Tiny text rendition, used by the bundled viewer's window title.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Active => "=^.^=",
            Self::Idle => "=^-^=",
            Self::Sleeping => "=-.-= zZ",
            Self::SleepingAffection => "=-.-= <3",
        }
    }

    /// Whether the companion is asleep in this visual.
    #[must_use]
    pub fn is_sleeping(self) -> bool {
        matches!(self, Self::Sleeping | Self::SleepingAffection)
    }
}
