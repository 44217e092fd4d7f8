//! Owns the behavioral state, the pointer sample, and the timer table.

use web_time::Instant;

use super::{
    timers::{TimerPurpose, TimerTable},
    BehaviorState, BehaviorTimings, Transition,
};
use crate::{input::PointerSample, sprite::Visual};

/// Drives behavior from pointer movement and elapsed time.
///
/// Movement always wakes the companion and re-arms the idle timer. Each stage
/// of the timeout chain schedules the next one when it is entered, so exactly
/// one timer is live while the chain is running.
///
/// Nothing fires on its own: the owner calls [`advance`](Self::advance) with
/// the current time (typically once per frame) and every timer due by then
/// fires in deadline order.
#[derive(Debug)]
pub struct StateController {
    timings: BehaviorTimings,
    state: BehaviorState,
    affection: bool,
    pointer: PointerSample,
    timers: TimerTable,
    last_movement: Option<Instant>,
    disposed: bool,
}

impl StateController {
    /// Create a controller in `Active` with no timers armed.
    #[must_use]
    pub fn new(timings: BehaviorTimings) -> Self {
        Self {
            timings,
            state: BehaviorState::Active,
            affection: false,
            pointer: PointerSample::default(),
            timers: TimerTable::new(),
            last_movement: None,
            disposed: false,
        }
    }

    /// Enter `Active` and arm the idle timer from `now`, as if the pointer
    /// had just stopped. Used when the host starts the companion.
    pub fn begin(&mut self, now: Instant) -> Option<Transition> {
        if self.disposed {
            return None;
        }
        self.wake(now)
    }

    /// Record a pointer movement.
    ///
    /// Timers already due by `now` fire first, so the wake is reported from
    /// the state the timeline had reached. Then wakes the companion if it is
    /// not already `Active` (clearing the affection overlay) and replaces all
    /// pending timers with a fresh idle timer. Returns the wake transition,
    /// if any.
    pub fn on_pointer_move(
        &mut self,
        sample: PointerSample,
        now: Instant,
    ) -> Option<Transition> {
        if self.disposed {
            return None;
        }
        let _ = self.advance(now);
        self.pointer = sample;
        self.last_movement = Some(now);
        self.wake(now)
    }

    fn wake(&mut self, now: Instant) -> Option<Transition> {
        let from = self.visual();
        self.state = BehaviorState::Active;
        self.affection = false;

        let _ = self.timers.cancel_all();
        let _ = self
            .timers
            .schedule(TimerPurpose::IdleEntry, now + self.timings.idle);

        self.transition(from, now)
    }

    /// Fire every timer due at or before `now`, in deadline order.
    ///
    /// Follow-up timers are scheduled from the deadline of the timer that
    /// fired, so advancing late still reproduces the exact timeline.
    pub fn advance(&mut self, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();
        if self.disposed {
            return transitions;
        }
        while let Some((purpose, deadline)) = self.timers.pop_due(now) {
            if let Some(transition) = self.fire(purpose, deadline) {
                transitions.push(transition);
            }
        }
        transitions
    }

    fn fire(
        &mut self,
        purpose: TimerPurpose,
        deadline: Instant,
    ) -> Option<Transition> {
        let from = self.visual();
        match (purpose, self.state, self.affection) {
            (TimerPurpose::IdleEntry, BehaviorState::Active, _) => {
                self.state = BehaviorState::Idle;
                let _ = self.timers.schedule(
                    TimerPurpose::SleepEntry,
                    deadline + self.timings.sleep,
                );
            }
            (TimerPurpose::SleepEntry, BehaviorState::Idle, _) => {
                self.state = BehaviorState::Sleeping;
                let _ = self.timers.schedule(
                    TimerPurpose::AffectionEntry,
                    deadline + self.timings.affection,
                );
            }
            (TimerPurpose::AffectionEntry, BehaviorState::Sleeping, false) => {
                self.affection = true;
                let _ = self.timers.schedule(
                    TimerPurpose::AffectionExpiry,
                    deadline + self.timings.affection_duration,
                );
            }
            (TimerPurpose::AffectionExpiry, BehaviorState::Sleeping, true) => {
                // Stays asleep without the overlay until the pointer moves.
                self.affection = false;
            }
            (purpose, state, affection) => {
                log::warn!(
                    "ignoring {} timer in {state:?} (affection: {affection})",
                    purpose.name()
                );
                return None;
            }
        }
        self.transition(from, deadline)
    }

    fn transition(&self, from: Visual, at: Instant) -> Option<Transition> {
        let to = self.visual();
        if from == to {
            return None;
        }
        log::debug!("companion {} -> {}", from.name(), to.name());
        Some(Transition { from, to, at })
    }

    /// Cancel all timers and turn every later call into a no-op.
    pub fn dispose(&mut self) {
        let cancelled = self.timers.cancel_all();
        if !self.disposed {
            log::trace!("state controller disposed ({cancelled} timers cancelled)");
        }
        self.disposed = true;
    }

    /// Current exclusive state.
    #[must_use]
    pub fn state(&self) -> BehaviorState {
        self.state
    }

    /// Whether the affection overlay is showing.
    #[must_use]
    pub fn has_affection(&self) -> bool {
        self.affection
    }

    /// Visual representation for the current state and overlay.
    #[must_use]
    pub fn visual(&self) -> Visual {
        Visual::from_state(self.state, self.affection)
    }

    /// Latest pointer sample.
    #[must_use]
    pub fn pointer(&self) -> PointerSample {
        self.pointer
    }

    /// When the pointer last moved, if it has.
    #[must_use]
    pub fn last_movement(&self) -> Option<Instant> {
        self.last_movement
    }

    /// Pending timers.
    #[must_use]
    pub fn timers(&self) -> &TimerTable {
        &self.timers
    }

    /// Earliest instant at which [`advance`](Self::advance) would do work.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Delays this controller runs with.
    #[must_use]
    pub fn timings(&self) -> BehaviorTimings {
        self.timings
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Check that the live timers match the current state.
    ///
    /// `Active` and `Idle` each carry exactly their own exit timer; sleeping
    /// without the overlay carries at most the affection-entry timer (none
    /// once the overlay has come and gone); the overlay carries exactly its
    /// expiry timer. A disposed controller carries nothing.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let pending: Vec<TimerPurpose> = self.timers.pending().collect();
        if self.disposed {
            return pending.is_empty();
        }
        match (self.state, self.affection) {
            (BehaviorState::Active, false) => {
                pending == [TimerPurpose::IdleEntry]
            }
            (BehaviorState::Idle, false) => pending == [TimerPurpose::SleepEntry],
            (BehaviorState::Sleeping, false) => {
                pending.is_empty() || pending == [TimerPurpose::AffectionEntry]
            }
            (BehaviorState::Sleeping, true) => {
                pending == [TimerPurpose::AffectionExpiry]
            }
            (_, true) => false,
        }
    }
}
