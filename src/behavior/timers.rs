//! Purpose-keyed table of pending behavior timers.
//!
//! Each purpose owns a single slot, so scheduling a purpose that already has
//! a live timer replaces (cancels) the old one. Timers are plain deadlines:
//! nothing fires on its own, the owner drains due entries with
//! [`TimerTable::pop_due`]. An empty table therefore cannot fire anything,
//! which is what makes disposal safe.

use web_time::Instant;

/// What a pending timer will do when it elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerPurpose {
    /// `Active` → `Idle`.
    IdleEntry,
    /// `Idle` → `Sleeping`.
    SleepEntry,
    /// Show the affection overlay while sleeping.
    AffectionEntry,
    /// Hide the affection overlay again.
    AffectionExpiry,
}

impl TimerPurpose {
    /// Every purpose, in slot order.
    pub const ALL: [Self; 4] = [
        Self::IdleEntry,
        Self::SleepEntry,
        Self::AffectionEntry,
        Self::AffectionExpiry,
    ];

    const fn slot(self) -> usize {
        self as usize
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::IdleEntry => "idle-entry",
            Self::SleepEntry => "sleep-entry",
            Self::AffectionEntry => "affection-entry",
            Self::AffectionExpiry => "affection-expiry",
        }
    }
}

/// Identity of one scheduled timer. Never reused within a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    handle: TimerHandle,
    deadline: Instant,
}

/// At most one live timer per [`TimerPurpose`].
#[derive(Debug, Default)]
pub struct TimerTable {
    slots: [Option<PendingTimer>; 4],
    next_handle: u64,
}

impl TimerTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `purpose` to elapse at `deadline`, cancelling any timer
    /// already pending for the same purpose.
    pub fn schedule(
        &mut self,
        purpose: TimerPurpose,
        deadline: Instant,
    ) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        let previous =
            self.slots[purpose.slot()].replace(PendingTimer { handle, deadline });
        if let Some(stale) = previous {
            log::trace!(
                "replaced {} timer {:?} with {handle:?}",
                purpose.name(),
                stale.handle
            );
        } else {
            log::trace!("scheduled {} timer {handle:?}", purpose.name());
        }
        handle
    }

    /// Cancel whatever timer is pending for `purpose`.
    pub fn cancel(&mut self, purpose: TimerPurpose) -> Option<TimerHandle> {
        self.slots[purpose.slot()].take().map(|t| t.handle)
    }

    /// Cancel one timer by identity. Returns `false` if it already elapsed,
    /// was replaced, or was cancelled.
    pub fn cancel_handle(&mut self, handle: TimerHandle) -> bool {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.is_some_and(|t| t.handle == handle));
        match slot {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Cancel every pending timer, returning how many were live.
    pub fn cancel_all(&mut self) -> usize {
        let mut cancelled = 0;
        for slot in &mut self.slots {
            if slot.take().is_some() {
                cancelled += 1;
            }
        }
        cancelled
    }

    /// Whether a timer is pending for `purpose`.
    #[must_use]
    pub fn is_pending(&self, purpose: TimerPurpose) -> bool {
        self.slots[purpose.slot()].is_some()
    }

    /// Deadline of the timer pending for `purpose`, if any.
    #[must_use]
    pub fn deadline(&self, purpose: TimerPurpose) -> Option<Instant> {
        self.slots[purpose.slot()].map(|t| t.deadline)
    }

    /// Handle of the timer pending for `purpose`, if any.
    #[must_use]
    pub fn handle(&self, purpose: TimerPurpose) -> Option<TimerHandle> {
        self.slots[purpose.slot()].map(|t| t.handle)
    }

    /// Number of live timers.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Purposes with a live timer, in slot order.
    pub fn pending(&self) -> impl Iterator<Item = TimerPurpose> + '_ {
        TimerPurpose::ALL
            .into_iter()
            .filter(|&purpose| self.is_pending(purpose))
    }

    /// Earliest deadline across all live timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots.iter().flatten().map(|t| t.deadline).min()
    }

    /// Remove and return the earliest timer due at or before `now`.
    ///
    /// Ties on the deadline go to the timer scheduled first.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerPurpose, Instant)> {
        let (purpose, timer) = TimerPurpose::ALL
            .into_iter()
            .filter_map(|purpose| {
                self.slots[purpose.slot()].map(|timer| (purpose, timer))
            })
            .filter(|(_, timer)| timer.deadline <= now)
            .min_by_key(|(_, timer)| (timer.deadline, timer.handle))?;

        self.slots[purpose.slot()] = None;
        Some((purpose, timer.deadline))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn schedule_replaces_same_purpose() {
        let t0 = Instant::now();
        let mut table = TimerTable::new();
        let first = table.schedule(TimerPurpose::IdleEntry, t0 + ms(100));
        let second = table.schedule(TimerPurpose::IdleEntry, t0 + ms(200));

        assert_ne!(first, second);
        assert_eq!(table.live_count(), 1);
        assert_eq!(table.handle(TimerPurpose::IdleEntry), Some(second));
        assert_eq!(table.deadline(TimerPurpose::IdleEntry), Some(t0 + ms(200)));
    }

    #[test]
    fn different_purposes_coexist() {
        let t0 = Instant::now();
        let mut table = TimerTable::new();
        let _ = table.schedule(TimerPurpose::IdleEntry, t0 + ms(100));
        let _ = table.schedule(TimerPurpose::SleepEntry, t0 + ms(50));

        assert_eq!(table.live_count(), 2);
        assert_eq!(table.next_deadline(), Some(t0 + ms(50)));
        assert_eq!(
            table.pending().collect::<Vec<_>>(),
            vec![TimerPurpose::IdleEntry, TimerPurpose::SleepEntry]
        );
    }

    #[test]
    fn cancel_by_handle_ignores_stale_handles() {
        let t0 = Instant::now();
        let mut table = TimerTable::new();
        let stale = table.schedule(TimerPurpose::SleepEntry, t0 + ms(10));
        let live = table.schedule(TimerPurpose::SleepEntry, t0 + ms(20));

        assert!(!table.cancel_handle(stale));
        assert_eq!(table.live_count(), 1);
        assert!(table.cancel_handle(live));
        assert_eq!(table.live_count(), 0);
        assert!(!table.cancel_handle(live));
    }

    #[test]
    fn pop_due_returns_earliest_first() {
        let t0 = Instant::now();
        let mut table = TimerTable::new();
        let _ = table.schedule(TimerPurpose::AffectionEntry, t0 + ms(30));
        let _ = table.schedule(TimerPurpose::IdleEntry, t0 + ms(10));
        let _ = table.schedule(TimerPurpose::SleepEntry, t0 + ms(500));

        let now = t0 + ms(100);
        assert_eq!(
            table.pop_due(now),
            Some((TimerPurpose::IdleEntry, t0 + ms(10)))
        );
        assert_eq!(
            table.pop_due(now),
            Some((TimerPurpose::AffectionEntry, t0 + ms(30)))
        );
        assert_eq!(table.pop_due(now), None);
        assert!(table.is_pending(TimerPurpose::SleepEntry));
    }

    #[test]
    fn deadline_is_inclusive() {
        let t0 = Instant::now();
        let mut table = TimerTable::new();
        let _ = table.schedule(TimerPurpose::IdleEntry, t0 + ms(800));
        assert_eq!(table.pop_due(t0 + ms(799)), None);
        assert!(table.pop_due(t0 + ms(800)).is_some());
    }

    #[test]
    fn cancel_all_empties_the_table() {
        let t0 = Instant::now();
        let mut table = TimerTable::new();
        for purpose in TimerPurpose::ALL {
            let _ = table.schedule(purpose, t0);
        }
        assert_eq!(table.cancel_all(), 4);
        assert_eq!(table.live_count(), 0);
        assert_eq!(table.pop_due(t0 + ms(10_000)), None);
        assert_eq!(table.cancel(TimerPurpose::IdleEntry), None);
    }
}
