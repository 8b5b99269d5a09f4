//! Countdown timer
//!
//! The timer works in whole seconds against a millisecond clock. Elapsed time
//! is truncated, so the display shows the full budget for the first second.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Seconds allotted to each round
pub const TIME_BUDGET_SECS: u64 = 150;

/// Remaining time at or below which the clock is shown as urgent
pub const LOW_TIME_SECS: u64 = 15;

/// Source of monotonic time in milliseconds
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Production clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests and replays
///
/// Clones share the same time, so a test can keep a handle while the session
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_millis(&self, millis: u64) {
        self.now.set(millis);
    }

    pub fn advance_millis(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance_millis(secs.saturating_mul(1000));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

/// Event emitted by [`Timer::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Expired,
}

/// Round countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    budget_secs: u64,
    started_at_millis: u64,
    remaining_secs: u64,
    active: bool,
}

impl Timer {
    #[must_use]
    pub const fn new(budget_secs: u64, now_millis: u64) -> Self {
        Self {
            budget_secs,
            started_at_millis: now_millis,
            remaining_secs: budget_secs,
            active: true,
        }
    }

    /// Recompute the remaining time
    ///
    /// Returns `Some(TimerEvent::Expired)` exactly once: on the first tick
    /// that sees the countdown reach zero. An inactive timer is frozen.
    pub fn tick(&mut self, now_millis: u64) -> Option<TimerEvent> {
        if !self.active {
            return None;
        }

        let elapsed_secs = now_millis.saturating_sub(self.started_at_millis) / 1000;
        self.remaining_secs = self.budget_secs.saturating_sub(elapsed_secs);

        if self.remaining_secs == 0 {
            self.active = false;
            return Some(TimerEvent::Expired);
        }
        None
    }

    /// Stop the countdown without emitting anything
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Re-arm with the full budget starting at `now_millis`
    pub fn reset(&mut self, now_millis: u64) {
        self.started_at_millis = now_millis;
        self.remaining_secs = self.budget_secs;
        self.active = true;
    }

    #[must_use]
    pub const fn budget_secs(&self) -> u64 {
        self.budget_secs
    }

    #[must_use]
    pub const fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.remaining_secs <= LOW_TIME_SECS
    }
}
