#![forbid(unsafe_code)]

//! Autoplay interval timer.
//!
//! A two-state machine ({idle, running}) counting down to the next
//! auto-advance. The engine suspends it whenever a drag is active or the
//! pane set is empty, and resumes it when both clear; every suspend or
//! resume restores a full interval rather than pausing mid-countdown, so
//! a stale partial interval can never survive a geometry change.
//!
//! # Invariants
//!
//! 1. A disabled timer (zero interval) never runs and never fires.
//! 2. `resume` is idempotent: only the idle→running transition reloads
//!    the countdown.
//! 3. `advance` fires once per elapsed interval, so a large simulated
//!    step delivers every expiry it covers.

use std::time::Duration;

/// Countdown timer for autoplay advances.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval: Duration,
    remaining: Duration,
    running: bool,
}

impl AutoplayTimer {
    /// Create an idle timer. A zero `interval` disables it entirely.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            remaining: interval,
            running: false,
        }
    }

    /// A timer that can never fire.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Whether the timer has a non-zero interval.
    #[inline]
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.interval.is_zero()
    }

    /// Whether the timer is currently counting down.
    #[inline]
    #[must_use]
    pub fn running(&self) -> bool {
        self.running
    }

    /// The configured interval.
    #[inline]
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time until the next expiry, if running.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Start counting down from a full interval. No-op while already
    /// running or when disabled.
    pub fn resume(&mut self) {
        if self.enabled() && !self.running {
            self.running = true;
            self.remaining = self.interval;
        }
    }

    /// Stop and discard any partial countdown.
    pub fn suspend(&mut self) {
        self.running = false;
        self.remaining = self.interval;
    }

    /// Advance by `dt`, returning how many expiries elapsed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running || !self.enabled() {
            return 0;
        }
        let mut dt = dt;
        let mut fired = 0;
        while dt >= self.remaining {
            dt -= self.remaining;
            self.remaining = self.interval;
            fired += 1;
        }
        self.remaining -= dt;
        fired
    }
}
