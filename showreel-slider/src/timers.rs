//! Deadlines owned by a slider: the periodic autoplay tick and the
//! one-shot transition completion.

use std::time::{Duration, Instant};

/// Shortest autoplay period; a zero period would tick forever.
pub const MIN_AUTOPLAY_PERIOD: Duration = Duration::from_millis(1);

/// Repeating autoplay deadline. At most one exists per slider; starting a
/// new one replaces the old.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    period: Duration,
    next_due: Instant,
}

impl AutoplayTimer {
    pub fn start(now: Instant, period: Duration) -> Self {
        let period = period.max(MIN_AUTOPLAY_PERIOD);
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due <= now
    }

    /// Schedule the following tick. Ticks missed while the host was not
    /// polling are coalesced into the one being fired.
    pub fn fire(&mut self, now: Instant) {
        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
    }
}

/// A running transition. While one exists the slider is animating and
/// drops navigation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub from: usize,
    pub to: usize,
    /// Latest instant the latch stays held, even without a transition-end
    /// acknowledgment from the surface.
    pub deadline: Instant,
    /// Distinguishes this transition from earlier ones between the same
    /// slides.
    pub generation: u64,
}

impl PendingTransition {
    pub fn new(
        from: usize,
        to: usize,
        deadline: Instant,
        generation: u64,
    ) -> Self {
        Self {
            from,
            to,
            deadline,
            generation,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline <= now
    }
}
