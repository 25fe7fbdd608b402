use std::time::{Duration, Instant};

use crate::clock::Clock;

/// Self re-arming interval timer owned by a carousel.
///
/// The timer holds a deadline instead of a callback; the owner polls
/// [`Autoplay::fire_due`] from its event loop. Cancelling drops the deadline,
/// after which the timer never fires again.
#[derive(Debug, Clone)]
pub struct Autoplay<C: Clock> {
    clock: C,
    interval: Duration,
    deadline: Option<Instant>,
}

impl<C: Clock> Autoplay<C> {
    /// Create a timer, armed one interval from now when `enabled`
    pub fn new(clock: C, interval: Duration, enabled: bool) -> Self {
        let deadline = enabled.then(|| clock.now() + interval);
        Self {
            clock,
            interval,
            deadline,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Time left before the next firing
    pub fn time_until_due(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(self.clock.now()))
    }

    /// Returns true once per elapsed interval and re-arms the timer
    pub fn fire_due(&mut self) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        let now = self.clock.now();
        if now < deadline {
            return false;
        }
        // A stalled loop fires once, then waits a full interval again
        self.deadline = Some(now + self.interval);
        true
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
