use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

/// Trailing-edge debounce.
///
/// Every call replaces the pending arguments and pushes the deadline to
/// `wait` after it. [`Debounce::poll`] runs the callback once the caller has
/// been quiet for `wait`.
pub struct Debounce<F, A, C: Clock = SystemClock> {
    func: F,
    wait: Duration,
    clock: C,
    pending: Option<(A, Instant)>,
}

/// Debounce `func` by `wait_ms`
pub fn debounce<F, A, R>(func: F, wait_ms: u64) -> Debounce<F, A>
where
    F: FnMut(A) -> R,
{
    Debounce::new(func, Duration::from_millis(wait_ms))
}

impl<F, A> Debounce<F, A, SystemClock> {
    pub fn new(func: F, wait: Duration) -> Self {
        Self::with_clock(func, wait, SystemClock)
    }
}

impl<F, A, C: Clock> Debounce<F, A, C> {
    pub fn with_clock(func: F, wait: Duration, clock: C) -> Self {
        Self {
            func,
            wait,
            clock,
            pending: None,
        }
    }

    /// Record a call and restart the quiet period
    pub fn call(&mut self, args: A) {
        let deadline = self.clock.now() + self.wait;
        self.pending = Some((args, deadline));
    }

    /// When the pending call will run, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Run the pending call if its quiet period has elapsed
    pub fn poll<R>(&mut self) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        let deadline = self.deadline()?;
        if self.clock.now() < deadline {
            return None;
        }
        self.flush()
    }

    /// Run the pending call right away
    pub fn flush<R>(&mut self) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        let (args, _) = self.pending.take()?;
        Some((self.func)(args))
    }

    /// Drop the pending call
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<F, A, C: Clock> std::fmt::Debug for Debounce<F, A, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounce")
            .field("wait", &self.wait)
            .field("deadline", &self.deadline())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::cell::RefCell;

    #[test]
    fn test_burst_fires_once_after_last_call() {
        let clock = ManualClock::new();
        let calls = RefCell::new(Vec::new());
        let mut debounced = Debounce::with_clock(
            |query: &str| calls.borrow_mut().push(query.to_string()),
            Duration::from_millis(300),
            clock.clone(),
        );

        for query in ["r", "ru", "rus", "rust", "rusty"] {
            debounced.call(query);
            assert_eq!(debounced.poll(), None);
            clock.advance_ms(80);
        }

        // Last call was 80ms ago
        clock.advance_ms(219);
        assert_eq!(debounced.poll(), None);
        clock.advance_ms(1);
        assert_eq!(debounced.poll(), Some(()));
        assert_eq!(debounced.poll(), None);

        assert_eq!(*calls.borrow(), vec!["rusty".to_string()]);
    }

    #[test]
    fn test_cancel_and_flush() {
        let clock = ManualClock::new();
        let mut debounced = Debounce::with_clock(|x: u32| x * 2, Duration::from_millis(150), clock.clone());

        debounced.call(1);
        debounced.cancel();
        clock.advance_ms(500);
        assert_eq!(debounced.poll(), None);

        debounced.call(21);
        assert!(debounced.is_pending());
        assert_eq!(debounced.flush(), Some(42));
        assert!(!debounced.is_pending());
    }

    #[test]
    fn test_deadline_moves_with_each_call() {
        let clock = ManualClock::new();
        let start = clock.now();
        let mut debounced = debounce_with(clock.clone());

        debounced.call(());
        assert_eq!(debounced.deadline(), Some(start + Duration::from_millis(100)));
        clock.advance_ms(60);
        debounced.call(());
        assert_eq!(debounced.deadline(), Some(start + Duration::from_millis(160)));
    }

    fn debounce_with(clock: ManualClock) -> Debounce<fn(()), (), ManualClock> {
        Debounce::with_clock((|_| {}) as fn(()), Duration::from_millis(100), clock)
    }
}
