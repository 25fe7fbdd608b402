use std::marker::PhantomData;
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

/// Leading-edge throttle.
///
/// The first call runs `func` and opens a window of `interval`; calls inside
/// the window are dropped and see the result of the last real invocation.
pub struct Throttle<F, A, R, C: Clock = SystemClock> {
    func: F,
    interval: Duration,
    clock: C,
    window_start: Option<Instant>,
    last_result: Option<R>,
    _args: PhantomData<fn(A)>,
}

/// Throttle `func` to at most one call per `interval_ms`
pub fn throttle<F, A, R>(func: F, interval_ms: u64) -> Throttle<F, A, R>
where
    F: FnMut(A) -> R,
{
    Throttle::new(func, Duration::from_millis(interval_ms))
}

impl<F, A, R> Throttle<F, A, R, SystemClock>
where
    F: FnMut(A) -> R,
{
    pub fn new(func: F, interval: Duration) -> Self {
        Self::with_clock(func, interval, SystemClock)
    }
}

impl<F, A, R, C> Throttle<F, A, R, C>
where
    F: FnMut(A) -> R,
    C: Clock,
{
    pub fn with_clock(func: F, interval: Duration, clock: C) -> Self {
        Self {
            func,
            interval,
            clock,
            window_start: None,
            last_result: None,
            _args: PhantomData,
        }
    }

    /// Whether a call right now would be dropped
    pub fn is_throttled(&self) -> bool {
        self.window_start
            .is_some_and(|start| self.clock.now().duration_since(start) < self.interval)
    }

    /// Invoke if outside the window, returning `None` when the call was dropped
    pub fn try_call(&mut self, args: A) -> Option<R>
    where
        R: Clone,
    {
        if self.is_throttled() {
            return None;
        }
        Some(self.invoke(args))
    }

    /// Invoke if outside the window, otherwise return the last real result
    pub fn call(&mut self, args: A) -> R
    where
        R: Clone,
    {
        if self.is_throttled() {
            if let Some(result) = &self.last_result {
                return result.clone();
            }
        }
        self.invoke(args)
    }

    /// Forget the current window so the next call runs immediately
    pub fn reset(&mut self) {
        self.window_start = None;
    }

    fn invoke(&mut self, args: A) -> R
    where
        R: Clone,
    {
        self.window_start = Some(self.clock.now());
        let result = (self.func)(args);
        self.last_result = Some(result.clone());
        result
    }
}

impl<F, A, R, C: Clock> std::fmt::Debug for Throttle<F, A, R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle")
            .field("interval", &self.interval)
            .field("window_start", &self.window_start)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::cell::Cell;

    #[test]
    fn test_leading_edge() {
        let clock = ManualClock::new();
        let calls = Cell::new(0);
        let mut throttled = Throttle::with_clock(
            |x: i32| {
                calls.set(calls.get() + 1);
                x * 10
            },
            Duration::from_millis(100),
            clock.clone(),
        );

        assert_eq!(throttled.call(1), 10);
        clock.advance_ms(50);
        // Suppressed, returns the previous result
        assert_eq!(throttled.call(2), 10);
        assert_eq!(calls.get(), 1);

        clock.advance_ms(50);
        assert_eq!(throttled.call(3), 30);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_try_call_reports_drops() {
        let clock = ManualClock::new();
        let mut throttled = Throttle::with_clock(|x: u8| x, Duration::from_millis(16), clock.clone());

        assert_eq!(throttled.try_call(1), Some(1));
        assert_eq!(throttled.try_call(2), None);
        assert!(throttled.is_throttled());

        clock.advance_ms(16);
        assert!(!throttled.is_throttled());
        assert_eq!(throttled.try_call(3), Some(3));
    }

    #[test]
    fn test_reset_reopens() {
        let clock = ManualClock::new();
        let mut throttled = Throttle::with_clock(|x: u8| x, Duration::from_secs(10), clock);
        throttled.call(1);
        throttled.reset();
        assert_eq!(throttled.call(2), 2);
    }

    #[test]
    fn test_system_clock_constructor() {
        let mut throttled = throttle(|(a, b): (i32, i32)| a + b, 1_000);
        assert_eq!(throttled.call((2, 3)), 5);
        assert_eq!(throttled.call((10, 10)), 5);
    }
}
