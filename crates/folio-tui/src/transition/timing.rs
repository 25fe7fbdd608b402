//! L4 Atomic Layer: Time calculation utilities for slide transitions

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) at `now`
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation is complete at `now`
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Frame duration for a target frame rate
#[inline]
pub fn frame_duration(fps: u32) -> Duration {
    if fps == 0 {
        Duration::from_millis(16) // ~60fps fallback
    } else {
        Duration::from_millis(1000 / fps as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        assert_eq!(progress(start, duration, start), 0.0);
        assert!((progress(start, duration, start + Duration::from_millis(50)) - 0.25).abs() < 1e-9);
        assert_eq!(progress(start, duration, start + Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert_eq!(progress(start, Duration::ZERO, start), 1.0);
        assert!(is_complete(start, Duration::ZERO, start));
    }

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(60), Duration::from_millis(16));
        assert_eq!(frame_duration(0), Duration::from_millis(16));
        assert_eq!(frame_duration(30), Duration::from_millis(33));
    }
}
