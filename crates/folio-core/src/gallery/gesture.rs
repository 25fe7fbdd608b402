//! Drag gesture interpretation for the centered slide.

use std::time::{Duration, Instant};

/// Minimum |offset| * velocity for a release to count as a swipe
pub const SWIPE_CONFIDENCE_THRESHOLD: f64 = 10_000.0;

/// Samples older than this are ignored when estimating release velocity
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Combined strength of a drag release.
///
/// The sign follows the velocity, so a fast leftward flick is strongly negative.
#[inline]
pub fn swipe_power(offset: f64, velocity: f64) -> f64 {
    offset.abs() * velocity
}

/// What a drag release asks the carousel to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    /// Dragged towards the left: show the next slide
    Forward,
    /// Dragged towards the right: show the previous slide
    Backward,
    /// Below the confidence threshold, slide springs back
    SnapBack,
}

/// Classify a release against `threshold`
pub fn classify_release(offset: f64, velocity: f64, threshold: f64) -> SwipeIntent {
    let power = swipe_power(offset, velocity);
    if power < -threshold {
        SwipeIntent::Forward
    } else if power > threshold {
        SwipeIntent::Backward
    } else {
        SwipeIntent::SnapBack
    }
}

/// Horizontal offset and velocity (px/s) at the moment the pointer is released
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub offset: f64,
    pub velocity: f64,
}

/// Tracks a horizontal pointer drag and derives release offset and velocity
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    origin: Option<f64>,
    samples: Vec<(Instant, f64)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Pointer pressed at `x`
    pub fn begin(&mut self, x: f64, now: Instant) {
        self.origin = Some(x);
        self.samples.clear();
        self.samples.push((now, x));
    }

    /// Pointer moved to `x`; returns the current offset from the press point
    pub fn update(&mut self, x: f64, now: Instant) -> Option<f64> {
        let origin = self.origin?;
        self.samples.push((now, x));
        self.samples
            .retain(|(at, _)| now.saturating_duration_since(*at) <= VELOCITY_WINDOW);
        Some(x - origin)
    }

    /// Current offset without recording a sample
    pub fn offset(&self) -> Option<f64> {
        let origin = self.origin?;
        self.samples.last().map(|(_, x)| x - origin)
    }

    /// Pointer released at `x`; ends the drag
    pub fn release(&mut self, x: f64, now: Instant) -> Option<DragRelease> {
        let offset = self.update(x, now)?;
        let velocity = match (self.samples.first(), self.samples.last()) {
            (Some((t0, x0)), Some((t1, x1))) => {
                let dt = t1.saturating_duration_since(*t0).as_secs_f64();
                if dt > 0.0 {
                    (x1 - x0) / dt
                } else {
                    0.0
                }
            }
            _ => 0.0,
        };
        self.cancel();
        Some(DragRelease { offset, velocity })
    }

    pub fn cancel(&mut self) {
        self.origin = None;
        self.samples.clear();
    }
}
