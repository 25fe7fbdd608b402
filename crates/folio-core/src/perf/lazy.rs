//! Run a callback the first time something becomes visible.

use super::probe::EnvironmentProbe;

/// Axis-aligned rectangle in any consistent unit (pixels, terminal cells)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grow (or shrink, when negative) by `margin` on every side
    fn inflate(&self, margin: f64) -> Bounds {
        Bounds {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }
}

/// When an observed target counts as visible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Extra space around the viewport that already counts as visible
    pub root_margin: f64,
    /// Fraction of the target that must be visible, 0.0 to 1.0
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin: 0.0,
            threshold: 0.0,
        }
    }
}

/// Visibility of a target relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    pub fn compute(target: Bounds, viewport: Bounds, options: &ObserverOptions) -> Self {
        let root = viewport.inflate(options.root_margin);
        let overlap_w = target.right().min(root.right()) - target.x.max(root.x);
        let overlap_h = target.bottom().min(root.bottom()) - target.y.max(root.y);

        let target_area = target.area();
        let ratio = if target_area > 0.0 {
            (overlap_w.max(0.0) * overlap_h.max(0.0) / target_area).clamp(0.0, 1.0)
        } else if overlap_w >= 0.0 && overlap_h >= 0.0 {
            // Zero-sized target sitting inside the root
            1.0
        } else {
            0.0
        };

        let threshold = options.threshold.clamp(0.0, 1.0);
        let is_intersecting = ratio > 0.0 && ratio >= threshold;

        Self {
            is_intersecting,
            intersection_ratio: ratio,
        }
    }
}

/// One-shot visibility observer
pub struct LazyObserver<F: FnOnce()> {
    callback: Option<F>,
    options: ObserverOptions,
}

impl<F: FnOnce()> LazyObserver<F> {
    pub fn new(callback: F, options: ObserverOptions) -> Self {
        Self {
            callback: Some(callback),
            options,
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Still waiting for the first intersection
    pub fn is_connected(&self) -> bool {
        self.callback.is_some()
    }

    /// Feed entries; the first intersecting one runs the callback and
    /// disconnects. Returns whether the callback ran on this call.
    pub fn process<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        if !self.is_connected() {
            return false;
        }
        if entries.into_iter().any(|entry| entry.is_intersecting) {
            if let Some(callback) = self.callback.take() {
                callback();
                return true;
            }
        }
        false
    }

    /// Compute the entry for `target` inside `viewport` and process it
    pub fn observe(&mut self, target: Bounds, viewport: Bounds) -> bool {
        let entry = IntersectionEntry::compute(target, viewport, &self.options);
        self.process([entry])
    }

    /// Stop observing without running the callback
    pub fn disconnect(&mut self) {
        self.callback = None;
    }
}

impl<F: FnOnce()> std::fmt::Debug for LazyObserver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyObserver")
            .field("connected", &self.is_connected())
            .field("options", &self.options)
            .finish()
    }
}

/// Observe lazily where possible, otherwise run `callback` right away.
///
/// Returns `None` when the environment cannot observe visibility; the
/// callback has already run in that case.
pub fn create_lazy_observer<F: FnOnce()>(
    probe: &dyn EnvironmentProbe,
    callback: F,
    options: ObserverOptions,
) -> Option<LazyObserver<F>> {
    if !probe.is_available() || !probe.supports_intersection_observer() {
        callback();
        return None;
    }
    Some(LazyObserver::new(callback, options))
}
