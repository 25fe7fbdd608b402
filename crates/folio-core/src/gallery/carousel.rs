use std::time::Duration;

use tracing::{debug, info};

use super::autoplay::Autoplay;
use super::gesture::{classify_release, SwipeIntent, SWIPE_CONFIDENCE_THRESHOLD};
use super::models::GalleryItem;
use super::projection::{self, wrap_index, VisibleSlide};
use super::variant::{PageDirection, SlidePosition, SlideVariant};
use crate::clock::{Clock, SystemClock};
use crate::config::GalleryConfig;

/// What triggered a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSource {
    Next,
    Previous,
    GoTo,
    Swipe,
    Autoplay,
}

impl NavigationSource {
    /// Whether this navigation came from the user
    pub fn is_explicit(self) -> bool {
        !matches!(self, NavigationSource::Autoplay)
    }
}

/// Outcome of one navigation, consumed by the renderer to animate it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: PageDirection,
    pub source: NavigationSource,
    /// Newly revealed slide that starts from an entering pose
    pub entering: Option<(usize, SlideVariant)>,
    /// Slide that leaves the window with an exiting pose
    pub exiting: Option<(usize, SlideVariant)>,
}

/// One position-indicator control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Circular gallery with autoplay, swipe handling and a three-slot window.
///
/// All navigation on an empty gallery is a no-op returning `None`.
#[derive(Debug)]
pub struct Carousel<C: Clock = SystemClock> {
    items: Vec<GalleryItem>,
    current_index: usize,
    page_direction: PageDirection,
    autoplay: Autoplay<C>,
    swipe_threshold: f64,
}

impl Carousel<SystemClock> {
    /// Create with default settings: autoplay every 5s, swipe threshold 10000
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self::with_config(items, &GalleryConfig::default(), SystemClock)
    }
}

impl<C: Clock> Carousel<C> {
    pub fn with_config(items: Vec<GalleryItem>, config: &GalleryConfig, clock: C) -> Self {
        let autoplay = Autoplay::new(
            clock,
            Duration::from_millis(config.autoplay_interval_ms),
            config.autoplay && !items.is_empty(),
        );
        let swipe_threshold = if config.swipe_confidence_threshold > 0.0 {
            config.swipe_confidence_threshold
        } else {
            SWIPE_CONFIDENCE_THRESHOLD
        };

        Self {
            items,
            current_index: 0,
            page_direction: PageDirection::None,
            autoplay,
            swipe_threshold,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the centered item, `None` when empty
    pub fn current_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current_index)
    }

    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.items.get(self.current_index)
    }

    pub fn page_direction(&self) -> PageDirection {
        self.page_direction
    }

    pub fn is_auto_playing(&self) -> bool {
        self.autoplay.is_active()
    }

    /// Time until the autoplay timer fires next
    pub fn autoplay_due_in(&self) -> Option<Duration> {
        self.autoplay.time_until_due()
    }

    pub fn next(&mut self) -> Option<Transition> {
        self.step(PageDirection::Forward, NavigationSource::Next)
    }

    pub fn previous(&mut self) -> Option<Transition> {
        self.step(PageDirection::Backward, NavigationSource::Previous)
    }

    /// Jump to `index`; out-of-range and negative values wrap around
    pub fn go_to(&mut self, index: isize) -> Option<Transition> {
        if self.is_empty() {
            return None;
        }
        let target = wrap_index(0, index, self.len());
        let direction = if target > self.current_index {
            PageDirection::Forward
        } else {
            PageDirection::Backward
        };
        Some(self.navigate(target, direction, NavigationSource::GoTo))
    }

    /// Interpret a drag release on the centered slide
    pub fn on_release(&mut self, offset_x: f64, velocity_x: f64) -> Option<Transition> {
        match classify_release(offset_x, velocity_x, self.swipe_threshold) {
            SwipeIntent::Forward => self.step(PageDirection::Forward, NavigationSource::Swipe),
            SwipeIntent::Backward => self.step(PageDirection::Backward, NavigationSource::Swipe),
            SwipeIntent::SnapBack => {
                debug!(offset_x, velocity_x, "Drag below swipe threshold, snapping back");
                None
            }
        }
    }

    /// Advance if the autoplay interval has elapsed
    pub fn tick(&mut self) -> Option<Transition> {
        if self.is_empty() || !self.autoplay.fire_due() {
            return None;
        }
        self.step(PageDirection::Forward, NavigationSource::Autoplay)
    }

    /// Cancel the autoplay timer; call when the gallery goes away
    pub fn teardown(&mut self) {
        if self.autoplay.is_active() {
            debug!("Gallery torn down, autoplay timer cleared");
        }
        self.autoplay.cancel();
    }

    /// Slides to render this frame
    pub fn project(&self) -> Vec<VisibleSlide<'_>> {
        projection::project(&self.items, self.current_index, self.page_direction)
    }

    /// `"{current+1} / {count}"`, `None` when empty
    pub fn counter(&self) -> Option<String> {
        self.current_index()
            .map(|index| format!("{} / {}", index + 1, self.len()))
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.len())
            .map(|index| Indicator {
                index,
                active: index == self.current_index,
            })
            .collect()
    }

    fn step(&mut self, direction: PageDirection, source: NavigationSource) -> Option<Transition> {
        if self.is_empty() {
            return None;
        }
        let target = wrap_index(self.current_index, direction.signum() as isize, self.len());
        Some(self.navigate(target, direction, source))
    }

    fn navigate(
        &mut self,
        target: usize,
        direction: PageDirection,
        source: NavigationSource,
    ) -> Transition {
        let from = self.current_index;
        let len = self.len();

        self.page_direction = direction;
        self.current_index = target;

        if source.is_explicit() && self.autoplay.is_active() {
            self.autoplay.cancel();
            info!(?source, "User navigation, autoplay disabled");
        }

        let entering = projection::entering_index(target, len, direction)
            .zip(direction.entering_variant());
        let exiting = exiting_slide(from, target, len, direction)
            .zip(direction.exiting_variant());

        debug!(from, to = target, ?direction, ?source, "Gallery navigated");

        Transition {
            from,
            to: target,
            direction,
            source,
            entering,
            exiting,
        }
    }
}

/// The one slide that leaves the window on this move.
///
/// Prefers the old center when it dropped out (long jumps, tiny galleries),
/// otherwise the old slot on the trailing side.
fn exiting_slide(from: usize, to: usize, len: usize, direction: PageDirection) -> Option<usize> {
    let before = projection::window(from, len);
    let after = projection::window(to, len);
    let removed: Vec<(usize, SlidePosition)> = before
        .into_iter()
        .filter(|(index, _)| !after.iter().any(|(kept, _)| kept == index))
        .collect();

    let trailing = direction.active_side().map(|side| match side {
        SlidePosition::Right => SlidePosition::Left,
        _ => SlidePosition::Right,
    });

    removed
        .iter()
        .find(|(_, position)| *position == SlidePosition::Center)
        .or_else(|| removed.iter().find(|(_, position)| Some(*position) == trailing))
        .or_else(|| removed.first())
        .map(|(index, _)| *index)
}
