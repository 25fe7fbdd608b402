use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_core::gallery::projection::window;
use folio_core::gallery::{DragTracker, GalleryItem, Transition};
use folio_core::perf::{
    create_lazy_observer, double_raf_throttle, raf_throttle, timing, Debounce, EnvironmentProbe,
    FrameThrottle, GalleryMode, LazyObserver, ObserverOptions, Throttle,
};
use folio_core::{AppConfig, Carousel, Clock, SystemClock};
use ratatui::layout::Rect;
use tracing::debug;

use crate::assets::{self, AssetStatus, AssetUpdate};
use crate::input::Action;
use crate::layout::{self, ControlHit, Controls, GalleryLayout, CELL_WIDTH_PX};
use crate::theme::Theme;
use crate::themes::load_theme;
use crate::transition::{timing::frame_duration, AnimatedSlide, SlideAnimator};

/// Minimum spacing between wheel-driven slide changes
const WHEEL_STEP: Duration = Duration::from_millis(250);

/// Share of a slide that must be on screen before its asset is probed
const REVEAL_THRESHOLD: f64 = 0.1;

type RevealCallback = Box<dyn FnOnce()>;

fn px_to_columns(px: f64) -> f64 {
    px / CELL_WIDTH_PX
}

/// Gallery viewer state
pub struct App<C: Clock + Clone = SystemClock> {
    pub carousel: Carousel<C>,
    pub mode: GalleryMode,
    pub theme: Theme,
    pub assets: Vec<AssetStatus>,
    pub status_message: Option<String>,
    pub should_quit: bool,

    clock: C,
    tick_rate: Duration,
    frame_interval: Duration,
    animator: SlideAnimator,
    layout: Option<GalleryLayout>,

    // Pointer drag on the center slide
    drag: DragTracker,
    drag_cols: f64,
    drag_preview: FrameThrottle<fn(f64) -> f64, f64, f64>,

    // Input rate limiting
    resize: Debounce<fn(Rect) -> GalleryLayout, Rect, C>,
    wheel: Throttle<fn(()), (), (), C>,

    // Lazy asset probing
    visibility_check: FrameThrottle<fn(()), (), ()>,
    observers: Vec<Option<LazyObserver<RevealCallback>>>,
    revealed: Rc<RefCell<Vec<usize>>>,
}

impl App<SystemClock> {
    pub fn new(
        items: Vec<GalleryItem>,
        config: &AppConfig,
        probe: &dyn EnvironmentProbe,
        mode: GalleryMode,
    ) -> Self {
        Self::with_clock(items, config, probe, mode, SystemClock)
    }
}

impl<C: Clock + Clone> App<C> {
    pub fn with_clock(
        items: Vec<GalleryItem>,
        config: &AppConfig,
        probe: &dyn EnvironmentProbe,
        mode: GalleryMode,
        clock: C,
    ) -> Self {
        let revealed = Rc::new(RefCell::new(Vec::new()));
        let options = ObserverOptions {
            root_margin: 0.0,
            threshold: REVEAL_THRESHOLD,
        };

        // Unsupported environments run the callbacks right here, queueing
        // every slide for an immediate probe
        let observers = (0..items.len())
            .map(|index| {
                let queue = Rc::clone(&revealed);
                let callback: RevealCallback = Box::new(move || queue.borrow_mut().push(index));
                create_lazy_observer(probe, callback, options)
            })
            .collect();

        let assets = vec![AssetStatus::Pending; items.len()];
        let carousel = Carousel::with_config(items, &config.gallery, clock.clone());

        Self {
            carousel,
            mode,
            theme: load_theme(&config.ui.theme),
            assets,
            status_message: None,
            should_quit: false,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            frame_interval: frame_duration(config.ui.animation_fps),
            animator: SlideAnimator::new(&config.gallery, mode),
            layout: None,
            drag: DragTracker::new(),
            drag_cols: 0.0,
            drag_preview: raf_throttle(px_to_columns as fn(f64) -> f64),
            resize: Debounce::with_clock(
                GalleryLayout::new as fn(Rect) -> GalleryLayout,
                timing::debounce::RESIZE,
                clock.clone(),
            ),
            wheel: Throttle::with_clock((|()| ()) as fn(()), WHEEL_STEP, clock.clone()),
            visibility_check: double_raf_throttle((|()| ()) as fn(())),
            observers,
            revealed,
            clock,
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn layout(&self) -> Option<GalleryLayout> {
        self.layout
    }

    /// Horizontal shift of the center slide while it is being dragged, in columns
    pub fn drag_columns(&self) -> f64 {
        self.drag_cols
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Slides to draw this frame, in paint order
    pub fn slides(&self) -> Vec<AnimatedSlide> {
        let Some(current) = self.carousel.current_index() else {
            return Vec::new();
        };
        let projected = self.carousel.project();
        let mut slides = self.animator.sample(current, self.carousel.len(), self.now());
        for slide in &mut slides {
            if !slide.leaving {
                slide.z_index = projected
                    .iter()
                    .find(|visible| visible.index == slide.index)
                    .map_or(0, |visible| visible.z_index);
            }
        }
        slides.sort_by_key(|slide| slide.z_index);
        slides
    }

    /// Adopt a terminal area for hit testing and visibility checks
    pub fn set_viewport(&mut self, area: Rect) {
        self.adopt_layout(GalleryLayout::new(area));
    }

    /// Terminal resized; relayout once the size settles
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.resize.call(Rect::new(0, 0, width, height));
    }

    /// Run deferred work that is due. Call once per loop iteration before drawing.
    pub fn on_frame(&mut self) {
        if let Some(cols) = self.drag_preview.on_frame() {
            self.drag_cols = cols;
        }

        if let Some(layout) = self.resize.poll() {
            debug!(width = layout.stage.width, height = layout.stage.height, "Viewport settled");
            self.adopt_layout(layout);
        }

        if self.visibility_check.on_frame().is_some() {
            if let Some(layout) = self.layout {
                self.check_visibility(layout.stage);
            }
        }

        if let Some(transition) = self.carousel.tick() {
            self.begin_transition(transition);
        }

        let now = self.now();
        self.animator.update(now);
    }

    /// Whether the loop should run at frame rate
    pub fn is_busy(&self) -> bool {
        self.animator.is_animating(self.now())
            || self.drag_preview.is_pending()
            || self.visibility_check.is_pending()
    }

    /// How long the loop may sleep waiting for input
    pub fn poll_timeout(&self) -> Duration {
        if self.is_busy() {
            return self.frame_interval;
        }
        let now = self.now();
        let mut timeout = self.tick_rate;
        if let Some(due) = self.carousel.autoplay_due_in() {
            timeout = timeout.min(due);
        }
        if let Some(deadline) = self.resize.deadline() {
            timeout = timeout.min(deadline.saturating_duration_since(now));
        }
        timeout
    }

    pub fn apply(&mut self, action: Action) {
        let transition = match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Next => self.carousel.next(),
            Action::Previous => self.carousel.previous(),
            Action::GoTo(index) if index < self.carousel.len() => {
                self.carousel.go_to(index as isize)
            }
            Action::GoTo(index) => {
                self.status_message = Some(format!("No slide {}", index + 1));
                None
            }
            Action::First => self.carousel.go_to(0),
            Action::Last => self.carousel.go_to(-1),
            Action::None => None,
        };

        if let Some(transition) = transition {
            self.begin_transition(transition);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let px = mouse.column as f64 * CELL_WIDTH_PX;
        let now = self.now();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(hit) = self.control_at(mouse.column, mouse.row) {
                    let action = match hit {
                        ControlHit::Previous => Action::Previous,
                        ControlHit::Next => Action::Next,
                        ControlHit::Indicator(index) => Action::GoTo(index),
                    };
                    self.apply(action);
                } else if self.is_on_center_slide(mouse.column, mouse.row) {
                    self.drag.begin(px, now);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(offset) = self.drag.update(px, now) {
                    self.drag_preview.call(offset);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(release) = self.drag.release(px, now) {
                    self.drag_preview.cancel();
                    self.drag_cols = 0.0;
                    let transition = self.carousel.on_release(release.offset, release.velocity);
                    if let Some(transition) = transition {
                        self.begin_transition(transition);
                    }
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                if self.wheel.try_call(()).is_some() {
                    self.apply(Action::Next);
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                if self.wheel.try_call(()).is_some() {
                    self.apply(Action::Previous);
                }
            }
            _ => {}
        }
    }

    /// Slides that became visible since the last call, with their image reference
    pub fn take_revealed(&mut self) -> Vec<(usize, String)> {
        let indices: Vec<usize> = self.revealed.borrow_mut().drain(..).collect();
        indices
            .into_iter()
            .filter_map(|index| {
                let item = self.carousel.items().get(index)?;
                if assets::is_remote(&item.image) {
                    self.assets[index] = AssetStatus::Remote;
                    return None;
                }
                Some((index, item.image.clone()))
            })
            .collect()
    }

    pub fn apply_asset_update(&mut self, update: AssetUpdate) {
        if let Some(slot) = self.assets.get_mut(update.index) {
            *slot = update.status;
        }
    }

    /// Stop every timer and observer; call before leaving the viewer
    pub fn teardown(&mut self) {
        self.carousel.teardown();
        self.drag.cancel();
        self.drag_preview.cancel();
        self.visibility_check.cancel();
        self.resize.cancel();
        for observer in self.observers.iter_mut().flatten() {
            observer.disconnect();
        }
    }

    fn begin_transition(&mut self, transition: Transition) {
        let now = self.now();
        self.animator.start(&transition, self.carousel.len(), now);
        self.status_message = None;
        if self.layout.is_some() {
            self.visibility_check.call(());
        }
    }

    fn adopt_layout(&mut self, layout: GalleryLayout) {
        if self.layout != Some(layout) {
            self.layout = Some(layout);
            self.visibility_check.call(());
        }
    }

    fn control_at(&self, column: u16, row: u16) -> Option<ControlHit> {
        let layout = self.layout?;
        if self.carousel.is_empty() {
            return None;
        }
        Controls::new(layout.controls, self.carousel.len()).hit(column, row)
    }

    fn is_on_center_slide(&self, column: u16, row: u16) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        let Some(slide) = self.carousel.project().into_iter().find(|slide| slide.draggable) else {
            return false;
        };
        let pose = slide.animate.pose();
        let bounds = layout::slide_bounds(layout.stage, slide.position.offset() as f64, &pose, 0.0);
        layout::clip(bounds, layout.stage).is_some_and(|rect| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
    }

    /// Feed the resting slide bounds to each slide's observer
    fn check_visibility(&mut self, stage: Rect) {
        let Some(current) = self.carousel.current_index() else {
            return;
        };
        let viewport = layout::rect_bounds(stage);
        for (index, position) in window(current, self.carousel.len()) {
            let slide = AnimatedSlide::at_rest(index, position);
            let target = layout::slide_bounds(stage, slide.slot, &slide.pose, 0.0);
            if let Some(Some(observer)) = self.observers.get_mut(slide.index) {
                if observer.observe(target, viewport) {
                    debug!(index = slide.index, "Slide revealed");
                }
            }
        }
    }
}
