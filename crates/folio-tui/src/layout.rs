//! Screen geometry for the gallery: slot placement and control hit testing.

use folio_core::gallery::Pose;
use folio_core::perf::Bounds;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Horizontal distance between slot anchors, as a fraction of the stage width
pub const SLOT_SPACING: f64 = 0.32;
/// Size of a slide at scale 1.0, as a fraction of the stage
pub const SLIDE_WIDTH: f64 = 0.5;
pub const SLIDE_HEIGHT: f64 = 0.8;
/// Nominal pixel width of one terminal column, used to express drag
/// distances in the same unit as the swipe threshold
pub const CELL_WIDTH_PX: f64 = 8.0;

/// Screen regions of the gallery view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryLayout {
    pub stage: Rect,
    pub caption: Rect,
    pub controls: Rect,
    pub status: Rect,
}

impl GalleryLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            stage: chunks[0],
            caption: chunks[1],
            controls: chunks[2],
            status: chunks[3],
        }
    }
}

pub fn rect_bounds(rect: Rect) -> Bounds {
    Bounds::new(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    )
}

/// Unclipped bounds of a slide at `slot` with `pose`, shifted by `drag_cols`
pub fn slide_bounds(stage: Rect, slot: f64, pose: &Pose, drag_cols: f64) -> Bounds {
    let base_w = stage.width as f64 * SLIDE_WIDTH;
    let base_h = stage.height as f64 * SLIDE_HEIGHT;
    let width = base_w * pose.scale.max(0.0);
    let height = base_h * pose.scale.max(0.0);

    let center_x = stage.x as f64
        + stage.width as f64 * (0.5 + slot * SLOT_SPACING)
        + pose.x_percent / 100.0 * base_w
        + drag_cols;
    let center_y = stage.y as f64 + stage.height as f64 / 2.0;

    Bounds::new(center_x - width / 2.0, center_y - height / 2.0, width, height)
}

/// Bounds snapped to whole cells and clipped to `stage`; `None` when nothing is left
pub fn clip(bounds: Bounds, stage: Rect) -> Option<Rect> {
    let left = bounds.x.round().max(stage.x as f64);
    let top = bounds.y.round().max(stage.y as f64);
    let right = (bounds.x + bounds.width).round().min(stage.right() as f64);
    let bottom = (bounds.y + bounds.height).round().min(stage.bottom() as f64);

    if right - left < 1.0 || bottom - top < 1.0 {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// A clickable control under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlHit {
    Previous,
    Next,
    Indicator(usize),
}

/// Control row: `[‹]` on the left, indicator dots centered, `[›]` on the right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    area: Rect,
    count: usize,
}

impl Controls {
    const BUTTON_WIDTH: u16 = 3;
    /// Dot plus one column of spacing
    const DOT_STRIDE: u16 = 2;

    pub fn new(area: Rect, count: usize) -> Self {
        Self { area, count }
    }

    pub fn previous_button(&self) -> Rect {
        Rect::new(
            self.area.x,
            self.area.y,
            Self::BUTTON_WIDTH.min(self.area.width),
            self.area.height.min(1),
        )
    }

    pub fn next_button(&self) -> Rect {
        let width = Self::BUTTON_WIDTH.min(self.area.width);
        Rect::new(
            self.area.right() - width,
            self.area.y,
            width,
            self.area.height.min(1),
        )
    }

    /// How many dots fit between the buttons
    pub fn visible_indicators(&self) -> usize {
        let room = self.area.width.saturating_sub(2 * Self::BUTTON_WIDTH + 2);
        self.count.min(((room + 1) / Self::DOT_STRIDE) as usize)
    }

    pub fn indicator(&self, index: usize) -> Option<Rect> {
        let shown = self.visible_indicators();
        if index >= shown || self.area.height == 0 {
            return None;
        }
        let total = (shown as u16 * Self::DOT_STRIDE).saturating_sub(1);
        let start = self.area.x + (self.area.width.saturating_sub(total)) / 2;
        Some(Rect::new(
            start + index as u16 * Self::DOT_STRIDE,
            self.area.y,
            1,
            1,
        ))
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<ControlHit> {
        let contains = |rect: Rect| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        };

        if contains(self.previous_button()) {
            return Some(ControlHit::Previous);
        }
        if contains(self.next_button()) {
            return Some(ControlHit::Next);
        }
        (0..self.visible_indicators())
            .find(|&index| self.indicator(index).is_some_and(contains))
            .map(ControlHit::Indicator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::gallery::{SlidePosition, SlideVariant};

    fn stage() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    #[test]
    fn test_layout_regions_stack() {
        let layout = GalleryLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.stage.height, 20);
        assert_eq!(layout.caption.y, 20);
        assert_eq!(layout.controls.y, 22);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_center_slide_bounds() {
        let bounds = slide_bounds(stage(), 0.0, &Pose::CENTER, 0.0);
        assert_eq!(clip(bounds, stage()), Some(Rect::new(25, 4, 50, 32)));
    }

    #[test]
    fn test_side_slides_are_smaller_and_offset() {
        let left = slide_bounds(stage(), -1.0, &SlideVariant::Rest(SlidePosition::Left).pose(), 0.0);
        let right = slide_bounds(stage(), 1.0, &SlideVariant::Rest(SlidePosition::Right).pose(), 0.0);
        assert!(left.width < 50.0);
        assert!(left.x + left.width / 2.0 < 50.0);
        assert!(right.x + right.width / 2.0 > 50.0);
        assert!((left.width - right.width).abs() < 1e-9);
    }

    #[test]
    fn test_drag_shifts_and_clips() {
        let bounds = slide_bounds(stage(), 0.0, &Pose::CENTER, 40.0);
        let rect = clip(bounds, stage()).unwrap();
        assert_eq!(rect.x, 65);
        assert_eq!(rect.right(), 100);

        let gone = slide_bounds(stage(), 0.0, &Pose::CENTER, 200.0);
        assert!(clip(gone, stage()).is_none());
    }

    #[test]
    fn test_controls_hit_testing() {
        let controls = Controls::new(Rect::new(0, 10, 40, 1), 5);
        assert_eq!(controls.hit(1, 10), Some(ControlHit::Previous));
        assert_eq!(controls.hit(38, 10), Some(ControlHit::Next));
        assert_eq!(controls.hit(20, 11), None);

        for index in 0..5 {
            let dot = controls.indicator(index).unwrap();
            assert_eq!(controls.hit(dot.x, dot.y), Some(ControlHit::Indicator(index)));
        }
        // Gap between dots
        let first = controls.indicator(0).unwrap();
        assert_eq!(controls.hit(first.x + 1, 10), None);
    }

    #[test]
    fn test_indicators_truncate_when_narrow() {
        let controls = Controls::new(Rect::new(0, 0, 14, 1), 20);
        assert_eq!(controls.visible_indicators(), 3);
        assert!(controls.indicator(3).is_none());
        assert_eq!(controls.hit(controls.indicator(2).unwrap().x, 0), Some(ControlHit::Indicator(2)));
    }
}
