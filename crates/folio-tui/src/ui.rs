use folio_core::Clock;
use ratatui::Frame;

use crate::app::App;
use crate::layout::GalleryLayout;
use crate::widgets::{ControlsWidget, GalleryWidget, StatusBarWidget};

/// Draw the whole gallery view
pub fn draw<C: Clock + Clone>(frame: &mut Frame, app: &App<C>) {
    let layout = GalleryLayout::new(frame.area());
    GalleryWidget::render(frame, &layout, app);
    ControlsWidget::render(frame, layout.controls, app);
    StatusBarWidget::render(frame, layout.status, app);
}
