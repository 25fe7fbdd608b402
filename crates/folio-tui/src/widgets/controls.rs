use folio_core::Clock;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::layout::Controls;

/// Prev/next buttons and the indicator row
pub struct ControlsWidget;

impl ControlsWidget {
    pub fn render<C: Clock + Clone>(frame: &mut Frame, area: Rect, app: &App<C>) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        if app.carousel.is_empty() {
            return;
        }

        let controls = Controls::new(area, app.carousel.len());
        let button = Style::default().fg(theme.fg0).bg(theme.bg1);
        frame.render_widget(Paragraph::new(Span::styled("[‹]", button)), controls.previous_button());
        frame.render_widget(Paragraph::new(Span::styled("[›]", button)), controls.next_button());

        for indicator in app.carousel.indicators() {
            let Some(rect) = controls.indicator(indicator.index) else {
                break;
            };
            let (symbol, color) = if indicator.active {
                ("●", theme.indicator)
            } else {
                ("○", theme.grey0)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(symbol, Style::default().fg(color).bg(theme.bg0))),
                rect,
            );
        }
    }
}
