use folio_core::perf::GalleryMode;
use folio_core::Clock;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render<C: Clock + Clone>(frame: &mut Frame, area: Rect, app: &App<C>) {
        let theme = &app.theme;

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else {
            status_line(app)
        };

        let help_hint = " q:quit h/l:prev/next 1-9:jump ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn status_line<C: Clock + Clone>(app: &App<C>) -> String {
    let Some(counter) = app.carousel.counter() else {
        return " 0 / 0".to_string();
    };
    let autoplay = if app.carousel.is_auto_playing() {
        "▶ auto"
    } else {
        "⏸ manual"
    };
    let mode = match app.mode {
        GalleryMode::Animated => "animated",
        GalleryMode::Reduced => "reduced",
    };
    format!(" {counter} | {autoplay} | {mode}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use folio_core::gallery::GalleryItem;
    use folio_core::perf::StaticProbe;
    use folio_core::{AppConfig, ManualClock};

    fn app(n: usize) -> App<ManualClock> {
        let items = (0..n)
            .map(|i| GalleryItem::new(format!("{i}.png"), format!("Item {i}")))
            .collect();
        App::with_clock(
            items,
            &AppConfig::default(),
            &StaticProbe::device(8, 16.0),
            GalleryMode::Animated,
            ManualClock::new(),
        )
    }

    #[test]
    fn test_status_line_tracks_counter_and_autoplay() {
        let mut app = app(5);
        assert_eq!(status_line(&app), " 1 / 5 | ▶ auto | animated");
        app.apply(Action::Next);
        assert_eq!(status_line(&app), " 2 / 5 | ⏸ manual | animated");
    }

    #[test]
    fn test_status_line_empty() {
        assert_eq!(status_line(&app(0)), " 0 / 0");
    }
}
