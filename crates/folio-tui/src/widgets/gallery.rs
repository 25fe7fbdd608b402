use folio_core::Clock;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::fit_width;
use crate::app::App;
use crate::layout::{self, GalleryLayout};
use crate::transition::AnimatedSlide;

pub struct GalleryWidget;

impl GalleryWidget {
    pub fn render<C: Clock + Clone>(frame: &mut Frame, layout: &GalleryLayout, app: &App<C>) {
        let theme = &app.theme;
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg0)),
            layout.stage.union(layout.caption),
        );

        if app.carousel.is_empty() {
            let placeholder = Paragraph::new("No achievements to show")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.grey1).bg(theme.bg0));
            let middle = Rect {
                y: layout.stage.y + layout.stage.height / 2,
                height: 1.min(layout.stage.height),
                ..layout.stage
            };
            frame.render_widget(placeholder, middle);
            return;
        }

        let mut center_opacity = 1.0;
        for slide in &app.slides() {
            if slide.is_center() {
                center_opacity = slide.pose.opacity;
            }
            Self::render_slide(frame, layout.stage, slide, app);
        }

        Self::render_caption(frame, layout.caption, app, center_opacity);
    }

    fn render_slide<C: Clock + Clone>(frame: &mut Frame, stage: Rect, slide: &AnimatedSlide, app: &App<C>) {
        let Some(item) = app.carousel.items().get(slide.index) else {
            return;
        };
        let drag = if slide.is_center() { app.drag_columns() } else { 0.0 };
        let bounds = layout::slide_bounds(stage, slide.slot, &slide.pose, drag);
        let Some(rect) = layout::clip(bounds, stage) else {
            return;
        };

        let theme = &app.theme;
        let pose = &slide.pose;
        let frame_color = theme.fade(theme.frame, pose.brightness, pose.opacity);
        let text_color = theme.fade(theme.fg0, pose.brightness, pose.opacity);
        let detail_color = theme.fade(theme.grey1, pose.brightness, pose.opacity);

        // Sharp slides get rounded corners, blurred ones a plain frame
        let border_type = if pose.blur < 0.5 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        };
        let mut border_style = Style::default().fg(frame_color).bg(theme.bg0);
        if slide.is_center() && app.is_dragging() {
            border_style = border_style.fg(theme.fade(theme.accent, 1.0, pose.opacity));
        }

        let name = item
            .image
            .rsplit('/')
            .next()
            .unwrap_or(item.image.as_str());
        let inner_width = rect.width.saturating_sub(4) as usize;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .title(Span::styled(
                fit_width(&format!(" {} ", slide.index + 1), inner_width),
                Style::default().fg(text_color),
            ));

        let status = app
            .assets
            .get(slide.index)
            .map(|asset| asset.label())
            .unwrap_or_default();

        let mut lines = Vec::new();
        let inner_height = rect.height.saturating_sub(2);
        for _ in 0..inner_height.saturating_sub(2) / 2 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            fit_width(name, inner_width),
            Style::default().fg(text_color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            fit_width(&status, inner_width),
            Style::default().fg(detail_color),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.bg0));

        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
    }

    fn render_caption<C: Clock + Clone>(frame: &mut Frame, area: Rect, app: &App<C>, opacity: f64) {
        let Some(item) = app.carousel.current_item() else {
            return;
        };
        let theme = &app.theme;
        let color = theme.fade(theme.fg1, 1.0, opacity);
        let caption = Paragraph::new(Line::from(Span::styled(
            item.text.clone(),
            Style::default().fg(color).add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.bg0));
        frame.render_widget(caption, area);
    }
}
