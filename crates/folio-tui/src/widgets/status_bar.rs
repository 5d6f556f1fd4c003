use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        // Show the first visible gallery's position, like "work 2/3"
        let gallery_str = app
            .visible_gallery_names()
            .first()
            .and_then(|name| {
                let index = app.slideshows.current_index(name)?;
                let count = app.slideshows.slide_count(name)?;
                Some(format!("{} {}/{}", name, index + 1, count))
            })
            .unwrap_or_default();

        let scroll_str = format!("{}/{}", app.scroll.current_scroll(), app.max_scroll());

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else if gallery_str.is_empty() {
            format!(" {} | {}", mode_str, scroll_str)
        } else {
            format!(" {} | {} | {}", mode_str, gallery_str, scroll_str)
        };

        let help_hint = " j/k:scroll Tab:sections arrows:slides ?:help q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey2).bg(theme.bg2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
