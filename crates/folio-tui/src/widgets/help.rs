use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpWidget;

impl HelpWidget {
    /// Render the help overlay on top of the page
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();

        let entries: [(&str, &str); 10] = [
            ("j / k", "scroll down / up"),
            ("Ctrl+d / Ctrl+u", "half page down / up"),
            ("Tab / Shift+Tab", "next / previous section"),
            ("1-9", "jump to a nav entry"),
            ("gg / G", "top / bottom of page"),
            ("Left / Right", "previous / next slide"),
            ("click dots", "jump to a slide"),
            ("drag", "swipe a gallery"),
            ("p", "toggle autoplay"),
            ("q", "quit"),
        ];

        let popup_width = 46u16.min(area.width.saturating_sub(4));
        let popup_height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines = vec![Line::default()];
        for (keys, what) in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:<16}", keys),
                    Style::default()
                        .fg(theme.yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(what, Style::default().fg(theme.fg1)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "any key to close",
            Style::default().fg(theme.grey1),
        )).alignment(Alignment::Center));

        frame.render_widget(Paragraph::new(lines), inner_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
