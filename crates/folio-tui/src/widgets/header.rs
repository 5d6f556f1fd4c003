use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Rows the fixed header occupies (brand/nav line + rule)
pub const HEADER_HEIGHT: u16 = 2;

/// Scroll offset past which the header rule switches to the heavy style,
/// the terminal version of the shadow the page header gains on scroll
pub const HEADER_SHADOW_THRESHOLD: u16 = 8;

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let header = &app.page.header;

        // Brand on the left, numbered nav entries on the right
        let brand_span = Span::styled(
            format!(" {}", header.brand),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );

        let mut nav_spans: Vec<Span> = Vec::new();
        for (i, entry) in header.nav.iter().enumerate() {
            nav_spans.push(Span::styled(
                format!("{}", i + 1),
                Style::default().fg(theme.grey1),
            ));
            nav_spans.push(Span::styled(
                format!(" {}  ", entry.label),
                Style::default().fg(theme.fg1),
            ));
        }

        let brand_width = header.brand.width() + 1;
        let nav_width: usize = header
            .nav
            .iter()
            .map(|e| e.label.width() + 4)
            .sum();
        let padding = (area.width as usize).saturating_sub(brand_width + nav_width);

        let mut spans = vec![brand_span, Span::raw(" ".repeat(padding))];
        spans.extend(nav_spans);

        // Past the threshold the rule goes heavy, like the shadow the
        // page header picks up once scrolled
        let scrolled = app.scroll.current_scroll() > HEADER_SHADOW_THRESHOLD;
        let rule = if scrolled {
            Line::from(Span::styled(
                "━".repeat(area.width as usize),
                Style::default().fg(theme.grey2),
            ))
        } else {
            Line::from(Span::styled(
                "─".repeat(area.width as usize),
                Style::default().fg(theme.grey0),
            ))
        };

        let paragraph = Paragraph::new(vec![Line::from(spans), rule])
            .style(Style::default().bg(theme.bg1).fg(theme.fg0));
        frame.render_widget(paragraph, area);
    }
}
