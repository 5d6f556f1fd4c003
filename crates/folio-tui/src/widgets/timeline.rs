use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{center_pad, wrap_text};
use folio_core::page::TimelineEntry;

use crate::theme::Theme;

pub struct TimelineWidget;

impl TimelineWidget {
    pub fn lines(
        title: Option<&str>,
        entries: &[TimelineEntry],
        theme: &Theme,
        width: u16,
    ) -> Vec<Line<'static>> {
        let width = width as usize;
        let mut lines = Vec::new();

        if let Some(title) = title {
            lines.push(Line::from(Span::styled(
                center_pad(title, width),
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
        }

        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(Span::styled(
                    "  │".to_string(),
                    Style::default().fg(theme.grey0),
                )));
            }

            lines.push(Line::from(vec![
                Span::styled("  ● ".to_string(), Style::default().fg(theme.accent)),
                Span::styled(entry.period.clone(), Style::default().fg(theme.orange)),
                Span::styled("  ".to_string(), Style::default()),
                Span::styled(
                    entry.title.clone(),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
            ]));

            for body_line in wrap_text(&entry.body, width.saturating_sub(6)) {
                lines.push(Line::from(vec![
                    Span::styled("  │   ".to_string(), Style::default().fg(theme.grey0)),
                    Span::styled(body_line, Style::default().fg(theme.grey2)),
                ]));
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_shape() {
        let theme = Theme::default();
        let entries = vec![
            TimelineEntry {
                period: "2016".to_string(),
                title: "Studio".to_string(),
                body: "Junior designer.".to_string(),
            },
            TimelineEntry {
                period: "2018".to_string(),
                title: "Northwind".to_string(),
                body: "Product designer.".to_string(),
            },
        ];
        let lines = TimelineWidget::lines(Some("Journey"), &entries, &theme, 60);
        // title + blank + (head + body) + connector + (head + body)
        assert_eq!(lines.len(), 7);
    }
}
