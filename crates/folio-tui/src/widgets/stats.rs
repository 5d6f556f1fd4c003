use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::center_pad;
use crate::app::StatView;
use crate::counter::CounterBank;
use crate::theme::Theme;

pub struct StatsWidget;

impl StatsWidget {
    /// Build the stats row: animated values on one line, labels below,
    /// each stat centered in an equal column share.
    pub fn lines(
        section: usize,
        title: Option<&str>,
        views: &[StatView],
        counters: &CounterBank,
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

        if views.is_empty() {
            return lines;
        }

        let col_width = width / views.len();

        let mut value_spans = Vec::new();
        let mut label_spans = Vec::new();
        for (stat, view) in views.iter().enumerate() {
            // Counters sit at 0 until the section triggers, then count up
            let value = format!("{}{}", counters.value(section, stat), view.suffix);
            value_spans.push(Span::styled(
                pad_to(&center_pad(&value, col_width), col_width),
                Style::default()
                    .fg(theme.yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            label_spans.push(Span::styled(
                pad_to(&center_pad(&view.label, col_width), col_width),
                Style::default().fg(theme.grey2),
            ));
        }

        lines.push(Line::from(value_spans));
        lines.push(Line::from(label_spans));
        lines
    }
}

/// Right-pad a string to exactly `width` columns so stat columns abut
fn pad_to(text: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    let deficit = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(deficit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views() -> Vec<StatView> {
        vec![
            StatView {
                target: 120,
                suffix: "+".to_string(),
                label: "Projects".to_string(),
            },
            StatView {
                target: 95,
                suffix: "%".to_string(),
                label: "Returning".to_string(),
            },
        ]
    }

    #[test]
    fn test_untriggered_stats_show_zero() {
        let theme = Theme::default();
        let counters = CounterBank::new();
        let lines = StatsWidget::lines(1, Some("By the numbers"), &views(), &counters, &theme, 60);
        // title + blank + values + labels
        assert_eq!(lines.len(), 4);
        let values: String = lines[2].spans.iter().map(|s| s.content.clone()).collect();
        assert!(values.contains("0+"));
        assert!(values.contains("0%"));
    }

    #[test]
    fn test_no_title_no_stats() {
        let theme = Theme::default();
        let counters = CounterBank::new();
        let lines = StatsWidget::lines(1, None, &[], &counters, &theme, 60);
        assert!(lines.is_empty());
    }
}
