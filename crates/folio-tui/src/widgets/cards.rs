use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{center_pad, wrap_text};
use folio_core::page::Card;

use crate::theme::Theme;

pub struct CardsWidget;

impl CardsWidget {
    /// Stack of bordered content cards
    pub fn lines(
        title: Option<&str>,
        cards: &[Card],
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

        // Borders eat two columns, padding two more
        let inner = width.saturating_sub(4);
        let border_style = Style::default().fg(theme.grey0);

        for (i, card) in cards.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }

            lines.push(Line::from(vec![
                Span::styled("┌─ ".to_string(), border_style),
                Span::styled(
                    card.title.clone(),
                    Style::default()
                        .fg(theme.aqua)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}┐", "─".repeat(top_fill(width, &card.title))),
                    border_style,
                ),
            ]));

            for body_line in wrap_text(&card.body, inner) {
                let fill = inner.saturating_sub(display_width(&body_line));
                lines.push(Line::from(vec![
                    Span::styled("│ ".to_string(), border_style),
                    Span::styled(body_line, Style::default().fg(theme.fg0)),
                    Span::styled(format!("{} │", " ".repeat(fill)), border_style),
                ]));
            }

            lines.push(Line::from(Span::styled(
                format!("└{}┘", "─".repeat(width.saturating_sub(2))),
                border_style,
            )));
        }

        lines
    }
}

fn display_width(s: &str) -> usize {
    use unicode_width::UnicodeWidthStr;
    s.width()
}

/// Dashes needed to close the top border after the title
fn top_fill(width: usize, title: &str) -> usize {
    // "┌─ " + title + " " + fill + "┐"
    width.saturating_sub(display_width(title) + 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_box_shape() {
        let theme = Theme::default();
        let cards = vec![Card {
            title: "Brand".to_string(),
            body: "Identity programs.".to_string(),
        }];
        let lines = CardsWidget::lines(None, &cards, &theme, 40);
        // top border, one body line, bottom border
        assert_eq!(lines.len(), 3);

        // Every rendered row fits the width exactly
        for line in &lines {
            let w: usize = line.spans.iter().map(|s| display_width(&s.content)).sum();
            assert_eq!(w, 40);
        }
    }

    #[test]
    fn test_cards_are_separated() {
        let theme = Theme::default();
        let cards = vec![
            Card {
                title: "A".to_string(),
                body: "a".to_string(),
            },
            Card {
                title: "B".to_string(),
                body: "b".to_string(),
            },
        ];
        let lines = CardsWidget::lines(Some("What I do"), &cards, &theme, 40);
        // title + blank + (3 rows per card) * 2 + separator blank
        assert_eq!(lines.len(), 9);
    }
}
