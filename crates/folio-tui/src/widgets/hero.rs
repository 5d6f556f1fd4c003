use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{center_pad, wrap_text};
use crate::theme::Theme;

pub struct HeroWidget;

impl HeroWidget {
    pub fn lines(
        heading: &str,
        sub: Option<&str>,
        cta: Option<&str>,
        theme: &Theme,
        width: u16,
    ) -> Vec<Line<'static>> {
        let width = width as usize;
        let mut lines = vec![Line::default()];

        for part in wrap_text(heading, width) {
            lines.push(Line::from(Span::styled(
                center_pad(&part, width),
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        if let Some(sub) = sub {
            lines.push(Line::default());
            for part in wrap_text(sub, width) {
                lines.push(Line::from(Span::styled(
                    center_pad(&part, width),
                    Style::default().fg(theme.fg1),
                )));
            }
        }

        if let Some(cta) = cta {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                center_pad(cta, width),
                Style::default()
                    .fg(theme.grey1)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        lines.push(Line::default());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_lines_shape() {
        let theme = Theme::default();
        let lines = HeroWidget::lines("Design that ships.", Some("sub"), Some("cta"), &theme, 60);
        // blank, heading, blank, sub, blank, cta, blank
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_hero_without_extras() {
        let theme = Theme::default();
        let lines = HeroWidget::lines("Hi", None, None, &theme, 60);
        assert_eq!(lines.len(), 3);
    }
}
