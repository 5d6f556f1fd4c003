use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{center_pad, wrap_text};
use folio_core::page::Slide;
use folio_core::SlideshowManager;

use crate::theme::Theme;

/// Rows of slide text shown inside the panel
const BODY_ROWS: usize = 2;

pub struct GalleryWidget;

/// Rendered gallery lines plus the geometry of its click targets,
/// relative to the gallery's first row
pub struct GalleryLines {
    pub lines: Vec<Line<'static>>,
    pub controls_row_offset: u16,
    pub left_arrow_col: u16,
    pub right_arrow_col: u16,
    pub dot_columns: Vec<u16>,
}

impl GalleryWidget {
    /// Build one gallery: optional heading, the slide panel showing the
    /// active slide, and a controls row with arrows and indicator dots.
    ///
    /// The active slide and dot come straight from the manager's state
    /// vectors; when the stored index is out of range nothing is active
    /// and the panel renders empty.
    pub fn lines(
        title: Option<&str>,
        name: &str,
        slides: &[Slide],
        manager: &SlideshowManager,
        theme: &Theme,
        width: u16,
    ) -> GalleryLines {
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

        let border_style = Style::default().fg(theme.grey0);
        let inner = width.saturating_sub(2);

        let slide_states = manager.slide_states(name);
        let active = slide_states.iter().position(|&a| a);

        lines.push(Line::from(Span::styled(
            format!("┌{}┐", "─".repeat(inner)),
            border_style,
        )));

        // Panel content: fixed height so the page doesn't shift while
        // navigating. Blank padding row, slide title, body rows, padding.
        let mut content: Vec<Line> = Vec::new();
        content.push(Line::default());
        match active.and_then(|i| slides.get(i)) {
            Some(slide) => {
                content.push(Line::from(Span::styled(
                    center_pad(&slide.title, inner),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                )));
                let mut body_lines = wrap_text(&slide.body, inner.saturating_sub(4));
                body_lines.truncate(BODY_ROWS);
                for body_line in &body_lines {
                    content.push(Line::from(Span::styled(
                        center_pad(body_line, inner),
                        Style::default().fg(theme.grey2),
                    )));
                }
                for _ in body_lines.len()..BODY_ROWS {
                    content.push(Line::default());
                }
            }
            // Out-of-range index: no slide is active, the panel is empty
            None => {
                for _ in 0..=BODY_ROWS {
                    content.push(Line::default());
                }
            }
        }
        content.push(Line::default());

        for row in content {
            lines.push(boxed_row(row, inner, border_style));
        }

        lines.push(Line::from(Span::styled(
            format!("└{}┘", "─".repeat(inner)),
            border_style,
        )));

        // Controls row: arrows at the panel edges, dots centered
        let controls_row_offset = lines.len() as u16;
        let dot_states = manager.indicator_states(name);
        let dot_count = dot_states.len();
        let dots_width = if dot_count == 0 { 0 } else { 2 * dot_count - 1 };
        let dots_start = width.saturating_sub(dots_width) / 2;
        let left_arrow_col = 1usize;
        let right_arrow_col = width.saturating_sub(2);

        let arrow_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::raw(" "),
            Span::styled("❮".to_string(), arrow_style),
            Span::raw(" ".repeat(dots_start.saturating_sub(left_arrow_col + 1))),
        ];
        let mut dot_columns = Vec::with_capacity(dot_count);
        for (i, &dot_active) in dot_states.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            dot_columns.push((dots_start + 2 * i) as u16);
            if dot_active {
                spans.push(Span::styled("●".to_string(), Style::default().fg(theme.accent)));
            } else {
                spans.push(Span::styled("○".to_string(), Style::default().fg(theme.grey1)));
            }
        }
        spans.push(Span::raw(
            " ".repeat(right_arrow_col.saturating_sub(dots_start + dots_width)),
        ));
        spans.push(Span::styled("❯".to_string(), arrow_style));
        lines.push(Line::from(spans));

        GalleryLines {
            lines,
            controls_row_offset,
            left_arrow_col: left_arrow_col as u16,
            right_arrow_col: right_arrow_col as u16,
            dot_columns,
        }
    }
}

/// Wrap a content line in vertical borders, padding it to the panel width
fn boxed_row(row: Line<'static>, inner: usize, border_style: Style) -> Line<'static> {
    use unicode_width::UnicodeWidthStr;
    let used: usize = row.spans.iter().map(|s| s.content.width()).sum();
    let mut spans = vec![Span::styled("│".to_string(), border_style)];
    spans.extend(row.spans);
    spans.push(Span::raw(" ".repeat(inner.saturating_sub(used))));
    spans.push(Span::styled("│".to_string(), border_style));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Page;

    fn setup() -> (Page, SlideshowManager) {
        let page = Page::from_str(
            r#"
            [[section]]
            kind = "gallery"
            name = "work"
            slides = [
                { title = "One", body = "first" },
                { title = "Two", body = "second" },
                { title = "Three", body = "third" },
            ]
            "#,
        )
        .unwrap();
        let manager = SlideshowManager::discover(&page);
        (page, manager)
    }

    fn slides(page: &Page) -> &[Slide] {
        match &page.sections[0] {
            folio_core::page::Section::Gallery { slides, .. } => slides,
            _ => unreachable!(),
        }
    }

    fn rendered_text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_active_slide_is_rendered() {
        let (page, mut manager) = setup();
        manager.go_to_slide("work", 1);
        let out = GalleryWidget::lines(None, "work", slides(&page), &manager, &Theme::default(), 60);
        let text = rendered_text(&out.lines);
        assert!(text.contains("Two"));
        assert!(!text.contains("One"));
        assert!(!text.contains("Three"));
    }

    #[test]
    fn test_exactly_one_dot_active() {
        let (page, manager) = setup();
        let out = GalleryWidget::lines(None, "work", slides(&page), &manager, &Theme::default(), 60);
        let text = rendered_text(&out.lines);
        assert_eq!(text.matches('●').count(), 1);
        assert_eq!(text.matches('○').count(), 2);
        assert_eq!(out.dot_columns.len(), 3);
    }

    #[test]
    fn test_out_of_range_renders_empty_panel() {
        let (page, mut manager) = setup();
        manager.go_to_slide("work", 9);
        let out = GalleryWidget::lines(None, "work", slides(&page), &manager, &Theme::default(), 60);
        let text = rendered_text(&out.lines);
        assert!(!text.contains("One"));
        assert!(!text.contains("Two"));
        assert!(!text.contains("Three"));
        // No dot is active either
        assert_eq!(text.matches('●').count(), 0);
    }

    #[test]
    fn test_gallery_height_is_stable_across_slides() {
        let (page, mut manager) = setup();
        let first =
            GalleryWidget::lines(None, "work", slides(&page), &manager, &Theme::default(), 60)
                .lines
                .len();
        manager.change_slide("work", 1);
        let second =
            GalleryWidget::lines(None, "work", slides(&page), &manager, &Theme::default(), 60)
                .lines
                .len();
        assert_eq!(first, second);
    }

    #[test]
    fn test_control_columns_inside_width() {
        let (page, manager) = setup();
        let out =
            GalleryWidget::lines(Some("Work"), "work", slides(&page), &manager, &Theme::default(), 60);
        assert!(out.left_arrow_col < out.right_arrow_col);
        assert!(out.right_arrow_col < 60);
        for col in &out.dot_columns {
            assert!(*col > out.left_arrow_col && *col < out.right_arrow_col);
        }
    }
}
