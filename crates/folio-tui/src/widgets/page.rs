use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

use folio_core::page::Section;

use super::{CardsWidget, GalleryWidget, HeroWidget, StatsWidget, TimelineWidget};
use crate::app::App;
use crate::layout::{GalleryLayout, PageLayout, SectionSpan};
use crate::theme::Theme;

/// Blank rows between sections
const SECTION_GAP: u16 = 1;

pub struct PageWidget;

impl PageWidget {
    /// Render the whole page as one scrolled column of lines.
    ///
    /// Building the lines also yields the frame's page geometry (section
    /// spans, gallery click targets), which is stored on the app for the
    /// input adapters and observers to use.
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        // One column of padding on each side
        let content = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        app.page_area = content;

        let width = content.width;
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut sections: Vec<SectionSpan> = Vec::new();
        let mut galleries: Vec<GalleryLayout> = Vec::new();

        for (index, section) in app.page.sections.iter().enumerate() {
            if !lines.is_empty() {
                for _ in 0..SECTION_GAP {
                    lines.push(Line::default());
                }
            }
            let top = lines.len() as u16;

            let mut section_lines = match section {
                Section::Hero {
                    heading, sub, cta, ..
                } => HeroWidget::lines(heading, sub.as_deref(), cta.as_deref(), &app.theme, width),
                Section::Stats { title, .. } => {
                    let views = app.stats.get(&index).map(|v| v.as_slice()).unwrap_or(&[]);
                    StatsWidget::lines(
                        index,
                        title.as_deref(),
                        views,
                        &app.counters,
                        &app.theme,
                        width,
                    )
                }
                Section::Cards { title, cards, .. } => {
                    CardsWidget::lines(title.as_deref(), cards, &app.theme, width)
                }
                Section::Timeline {
                    title, entries, ..
                } => TimelineWidget::lines(title.as_deref(), entries, &app.theme, width),
                Section::Gallery {
                    title, name, slides, ..
                } => {
                    let built = GalleryWidget::lines(
                        title.as_deref(),
                        name,
                        slides,
                        &app.slideshows,
                        &app.theme,
                        width,
                    );
                    galleries.push(GalleryLayout {
                        name: name.clone(),
                        top,
                        height: built.lines.len() as u16,
                        controls_row: top + built.controls_row_offset,
                        left_arrow_col: built.left_arrow_col,
                        right_arrow_col: built.right_arrow_col,
                        dot_columns: built.dot_columns,
                    });
                    built.lines
                }
            };

            // Sections still revealing render faded toward the background
            let factor = app.reveal.factor(index);
            if factor < 1.0 {
                fade_lines(&mut section_lines, &app.theme, factor);
            }

            let height = section_lines.len() as u16;
            lines.extend(section_lines);
            sections.push(SectionSpan { index, top, height });
        }

        app.layout = PageLayout {
            total_height: lines.len() as u16,
            sections,
            galleries,
        };

        let scroll = app.scroll.current_scroll();
        let paragraph = Paragraph::new(Text::from(lines))
            .style(Style::default().bg(app.theme.bg0).fg(app.theme.fg0))
            .scroll((scroll, 0));
        frame.render_widget(paragraph, content);
    }
}

/// Blend every span's foreground toward the background. factor 0 hides the
/// section entirely, 1 leaves it untouched.
fn fade_lines(lines: &mut [Line<'static>], theme: &Theme, factor: f64) {
    for line in lines.iter_mut() {
        for span in line.spans.iter_mut() {
            let fg = span.style.fg.unwrap_or(theme.fg0);
            span.style.fg = Some(Theme::mix(theme.bg0, fg, factor));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use ratatui::text::Span;

    #[test]
    fn test_fade_lines_toward_background() {
        let theme = Theme::default();
        let mut lines = vec![Line::from(Span::styled(
            "hi",
            Style::default().fg(Color::Rgb(200, 200, 200)),
        ))];
        fade_lines(&mut lines, &theme, 0.0);
        assert_eq!(lines[0].spans[0].style.fg, Some(theme.bg0));

        let mut lines = vec![Line::from(Span::styled(
            "hi",
            Style::default().fg(Color::Rgb(200, 200, 200)),
        ))];
        fade_lines(&mut lines, &theme, 1.0);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Rgb(200, 200, 200)));
    }
}
