use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use folio_core::page::{Page, Section};
use folio_core::slideshow::{visible_galleries, Autoplay, SlideshowManager, SwipeTracker};
use folio_core::AppConfig;
use ratatui::layout::Rect;

use crate::counter::CounterBank;
use crate::layout::PageLayout;
use crate::reveal::RevealTracker;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// One stat parsed for display: "120+" becomes target 120, suffix "+"
#[derive(Debug, Clone)]
pub struct StatView {
    pub target: u64,
    pub suffix: String,
    pub label: String,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Active theme
    pub theme: Theme,
    /// The page being displayed
    pub page: Page,
    /// Parsed stats per stats-section index
    pub stats: HashMap<usize, Vec<StatView>>,
    /// Page scroll position and animation
    pub scroll: ScrollAnimator,
    /// Gallery slideshow state, shared by all input adapters
    pub slideshows: SlideshowManager,
    /// In-progress gallery drags
    pub swipe: SwipeTracker,
    /// Per-gallery autoplay timers
    pub autoplay: Autoplay,
    /// Scroll-triggered section reveals
    pub reveal: RevealTracker,
    /// Animated stat counters
    pub counters: CounterBank,
    /// Page geometry computed by the last render
    pub layout: PageLayout,
    /// Screen rect the page content occupies (set during draw)
    pub page_area: Rect,
    /// Current application mode
    pub mode: Mode,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Set once the first full frame has been drawn
    pub loaded: bool,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, page: Page) -> Self {
        let slideshows = SlideshowManager::discover(&page);
        let swipe = SwipeTracker::new(config.slideshow.swipe_threshold);

        // Galleries can opt into autoplay from the page file
        let mut autoplay = Autoplay::new();
        let mut reveal = RevealTracker::new();
        let mut stats = HashMap::new();
        for (index, section) in page.sections.iter().enumerate() {
            match section {
                Section::Gallery {
                    name, autoplay_ms, ..
                } => {
                    if let Some(ms) = autoplay_ms {
                        autoplay.start(name, Duration::from_millis(*ms));
                    }
                }
                Section::Stats {
                    stats: stat_defs, ..
                } => {
                    reveal.observe(index);
                    let views = stat_defs
                        .iter()
                        .filter_map(|def| {
                            // Values were validated at page load
                            def.parse_value().ok().map(|(target, suffix)| StatView {
                                target,
                                suffix: suffix.to_string(),
                                label: def.label.clone(),
                            })
                        })
                        .collect();
                    stats.insert(index, views);
                }
                Section::Cards { .. } | Section::Timeline { .. } => {
                    reveal.observe(index);
                }
                Section::Hero { .. } => {}
            }
        }

        Self {
            scroll: ScrollAnimator::new(config.ui.scroll.clone()),
            config,
            theme,
            page,
            stats,
            slideshows,
            swipe,
            autoplay,
            reveal,
            counters: CounterBank::new(),
            layout: PageLayout::default(),
            page_area: Rect::default(),
            mode: Mode::Normal,
            pending_key: None,
            status_message: None,
            should_quit: false,
            loaded: false,
        }
    }

    /// App over the built-in sample page with default config, for tests
    pub fn sample() -> Self {
        Self::new(
            Arc::new(AppConfig::default()),
            Theme::default(),
            Page::sample(),
        )
    }

    /// Furthest the page can scroll down
    pub fn max_scroll(&self) -> u16 {
        self.layout
            .total_height
            .saturating_sub(self.page_area.height)
    }

    /// Advance all time-driven state: scroll animation, reveals, counter
    /// triggers, and autoplay. Called on every event-loop pass.
    pub fn tick(&mut self) {
        let max_scroll = self.max_scroll();
        let scroll = self.scroll.update(max_scroll);
        let viewport_height = self.page_area.height;

        self.reveal
            .update(&self.layout.sections, scroll, viewport_height);

        // Stats sections start counting once half-visible, one-shot
        for span in &self.layout.sections {
            if let Some(views) = self.stats.get(&span.index) {
                let targets: Vec<u64> = views.iter().map(|v| v.target).collect();
                self.counters.maybe_trigger(
                    span.index,
                    &targets,
                    span.top,
                    span.height,
                    scroll,
                    scroll + viewport_height,
                );
            }
        }

        for name in self.autoplay.poll() {
            self.slideshows.change_slide(&name, 1);
        }
    }

    /// Whether the event loop should run at the animation tick rate
    pub fn needs_fast_tick(&self) -> bool {
        self.scroll.needs_update() || self.reveal.any_animating() || self.counters.any_running()
    }

    /// Scroll by a number of lines (wheel, j/k)
    pub fn scroll_lines(&mut self, delta: i32) {
        let max_scroll = self.max_scroll();
        self.scroll.scroll_by(delta, max_scroll);
    }

    /// Animate to the top of a section
    pub fn scroll_to_section(&mut self, index: usize) {
        if let Some(top) = self.layout.section_top(index) {
            let max_scroll = self.max_scroll();
            self.scroll.scroll_to(top, max_scroll);
        }
    }

    /// Animate to the next section below the current target
    pub fn next_section(&mut self) {
        let current = self.scroll.target_scroll();
        let next = self
            .layout
            .sections
            .iter()
            .map(|s| s.top)
            .find(|&top| top > current);
        if let Some(top) = next {
            let max_scroll = self.max_scroll();
            self.scroll.scroll_to(top, max_scroll);
        }
    }

    /// Animate to the previous section above the current target
    pub fn prev_section(&mut self) {
        let current = self.scroll.target_scroll();
        let prev = self
            .layout
            .sections
            .iter()
            .map(|s| s.top)
            .filter(|&top| top < current)
            .last();
        let max_scroll = self.max_scroll();
        self.scroll.scroll_to(prev.unwrap_or(0), max_scroll);
    }

    /// Smooth-scroll to the section a header nav entry points at
    pub fn go_to_nav(&mut self, nav_index: usize) {
        let anchor = match self.page.header.nav.get(nav_index) {
            Some(entry) => entry.anchor.clone(),
            None => return,
        };
        if let Some(section) = self.page.section_by_anchor(&anchor) {
            self.scroll_to_section(section);
        }
    }

    pub fn jump_to_top(&mut self) {
        let max_scroll = self.max_scroll();
        self.scroll.scroll_to(0, max_scroll);
    }

    pub fn jump_to_bottom(&mut self) {
        let max_scroll = self.max_scroll();
        self.scroll.scroll_to(max_scroll, max_scroll);
    }

    /// Names of galleries whose rows overlap the current viewport
    pub fn visible_gallery_names(&self) -> Vec<String> {
        let scroll = self.scroll.current_scroll() as i32;
        let viewport_bottom = scroll + self.page_area.height as i32;
        let spans = self.layout.gallery_spans();
        visible_galleries(&spans, scroll, viewport_bottom)
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Fan a slide step out to every visible gallery
    pub fn change_visible_slides(&mut self, direction: i64) {
        for name in self.visible_gallery_names() {
            self.slideshows.change_slide(&name, direction);
        }
    }

    /// Toggle autoplay for every visible gallery
    pub fn toggle_visible_autoplay(&mut self) {
        let period = Duration::from_millis(self.config.slideshow.autoplay_interval_ms);
        let names = self.visible_gallery_names();
        if names.is_empty() {
            self.set_status("No gallery in view");
            return;
        }
        for name in &names {
            let running = self.autoplay.toggle(name, period);
            self.set_status(format!(
                "Autoplay {} for '{}'",
                if running { "on" } else { "off" },
                name
            ));
        }
    }

    /// Map a screen position to the gallery under it, returning the name
    /// and the page row the position corresponds to
    pub fn gallery_at_screen(&self, column: u16, row: u16) -> Option<(String, u16)> {
        let area = self.page_area;
        if row < area.y
            || row >= area.y + area.height
            || column < area.x
            || column >= area.x + area.width
        {
            return None;
        }
        let page_row = row - area.y + self.scroll.current_scroll();
        self.layout
            .gallery_at(page_row)
            .map(|g| (g.name.clone(), page_row))
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GalleryLayout, SectionSpan};

    fn app_with_layout() -> App {
        let mut app = App::sample();
        app.page_area = Rect::new(1, 2, 80, 40);
        app.layout = PageLayout {
            total_height: 120,
            sections: vec![
                SectionSpan { index: 0, top: 0, height: 10 },
                SectionSpan { index: 1, top: 12, height: 20 },
                SectionSpan { index: 3, top: 50, height: 14 },
            ],
            galleries: vec![
                GalleryLayout {
                    name: "work".to_string(),
                    top: 50,
                    height: 14,
                    controls_row: 62,
                    left_arrow_col: 2,
                    right_arrow_col: 78,
                    dot_columns: vec![38, 40, 42],
                },
                GalleryLayout {
                    name: "press".to_string(),
                    top: 100,
                    height: 14,
                    controls_row: 112,
                    left_arrow_col: 2,
                    right_arrow_col: 78,
                    dot_columns: vec![38, 40, 42, 44],
                },
            ],
        };
        app
    }

    #[test]
    fn test_visible_galleries_follow_scroll() {
        let mut app = app_with_layout();
        // Viewport 0..40: no gallery reached yet
        assert!(app.visible_gallery_names().is_empty());

        app.scroll.set_scroll(20);
        assert_eq!(app.visible_gallery_names(), vec!["work".to_string()]);

        app.scroll.set_scroll(80);
        assert_eq!(app.visible_gallery_names(), vec!["press".to_string()]);

        // Both partially in view
        app.scroll.set_scroll(62);
        assert_eq!(
            app.visible_gallery_names(),
            vec!["work".to_string(), "press".to_string()]
        );
    }

    #[test]
    fn test_change_visible_slides_fans_out() {
        let mut app = app_with_layout();
        app.scroll.set_scroll(62);
        app.change_visible_slides(1);
        assert_eq!(app.slideshows.current_index("work"), Some(1));
        assert_eq!(app.slideshows.current_index("press"), Some(1));
    }

    #[test]
    fn test_gallery_at_screen_maps_rows() {
        let mut app = app_with_layout();
        app.scroll.set_scroll(48);
        // Screen row 4 -> page row 4 - 2 + 48 = 50: top of "work"
        let hit = app.gallery_at_screen(10, 4);
        assert_eq!(hit, Some(("work".to_string(), 50)));
        // Outside the page area
        assert_eq!(app.gallery_at_screen(10, 1), None);
    }

    #[test]
    fn test_next_prev_section() {
        let mut app = app_with_layout();
        app.next_section();
        // Smooth scrolling: the animation targets the next section top
        assert_eq!(app.scroll.target_scroll(), 12);

        app.scroll.set_scroll(50);
        app.prev_section();
        assert_eq!(app.scroll.target_scroll(), 12);
    }

    #[test]
    fn test_autoplay_started_from_page() {
        let app = App::sample();
        // The sample page's "press" gallery declares autoplay
        assert!(app.autoplay.is_running("press"));
        assert!(!app.autoplay.is_running("work"));
    }
}
