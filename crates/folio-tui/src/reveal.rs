//! Scroll-triggered section reveals.
//!
//! Sections registered with the tracker start hidden and fade in once
//! enough of them scrolls into view, the terminal version of the page's
//! intersection-observer fade-ins. A section that has revealed stays
//! revealed; scrolling away never hides it again.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::layout::SectionSpan;
use crate::scroll::easing::{EasingType, EasingTypeExt};
use crate::scroll::timing::progress;

/// Fraction of a section that must be in view before it reveals
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Rows shaved off the viewport bottom, so sections reveal slightly after
/// entering rather than at the very first row
pub const REVEAL_BOTTOM_MARGIN: u16 = 3;
/// Fade-in duration
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy)]
enum RevealState {
    Hidden,
    Revealing(Instant),
    Visible,
}

/// Tracks the reveal state of observed sections
#[derive(Debug, Default)]
pub struct RevealTracker {
    states: HashMap<usize, RevealState>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section for reveal animation. Unregistered sections are
    /// always shown at full strength.
    pub fn observe(&mut self, section: usize) {
        self.states.entry(section).or_insert(RevealState::Hidden);
    }

    /// Check every observed section against the scrolled viewport and
    /// advance reveal animations. Call once per frame.
    pub fn update(&mut self, spans: &[SectionSpan], scroll: u16, viewport_height: u16) {
        let now = Instant::now();
        let viewport_bottom = (scroll + viewport_height).saturating_sub(REVEAL_BOTTOM_MARGIN);

        for span in spans {
            let state = match self.states.get_mut(&span.index) {
                Some(state) => state,
                None => continue,
            };
            match *state {
                RevealState::Hidden => {
                    if visible_fraction(span.top, span.height, scroll, viewport_bottom)
                        >= REVEAL_THRESHOLD
                    {
                        *state = RevealState::Revealing(now);
                    }
                }
                RevealState::Revealing(start) => {
                    if now.duration_since(start) >= REVEAL_DURATION {
                        *state = RevealState::Visible;
                    }
                }
                RevealState::Visible => {}
            }
        }
    }

    /// Reveal strength of a section in [0, 1]: 0 hidden, 1 fully revealed.
    /// Sections never registered report 1.
    pub fn factor(&self, section: usize) -> f64 {
        match self.states.get(&section) {
            None => 1.0,
            Some(RevealState::Hidden) => 0.0,
            Some(RevealState::Revealing(start)) => {
                EasingType::Cubic.apply(progress(*start, REVEAL_DURATION))
            }
            Some(RevealState::Visible) => 1.0,
        }
    }

    /// Whether any reveal animation is mid-flight (drives the fast tick)
    pub fn any_animating(&self) -> bool {
        self.states
            .values()
            .any(|s| matches!(s, RevealState::Revealing(_)))
    }
}

/// Fraction of a span lying inside the viewport, in [0, 1]
pub fn visible_fraction(top: u16, height: u16, viewport_top: u16, viewport_bottom: u16) -> f64 {
    if height == 0 || viewport_bottom <= viewport_top {
        return 0.0;
    }
    let bottom = top + height;
    let overlap_top = top.max(viewport_top);
    let overlap_bottom = bottom.min(viewport_bottom);
    if overlap_bottom <= overlap_top {
        return 0.0;
    }
    (overlap_bottom - overlap_top) as f64 / height as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(index: usize, top: u16, height: u16) -> SectionSpan {
        SectionSpan { index, top, height }
    }

    #[test]
    fn test_visible_fraction() {
        // Fully inside
        assert_eq!(visible_fraction(10, 10, 0, 40), 1.0);
        // Half inside at the bottom edge
        assert_eq!(visible_fraction(35, 10, 0, 40), 0.5);
        // Outside
        assert_eq!(visible_fraction(50, 10, 0, 40), 0.0);
    }

    #[test]
    fn test_hidden_until_threshold() {
        let mut tracker = RevealTracker::new();
        tracker.observe(0);

        // 20-row section starting at row 100, viewport ends well above it
        tracker.update(&[span(0, 100, 20)], 0, 40);
        assert_eq!(tracker.factor(0), 0.0);

        // Scroll down until ~10% shows (3 of 20 rows past the margin)
        tracker.update(&[span(0, 100, 20)], 66, 40);
        assert!(tracker.any_animating());
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut tracker = RevealTracker::new();
        tracker.observe(0);
        let spans = [span(0, 0, 10)];
        tracker.update(&spans, 0, 40);
        assert!(tracker.any_animating());

        // Scrolled far away: the reveal keeps running toward 1 instead of
        // dropping back to hidden
        tracker.update(&spans, 500, 40);
        let still_revealed = tracker.any_animating() || tracker.factor(0) >= 1.0;
        assert!(still_revealed);
    }

    #[test]
    fn test_unobserved_sections_fully_visible() {
        let tracker = RevealTracker::new();
        assert_eq!(tracker.factor(7), 1.0);
    }
}
