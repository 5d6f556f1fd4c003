//! Multi-instance gallery slideshows.
//!
//! A page can carry any number of named galleries. They share one
//! [`SlideshowManager`], which owns the current index for every instance,
//! and a set of input adapters that all funnel into `change_slide`:
//!
//! - `swipe` - horizontal mouse drags
//! - `visibility` - arrow keys, fanned out to every gallery in view
//! - `autoplay` - per-instance timers polled from the event loop
//!
//! Operations addressed at an unknown instance name are silent no-ops.

pub mod autoplay;
pub mod swipe;
pub mod visibility;

pub use autoplay::Autoplay;
pub use swipe::SwipeTracker;
pub use visibility::{visible_galleries, GallerySpan};

use std::collections::HashMap;

use crate::page::Page;

/// State of one gallery instance
#[derive(Debug, Clone)]
struct Instance {
    /// Current slide index. `go_to_slide` stores whatever it is given,
    /// so this can sit outside `0..slide_count`.
    index: usize,
    slide_count: usize,
}

/// Owns the current index of every gallery on the page.
///
/// Slide counts are resolved once at discovery, so navigation never has to
/// re-scan the page. Exactly one slide and one indicator per instance read
/// as active while the index is in range; an out-of-range index (possible
/// through `go_to_slide`) matches nothing and everything reads inactive.
#[derive(Debug, Default)]
pub struct SlideshowManager {
    instances: HashMap<String, Instance>,
}

impl SlideshowManager {
    /// Scan the page for galleries and start every instance at slide 0
    pub fn discover(page: &Page) -> Self {
        let mut manager = Self::default();
        manager.rediscover(page);
        manager
    }

    /// Re-run discovery. All indices reset to 0, including instances that
    /// were already known.
    pub fn rediscover(&mut self, page: &Page) {
        self.instances.clear();
        for (name, slide_count) in page.galleries() {
            self.instances.insert(
                name.to_string(),
                Instance {
                    index: 0,
                    slide_count,
                },
            );
        }
    }

    /// Move a gallery by `direction` slides, wrapping at either end.
    ///
    /// Any magnitude works: the new index is reduced modulo the slide
    /// count, so +1/-1 single steps and larger jumps both land in range.
    pub fn change_slide(&mut self, name: &str, direction: i64) {
        let instance = match self.instances.get_mut(name) {
            Some(instance) => instance,
            None => return,
        };
        if instance.slide_count == 0 {
            return;
        }
        let count = instance.slide_count as i64;
        instance.index = (instance.index as i64 + direction).rem_euclid(count) as usize;
    }

    /// Set a gallery's index directly. The value is not bounds-checked:
    /// callers (the indicator dots) pass indices they rendered, and an
    /// out-of-range value just deactivates every slide until the next
    /// navigation.
    pub fn go_to_slide(&mut self, name: &str, index: usize) {
        if let Some(instance) = self.instances.get_mut(name) {
            instance.index = index;
        }
    }

    /// Current index of a gallery, if it exists
    pub fn current_index(&self, name: &str) -> Option<usize> {
        self.instances.get(name).map(|i| i.index)
    }

    /// Slide count of a gallery, if it exists
    pub fn slide_count(&self, name: &str) -> Option<usize> {
        self.instances.get(name).map(|i| i.slide_count)
    }

    /// Active flag per slide, recomputed in full: flag `i` is true iff
    /// `i` equals the current index. Empty for unknown names.
    pub fn slide_states(&self, name: &str) -> Vec<bool> {
        match self.instances.get(name) {
            Some(instance) => (0..instance.slide_count)
                .map(|i| i == instance.index)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Active flag per indicator dot. Indicators mirror slides one-to-one,
    /// but the renderer treats them as a separate element set, so they get
    /// their own full re-sync.
    pub fn indicator_states(&self, name: &str) -> Vec<bool> {
        self.slide_states(name)
    }

    /// Names of all discovered galleries
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.instances.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    fn three_slide_page() -> Page {
        Page::from_str(
            r#"
            [[section]]
            kind = "gallery"
            name = "gstar"
            slides = [{ title = "a" }, { title = "b" }, { title = "c" }]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_discover_starts_at_zero() {
        let manager = SlideshowManager::discover(&three_slide_page());
        assert_eq!(manager.current_index("gstar"), Some(0));
        assert_eq!(manager.slide_count("gstar"), Some(3));
        assert_eq!(manager.len(), 1);
        assert!(!manager.is_empty());
        assert_eq!(manager.names().collect::<Vec<_>>(), vec!["gstar"]);
    }

    #[test]
    fn test_rediscover_resets_indices() {
        let page = three_slide_page();
        let mut manager = SlideshowManager::discover(&page);
        manager.change_slide("gstar", 1);
        assert_eq!(manager.current_index("gstar"), Some(1));

        manager.rediscover(&page);
        assert_eq!(manager.current_index("gstar"), Some(0));
    }

    #[test]
    fn test_wrap_backward_then_forward() {
        // 0 -> 2 (wrap) -> 0 -> 1
        let mut manager = SlideshowManager::discover(&three_slide_page());
        manager.change_slide("gstar", -1);
        assert_eq!(manager.current_index("gstar"), Some(2));
        manager.change_slide("gstar", 1);
        assert_eq!(manager.current_index("gstar"), Some(0));
        manager.change_slide("gstar", 1);
        assert_eq!(manager.current_index("gstar"), Some(1));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut manager = SlideshowManager::discover(&three_slide_page());
        manager.go_to_slide("gstar", 1);
        for _ in 0..3 {
            manager.change_slide("gstar", 1);
        }
        assert_eq!(manager.current_index("gstar"), Some(1));
    }

    #[test]
    fn test_large_offsets_wrap() {
        let mut manager = SlideshowManager::discover(&three_slide_page());
        manager.change_slide("gstar", 7);
        assert_eq!(manager.current_index("gstar"), Some(1));
        manager.change_slide("gstar", -8);
        assert_eq!(manager.current_index("gstar"), Some(2));
    }

    #[test]
    fn test_missing_instance_is_noop() {
        let mut manager = SlideshowManager::discover(&three_slide_page());
        manager.change_slide("missing", 1);
        manager.go_to_slide("missing", 0);
        assert_eq!(manager.current_index("missing"), None);
        assert_eq!(manager.current_index("gstar"), Some(0));
        assert!(manager.slide_states("missing").is_empty());
    }

    #[test]
    fn test_swipe_direction_feeds_navigation() {
        let mut manager = SlideshowManager::discover(&three_slide_page());
        let mut tracker = SwipeTracker::new(50);

        // Rightward drag of 51 columns: previous slide, wrapping to the end
        tracker.begin("gstar", 100);
        let direction = tracker.end("gstar", 151).unwrap();
        manager.change_slide("gstar", direction);
        assert_eq!(manager.current_index("gstar"), Some(2));

        // A 49-column drag is a tap and changes nothing
        tracker.begin("gstar", 100);
        assert_eq!(tracker.end("gstar", 149), None);
        assert_eq!(manager.current_index("gstar"), Some(2));
    }

    #[test]
    fn test_exactly_one_active_in_range() {
        let mut manager = SlideshowManager::discover(&three_slide_page());
        for target in 0..3 {
            manager.go_to_slide("gstar", target);
            let slides = manager.slide_states("gstar");
            let dots = manager.indicator_states("gstar");
            assert_eq!(slides.iter().filter(|a| **a).count(), 1);
            assert_eq!(dots.iter().filter(|a| **a).count(), 1);
            assert!(slides[target]);
            assert!(dots[target]);
        }
    }

    #[test]
    fn test_out_of_range_index_deactivates_all() {
        let mut manager = SlideshowManager::discover(&three_slide_page());
        manager.go_to_slide("gstar", 9);
        assert!(manager.slide_states("gstar").iter().all(|a| !a));
        assert!(manager.indicator_states("gstar").iter().all(|a| !a));

        // Relative navigation recovers by reducing modulo the count
        manager.change_slide("gstar", 1);
        assert_eq!(manager.current_index("gstar"), Some(1));
    }
}
