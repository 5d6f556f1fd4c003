//! Viewport visibility routing for keyboard input.
//!
//! Arrow keys are not aimed at a single focused gallery: every gallery
//! whose rows overlap the scrolled viewport receives the keypress. When
//! two galleries are on screen at once, both advance. The overlap test is
//! one-dimensional - a gallery is visible when its top edge sits above the
//! viewport bottom and its bottom edge below the viewport top.

/// Row span of one gallery in page coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySpan {
    pub name: String,
    /// First page row of the gallery
    pub top: i32,
    /// One past the last page row
    pub bottom: i32,
}

impl GallerySpan {
    pub fn new(name: impl Into<String>, top: i32, bottom: i32) -> Self {
        Self {
            name: name.into(),
            top,
            bottom,
        }
    }
}

/// Interval overlap between a span and the viewport
pub fn overlaps(top: i32, bottom: i32, viewport_top: i32, viewport_bottom: i32) -> bool {
    top < viewport_bottom && bottom > viewport_top
}

/// Names of all galleries currently in view, in page order
pub fn visible_galleries<'a>(
    spans: &'a [GallerySpan],
    viewport_top: i32,
    viewport_bottom: i32,
) -> Vec<&'a str> {
    spans
        .iter()
        .filter(|span| overlaps(span.top, span.bottom, viewport_top, viewport_bottom))
        .map(|span| span.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_edges() {
        // Fully inside
        assert!(overlaps(10, 20, 0, 40));
        // Straddling the top edge
        assert!(overlaps(-5, 5, 0, 40));
        // Straddling the bottom edge
        assert!(overlaps(35, 50, 0, 40));
        // Touching edges do not overlap
        assert!(!overlaps(40, 50, 0, 40));
        assert!(!overlaps(-10, 0, 0, 40));
        // Entirely outside
        assert!(!overlaps(100, 120, 0, 40));
    }

    #[test]
    fn test_multiple_visible_instances_fan_out() {
        let spans = vec![
            GallerySpan::new("work", 10, 30),
            GallerySpan::new("press", 35, 55),
            GallerySpan::new("archive", 200, 220),
        ];
        // Viewport covering the first two: both receive the keypress
        assert_eq!(visible_galleries(&spans, 0, 40), vec!["work", "press"]);
        // Scrolled to the bottom: only the last
        assert_eq!(visible_galleries(&spans, 190, 230), vec!["archive"]);
        // Nothing in view
        assert!(visible_galleries(&spans, 60, 190).is_empty());
    }
}
