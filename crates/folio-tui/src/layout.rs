//! Computed page geometry.
//!
//! The page renders as one long column of lines; this module records where
//! each section landed so scrolling, reveal tracking, and mouse hit-testing
//! can reason in page rows. Rebuilt every frame by the page widget, it is
//! the terminal stand-in for asking the document where an element sits.

use folio_core::slideshow::GallerySpan;

/// Row extents of one section in page coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    /// Index into `page.sections`
    pub index: usize,
    pub top: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }
}

/// Geometry of one rendered gallery, including its click targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryLayout {
    pub name: String,
    pub top: u16,
    pub height: u16,
    /// Page row carrying the arrows and indicator dots
    pub controls_row: u16,
    /// Column of the previous-slide arrow (within the page area)
    pub left_arrow_col: u16,
    /// Column of the next-slide arrow
    pub right_arrow_col: u16,
    /// Column of each indicator dot, in slide order
    pub dot_columns: Vec<u16>,
}

impl GalleryLayout {
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }

    /// Map a click on the controls row to a navigation intent
    pub fn hit_test(&self, column: u16, page_row: u16) -> Option<GalleryHit> {
        if page_row != self.controls_row {
            return None;
        }
        // Arrows get a one-cell halo; they are small targets
        if column.abs_diff(self.left_arrow_col) <= 1 {
            return Some(GalleryHit::PrevArrow);
        }
        if column.abs_diff(self.right_arrow_col) <= 1 {
            return Some(GalleryHit::NextArrow);
        }
        self.dot_columns
            .iter()
            .position(|&c| c == column)
            .map(GalleryHit::Dot)
    }
}

/// What a click inside a gallery's controls row landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryHit {
    PrevArrow,
    NextArrow,
    /// Indicator dot carrying this slide index
    Dot(usize),
}

/// Full page geometry for the current frame
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Total page height in rows
    pub total_height: u16,
    pub sections: Vec<SectionSpan>,
    pub galleries: Vec<GalleryLayout>,
}

impl PageLayout {
    /// Gallery spans in the form the visibility router consumes
    pub fn gallery_spans(&self) -> Vec<GallerySpan> {
        self.galleries
            .iter()
            .map(|g| GallerySpan::new(g.name.clone(), g.top as i32, g.bottom() as i32))
            .collect()
    }

    /// The gallery covering the given page row, if any
    pub fn gallery_at(&self, page_row: u16) -> Option<&GalleryLayout> {
        self.galleries
            .iter()
            .find(|g| page_row >= g.top && page_row < g.bottom())
    }

    /// Top row of a section, for anchor jumps
    pub fn section_top(&self, index: usize) -> Option<u16> {
        self.sections
            .iter()
            .find(|s| s.index == index)
            .map(|s| s.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> GalleryLayout {
        GalleryLayout {
            name: "work".to_string(),
            top: 10,
            height: 9,
            controls_row: 17,
            left_arrow_col: 4,
            right_arrow_col: 60,
            dot_columns: vec![30, 32, 34],
        }
    }

    #[test]
    fn test_hit_test_arrows_and_dots() {
        let g = gallery();
        assert_eq!(g.hit_test(4, 17), Some(GalleryHit::PrevArrow));
        assert_eq!(g.hit_test(5, 17), Some(GalleryHit::PrevArrow));
        assert_eq!(g.hit_test(59, 17), Some(GalleryHit::NextArrow));
        assert_eq!(g.hit_test(32, 17), Some(GalleryHit::Dot(1)));
        // Between dots
        assert_eq!(g.hit_test(33, 17), None);
        // Wrong row
        assert_eq!(g.hit_test(32, 16), None);
    }

    #[test]
    fn test_gallery_at() {
        let layout = PageLayout {
            total_height: 40,
            sections: vec![],
            galleries: vec![gallery()],
        };
        assert_eq!(layout.gallery_at(10).map(|g| g.name.as_str()), Some("work"));
        assert_eq!(layout.gallery_at(18).map(|g| g.name.as_str()), Some("work"));
        assert!(layout.gallery_at(19).is_none());
        assert!(layout.gallery_at(9).is_none());
    }

    #[test]
    fn test_gallery_spans_conversion() {
        let layout = PageLayout {
            total_height: 40,
            sections: vec![],
            galleries: vec![gallery()],
        };
        let spans = layout.gallery_spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].top, 10);
        assert_eq!(spans[0].bottom, 19);
    }
}
