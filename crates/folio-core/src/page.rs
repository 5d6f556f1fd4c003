//! Page content model.
//!
//! A folio page is a TOML document describing a portfolio landing page:
//! header with navigation, then an ordered list of sections (hero, stats,
//! cards, timeline, gallery). Galleries are the slideshow instances the
//! [`crate::slideshow`] module operates on.

use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub page: PageMeta,
    #[serde(default)]
    pub header: Header,
    #[serde(default, rename = "section")]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub nav: Vec<NavEntry>,
}

/// One navigation entry pointing at a section anchor
#[derive(Debug, Clone, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub anchor: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Section {
    Hero {
        #[serde(default)]
        anchor: Option<String>,
        heading: String,
        #[serde(default)]
        sub: Option<String>,
        #[serde(default)]
        cta: Option<String>,
    },
    Stats {
        #[serde(default)]
        anchor: Option<String>,
        #[serde(default)]
        title: Option<String>,
        stats: Vec<StatDef>,
    },
    Cards {
        #[serde(default)]
        anchor: Option<String>,
        #[serde(default)]
        title: Option<String>,
        cards: Vec<Card>,
    },
    Timeline {
        #[serde(default)]
        anchor: Option<String>,
        #[serde(default)]
        title: Option<String>,
        entries: Vec<TimelineEntry>,
    },
    Gallery {
        #[serde(default)]
        anchor: Option<String>,
        #[serde(default)]
        title: Option<String>,
        /// Unique slideshow instance name
        name: String,
        slides: Vec<Slide>,
        /// Start autoplay for this gallery with the given period
        #[serde(default)]
        autoplay_ms: Option<u64>,
    },
}

impl Section {
    pub fn anchor(&self) -> Option<&str> {
        match self {
            Section::Hero { anchor, .. }
            | Section::Stats { anchor, .. }
            | Section::Cards { anchor, .. }
            | Section::Timeline { anchor, .. }
            | Section::Gallery { anchor, .. } => anchor.as_deref(),
        }
    }
}

/// A statistic as written in the page file, e.g. `value = "95%"`
#[derive(Debug, Clone, Deserialize)]
pub struct StatDef {
    pub value: String,
    pub label: String,
}

impl StatDef {
    /// Split the value string into a numeric target and display suffix.
    /// "120+" parses to (120, "+"), "95%" to (95, "%"), "8" to (8, "").
    pub fn parse_value(&self) -> Result<(u64, &str)> {
        let digits_end = self
            .value
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.value.len());
        let (digits, suffix) = self.value.split_at(digits_end);
        let target = digits
            .parse::<u64>()
            .map_err(|_| Error::Page(format!("stat value is not a number: '{}'", self.value)))?;
        Ok((target, suffix.trim()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub body: String,
}

/// One content panel of a gallery
#[derive(Debug, Clone, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Page {
    /// Parse a page from TOML text and validate it
    pub fn from_str(content: &str) -> Result<Self> {
        let page: Page = toml::from_str(content).map_err(|e| Error::Page(e.to_string()))?;
        page.validate()?;
        Ok(page)
    }

    /// Load and validate a page file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let page = Self::from_str(&content)?;
        tracing::debug!(
            "loaded page '{}' with {} sections",
            page.page.title,
            page.sections.len()
        );
        Ok(page)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for section in &self.sections {
            match section {
                Section::Gallery { name, slides, .. } => {
                    if name.is_empty() {
                        return Err(Error::Page("gallery with empty name".to_string()));
                    }
                    if !seen.insert(name.as_str()) {
                        return Err(Error::Page(format!("duplicate gallery name: '{}'", name)));
                    }
                    if slides.is_empty() {
                        return Err(Error::Page(format!("gallery '{}' has no slides", name)));
                    }
                }
                Section::Stats { stats, .. } => {
                    for stat in stats {
                        stat.parse_value()?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Iterate over gallery instances as (name, slide count)
    pub fn galleries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.sections.iter().filter_map(|s| match s {
            Section::Gallery { name, slides, .. } => Some((name.as_str(), slides.len())),
            _ => None,
        })
    }

    /// Index of the first section carrying the given anchor
    pub fn section_by_anchor(&self, anchor: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| s.anchor() == Some(anchor))
    }

    /// The built-in demo page, also written out by `folio init`
    pub fn sample() -> Self {
        Self::from_str(SAMPLE_PAGE).expect("sample page must parse")
    }
}

/// Demo page content, kept in sync with the model above
pub const SAMPLE_PAGE: &str = r##"[page]
title = "Mina Park — Visual Designer"
tagline = "Portfolios don't have to live in a browser."

[header]
brand = "MINA.PARK"
nav = [
    { label = "About", anchor = "about" },
    { label = "Work", anchor = "work" },
    { label = "Journey", anchor = "journey" },
    { label = "Press", anchor = "press" },
]

[[section]]
kind = "hero"
anchor = "top"
heading = "Design that ships."
sub = "Brand systems, product interfaces, and motion for teams that care."
cta = "Scroll, or press Tab to jump between sections"

[[section]]
kind = "stats"
anchor = "about"
title = "By the numbers"
stats = [
    { value = "120+", label = "Projects delivered" },
    { value = "95%", label = "Clients returning" },
    { value = "9", label = "Years in practice" },
    { value = "14", label = "Industry awards" },
]

[[section]]
kind = "cards"
title = "What I do"
cards = [
    { title = "Brand Systems", body = "Identity programs built to survive contact with real products: logo suites, type ramps, color systems, usage rules." },
    { title = "Product Design", body = "Interface design from first wireframe to shipped release, working inside the engineering cadence rather than ahead of it." },
    { title = "Motion", body = "Micro-interactions and launch films. Animation that explains, not decorates." },
]

[[section]]
kind = "gallery"
anchor = "work"
title = "Selected work"
name = "work"
slides = [
    { title = "Aurora Bank rebrand", body = "Full identity program for a digital-first bank. 2024." },
    { title = "Tern travel app", body = "Trip planning interface, iOS and Android. 2023." },
    { title = "Loom & Field e-commerce", body = "Art direction and storefront design. 2023." },
]

[[section]]
kind = "timeline"
anchor = "journey"
title = "Journey"
entries = [
    { period = "2016 — 2018", title = "Studio Varnish", body = "Junior designer on packaging and print." },
    { period = "2018 — 2021", title = "Northwind", body = "Product designer, then design lead for the payments group." },
    { period = "2021 — now", title = "Independent", body = "Brand and product work for early-stage teams." },
]

[[section]]
kind = "gallery"
anchor = "press"
title = "Press & talks"
name = "press"
autoplay_ms = 6000
slides = [
    { title = "\"The terminal aesthetic\"", body = "Interview, Monospace Magazine, 2025." },
    { title = "Config 2024", body = "Talk: shipping brand systems with component libraries." },
    { title = "Awwwards jury", body = "Site of the Year panel, 2023." },
    { title = "Design Matters", body = "Podcast episode 214." },
]
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_page_parses() {
        let page = Page::sample();
        assert_eq!(page.header.nav.len(), 4);
        let galleries: Vec<_> = page.galleries().collect();
        assert_eq!(galleries, vec![("work", 3), ("press", 4)]);
    }

    #[test]
    fn test_stat_value_parsing() {
        let stat = StatDef {
            value: "120+".to_string(),
            label: String::new(),
        };
        assert_eq!(stat.parse_value().unwrap(), (120, "+"));

        let stat = StatDef {
            value: "95%".to_string(),
            label: String::new(),
        };
        assert_eq!(stat.parse_value().unwrap(), (95, "%"));

        let stat = StatDef {
            value: "8".to_string(),
            label: String::new(),
        };
        assert_eq!(stat.parse_value().unwrap(), (8, ""));
    }

    #[test]
    fn test_bad_stat_value_rejected() {
        let page = Page::from_str(
            r#"
            [[section]]
            kind = "stats"
            stats = [{ value = "many", label = "Projects" }]
            "#,
        );
        assert!(matches!(page, Err(Error::Page(_))));
    }

    #[test]
    fn test_duplicate_gallery_name_rejected() {
        let page = Page::from_str(
            r#"
            [[section]]
            kind = "gallery"
            name = "work"
            slides = [{ title = "a" }]

            [[section]]
            kind = "gallery"
            name = "work"
            slides = [{ title = "b" }]
            "#,
        );
        assert!(matches!(page, Err(Error::Page(_))));
    }

    #[test]
    fn test_empty_gallery_rejected() {
        let page = Page::from_str(
            r#"
            [[section]]
            kind = "gallery"
            name = "work"
            slides = []
            "#,
        );
        assert!(matches!(page, Err(Error::Page(_))));
    }

    #[test]
    fn test_section_by_anchor() {
        let page = Page::sample();
        assert_eq!(page.section_by_anchor("work"), Some(3));
        assert_eq!(page.section_by_anchor("nope"), None);
    }
}
