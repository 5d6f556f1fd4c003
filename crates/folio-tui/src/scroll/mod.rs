//! Smooth page scrolling.
//!
//! The page scrolls like a document: line steps, half/full pages, and
//! animated jumps to section anchors. Animations interpolate the scroll
//! offset over a configurable duration and easing curve; the same easing
//! and timing atoms also drive the reveal fades and stat counters.
//!
//! ```ignore
//! use folio_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::with_defaults();
//!
//! // Animate to a section anchor
//! animator.scroll_to(section_top, max_scroll);
//!
//! // In the main loop, advance each frame and read the position
//! let scroll = animator.update(max_scroll);
//! ```

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

// Re-exports for convenient access
pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
