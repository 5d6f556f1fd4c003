//! Animated stat counters.
//!
//! Each stats section counts its numbers up from zero the first time half
//! of it scrolls into view. The trigger is one-shot per section; scrolling
//! away and back does not restart the animation. The curve is quartic
//! ease-out over two seconds, matching the page this app imitates.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::reveal::visible_fraction;
use crate::scroll::easing::{EasingType, EasingTypeExt};
use crate::scroll::timing::{lerp, progress};

/// Fraction of a stats section that must be visible to start counting
pub const COUNTER_TRIGGER_THRESHOLD: f64 = 0.5;
/// Count-up duration
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// One counting number
#[derive(Debug, Clone)]
pub struct CounterAnimator {
    start: Instant,
    target: u64,
}

impl CounterAnimator {
    pub fn new(target: u64) -> Self {
        Self {
            start: Instant::now(),
            target,
        }
    }

    /// Current display value, floored the way the original counter was
    pub fn value(&self) -> u64 {
        let t = EasingType::Quartic.apply(progress(self.start, COUNTER_DURATION));
        lerp(0.0, self.target as f64, t).floor() as u64
    }

    pub fn is_done(&self) -> bool {
        self.start.elapsed() >= COUNTER_DURATION
    }
}

/// All counters on the page, keyed by (section index, stat index)
#[derive(Debug, Default)]
pub struct CounterBank {
    counters: HashMap<(usize, usize), CounterAnimator>,
    triggered: HashSet<usize>,
}

impl CounterBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting a section's stats. Subsequent calls for the same
    /// section are ignored - the trigger fires once, like an observer
    /// that unsubscribes itself.
    pub fn trigger(&mut self, section: usize, targets: &[u64]) {
        if !self.triggered.insert(section) {
            return;
        }
        for (stat, &target) in targets.iter().enumerate() {
            self.counters
                .insert((section, stat), CounterAnimator::new(target));
        }
    }

    /// Fire the trigger when enough of the section is visible
    pub fn maybe_trigger(
        &mut self,
        section: usize,
        targets: &[u64],
        top: u16,
        height: u16,
        viewport_top: u16,
        viewport_bottom: u16,
    ) {
        if self.triggered.contains(&section) {
            return;
        }
        if visible_fraction(top, height, viewport_top, viewport_bottom)
            >= COUNTER_TRIGGER_THRESHOLD
        {
            self.trigger(section, targets);
        }
    }

    pub fn is_triggered(&self, section: usize) -> bool {
        self.triggered.contains(&section)
    }

    /// Current display value for one stat. Untriggered stats show 0.
    pub fn value(&self, section: usize, stat: usize) -> u64 {
        self.counters
            .get(&(section, stat))
            .map(|c| c.value())
            .unwrap_or(0)
    }

    /// Whether any counter is still counting (drives the fast tick)
    pub fn any_running(&self) -> bool {
        self.counters.values().any(|c| !c.is_done())
    }
}
