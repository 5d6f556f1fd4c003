//! Tick-driven autoplay timers.
//!
//! Autoplay is off unless started for a specific gallery. The event loop
//! calls [`Autoplay::poll`] on every tick; each name it returns is then
//! advanced one slide. Timers are plain deadlines checked cooperatively,
//! so a stalled terminal never stacks up catch-up advances - at most one
//! step per poll.

use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Timer {
    period: Duration,
    last: Instant,
}

/// Per-gallery autoplay timers
#[derive(Debug, Default)]
pub struct Autoplay {
    timers: HashMap<String, Timer>,
}

impl Autoplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) autoplay for a gallery. The first advance
    /// happens one full period from now.
    pub fn start(&mut self, name: &str, period: Duration) {
        self.timers.insert(
            name.to_string(),
            Timer {
                period,
                last: Instant::now(),
            },
        );
    }

    /// Cancel autoplay for a gallery. Unknown names are ignored.
    pub fn stop(&mut self, name: &str) {
        self.timers.remove(name);
    }

    /// Start the timer if stopped, stop it if running. Returns whether
    /// the timer is running afterwards.
    pub fn toggle(&mut self, name: &str, period: Duration) -> bool {
        if self.timers.remove(name).is_some() {
            false
        } else {
            self.start(name, period);
            true
        }
    }

    pub fn is_running(&self, name: &str) -> bool {
        self.timers.contains_key(name)
    }

    /// Names whose period has elapsed since their last advance. Each
    /// returned timer is rearmed for the next period.
    pub fn poll(&mut self) -> Vec<String> {
        let now = Instant::now();
        let mut due = Vec::new();
        for (name, timer) in self.timers.iter_mut() {
            if now.duration_since(timer.last) >= timer.period {
                timer.last = now;
                due.push(name.clone());
            }
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        let mut autoplay = Autoplay::new();
        assert!(!autoplay.is_running("work"));
        assert!(autoplay.poll().is_empty());
    }

    #[test]
    fn test_elapsed_timer_is_due_and_rearmed() {
        let mut autoplay = Autoplay::new();
        autoplay.start("work", Duration::ZERO);
        assert_eq!(autoplay.poll(), vec!["work".to_string()]);
        // Zero period: due again on the next poll
        assert_eq!(autoplay.poll(), vec!["work".to_string()]);
    }

    #[test]
    fn test_unelapsed_timer_is_not_due() {
        let mut autoplay = Autoplay::new();
        autoplay.start("work", Duration::from_secs(3600));
        assert!(autoplay.poll().is_empty());
        assert!(autoplay.is_running("work"));
    }

    #[test]
    fn test_stop_cancels() {
        let mut autoplay = Autoplay::new();
        autoplay.start("work", Duration::ZERO);
        autoplay.stop("work");
        assert!(!autoplay.is_running("work"));
        assert!(autoplay.poll().is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut autoplay = Autoplay::new();
        assert!(autoplay.toggle("work", Duration::from_secs(5)));
        assert!(autoplay.is_running("work"));
        assert!(!autoplay.toggle("work", Duration::from_secs(5)));
        assert!(!autoplay.is_running("work"));
    }
}
