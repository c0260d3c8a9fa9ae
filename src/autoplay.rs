use std::time::Duration;

use log::debug;

/// Fixed-interval rotation timer, paused while the carousel has focus.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl AutoAdvance {
    /// Starts running immediately, like the carousel on page load.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            running: true,
        }
    }

    /// Returns `true` when a tick is due. At most one tick per call: time
    /// missed beyond one interval is dropped, not caught up.
    pub fn update(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }
        self.elapsed -= self.interval;
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
        }
        true
    }

    /// Focus entered the carousel.
    pub fn pause(&mut self) {
        if self.running {
            debug!("auto-advance paused");
        }
        self.running = false;
    }

    /// Focus left the carousel. Always restarts a single timer with a full
    /// interval; partial progress from before the pause is discarded.
    pub fn resume(&mut self) {
        debug!("auto-advance restarted");
        self.running = true;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time left until the next tick, `None` while paused.
    pub fn remaining(&self) -> Option<Duration> {
        self.running.then(|| self.interval.saturating_sub(self.elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn ticks_once_per_interval() {
        let mut timer = AutoAdvance::new(100 * MS);
        let ticks = (0..30).filter(|_| timer.update(10 * MS)).count();
        assert_eq!(ticks, 3);
    }

    #[test]
    fn paused_timer_never_ticks() {
        let mut timer = AutoAdvance::new(100 * MS);
        timer.pause();
        assert!(!timer.update(Duration::from_secs(10)));
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn resume_starts_a_fresh_interval() {
        let mut timer = AutoAdvance::new(100 * MS);
        assert!(!timer.update(90 * MS));
        timer.pause();
        timer.resume();

        assert_eq!(timer.remaining(), Some(100 * MS));
        assert!(!timer.update(90 * MS));
        assert!(timer.update(10 * MS));
    }

    #[test]
    fn missed_ticks_are_not_caught_up() {
        let mut timer = AutoAdvance::new(100 * MS);
        assert!(timer.update(550 * MS));
        assert!(!timer.update(MS));
        assert_eq!(timer.remaining(), Some(99 * MS));
    }

    #[test]
    fn repeated_resume_keeps_a_single_timer() {
        let mut timer = AutoAdvance::new(100 * MS);
        timer.resume();
        timer.resume();
        let ticks = (0..10).filter(|_| timer.update(10 * MS)).count();
        assert_eq!(ticks, 1);
    }
}
