use std::time::{Duration, Instant};

/// How often the driver polls for work, roughly 60 frames a second.
pub const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Minimum time between two auto-solve steps.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(20);

/// Paces auto-solve animation steps for a driver that polls at a higher frequency.
///
/// The caller supplies the current instant on every poll, keeping the timer free of any
/// clock of its own.
#[derive(Debug, Clone, Copy)]
pub struct StepTimer {
    interval: Duration,
    last_step: Instant,
}

impl StepTimer {
    pub fn new(interval: Duration, now: Instant) -> StepTimer {
        StepTimer {
            interval,
            last_step: now,
        }
    }

    /// Start counting a fresh interval, e.g. when an animation is (re)started.
    pub fn restart(&mut self, now: Instant) {
        self.last_step = now;
    }

    /// Is a step due? When it is, the next interval starts counting from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_step) >= self.interval {
            self.last_step = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_only_after_the_interval() {
        let start = Instant::now();
        let mut timer = StepTimer::new(DEFAULT_STEP_INTERVAL, start);
        assert!(!timer.poll(start));
        assert!(!timer.poll(start + POLL_INTERVAL));
        assert!(timer.poll(start + 2 * POLL_INTERVAL));
        // 32ms to 48ms is under 20ms
        assert!(!timer.poll(start + 3 * POLL_INTERVAL));
        assert!(timer.poll(start + 4 * POLL_INTERVAL));
    }

    #[test]
    fn restart_delays_the_next_step() {
        let start = Instant::now();
        let mut timer = StepTimer::new(Duration::from_millis(20), start);
        timer.restart(start + Duration::from_millis(15));
        assert!(!timer.poll(start + Duration::from_millis(30)));
        assert!(timer.poll(start + Duration::from_millis(35)));
    }

    #[test]
    fn clock_going_backwards_never_steps() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut timer = StepTimer::new(Duration::from_millis(20), start);
        assert!(!timer.poll(start - Duration::from_millis(500)));
    }
}
