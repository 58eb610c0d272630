use std::time::{Duration, Instant};

/// Coalesces bursts of change triggers into a single deferred render.
///
/// Every `defer` restarts the window, so only the last trigger inside a
/// burst leads to a firing. Re-renders mutate the page themselves, so
/// coalescing must reset rather than queue. The scheduler never reads the
/// clock; callers inject `Instant`s, keeping burst behavior deterministic
/// under test.
#[derive(Debug, Clone)]
pub struct DebounceScheduler {
    window: Duration,
    deadline: Option<Instant>,
}

impl DebounceScheduler {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(120);

    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// (Re)arms the deadline at `now + window`, replacing any pending one.
    pub fn defer(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Returns true at most once per armed deadline, once it has elapsed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Disarms without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for DebounceScheduler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::DebounceScheduler;

    #[test]
    fn burst_of_defers_collapses_to_one_firing() {
        let mut scheduler = DebounceScheduler::new(Duration::from_millis(120));
        let start = Instant::now();

        for i in 0..10 {
            scheduler.defer(start + Duration::from_millis(i * 5));
        }

        // Window counts from the last trigger at +45ms.
        assert!(!scheduler.fire_if_due(start + Duration::from_millis(120)));
        assert!(scheduler.fire_if_due(start + Duration::from_millis(165)));
        assert!(!scheduler.fire_if_due(start + Duration::from_millis(400)));
    }

    #[test]
    fn rearms_after_firing() {
        let mut scheduler = DebounceScheduler::new(Duration::from_millis(120));
        let start = Instant::now();

        scheduler.defer(start);
        assert!(scheduler.fire_if_due(start + Duration::from_millis(120)));

        scheduler.defer(start + Duration::from_millis(200));
        assert!(scheduler.is_armed());
        assert!(scheduler.fire_if_due(start + Duration::from_millis(320)));
    }

    #[test]
    fn cancel_disarms_without_firing() {
        let mut scheduler = DebounceScheduler::default();
        let start = Instant::now();

        scheduler.defer(start);
        scheduler.cancel();
        assert!(!scheduler.is_armed());
        assert!(!scheduler.fire_if_due(start + Duration::from_secs(10)));
    }
}
