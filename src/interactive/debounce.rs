use std::time::{Duration, Instant};

/// A single restartable timer driven by the event loop.
///
/// Scheduling again before the deadline replaces the pending deadline, so only
/// the last call inside a quiet window ever fires.
#[derive(Debug, Default)]
pub struct Debouncer {
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = Debouncer::new();
        timer.schedule(start, DELAY);

        assert!(!timer.fire_if_due(start + Duration::from_millis(299)));
        assert!(timer.fire_if_due(start + DELAY));
        assert!(!timer.fire_if_due(start + Duration::from_millis(900)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_pushes_deadline() {
        let start = Instant::now();
        let mut timer = Debouncer::new();

        timer.schedule(start, DELAY);
        timer.schedule(start + Duration::from_millis(200), DELAY);

        // The first deadline has passed but was replaced.
        assert!(!timer.fire_if_due(start + Duration::from_millis(350)));
        assert!(timer.fire_if_due(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut timer = Debouncer::new();
        timer.schedule(start, DELAY);
        timer.cancel();

        assert!(!timer.is_pending());
        assert!(!timer.fire_if_due(start + Duration::from_secs(5)));
    }
}
