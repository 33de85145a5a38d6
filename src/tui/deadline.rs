//! Wall-clock scheduler for the event loop.

use std::time::{Duration, Instant};

use crate::core::{TickHandle, TickId, TickScheduler};

/// Remembers when the pending tick is due; the event loop asks.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    next_id: u64,
    pending: Option<(TickId, Instant)>,
}

impl DeadlineScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How long until the pending tick is due, or `None` if nothing is pending.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, due)| due.saturating_duration_since(now))
    }

    /// Take the pending tick if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<TickId> {
        match self.pending {
            Some((id, due)) if due <= now => {
                self.pending = None;
                Some(id)
            }
            _ => None,
        }
    }

    fn schedule_at(&mut self, due: Instant) -> TickHandle {
        self.next_id += 1;
        let id = TickId(self.next_id);
        self.pending = Some((id, due));
        TickHandle::new(id)
    }
}

impl TickScheduler for DeadlineScheduler {
    fn schedule(&mut self, delay: Duration) -> TickHandle {
        self.schedule_at(Instant::now() + delay)
    }

    fn cancel(&mut self, handle: TickHandle) {
        if matches!(self.pending, Some((id, _)) if id == handle.id()) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_before_deadline() {
        let mut s = DeadlineScheduler::new();
        let now = Instant::now();
        s.schedule_at(now + Duration::from_secs(1));

        assert_eq!(s.take_due(now), None);
        let left = s.time_until_due(now).unwrap();
        assert!(left <= Duration::from_secs(1));
        assert!(left > Duration::from_millis(900));
    }

    #[test]
    fn test_due_after_deadline_is_taken_once() {
        let mut s = DeadlineScheduler::new();
        let now = Instant::now();
        let handle = s.schedule_at(now + Duration::from_secs(1));
        let later = now + Duration::from_secs(2);

        assert_eq!(s.take_due(later), Some(handle.id()));
        assert_eq!(s.take_due(later), None);
        assert_eq!(s.time_until_due(later), None);
    }

    #[test]
    fn test_cancel_prevents_delivery() {
        let mut s = DeadlineScheduler::new();
        let now = Instant::now();
        let handle = s.schedule_at(now);
        s.cancel(handle);

        assert_eq!(s.take_due(now + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_cancel_of_old_handle_keeps_newer_tick() {
        let mut s = DeadlineScheduler::new();
        let now = Instant::now();
        let old = s.schedule_at(now);
        let new = s.schedule_at(now);
        s.cancel(old);

        assert_eq!(s.take_due(now), Some(new.id()));
    }
}
