//! The scheduling hook between the session and whatever drives time.
//!
//! The session never sleeps or spawns a timer thread. It asks a
//! [`TickScheduler`] to call back after a delay and holds the returned
//! [`TickHandle`] until the tick fires or is cancelled.

use std::time::Duration;

/// Delay between two consecutive ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Identifies one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl std::fmt::Display for TickId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tick#{}", self.0)
    }
}

/// Owned token for a pending tick.
///
/// Not `Clone`: only the holder can cancel it, and cancelling consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct TickHandle {
    id: TickId,
}

impl TickHandle {
    #[must_use]
    pub const fn new(id: TickId) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn id(&self) -> TickId {
        self.id
    }
}

/// Provided by the shell: run a tick later, or forget about it.
#[cfg_attr(test, mockall::automock)]
pub trait TickScheduler {
    /// Arrange for the tick identified by the returned handle to be
    /// delivered after `delay`.
    fn schedule(&mut self, delay: Duration) -> TickHandle;

    /// Drop a previously scheduled tick. It must not be delivered afterwards.
    fn cancel(&mut self, handle: TickHandle);
}

/// Scheduler that never fires on its own.
///
/// The caller inspects [`ManualScheduler::pending`] and delivers the tick by
/// hand, which makes every transition deterministic.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<TickId>,
    scheduled: usize,
    cancelled: usize,
}

#[cfg(test)]
impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tick waiting to be delivered, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<TickId> {
        self.pending
    }

    /// Number of ticks ever scheduled.
    #[must_use]
    pub const fn scheduled(&self) -> usize {
        self.scheduled
    }

    /// Number of ticks cancelled before delivery.
    #[must_use]
    pub const fn cancelled(&self) -> usize {
        self.cancelled
    }

    /// Take the pending tick for delivery.
    pub fn take_due(&mut self) -> Option<TickId> {
        self.pending.take()
    }
}

#[cfg(test)]
impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, _delay: Duration) -> TickHandle {
        self.next_id += 1;
        let id = TickId(self.next_id);
        self.pending = Some(id);
        self.scheduled += 1;
        TickHandle::new(id)
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.pending == Some(handle.id()) {
            self.pending = None;
        }
        self.cancelled += 1;
    }
}
