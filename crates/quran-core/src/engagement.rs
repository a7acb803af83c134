use std::time::{Duration, Instant};

use tracing::debug;

pub const DEFAULT_EVERY: u64 = 3;
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open { deadline: Instant },
}

/// Counts qualifying interactions and opens the promotional overlay on
/// every `every`-th one.
pub struct EngagementOverlay {
    count: u64,
    every: u64,
    auto_close: Duration,
    state: OverlayState,
}

impl Default for EngagementOverlay {
    fn default() -> Self {
        Self::new(DEFAULT_EVERY, DEFAULT_AUTO_CLOSE)
    }
}

impl EngagementOverlay {
    pub fn new(every: u64, auto_close: Duration) -> Self {
        Self {
            count: 0,
            every: every.max(1),
            auto_close,
            state: OverlayState::Closed,
        }
    }

    /// Returns `true` when this interaction opened the overlay. A threshold
    /// reached while already open keeps the earlier deadline.
    pub fn record_interaction(&mut self, now: Instant) -> bool {
        self.count += 1;
        if self.count % self.every != 0 {
            return false;
        }
        if self.is_open() {
            return false;
        }
        debug!(count = self.count, "opening overlay");
        self.state = OverlayState::Open {
            deadline: now + self.auto_close,
        };
        true
    }

    /// Close the overlay if its deadline passed. Returns `true` if it closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            OverlayState::Open { deadline } if now >= deadline => {
                self.state = OverlayState::Closed;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = OverlayState::Closed;
        was_open
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open { .. })
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}
