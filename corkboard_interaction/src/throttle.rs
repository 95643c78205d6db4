// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rate limiting for pointer-move recomputation.

/// Default spacing between accepted pointer moves, about 30 per second.
pub const DEFAULT_INTERVAL_MS: u64 = 33;

/// Accepts at most one event per interval.
///
/// Timestamps are caller-supplied milliseconds from any monotonic clock. The
/// first event is always accepted. Commits never go through a throttle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Throttle {
    interval_ms: u64,
    last: Option<u64>,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

impl Throttle {
    /// Create a throttle with the given interval. Zero accepts every event.
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    /// Configured interval.
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Whether an event at `now` should be processed. Accepting it starts a
    /// new interval.
    ///
    /// A clock that goes backwards is treated as a fresh start.
    pub fn accept(&mut self, now: u64) -> bool {
        let ready = match self.last {
            None => true,
            Some(last) => now < last || now - last >= self.interval_ms,
        };
        if ready {
            self.last = Some(now);
        }
        ready
    }

    /// Forget the last accepted event.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
