//! Gravity clock.
//!
//! Converts elapsed host time into a count of due gravity ticks. The clock
//! never reads wall-clock time itself; the host feeds it milliseconds.

use crate::types::{DEFAULT_GRAVITY_MS, MIN_GRAVITY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl GravityClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(MIN_GRAVITY_MS),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Change the cadence. Progress toward the next tick is kept but capped
    /// so a shorter interval cannot fire a backlog of ticks at once.
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(MIN_GRAVITY_MS);
        self.elapsed_ms = self.elapsed_ms.min(self.interval_ms - 1);
    }

    /// Advance by `elapsed_ms` and return how many ticks are now due
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.elapsed_ms as u64 + elapsed_ms as u64;
        let interval = self.interval_ms as u64;
        self.elapsed_ms = (total % interval) as u32;
        (total / interval).min(u32::MAX as u64) as u32
    }

    /// Milliseconds until the next tick is due
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms - self.elapsed_ms
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

impl Default for GravityClock {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY_MS)
    }
}
