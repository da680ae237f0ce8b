use core::sync::atomic::{AtomicU32, Ordering};

use crate::Scheduler;

/// A wrapping count of scheduler ticks.
pub struct Jiffies {
    ticks: AtomicU32,
}

impl Jiffies {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }

    /// Get the number of ticks seen so far, modulo 2^32.
    #[inline]
    pub fn now(&self) -> u32 {
        self.ticks.load(Ordering::Acquire)
    }
}

impl Default for Jiffies {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Jiffies {
    #[inline]
    fn on_tick(&self) {
        self.ticks.fetch_add(1, Ordering::AcqRel);
    }
}
