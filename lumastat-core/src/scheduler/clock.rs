//! Schedule clock
//!
//! Millisecond timestamps come from a free-running `u32` counter that wraps
//! roughly every 49.7 days. All intervals are computed with wrapping
//! subtraction, so a wrap between two stamps still yields the true elapsed
//! time as long as it is under one full period.

/// Elapsed milliseconds from `since` to `now`, tolerant of counter wrap
#[inline]
pub const fn elapsed_ms(since: u32, now: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Last-tick and last-redraw timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScheduleClock {
    /// Start of the last tick that passed the rate gate
    last_tick: Option<u32>,
    /// Time of the last redraw
    last_redraw: Option<u32>,
}

impl ScheduleClock {
    /// Create a clock with no recorded tick or redraw
    pub const fn new() -> Self {
        Self {
            last_tick: None,
            last_redraw: None,
        }
    }

    /// Time since the last tick, or `None` before the first one
    pub fn since_tick(&self, now_ms: u32) -> Option<u32> {
        self.last_tick.map(|t| elapsed_ms(t, now_ms))
    }

    /// Time since the last redraw, or `None` before the first one
    pub fn since_redraw(&self, now_ms: u32) -> Option<u32> {
        self.last_redraw.map(|t| elapsed_ms(t, now_ms))
    }

    /// Record a tick that passed the rate gate
    pub fn mark_tick(&mut self, now_ms: u32) {
        self.last_tick = Some(now_ms);
    }

    /// Record a redraw
    pub fn mark_redraw(&mut self, now_ms: u32) {
        self.last_redraw = Some(now_ms);
    }
}
