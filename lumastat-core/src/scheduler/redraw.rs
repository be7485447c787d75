//! Redraw state machine
//!
//! Each call to [`RedrawScheduler::tick`] walks the same sequence:
//!
//! ```text
//!   rate gate ──(too soon)──────────────────────────▶ Throttled
//!       │
//!   idle timeout ──(Active and idle too long)──▶ backlight Off
//!       │
//!   change detection ──(no change)──────────────────▶ Unchanged
//!       │
//!   wake if Off ─▶ stamp redraw ─▶ capture snapshot ─▶ Redraw
//! ```
//!
//! The scheduler performs no I/O. The caller applies the backlight
//! transitions from the [`TickReport`] and renders [`RedrawScheduler::snapshot`]
//! when the phase is [`TickPhase::Redraw`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::clock::ScheduleClock;
use crate::live::LiveState;
use crate::snapshot::{Snapshot, SnapshotCache};

/// Scheduler timing
///
/// The two intervals are unrelated; neither is derived from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SchedulerConfig {
    /// Minimum time between ticks that read live state (ms)
    pub refresh_interval_ms: u32,
    /// Redraw-free time after which the backlight powers down (ms)
    pub idle_timeout_ms: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 2_000,
            idle_timeout_ms: 5 * 60 * 1_000,
        }
    }
}

/// Backlight power state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Backlight on
    Active,
    /// Backlight off to save power
    Off,
}

/// How far a tick got
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickPhase {
    /// Refresh interval not yet elapsed; nothing was read
    Throttled,
    /// Live state matches the last render
    Unchanged,
    /// Live state changed; a fresh snapshot is ready to render
    Redraw,
}

/// Outcome of a single tick
///
/// When both flags are set the caller must power down first, then wake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Phase reached
    pub phase: TickPhase,
    /// Backlight was switched off for idleness this tick
    pub powered_down: bool,
    /// Backlight was switched back on for a change this tick
    pub woke: bool,
}

impl TickReport {
    const fn new(phase: TickPhase) -> Self {
        Self {
            phase,
            powered_down: false,
            woke: false,
        }
    }

    /// Whether the caller must render this tick
    pub const fn needs_render(&self) -> bool {
        matches!(self.phase, TickPhase::Redraw)
    }
}

/// Periodic redraw scheduler
///
/// Owns the snapshot cache, the schedule clock and the backlight power
/// state. Single-threaded; ticks never overlap.
#[derive(Debug, Clone)]
pub struct RedrawScheduler {
    config: SchedulerConfig,
    clock: ScheduleClock,
    power: PowerState,
    cache: SnapshotCache,
}

impl RedrawScheduler {
    /// Create a scheduler with the backlight assumed on and no snapshot
    pub const fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            clock: ScheduleClock::new(),
            power: PowerState::Active,
            cache: SnapshotCache::new(),
        }
    }

    /// Run one tick at `now_ms`
    pub fn tick<L: LiveState + ?Sized>(&mut self, now_ms: u32, live: &L) -> TickReport {
        // Rate gate
        if let Some(since) = self.clock.since_tick(now_ms) {
            if since < self.config.refresh_interval_ms {
                return TickReport::new(TickPhase::Throttled);
            }
        }
        self.clock.mark_tick(now_ms);

        let mut report = TickReport::new(TickPhase::Unchanged);

        // Idle timeout; does not count as a redraw
        if self.power == PowerState::Active {
            if let Some(idle) = self.clock.since_redraw(now_ms) {
                if idle > self.config.idle_timeout_ms {
                    self.power = PowerState::Off;
                    report.powered_down = true;
                    #[cfg(feature = "defmt")]
                    defmt::info!("Backlight off after {} ms without changes", idle);
                }
            }
        }

        if !self.cache.has_changed(live) {
            return report;
        }

        if self.power == PowerState::Off {
            self.power = PowerState::Active;
            report.woke = true;
            #[cfg(feature = "defmt")]
            defmt::info!("Backlight on, data changed");
        }

        self.clock.mark_redraw(now_ms);
        self.cache.capture(live);
        report.phase = TickPhase::Redraw;
        report
    }

    /// Snapshot captured by the last redraw
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.cache.last()
    }

    /// Current backlight power state
    pub fn power_state(&self) -> PowerState {
        self.power
    }

    /// Timing in use
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Force the next non-throttled tick to redraw
    ///
    /// Used after something else painted over the screen (e.g. the splash).
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }
}
