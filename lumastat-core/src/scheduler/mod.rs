//! Redraw scheduler
//!
//! Decides, once per host-loop tick, whether to re-read live state, whether
//! the screen needs a redraw and whether the backlight should change power.

pub mod clock;
pub mod redraw;

pub use clock::{elapsed_ms, ScheduleClock};
pub use redraw::{PowerState, RedrawScheduler, SchedulerConfig, TickPhase, TickReport};
