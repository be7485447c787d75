//! Board-agnostic core logic for the status display
//!
//! This crate contains everything that decides *when* the screen is redrawn
//! and *what* it reflects, without touching display hardware:
//!
//! - Live-state interface the host controller implements
//! - State snapshot and change detection
//! - Redraw scheduler (rate gate, idle backlight timeout, wake on change)
//! - Battery calibration curve
//! - Configuration types and text parser
//! - Host link line protocol (state pushed over a serial line)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod battery;
pub mod config;
pub mod link;
pub mod live;
pub mod scheduler;
pub mod snapshot;

pub use battery::{BatteryBand, BatteryGauge, BatteryReading};
pub use config::{BatteryConfig, ConfigError, DisplayConfig};
pub use link::{parse_line, HostUpdate, LineReader, LinkError};
pub use live::{LiveState, NameList, NameLookup, RealtimeMode, StaticNames};
pub use scheduler::{PowerState, RedrawScheduler, SchedulerConfig, TickPhase, TickReport};
pub use snapshot::{Snapshot, SnapshotCache};
