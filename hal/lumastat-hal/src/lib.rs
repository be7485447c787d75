//! Lumastat Hardware Abstraction Layer
//!
//! This crate defines the few hardware traits the status display needs from
//! the board: a digital output for the panel backlight and an analog input
//! for the battery divider. Chip-specific firmware implements them; tests
//! implement them with plain structs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lumastat-display (StatusDisplay)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumastat-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumastat-firmware (RP2040 adapters)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (backlight enable)
//! - [`adc::AnalogInput`] - Raw analog samples (battery voltage)

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::{AnalogInput, FixedSample, ADC_MAX_12BIT};
pub use gpio::OutputPin;
