//! Status screen for the LED controller
//!
//! This crate provides:
//! - `DisplayBackend` trait for the panel (text at character cells, clear, flush)
//! - `layout::render`, the pure Snapshot → draw-instruction formatter
//! - `StatusDisplay`, the lifecycle entry points the host calls
//!   (setup, every main-loop iteration, network attached)
//! - `GraphicsBackend`, a backend for any `embedded-graphics` RGB565 target
//!
//! # Architecture
//!
//! ```text
//! host loop ──▶ StatusDisplay::on_loop
//!                   │
//!                   ├─ RedrawScheduler::tick   (lumastat-core)
//!                   ├─ backlight OutputPin     (lumastat-hal)
//!                   ├─ layout::render          (this crate)
//!                   └─ DisplayBackend          (this crate / firmware)
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod color;
pub mod graphics;
pub mod layout;
pub mod status;
pub mod text;

#[cfg(test)]
mod testing;

// Re-export key types
pub use backend::{Cell, DisplayBackend, DisplayError};
pub use color::Color;
pub use graphics::GraphicsBackend;
pub use layout::{render, DrawInstruction, Frame, RenderContext};
pub use status::StatusDisplay;
pub use text::{truncate, CONTINUATION_MARKER, LINE_CAPACITY};
