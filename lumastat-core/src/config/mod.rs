//! Configuration types
//!
//! Board-agnostic display configuration, plus a small text parser for the
//! `display.toml` file the firmware embeds.

pub mod toml;
pub mod types;

pub use toml::parse_config;
pub use types::*;
