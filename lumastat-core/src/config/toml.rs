//! Simple TOML parser for display configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `display.toml`. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = integer pairs (`_` digit separators allowed)
//! - [display] and [battery] section headers
//! - Comments (# ...), including trailing comments
//!
//! Keys omitted from the file keep their defaults.

use super::types::{ConfigError, DisplayConfig};

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Battery,
}

/// Parse TOML configuration into a validated DisplayConfig
pub fn parse_config(input: &str) -> Result<DisplayConfig, ConfigError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comment-only lines
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    config.validate()?;
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse section header like "display" or "battery"
fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "battery" => Ok(Section::Battery),
        _ => Err(ConfigError::InvalidSection),
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse an unsigned integer, accepting `_` separators (e.g. `300_000`)
fn parse_int<T: TryFrom<u64>>(value: &str) -> Result<T, ConfigError> {
    let mut acc: u64 = 0;
    let mut digits = 0;
    for ch in value.chars() {
        match ch {
            '_' if digits > 0 => continue,
            '0'..='9' => {
                acc = acc
                    .checked_mul(10)
                    .and_then(|a| a.checked_add(u64::from(ch as u8 - b'0')))
                    .ok_or(ConfigError::OutOfRange)?;
                digits += 1;
            }
            _ => return Err(ConfigError::InvalidValue),
        }
    }
    if digits == 0 {
        return Err(ConfigError::InvalidValue);
    }
    T::try_from(acc).map_err(|_| ConfigError::OutOfRange)
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DisplayConfig,
) -> Result<(), ConfigError> {
    match section {
        Section::Root => return Err(ConfigError::UnknownKey),
        Section::Display => match key {
            "refresh_interval_ms" => config.refresh_interval_ms = parse_int(value)?,
            "idle_timeout_ms" => config.idle_timeout_ms = parse_int(value)?,
            "text_budget" => config.text_budget = parse_int(value)?,
            "amps_threshold_ma" => config.amps_threshold_ma = parse_int(value)?,
            _ => return Err(ConfigError::UnknownKey),
        },
        Section::Battery => {
            let battery = &mut config.battery;
            match key {
                "adc_max" => battery.adc_max = parse_int(value)?,
                "supply_mv" => battery.supply_mv = parse_int(value)?,
                "divider_ratio" => battery.divider_ratio = parse_int(value)?,
                "vref_mv" => battery.vref_mv = parse_int(value)?,
                "healthy_above" => battery.healthy_above = parse_int(value)?,
                "caution_above" => battery.caution_above = parse_int(value)?,
                _ => return Err(ConfigError::UnknownKey),
            }
        }
    }
    Ok(())
}
