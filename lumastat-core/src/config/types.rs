//! Display configuration types
//!
//! Defaults match a 240×135 panel at text size 2 (19 columns) driven by an
//! LED controller with a single-cell battery on a 1:2 divider.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scheduler::SchedulerConfig;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in its section
    UnknownKey,
    /// Value is not an integer of the right width
    InvalidValue,
    /// Integer outside the accepted range
    OutOfRange,
    /// Fields are individually valid but inconsistent with each other
    Inconsistent,
}

/// Battery divider and band thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatteryConfig {
    /// ADC full-scale count (4095 for 12-bit)
    pub adc_max: u16,
    /// ADC supply voltage in mV
    pub supply_mv: u16,
    /// Divider ratio (cell voltage / pin voltage)
    pub divider_ratio: u8,
    /// ADC reference calibration in mV (1100 = nominal)
    pub vref_mv: u16,
    /// Percent above which the battery reads healthy
    pub healthy_above: u8,
    /// Percent above which the battery reads caution (else critical)
    pub caution_above: u8,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            adc_max: 4095,
            supply_mv: 3300,
            divider_ratio: 2,
            vref_mv: 1100,
            healthy_above: 30,
            caution_above: 10,
        }
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Minimum time between live-state reads (ms)
    pub refresh_interval_ms: u32,
    /// Redraw-free time before the backlight powers down (ms)
    pub idle_timeout_ms: u32,
    /// Characters that fit on one row
    pub text_budget: u8,
    /// Current draw at or above which the screen shows amps (mA)
    pub amps_threshold_ma: u16,
    /// Battery gauge settings
    pub battery: BatteryConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let schedule = SchedulerConfig::default();
        Self {
            refresh_interval_ms: schedule.refresh_interval_ms,
            idle_timeout_ms: schedule.idle_timeout_ms,
            text_budget: 19,
            amps_threshold_ma: 1000,
            battery: BatteryConfig::default(),
        }
    }
}

impl DisplayConfig {
    /// Scheduler timing from this config
    pub fn scheduler(&self) -> SchedulerConfig {
        SchedulerConfig {
            refresh_interval_ms: self.refresh_interval_ms,
            idle_timeout_ms: self.idle_timeout_ms,
        }
    }

    /// Check cross-field consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_ms == 0 || self.text_budget < 2 {
            return Err(ConfigError::OutOfRange);
        }
        if self.battery.adc_max == 0 || self.battery.divider_ratio == 0 {
            return Err(ConfigError::OutOfRange);
        }
        if self.battery.healthy_above > 100 {
            return Err(ConfigError::OutOfRange);
        }
        if self.battery.caution_above >= self.battery.healthy_above {
            return Err(ConfigError::Inconsistent);
        }
        Ok(())
    }
}
