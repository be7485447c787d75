//! Battery gauge
//!
//! Converts a raw ADC sample from the battery divider to millivolts, then to
//! a charge percentage through a step-wise Li-ion discharge curve. The curve
//! is an empirical calibration table and can be swapped per board.
//!
//! Integer-only; no floating point on the hot path.

use crate::config::BatteryConfig;

/// Single-cell Li-ion discharge curve
///
/// Table format: (millivolts, percent), sorted by decreasing voltage.
/// A reading maps to the first entry it reaches; anything below the last
/// entry reads as 0 %.
pub const DISCHARGE_CURVE: &[(u16, u8)] = &[
    (4200, 100),
    (4150, 95),
    (4110, 90),
    (4080, 85),
    (4020, 80),
    (3980, 75),
    (3950, 70),
    (3910, 65),
    (3870, 60),
    (3850, 55),
    (3840, 50),
    (3820, 45),
    (3800, 40),
    (3790, 35),
    (3770, 30),
    (3750, 25),
    (3730, 20),
    (3710, 15),
    (3690, 10),
    (3610, 5),
];

/// Charge band used to color the percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryBand {
    /// Comfortably charged
    Healthy,
    /// Getting low
    Caution,
    /// Nearly empty (also what a dead or missing sensor reads as)
    Critical,
}

impl BatteryBand {
    /// Classify a percentage with the configured thresholds
    pub fn classify(percent: u8, config: &BatteryConfig) -> Self {
        if percent > config.healthy_above {
            BatteryBand::Healthy
        } else if percent > config.caution_above {
            BatteryBand::Caution
        } else {
            BatteryBand::Critical
        }
    }
}

/// One converted battery sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryReading {
    /// Cell voltage in millivolts
    pub millivolts: u16,
    /// Charge estimate (0-100)
    pub percent: u8,
    /// Display band
    pub band: BatteryBand,
}

/// Raw-sample to percentage converter
#[derive(Debug, Clone, Copy)]
pub struct BatteryGauge<'a> {
    config: BatteryConfig,
    curve: &'a [(u16, u8)],
}

impl BatteryGauge<'static> {
    /// Gauge using the built-in discharge curve
    pub const fn new(config: BatteryConfig) -> Self {
        Self {
            config,
            curve: DISCHARGE_CURVE,
        }
    }
}

impl<'a> BatteryGauge<'a> {
    /// Gauge using a board-specific discharge curve
    pub const fn with_curve(config: BatteryConfig, curve: &'a [(u16, u8)]) -> Self {
        Self { config, curve }
    }

    /// Convert a raw ADC count to cell millivolts
    ///
    /// mV = raw / adc_max × supply × divider × (vref / 1000)
    pub fn raw_to_millivolts(&self, raw: u16) -> u16 {
        let c = &self.config;
        if c.adc_max == 0 {
            return 0;
        }
        let numerator =
            raw as u64 * c.supply_mv as u64 * c.divider_ratio as u64 * c.vref_mv as u64;
        let denominator = c.adc_max as u64 * 1000;
        (numerator / denominator).min(u16::MAX as u64) as u16
    }

    /// Look up the charge percentage for a cell voltage
    pub fn percentage(&self, millivolts: u16) -> u8 {
        self.curve
            .iter()
            .find(|(threshold, _)| millivolts >= *threshold)
            .map(|(_, percent)| *percent)
            .unwrap_or(0)
    }

    /// Convert a raw sample all the way to a reading
    pub fn read(&self, raw: u16) -> BatteryReading {
        let millivolts = self.raw_to_millivolts(raw);
        let percent = self.percentage(millivolts);
        BatteryReading {
            millivolts,
            percent,
            band: BatteryBand::classify(percent, &self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauge() -> BatteryGauge<'static> {
        BatteryGauge::new(BatteryConfig::default())
    }

    #[test]
    fn test_raw_to_millivolts() {
        let g = gauge();
        // Full scale: 3.3 V × 2 × 1.1 = 7.26 V
        assert_eq!(g.raw_to_millivolts(4095), 7260);
        assert_eq!(g.raw_to_millivolts(0), 0);
        // 2340 counts ≈ 4.149 V
        assert_eq!(g.raw_to_millivolts(2340), 4148);
    }

    #[test]
    fn test_percentage_breakpoints() {
        let g = gauge();
        assert_eq!(g.percentage(4300), 100);
        assert_eq!(g.percentage(4200), 100);
        assert_eq!(g.percentage(4199), 95);
        assert_eq!(g.percentage(3845), 50);
        assert_eq!(g.percentage(3610), 5);
        assert_eq!(g.percentage(3609), 0);
        assert_eq!(g.percentage(0), 0);
    }

    #[test]
    fn test_percentage_is_monotonic() {
        let g = gauge();
        let mut last = 0;
        for mv in (3000..4400).step_by(5) {
            let p = g.percentage(mv);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_bands() {
        let config = BatteryConfig::default();
        assert_eq!(BatteryBand::classify(100, &config), BatteryBand::Healthy);
        assert_eq!(BatteryBand::classify(35, &config), BatteryBand::Healthy);
        assert_eq!(BatteryBand::classify(30, &config), BatteryBand::Caution);
        assert_eq!(BatteryBand::classify(15, &config), BatteryBand::Caution);
        assert_eq!(BatteryBand::classify(10, &config), BatteryBand::Critical);
        assert_eq!(BatteryBand::classify(0, &config), BatteryBand::Critical);
    }

    #[test]
    fn test_dead_sensor_reads_critical() {
        let reading = gauge().read(0);
        assert_eq!(reading.percent, 0);
        assert_eq!(reading.band, BatteryBand::Critical);
    }

    #[test]
    fn test_custom_curve() {
        const CURVE: &[(u16, u8)] = &[(3000, 100), (2000, 50)];
        let g = BatteryGauge::with_curve(BatteryConfig::default(), CURVE);
        assert_eq!(g.percentage(3100), 100);
        assert_eq!(g.percentage(2500), 50);
        assert_eq!(g.percentage(1999), 0);
    }
}
