//! Analog input abstractions
//!
//! The battery voltage is read through a resistor divider on an ADC pin.
//! Conversion to millivolts and percent lives in `lumastat-core`; this trait
//! only hands out raw counts.

/// Full-scale count of a 12-bit converter
pub const ADC_MAX_12BIT: u16 = 4095;

/// Raw analog sample source
pub trait AnalogInput {
    /// Read one raw sample (0..=full scale)
    ///
    /// A failed conversion is reported as 0. Callers treat that like an
    /// empty battery rather than an error.
    fn read_raw(&mut self) -> u16;
}

/// A fixed sample, for boards without a battery divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedSample(pub u16);

impl AnalogInput for FixedSample {
    fn read_raw(&mut self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sample() {
        let mut adc = FixedSample(2048);
        assert_eq!(adc.read_raw(), 2048);
        assert_eq!(adc.read_raw(), 2048);
    }

    #[test]
    fn test_full_scale_sample() {
        let mut adc = FixedSample(ADC_MAX_12BIT);
        assert_eq!(adc.read_raw(), 4095);
    }
}
