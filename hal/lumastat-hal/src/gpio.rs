//! GPIO pin abstractions
//!
//! Provides the digital output trait used to drive the backlight enable line.

/// Digital output pin
///
/// Implementations handle the actual register access for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pin(bool);

    impl OutputPin for Pin {
        fn set_high(&mut self) {
            self.0 = true;
        }

        fn set_low(&mut self) {
            self.0 = false;
        }

        fn is_set_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_set_state_drives_level() {
        let mut pin = Pin(false);
        pin.set_state(true);
        assert!(pin.is_set_high());
        pin.set_state(false);
        assert!(pin.is_set_low());
    }
}
