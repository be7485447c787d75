//! Board glue for the RP2040 status display
//!
//! Pin assignments follow the LilyGO T-Display RP2040:
//!
//! | Function      | GPIO |
//! |---------------|------|
//! | LCD DC        | 1    |
//! | LCD SCLK      | 2    |
//! | LCD MOSI      | 3    |
//! | LCD CS        | 5    |
//! | LCD RST       | 0    |
//! | LCD backlight | 4    |
//! | LCD power     | 22   |
//! | Battery sense | 26   |
//! | Host link TX  | 8    |
//! | Host link RX  | 9    |

use embassy_rp::adc::{Adc, Blocking as AdcBlocking, Channel};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};

use display_interface_spi::SPIInterface;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::models::ST7789;

use lumastat_display::{GraphicsBackend, StatusDisplay};
use lumastat_hal::{AnalogInput, OutputPin};

/// ST7789 panel width in its native portrait orientation
pub const PANEL_WIDTH: u16 = 135;
/// ST7789 panel height in its native portrait orientation
pub const PANEL_HEIGHT: u16 = 240;
/// Offset of the visible 135×240 window inside the controller's RAM
pub const PANEL_OFFSET: (u16, u16) = (52, 40);

pub type PanelSpi = ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, NoDelay>;
pub type Panel = mipidsi::Display<SPIInterface<PanelSpi, Output<'static>>, ST7789, Output<'static>>;

/// The status display as wired on this board
pub type Screen = StatusDisplay<GraphicsBackend<Panel>, Backlight, BatterySense>;

/// Backlight enable line (active high)
pub struct Backlight(Output<'static>);

impl Backlight {
    pub fn new(pin: Output<'static>) -> Self {
        Self(pin)
    }
}

impl OutputPin for Backlight {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Battery divider on an ADC pin
pub struct BatterySense {
    adc: Adc<'static, AdcBlocking>,
    channel: Channel<'static>,
}

impl BatterySense {
    pub fn new(adc: Adc<'static, AdcBlocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for BatterySense {
    fn read_raw(&mut self) -> u16 {
        match self.adc.blocking_read(&mut self.channel) {
            Ok(raw) => raw,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Battery ADC read failed: {}", _e);
                0
            }
        }
    }
}
