//! Lumastat - Status Display Firmware
//!
//! Peripheral status screen for an RP2040-based LED controller. Shows the
//! network identity and address, brightness, effect and palette (or the
//! sACN source while streaming), current draw and battery level on a
//! 135×240 ST7789 panel, and powers the backlight down while nothing
//! changes.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::peripherals::UART1;
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use display_interface_spi::SPIInterface;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;

use lumastat_core::config::parse_config;
use lumastat_core::DisplayConfig;
use lumastat_display::{GraphicsBackend, StatusDisplay};
use lumastat_hal::ADC_MAX_12BIT;

mod board;
mod host;
mod names;
mod tasks;

use board::{Backlight, BatterySense, PANEL_HEIGHT, PANEL_OFFSET, PANEL_WIDTH};

/// Embedded display configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

/// Name announced by the controller until the network side sets its own
const DEFAULT_HOST_NAME: &str = "lumastat";

/// Access point the controller opens before it joins a network
const DEFAULT_AP_IDENTITY: &str = "LUMASTAT-AP";

/// SPI clock for the panel
const PANEL_SPI_HZ: u32 = 62_500_000;

bind_interrupts!(struct Irqs {
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

// LCD power enable must stay driven for the life of the firmware
static LCD_POWER: StaticCell<Output<'static>> = StaticCell::new();

// Static cells for host link UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumastat firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Panel power first, then the SPI bus
    LCD_POWER.init(Output::new(p.PIN_22, Level::High));

    let mut spi_config = SpiConfig::default();
    spi_config.frequency = PANEL_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_2, p.PIN_3, spi_config);
    let cs = Output::new(p.PIN_5, Level::High);
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();

    let dc = Output::new(p.PIN_1, Level::Low);
    let rst = Output::new(p.PIN_0, Level::High);
    let interface = SPIInterface::new(spi_device, dc);

    let panel = match Builder::new(ST7789, interface)
        .display_size(PANEL_WIDTH, PANEL_HEIGHT)
        .display_offset(PANEL_OFFSET.0, PANEL_OFFSET.1)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(rst)
        .init(&mut Delay)
    {
        Ok(panel) => panel,
        Err(_) => defmt::panic!("ST7789 init failed"),
    };
    info!("Panel initialized");

    // Backlight starts off; setup() switches it on with the splash
    let backlight = Backlight::new(Output::new(p.PIN_4, Level::Low));

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let battery = BatterySense::new(adc, Channel::new_pin(p.PIN_26, Pull::None));

    let screen = StatusDisplay::new(GraphicsBackend::new(panel), backlight, battery, config);

    host::set_host_name(DEFAULT_HOST_NAME);
    host::set_access_point(DEFAULT_AP_IDENTITY);

    // Host link from the LED controller (GPIO8 TX, GPIO9 RX, 115200 baud)
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART1, p.PIN_8, p.PIN_9, UartConfig::default());
    let (_tx, rx) = uart.into_buffered(Irqs, tx_buf, rx_buf).split();
    info!("UART initialized for host link");

    spawner.spawn(tasks::host_link_task(rx)).unwrap();
    spawner.spawn(tasks::status_task(screen)).unwrap();

    info!(
        "All tasks spawned, status display running ({} ms host loop)",
        tasks::HOST_LOOP_INTERVAL_MS
    );
}

/// Parse the embedded display.toml, falling back to defaults
fn load_config() -> DisplayConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Display config: refresh={}ms, idle={}ms, budget={}",
                config.refresh_interval_ms, config.idle_timeout_ms, config.text_budget
            );
            if config.battery.adc_max != ADC_MAX_12BIT {
                warn!(
                    "battery.adc_max = {} but the RP2040 ADC is 12-bit ({})",
                    config.battery.adc_max, ADC_MAX_12BIT
                );
            }
            config
        }
        Err(e) => {
            warn!("display.toml rejected ({}), using defaults", e);
            DisplayConfig::default()
        }
    }
}
