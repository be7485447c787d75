//! Status display lifecycle
//!
//! [`StatusDisplay`] is what the host controller talks to. It has three
//! entry points matching the host's lifecycle:
//!
//! - [`StatusDisplay::setup`] once at boot, before the network is up
//! - [`StatusDisplay::on_loop`] on every main-loop iteration
//! - [`StatusDisplay::on_connected`] when the network attaches
//!
//! Drawing is best-effort. A failed draw is logged and the next change
//! triggers a fresh attempt; nothing is propagated to the host loop.

use lumastat_core::{
    BatteryGauge, DisplayConfig, LiveState, NameLookup, PowerState, RedrawScheduler, Snapshot,
    TickPhase, TickReport,
};
use lumastat_hal::{AnalogInput, OutputPin};

use crate::backend::{Cell, DisplayBackend, DisplayError};
use crate::color::Color;
use crate::layout::{self, Frame, RenderContext};

/// Splash text shown while the controller boots
pub const SPLASH_TEXT: &str = "Loading...";

/// Status screen driver
///
/// Generic over the panel backend, the backlight enable pin and the battery
/// divider ADC channel.
pub struct StatusDisplay<D, B, A> {
    backend: D,
    backlight: B,
    battery_adc: A,
    scheduler: RedrawScheduler,
    gauge: BatteryGauge<'static>,
    config: DisplayConfig,
}

impl<D, B, A> StatusDisplay<D, B, A>
where
    D: DisplayBackend,
    B: OutputPin,
    A: AnalogInput,
{
    /// Create a driver; call [`setup`](Self::setup) before the first loop
    ///
    /// The text budget is clamped to the columns the backend can show.
    pub fn new(backend: D, backlight: B, battery_adc: A, mut config: DisplayConfig) -> Self {
        let (cols, _) = backend.dimensions();
        let max_budget = cols.max(2);
        if config.text_budget > max_budget {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Text budget {} exceeds {} columns, clamping",
                config.text_budget,
                cols
            );
            config.text_budget = max_budget;
        }

        Self {
            backend,
            backlight,
            battery_adc,
            scheduler: RedrawScheduler::new(config.scheduler()),
            gauge: BatteryGauge::new(config.battery),
            config,
        }
    }

    /// Show the boot splash and switch the backlight on
    pub fn setup(&mut self) {
        self.backlight.set_high();

        if let Err(_e) = self.paint_splash() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Splash draw failed: {}", _e);
        }

        // Whatever the host did before, the first loop paints the status
        self.scheduler.invalidate();
    }

    /// Per-iteration hook; cheap unless the refresh interval elapsed
    pub fn on_loop<L, N>(&mut self, now_ms: u32, live: &L, names: &N) -> TickReport
    where
        L: LiveState + ?Sized,
        N: NameLookup + ?Sized,
    {
        let report = self.scheduler.tick(now_ms, live);

        match report.phase {
            TickPhase::Throttled => return report,
            TickPhase::Unchanged => {
                #[cfg(feature = "defmt")]
                defmt::trace!("No data changed");
            }
            TickPhase::Redraw => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Data changed");
            }
        }

        // Power down first so a same-tick wake leaves the backlight on
        if report.powered_down {
            self.backlight.set_low();
        }
        if report.woke {
            self.backlight.set_high();
        }

        if report.needs_render() {
            let battery_raw = self.battery_adc.read_raw();
            if let Some(snapshot) = self.scheduler.snapshot() {
                let frame = self.compose(snapshot, battery_raw, live, names);
                self.draw(&frame);
            }
        }

        report
    }

    /// Network attached; logs the station address
    pub fn on_connected<L: LiveState + ?Sized>(&self, live: &L) {
        #[cfg(feature = "defmt")]
        {
            let ip = live.station_address().octets();
            defmt::info!("Connected to WiFi, IP {}.{}.{}.{}", ip[0], ip[1], ip[2], ip[3]);
        }
        #[cfg(not(feature = "defmt"))]
        let _ = live;
    }

    /// Current backlight power state
    pub fn power_state(&self) -> PowerState {
        self.scheduler.power_state()
    }

    /// Configuration in use
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Panel backend
    pub fn backend(&self) -> &D {
        &self.backend
    }

    /// Mutable panel backend
    pub fn backend_mut(&mut self) -> &mut D {
        &mut self.backend
    }

    /// Backlight pin
    pub fn backlight(&self) -> &B {
        &self.backlight
    }

    fn compose<L, N>(&self, snapshot: &Snapshot, battery_raw: u16, live: &L, names: &N) -> Frame
    where
        L: LiveState + ?Sized,
        N: NameLookup + ?Sized,
    {
        let ctx = RenderContext {
            names,
            host_name: live.host_name(),
            battery: self.gauge.read(battery_raw),
            config: &self.config,
        };
        layout::render(snapshot, &ctx)
    }

    fn draw(&mut self, frame: &Frame) {
        if let Err(_e) = self.paint(frame) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Status draw failed: {}", _e);
        }
    }

    fn paint_splash(&mut self) -> Result<(), DisplayError> {
        let (cols, rows) = self.backend.dimensions();
        let col = (cols as usize).saturating_sub(SPLASH_TEXT.len()) / 2;

        self.backend.clear(Color::Red)?;
        self.backend
            .draw_text(Cell::new(rows / 2, col as u8), SPLASH_TEXT, Color::White)?;
        self.backend.flush()
    }

    fn paint(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        self.backend.clear(frame.background)?;
        for item in frame.items() {
            self.backend.draw_text(item.cell, &item.text, item.color)?;
        }
        self.backend.flush()
    }
}
