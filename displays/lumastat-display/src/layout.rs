//! Status screen layout
//!
//! Pure formatting: a [`Snapshot`] plus the render-time inputs go in, a
//! [`Frame`] of positioned, colored text comes out. Nothing here touches
//! hardware, so every row can be checked on the host.
//!
//! ```text
//! row 0  HomeNet                 identity
//! row 1  IP: 192.168.1.20        address
//! row 2  Brightness: 78%         or "sACN Mode"
//! row 3  Rainbow                 mode name, or host name
//! row 4  Party                   palette name, or sender address
//! row 5  1.25 A - 80%            current draw, battery (banded color)
//! ```

use core::fmt::Write;

use heapless::{String, Vec};
use lumastat_core::{BatteryBand, BatteryReading, DisplayConfig, NameList, NameLookup, Snapshot};

use crate::backend::Cell;
use crate::color::Color;
use crate::text::{truncate, LINE_CAPACITY};

/// Identity row
pub const ROW_IDENTITY: u8 = 0;
/// Address row
pub const ROW_ADDRESS: u8 = 1;
/// Brightness / streaming banner row
pub const ROW_BRIGHTNESS: u8 = 2;
/// Effect / host name row
pub const ROW_MODE: u8 = 3;
/// Palette / sender address row
pub const ROW_PALETTE: u8 = 4;
/// Current draw and battery row
pub const ROW_POWER: u8 = 5;

/// Banner shown instead of the brightness while an sACN stream is active
pub const STREAM_BANNER: &str = "sACN Mode";

/// Most instructions a single frame can hold
pub const MAX_INSTRUCTIONS: usize = 8;

/// One piece of text to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawInstruction {
    /// Where the text starts
    pub cell: Cell,
    /// Text, already fitted to the row
    pub text: String<LINE_CAPACITY>,
    /// Text color
    pub color: Color,
}

/// A complete screen: background fill followed by text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Color the whole screen is cleared to before drawing
    pub background: Color,
    items: Vec<DrawInstruction, MAX_INSTRUCTIONS>,
}

impl Frame {
    /// Empty frame with the given background
    pub fn new(background: Color) -> Self {
        Self {
            background,
            items: Vec::new(),
        }
    }

    /// Instructions in draw order
    pub fn items(&self) -> &[DrawInstruction] {
        &self.items
    }

    /// First instruction on `row`, if any
    pub fn row(&self, row: u8) -> Option<&DrawInstruction> {
        self.items.iter().find(|item| item.cell.row == row)
    }

    fn push(&mut self, cell: Cell, text: String<LINE_CAPACITY>, color: Color) {
        // Frames are built from a fixed set of rows; capacity is never hit
        let _ = self.items.push(DrawInstruction { cell, text, color });
    }
}

/// Inputs read at render time rather than from the snapshot
pub struct RenderContext<'a, N: NameLookup + ?Sized> {
    /// Effect and palette name tables
    pub names: &'a N,
    /// Host name for the streaming block
    pub host_name: &'a str,
    /// Battery sample taken for this render
    pub battery: BatteryReading,
    /// Layout settings (text budget, amps threshold)
    pub config: &'a DisplayConfig,
}

/// Lay out the status screen for `snapshot`
pub fn render<N: NameLookup + ?Sized>(snapshot: &Snapshot, ctx: &RenderContext<'_, N>) -> Frame {
    let budget = ctx.config.text_budget;
    let mut frame = Frame::new(Color::Black);
    let mut line: String<LINE_CAPACITY> = String::new();

    frame.push(
        Cell::new(ROW_IDENTITY, 0),
        truncate(&snapshot.identity, budget),
        Color::White,
    );

    line.clear();
    let _ = write!(line, "IP: {}", snapshot.address);
    frame.push(Cell::new(ROW_ADDRESS, 0), truncate(&line, budget), Color::White);

    if snapshot.shows_stream_block() {
        frame.push(
            Cell::new(ROW_BRIGHTNESS, 0),
            truncate(STREAM_BANNER, budget),
            Color::White,
        );
        frame.push(
            Cell::new(ROW_MODE, 0),
            truncate(ctx.host_name, budget),
            Color::White,
        );
        line.clear();
        let _ = write!(line, "{}", snapshot.realtime_address);
        frame.push(Cell::new(ROW_PALETTE, 0), truncate(&line, budget), Color::White);
    } else {
        line.clear();
        let _ = write!(line, "Brightness: {}%", brightness_percent(snapshot.brightness));
        frame.push(
            Cell::new(ROW_BRIGHTNESS, 0),
            truncate(&line, budget),
            Color::White,
        );

        line = name_or_index(ctx.names, NameList::Modes, snapshot.mode);
        frame.push(Cell::new(ROW_MODE, 0), truncate(&line, budget), Color::White);

        line = name_or_index(ctx.names, NameList::Palettes, snapshot.palette);
        frame.push(Cell::new(ROW_PALETTE, 0), truncate(&line, budget), Color::White);
    }

    // Power row: current draw in white, then the battery percentage in its
    // band color right after it
    line = format_current(snapshot.milliamps, ctx.config.amps_threshold_ma);
    let _ = line.push_str(" - ");
    let current = truncate(&line, budget);
    let battery_col = current.chars().count().min(u8::MAX as usize) as u8;
    frame.push(Cell::new(ROW_POWER, 0), current, Color::White);

    // No room left on the row when the current draw was itself cut short
    if battery_col < budget {
        line.clear();
        let _ = write!(line, "{}%", ctx.battery.percent);
        frame.push(
            Cell::new(ROW_POWER, battery_col),
            truncate(&line, budget - battery_col),
            band_color(ctx.battery.band),
        );
    }

    frame
}

/// Brightness as a whole percentage, rounded down
pub fn brightness_percent(brightness: u8) -> u8 {
    (brightness as u16 * 100 / 255) as u8
}

/// Current draw as "N mA" below `threshold_ma`, "A.BB A" from there on
///
/// Amps are rounded half-up to two decimals.
pub fn format_current(milliamps: u16, threshold_ma: u16) -> String<LINE_CAPACITY> {
    let mut out = String::new();
    if milliamps < threshold_ma {
        let _ = write!(out, "{} mA", milliamps);
    } else {
        let hundredths = (milliamps as u32 + 5) / 10;
        let _ = write!(out, "{}.{:02} A", hundredths / 100, hundredths % 100);
    }
    out
}

/// Color for a battery band
pub fn band_color(band: BatteryBand) -> Color {
    match band {
        BatteryBand::Healthy => Color::Green,
        BatteryBand::Caution => Color::Yellow,
        BatteryBand::Critical => Color::Red,
    }
}

fn name_or_index<N: NameLookup + ?Sized>(
    names: &N,
    list: NameList,
    index: u8,
) -> String<LINE_CAPACITY> {
    let mut out = String::new();
    match names.name(list, index) {
        Some(name) => {
            // Over-long names are cut by the row truncation afterwards
            for ch in name.chars() {
                if out.push(ch).is_err() {
                    break;
                }
            }
        }
        None => {
            let _ = write!(out, "#{}", index);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{snapshot, NAMES};
    use lumastat_core::{BatteryGauge, RealtimeMode};

    fn reading(percent: u8, band: BatteryBand) -> BatteryReading {
        BatteryReading {
            millivolts: 3900,
            percent,
            band,
        }
    }

    fn layout(snap: &Snapshot, battery: BatteryReading) -> Frame {
        let config = DisplayConfig::default();
        let ctx = RenderContext {
            names: &NAMES,
            host_name: "lumastat",
            battery,
            config: &config,
        };
        render(snap, &ctx)
    }

    fn text(frame: &Frame, row: u8) -> &str {
        frame.row(row).map(|item| item.text.as_str()).unwrap_or("")
    }

    #[test]
    fn test_normal_layout() {
        let mut snap = snapshot();
        snap.brightness = 200;
        snap.mode = 1;
        snap.palette = 2;
        snap.milliamps = 1250;

        let frame = layout(&snap, reading(80, BatteryBand::Healthy));
        assert_eq!(frame.background, Color::Black);
        assert_eq!(text(&frame, ROW_IDENTITY), "HomeNet");
        assert_eq!(text(&frame, ROW_ADDRESS), "IP: 192.168.1.20");
        assert_eq!(text(&frame, ROW_BRIGHTNESS), "Brightness: 78%");
        assert_eq!(text(&frame, ROW_MODE), "Blink");
        assert_eq!(text(&frame, ROW_PALETTE), "Party");
        assert_eq!(text(&frame, ROW_POWER), "1.25 A - ");

        let battery = &frame.items()[frame.items().len() - 1];
        assert_eq!(battery.cell, Cell::new(ROW_POWER, 9));
        assert_eq!(battery.text.as_str(), "80%");
        assert_eq!(battery.color, Color::Green);
    }

    #[test]
    fn test_all_text_white_except_battery() {
        let frame = layout(&snapshot(), reading(20, BatteryBand::Caution));
        let (battery, rest) = frame.items().split_last().unwrap();
        assert!(rest.iter().all(|item| item.color == Color::White));
        assert_eq!(battery.color, Color::Yellow);
    }

    #[test]
    fn test_stream_block_layout() {
        let mut snap = snapshot();
        snap.realtime_mode = RealtimeMode::E131;
        snap.realtime_address = [10, 0, 0, 7].into();

        let frame = layout(&snap, reading(5, BatteryBand::Critical));
        assert_eq!(text(&frame, ROW_BRIGHTNESS), "sACN Mode");
        assert_eq!(text(&frame, ROW_MODE), "lumastat");
        assert_eq!(text(&frame, ROW_PALETTE), "10.0.0.7");
        assert_eq!(frame.items().last().unwrap().color, Color::Red);
    }

    #[test]
    fn test_other_realtime_modes_keep_normal_rows() {
        let mut snap = snapshot();
        snap.realtime_mode = RealtimeMode::ArtNet;
        let frame = layout(&snap, reading(50, BatteryBand::Healthy));
        assert!(text(&frame, ROW_BRIGHTNESS).starts_with("Brightness: "));
    }

    #[test]
    fn test_unknown_indices_render_as_numbers() {
        let mut snap = snapshot();
        snap.mode = 99;
        snap.palette = 250;
        let frame = layout(&snap, reading(50, BatteryBand::Healthy));
        assert_eq!(text(&frame, ROW_MODE), "#99");
        assert_eq!(text(&frame, ROW_PALETTE), "#250");
    }

    #[test]
    fn test_long_identity_truncated() {
        let mut snap = snapshot();
        snap.identity.clear();
        snap.identity.push_str("My Very Long Network Name").unwrap();
        let frame = layout(&snap, reading(50, BatteryBand::Healthy));
        assert_eq!(text(&frame, ROW_IDENTITY), "My Very Long Netwo~");
    }

    #[test]
    fn test_narrow_budget_drops_battery_when_row_is_full() {
        let mut config = DisplayConfig::default();
        config.text_budget = 5;
        let mut snap = snapshot();
        snap.milliamps = 1250;
        let ctx = RenderContext {
            names: &NAMES,
            host_name: "lumastat",
            battery: reading(80, BatteryBand::Healthy),
            config: &config,
        };

        let frame = render(&snap, &ctx);
        assert_eq!(text(&frame, ROW_POWER), "1.25~");
        assert_eq!(frame.items().iter().filter(|i| i.cell.row == ROW_POWER).count(), 1);
        assert!(frame.items().iter().all(|i| i.cell.col < config.text_budget));
    }

    #[test]
    fn test_brightness_percent() {
        assert_eq!(brightness_percent(0), 0);
        assert_eq!(brightness_percent(128), 50);
        assert_eq!(brightness_percent(200), 78);
        assert_eq!(brightness_percent(254), 99);
        assert_eq!(brightness_percent(255), 100);
    }

    #[test]
    fn test_format_current() {
        assert_eq!(format_current(0, 1000).as_str(), "0 mA");
        assert_eq!(format_current(999, 1000).as_str(), "999 mA");
        assert_eq!(format_current(1000, 1000).as_str(), "1.00 A");
        assert_eq!(format_current(1254, 1000).as_str(), "1.25 A");
        assert_eq!(format_current(1255, 1000).as_str(), "1.26 A");
        assert_eq!(format_current(1259, 1000).as_str(), "1.26 A");
        assert_eq!(format_current(1999, 1000).as_str(), "2.00 A");
        assert_eq!(format_current(u16::MAX, 1000).as_str(), "65.54 A");
        assert_eq!(format_current(12_050, 1000).as_str(), "12.05 A");
        assert_eq!(format_current(1500, 2000).as_str(), "1500 mA");
    }

    #[test]
    fn test_battery_from_gauge() {
        let gauge = BatteryGauge::new(Default::default());
        let frame = layout(&snapshot(), gauge.read(2340));
        let battery = frame.items().last().unwrap();
        assert_eq!(battery.text.as_str(), "90%");
        assert_eq!(battery.color, Color::Green);
    }
}
