//! Host-side doubles for display tests

use core::net::Ipv4Addr;

use lumastat_core::{LiveState, RealtimeMode, Snapshot, StaticNames};
use lumastat_hal::OutputPin;

use crate::backend::{Cell, DisplayBackend, DisplayError};
use crate::color::Color;

pub static NAMES: StaticNames<'static> = StaticNames::new(
    &["Solid", "Blink", "Breathe", "Rainbow"],
    &["Default", "Random Cycle", "Party"],
);

#[derive(Debug, Clone)]
pub struct TestLive {
    pub ap_active: bool,
    pub identity: &'static str,
    pub address: [u8; 4],
    pub brightness: u8,
    pub mode: u8,
    pub palette: u8,
    pub rt_address: [u8; 4],
    pub rt_mode: RealtimeMode,
    pub milliamps: u16,
}

impl Default for TestLive {
    fn default() -> Self {
        Self {
            ap_active: false,
            identity: "HomeNet",
            address: [192, 168, 1, 20],
            brightness: 128,
            mode: 0,
            palette: 0,
            rt_address: [0, 0, 0, 0],
            rt_mode: RealtimeMode::Inactive,
            milliamps: 420,
        }
    }
}

impl LiveState for TestLive {
    fn access_point_active(&self) -> bool {
        self.ap_active
    }

    fn access_point_identity(&self) -> &str {
        "LED-AP"
    }

    fn station_identity(&self) -> &str {
        self.identity
    }

    fn station_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.address)
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn main_segment_mode(&self) -> u8 {
        self.mode
    }

    fn main_segment_palette(&self) -> u8 {
        self.palette
    }

    fn realtime_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.rt_address)
    }

    fn realtime_mode(&self) -> RealtimeMode {
        self.rt_mode
    }

    fn estimated_milliamps(&self) -> u16 {
        self.milliamps
    }

    fn host_name(&self) -> &str {
        "lumastat"
    }
}

pub fn snapshot() -> Snapshot {
    Snapshot::capture(&TestLive::default())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear(Color),
    Text(Cell, String, Color),
    Flush,
}

/// Backend that records every call
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub ops: Vec<Op>,
    pub fail_with: Option<DisplayError>,
}

impl RecordingBackend {
    pub fn frames(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Flush)).count()
    }

    /// Text drawn on `row` since the last clear
    pub fn row_text(&self, row: u8) -> String {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, Op::Clear(_)))
            .unwrap_or(0);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                Op::Text(cell, text, _) if cell.row == row => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DisplayBackend for RecordingBackend {
    fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        self.ops.push(Op::Clear(color));
        Ok(())
    }

    fn draw_text(&mut self, cell: Cell, text: &str, color: Color) -> Result<(), DisplayError> {
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        let (cols, rows) = self.dimensions();
        if cell.row >= rows || cell.col >= cols {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.ops.push(Op::Text(cell, text.into(), color));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Flush);
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (19, 6)
    }
}

/// Backlight pin that remembers every level it was driven to
#[derive(Debug, Default)]
pub struct RecordingPin {
    pub high: bool,
    pub history: Vec<bool>,
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) {
        self.high = true;
        self.history.push(true);
    }

    fn set_low(&mut self) {
        self.high = false;
        self.history.push(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
