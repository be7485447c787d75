//! Display backend trait
//!
//! Defines the interface the status screen draws through. The layout works
//! in character cells; backends map cells to pixels.

use crate::color::Color;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
}

/// Character cell position (row 0 at the top, column 0 at the left)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    /// Row number (0-based)
    pub row: u8,
    /// Column number in characters (0-based)
    pub col: u8,
}

impl Cell {
    /// Create a cell position
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for the status screen.
/// Implementations handle TFT, OLED or simulated targets.
pub trait DisplayBackend {
    /// Fill the entire display with one color
    fn clear(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Draw text starting at the given cell
    ///
    /// Text running past the right edge is clipped by the backend.
    fn draw_text(&mut self, cell: Cell, text: &str, color: Color) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays without an internal buffer this is a no-op.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}
