//! Screen colors

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Colors the status screen uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Red,
    Yellow,
    Green,
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Rgb565::BLACK,
            Color::White => Rgb565::WHITE,
            Color::Red => Rgb565::RED,
            Color::Yellow => Rgb565::YELLOW,
            Color::Green => Rgb565::GREEN,
        }
    }
}
