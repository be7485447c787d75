//! embedded-graphics backend
//!
//! Draws the status screen onto any RGB565 [`DrawTarget`], such as a
//! `mipidsi` panel. Character cells map to a fixed monospace grid.

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    text::{Baseline, Text},
};

use crate::backend::{Cell, DisplayBackend, DisplayError};
use crate::color::Color;

/// Extra pixels between text rows
const ROW_GAP: u32 = 2;

/// Status backend for an embedded-graphics target
pub struct GraphicsBackend<T> {
    target: T,
    font: &'static MonoFont<'static>,
    origin: Point,
}

impl<T> GraphicsBackend<T>
where
    T: DrawTarget<Color = Rgb565>,
{
    /// Backend with the default 10×20 font and a 1 px margin
    pub fn new(target: T) -> Self {
        Self::with_font(target, &FONT_10X20, Point::new(1, 1))
    }

    /// Backend with a specific font and top-left text origin
    pub fn with_font(target: T, font: &'static MonoFont<'static>, origin: Point) -> Self {
        Self {
            target,
            font,
            origin,
        }
    }

    /// Access the underlying target
    pub fn target(&self) -> &T {
        &self.target
    }

    fn cell_size(&self) -> Size {
        Size::new(
            self.font.character_size.width + self.font.character_spacing,
            self.font.character_size.height + ROW_GAP,
        )
    }

    fn cell_origin(&self, cell: Cell) -> Point {
        let size = self.cell_size();
        self.origin
            + Point::new(
                cell.col as i32 * size.width as i32,
                cell.row as i32 * size.height as i32,
            )
    }
}

impl<T> DisplayBackend for GraphicsBackend<T>
where
    T: DrawTarget<Color = Rgb565>,
{
    fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
        self.target
            .clear(color.into())
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(&mut self, cell: Cell, text: &str, color: Color) -> Result<(), DisplayError> {
        let (cols, rows) = self.dimensions();
        if cell.row >= rows || cell.col >= cols {
            return Err(DisplayError::InvalidCoordinates);
        }

        let style = MonoTextStyle::new(self.font, Rgb565::from(color));
        Text::with_baseline(text, self.cell_origin(cell), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        // Targets here write straight to the panel
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        let area = self.target.bounding_box().size;
        let cell = self.cell_size();
        let margin = self.origin.x.max(0) as u32;
        let cols = area.width.saturating_sub(margin) / cell.width;
        let rows = area.height.saturating_sub(self.origin.y.max(0) as u32) / cell.height;
        (cols.min(u8::MAX as u32) as u8, rows.min(u8::MAX as u32) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::pixelcolor::RgbColor;
    use embedded_graphics::Pixel;

    /// 240×135 framebuffer
    struct Panel {
        pixels: Vec<Rgb565>,
    }

    impl Panel {
        const WIDTH: u32 = 240;
        const HEIGHT: u32 = 135;

        fn new() -> Self {
            Self {
                pixels: vec![Rgb565::BLACK; (Self::WIDTH * Self::HEIGHT) as usize],
            }
        }

        fn count(&self, color: Rgb565) -> usize {
            self.pixels.iter().filter(|p| **p == color).count()
        }

        fn count_in_rows(&self, color: Rgb565, y0: u32, y1: u32) -> usize {
            (y0..y1)
                .flat_map(|y| (0..Self::WIDTH).map(move |x| (x, y)))
                .filter(|(x, y)| self.pixels[(y * Self::WIDTH + x) as usize] == color)
                .count()
        }
    }

    impl OriginDimensions for Panel {
        fn size(&self) -> Size {
            Size::new(Self::WIDTH, Self::HEIGHT)
        }
    }

    impl DrawTarget for Panel {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0
                    && point.y >= 0
                    && (point.x as u32) < Self::WIDTH
                    && (point.y as u32) < Self::HEIGHT
                {
                    self.pixels[(point.y as u32 * Self::WIDTH + point.x as u32) as usize] = color;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_dimensions_fit_status_rows() {
        let backend = GraphicsBackend::new(Panel::new());
        // 10×20 font: (240 - 1) / 10 columns, (135 - 1) / 22 rows
        assert_eq!(backend.dimensions(), (23, 6));
    }

    #[test]
    fn test_clear_fills_panel() {
        let mut backend = GraphicsBackend::new(Panel::new());
        backend.clear(Color::Red).unwrap();
        assert_eq!(
            backend.target().count(Rgb565::RED),
            (Panel::WIDTH * Panel::HEIGHT) as usize
        );
    }

    #[test]
    fn test_text_lands_in_its_row() {
        let mut backend = GraphicsBackend::new(Panel::new());
        backend.clear(Color::Black).unwrap();
        backend
            .draw_text(Cell::new(2, 0), "Brightness: 78%", Color::White)
            .unwrap();

        let panel = backend.target();
        assert!(panel.count(Rgb565::WHITE) > 0);
        // Row 2 spans y = 45..65
        assert_eq!(panel.count_in_rows(Rgb565::WHITE, 0, 45), 0);
        assert_eq!(panel.count_in_rows(Rgb565::WHITE, 65, Panel::HEIGHT), 0);
    }

    #[test]
    fn test_cell_outside_grid_rejected() {
        let mut backend = GraphicsBackend::new(Panel::new());
        assert_eq!(
            backend.draw_text(Cell::new(6, 0), "x", Color::White),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            backend.draw_text(Cell::new(0, 23), "x", Color::White),
            Err(DisplayError::InvalidCoordinates)
        );
    }
}
