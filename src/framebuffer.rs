//! Core framebuffer for pixel rendering.
//!
//! An owned RGBA pixel buffer that serves as the rendering canvas. The GUI
//! shell (or the CLI viewer) owns the buffer; the plot renderer draws one
//! complete frame into it per call, so no partial frame is ever observable.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// RGBA framebuffer with tightly-packed row-major pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;
        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk[0] = r;
            chunk[1] = g;
            chunk[2] = b;
            chunk[3] = a;
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let [r, g, b, a] = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = self.pixel_index(x1, row_y);
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];
            for chunk in row.chunks_exact_mut(4) {
                chunk[0] = r;
                chunk[1] = g;
                chunk[2] = b;
                chunk[3] = a;
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let [r, g, b, a] = color.to_array();
        self.pixels[idx] = r;
        self.pixels[idx + 1] = g;
        self.pixels[idx + 2] = b;
        self.pixels[idx + 3] = a;
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert_eq!(fb.pixels().len(), 5000 * 4);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::RED));
            }
        }
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(10, 10, 20, 20, Rgba::RED);

        // Inside rect
        assert_eq!(fb.get_pixel(15, 15), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(29, 29), Some(Rgba::RED));
        // Outside rect
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(30, 30), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_rect_clamped() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgba::WHITE);
        // Rect extending past the right/bottom edges must clip, not panic
        fb.fill_rect(15, 15, 100, 100, Rgba::BLUE);

        assert_eq!(fb.get_pixel(19, 19), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(14, 14), Some(Rgba::WHITE));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));

        // Out of bounds
        assert_eq!(fb.get_pixel(100, 100), None);
        fb.set_pixel(100, 100, Rgba::RED); // no-op, no panic
    }

    #[test]
    fn test_identical_clears_compare_equal() {
        let mut a = Framebuffer::new(32, 32).unwrap();
        let mut b = Framebuffer::new(32, 32).unwrap();
        a.clear(Rgba::WHITE);
        b.clear(Rgba::WHITE);
        assert_eq!(a, b);
    }
}
