//! Raster target abstraction.
//!
//! Provides the `PixelFormat` trait, the only capability the renderers need
//! from a target: opaque single-pixel writes and rectangular fills. There is
//! no blending; a later write replaces an earlier one.
//!
//! [`RenderingBuffer`] is the in-memory implementation. Other targets (a
//! recording target in tests, a GPU texture upload, a terminal) implement
//! the same trait.

use crate::color::Rgba8;
use crate::rendering_buffer::RenderingBuffer;

// ============================================================================
// PixelFormat trait
// ============================================================================

/// A fixed-size pixel target.
///
/// `RendererBase` clips every write before delegating, so implementations
/// may assume coordinates are in bounds.
pub trait PixelFormat {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Overwrite the pixel at (x, y) with `c`.
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8);

    /// Overwrite a `w` × `h` rectangle whose top-left corner is (x, y).
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, c: &Rgba8) {
        for yy in y..y + h as i32 {
            for xx in x..x + w as i32 {
                self.copy_pixel(xx, yy, c);
            }
        }
    }

    /// Get the pixel color at (x, y).
    fn pixel(&self, x: i32, y: i32) -> Rgba8;
}

// ============================================================================
// RenderingBuffer
// ============================================================================

impl PixelFormat for RenderingBuffer {
    fn width(&self) -> u32 {
        RenderingBuffer::width(self)
    }

    fn height(&self) -> u32 {
        RenderingBuffer::height(self)
    }

    #[inline]
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        self.set(x as u32, y as u32, c);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, c: &Rgba8) {
        if x == 0 && y == 0 && w == self.width() && h == self.height() {
            self.clear(c);
            return;
        }
        for yy in y..y + h as i32 {
            for xx in x..x + w as i32 {
                self.set(xx as u32, yy as u32, c);
            }
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        self.get(x as u32, y as u32)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_pixel_and_read_back() {
        let mut buf = RenderingBuffer::new(8, 8);
        let c = Rgba8::hex(0x43a047);
        PixelFormat::copy_pixel(&mut buf, 5, 6, &c);
        assert_eq!(PixelFormat::pixel(&buf, 5, 6), c);
    }

    #[test]
    fn test_fill_rect_partial() {
        let mut buf = RenderingBuffer::new(8, 8);
        let c = Rgba8::hex(0xa0522d);
        buf.fill_rect(2, 3, 3, 2, &c);
        assert_eq!(buf.painted_pixels().count(), 6);
        assert_eq!(PixelFormat::pixel(&buf, 4, 4), c);
        assert_eq!(PixelFormat::pixel(&buf, 5, 4), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_fill_rect_full() {
        let mut buf = RenderingBuffer::new(8, 8);
        buf.fill_rect(0, 0, 8, 8, &Rgba8::WHITE);
        assert_eq!(buf.painted_pixels().count(), 64);
    }
}
