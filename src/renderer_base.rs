//! Base renderer with clipping.
//!
//! Wraps a pixel format with a clip rectangle so that every drawing
//! operation is bounded by the visible area. Out-of-bounds writes are
//! dropped silently: no error, no wraparound, no partial clamping.
//!
//! Coordinates handed to the `f64` entry points are snapped with
//! [`round_half_up`]; non-finite coordinates never hit the target.

use crate::basics::{iround, round_half_up, RectI};
use crate::color::Rgba8;
use crate::dda_line::BresenhamLine;
use crate::pixfmt_rgba::PixelFormat;

// ============================================================================
// RendererBase
// ============================================================================

/// Clip-and-delegate renderer over a borrowed pixel format.
pub struct RendererBase<'a, PF: PixelFormat + ?Sized> {
    ren: &'a mut PF,
    clip_box: RectI,
}

impl<'a, PF: PixelFormat + ?Sized> RendererBase<'a, PF> {
    /// Create a renderer whose clip box covers the full target.
    pub fn new(ren: &'a mut PF) -> Self {
        let w = ren.width() as i32;
        let h = ren.height() as i32;
        Self {
            ren,
            clip_box: RectI::new(0, 0, w - 1, h - 1),
        }
    }

    pub fn width(&self) -> u32 {
        self.ren.width()
    }

    pub fn height(&self) -> u32 {
        self.ren.height()
    }

    pub fn clip_box(&self) -> &RectI {
        &self.clip_box
    }

    #[inline]
    pub fn inbox(&self, x: i32, y: i32) -> bool {
        self.clip_box.hit_test(x, y)
    }

    /// Get a reference to the underlying pixel format.
    pub fn ren(&self) -> &PF {
        self.ren
    }

    // ========================================================================
    // Fills
    // ========================================================================

    /// Fill the entire target with `c`.
    pub fn clear(&mut self, c: &Rgba8) {
        let (w, h) = (self.width(), self.height());
        if w > 0 && h > 0 {
            self.ren.fill_rect(0, 0, w, h, c);
        }
    }

    /// Fill a rectangle (clipped).
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, c: &Rgba8) {
        if w == 0 || h == 0 {
            return;
        }
        let mut r = RectI::new(x, y, x + w as i32 - 1, y + h as i32 - 1);
        if r.clip(&self.clip_box) {
            self.ren.fill_rect(
                r.x1,
                r.y1,
                (r.x2 - r.x1 + 1) as u32,
                (r.y2 - r.y1 + 1) as u32,
                c,
            );
        }
    }

    // ========================================================================
    // Pixels
    // ========================================================================

    /// Copy a single pixel (clipped).
    #[inline]
    pub fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        if self.inbox(x, y) {
            self.ren.copy_pixel(x, y, c);
        }
    }

    /// Snap (x, y) to the nearest pixel and write it if it is in bounds.
    pub fn set_pixel(&mut self, x: f64, y: f64, c: &Rgba8) {
        let px = round_half_up(x);
        let py = round_half_up(y);
        // NaN fails every comparison and is dropped here.
        if px >= self.clip_box.x1 as f64
            && py >= self.clip_box.y1 as f64
            && px <= self.clip_box.x2 as f64
            && py <= self.clip_box.y2 as f64
        {
            self.ren.copy_pixel(px as i32, py as i32, c);
        }
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    /// Bresenham line between the snapped endpoints; always draws the start.
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, c: &Rgba8) {
        for (x, y) in BresenhamLine::new(iround(x0), iround(y0), iround(x1), iround(y1)) {
            self.copy_pixel(x, y, c);
        }
    }

    /// Filled disc of radius `floor(r)`; radius 0 draws only the center.
    pub fn circle(&mut self, xc: f64, yc: f64, r: f64, c: &Rgba8) {
        let xc = iround(xc);
        let yc = iround(yc);
        let r = r.floor() as i32;
        for y in -r..=r {
            for x in -r..=r {
                if x * x + y * y <= r * r {
                    self.copy_pixel(xc + x, yc + y, c);
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering_buffer::RenderingBuffer;

    const RED: Rgba8 = Rgba8::hex(0xff0000);

    #[test]
    fn test_new() {
        let mut buf = RenderingBuffer::new(100, 80);
        let ren = RendererBase::new(&mut buf);
        assert_eq!(ren.width(), 100);
        assert_eq!(ren.height(), 80);
        assert_eq!(*ren.clip_box(), RectI::new(0, 0, 99, 79));
    }

    #[test]
    fn test_clear() {
        let mut buf = RenderingBuffer::new(10, 10);
        let mut ren = RendererBase::new(&mut buf);
        ren.clear(&Rgba8::WHITE);
        assert_eq!(ren.ren().pixel(5, 5), Rgba8::WHITE);
    }

    #[test]
    fn test_copy_pixel_clipped() {
        let mut buf = RenderingBuffer::new(10, 10);
        let mut ren = RendererBase::new(&mut buf);
        ren.copy_pixel(5, 5, &RED);
        // Outside clip box, silently ignored
        ren.copy_pixel(-1, 5, &RED);
        ren.copy_pixel(100, 5, &RED);
        ren.copy_pixel(5, 10, &RED);
        assert_eq!(buf.painted_pixels().count(), 1);
    }

    #[test]
    fn test_set_pixel_rounds_half_up() {
        let mut buf = RenderingBuffer::new(10, 10);
        let mut ren = RendererBase::new(&mut buf);
        ren.set_pixel(2.5, 3.49, &RED);
        ren.set_pixel(-0.5, 0.0, &RED); // rounds to 0
        ren.set_pixel(-0.51, 0.0, &RED); // rounds to -1, dropped
        ren.set_pixel(9.5, 0.0, &RED); // rounds to 10, dropped
        ren.set_pixel(f64::NAN, 1.0, &RED);
        ren.set_pixel(1.0, f64::INFINITY, &RED);
        let painted: Vec<_> = buf.painted_pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(painted, vec![(0, 0), (3, 3)]);
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut buf = RenderingBuffer::new(10, 10);
        let mut ren = RendererBase::new(&mut buf);
        ren.fill_rect(-5, 8, 20, 5, &RED);
        assert_eq!(buf.painted_pixels().count(), 20);
    }

    #[test]
    fn test_line_degenerate_is_one_pixel() {
        let mut buf = RenderingBuffer::new(10, 10);
        let mut ren = RendererBase::new(&mut buf);
        ren.line(4.2, 4.4, 3.8, 3.6, &RED);
        assert_eq!(buf.painted_pixels().count(), 1);
    }

    #[test]
    fn test_line_partially_outside() {
        let mut buf = RenderingBuffer::new(10, 10);
        let mut ren = RendererBase::new(&mut buf);
        ren.line(-5.0, 0.0, 4.0, 0.0, &RED);
        assert_eq!(buf.painted_pixels().count(), 5);
    }

    #[test]
    fn test_circle_zero_radius() {
        let mut buf = RenderingBuffer::new(10, 10);
        let mut ren = RendererBase::new(&mut buf);
        ren.circle(5.0, 5.0, 0.7, &RED);
        let painted: Vec<_> = buf.painted_pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(painted, vec![(5, 5)]);
    }

    #[test]
    fn test_circle_radius_two() {
        let mut buf = RenderingBuffer::new(10, 10);
        let mut ren = RendererBase::new(&mut buf);
        ren.circle(5.0, 5.0, 2.0, &RED);
        // 5x5 box minus the 4 corners (and the 8 pixels with dx²+dy² = 5)
        assert_eq!(buf.painted_pixels().count(), 13);
    }

    /// Target that records every write it receives, in bounds or not.
    struct StrictTarget {
        buf: RenderingBuffer,
        out_of_bounds: Vec<(i32, i32)>,
    }

    impl PixelFormat for StrictTarget {
        fn width(&self) -> u32 {
            self.buf.width()
        }

        fn height(&self) -> u32 {
            self.buf.height()
        }

        fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
            if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
                self.out_of_bounds.push((x, y));
                return;
            }
            self.buf.set(x as u32, y as u32, c);
        }

        fn pixel(&self, x: i32, y: i32) -> Rgba8 {
            self.buf.get(x as u32, y as u32)
        }
    }

    #[test]
    fn test_offscreen_writes_never_reach_target() {
        let mut target = StrictTarget {
            buf: RenderingBuffer::new(10, 10),
            out_of_bounds: Vec::new(),
        };
        let mut ren = RendererBase::new(&mut target);
        ren.copy_pixel(-1, -1, &RED);
        ren.copy_pixel(10, 3, &RED);
        ren.set_pixel(-3.0, 4.0, &RED);
        ren.set_pixel(4.0, 12.0, &RED);
        ren.line(-20.0, -5.0, -2.0, 30.0, &RED);
        ren.line(12.0, 0.0, 40.0, 9.0, &RED);
        ren.circle(-10.0, -10.0, 4.0, &RED);
        ren.circle(30.0, 5.0, 6.0, &RED);
        ren.fill_rect(10, 0, 5, 5, &RED);
        ren.fill_rect(-8, -8, 4, 4, &RED);
        assert!(target.out_of_bounds.is_empty());
        assert_eq!(target.buf.painted_pixels().count(), 0);

        // Straddling the edge: only the visible part lands.
        let mut ren = RendererBase::new(&mut target);
        ren.line(-5.0, 9.0, 14.0, 9.0, &RED);
        ren.circle(9.0, 0.0, 3.0, &RED);
        ren.fill_rect(-3, -3, 5, 5, &RED);
        assert!(target.out_of_bounds.is_empty());
        assert!(target.buf.painted_pixels().all(|(x, y, _)| x < 10 && y < 10));
        assert_eq!(target.buf.get(0, 9), RED);
        assert_eq!(target.buf.get(9, 9), RED);
        assert_eq!(target.buf.get(1, 1), RED);
    }

    #[test]
    fn test_circle_at_edge_clips() {
        let mut buf = RenderingBuffer::new(10, 10);
        let mut ren = RendererBase::new(&mut buf);
        ren.circle(0.0, 0.0, 2.0, &RED);
        assert_eq!(buf.painted_pixels().count(), 6);
    }
}
