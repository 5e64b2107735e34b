//! Owned RGBA8 pixel storage.
//!
//! Row-major, top-to-bottom, four bytes per pixel in R, G, B, A order.
//! A fresh buffer is fully transparent.

use crate::basics::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::color::Rgba8;

const BPP: usize = 4; // bytes per pixel

/// A width × height RGBA8 raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RenderingBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * BPP],
        }
    }

    /// A buffer sized for the plant canvas (192×288).
    pub fn canvas() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds ({}x{})",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * BPP
    }

    /// Color at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        let off = self.offset(x, y);
        Rgba8::new(
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        )
    }

    /// Overwrite `(x, y)` with `c`.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the buffer.
    pub fn set(&mut self, x: u32, y: u32, c: &Rgba8) {
        let off = self.offset(x, y);
        self.data[off] = c.r;
        self.data[off + 1] = c.g;
        self.data[off + 2] = c.b;
        self.data[off + 3] = c.a;
    }

    /// Fill every pixel with `c`.
    pub fn clear(&mut self, c: &Rgba8) {
        for px in self.data.chunks_exact_mut(BPP) {
            px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    /// Every non-transparent pixel with its coordinate, in row-major order.
    pub fn painted_pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba8)> + '_ {
        let w = self.width as usize;
        self.data
            .chunks_exact(BPP)
            .enumerate()
            .filter(|(_, px)| px[3] != 0)
            .map(move |(i, px)| {
                (
                    (i % w) as u32,
                    (i / w) as u32,
                    Rgba8::new(px[0], px[1], px[2], px[3]),
                )
            })
    }

    /// Sorted `"x,y:#rrggbb"` entries for every non-transparent pixel.
    ///
    /// Two renders are identical iff their signatures are equal.
    pub fn signature(&self) -> Vec<String> {
        let mut sig: Vec<String> = self
            .painted_pixels()
            .map(|(x, y, c)| format!("{},{}:{}", x, y, c))
            .collect();
        sig.sort();
        sig
    }
}

impl Default for RenderingBuffer {
    fn default() -> Self {
        Self::canvas()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let buf = RenderingBuffer::new(4, 3);
        assert_eq!(buf.data().len(), 4 * 3 * 4);
        assert_eq!(buf.get(3, 2), Rgba8::TRANSPARENT);
        assert_eq!(buf.painted_pixels().count(), 0);
    }

    #[test]
    fn test_canvas_size() {
        let buf = RenderingBuffer::canvas();
        assert_eq!((buf.width(), buf.height()), (192, 288));
    }

    #[test]
    fn test_set_get() {
        let mut buf = RenderingBuffer::new(4, 4);
        let c = Rgba8::hex(0x112233);
        buf.set(2, 1, &c);
        assert_eq!(buf.get(2, 1), c);
        let painted: Vec<_> = buf.painted_pixels().collect();
        assert_eq!(painted, vec![(2, 1, c)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let buf = RenderingBuffer::new(4, 4);
        buf.get(4, 0);
    }

    #[test]
    fn test_clear() {
        let mut buf = RenderingBuffer::new(2, 2);
        buf.clear(&Rgba8::WHITE);
        assert_eq!(buf.painted_pixels().count(), 4);
        assert!(buf.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_signature_sorted() {
        let mut buf = RenderingBuffer::new(4, 4);
        buf.set(3, 3, &Rgba8::hex(0x000001));
        buf.set(0, 1, &Rgba8::hex(0xff0000));
        assert_eq!(buf.signature(), vec!["0,1:#ff0000", "3,3:#000001"]);
    }
}
