//! Shared helpers for the integration tests.

#![allow(dead_code)]

use pixel_plant::basics::{CANVAS_HEIGHT, CANVAS_WIDTH};
use pixel_plant::phenotype::*;
use pixel_plant::{generate_plant, PixelFormat, Rgba8, RenderingBuffer};

/// Canvas-sized raster that also counts writes it receives, including any
/// that land outside the canvas.
pub struct RecordingTarget {
    pub buf: RenderingBuffer,
    pub writes: usize,
    pub out_of_bounds: usize,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self {
            buf: RenderingBuffer::canvas(),
            writes: 0,
            out_of_bounds: 0,
        }
    }
}

impl PixelFormat for RecordingTarget {
    fn width(&self) -> u32 {
        CANVAS_WIDTH
    }

    fn height(&self) -> u32 {
        CANVAS_HEIGHT
    }

    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        self.writes += 1;
        if x < 0 || y < 0 || x >= CANVAS_WIDTH as i32 || y >= CANVAS_HEIGHT as i32 {
            self.out_of_bounds += 1;
            return;
        }
        self.buf.set(x as u32, y as u32, c);
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        self.buf.get(x as u32, y as u32)
    }
}

/// Render into a fresh canvas and return its pixel signature.
pub fn signature(phenotype: &Phenotype, seed: &str, frame: i64, bg: Background) -> Vec<String> {
    let mut buf = RenderingBuffer::canvas();
    generate_plant(&mut buf, phenotype, seed, frame, bg);
    buf.signature()
}

/// Default phenotype with every optional layer switched on.
pub fn everything_on() -> Phenotype {
    Phenotype {
        stem: StemShape::Vine,
        stem_texture: StemTexture::Hairy,
        thorns: true,
        fruit: true,
        glow: true,
        ..Phenotype::DEFAULT
    }
}
