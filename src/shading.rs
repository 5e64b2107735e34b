//! Per-pixel lighting.
//!
//! A pixel's tone is picked from its palette by the sign of the lighting dot
//! product and a checkerboard dither mask keyed on canvas position. Only
//! pixels where the mask is set shift toward `light` or `dark`, which gives
//! the banded, dithered look of hand-shaded pixel art while staying
//! independent of generator state.

use crate::basics::{round_half_up, LIGHT_DIR};
use crate::color::Rgba8;
use crate::palette::ColorPalette;

/// Blend factor toward the light or dark tone.
pub const SHADE_BLEND: f64 = 0.35;

/// Choose a palette tone for a pixel.
///
/// `dot > 0.5` with the mask set blends `main` 35% toward `light`;
/// `dot < -0.5` with the mask set blends 35% toward `dark`; everything else
/// is `main`. A NaN `dot` yields `main`.
pub fn shade_color(dot: f64, dither_on: bool, palette: &ColorPalette) -> Rgba8 {
    if dot > 0.5 && dither_on {
        palette.main.blend(&palette.light, SHADE_BLEND)
    } else if dot < -0.5 && dither_on {
        palette.main.blend(&palette.dark, SHADE_BLEND)
    } else {
        palette.main
    }
}

/// Checkerboard mask: `true` iff `|round(x)| + |round(y)|` is even.
#[inline]
pub fn dither_mask(x: f64, y: f64) -> bool {
    (round_half_up(x).abs() + round_half_up(y).abs()) % 2.0 == 0.0
}

/// Negative projection of the normal `(nx, ny)` onto the light direction.
#[inline]
pub fn light_dot(nx: f64, ny: f64) -> f64 {
    -(nx * LIGHT_DIR.x + ny * LIGHT_DIR.y)
}

// ============================================================================
// Tests
// ============================================================================
