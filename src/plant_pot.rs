//! Pot renderer.
//!
//! A fixed trapezoid body (wide top, narrow bottom), a soil strip just under
//! the rim, and a rim cap two pixel-units tall with its top row in the rim
//! tone. Geometry does not depend on the phenotype.

use crate::basics::{s, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::color::Rgba8;
use crate::palette::PALETTES;
use crate::pixfmt_rgba::PixelFormat;
use crate::random::SeededRandom;
use crate::renderer_base::RendererBase;

/// Draw the pot.
///
/// The pot has its own stream like every other component but currently
/// draws nothing from it. Keep it that way: randomizing the pot later must
/// not change any existing render except the pot itself, which the
/// per-component stream already guarantees.
pub fn draw_pot<PF: PixelFormat + ?Sized>(ren: &mut RendererBase<'_, PF>, _rng: &mut SeededRandom) {
    let pot = &PALETTES.pot;
    let cx = CANVAS_WIDTH as f64 / 2.0;
    let pot_height = s(12.0);
    let y_bottom = CANVAS_HEIGHT as i32 - s(3.0);
    let y_top = y_bottom - pot_height;
    let half_top = s(18.0) as f64 / 2.0;
    let half_bot = s(12.0) as f64 / 2.0;
    let rim_h = s(2.0);
    let rim_w = half_top + s(1.0) as f64;

    // Body
    for i in 0..=pot_height {
        let t = i as f64 / pot_height as f64;
        let hw = half_top - t * (half_top - half_bot);
        span(ren, cx, hw, (y_top + i) as f64, &pot.main);
    }

    // Soil strip
    let soil_hw = half_top - s(1.0) as f64;
    for row in 0..s(1.0) {
        span(ren, cx, soil_hw, (y_top + row) as f64, &pot.soil);
    }

    // Rim, top row in the rim tone
    for ry in 0..rim_h {
        let color = if ry == 0 { &pot.rim } else { &pot.main };
        span(ren, cx, rim_w, (y_top - ry) as f64, color);
    }
}

/// Half-open horizontal run `[cx - hw, cx + hw)` stepped one pixel at a time.
fn span<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    cx: f64,
    hw: f64,
    y: f64,
    color: &Rgba8,
) {
    let mut dx = -hw;
    while dx < hw {
        ren.set_pixel(cx + dx, y, color);
        dx += 1.0;
    }
}
