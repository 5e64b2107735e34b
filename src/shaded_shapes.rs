//! Shaded filled shapes: disc, rotated ellipse, rotated rhombus.
//!
//! Each shape scans an axis-aligned box around its center, maps every offset
//! into the shape's own rotated frame, tests membership, and colors the
//! pixel through the shading model. Ellipses and rhombi can carry a petal
//! pattern; ellipses can also be serrated or outlined.
//!
//! Scan order is x outer, y inner, from `-max_r` to `max_r` inclusive where
//! `max_r = max(rx, ry) + 1`. `max_r` may be fractional; offsets keep its
//! fraction and are snapped only when the pixel is written.

use crate::basics::round_half_up;
use crate::color::Rgba8;
use crate::palette::ColorPalette;
use crate::phenotype::FlowerPattern;
use crate::pixfmt_rgba::PixelFormat;
use crate::renderer_base::RendererBase;
use crate::shading::{dither_mask, light_dot, shade_color};

/// Boundary distance beyond which the outline tone is drawn.
const OUTLINE_THRESHOLD: f64 = 0.85;
/// Depth of the serrated edge as a fraction of the boundary.
const SERRATION_DEPTH: f64 = 0.18;
/// Teeth per half turn of the serrated edge.
const SERRATION_FREQ: f64 = 7.0;

/// Optional overrides for shaded ellipses and rhombi.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeOptions {
    /// Jagged boundary (ellipse only).
    pub serrated: bool,
    pub pattern: Option<FlowerPattern>,
    /// Pattern tone; the palette's `light` when `None`.
    pub pattern_color: Option<Rgba8>,
    /// Draw the palette's shadow (or dark) tone near the boundary (ellipse only).
    pub outline: bool,
}

impl ShapeOptions {
    pub fn serrated(serrated: bool) -> Self {
        Self {
            serrated,
            ..Self::default()
        }
    }

    pub fn patterned(pattern: FlowerPattern, pattern_color: Rgba8) -> Self {
        Self {
            pattern: Some(pattern),
            pattern_color: Some(pattern_color),
            ..Self::default()
        }
    }
}

/// Pattern override for a point at local offset (dx, dy), if any.
fn pattern_override(
    pattern: Option<FlowerPattern>,
    dx: f64,
    dy: f64,
    color: Option<Rgba8>,
    palette: &ColorPalette,
) -> Option<Rgba8> {
    let hit = match pattern {
        Some(FlowerPattern::Stripes) => round_half_up(dx).abs() % 8.0 < 2.0,
        Some(FlowerPattern::Dots) => round_half_up(dx * dx + dy * dy) % 11.0 == 0.0,
        Some(FlowerPattern::Plain) | None => false,
    };
    hit.then(|| color.unwrap_or(palette.light))
}

/// Shaded filled disc of radius `floor(r)` around the snapped center.
pub fn shaded_circle<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    xc: f64,
    yc: f64,
    r: f64,
    palette: &ColorPalette,
) {
    let xc = round_half_up(xc) as i32;
    let yc = round_half_up(yc) as i32;
    let r = r.floor() as i32;
    let rf = r as f64;
    for y in -r..=r {
        for x in -r..=r {
            if x * x + y * y > r * r {
                continue;
            }
            // r == 0 gives NaN normals, which shade to `main`.
            let dot = light_dot(x as f64 / rf, y as f64 / rf);
            let d = ((xc + x).abs() + (yc + y).abs()) % 2 == 0;
            let color = shade_color(dot, d, palette);
            ren.copy_pixel(xc + x, yc + y, &color);
        }
    }
}

/// Shaded ellipse with radii `rx` (along `angle`) and `ry`, centered at (xc, yc).
#[allow(clippy::too_many_arguments)]
pub fn shaded_ellipse<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    xc: f64,
    yc: f64,
    rx: f64,
    ry: f64,
    angle: f64,
    palette: &ColorPalette,
    opts: &ShapeOptions,
) {
    let max_r = rx.max(ry) + 1.0;
    let (sin_a, cos_a) = angle.sin_cos();
    let mut x = -max_r;
    while x <= max_r {
        let mut y = -max_r;
        while y <= max_r {
            let dx = x * cos_a + y * sin_a;
            let dy = y * cos_a - x * sin_a;
            let dist = (dx * dx) / (rx * rx) + (dy * dy) / (ry * ry);
            let limit = if opts.serrated {
                let theta = dy.atan2(dx);
                1.0 - SERRATION_DEPTH * (theta * SERRATION_FREQ).sin().abs()
            } else {
                1.0
            };
            if dist <= limit {
                let color = if opts.outline && dist > OUTLINE_THRESHOLD {
                    palette.shadow_or_dark()
                } else {
                    let dot = light_dot(dx / rx, dy / ry);
                    let d = dither_mask(xc + x, yc + y);
                    pattern_override(opts.pattern, dx, dy, opts.pattern_color, palette)
                        .unwrap_or_else(|| shade_color(dot, d, palette))
                };
                ren.set_pixel(xc + x, yc + y, &color);
            }
            y += 1.0;
        }
        x += 1.0;
    }
}

/// Shaded diamond `|dx/rx| + |dy/ry| <= 1`, rotated by `angle`.
///
/// Only the pattern fields of `opts` apply.
#[allow(clippy::too_many_arguments)]
pub fn shaded_rhombus<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    xc: f64,
    yc: f64,
    rx: f64,
    ry: f64,
    angle: f64,
    palette: &ColorPalette,
    opts: &ShapeOptions,
) {
    let max_r = rx.max(ry) + 1.0;
    let (sin_a, cos_a) = angle.sin_cos();
    let mut x = -max_r;
    while x <= max_r {
        let mut y = -max_r;
        while y <= max_r {
            let dx = x * cos_a + y * sin_a;
            let dy = y * cos_a - x * sin_a;
            if (dx / rx).abs() + (dy / ry).abs() <= 1.0 {
                let dot = light_dot(dx / rx, dy / ry);
                let d = dither_mask(xc + x, yc + y);
                let color = pattern_override(opts.pattern, dx, dy, opts.pattern_color, palette)
                    .unwrap_or_else(|| shade_color(dot, d, palette));
                ren.set_pixel(xc + x, yc + y, &color);
            }
            y += 1.0;
        }
        x += 1.0;
    }
}

// ============================================================================
// Tests
// ============================================================================
