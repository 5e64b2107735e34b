//! Optional accessories: thorns, fruit, and glow sparkles.

use log::trace;

use crate::basics::{round_half_up, s, CANVAS_HEIGHT, CANVAS_WIDTH, PI};
use crate::palette::PALETTES;
use crate::phenotype::{FruitShape, Phenotype};
use crate::pixfmt_rgba::PixelFormat;
use crate::random::SeededRandom;
use crate::renderer_base::RendererBase;
use crate::shaded_shapes::{shaded_circle, shaded_ellipse, ShapeOptions};
use crate::skeleton::Skeleton;

// ============================================================================
// Thorns
// ============================================================================

/// One spike per node, perpendicular to the stem on alternating sides.
pub fn draw_thorns<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    skeleton: &Skeleton,
) {
    let thorns = &PALETTES.thorns;
    for (index, node) in skeleton.nodes().iter().enumerate() {
        let side = if index % 2 == 0 { 1.0 } else { -1.0 };
        let angle = node.angle + side * PI / 2.0;
        let (sin_a, cos_a) = angle.sin_cos();
        let len = rng.range(s(3.0), s(5.0)) as f64;

        ren.line(node.x, node.y, node.x + cos_a * len, node.y + sin_a * len, &thorns.main);
        ren.line(
            node.x,
            node.y + 1.0,
            node.x + cos_a * (len * 0.6),
            node.y + 1.0 + sin_a * (len * 0.6),
            &thorns.dark,
        );
        ren.set_pixel(node.x + cos_a * 2.0, node.y + sin_a * 2.0 - 1.0, &thorns.highlight);
    }
}

// ============================================================================
// Fruit
// ============================================================================

/// Fruit hanging off roughly half of the nodes.
///
/// The fruit palette is drawn once, so every fruit on a plant matches.
pub fn draw_fruits<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    phenotype: &Phenotype,
    skeleton: &Skeleton,
) {
    let fruit = *rng.pick(&PALETTES.fruits);
    let stalk = PALETTES.foliage(phenotype.foliage_color).dark;
    let offsets = [-s(5.0), s(5.0)];

    for node in skeleton.nodes() {
        if !rng.bool(0.55) {
            continue;
        }
        let r = rng.range(s(2.0), s(4.0)) as f64;
        let off_x = *rng.pick(&offsets) as f64;
        let off_y = rng.range(s(1.0), s(5.0)) as f64;

        ren.line(node.x, node.y, node.x + off_x * 0.6, node.y + off_y * 0.7, &stalk);
        let fx = node.x + off_x;
        let fy = node.y + off_y + s(1.0) as f64;
        match phenotype.fruit_shape {
            FruitShape::Oval => shaded_ellipse(
                ren,
                fx,
                fy,
                r,
                round_half_up(r * 1.4),
                0.0,
                &fruit,
                &ShapeOptions::default(),
            ),
            FruitShape::Round => shaded_circle(ren, fx, fy, r, &fruit),
        }
        ren.set_pixel(fx - 1.0, fy - 1.0, &fruit.highlight);
        trace!("fruit at ({:.1}, {:.1}) r={}", fx, fy, r);
    }
}

// ============================================================================
// Glow
// ============================================================================

/// Open-interval canvas test used by sparkles: the outer frame stays dark.
fn inside_open(x: f64, y: f64) -> bool {
    x > 0.0 && x < CANVAS_WIDTH as f64 && y > 0.0 && y < CANVAS_HEIGHT as f64
}

/// Sparkles in a ring around the apex plus a few next to stem nodes.
pub fn draw_glow<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    skeleton: &Skeleton,
) {
    let tones = PALETTES.glow.tones();

    // The sparkle count bound is redrawn on every check.
    let mut i = 0;
    while i < rng.range(12, 20) {
        let angle = rng.float(0.0, PI * 2.0);
        let dist = rng.range(s(6.0), s(16.0)) as f64;
        let x = round_half_up(skeleton.apex_x() + angle.cos() * dist);
        let y = round_half_up(skeleton.apex_y() + angle.sin() * dist);
        if inside_open(x, y) {
            let color = *rng.pick(&tones);
            ren.set_pixel(x, y, &color);
            if rng.bool(0.3) {
                ren.set_pixel(x + 1.0, y, &color);
                ren.set_pixel(x, y + 1.0, &color);
            }
        }
        i += 1;
    }

    for node in skeleton.nodes() {
        if !rng.bool(0.45) {
            continue;
        }
        let dir = *rng.pick(&[-1.0, 1.0]);
        let gx = round_half_up(node.x + dir * rng.range(s(3.0), s(7.0)) as f64);
        let gy = round_half_up(node.y + rng.range(-s(3.0), s(3.0)) as f64);
        if inside_open(gx, gy) {
            let color = *rng.pick(&tones);
            ren.set_pixel(gx, gy, &color);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
