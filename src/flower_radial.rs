//! Radial flower: 5 to 8 petals around a center disc.

use crate::basics::{iround, s, PI};
use crate::flower::{draw_center, draw_stamens};
use crate::palette::PALETTES;
use crate::phenotype::Phenotype;
use crate::pixfmt_rgba::PixelFormat;
use crate::random::SeededRandom;
use crate::renderer_base::RendererBase;
use crate::shaded_shapes::{shaded_ellipse, shaded_rhombus, ShapeOptions};
use crate::skeleton::Skeleton;
use crate::wind::WindForce;

/// Round (ellipse petals) or pointy (rhombus petals) flower.
pub fn draw_radial<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    phenotype: &Phenotype,
    skeleton: &Skeleton,
    wind: WindForce,
    pointy: bool,
) {
    let (cx, cy) = (skeleton.apex_x(), skeleton.apex_y());
    let scale = phenotype.flower_scale();

    let petal_count = rng.range(5, 8);
    let petal_len = iround(rng.range(s(8.0), s(14.0)) as f64 * scale) as f64;
    let petal_width = iround(rng.range(s(4.0), s(7.0)) as f64 * scale) as f64;
    let rot_off = rng.float(0.0, PI) + wind.rotation();

    for i in 0..petal_count {
        let angle = rot_off + i as f64 / petal_count as f64 * PI * 2.0;
        let (sin_a, cos_a) = angle.sin_cos();
        let px = cx + cos_a * (petal_len / 1.5);
        let py = cy + sin_a * (petal_len / 1.5);
        let color = if i % 2 == 0 {
            phenotype.flower_color
        } else {
            phenotype.flower_color_secondary
        };
        let pal = PALETTES.flower(color);
        let opts = ShapeOptions::patterned(phenotype.flower_pattern, pal.highlight);
        if pointy {
            shaded_rhombus(ren, px, py, petal_len, petal_width, angle, pal, &opts);
        } else {
            shaded_ellipse(ren, px, py, petal_len, petal_width, angle, pal, &opts);
        }
        // Shadow where the petal meets the center
        ren.set_pixel(
            cx + cos_a * s(2.0) as f64,
            cy + sin_a * s(2.0) as f64,
            &pal.shadow_or_dark(),
        );
    }

    let center_r = s(3.0).max(iround(s(3.0) as f64 * scale));
    draw_center(ren, cx, cy, center_r, phenotype);
    draw_stamens(ren, rng, cx, cy, center_r, rot_off, petal_count, scale, phenotype);
}
