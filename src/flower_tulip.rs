//! Tulip: a three-petal cup built row by row, opening upward.

use crate::basics::{iround, s, LIGHT_DIR, PI};
use crate::palette::PALETTES;
use crate::phenotype::Phenotype;
use crate::pixfmt_rgba::PixelFormat;
use crate::random::SeededRandom;
use crate::renderer_base::RendererBase;
use crate::shaded_shapes::{shaded_ellipse, ShapeOptions};
use crate::shading::{dither_mask, shade_color};
use crate::skeleton::Skeleton;
use crate::wind::WindForce;

const PETAL_COUNT: i32 = 3;

/// Draw a tulip cup above the apex. Tulips have no stamens.
pub fn draw_tulip<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    phenotype: &Phenotype,
    skeleton: &Skeleton,
    wind: WindForce,
) {
    let (cx, cy) = (skeleton.apex_x(), skeleton.apex_y());
    let scale = phenotype.flower_scale();
    let wind_off = wind.rotation();

    let cup_h = iround(rng.range(s(14.0), s(20.0)) as f64 * scale);
    let cup_bot_w = iround(rng.range(s(3.0), s(5.0)) as f64 * scale);
    let cup_top_w = iround(rng.range(s(8.0), s(11.0)) as f64 * scale);
    let primary = PALETTES.flower(phenotype.flower_color);
    let secondary = PALETTES.flower(phenotype.flower_color_secondary);

    for row in 0..cup_h {
        let t = row as f64 / cup_h as f64;
        let hw = iround(cup_bot_w as f64 + (cup_top_w - cup_bot_w) as f64 * t * t);
        let row_y = cy - row as f64;
        let row_wind_x = wind_off * row as f64 * 0.15;

        for dx in -hw..=hw {
            let nx = if hw > 0 { dx as f64 / hw as f64 } else { 0.0 };
            let dot = -(nx * LIGHT_DIR.x + (0.5 - t) * LIGHT_DIR.y);
            let d = dither_mask(cx + dx as f64, row_y);
            let petal_idx = ((nx + 1.0) / 2.0 * PETAL_COUNT as f64).floor() as i32;
            let pal = if petal_idx % 2 == 0 { primary } else { secondary };
            ren.set_pixel(cx + dx as f64 + row_wind_x, row_y, &shade_color(dot, d, pal));
        }

        // Seams between petals in the upper cup
        if t > 0.4 {
            for p in 1..PETAL_COUNT {
                let seam_x =
                    cx + (p as f64 / PETAL_COUNT as f64 - 0.5) * hw as f64 * 2.0 + row_wind_x;
                ren.set_pixel(seam_x, row_y, &primary.dark);
            }
        }
    }

    // Petal tips
    let top_wind_x = wind_off * cup_h as f64 * 0.15;
    let tip_r = iround(s(3.0) as f64 * scale) as f64;
    for i in 0..PETAL_COUNT {
        let t = (i as f64 + 0.5) / PETAL_COUNT as f64;
        let tip_x = cx + (t - 0.5) * cup_top_w as f64 * 2.0 + top_wind_x;
        let tip_y = cy - cup_h as f64;
        let pal = if i % 2 == 0 { primary } else { secondary };
        let tilt = (t - 0.5) * 0.4;
        shaded_ellipse(
            ren,
            tip_x,
            tip_y - tip_r * 0.3,
            tip_r,
            iround(tip_r * 1.3) as f64,
            -PI / 2.0 + tilt,
            pal,
            &ShapeOptions::default(),
        );
    }
}
