//! Bell: a hanging shape, narrow at the apex and flaring below it.

use crate::basics::{iround, s, LIGHT_DIR, PI};
use crate::palette::{stamen_tip_palette, PALETTES};
use crate::phenotype::{FlowerSex, Phenotype};
use crate::pixfmt_rgba::PixelFormat;
use crate::random::SeededRandom;
use crate::renderer_base::RendererBase;
use crate::shaded_shapes::{shaded_circle, shaded_ellipse, ShapeOptions};
use crate::shading::{dither_mask, shade_color};
use crate::skeleton::Skeleton;
use crate::wind::WindForce;

/// Draw a bell hanging below the apex.
pub fn draw_bell<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    phenotype: &Phenotype,
    skeleton: &Skeleton,
    wind: WindForce,
) {
    let (cx, cy) = (skeleton.apex_x(), skeleton.apex_y());
    let scale = phenotype.flower_scale();
    let wind_off = wind.rotation();

    let bell_h = iround(rng.range(s(12.0), s(18.0)) as f64 * scale);
    let top_w = iround(rng.range(s(2.0), s(4.0)) as f64 * scale);
    let bot_w = iround(rng.range(s(8.0), s(12.0)) as f64 * scale);
    let primary = PALETTES.flower(phenotype.flower_color);
    let secondary = PALETTES.flower(phenotype.flower_color_secondary);
    let band = s(2.0);

    for row in 0..bell_h {
        let t = row as f64 / bell_h as f64;
        let hw = iround(top_w as f64 + (bot_w - top_w) as f64 * t.sqrt());
        let row_y = cy + row as f64;
        let row_wind_x = wind_off * row as f64 * 0.2;
        let pal = if (row / band) % 2 == 0 { primary } else { secondary };
        for dx in -hw..=hw {
            let nx = if hw > 0 { dx as f64 / hw as f64 } else { 0.0 };
            let dot = -(nx * LIGHT_DIR.x + (t - 0.5) * LIGHT_DIR.y);
            let d = dither_mask(cx + dx as f64, row_y);
            ren.set_pixel(cx + dx as f64 + row_wind_x, row_y, &shade_color(dot, d, pal));
        }
    }

    // Drooping petal tips along the rim
    let tip_count = rng.range(4, 6);
    let bot_wind_x = wind_off * bell_h as f64 * 0.2;
    let rim_y = cy + bell_h as f64;
    let tip_r = iround(s(2.0) as f64 * scale) as f64;
    for i in 0..tip_count {
        let t = (i as f64 + 0.5) / tip_count as f64;
        let tx = cx + (t - 0.5) * bot_w as f64 * 2.0 + bot_wind_x;
        shaded_ellipse(
            ren,
            tx,
            rim_y + tip_r * 0.5,
            tip_r,
            iround(tip_r * 1.5) as f64,
            PI / 2.0 + (t - 0.5) * 0.3,
            primary,
            &ShapeOptions::default(),
        );
    }

    if phenotype.sex == FlowerSex::Female {
        return;
    }
    let tip = stamen_tip_palette();
    let stamen_r = s(1.0).max(1) as f64;
    let count = rng.range(2, 4);
    for i in 0..count {
        let t = (i as f64 + 0.5) / count as f64;
        let sx = cx + (t - 0.5) * bot_w as f64 * 0.7 + bot_wind_x;
        let len = rng.range(s(3.0), s(6.0)) as f64;
        let sy = rim_y + len;
        ren.line(sx, rim_y, sx, sy, &PALETTES.stamens.stem);
        shaded_circle(ren, sx, sy, stamen_r, &tip);
    }
}
