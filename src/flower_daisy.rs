//! Daisy: many thin petals around a large freckled disc.

use crate::basics::{iround, round_half_up, s, PI};
use crate::palette::{flower_center_palette, PALETTES, SEED_BROWN};
use crate::phenotype::Phenotype;
use crate::pixfmt_rgba::PixelFormat;
use crate::random::SeededRandom;
use crate::renderer_base::RendererBase;
use crate::shaded_shapes::{shaded_circle, shaded_ellipse, ShapeOptions};
use crate::skeleton::Skeleton;
use crate::wind::WindForce;

/// Draw a daisy at the apex.
pub fn draw_daisy<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    phenotype: &Phenotype,
    skeleton: &Skeleton,
    wind: WindForce,
) {
    let (cx, cy) = (skeleton.apex_x(), skeleton.apex_y());
    let scale = phenotype.flower_scale();

    let petal_count = rng.range(12, 18);
    let petal_len = iround(rng.range(s(8.0), s(12.0)) as f64 * scale) as f64;
    let petal_width = iround(rng.range(s(2.0), s(3.0)) as f64 * scale) as f64;
    let rot_off = rng.float(0.0, PI) + wind.rotation();

    for i in 0..petal_count {
        let angle = rot_off + i as f64 / petal_count as f64 * PI * 2.0;
        let px = cx + angle.cos() * (petal_len * 0.6);
        let py = cy + angle.sin() * (petal_len * 0.6);
        let color = if i % 2 == 0 {
            phenotype.flower_color
        } else {
            phenotype.flower_color_secondary
        };
        let pal = PALETTES.flower(color);
        let opts = ShapeOptions::patterned(phenotype.flower_pattern, pal.highlight);
        shaded_ellipse(ren, px, py, petal_len / 2.0, petal_width, angle, pal, &opts);
    }

    let center_r = s(4.0).max(iround(s(5.0) as f64 * scale));
    let cp = flower_center_palette(phenotype.flower_color);
    shaded_circle(ren, cx, cy, center_r as f64, &cp);

    // Freckles inside the disc
    for _ in 0..center_r * 3 {
        let angle = rng.float(0.0, PI * 2.0);
        let dist = rng.float(1.0, (center_r - 1) as f64);
        let fx = round_half_up(cx + angle.cos() * dist);
        let fy = round_half_up(cy + angle.sin() * dist);
        let color = if rng.bool(0.5) { cp.dark } else { SEED_BROWN };
        ren.set_pixel(fx, fy, &color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phenotype::{FlowerColor, FlowerSize};
    use crate::rendering_buffer::RenderingBuffer;
    use crate::skeleton::SkeletonBuilder;

    fn render(p: &Phenotype) -> RenderingBuffer {
        let mut b = SkeletonBuilder::new();
        b.set_apex(96.0, 84.0);
        let sk = b.finish();
        let mut buf = RenderingBuffer::canvas();
        draw_daisy(
            &mut RendererBase::new(&mut buf),
            &mut SeededRandom::new("daisy"),
            p,
            &sk,
            WindForce::CALM,
        );
        buf
    }

    #[test]
    fn test_freckles_stay_in_the_disc() {
        let buf = render(&Phenotype::DEFAULT);
        // center_r = max(12, round(15 * 0.7)) = 12
        let freckles: Vec<_> = buf
            .painted_pixels()
            .filter(|&(_, _, c)| c == SEED_BROWN)
            .collect();
        assert!(!freckles.is_empty());
        for (x, y, _) in freckles {
            let (dx, dy) = (x as f64 - 96.0, y as f64 - 84.0);
            assert!((dx * dx + dy * dy).sqrt() <= 12.0);
        }
    }

    #[test]
    fn test_yellow_gets_orange_center() {
        let yellow = Phenotype {
            flower_color: FlowerColor::Yellow,
            flower_size: FlowerSize::Large,
            ..Phenotype::DEFAULT
        };
        let buf = render(&yellow);
        let cp = flower_center_palette(FlowerColor::Yellow);
        let center_tones = [cp.main, cp.dark, SEED_BROWN];
        // the disc interior is only center tones and freckles
        for (dx, dy) in [(0, 0), (3, 0), (0, 3), (-2, -2)] {
            let c = buf.get((96 + dx) as u32, (84 + dy) as u32);
            assert!(
                center_tones.contains(&c)
                    || c == cp.main.blend(&cp.light, 0.35)
                    || c == cp.main.blend(&cp.dark, 0.35),
                "unexpected {} at offset ({}, {})",
                c,
                dx,
                dy
            );
        }
    }
}
