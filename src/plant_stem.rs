//! Stem renderer.
//!
//! Walks scanlines from the soil line up to the apex. Each row sways on a
//! sine wave whose frequency and phase are drawn once per render, plus a
//! wind offset that grows with height. Rows near a precomputed node height
//! swell by one pixel, and the first row at or above each node height is
//! recorded into the skeleton.

use log::trace;

use crate::basics::{round_half_up, s, CANVAS_HEIGHT, CANVAS_WIDTH, PI};
use crate::palette::PALETTES;
use crate::phenotype::{Phenotype, StemThickness, StemTexture};
use crate::pixfmt_rgba::PixelFormat;
use crate::random::SeededRandom;
use crate::renderer_base::RendererBase;
use crate::skeleton::{SkeletonBuilder, StemNode};
use crate::wind::WindForce;

/// Fixed stem anchors in canvas pixels: (x, bottom y, top y).
pub fn stem_anchors() -> (f64, i32, i32) {
    let start_x = CANVAS_WIDTH as f64 / 2.0;
    let start_y = CANVAS_HEIGHT as i32 - s(16.0);
    let end_y = s(28.0);
    (start_x, start_y, end_y)
}

/// Draw the stem and fill `skeleton` with its nodes and apex.
pub fn draw_stem<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    phenotype: &Phenotype,
    skeleton: &mut SkeletonBuilder,
    wind: WindForce,
) {
    let (start_x, start_y, end_y) = stem_anchors();
    let is_vine = phenotype.is_vine();
    let is_thick = phenotype.stem_thickness == StemThickness::Thick;
    let is_hairy = phenotype.stem_texture == StemTexture::Hairy;
    let palette = PALETTES.foliage(phenotype.foliage_color);

    let curve_freq = rng.float(0.03, 0.06);
    let curve_amp = if is_vine {
        rng.range(s(6.0), s(10.0))
    } else {
        rng.range(s(1.0), s(3.0))
    } as f64;
    let phase = rng.float(0.0, PI * 2.0);
    let node_count = rng.range(4, 7);
    let span = (start_y - end_y) as f64;
    let node_interval = span / node_count as f64;
    let (base_half, tip_half) = if is_thick {
        (s(4.0), s(2.0))
    } else {
        (s(2.0), s(1.0))
    };
    let max_wind_sway = if is_vine { s(2.0) } else { s(1.0) } as f64;

    let node_ys: Vec<f64> = (1..=node_count)
        .map(|i| round_half_up(start_y as f64 - i as f64 * node_interval))
        .collect();

    let mut current_x = start_x;
    let mut next_node = 0;
    let mut y = start_y;
    while y >= end_y {
        let yf = y as f64;
        let progress = 1.0 - (yf - end_y as f64) / span;
        let wave = (yf * curve_freq + phase).sin();
        let amp = if is_vine {
            curve_amp * progress.sqrt()
        } else {
            curve_amp * progress
        };
        let wind_offset = round_half_up(wind.as_f64() * max_wind_sway * progress);
        let x = start_x + wave * amp + wind_offset;
        let half_width =
            round_half_up(base_half as f64 + (tip_half - base_half) as f64 * progress) as i32;
        let near_node = node_ys.iter().any(|ny| (ny - yf).abs() <= 1.0);
        let hw = if near_node { half_width + 1 } else { half_width };

        for dx in -hw..=hw {
            let color = if dx.abs() == hw {
                &palette.dark
            } else {
                &palette.main
            };
            ren.set_pixel(x + dx as f64, yf, color);
        }

        if is_hairy && rng.bool(0.12) {
            let side = if rng.bool(0.5) { -1 } else { 1 };
            // The hair length bound is redrawn on every check.
            let mut h = 1;
            while h <= rng.range(2, 4) {
                ren.set_pixel(x + ((hw + h) * side) as f64, (y - h) as f64, &palette.light);
                h += 1;
            }
        }

        if next_node < node_ys.len() && yf <= node_ys[next_node] {
            let prev_x = start_x + ((yf + 1.0) * curve_freq + phase).sin() * amp + wind_offset;
            let node = StemNode {
                x,
                y: yf,
                angle: (-1.0f64).atan2(x - prev_x),
                half_width: hw,
            };
            trace!("stem node {} at ({:.2}, {})", next_node, node.x, y);
            skeleton.push_node(node);
            next_node += 1;
        }
        current_x = x;
        y -= 1;
    }
    skeleton.set_apex(current_x, end_y as f64);
}

// ============================================================================
// Tests
// ============================================================================
