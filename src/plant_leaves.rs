//! Foliage renderers: leaves and vine tendrils.
//!
//! Both attach to skeleton nodes. Leaves use the lower-middle band of the
//! stem; tendrils may sprout from any node of a vine.

use log::trace;

use crate::basics::{round_half_up, s, PI};
use crate::palette::{ColorPalette, PALETTES};
use crate::phenotype::{LeafEdge, LeafShape, LeafSize, Phenotype};
use crate::pixfmt_rgba::PixelFormat;
use crate::random::SeededRandom;
use crate::renderer_base::RendererBase;
use crate::shaded_shapes::{shaded_ellipse, ShapeOptions};
use crate::skeleton::{Skeleton, StemNode};
use crate::wind::WindForce;

/// Range of skeleton index fractions that may carry a leaf.
const LEAF_BAND: (f64, f64) = (0.1, 0.55);
/// Side veins leave the midrib at this angle.
const VEIN_ANGLE: f64 = PI / 3.5;

// ============================================================================
// Leaves
// ============================================================================

/// Blade length bounds in canvas pixels for a leaf size.
pub fn leaf_length_range(size: LeafSize) -> (i32, i32) {
    match size {
        LeafSize::Small => (s(8.0), s(12.0)),
        LeafSize::Medium => (s(10.0), s(15.0)),
        LeafSize::Large => (s(14.0), s(20.0)),
    }
}

/// Nodes that receive a leaf, in attachment order.
///
/// Up to 3 leaves (4 on skeletons with six or more nodes), evenly spaced
/// through the eligible band. Fewer than two nodes yields no leaves.
pub fn leaf_nodes(skeleton: &Skeleton) -> Vec<&StemNode> {
    let nodes = skeleton.nodes();
    let count = nodes.len();
    if count < 2 {
        return Vec::new();
    }
    let leaf_count = if count >= 6 { 4 } else { 3 };
    let usable: Vec<&StemNode> = nodes
        .iter()
        .enumerate()
        .filter(|(i, _)| {
            let hr = *i as f64 / count as f64;
            (LEAF_BAND.0..=LEAF_BAND.1).contains(&hr)
        })
        .map(|(_, n)| n)
        .collect();
    if usable.is_empty() {
        return usable;
    }
    let step = (usable.len() / leaf_count).max(1);
    usable
        .into_iter()
        .step_by(step)
        .take(leaf_count)
        .collect()
}

/// Draw leaves along the stem.
pub fn draw_leaves<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    phenotype: &Phenotype,
    skeleton: &Skeleton,
    wind: WindForce,
) {
    let palette = PALETTES.foliage(phenotype.foliage_color);
    let (min_len, max_len) = leaf_length_range(phenotype.leaf_size);
    let opts = ShapeOptions::serrated(phenotype.leaf_edge == LeafEdge::Serrated);

    for (idx, node) in leaf_nodes(skeleton).into_iter().enumerate() {
        let droop = rng.float(0.08, 0.35);
        let jitter = rng.float(-0.1, 0.1);
        let angle = if idx % 2 == 0 {
            droop + jitter + wind.rotation()
        } else {
            PI - droop + jitter + wind.rotation()
        };
        let len = rng.range(min_len, max_len) as f64;
        let width = if phenotype.leaf == LeafShape::Wide {
            rng.range(s(5.0), s(8.0))
        } else {
            rng.range(s(3.0), s(5.0))
        } as f64;
        trace!("leaf {} at y={} len={} width={}", idx, node.y, len, width);
        draw_leaf(ren, node, angle, len, width, palette, &opts);
    }
}

fn draw_leaf<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    node: &StemNode,
    angle: f64,
    len: f64,
    width: f64,
    palette: &ColorPalette,
    opts: &ShapeOptions,
) {
    let (sin_a, cos_a) = angle.sin_cos();

    // Petiole
    let pet_len = round_half_up(len * 0.2);
    let pet_x = node.x + cos_a * pet_len;
    let pet_y = node.y + sin_a * pet_len;
    ren.line(node.x, node.y, pet_x, pet_y, &palette.dark);

    // Blade
    let blade_x = pet_x + cos_a * (len / 2.0);
    let blade_y = pet_y + sin_a * (len / 2.0);
    shaded_ellipse(ren, blade_x, blade_y, len / 2.0, width / 2.0, angle, palette, opts);

    // Midrib
    let tip_x = pet_x + cos_a * len;
    let tip_y = pet_y + sin_a * len;
    ren.line(pet_x, pet_y, tip_x, tip_y, &palette.dark);

    // Side veins taper away from the blade middle
    let vein_color = palette.shadow_or_dark();
    let vein_count = ((len / s(5.0) as f64).floor() as i32).max(2);
    for v in 1..=vein_count {
        let t = v as f64 / (vein_count + 1) as f64;
        let vx = pet_x + cos_a * (len * t);
        let vy = pet_y + sin_a * (len * t);
        let v_len = (width / 2.0) * (1.0 - (t - 0.5).abs() * 1.5) * 0.7;
        for side in [-1.0, 1.0] {
            let va = angle + side * VEIN_ANGLE;
            ren.line(vx, vy, vx + va.cos() * v_len, vy + va.sin() * v_len, &vein_color);
        }
    }
}

// ============================================================================
// Tendrils
// ============================================================================

/// Draw curling tendrils from stem nodes; only called for vines.
pub fn draw_tendrils<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    phenotype: &Phenotype,
    skeleton: &Skeleton,
) {
    let palette = PALETTES.foliage(phenotype.foliage_color);
    for (index, node) in skeleton.nodes().iter().enumerate() {
        if !rng.bool(0.65) {
            continue;
        }
        let side = if index % 2 == 0 { 1.0 } else { -1.0 };
        let length = rng.range(s(5.0), s(10.0));
        let (mut tx, mut ty) = (node.x, node.y);
        let mut angle = if side > 0.0 { 0.0 } else { PI };

        for i in 0..length {
            tx += angle.cos();
            ty += angle.sin();
            angle += side * 0.6;
            let color = if (i as f64) / (length as f64) < 0.3 {
                &palette.main
            } else {
                &palette.light
            };
            ren.set_pixel(tx, ty, color);
        }

        // Tighter coil at the tip
        for _ in 0..s(3.0) {
            tx += angle.cos() * 0.8;
            ty += angle.sin() * 0.8;
            angle += side * 1.2;
            ren.set_pixel(tx, ty, &palette.light);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering_buffer::RenderingBuffer;
    use crate::skeleton::SkeletonBuilder;

    fn skeleton(n: usize) -> Skeleton {
        let mut b = SkeletonBuilder::new();
        for i in 0..n {
            b.push_node(StemNode {
                x: 96.0,
                y: 220.0 - i as f64 * 20.0,
                angle: -PI / 2.0,
                half_width: 4,
            });
        }
        b.set_apex(96.0, 84.0);
        b.finish()
    }

    fn picked_ys(n: usize) -> Vec<f64> {
        let sk = skeleton(n);
        leaf_nodes(&sk).iter().map(|node| node.y).collect()
    }

    #[test]
    fn test_leaf_nodes_need_two_nodes() {
        assert!(picked_ys(0).is_empty());
        assert!(picked_ys(1).is_empty());
    }

    #[test]
    fn test_leaf_nodes_band_selection() {
        // 4 nodes: fractions 0, .25, .5, .75 -> indices 1, 2 eligible, step 1
        assert_eq!(picked_ys(4), vec![200.0, 180.0]);
        // 7 nodes: indices 1..=3 eligible, four leaves wanted, step 1
        assert_eq!(picked_ys(7), vec![200.0, 180.0, 160.0]);
        // 2 nodes: fractions 0, .5 -> index 1
        assert_eq!(picked_ys(2), vec![200.0]);
    }

    #[test]
    fn test_leaf_length_ranges() {
        assert_eq!(leaf_length_range(LeafSize::Small), (24, 36));
        assert_eq!(leaf_length_range(LeafSize::Medium), (30, 45));
        assert_eq!(leaf_length_range(LeafSize::Large), (42, 60));
    }

    #[test]
    fn test_leaves_draw_on_both_sides() {
        let sk = skeleton(6);
        let mut buf = RenderingBuffer::canvas();
        let mut rng = SeededRandom::new("leaves");
        draw_leaves(
            &mut RendererBase::new(&mut buf),
            &mut rng,
            &Phenotype::DEFAULT,
            &sk,
            WindForce::CALM,
        );
        let painted: Vec<_> = buf.painted_pixels().collect();
        assert!(painted.iter().any(|&(x, _, _)| x < 90));
        assert!(painted.iter().any(|&(x, _, _)| x > 102));
    }

    #[test]
    fn test_tendrils_consume_one_draw_per_skipped_node() {
        let sk = skeleton(5);
        let mut buf = RenderingBuffer::canvas();
        let mut rng = SeededRandom::new("tendrils");
        draw_tendrils(&mut RendererBase::new(&mut buf), &mut rng, &Phenotype::DEFAULT, &sk);

        // Replay the draws: one bool per node, plus a length when it grows.
        let mut replay = SeededRandom::new("tendrils");
        let mut grown = 0;
        for _ in 0..5 {
            if replay.bool(0.65) {
                replay.range(s(5.0), s(10.0));
                grown += 1;
            }
        }
        assert_eq!(rng, replay);
        assert_eq!(buf.painted_pixels().count() > 0, grown > 0);
    }
}
