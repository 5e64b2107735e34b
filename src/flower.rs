//! Flower dispatch and the parts shared by the radial variants.
//!
//! Exactly one variant is drawn per render, anchored at the skeleton apex.
//! Variants share no state; each is a plain function of the raster, its
//! stream, the phenotype, the skeleton, and the wind.

use log::debug;

use crate::basics::{iround, s, PI};
use crate::palette::{
    flower_center_palette, stamen_tip_palette, ANTHER_PALETTE, PALETTES, SEED_BROWN,
};
use crate::phenotype::{FlowerSex, FlowerShape, Phenotype};
use crate::pixfmt_rgba::PixelFormat;
use crate::random::SeededRandom;
use crate::renderer_base::RendererBase;
use crate::shaded_shapes::shaded_circle;
use crate::skeleton::Skeleton;
use crate::wind::WindForce;
use crate::{flower_bell, flower_daisy, flower_radial, flower_tulip};

/// The four flower algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowerVariant {
    /// Petals around a center disc; rhombus petals when `pointy`.
    Radial { pointy: bool },
    Tulip,
    Bell,
    Daisy,
}

impl FlowerVariant {
    pub fn from_shape(shape: FlowerShape) -> Self {
        match shape {
            FlowerShape::Round => FlowerVariant::Radial { pointy: false },
            FlowerShape::Pointy => FlowerVariant::Radial { pointy: true },
            FlowerShape::Tulip => FlowerVariant::Tulip,
            FlowerShape::Bell => FlowerVariant::Bell,
            FlowerShape::Daisy => FlowerVariant::Daisy,
        }
    }
}

/// Draw the phenotype's flower at the apex.
pub fn draw_flower<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    phenotype: &Phenotype,
    skeleton: &Skeleton,
    wind: WindForce,
) {
    let variant = FlowerVariant::from_shape(phenotype.flower_shape);
    debug!(
        "flower {:?} at ({:.1}, {:.1})",
        variant,
        skeleton.apex_x(),
        skeleton.apex_y()
    );
    match variant {
        FlowerVariant::Radial { pointy } => {
            flower_radial::draw_radial(ren, rng, phenotype, skeleton, wind, pointy)
        }
        FlowerVariant::Tulip => flower_tulip::draw_tulip(ren, rng, phenotype, skeleton, wind),
        FlowerVariant::Bell => flower_bell::draw_bell(ren, rng, phenotype, skeleton, wind),
        FlowerVariant::Daisy => flower_daisy::draw_daisy(ren, rng, phenotype, skeleton, wind),
    }
}

/// Center disc of a radial flower.
///
/// Male flowers get a smaller neutral anther disc with no pip.
pub fn draw_center<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    cx: f64,
    cy: f64,
    center_r: i32,
    phenotype: &Phenotype,
) {
    if phenotype.sex == FlowerSex::Male {
        let r = s(2.0).max(center_r - 2);
        shaded_circle(ren, cx, cy, r as f64, &ANTHER_PALETTE);
    } else {
        let cp = flower_center_palette(phenotype.flower_color);
        shaded_circle(ren, cx, cy, center_r as f64, &cp);
        ren.set_pixel(cx, cy - 1.0, &cp.dark);
        ren.set_pixel(cx, cy, &SEED_BROWN);
    }
}

/// Radiating stamens between the petals; female flowers have none.
#[allow(clippy::too_many_arguments)]
pub fn draw_stamens<PF: PixelFormat + ?Sized>(
    ren: &mut RendererBase<'_, PF>,
    rng: &mut SeededRandom,
    cx: f64,
    cy: f64,
    center_r: i32,
    rot_off: f64,
    petal_count: i32,
    scale: f64,
    phenotype: &Phenotype,
) {
    if phenotype.sex == FlowerSex::Female {
        return;
    }
    let tip = stamen_tip_palette();
    let tip_r = s(1.0).max(1) as f64;
    let count = rng.range(4, 7);
    for i in 0..count {
        let angle = i as f64 / count as f64 * PI * 2.0 + rot_off + PI / petal_count as f64;
        let (sin_a, cos_a) = angle.sin_cos();
        let len = iround(rng.range(s(5.0), s(9.0)) as f64 * scale) as f64;
        let sx = cx + cos_a * len;
        let sy = cy + sin_a * len;
        let inner = (center_r + 1) as f64;
        ren.line(cx + cos_a * inner, cy + sin_a * inner, sx, sy, &PALETTES.stamens.stem);
        shaded_circle(ren, sx, sy, tip_r, &tip);
    }
}
