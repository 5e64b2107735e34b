//! Plant orchestrator.
//!
//! One call renders one plant. The draw order is fixed and is the only
//! layering mechanism: later layers overwrite earlier pixels, there is no
//! depth buffer and no alpha compositing.
//!
//! | # | Layer    | Drawn when            | Reads            |
//! |---|----------|-----------------------|------------------|
//! | 1 | stem     | always                | builds skeleton  |
//! | 2 | pot      | always                | -                |
//! | 3 | tendrils | stem is a vine        | nodes            |
//! | 4 | leaves   | always                | nodes            |
//! | 5 | thorns   | `thorns` flag         | nodes            |
//! | 6 | fruit    | `fruit` flag          | nodes            |
//! | 7 | flower   | always                | apex             |
//! | 8 | glow     | `glow` flag           | apex, nodes      |
//!
//! Every layer gets its own stream from [`RandomStreams`], so skipping or
//! adding a layer never changes the pixels of another.

use std::time::{Duration, Instant};

use log::debug;

use crate::color::Rgba8;
use crate::flower::draw_flower;
use crate::phenotype::{Background, Phenotype};
use crate::pixfmt_rgba::PixelFormat;
use crate::plant_accessories::{draw_fruits, draw_glow, draw_thorns};
use crate::plant_leaves::{draw_leaves, draw_tendrils};
use crate::plant_pot::draw_pot;
use crate::plant_stem::draw_stem;
use crate::random::{Component, RandomStreams};
use crate::renderer_base::RendererBase;
use crate::skeleton::SkeletonBuilder;
use crate::wind::WindForce;

/// Fill for the white background mode.
pub const BACKGROUND_WHITE: Rgba8 = Rgba8::hex(0xffffff);
/// Fill for the dark background mode.
pub const BACKGROUND_DARK: Rgba8 = Rgba8::hex(0x1a1a1d);

impl Background {
    /// Canvas fill, or `None` for a transparent canvas.
    pub fn fill_color(&self) -> Option<Rgba8> {
        match self {
            Background::Transparent => None,
            Background::White => Some(BACKGROUND_WHITE),
            Background::Dark => Some(BACKGROUND_DARK),
        }
    }
}

/// Informational result of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Wall time spent inside [`generate_plant`].
    pub elapsed: Duration,
    /// Layers drawn, in draw order.
    pub layers: Vec<Component>,
    /// Nodes recorded by the stem.
    pub node_count: usize,
}

/// Layers drawn after the stem, in draw order. Each reads the frozen
/// skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkeletonLayer {
    Pot,
    Tendrils,
    Leaves,
    Thorns,
    Fruit,
    Flower,
    Glow,
}

impl SkeletonLayer {
    const ALL: [SkeletonLayer; 7] = [
        SkeletonLayer::Pot,
        SkeletonLayer::Tendrils,
        SkeletonLayer::Leaves,
        SkeletonLayer::Thorns,
        SkeletonLayer::Fruit,
        SkeletonLayer::Flower,
        SkeletonLayer::Glow,
    ];

    fn component(self) -> Component {
        match self {
            SkeletonLayer::Pot => Component::Pot,
            SkeletonLayer::Tendrils => Component::Tendrils,
            SkeletonLayer::Leaves => Component::Leaves,
            SkeletonLayer::Thorns => Component::Thorns,
            SkeletonLayer::Fruit => Component::Fruit,
            SkeletonLayer::Flower => Component::Flower,
            SkeletonLayer::Glow => Component::Glow,
        }
    }
}

/// Whether `component` is drawn for `phenotype`.
pub fn layer_enabled(component: Component, phenotype: &Phenotype) -> bool {
    match component {
        Component::Stem | Component::Pot | Component::Leaves | Component::Flower => true,
        Component::Tendrils => phenotype.is_vine(),
        Component::Thorns => phenotype.thorns,
        Component::Fruit => phenotype.fruit,
        Component::Glow => phenotype.glow,
    }
}

/// Render one plant into `target`.
///
/// The target is cleared to transparent, filled with the background, and
/// then every enabled layer is drawn in order. Output depends only on
/// `phenotype`, `seed`, `frame mod 4`, and `background`.
pub fn generate_plant<PF: PixelFormat + ?Sized>(
    target: &mut PF,
    phenotype: &Phenotype,
    seed: &str,
    frame: i64,
    background: Background,
) -> RenderReport {
    let start = Instant::now();
    let mut ren = RendererBase::new(target);
    ren.clear(&Rgba8::TRANSPARENT);
    if let Some(fill) = background.fill_color() {
        ren.clear(&fill);
    }

    let streams = RandomStreams::new(seed);
    let wind = WindForce::from_frame(frame);
    let mut layers = Vec::with_capacity(Component::DRAW_ORDER.len());
    debug!(
        "generating plant seed={:?} frame={} wind={} bg={}",
        seed,
        frame,
        wind.value(),
        background
    );

    // The stem is the only writer of the skeleton; everything after reads it.
    let mut builder = SkeletonBuilder::new();
    draw_stem(&mut ren, &mut streams.stream(Component::Stem), phenotype, &mut builder, wind);
    layers.push(Component::Stem);
    let skeleton = builder.finish();
    debug!("layer stem: {} nodes", skeleton.len());

    for layer in SkeletonLayer::ALL {
        let component = layer.component();
        if !layer_enabled(component, phenotype) {
            continue;
        }
        let mut rng = streams.stream(component);
        match layer {
            SkeletonLayer::Pot => draw_pot(&mut ren, &mut rng),
            SkeletonLayer::Tendrils => draw_tendrils(&mut ren, &mut rng, phenotype, &skeleton),
            SkeletonLayer::Leaves => draw_leaves(&mut ren, &mut rng, phenotype, &skeleton, wind),
            SkeletonLayer::Thorns => draw_thorns(&mut ren, &mut rng, &skeleton),
            SkeletonLayer::Fruit => draw_fruits(&mut ren, &mut rng, phenotype, &skeleton),
            SkeletonLayer::Flower => draw_flower(&mut ren, &mut rng, phenotype, &skeleton, wind),
            SkeletonLayer::Glow => draw_glow(&mut ren, &mut rng, &skeleton),
        }
        debug!("layer {}", component);
        layers.push(component);
    }

    let elapsed = start.elapsed();
    debug!("plant rendered in {:.2} ms", elapsed.as_secs_f64() * 1000.0);
    RenderReport {
        elapsed,
        layers,
        node_count: skeleton.len(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phenotype::StemShape;
    use crate::rendering_buffer::RenderingBuffer;

    fn render(p: &Phenotype, seed: &str, frame: i64, bg: Background) -> (RenderingBuffer, RenderReport) {
        let mut buf = RenderingBuffer::canvas();
        let report = generate_plant(&mut buf, p, seed, frame, bg);
        (buf, report)
    }

    #[test]
    fn test_default_layers() {
        let (_, report) = render(&Phenotype::DEFAULT, "test-seed", 0, Background::Transparent);
        assert_eq!(
            report.layers,
            vec![Component::Stem, Component::Pot, Component::Leaves, Component::Flower]
        );
        assert!((4..=7).contains(&report.node_count));
    }

    #[test]
    fn test_all_layers_in_order() {
        let p = Phenotype {
            stem: StemShape::Vine,
            thorns: true,
            fruit: true,
            glow: true,
            ..Phenotype::DEFAULT
        };
        let (_, report) = render(&p, "all", 2, Background::Dark);
        assert_eq!(report.layers, Component::DRAW_ORDER.to_vec());
    }

    #[test]
    fn test_layers_follow_stem_in_draw_order() {
        let mut order = vec![Component::Stem];
        order.extend(SkeletonLayer::ALL.iter().map(|l| l.component()));
        assert_eq!(order, Component::DRAW_ORDER.to_vec());
    }

    #[test]
    fn test_backgrounds() {
        let (t, _) = render(&Phenotype::DEFAULT, "bg", 0, Background::Transparent);
        let (w, _) = render(&Phenotype::DEFAULT, "bg", 0, Background::White);
        let (d, _) = render(&Phenotype::DEFAULT, "bg", 0, Background::Dark);
        assert!(t.get(0, 0).is_transparent());
        assert_eq!(w.get(0, 0), BACKGROUND_WHITE);
        assert_eq!(d.get(0, 0), BACKGROUND_DARK);
        assert_eq!(d.get(191, 287), BACKGROUND_DARK);
    }

    #[test]
    fn test_rerender_clears_previous_plant() {
        let mut buf = RenderingBuffer::canvas();
        generate_plant(&mut buf, &Phenotype::DEFAULT, "first", 0, Background::White);
        generate_plant(&mut buf, &Phenotype::DEFAULT, "second", 0, Background::Transparent);
        let (fresh, _) = render(&Phenotype::DEFAULT, "second", 0, Background::Transparent);
        assert_eq!(buf, fresh);
    }

    #[test]
    fn test_deterministic() {
        let (a, _) = render(&Phenotype::DEFAULT, "test-seed", 0, Background::Transparent);
        let (b, _) = render(&Phenotype::DEFAULT, "test-seed", 0, Background::Transparent);
        assert_eq!(a, b);
        assert!(!a.signature().is_empty());
    }

    #[test]
    fn test_frame_only_matters_mod_four() {
        let (a, _) = render(&Phenotype::DEFAULT, "cycle", 1, Background::White);
        let (b, _) = render(&Phenotype::DEFAULT, "cycle", 5, Background::White);
        let (c, _) = render(&Phenotype::DEFAULT, "cycle", -3, Background::White);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}
