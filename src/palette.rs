//! Static color catalog.
//!
//! Foliage and flower palettes are keyed by their color trait; pot, thorn,
//! stamen, sepal, fruit, and glow palettes are fixed. Nothing here is ever
//! mutated.

use crate::color::Rgba8;
use crate::phenotype::{FlowerColor, FoliageColor};

// ============================================================================
// Palette types
// ============================================================================

/// Four or five tone bundle used by the shading model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub highlight: Rgba8,
    pub light: Rgba8,
    pub main: Rgba8,
    pub dark: Rgba8,
    pub shadow: Option<Rgba8>,
}

impl ColorPalette {
    pub const fn new(highlight: u32, light: u32, main: u32, dark: u32) -> Self {
        Self {
            highlight: Rgba8::hex(highlight),
            light: Rgba8::hex(light),
            main: Rgba8::hex(main),
            dark: Rgba8::hex(dark),
            shadow: None,
        }
    }

    pub const fn with_shadow(self, shadow: u32) -> Self {
        Self {
            shadow: Some(Rgba8::hex(shadow)),
            ..self
        }
    }

    /// The shadow tone, or `dark` when the palette has none.
    pub fn shadow_or_dark(&self) -> Rgba8 {
        self.shadow.unwrap_or(self.dark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotPalette {
    pub highlight: Rgba8,
    pub light: Rgba8,
    pub main: Rgba8,
    pub dark: Rgba8,
    pub shadow: Rgba8,
    pub rim: Rgba8,
    pub soil: Rgba8,
    pub soil_light: Rgba8,
    pub soil_dark: Rgba8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThornPalette {
    pub highlight: Rgba8,
    pub main: Rgba8,
    pub dark: Rgba8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StamenPalette {
    pub stem: Rgba8,
    pub tip: Rgba8,
    pub tip_light: Rgba8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SepalPalette {
    pub highlight: Rgba8,
    pub light: Rgba8,
    pub main: Rgba8,
    pub dark: Rgba8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlowPalette {
    pub bright: Rgba8,
    pub mid: Rgba8,
    pub dim: Rgba8,
}

impl GlowPalette {
    pub fn tones(&self) -> [Rgba8; 3] {
        [self.bright, self.mid, self.dim]
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// The full injected color catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palettes {
    pub foliage: [ColorPalette; 4],
    pub flowers: [ColorPalette; 5],
    pub fruits: [ColorPalette; 3],
    pub pot: PotPalette,
    pub thorns: ThornPalette,
    pub stamens: StamenPalette,
    pub sepals: SepalPalette,
    pub glow: GlowPalette,
}

impl Palettes {
    pub fn foliage(&self, color: FoliageColor) -> &ColorPalette {
        match color {
            FoliageColor::Green => &self.foliage[0],
            FoliageColor::Teal => &self.foliage[1],
            FoliageColor::Autumn => &self.foliage[2],
            FoliageColor::Dark => &self.foliage[3],
        }
    }

    pub fn flower(&self, color: FlowerColor) -> &ColorPalette {
        match color {
            FlowerColor::Red => &self.flowers[0],
            FlowerColor::Blue => &self.flowers[1],
            FlowerColor::Purple => &self.flowers[2],
            FlowerColor::White => &self.flowers[3],
            FlowerColor::Yellow => &self.flowers[4],
        }
    }
}

pub static PALETTES: Palettes = Palettes {
    foliage: [
        // green
        ColorPalette::new(0xa5d6a7, 0x66bb6a, 0x43a047, 0x2e7d32).with_shadow(0x1b5e20),
        // teal
        ColorPalette::new(0x80cbc4, 0x26a69a, 0x00897b, 0x00695c).with_shadow(0x004d40),
        // autumn
        ColorPalette::new(0xffe082, 0xffb74d, 0xf57c00, 0xbf360c).with_shadow(0x870000),
        // dark
        ColorPalette::new(0x6a8f6b, 0x4a6b4c, 0x2f4f32, 0x1e3321).with_shadow(0x122015),
    ],
    flowers: [
        // red
        ColorPalette::new(0xffcdd2, 0xef5350, 0xe53935, 0xb71c1c).with_shadow(0x7f0000),
        // blue
        ColorPalette::new(0xbbdefb, 0x64b5f6, 0x1e88e5, 0x0d47a1).with_shadow(0x002171),
        // purple
        ColorPalette::new(0xe1bee7, 0xba68c8, 0x8e24aa, 0x4a148c).with_shadow(0x12005e),
        // white
        ColorPalette::new(0xffffff, 0xfafafa, 0xeeeeee, 0xbdbdbd).with_shadow(0x9e9e9e),
        // yellow
        ColorPalette::new(0xfff9c4, 0xfff176, 0xfdd835, 0xf9a825).with_shadow(0xc17900),
    ],
    fruits: [
        // cherry
        ColorPalette::new(0xffcdd2, 0xe57373, 0xd32f2f, 0x8e0000),
        // orange
        ColorPalette::new(0xffe0b2, 0xffb74d, 0xfb8c00, 0xc25e00),
        // plum
        ColorPalette::new(0xd1c4e9, 0x9575cd, 0x5e35b1, 0x280680),
    ],
    pot: PotPalette {
        highlight: Rgba8::hex(0xd7a17a),
        light: Rgba8::hex(0xc1784a),
        main: Rgba8::hex(0xa0522d),
        dark: Rgba8::hex(0x7b3f1f),
        shadow: Rgba8::hex(0x5d2f17),
        rim: Rgba8::hex(0xb86b3c),
        soil: Rgba8::hex(0x4e342e),
        soil_light: Rgba8::hex(0x6d4c41),
        soil_dark: Rgba8::hex(0x3e2723),
    },
    thorns: ThornPalette {
        highlight: Rgba8::hex(0xf5f5dc),
        main: Rgba8::hex(0x8d6e63),
        dark: Rgba8::hex(0x5d4037),
    },
    stamens: StamenPalette {
        stem: Rgba8::hex(0xfff59d),
        tip: Rgba8::hex(0xff9800),
        tip_light: Rgba8::hex(0xffb74d),
    },
    sepals: SepalPalette {
        highlight: Rgba8::hex(0xc5e1a5),
        light: Rgba8::hex(0x9ccc65),
        main: Rgba8::hex(0x7cb342),
        dark: Rgba8::hex(0x558b2f),
    },
    glow: GlowPalette {
        bright: Rgba8::hex(0xffffe0),
        mid: Rgba8::hex(0xfff176),
        dim: Rgba8::hex(0xaeea00),
    },
};

/// Brown used for center freckles and the center pip.
pub const SEED_BROWN: Rgba8 = Rgba8::hex(0x5d4037);

/// Neutral center drawn for male flowers.
pub const ANTHER_PALETTE: ColorPalette = ColorPalette::new(0xa1887f, 0x8d6e63, 0x6d4c41, 0x4e342e);

/// Shaded tip of a stamen filament.
pub fn stamen_tip_palette() -> ColorPalette {
    let stamens = &PALETTES.stamens;
    ColorPalette {
        highlight: Rgba8::hex(0xffcc80),
        light: stamens.tip_light,
        main: stamens.tip,
        dark: Rgba8::hex(0xe65100),
        shadow: None,
    }
}

/// Center disc palette; yellow flowers get an orange center so it stays visible.
pub fn flower_center_palette(color: FlowerColor) -> ColorPalette {
    match color {
        FlowerColor::Yellow => ColorPalette::new(0xffcc80, 0xfb8c00, 0xef6c00, 0xe65100),
        _ => ColorPalette::new(0xfffde7, 0xfff9c4, 0xfdd835, 0xf9a825),
    }
}

// ============================================================================
// Tests
// ============================================================================
