//! Seeded pseudo-random streams.
//!
//! A stream is seeded by folding the seed string's UTF-16 code units into a
//! 32-bit FNV-1a hash. Each draw advances the state by a fixed increment and
//! mixes it with two xor-shift/multiply rounds, so identical seeds always
//! produce identical sequences.
//!
//! Renderers never share a stream. [`RandomStreams`] hands out one stream per
//! [`Component`], seeded with `"<seed>_<component>"`, so the number of draws
//! one component makes can never shift another component's output.

use std::fmt;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;
const STATE_INCREMENT: u32 = 0x6d2b_79f5;
const TWO_POW_32: f64 = 4_294_967_296.0;

// ============================================================================
// SeededRandom
// ============================================================================

/// Deterministic random stream seeded from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: &str) -> Self {
        let state = seed.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
            (h ^ unit as u32).wrapping_mul(FNV_PRIME)
        });
        Self { state }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        (t ^ (t >> 14)) as f64 / TWO_POW_32
    }

    /// Integer in `[min, max]`, both ends inclusive.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        (self.next_f64() * (max - min + 1) as f64).floor() as i32 + min
    }

    /// Float in `[min, max)`.
    pub fn float(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// `true` with probability `p`.
    pub fn bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniformly chosen element of `items`.
    ///
    /// # Panics
    /// Panics if `items` is empty. Every call site passes a fixed, non-empty
    /// list, so this only fires on a programming error.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "cannot pick from an empty slice");
        let index = (self.next_f64() * items.len() as f64).floor() as usize;
        items
            .get(index)
            .unwrap_or_else(|| panic!("pick index {} out of range (len={})", index, items.len()))
    }
}

// ============================================================================
// Component keys and stream factory
// ============================================================================

/// Renderer keys used to derive independent streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Stem,
    Pot,
    Tendrils,
    Leaves,
    Thorns,
    Fruit,
    Flower,
    Glow,
}

impl Component {
    /// Every component, in draw order.
    pub const DRAW_ORDER: [Component; 8] = [
        Component::Stem,
        Component::Pot,
        Component::Tendrils,
        Component::Leaves,
        Component::Thorns,
        Component::Fruit,
        Component::Flower,
        Component::Glow,
    ];

    /// Suffix appended to the base seed.
    pub fn key(&self) -> &'static str {
        match self {
            Component::Stem => "stem",
            Component::Pot => "pot",
            Component::Tendrils => "tendrils",
            Component::Leaves => "leaves",
            Component::Thorns => "thorns",
            Component::Fruit => "fruit",
            Component::Flower => "flower",
            Component::Glow => "glow",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Factory for per-component streams sharing one base seed.
#[derive(Debug, Clone)]
pub struct RandomStreams<'a> {
    seed: &'a str,
}

impl<'a> RandomStreams<'a> {
    pub fn new(seed: &'a str) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> &str {
        self.seed
    }

    /// A fresh stream for `component`; calling twice yields identical streams.
    pub fn stream(&self, component: Component) -> SeededRandom {
        SeededRandom::new(&format!("{}_{}", self.seed, component.key()))
    }
}

// ============================================================================
// Tests
// ============================================================================
