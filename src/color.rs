//! Color type and hex color blending.
//!
//! Colors are 8-bit RGBA. Palettes are authored as `#rrggbb` values and are
//! always opaque; the only non-opaque color a render produces is the
//! transparent clear.

use std::fmt;
use std::str::FromStr;

use crate::basics::round_half_up;
use crate::error::ColorError;

// ============================================================================
// Rgba8
// ============================================================================

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u8 = 255;

    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::hex(0xffffff);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Self::BASE_MASK)
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Self {
        Self::new_opaque(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        )
    }

    /// Packed `0xRRGGBB` value (alpha dropped).
    pub fn to_rgb_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a `#rrggbb` string.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColorError::InvalidHex(s.to_string()))?;
        let rgb = u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(s.to_string()))?;
        Ok(Self::hex(rgb))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.to_rgb_u32())
    }

    /// Per-channel linear interpolation toward `overlay` by `t`.
    ///
    /// Each channel is rounded half-up. Alpha is taken from `self`.
    pub fn blend(&self, overlay: &Rgba8, t: f64) -> Rgba8 {
        let lerp = |b: u8, o: u8| -> u8 {
            let v = round_half_up(b as f64 + (o as f64 - b as f64) * t);
            v.clamp(0.0, 255.0) as u8
        };
        Rgba8 {
            r: lerp(self.r, overlay.r),
            g: lerp(self.g, overlay.g),
            b: lerp(self.b, overlay.b),
            a: self.a,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_rgb_u32())
    }
}

impl FromStr for Rgba8 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Blend two `#rrggbb` strings; `t = 0` gives `base`, `t = 1` gives `overlay`.
pub fn blend_hex(base: &str, overlay: &str, t: f64) -> Result<String, ColorError> {
    let b = Rgba8::from_hex(base)?;
    let o = Rgba8::from_hex(overlay)?;
    Ok(b.blend(&o, t).to_hex())
}

// ============================================================================
// Tests
// ============================================================================
