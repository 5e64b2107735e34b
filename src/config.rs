//! Render request configuration and its lenient parser.
//!
//! [`parse_configuration`] accepts any JSON value and always produces a
//! complete, valid [`AppConfiguration`]: every missing or unrecognized field
//! falls back to its default. This is what turns raw user input (or an old
//! seed card) into something the renderer can trust.

use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::phenotype::{Background, Phenotype};

/// Seed used when the input has no usable characters.
pub const DEFAULT_SEED: &str = "rostlina1";
/// Longest seed kept after sanitizing.
pub const MAX_SEED_LENGTH: usize = 64;

/// Everything needed to reproduce a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfiguration {
    pub phenotype: Phenotype,
    pub seed: String,
    /// Whether the frame counter should advance.
    pub animate: bool,
    pub bg_mode: Background,
}

impl Default for AppConfiguration {
    fn default() -> Self {
        Self {
            phenotype: Phenotype::DEFAULT,
            seed: DEFAULT_SEED.to_string(),
            animate: false,
            bg_mode: Background::Transparent,
        }
    }
}

/// Reduce `raw` to a usable seed.
///
/// Trims surrounding whitespace, drops every character outside
/// `[A-Za-z0-9_-]`, and keeps at most [`MAX_SEED_LENGTH`] characters.
/// Returns [`DEFAULT_SEED`] if nothing is left.
pub fn sanitize_seed(raw: &str) -> String {
    let seed: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(MAX_SEED_LENGTH)
        .collect();
    if seed.is_empty() {
        DEFAULT_SEED.to_string()
    } else {
        seed
    }
}

fn parse_enum<T: FromStr + Copy>(source: &Map<String, Value>, key: &str, fallback: T) -> T {
    match source.get(key) {
        None => fallback,
        Some(Value::String(s)) => s.parse().unwrap_or_else(|_| {
            warn!("config: unknown {} {:?}, using default", key, s);
            fallback
        }),
        Some(other) => {
            warn!("config: {} is not a string ({}), using default", key, other);
            fallback
        }
    }
}

fn parse_bool(source: &Map<String, Value>, key: &str, fallback: bool) -> bool {
    match source.get(key) {
        None => fallback,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) if s == "true" => true,
        Some(Value::String(s)) if s == "false" => false,
        Some(other) => {
            warn!("config: {} is not a boolean ({}), using default", key, other);
            fallback
        }
    }
}

/// Lenient phenotype parse; see the module docs.
pub fn parse_phenotype(raw: &Value) -> Phenotype {
    let empty = Map::new();
    let source = raw.as_object().unwrap_or(&empty);
    let d = Phenotype::DEFAULT;
    Phenotype {
        stem: parse_enum(source, "stem", d.stem),
        stem_thickness: parse_enum(source, "stemThickness", d.stem_thickness),
        stem_texture: parse_enum(source, "stemTexture", d.stem_texture),
        leaf: parse_enum(source, "leaf", d.leaf),
        leaf_size: parse_enum(source, "leafSize", d.leaf_size),
        leaf_edge: parse_enum(source, "leafEdge", d.leaf_edge),
        foliage_color: parse_enum(source, "foliageColor", d.foliage_color),
        flower_color: parse_enum(source, "flowerColor", d.flower_color),
        flower_color_secondary: parse_enum(
            source,
            "flowerColorSecondary",
            d.flower_color_secondary,
        ),
        flower_shape: parse_enum(source, "flowerShape", d.flower_shape),
        flower_size: parse_enum(source, "flowerSize", d.flower_size),
        flower_pattern: parse_enum(source, "flowerPattern", d.flower_pattern),
        sex: parse_enum(source, "sex", d.sex),
        fruit_shape: parse_enum(source, "fruitShape", d.fruit_shape),
        thorns: parse_bool(source, "thorns", d.thorns),
        fruit: parse_bool(source, "fruit", d.fruit),
        glow: parse_bool(source, "glow", d.glow),
    }
}

/// Lenient configuration parse; never fails.
pub fn parse_configuration(raw: &Value) -> AppConfiguration {
    let empty = Map::new();
    let source = raw.as_object().unwrap_or(&empty);
    let seed = match source.get("seed") {
        Some(Value::String(s)) => sanitize_seed(s),
        _ => DEFAULT_SEED.to_string(),
    };
    AppConfiguration {
        phenotype: parse_phenotype(source.get("phenotype").unwrap_or(&Value::Null)),
        seed,
        animate: parse_bool(source, "animate", false),
        bg_mode: parse_enum(source, "bgMode", Background::Transparent),
    }
}

// ============================================================================
// Tests
// ============================================================================
