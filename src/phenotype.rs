//! The plant genome: closed enumerations of visual traits.
//!
//! Every trait is a small closed enum. Values serialize as their lowercase
//! names (`"vine"`, `"hermaphrodite"`), and the record serializes with
//! camelCase field names, matching the seed card interchange format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declares a closed trait enumeration with its lowercase wire names.
macro_rules! trait_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownTraitValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(UnknownTraitValue {
                        trait_name: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// A string that names no member of the trait enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {trait_name} value {value:?}")]
pub struct UnknownTraitValue {
    pub trait_name: &'static str,
    pub value: String,
}

trait_enum!(StemShape { Straight => "straight", Vine => "vine" });
trait_enum!(StemThickness { Thin => "thin", Thick => "thick" });
trait_enum!(StemTexture { Smooth => "smooth", Hairy => "hairy" });
trait_enum!(LeafShape { Narrow => "narrow", Wide => "wide" });
trait_enum!(LeafSize { Small => "small", Medium => "medium", Large => "large" });
trait_enum!(LeafEdge { Smooth => "smooth", Serrated => "serrated" });
trait_enum!(FoliageColor {
    Green => "green",
    Teal => "teal",
    Autumn => "autumn",
    Dark => "dark",
});
trait_enum!(FlowerColor {
    Red => "red",
    Blue => "blue",
    Purple => "purple",
    White => "white",
    Yellow => "yellow",
});
trait_enum!(
    /// `Round` and `Pointy` share the radial algorithm.
    FlowerShape {
        Round => "round",
        Pointy => "pointy",
        Tulip => "tulip",
        Bell => "bell",
        Daisy => "daisy",
    }
);
trait_enum!(FlowerSize { Small => "small", Medium => "medium", Large => "large" });
trait_enum!(FlowerPattern { Plain => "plain", Stripes => "stripes", Dots => "dots" });
trait_enum!(FlowerSex {
    Hermaphrodite => "hermaphrodite",
    Female => "female",
    Male => "male",
});
trait_enum!(FruitShape { Round => "round", Oval => "oval" });
trait_enum!(
    /// Canvas fill applied before any component draws.
    Background {
        Transparent => "transparent",
        White => "white",
        Dark => "dark",
    }
);

impl Default for Background {
    fn default() -> Self {
        Background::Transparent
    }
}

impl FlowerSize {
    /// Multiplier applied to most flower radii.
    pub fn scale(&self) -> f64 {
        match self {
            FlowerSize::Small => 0.5,
            FlowerSize::Medium => 0.7,
            FlowerSize::Large => 1.0,
        }
    }
}

// ============================================================================
// Phenotype
// ============================================================================

/// Complete visual genome of one plant.
///
/// Always fully populated; values are trusted to be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phenotype {
    pub stem: StemShape,
    pub stem_thickness: StemThickness,
    pub stem_texture: StemTexture,
    pub leaf: LeafShape,
    pub leaf_size: LeafSize,
    pub leaf_edge: LeafEdge,
    pub foliage_color: FoliageColor,
    pub flower_color: FlowerColor,
    pub flower_color_secondary: FlowerColor,
    pub flower_shape: FlowerShape,
    pub flower_size: FlowerSize,
    pub flower_pattern: FlowerPattern,
    pub sex: FlowerSex,
    pub fruit_shape: FruitShape,
    pub thorns: bool,
    pub fruit: bool,
    pub glow: bool,
}

impl Phenotype {
    pub const DEFAULT: Phenotype = Phenotype {
        stem: StemShape::Straight,
        stem_thickness: StemThickness::Thin,
        stem_texture: StemTexture::Smooth,
        leaf: LeafShape::Narrow,
        leaf_size: LeafSize::Medium,
        leaf_edge: LeafEdge::Smooth,
        foliage_color: FoliageColor::Green,
        flower_color: FlowerColor::Red,
        flower_color_secondary: FlowerColor::Blue,
        flower_shape: FlowerShape::Round,
        flower_size: FlowerSize::Medium,
        flower_pattern: FlowerPattern::Plain,
        sex: FlowerSex::Hermaphrodite,
        fruit_shape: FruitShape::Round,
        thorns: false,
        fruit: false,
        glow: false,
    };

    /// Flower scale for this phenotype's size trait.
    pub fn flower_scale(&self) -> f64 {
        self.flower_size.scale()
    }

    pub fn is_vine(&self) -> bool {
        self.stem == StemShape::Vine
    }
}

impl Default for Phenotype {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_sizes() {
        assert_eq!(StemShape::ALL.len(), 2);
        assert_eq!(LeafSize::ALL.len(), 3);
        assert_eq!(FoliageColor::ALL.len(), 4);
        assert_eq!(FlowerColor::ALL.len(), 5);
        assert_eq!(FlowerShape::ALL.len(), 5);
        assert_eq!(FlowerSex::ALL.len(), 3);
        assert_eq!(Background::ALL.len(), 3);
    }

    #[test]
    fn test_wire_names_parse_back() {
        for shape in FlowerShape::ALL {
            assert_eq!(shape.as_str().parse::<FlowerShape>().unwrap(), *shape);
        }
        assert!("tree".parse::<StemShape>().is_err());
        let err = "Vine".parse::<StemShape>().unwrap_err();
        assert_eq!(err.trait_name, "StemShape");
    }

    #[test]
    fn test_flower_scale() {
        assert_eq!(FlowerSize::Small.scale(), 0.5);
        assert_eq!(FlowerSize::Medium.scale(), 0.7);
        assert_eq!(FlowerSize::Large.scale(), 1.0);
        assert_eq!(Phenotype::default().flower_scale(), 0.7);
    }

    #[test]
    fn test_serde_field_and_value_names() {
        let json = serde_json::to_value(Phenotype::default()).unwrap();
        assert_eq!(json["stemThickness"], "thin");
        assert_eq!(json["flowerColorSecondary"], "blue");
        assert_eq!(json["sex"], "hermaphrodite");
        assert_eq!(json["glow"], false);
        let back: Phenotype = serde_json::from_value(json).unwrap();
        assert_eq!(back, Phenotype::default());
    }

    #[test]
    fn test_default_background_is_transparent() {
        assert_eq!(Background::default(), Background::Transparent);
    }
}
