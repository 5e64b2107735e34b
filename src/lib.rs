//! # pixel-plant
//!
//! Deterministic procedural pixel-art plant renderer.
//!
//! A plant is fully described by a [`Phenotype`] (a categorical genome), a
//! text seed, and an animation frame. Rendering the same triple always
//! produces the same pixels on the fixed 192×288 canvas.
//!
//! ## Architecture
//!
//! Rendering is a fixed sequence of layers drawn into one raster target:
//!
//! 1. **Stem**: traces the stalk and records the skeleton (nodes + apex)
//! 2. **Pot**: static terracotta pot and soil
//! 3. **Tendrils / Leaves / Thorns / Fruit**: hang off skeleton nodes
//! 4. **Flower**: one of four variants at the skeleton apex
//! 5. **Glow**: optional sparkles around apex and nodes
//!
//! Each layer draws from its own seeded random stream, so layers are
//! independent of each other's draw counts. All shapes are shaded with the
//! same discrete four-tone light model and a checkerboard dither.
//!
//! ## Example
//!
//! ```
//! use pixel_plant::{generate_plant, Background, Phenotype, RenderingBuffer};
//!
//! let mut canvas = RenderingBuffer::canvas();
//! let report = generate_plant(&mut canvas, &Phenotype::DEFAULT, "rostlina1", 0, Background::White);
//! assert!(report.node_count >= 4);
//! ```

// Foundation
pub mod basics;
pub mod color;
pub mod error;
pub mod phenotype;
pub mod random;

// Raster
pub mod dda_line;
pub mod pixfmt_rgba;
pub mod renderer_base;
pub mod rendering_buffer;

// Shading
pub mod palette;
pub mod shaded_shapes;
pub mod shading;

// Plant components
pub mod flower;
pub mod flower_bell;
pub mod flower_daisy;
pub mod flower_radial;
pub mod flower_tulip;
pub mod plant_accessories;
pub mod plant_leaves;
pub mod plant_pot;
pub mod plant_stem;
pub mod skeleton;
pub mod wind;

// Orchestration & interchange
pub mod config;
pub mod export;
pub mod plant_generator;
pub mod random_seed;
pub mod seed_card;

pub use color::Rgba8;
pub use config::{parse_configuration, sanitize_seed, AppConfiguration};
pub use error::{ColorError, ExportError, SeedCardError};
pub use phenotype::{Background, Phenotype};
pub use pixfmt_rgba::PixelFormat;
pub use plant_generator::{generate_plant, RenderReport};
pub use rendering_buffer::RenderingBuffer;
pub use seed_card::{deserialize_seed_card, serialize_seed_card};
