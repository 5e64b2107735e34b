//! The stem skeleton shared by every renderer after the stem.
//!
//! The stem renderer owns a [`SkeletonBuilder`] exclusively and appends nodes
//! top-down as it walks its scanlines. [`SkeletonBuilder::finish`] freezes
//! it into a [`Skeleton`] that later renderers only read. A skeleton lives
//! for exactly one render.

/// An anchor point on the stem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StemNode {
    pub x: f64,
    pub y: f64,
    /// Tangent angle in radians.
    pub angle: f64,
    /// Local half-width of the stem, node swelling included.
    pub half_width: i32,
}

/// Append-only build phase of a skeleton.
#[derive(Debug, Default)]
pub struct SkeletonBuilder {
    nodes: Vec<StemNode>,
    apex: (f64, f64),
}

impl SkeletonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_node(&mut self, node: StemNode) {
        self.nodes.push(node);
    }

    pub fn set_apex(&mut self, x: f64, y: f64) {
        self.apex = (x, y);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze into a read-only skeleton.
    pub fn finish(self) -> Skeleton {
        Skeleton {
            nodes: self.nodes,
            apex_x: self.apex.0,
            apex_y: self.apex.1,
        }
    }
}

/// Read-only stem skeleton: nodes in top-to-bottom pass order plus the apex.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    nodes: Vec<StemNode>,
    apex_x: f64,
    apex_y: f64,
}

impl Skeleton {
    pub fn nodes(&self) -> &[StemNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// X of the stem's topmost scanline; anchor for flower and glow.
    pub fn apex_x(&self) -> f64 {
        self.apex_x
    }

    pub fn apex_y(&self) -> f64 {
        self.apex_y
    }
}
