//! Foundation types, constants, and rounding helpers.
//!
//! Every renderer works in canvas pixels. The plant is designed on a logical
//! 64×96 grid and blown up by [`DETAIL_FACTOR`]; [`s`] converts a logical
//! length into canvas pixels.

// ============================================================================
// Rounding
// ============================================================================

/// Round half toward positive infinity (`floor(v + 0.5)`).
///
/// `-2.5` rounds to `-2`, not `-3`. All pixel snapping and color channel
/// rounding go through this so that output stays bit-identical.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// [`round_half_up`] converted to `i32`.
#[inline]
pub fn iround(v: f64) -> i32 {
    round_half_up(v) as i32
}

// ============================================================================
// Canvas geometry
// ============================================================================

/// Canvas pixels per logical pixel.
pub const DETAIL_FACTOR: f64 = 3.0;

/// Scale a logical length to canvas pixels, never below one pixel.
#[inline]
pub fn s(value: f64) -> i32 {
    iround(value * DETAIL_FACTOR).max(1)
}

/// Logical canvas width.
pub const LOGICAL_WIDTH: f64 = 64.0;
/// Logical canvas height.
pub const LOGICAL_HEIGHT: f64 = 96.0;

/// Canvas width in pixels (`s(64)`).
pub const CANVAS_WIDTH: u32 = 192;
/// Canvas height in pixels (`s(96)`).
pub const CANVAS_HEIGHT: u32 = 288;

// ============================================================================
// Lighting
// ============================================================================

/// Fixed light direction vector.
///
/// Surfaces whose normal points along it shade dark, surfaces facing the
/// opposite way shade light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightDirection {
    pub x: f64,
    pub y: f64,
}

pub const LIGHT_DIR: LightDirection = LightDirection { x: -0.6, y: -0.8 };

pub const PI: f64 = std::f64::consts::PI;

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two inclusive corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Clip this rectangle to the intersection with `r`.
    /// Returns `true` if the result is a valid (non-empty) rectangle.
    pub fn clip(&mut self, r: &Self) -> bool {
        if self.x2 > r.x2 {
            self.x2 = r.x2;
        }
        if self.y2 > r.y2 {
            self.y2 = r.y2;
        }
        if self.x1 < r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 < r.y1 {
            self.y1 = r.y1;
        }
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the point (x, y) is inside the rectangle.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

pub type RectI = Rect<i32>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.49), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
    }

    #[test]
    fn test_iround() {
        assert_eq!(iround(127.5), 128);
        assert_eq!(iround(-1.5), -1);
        assert_eq!(iround(3.0), 3);
    }

    #[test]
    fn test_detail_scale() {
        assert_eq!(s(64.0), CANVAS_WIDTH as i32);
        assert_eq!(s(96.0), CANVAS_HEIGHT as i32);
        assert_eq!(s(LOGICAL_WIDTH), CANVAS_WIDTH as i32);
        assert_eq!(s(LOGICAL_HEIGHT), CANVAS_HEIGHT as i32);
        assert_eq!(s(0.0), 1);
        assert_eq!(s(0.1), 1);
        assert_eq!(s(2.5), 8);
    }

    #[test]
    fn test_rect_clip() {
        let mut r = RectI::new(-5, -5, 300, 10);
        assert!(r.clip(&RectI::new(0, 0, 191, 287)));
        assert_eq!(r, RectI::new(0, 0, 191, 10));

        let mut outside = RectI::new(200, 0, 250, 10);
        assert!(!outside.clip(&RectI::new(0, 0, 191, 287)));
    }

    #[test]
    fn test_rect_hit_is_inclusive() {
        let r = RectI::new(0, 0, 10, 10);
        assert!(r.hit_test(10, 0));
        assert!(r.hit_test(0, 10));
        assert!(!r.hit_test(11, 0));
        assert!(!r.hit_test(0, -1));
    }
}
