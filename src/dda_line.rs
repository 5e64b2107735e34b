//! Integer line interpolation.
//!
//! [`BresenhamLine`] walks every pixel of a line between two integer
//! endpoints using the classic error-accumulator form. The start point is
//! always produced, so a degenerate line yields exactly one point.

/// Iterator over the pixels of a Bresenham line, start and end inclusive.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl BresenhamLine {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(point);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_line_single_point() {
        let pts: Vec<_> = BresenhamLine::new(4, 7, 4, 7).collect();
        assert_eq!(pts, vec![(4, 7)]);
    }

    #[test]
    fn test_horizontal() {
        let pts: Vec<_> = BresenhamLine::new(0, 0, 3, 0).collect();
        assert_eq!(pts, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_vertical_reverse() {
        let pts: Vec<_> = BresenhamLine::new(2, 3, 2, 0).collect();
        assert_eq!(pts, vec![(2, 3), (2, 2), (2, 1), (2, 0)]);
    }

    #[test]
    fn test_diagonal() {
        let pts: Vec<_> = BresenhamLine::new(0, 0, -3, 3).collect();
        assert_eq!(pts, vec![(0, 0), (-1, 1), (-2, 2), (-3, 3)]);
    }

    #[test]
    fn test_shallow_slope_endpoints_and_connectivity() {
        let pts: Vec<_> = BresenhamLine::new(0, 0, 10, 3).collect();
        assert_eq!(pts.first(), Some(&(0, 0)));
        assert_eq!(pts.last(), Some(&(10, 3)));
        assert_eq!(pts.len(), 11);
        for w in pts.windows(2) {
            assert!((w[1].0 - w[0].0).abs() <= 1);
            assert!((w[1].1 - w[0].1).abs() <= 1);
        }
    }
}
