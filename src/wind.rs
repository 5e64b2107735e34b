//! Frame-driven wind sway.

/// One full wind cycle, indexed by `frame mod 4`.
pub const WIND_PATTERN: [i32; 4] = [0, 1, 0, -1];

/// Discrete sway multiplier in `{-1, 0, 1}`.
///
/// Frames 0 and 2 both map to 0, so they render identically unless
/// something else varies between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindForce(i32);

impl WindForce {
    pub const CALM: WindForce = WindForce(0);

    /// Force for an animation frame; negative frames wrap correctly.
    pub fn from_frame(frame: i64) -> Self {
        let idx = frame.rem_euclid(WIND_PATTERN.len() as i64) as usize;
        WindForce(WIND_PATTERN[idx])
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Small rotation added to leaves and flower heads.
    pub fn rotation(&self) -> f64 {
        self.as_f64() * 0.04
    }
}
