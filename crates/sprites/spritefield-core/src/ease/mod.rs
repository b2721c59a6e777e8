//! The shared easing curve.
//!
//! One monotonic [0,1] -> [0,1] curve shapes both the per-vertex blend in
//! the rasterizer and the rebase fold. `Config` carries a single `Easing`
//! for exactly that reason: folding with a different curve than the one on
//! screen would make the new base disagree with what was visible.

pub mod functions;

use serde::{Deserialize, Serialize};

use self::functions::bezier_ease_t;

/// A timing curve applied to normalized transition progress.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum Easing {
    /// Identity timing.
    Linear,
    /// Cubic-bezier timing through (0,0), (x1,y1), (x2,y2), (1,1).
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Standard ease-in-out control points.
    pub fn ease_in_out() -> Self {
        Easing::CubicBezier {
            x1: 0.42,
            y1: 0.0,
            x2: 0.58,
            y2: 1.0,
        }
    }

    pub fn ease_in() -> Self {
        Easing::CubicBezier {
            x1: 0.42,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        }
    }

    pub fn ease_out() -> Self {
        Easing::CubicBezier {
            x1: 0.0,
            y1: 0.0,
            x2: 0.58,
            y2: 1.0,
        }
    }

    /// Evaluate the curve at normalized progress `t`; input is clamped to
    /// [0,1].
    #[inline]
    pub fn apply(&self, t: f32) -> f32 {
        match *self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::CubicBezier { x1, y1, x2, y2 } => bezier_ease_t(t, x1, y1, x2, y2),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::ease_in_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity_clamped() {
        let e = Easing::Linear;
        assert_eq!(e.apply(0.25), 0.25);
        assert_eq!(e.apply(-1.0), 0.0);
        assert_eq!(e.apply(2.0), 1.0);
    }

    #[test]
    fn bezier_hits_endpoints() {
        let e = Easing::ease_in_out();
        assert!(e.apply(0.0).abs() < 1e-5);
        assert!((e.apply(1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn ease_in_is_below_linear_at_mid() {
        let e = Easing::ease_in();
        assert!(e.apply(0.5) < 0.5);
    }
}
