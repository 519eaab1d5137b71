//! Timing functions for card motions.
//!
//! Mirrors the CSS timing-function vocabulary: a motion's progress in `[0, 1]`
//! is mapped through a cubic Bézier curve anchored at `(0, 0)` and `(1, 1)`.

/// A timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::CubicBezier(0.0, 0.0, 0.58, 1.0);
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::CubicBezier(0.42, 0.0, 0.58, 1.0);
    /// Fast start, long soft landing. Default for card reordering.
    pub const STANDARD: Self = Self::CubicBezier(0.2, 0.8, 0.2, 1.0);

    /// Looks up an easing by its configuration name.
    ///
    /// Accepts `linear`, `ease-out`, `ease-in-out` and `standard`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "ease-out" => Some(Self::EASE_OUT),
            "ease-in-out" => Some(Self::EASE_IN_OUT),
            "standard" => Some(Self::STANDARD),
            _ => None,
        }
    }

    /// Maps linear progress `t` (clamped to `[0, 1]`) to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicBezier(x1, y1, x2, y2) => {
                if t <= 0.0 || t >= 1.0 {
                    return t;
                }
                let s = solve_parameter(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One coordinate of a cubic Bézier with endpoints 0 and 1.
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Finds the curve parameter whose x-coordinate equals `x`.
///
/// Newton iterations first, bisection when the slope flattens out.
fn solve_parameter(x: f64, x1: f64, x2: f64) -> f64 {
    const EPSILON: f64 = 1e-6;

    let mut s = x;
    for _ in 0..8 {
        let error = bezier(s, x1, x2) - x;
        if error.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < EPSILON {
            break;
        }
        s -= error / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}
