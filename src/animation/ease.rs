/// Easing curves used when sampling the draw animation at a fixed time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// CSS `ease-out`, i.e. `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// Arbitrary CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f64, f64, f64, f64),
}

impl Ease {
    /// Curve used by both the stroke draw and the fill fade.
    pub const DRAW: Ease = Ease::EaseOut;

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    /// Keyword or function notation for CSS `animation` shorthands.
    pub fn css(self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::EaseOut => "ease-out".to_string(),
            Self::CubicBezier(x1, y1, x2, y2) => format!(
                "cubic-bezier({}, {}, {}, {})",
                crate::foundation::core::Num(x1),
                crate::foundation::core::Num(y1),
                crate::foundation::core::Num(x2),
                crate::foundation::core::Num(y2),
            ),
        }
    }
}

// One-dimensional Bezier with endpoints 0 and 1.
fn bezier_1d(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_1d_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);

    // Newton first, bisection when the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_1d(x1, x2, s) - x;
        if err.abs() < 1e-9 {
            return bezier_1d(y1, y2, s);
        }
        let slope = bezier_1d_slope(x1, x2, s);
        if slope.abs() < 1e-9 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let v = bezier_1d(x1, x2, s);
        if (v - x).abs() < 1e-9 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bezier_1d(y1, y2, s)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
