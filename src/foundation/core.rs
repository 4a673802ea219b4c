use std::fmt;

use crate::foundation::error::{AutographError, AutographResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Frame rate used when sampling an animation into raster frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames per `den` seconds.
    pub num: u32,
    /// Must be > 0.
    pub den: u32,
}

impl Fps {
    /// Validate and build a frame rate of `num / den` frames per second.
    pub fn new(num: u32, den: u32) -> AutographResult<Self> {
        if den == 0 {
            return Err(AutographError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(AutographError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of a single frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Timestamp of frame `index` in seconds.
    pub fn frame_time_secs(self, index: u64) -> f64 {
        (index as f64) * self.frame_duration_secs()
    }

    /// Number of frames needed to cover `secs`, rounded up.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        if !secs.is_finite() || secs <= 0.0 {
            return 0;
        }
        // Guard against float noise turning 2.0000000001 frames into 3.
        let frames = secs * self.as_f64();
        (frames - 1e-9).ceil().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Compact decimal formatting for document attributes.
///
/// Rounds to three decimals and drops trailing zeros, so `200.0` prints as
/// `200` and `0.125` as `0.125`. Non-finite values print as `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_decimal(self.0, 3))
    }
}

/// Format `v` with at most `decimals` fractional digits, trimming zeros.
pub fn format_decimal(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut s = format!("{v:.decimals$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Serialize `path` as SVG path data with at most `decimals` fractional digits.
pub fn svg_path_data(path: &BezPath, decimals: usize) -> String {
    use kurbo::PathEl;

    let n = |v: f64| format_decimal(v, decimals);
    let mut out = String::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.push_str(&format!("M{} {}", n(p.x), n(p.y))),
            PathEl::LineTo(p) => out.push_str(&format!("L{} {}", n(p.x), n(p.y))),
            PathEl::QuadTo(c, p) => {
                out.push_str(&format!("Q{} {} {} {}", n(c.x), n(c.y), n(p.x), n(p.y)))
            }
            PathEl::CurveTo(c0, c1, p) => out.push_str(&format!(
                "C{} {} {} {} {} {}",
                n(c0.x),
                n(c0.y),
                n(c1.x),
                n(c1.y),
                n(p.x),
                n(p.y)
            )),
            PathEl::ClosePath => out.push('Z'),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
