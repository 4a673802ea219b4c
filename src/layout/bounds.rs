use crate::foundation::core::Rect;

/// Padding added around the text bounds on every side, in document units.
pub const VIEW_PADDING: f64 = 40.0;

/// Padded rectangle enclosing all emitted path geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewWindow {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, always finite and > 0.
    #[serde(rename = "w")]
    pub width: f64,
    /// Height, always finite and > 0.
    #[serde(rename = "h")]
    pub height: f64,
}

impl ViewWindow {
    /// Window used when no finite geometry was recorded.
    pub const FALLBACK: ViewWindow = ViewWindow {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    /// Build a window, falling back to [`ViewWindow::FALLBACK`] for degenerate input.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let ok = [x, y, width, height].iter().all(|v| v.is_finite()) && width > 0.0 && height > 0.0;
        if ok {
            Self {
                x,
                y,
                width,
                height,
            }
        } else {
            Self::FALLBACK
        }
    }
}

/// Running min/max over rectangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Grow to include `r`. Rectangles with non-finite corners are ignored.
    pub fn add_rect(&mut self, r: Rect) {
        if ![r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()) {
            return;
        }
        self.min_x = self.min_x.min(r.x0.min(r.x1));
        self.min_y = self.min_y.min(r.y0.min(r.y1));
        self.max_x = self.max_x.max(r.x0.max(r.x1));
        self.max_y = self.max_y.max(r.y0.max(r.y1));
    }

    /// `true` once at least one finite rectangle has been added.
    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }

    /// Accumulated extent, if any.
    pub fn rect(&self) -> Option<Rect> {
        self.is_finite()
            .then(|| Rect::new(self.min_x, self.min_y, self.max_x, self.max_y))
    }

    /// Pad by `padding` on every side.
    pub fn to_view_window(&self, padding: f64) -> ViewWindow {
        match self.rect() {
            Some(r) => ViewWindow::new(
                r.x0 - padding,
                r.y0 - padding,
                r.width() + padding * 2.0,
                r.height() + padding * 2.0,
            ),
            None => ViewWindow::FALLBACK,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/bounds.rs"]
mod tests;
