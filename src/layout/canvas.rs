//! Final document canvas: the text window grown to fit a custom card.

use crate::{
    foundation::core::{Rect, Vec2},
    layout::bounds::ViewWindow,
    style::config::StyleConfig,
};

/// Document extent in view-window coordinates.
///
/// The canvas keeps the view window's origin. When a custom card is larger than
/// the text in some axis, the canvas grows in that axis and the smaller of the
/// two is centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    /// Window around the text geometry.
    pub view: ViewWindow,
    /// Canvas width, `>= view.width`.
    pub width: f64,
    /// Canvas height, `>= view.height`.
    pub height: f64,
    card: Option<(f64, f64)>,
}

impl Canvas {
    /// Size the canvas for `view` under the card settings of `style`.
    pub fn fit(view: ViewWindow, style: &StyleConfig) -> Self {
        let card = style.custom_card();
        let (width, height) = match card {
            Some((w, h)) => (view.width.max(w), view.height.max(h)),
            None => (view.width, view.height),
        };
        Self {
            view,
            width,
            height,
            card,
        }
    }

    /// Full canvas rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.view.x,
            self.view.y,
            self.view.x + self.width,
            self.view.y + self.height,
        )
    }

    /// Translation that centers the text window on the canvas.
    pub fn text_offset(&self) -> Vec2 {
        Vec2::new(
            (self.width - self.view.width) / 2.0,
            (self.height - self.view.height) / 2.0,
        )
    }

    /// Background card rectangle: the custom card centered on the canvas, or
    /// the whole canvas in auto mode.
    pub fn card_rect(&self) -> Rect {
        let (w, h) = self.card.unwrap_or((self.width, self.height));
        let x = self.view.x + (self.width - w) / 2.0;
        let y = self.view.y + (self.height - h) / 2.0;
        Rect::new(x, y, x + w, y + h)
    }

    /// Inset applied to the texture overlay, at most a quarter of the shorter side.
    pub fn texture_padding(&self, style: &StyleConfig) -> f64 {
        let limit = self.width.min(self.height) / 4.0;
        let pad = if style.card_padding.is_finite() {
            style.card_padding
        } else {
            0.0
        };
        pad.min(limit).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/canvas.rs"]
mod tests;
