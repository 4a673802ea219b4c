#![allow(dead_code)]

use autograph::{BezPath, Glyph, GlyphSource, Point, Rect};
use kurbo::Shape;

/// Synthetic font: 1000 units per em, every glyph advances half an em and is a
/// box half an em wide and one em tall standing on the baseline. Spaces have
/// no outline.
pub struct BoxFont;

impl GlyphSource for BoxFont {
    fn units_per_em(&self) -> f64 {
        1000.0
    }

    fn glyphs(&self, text: &str) -> Vec<Glyph> {
        text.chars()
            .map(|ch| Glyph {
                ch,
                id: ch as u32,
                advance_width: 500.0,
            })
            .collect()
    }

    fn outline(&self, glyph: &Glyph, origin: Point, font_size: f64) -> Option<BezPath> {
        if glyph.ch.is_whitespace() {
            return None;
        }
        let w = font_size / 2.0;
        Some(Rect::new(origin.x, origin.y - font_size, origin.x + w, origin.y).to_path(0.1))
    }
}

/// Two strokes for 你: a horizontal and a vertical bar.
pub const NI_STROKES: [&str; 2] = ["M 100 500 L 900 500", "M 500 100 L 500 900"];
