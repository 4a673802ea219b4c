//! Font seam: shaped glyphs with advances and outlines.

use std::{path::Path, sync::Arc};

use anyhow::Context;
use skrifa::{
    FontRef, GlyphId, MetadataProvider,
    instance::{LocationRef, Size},
    outline::{DrawSettings, OutlinePen},
};

use crate::foundation::{
    core::{BezPath, Point},
    error::{AutographError, AutographResult},
};

/// One shaped glyph, in font units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    /// Source character.
    pub ch: char,
    /// Font-specific glyph id (0 when the font has no mapping).
    pub id: u32,
    /// Horizontal advance in font units.
    pub advance_width: f64,
}

/// Anything that can turn text into positioned glyph outlines.
pub trait GlyphSource {
    /// Font-wide design units per em.
    fn units_per_em(&self) -> f64;

    /// One glyph per character of `text`, left to right.
    fn glyphs(&self, text: &str) -> Vec<Glyph>;

    /// Outline of `glyph` at `font_size`, with its baseline origin at `origin`,
    /// in document coordinates (Y grows downward). `None` for empty outlines.
    fn outline(&self, glyph: &Glyph, origin: Point, font_size: f64) -> Option<BezPath>;
}

/// [`GlyphSource`] backed by TrueType/OpenType font bytes.
#[derive(Clone)]
pub struct OutlineFont {
    data: Arc<Vec<u8>>,
    units_per_em: u16,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("bytes_len", &self.data.len())
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

impl OutlineFont {
    /// Parse font bytes and read the em size.
    pub fn from_bytes(data: Vec<u8>) -> AutographResult<Self> {
        let font = FontRef::new(&data)
            .map_err(|e| AutographError::font(format!("unreadable font data: {e}")))?;
        let units_per_em = font
            .metrics(Size::unscaled(), LocationRef::default())
            .units_per_em;
        if units_per_em == 0 {
            return Err(AutographError::font("font reports zero units per em"));
        }
        Ok(Self {
            data: Arc::new(data),
            units_per_em,
        })
    }

    /// Read and parse a font file.
    pub fn from_path(path: &Path) -> AutographResult<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("read font file '{}'", path.display()))?;
        Self::from_bytes(data)
    }

    fn font(&self) -> Option<FontRef<'_>> {
        FontRef::new(&self.data).ok()
    }
}

impl GlyphSource for OutlineFont {
    fn units_per_em(&self) -> f64 {
        f64::from(self.units_per_em)
    }

    fn glyphs(&self, text: &str) -> Vec<Glyph> {
        let Some(font) = self.font() else {
            return Vec::new();
        };
        let charmap = font.charmap();
        let metrics = font.glyph_metrics(Size::unscaled(), LocationRef::default());

        text.chars()
            .map(|ch| {
                let gid = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
                Glyph {
                    ch,
                    id: gid.to_u32(),
                    advance_width: f64::from(metrics.advance_width(gid).unwrap_or(0.0)),
                }
            })
            .collect()
    }

    fn outline(&self, glyph: &Glyph, origin: Point, font_size: f64) -> Option<BezPath> {
        let font = self.font()?;
        let outline = font.outline_glyphs().get(GlyphId::new(glyph.id))?;

        let mut pen = BezPen {
            path: BezPath::new(),
            origin,
        };
        let settings = DrawSettings::unhinted(Size::new(font_size as f32), LocationRef::default());
        if let Err(e) = outline.draw(settings, &mut pen) {
            tracing::debug!(ch = %glyph.ch, error = %e, "glyph outline draw failed");
            return None;
        }
        if pen.path.elements().is_empty() {
            return None;
        }
        Some(pen.path)
    }
}

/// Collects skrifa pen callbacks into a kurbo path, flipping Y around the baseline.
struct BezPen {
    path: BezPath,
    origin: Point,
}

impl BezPen {
    fn pt(&self, x: f32, y: f32) -> Point {
        Point::new(self.origin.x + f64::from(x), self.origin.y - f64::from(y))
    }
}

impl OutlinePen for BezPen {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.pt(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.pt(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let c = self.pt(cx0, cy0);
        let p = self.pt(x, y);
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let c0 = self.pt(cx0, cy0);
        let c1 = self.pt(cx1, cy1);
        let p = self.pt(x, y);
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/source.rs"]
mod tests;
