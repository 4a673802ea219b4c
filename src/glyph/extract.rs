//! Text to ordered path records.

use kurbo::Shape;

use crate::{
    foundation::core::{BezPath, Point, Rect, svg_path_data},
    glyph::{
        source::{Glyph, GlyphSource},
        strokes::{STROKE_EM, StrokeData, StrokeSource, is_cjk},
    },
    layout::bounds::{Bounds, VIEW_PADDING, ViewWindow},
    style::config::StyleConfig,
};

/// X coordinate of the first glyph's origin.
pub const ORIGIN_X: f64 = 10.0;
/// Baseline Y coordinate shared by all glyphs.
pub const BASELINE_Y: f64 = 150.0;

const PATH_DECIMALS: usize = 2;
const LENGTH_ACCURACY: f64 = 0.1;

/// Placement of a CJK stroke record. Stroke paths live in a [`STROKE_EM`]
/// square and are mapped into the document at render time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeOrigin {
    /// Left edge of the character cell.
    pub x: f64,
    /// Font size the cell is scaled to.
    pub font_size: f64,
    /// Position of this stroke within its character.
    pub stroke_index: usize,
    /// Number of strokes in the character.
    pub total_strokes: usize,
}

impl StrokeOrigin {
    /// Factor from stroke space to document units.
    pub fn scale(&self) -> f64 {
        self.font_size / STROKE_EM
    }
}

/// One drawable unit: a whole glyph outline or a single CJK stroke.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRecord {
    /// SVG path data.
    pub d: String,
    /// Path length in document units.
    pub len: f64,
    /// Index of the originating character.
    pub index: usize,
    /// Present for records drawn from stroke data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeOrigin>,
}

impl PathRecord {
    /// `true` for records drawn from stroke data.
    pub fn is_stroke(&self) -> bool {
        self.stroke.is_some()
    }

    /// Length in the path's own coordinate space, which is what dash arrays see.
    pub fn native_len(&self) -> f64 {
        match &self.stroke {
            Some(origin) if origin.scale() > 0.0 => self.len / origin.scale(),
            _ => self.len,
        }
    }
}

/// Result of one extraction pass.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    /// Records in character-then-stroke order.
    pub paths: Vec<PathRecord>,
    /// Extent of all emitted geometry.
    pub bounds: Bounds,
    /// Cursor position after the last glyph.
    pub cursor_x: f64,
}

impl Extraction {
    /// Padded view window around [`Extraction::bounds`].
    pub fn view_window(&self) -> ViewWindow {
        self.bounds.to_view_window(VIEW_PADDING)
    }
}

/// Walk `style.text` left to right and emit path records.
///
/// With stroke mode enabled, CJK characters that `strokes` knows about become one
/// record per stroke; everything else (including failed lookups) uses the glyph
/// outline. Glyphs without an outline advance the cursor but emit nothing.
#[tracing::instrument(skip_all, fields(chars = style.text.chars().count()))]
pub fn extract_paths(
    font: &dyn GlyphSource,
    strokes: Option<&dyn StrokeSource>,
    style: &StyleConfig,
) -> Extraction {
    let font_size = style.font_size;
    let upem = font.units_per_em();
    let scale = if upem.is_finite() && upem > 0.0 {
        font_size / upem
    } else {
        0.0
    };
    let spacing = 1.0 + style.char_spacing_factor();

    let mut out = Extraction {
        cursor_x: ORIGIN_X,
        ..Extraction::default()
    };

    for (index, glyph) in font.glyphs(&style.text).iter().enumerate() {
        let stroke_data = if style.use_hanzi_data && is_cjk(glyph.ch) {
            strokes.and_then(|s| lookup_strokes(s, glyph.ch))
        } else {
            None
        };

        match stroke_data {
            Some(data) => push_strokes(&mut out, &data, index, font_size),
            None => push_outline(&mut out, font, glyph, index, font_size),
        }

        let advance = glyph.advance_width * scale * spacing;
        if advance.is_finite() && advance > 0.0 {
            out.cursor_x += advance;
        }
    }

    tracing::debug!(paths = out.paths.len(), "extracted paths");
    out
}

fn lookup_strokes(source: &dyn StrokeSource, ch: char) -> Option<std::sync::Arc<StrokeData>> {
    match source.strokes(ch) {
        Ok(Some(data)) if !data.strokes.is_empty() => Some(data),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(%ch, error = %e, "stroke data unavailable, using glyph outline");
            None
        }
    }
}

fn push_strokes(out: &mut Extraction, data: &StrokeData, index: usize, font_size: f64) {
    let x = out.cursor_x;
    let total = data.strokes.len();
    for (stroke_index, d) in data.strokes.iter().enumerate() {
        let native = BezPath::from_svg(d)
            .map(|p| p.perimeter(LENGTH_ACCURACY))
            .unwrap_or(0.0);
        let len = finite_non_negative(native * font_size / STROKE_EM);
        out.paths.push(PathRecord {
            d: d.clone(),
            len,
            index,
            stroke: Some(StrokeOrigin {
                x,
                font_size,
                stroke_index,
                total_strokes: total,
            }),
        });
    }
    out.bounds
        .add_rect(Rect::new(x, BASELINE_Y - font_size, x + font_size, BASELINE_Y));
}

fn push_outline(
    out: &mut Extraction,
    font: &dyn GlyphSource,
    glyph: &Glyph,
    index: usize,
    font_size: f64,
) {
    let origin = Point::new(out.cursor_x, BASELINE_Y);
    let Some(path) = font.outline(glyph, origin, font_size) else {
        return;
    };
    let d = svg_path_data(&path, PATH_DECIMALS);
    if d.is_empty() {
        return;
    }
    out.bounds.add_rect(path.bounding_box());
    out.paths.push(PathRecord {
        d,
        len: finite_non_negative(path.perimeter(LENGTH_ACCURACY).ceil()),
        index,
        stroke: None,
    });
}

fn finite_non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/extract.rs"]
mod tests;
