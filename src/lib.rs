//! Autograph renders animated signatures from text.
//!
//! A string is turned into glyph outlines (or, for CJK characters, individual
//! brush strokes), laid out on a baseline, timed one character after another, and
//! written out as a self-contained animated SVG. The same document can be frozen
//! at any point in time and rasterized, which is how PNG and GIF output is made.
//!
//! # Pipeline overview
//!
//! 1. **Extract**: `text + GlyphSource (+ StrokeSource) -> Vec<PathRecord>`
//! 2. **Layout**: path bounds -> padded [`ViewWindow`] and [`Canvas`]
//! 3. **Time**: `PathRecord`s -> [`Timeline`] (one fixed slot per character)
//! 4. **Synthesize**: records + window + [`StyleConfig`] -> SVG ([`SignatureDocument`])
//! 5. **Rasterize** (optional): frames sampled at a fixed rate -> PNG / GIF
//!
//! [`Signature`] runs steps 1 to 3 and encodes any [`OutputFormat`].
//!
//! Fonts and stroke data are collaborators behind the [`GlyphSource`] and
//! [`StrokeSource`] traits. [`OutlineFont`] reads TrueType/OpenType data; with the
//! `remote` feature, [`HanziWriterSource`] fetches stroke data over HTTP.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod document;
mod foundation;
mod glyph;
mod layout;
mod pipeline;
mod raster;
mod style;

pub use crate::animation::ease::Ease;
pub use crate::animation::timing::{FILL_FADE_SECS, FILL_FADE_START, Timeline, TimingEntry};
pub use crate::document::paint::{IdScope, PathFilter};
pub use crate::document::synth::{RenderMode, STROKE_WIDTH, SignatureDocument};
pub use crate::document::texture::TileSpec;
pub use crate::foundation::color::{
    DEFAULT_CHAR_COLORS, Rgba8, color_for, normalize_hex, parse_hex, rainbow_colors,
};
pub use crate::foundation::core::{Affine, BezPath, Fps, Num, Point, Rect, Vec2, format_decimal};
pub use crate::foundation::error::{AutographError, AutographResult};
pub use crate::glyph::extract::{
    BASELINE_Y, Extraction, ORIGIN_X, PathRecord, StrokeOrigin, extract_paths,
};
pub use crate::glyph::source::{Glyph, GlyphSource, OutlineFont};
pub use crate::glyph::strokes::{
    DEFAULT_STROKE_CACHE_CAPACITY, MemoryStrokes, STROKE_EM, StrokeCache, StrokeData,
    StrokeSource, is_cjk,
};
pub use crate::layout::bounds::{Bounds, VIEW_PADDING, ViewWindow};
pub use crate::layout::canvas::Canvas;
pub use crate::pipeline::{
    OutputFormat, PLACEHOLDER_TEXT, RenderOptions, RenderedOutput, Signature,
    with_placeholder_text,
};
pub use crate::raster::export::{
    MAX_RASTER_SIDE, RasterOptions, export_gif, export_png, render_frames,
};
pub use crate::raster::sink::{FrameSink, GifSink, InMemorySink, SinkConfig};
pub use crate::raster::svg_raster::{RgbaFrame, parse_svg, rasterize_svg};
pub use crate::style::config::{
    BgMode, BgSizeMode, MIN_SPEED, PaintMode, StyleConfig, TextureKind,
};
pub use crate::style::fonts::{DEFAULT_FONT_ID, FontCatalog, FontEntry};
pub use crate::style::query::parse_color_list;
pub use crate::style::theme::Theme;

#[cfg(feature = "remote")]
pub use crate::glyph::remote::{HANZI_WRITER_DATA_URL, HanziWriterSource, fetch_font_bytes};
