//! End-to-end signature rendering: extraction, layout, timing, and output encoding.

use std::{fmt, str::FromStr};

use crate::{
    animation::timing::Timeline,
    document::{
        paint::IdScope,
        synth::{RenderMode, SignatureDocument},
    },
    foundation::error::{AutographError, AutographResult},
    glyph::{
        extract::{Extraction, PathRecord, extract_paths},
        source::GlyphSource,
        strokes::StrokeSource,
    },
    layout::bounds::ViewWindow,
    raster::export::{RasterOptions, export_gif, export_png},
    style::config::StyleConfig,
};

/// Text rendered when a request carries none.
pub const PLACEHOLDER_TEXT: &str = "Demo";

/// Replace empty (or whitespace-only) text with [`PLACEHOLDER_TEXT`].
pub fn with_placeholder_text(mut style: StyleConfig) -> StyleConfig {
    if style.text.trim().is_empty() {
        style.text = PLACEHOLDER_TEXT.to_string();
    }
    style
}

/// Encoded output kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Animated (or static) SVG document.
    #[default]
    Svg,
    /// Path records and view window as JSON.
    Json,
    /// Single PNG of the finished signature.
    Png,
    /// Looping animated GIF.
    Gif,
}

impl OutputFormat {
    /// All formats, in documentation order.
    pub const ALL: [OutputFormat; 4] = [Self::Svg, Self::Json, Self::Png, Self::Gif];

    /// Lowercase name, also used as the file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }

    /// MIME type of the encoded bytes.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Json => "application/json",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AutographError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AutographError::validation(format!("unknown output format '{s}'")))
    }
}

/// Encoded bytes plus the MIME type to serve them with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedOutput {
    /// Encoded document or image.
    pub bytes: Vec<u8>,
    /// MIME type matching `bytes`.
    pub mime: &'static str,
}

/// Per-call rendering options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Emit SVG output without animation.
    pub static_svg: bool,
    /// Prefix for every identifier in the document.
    pub id_prefix: String,
    /// Raster export settings for PNG and GIF.
    pub raster: RasterOptions,
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    paths: &'a [PathRecord],
    #[serde(rename = "viewBox")]
    view_box: ViewWindow,
}

/// Extracted, laid out and timed signature, ready to encode.
#[derive(Clone, Debug)]
pub struct Signature {
    style: StyleConfig,
    extraction: Extraction,
    view: ViewWindow,
    timeline: Timeline,
}

impl Signature {
    /// Run extraction, layout and timing for `style.text`.
    ///
    /// The style is sanitized first. Stroke lookups that fail fall back to glyph
    /// outlines, so this never fails; an empty record list is checked by
    /// [`Signature::render`].
    #[tracing::instrument(skip_all, fields(text = %style.text, font = %style.font))]
    pub fn build(
        glyphs: &dyn GlyphSource,
        strokes: Option<&dyn StrokeSource>,
        style: &StyleConfig,
    ) -> Self {
        let style = style.sanitized();
        let extraction = extract_paths(glyphs, strokes, &style);
        let view = extraction.view_window();
        let timeline = Timeline::allocate(&extraction.paths, style.speed);
        tracing::debug!(
            paths = extraction.paths.len(),
            duration = timeline.total,
            "built signature"
        );
        Self {
            style,
            extraction,
            view,
            timeline,
        }
    }

    /// Sanitized style the signature was built with.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Path records in character-then-stroke order.
    pub fn paths(&self) -> &[PathRecord] {
        &self.extraction.paths
    }

    /// Padded text window.
    pub fn view(&self) -> ViewWindow {
        self.view
    }

    /// Timing aligned with [`Signature::paths`].
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Total animation length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.timeline.total
    }

    /// Document view over this signature.
    pub fn document(&self) -> SignatureDocument<'_> {
        SignatureDocument {
            paths: &self.extraction.paths,
            view: self.view,
            style: &self.style,
            timeline: &self.timeline,
        }
    }

    /// SVG markup in `mode`.
    pub fn to_svg(&self, mode: RenderMode, id_prefix: &str) -> AutographResult<String> {
        self.document().synthesize(mode, &IdScope::new(id_prefix))
    }

    /// `{"paths": [...], "viewBox": {...}}`.
    pub fn to_json(&self) -> AutographResult<String> {
        let out = JsonOutput {
            paths: self.paths(),
            view_box: self.view,
        };
        serde_json::to_string(&out)
            .map_err(|e| AutographError::encode(format!("serialize json: {e}")))
    }

    /// Encode in `format`. Fails with a validation error when no paths were produced.
    pub fn render(
        &self,
        format: OutputFormat,
        opts: &RenderOptions,
    ) -> AutographResult<RenderedOutput> {
        if self.paths().is_empty() {
            return Err(AutographError::validation("no paths generated"));
        }
        let ids = IdScope::new(&opts.id_prefix);
        let bytes = match format {
            OutputFormat::Svg => {
                let mode = if opts.static_svg {
                    RenderMode::Static
                } else {
                    RenderMode::Animated
                };
                self.document().synthesize(mode, &ids)?.into_bytes()
            }
            OutputFormat::Json => self.to_json()?.into_bytes(),
            OutputFormat::Png => export_png(&self.document(), &ids, &opts.raster)?,
            OutputFormat::Gif => export_gif(&self.document(), &ids, &opts.raster)?,
        };
        Ok(RenderedOutput {
            bytes,
            mime: format.mime(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
