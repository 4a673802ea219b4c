//! Layered SVG document for a signature.
//!
//! Layer order, back to front: background card, texture overlay, paths. Every
//! identifier the document declares goes through an [`IdScope`], so several
//! documents can be inlined into one page.

use std::fmt::Write;

use crate::{
    animation::{
        ease::Ease,
        timing::{FILL_FADE_SECS, Timeline, TimingEntry},
    },
    document::{
        paint::{
            IdScope, PathFilter, background_paint, escape_attr, fill_paint, stroke_paint,
            write_filters, write_gradients,
        },
        texture::TileSpec,
    },
    foundation::{
        core::{Num, format_decimal},
        error::{AutographError, AutographResult},
    },
    glyph::extract::{BASELINE_Y, PathRecord},
    layout::{bounds::ViewWindow, canvas::Canvas},
    style::config::StyleConfig,
};

/// Stroke width of outline paths, in document units.
pub const STROKE_WIDTH: f64 = 2.0;

// Hanzi stroke data is y-up with its baseline 900 units above the bottom edge.
const STROKE_ASCENT: f64 = 900.0;
// Stroke scales are small, three decimals would stretch the 1024 cell visibly.
const TRANSFORM_DECIMALS: usize = 6;

/// How path animation is expressed in the document.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RenderMode {
    /// CSS keyframes reveal each path in turn.
    #[default]
    Animated,
    /// Final frame: every path fully drawn and filled, no keyframes.
    Static,
    /// Frozen state of the animation at the given number of seconds.
    At(f64),
}

/// Everything needed to synthesize one document.
#[derive(Clone, Copy, Debug)]
pub struct SignatureDocument<'a> {
    /// Records in character-then-stroke order.
    pub paths: &'a [PathRecord],
    /// Padded text window.
    pub view: ViewWindow,
    /// Sanitized style.
    pub style: &'a StyleConfig,
    /// Timing aligned with `paths`.
    pub timeline: &'a Timeline,
}

impl<'a> SignatureDocument<'a> {
    /// Canvas the document is laid out on.
    pub fn canvas(&self) -> Canvas {
        Canvas::fit(self.view, self.style)
    }

    /// Render the document. Output only depends on the inputs, `mode` and `ids`.
    ///
    /// An empty record list has nothing to animate and always renders statically.
    #[tracing::instrument(skip_all, fields(paths = self.paths.len(), mode = ?mode))]
    pub fn synthesize(&self, mode: RenderMode, ids: &IdScope) -> AutographResult<String> {
        let mode = if self.paths.is_empty() || self.timeline.is_empty() {
            match mode {
                RenderMode::Animated => RenderMode::Static,
                other => other,
            }
        } else {
            mode
        };

        let mut svg = String::new();
        self.write_document(&mut svg, mode, ids)
            .map_err(|_| AutographError::encode("failed to write svg document"))?;
        tracing::debug!(bytes = svg.len(), "synthesized document");
        Ok(svg)
    }

    fn write_document(&self, out: &mut String, mode: RenderMode, ids: &IdScope) -> std::fmt::Result {
        let style = self.style;
        let canvas = self.canvas();
        let tile = TileSpec::from_style(style);

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}" style="display: block; max-width: 100%; height: auto;">"#,
            Num(canvas.view.x),
            Num(canvas.view.y),
            Num(canvas.width),
            Num(canvas.height),
            Num(canvas.width),
            Num(canvas.height),
        )?;

        writeln!(out, "<defs>")?;
        write_gradients(out, style, ids)?;
        write_filters(out, style, ids)?;
        if let Some(tile) = &tile {
            tile.write_pattern(out, ids)?;
        }
        if mode == RenderMode::Animated {
            writeln!(out, "<style>")?;
            for (i, record) in self.paths.iter().enumerate() {
                let reveal = if has_dash(record.native_len()) {
                    "stroke-dashoffset: 0"
                } else {
                    "stroke-opacity: 1"
                };
                writeln!(
                    out,
                    "@keyframes {} {{ to {{ {reveal}; }} }}",
                    ids.id(&draw_name(i))
                )?;
                writeln!(
                    out,
                    "@keyframes {} {{ to {{ fill-opacity: 1; }} }}",
                    ids.id(&fade_name(i))
                )?;
            }
            writeln!(out, "</style>")?;
        }
        writeln!(out, "</defs>")?;

        let card = canvas.card_rect();
        if !style.bg_transparent {
            writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="{}"/>"#,
                Num(card.x0),
                Num(card.y0),
                Num(card.width()),
                Num(card.height()),
                escape_attr(&background_paint(style, ids)),
                Num(style.border_radius),
            )?;
        }

        if let Some(tile) = &tile {
            // Without a painted card the overlay covers the whole canvas.
            let area = if style.bg_transparent {
                canvas.rect()
            } else {
                card
            };
            let pad = canvas.texture_padding(style);
            let name = tile.name();
            writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" class="texture-overlay {name}" pointer-events="none"/>"#,
                Num(area.x0 + pad),
                Num(area.y0 + pad),
                Num((area.width() - pad * 2.0).max(0.0)),
                Num((area.height() - pad * 2.0).max(0.0)),
                ids.url(&name),
            )?;
        }

        let offset = canvas.text_offset();
        writeln!(
            out,
            r#"<g transform="translate({}, {})">"#,
            Num(offset.x),
            Num(offset.y)
        )?;
        let filter = PathFilter::for_style(style).map(|f| f.url(ids));
        for (i, record) in self.paths.iter().enumerate() {
            self.write_path(out, i, record, filter.as_deref(), mode, ids)?;
        }
        writeln!(out, "</g>")?;
        writeln!(out, "</svg>")
    }

    fn write_path(
        &self,
        out: &mut String,
        i: usize,
        record: &PathRecord,
        filter: Option<&str>,
        mode: RenderMode,
        ids: &IdScope,
    ) -> std::fmt::Result {
        let style = self.style;
        let (transform, unit) = match &record.stroke {
            Some(origin) if origin.scale() > 0.0 => {
                let s = origin.scale();
                let tx = origin.x;
                let ty = BASELINE_Y - origin.font_size + STROKE_ASCENT * s;
                (
                    Some(format!(
                        "translate({}, {}) scale({}, {})",
                        Num(tx),
                        format_decimal(ty, TRANSFORM_DECIMALS),
                        format_decimal(s, TRANSFORM_DECIMALS),
                        format_decimal(-s, TRANSFORM_DECIMALS)
                    )),
                    s,
                )
            }
            _ => (None, 1.0),
        };
        // Dash lengths and stroke width live in the path's own coordinate space.
        let dash = record.native_len();
        let direction = if record.is_stroke() { -1.0 } else { 1.0 };
        let stroke_width = if style.stroke_enabled {
            STROKE_WIDTH / unit
        } else {
            0.0
        };

        write!(
            out,
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round""#,
            escape_attr(&record.d),
            escape_attr(&fill_paint(style, record.index, ids)),
            escape_attr(&stroke_paint(style, record.index, ids)),
            Num(stroke_width),
        )?;
        if let Some(filter) = filter {
            write!(out, r#" filter="{filter}""#)?;
        }
        if let Some(transform) = &transform {
            write!(out, r#" transform="{transform}""#)?;
        }
        write!(out, r#" class="sig-path""#)?;

        let timing = self.timeline.entry(i);
        match mode {
            RenderMode::Animated => {
                // A zero dash array means "solid", so empty paths are hidden instead.
                let hidden = if has_dash(dash) {
                    format!(
                        "stroke-dasharray: {}; stroke-dashoffset: {};",
                        Num(dash),
                        Num(dash * direction)
                    )
                } else {
                    "stroke-opacity: 0;".to_string()
                };
                write!(
                    out,
                    r#" style="{hidden} fill-opacity: 0; animation: {draw} {dur}s {ease} forwards {delay}s, {fade} {fade_dur}s {ease} forwards {fade_delay}s;""#,
                    draw = ids.id(&draw_name(i)),
                    fade = ids.id(&fade_name(i)),
                    dur = Num(timing.duration),
                    delay = Num(timing.delay),
                    fade_dur = Num(FILL_FADE_SECS),
                    fade_delay = Num(timing.fill_delay()),
                    ease = Ease::DRAW.css(),
                )?;
            }
            RenderMode::Static => {
                write!(out, r#" stroke-dashoffset="0" fill-opacity="1""#)?;
            }
            RenderMode::At(t) => write_frozen(out, &timing, t, dash, direction)?,
        }
        writeln!(out, "/>")
    }
}

fn write_frozen(
    out: &mut String,
    timing: &TimingEntry,
    t: f64,
    dash: f64,
    direction: f64,
) -> std::fmt::Result {
    let drawn = timing.draw_progress(t, Ease::DRAW);
    let fill = timing.fill_opacity(t, Ease::DRAW);
    if drawn >= 1.0 {
        write!(out, r#" stroke-dashoffset="0""#)?;
    } else if !has_dash(dash) {
        write!(out, r#" stroke-opacity="{}""#, Num(drawn))?;
    } else {
        write!(
            out,
            r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
            Num(dash),
            Num(dash * (1.0 - drawn) * direction),
        )?;
    }
    write!(out, r#" fill-opacity="{}""#, Num(fill))
}

fn has_dash(len: f64) -> bool {
    len.is_finite() && len > 0.0
}

fn draw_name(i: usize) -> String {
    format!("draw-{i}")
}

fn fade_name(i: usize) -> String {
    format!("fill-fade-{i}")
}

#[cfg(test)]
#[path = "../../tests/unit/document/synth.rs"]
mod tests;
