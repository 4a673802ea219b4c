//! Repeating tile patterns painted over the background card.

use std::fmt::Write;

use crate::{
    document::paint::{IdScope, escape_attr},
    foundation::core::Num,
    style::config::{StyleConfig, TextureKind},
};

/// Parameters of one tile pattern, in document units.
#[derive(Clone, Debug, PartialEq)]
pub struct TileSpec {
    /// Motif drawn in each tile. Never [`TextureKind::None`].
    pub kind: TextureKind,
    /// Line and dot color.
    pub color: String,
    /// Tile side length.
    pub size: f64,
    /// Line width; dots use 1.5x this as radius.
    pub thickness: f64,
    /// Stroke or fill opacity of the motif.
    pub opacity: f64,
}

impl TileSpec {
    /// Tile for the texture configured on `style`, if any.
    pub fn from_style(style: &StyleConfig) -> Option<Self> {
        if style.texture == TextureKind::None {
            return None;
        }
        Some(Self {
            kind: style.texture,
            color: style.tex_color.clone(),
            size: style.tex_size,
            thickness: style.tex_thickness,
            opacity: style.tex_opacity,
        })
    }

    /// Identifier stem shared by the pattern id and the overlay class.
    pub fn name(&self) -> String {
        format!("texture-{}", self.kind)
    }

    /// Write the `<pattern>` definition scoped by `ids`.
    pub fn write_pattern(&self, out: &mut String, ids: &IdScope) -> std::fmt::Result {
        let s = self.size;
        let half = Num(s / 2.0);
        let c = escape_attr(&self.color);
        let o = Num(self.opacity);
        let t = Num(self.thickness);
        let line = format!(r#"stroke="{c}" stroke-width="{t}" stroke-opacity="{o}""#);

        writeln!(
            out,
            r#"<pattern id="{}" x="0" y="0" width="{}" height="{}" patternUnits="userSpaceOnUse">"#,
            ids.id(&self.name()),
            Num(s),
            Num(s),
        )?;
        match self.kind {
            TextureKind::None => {}
            TextureKind::Grid => {
                writeln!(
                    out,
                    r#"<path d="M {} 0 L 0 0 0 {}" fill="none" {line}/>"#,
                    Num(s),
                    Num(s)
                )?;
            }
            TextureKind::Dots => {
                writeln!(
                    out,
                    r#"<circle cx="{half}" cy="{half}" r="{}" fill="{c}" fill-opacity="{o}"/>"#,
                    Num(self.thickness * 1.5)
                )?;
            }
            TextureKind::Lines => {
                writeln!(out, r#"<path d="M 0 {half} L {} {half}" {line}/>"#, Num(s))?;
            }
            TextureKind::Cross => {
                let (a, b) = (Num(s / 4.0), Num(s * 0.75));
                writeln!(out, r#"<path d="M {a} {a} L {b} {b} M {b} {a} L {a} {b}" {line}/>"#)?;
            }
            TextureKind::Tianzige => {
                writeln!(
                    out,
                    r#"<rect width="{}" height="{}" fill="none" {line}/>"#,
                    Num(s),
                    Num(s)
                )?;
                writeln!(
                    out,
                    r#"<path d="M{half} 0 L{half} {} M0 {half} L{} {half}" {line} stroke-dasharray="3,3"/>"#,
                    Num(s),
                    Num(s)
                )?;
            }
            TextureKind::Mizige => {
                writeln!(
                    out,
                    r#"<rect width="{}" height="{}" fill="none" {line}/>"#,
                    Num(s),
                    Num(s)
                )?;
                writeln!(
                    out,
                    r#"<path d="M0 0 L{s} {s} M{s} 0 L0 {s} M{half} 0 L{half} {s} M0 {half} L{s} {half}" {line} stroke-dasharray="3,3"/>"#,
                    s = Num(s),
                )?;
            }
        }
        writeln!(out, "</pattern>")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/texture.rs"]
mod tests;
