//! Document-scoped identifiers and paint resolution for gradients, filters and paths.

use std::{borrow::Cow, fmt::Write};

use crate::{
    foundation::color::color_for,
    style::config::{BgMode, PaintMode, StyleConfig},
};

pub(crate) const GRAD_FILL: &str = "grad-fill";
pub(crate) const GRAD_STROKE: &str = "grad-stroke";
pub(crate) const BG_GRAD: &str = "bg-grad";
pub(crate) const GLOW: &str = "glow";
pub(crate) const SHADOW: &str = "shadow";

/// Prefix applied to every identifier a document declares.
///
/// Characters outside `[A-Za-z0-9_-]` are replaced with `_`, and a prefix that
/// starts with a digit or `-` gets a leading `_`, so that the prefixed names
/// stay valid XML ids and CSS identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdScope {
    prefix: String,
}

impl IdScope {
    /// Scope with the given prefix. An empty prefix is allowed.
    pub fn new(prefix: &str) -> Self {
        let mut sanitized = String::with_capacity(prefix.len() + 1);
        if prefix
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '-')
        {
            sanitized.push('_');
        }
        sanitized.extend(prefix.chars().map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        }));
        Self { prefix: sanitized }
    }

    /// The sanitized prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Scoped identifier for `name`.
    pub fn id(&self, name: &str) -> String {
        format!("{}{name}", self.prefix)
    }

    /// `url(#..)` reference to the scoped identifier for `name`.
    pub fn url(&self, name: &str) -> String {
        format!("url(#{}{name})", self.prefix)
    }
}

/// The single filter applied to path elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFilter {
    /// Gaussian blur merged under the source graphic.
    Glow,
    /// Offset drop shadow.
    Shadow,
}

impl PathFilter {
    /// Filter for `style`. With both flags set the shadow wins.
    pub fn for_style(style: &StyleConfig) -> Option<Self> {
        if style.use_shadow {
            Some(Self::Shadow)
        } else if style.use_glow {
            Some(Self::Glow)
        } else {
            None
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Glow => GLOW,
            Self::Shadow => SHADOW,
        }
    }

    /// `url(#..)` reference inside `ids`.
    pub fn url(self, ids: &IdScope) -> String {
        ids.url(self.name())
    }
}

/// Fill paint for the record drawn from character `index`.
pub fn fill_paint(style: &StyleConfig, index: usize, ids: &IdScope) -> String {
    match style.fill_mode {
        PaintMode::Single => style.fill1.clone(),
        PaintMode::Gradient => ids.url(GRAD_FILL),
        PaintMode::Multi => color_for(&style.char_colors, index, &style.fill1).to_string(),
    }
}

/// Stroke paint for the record drawn from character `index`, `none` when disabled.
pub fn stroke_paint(style: &StyleConfig, index: usize, ids: &IdScope) -> String {
    if !style.stroke_enabled {
        return "none".to_string();
    }
    match style.stroke_mode {
        PaintMode::Single => style.stroke.clone(),
        PaintMode::Gradient => ids.url(GRAD_STROKE),
        PaintMode::Multi => color_for(&style.stroke_char_colors, index, &style.stroke).to_string(),
    }
}

/// `true` when the background rectangle is painted with a gradient.
pub fn bg_uses_gradient(style: &StyleConfig) -> bool {
    !style.bg_transparent && style.bg_mode == BgMode::Gradient
}

/// Paint for the background rectangle.
pub fn background_paint(style: &StyleConfig, ids: &IdScope) -> String {
    if bg_uses_gradient(style) {
        ids.url(BG_GRAD)
    } else {
        style.bg.clone()
    }
}

/// Write the gradient definitions for every layer that is in gradient mode.
pub fn write_gradients(out: &mut String, style: &StyleConfig, ids: &IdScope) -> std::fmt::Result {
    if style.fill_mode == PaintMode::Gradient {
        write_linear_gradient(out, &ids.id(GRAD_FILL), &style.fill1, &style.fill2)?;
    }
    if style.stroke_enabled && style.stroke_mode == PaintMode::Gradient {
        write_linear_gradient(out, &ids.id(GRAD_STROKE), &style.stroke, &style.stroke2)?;
    }
    if bg_uses_gradient(style) {
        write_linear_gradient(out, &ids.id(BG_GRAD), &style.bg, &style.bg2)?;
    }
    Ok(())
}

fn write_linear_gradient(out: &mut String, id: &str, from: &str, to: &str) -> std::fmt::Result {
    writeln!(
        out,
        r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="0%"><stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></linearGradient>"#,
        escape_attr(from),
        escape_attr(to),
    )
}

/// Write the glow and shadow filter definitions for the flags that are set.
pub fn write_filters(out: &mut String, style: &StyleConfig, ids: &IdScope) -> std::fmt::Result {
    if style.use_glow {
        writeln!(
            out,
            r#"<filter id="{}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="3.5" result="coloredBlur"/><feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
            ids.id(GLOW),
        )?;
    }
    if style.use_shadow {
        writeln!(
            out,
            r#"<filter id="{}" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow dx="4" dy="4" stdDeviation="3" flood-opacity="0.6"/></filter>"#,
            ids.id(SHADOW),
        )?;
    }
    Ok(())
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "../../tests/unit/document/paint.rs"]
mod tests;
