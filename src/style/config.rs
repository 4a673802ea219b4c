use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::{
    color::{normalize_hex, rainbow_colors},
    error::AutographError,
};

/// How a fill or stroke layer is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintMode {
    /// One flat color.
    #[default]
    Single,
    /// Horizontal linear gradient between primary and secondary color.
    Gradient,
    /// Per-character color list with fallback to the primary color.
    Multi,
}

/// Background fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BgMode {
    /// Flat background color.
    #[default]
    Solid,
    /// Horizontal linear gradient between `bg` and `bg2`.
    Gradient,
}

/// Background card sizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BgSizeMode {
    /// Card matches the text bounds.
    #[default]
    Auto,
    /// Card uses `bg_width` x `bg_height`.
    Custom,
}

/// Decorative tile pattern drawn over the background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureKind {
    /// No texture.
    #[default]
    None,
    /// Crosshair grid lines.
    Grid,
    /// Centered dots.
    Dots,
    /// Horizontal rules.
    Lines,
    /// Diagonal ticks.
    Cross,
    /// Bordered box with a dashed center cross (田字格).
    Tianzige,
    /// Tianzige plus dashed diagonals (米字格).
    Mizige,
}

impl TextureKind {
    /// Every tile kind, `None` included.
    pub const ALL: [TextureKind; 7] = [
        Self::None,
        Self::Grid,
        Self::Dots,
        Self::Lines,
        Self::Cross,
        Self::Tianzige,
        Self::Mizige,
    ];

    /// Stable lowercase name, also used in pattern identifiers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Grid => "grid",
            Self::Dots => "dots",
            Self::Lines => "lines",
            Self::Cross => "cross",
            Self::Tianzige => "tianzige",
            Self::Mizige => "mizige",
        }
    }
}

impl fmt::Display for TextureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextureKind {
    type Err = AutographError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| AutographError::validation(format!("unknown texture '{s}'")))
    }
}

impl FromStr for PaintMode {
    type Err = AutographError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "gradient" => Ok(Self::Gradient),
            "multi" => Ok(Self::Multi),
            _ => Err(AutographError::validation(format!(
                "unknown paint mode '{s}'"
            ))),
        }
    }
}

impl PaintMode {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Gradient => "gradient",
            Self::Multi => "multi",
        }
    }
}

/// Per-request rendering configuration.
///
/// Every pipeline stage treats this as read-only. Call [`StyleConfig::sanitized`]
/// on untrusted values before handing them to the pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Text to render.
    pub text: String,
    /// Font identifier, see [`crate::FontCatalog`].
    pub font: String,
    /// Font size in document units.
    pub font_size: f64,
    /// Animation speed factor; one character takes `1 / speed` seconds.
    pub speed: f64,
    /// Extra spacing per character, in percent of each glyph's advance (-100..=100).
    pub char_spacing: f64,

    /// Primary background color.
    pub bg: String,
    /// Secondary background color for gradient mode.
    pub bg2: String,
    /// Background fill mode.
    pub bg_mode: BgMode,
    /// Skip the background card entirely.
    pub bg_transparent: bool,
    /// Corner radius of the background card.
    pub border_radius: f64,
    /// Inset of the texture overlay from the card edges.
    pub card_padding: f64,
    /// Background card sizing mode.
    pub bg_size_mode: BgSizeMode,
    /// Custom card width (custom sizing only).
    pub bg_width: Option<f64>,
    /// Custom card height (custom sizing only).
    pub bg_height: Option<f64>,

    /// Primary outline color.
    pub stroke: String,
    /// Draw glyph outlines.
    pub stroke_enabled: bool,
    /// Outline paint mode.
    pub stroke_mode: PaintMode,
    /// Secondary outline color for gradient mode.
    pub stroke2: String,
    /// Per-character outline colors for multi mode.
    pub stroke_char_colors: Vec<String>,

    /// Body paint mode.
    pub fill_mode: PaintMode,
    /// Primary body color.
    pub fill1: String,
    /// Secondary body color for gradient mode.
    pub fill2: String,
    /// Per-character body colors for multi mode.
    pub char_colors: Vec<String>,

    /// Tile pattern kind.
    pub texture: TextureKind,
    /// Tile stroke / dot color.
    pub tex_color: String,
    /// Tile edge length in document units.
    pub tex_size: f64,
    /// Tile line thickness.
    pub tex_thickness: f64,
    /// Tile opacity in 0..=1.
    pub tex_opacity: f64,

    /// Gaussian glow around paths.
    pub use_glow: bool,
    /// Drop shadow under paths. Wins over glow when both are set.
    pub use_shadow: bool,

    /// Draw CJK characters stroke by stroke from external stroke data.
    pub use_hanzi_data: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            text: "yunique".to_string(),
            font: crate::style::fonts::DEFAULT_FONT_ID.to_string(),
            font_size: 120.0,
            speed: 1.0,
            char_spacing: 0.0,
            bg: "#ffffff".to_string(),
            bg2: "#e2e8f0".to_string(),
            bg_mode: BgMode::Solid,
            bg_transparent: false,
            border_radius: 12.0,
            card_padding: 0.0,
            bg_size_mode: BgSizeMode::Auto,
            bg_width: None,
            bg_height: None,
            stroke: "#333333".to_string(),
            stroke_enabled: true,
            stroke_mode: PaintMode::Single,
            stroke2: "#ec4899".to_string(),
            stroke_char_colors: Vec::new(),
            fill_mode: PaintMode::Single,
            fill1: "#333333".to_string(),
            fill2: "#ec4899".to_string(),
            char_colors: Vec::new(),
            texture: TextureKind::None,
            tex_color: "#cbd5e1".to_string(),
            tex_size: 20.0,
            tex_thickness: 1.0,
            tex_opacity: 0.5,
            use_glow: false,
            use_shadow: false,
            use_hanzi_data: false,
        }
    }
}

/// Lower bound for the speed factor so slot durations stay finite.
pub const MIN_SPEED: f64 = 0.01;

impl StyleConfig {
    /// Return a copy with every numeric field finite and in range and every color
    /// canonicalized. Invalid values fall back to [`StyleConfig::default`].
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        let mut out = self.clone();

        out.font_size = positive_or(self.font_size, d.font_size);
        out.speed = positive_or(self.speed, d.speed).max(MIN_SPEED);
        out.char_spacing = finite_or(self.char_spacing, 0.0).clamp(-100.0, 100.0);
        out.border_radius = finite_or(self.border_radius, d.border_radius).max(0.0);
        out.card_padding = finite_or(self.card_padding, 0.0).max(0.0);
        out.bg_width = self.bg_width.filter(|v| v.is_finite() && *v > 0.0);
        out.bg_height = self.bg_height.filter(|v| v.is_finite() && *v > 0.0);
        out.tex_size = positive_or(self.tex_size, d.tex_size);
        out.tex_thickness = positive_or(self.tex_thickness, d.tex_thickness);
        out.tex_opacity = finite_or(self.tex_opacity, d.tex_opacity).clamp(0.0, 1.0);

        out.bg = normalize_hex(&self.bg).unwrap_or(d.bg);
        out.bg2 = normalize_hex(&self.bg2).unwrap_or(d.bg2);
        out.stroke = normalize_hex(&self.stroke).unwrap_or(d.stroke);
        out.stroke2 = normalize_hex(&self.stroke2).unwrap_or(d.stroke2);
        out.fill1 = normalize_hex(&self.fill1).unwrap_or(d.fill1);
        out.fill2 = normalize_hex(&self.fill2).unwrap_or(d.fill2);
        out.tex_color = normalize_hex(&self.tex_color).unwrap_or(d.tex_color);
        // Unparseable entries become empty and resolve to the primary color.
        out.char_colors = normalize_list(&self.char_colors);
        out.stroke_char_colors = normalize_list(&self.stroke_char_colors);

        out
    }

    /// Spacing as a fraction of each glyph's advance, clamped to `[-1, 1]`.
    pub fn char_spacing_factor(&self) -> f64 {
        (finite_or(self.char_spacing, 0.0) / 100.0).clamp(-1.0, 1.0)
    }

    /// Custom card size when custom sizing is active and both sides are set.
    pub fn custom_card(&self) -> Option<(f64, f64)> {
        if self.bg_size_mode != BgSizeMode::Custom {
            return None;
        }
        match (self.bg_width, self.bg_height) {
            (Some(w), Some(h)) if w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0 => {
                Some((w, h))
            }
            _ => None,
        }
    }

    /// Fill the per-character color lists from the rainbow palette when a layer is
    /// in multi mode and has no colors of its own. The stroke list reuses the fill
    /// list when one exists.
    pub fn backfill_char_colors(&mut self) {
        let len = self.text.chars().count();
        if self.fill_mode == PaintMode::Multi && self.char_colors.is_empty() {
            self.char_colors = rainbow_colors(len);
        }
        if self.stroke_mode == PaintMode::Multi && self.stroke_char_colors.is_empty() {
            self.stroke_char_colors = if self.char_colors.is_empty() {
                rainbow_colors(len)
            } else {
                self.char_colors.clone()
            };
        }
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

fn positive_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { fallback }
}

fn normalize_list(list: &[String]) -> Vec<String> {
    list.iter()
        .map(|c| normalize_hex(c).unwrap_or_default())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/style/config.rs"]
mod tests;
