use std::str::FromStr;

use crate::{
    foundation::error::AutographError,
    style::config::{PaintMode, StyleConfig, TextureKind},
};

/// Named style presets applied as partial overlays onto a [`StyleConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    /// White card, dark ink.
    Default,
    /// Ruled notebook paper.
    School,
    /// White ink on a blue grid.
    Blueprint,
    /// Neon gradient with glow on black.
    Laser,
    /// White script on red.
    Coke,
    /// Yellow marker on green with dots.
    Sprite,
    /// Yellow-to-magenta on slate with cross ticks.
    Cyber,
    /// Dark red brush on a pale rose card.
    Chinese,
    /// One palette color per character.
    Rainbow,
}

impl Theme {
    /// Every preset, in editor order.
    pub const ALL: [Theme; 9] = [
        Self::Default,
        Self::School,
        Self::Blueprint,
        Self::Laser,
        Self::Coke,
        Self::Sprite,
        Self::Cyber,
        Self::Chinese,
        Self::Rainbow,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::School => "school",
            Self::Blueprint => "blueprint",
            Self::Laser => "laser",
            Self::Coke => "coke",
            Self::Sprite => "sprite",
            Self::Cyber => "cyber",
            Self::Chinese => "chinese",
            Self::Rainbow => "rainbow",
        }
    }

    /// Overwrite the fields this preset defines; everything else is left alone.
    pub fn apply(self, cfg: &mut StyleConfig) {
        cfg.bg_transparent = false;
        cfg.stroke_enabled = true;
        cfg.use_glow = false;
        cfg.use_shadow = false;
        cfg.texture = TextureKind::None;
        cfg.fill_mode = PaintMode::Single;

        match self {
            Self::Default => {
                set_colors(cfg, "#ffffff", "#333333", "#333333");
                cfg.font = "great-vibes".to_string();
                cfg.border_radius = 12.0;
            }
            Self::School => {
                set_colors(cfg, "#ffffff", "#1e3a8a", "#1d4ed8");
                cfg.font = "dancing-script".to_string();
                cfg.border_radius = 4.0;
                set_texture(cfg, TextureKind::Lines, "#e2e8f0", Some(25.0), None);
                cfg.tex_thickness = 1.0;
            }
            Self::Blueprint => {
                set_colors(cfg, "#1e3a8a", "#ffffff", "#ffffff");
                cfg.font = "sacramento".to_string();
                cfg.border_radius = 0.0;
                set_texture(cfg, TextureKind::Grid, "#ffffff", Some(30.0), Some(0.2));
            }
            Self::Laser => {
                set_colors(cfg, "#000000", "#00ffff", "#00ffff");
                cfg.fill_mode = PaintMode::Gradient;
                cfg.fill2 = "#ff00ff".to_string();
                cfg.font = "sacramento".to_string();
                cfg.use_glow = true;
                cfg.use_shadow = true;
                cfg.border_radius = 0.0;
                set_texture(cfg, TextureKind::Grid, "#333333", None, None);
            }
            Self::Coke => {
                set_colors(cfg, "#f40009", "#ffffff", "#ffffff");
                cfg.font = "lobster".to_string();
                cfg.use_shadow = true;
                cfg.border_radius = 20.0;
            }
            Self::Sprite => {
                set_colors(cfg, "#008b47", "#f8cd2b", "#f8cd2b");
                cfg.font = "permanent-marker".to_string();
                cfg.use_shadow = true;
                cfg.border_radius = 8.0;
                set_texture(cfg, TextureKind::Dots, "#ffffff", Some(10.0), Some(0.2));
            }
            Self::Cyber => {
                set_colors(cfg, "#0f172a", "#facc15", "#facc15");
                cfg.fill_mode = PaintMode::Gradient;
                cfg.fill2 = "#d946ef".to_string();
                cfg.font = "pacifico".to_string();
                cfg.use_glow = true;
                cfg.use_shadow = true;
                cfg.border_radius = 4.0;
                set_texture(cfg, TextureKind::Cross, "#334155", Some(40.0), None);
            }
            Self::Chinese => {
                set_colors(cfg, "#fff1f2", "#7f1d1d", "#991b1b");
                cfg.font = "ma-shan-zheng".to_string();
                cfg.border_radius = 4.0;
            }
            Self::Rainbow => {
                set_colors(cfg, "#ffffff", "#333333", "#333333");
                cfg.fill_mode = PaintMode::Multi;
                cfg.char_colors.clear();
                cfg.font = "dancing-script".to_string();
                cfg.border_radius = 16.0;
            }
        }
    }
}

impl FromStr for Theme {
    type Err = AutographError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| AutographError::validation(format!("unknown theme '{s}'")))
    }
}

fn set_colors(cfg: &mut StyleConfig, bg: &str, stroke: &str, fill: &str) {
    cfg.bg = bg.to_string();
    cfg.stroke = stroke.to_string();
    cfg.fill1 = fill.to_string();
}

fn set_texture(
    cfg: &mut StyleConfig,
    kind: TextureKind,
    color: &str,
    size: Option<f64>,
    opacity: Option<f64>,
) {
    cfg.texture = kind;
    cfg.tex_color = color.to_string();
    if let Some(size) = size {
        cfg.tex_size = size;
    }
    if let Some(opacity) = opacity {
        cfg.tex_opacity = opacity;
    }
}
