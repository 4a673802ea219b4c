//! Query-string boundary: request parameters in, [`StyleConfig`] out, and back.

use std::collections::HashMap;

use url::form_urlencoded;

use crate::{
    foundation::color::color_for,
    style::{
        config::{BgMode, BgSizeMode, PaintMode, StyleConfig, TextureKind},
        theme::Theme,
    },
};

impl StyleConfig {
    /// Build a sanitized config from a URL query string (with or without the
    /// leading `?`). Unknown keys and unparseable values are ignored.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = HashMap::<String, String>::new();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            params.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
        let get = |k: &str| params.get(k).map(String::as_str).filter(|v| !v.is_empty());

        let mut cfg = StyleConfig::default();
        if let Some(theme) = get("theme").and_then(|t| t.parse::<Theme>().ok()) {
            theme.apply(&mut cfg);
        }

        if let Some(text) = get("text") {
            cfg.text = text.to_string();
        }
        if let Some(font) = get("font") {
            cfg.font = font.to_string();
        }
        if let Some(v) = get("fontSize").and_then(parse_number) {
            cfg.font_size = v;
        }
        if let Some(v) = get("speed").and_then(parse_number) {
            cfg.speed = v;
        }
        if let Some(v) = get("charSpacing").and_then(parse_number) {
            cfg.char_spacing = v;
        }

        if let Some(mode) = get("fill").and_then(|v| v.parse::<PaintMode>().ok()) {
            cfg.fill_mode = mode;
        }
        if let Some(c) = get("fill1") {
            cfg.fill1 = with_hash(c);
        }
        if let Some(c) = get("fill2") {
            cfg.fill2 = with_hash(c);
        }
        if let Some(colors) = get("colors").map(parse_color_list).filter(|c| !c.is_empty()) {
            cfg.char_colors = colors;
            cfg.fill_mode = PaintMode::Multi;
        }

        if let Some(c) = get("stroke") {
            if c == "none" {
                cfg.stroke_enabled = false;
            } else {
                cfg.stroke_enabled = true;
                cfg.stroke = with_hash(c);
            }
        }
        if let Some(c) = get("stroke2") {
            cfg.stroke2 = with_hash(c);
        }
        if let Some(mode) = get("strokeMode").and_then(|v| v.parse::<PaintMode>().ok()) {
            cfg.stroke_mode = mode;
        }
        if let Some(colors) = get("strokeColors")
            .map(parse_color_list)
            .filter(|c| !c.is_empty())
        {
            cfg.stroke_char_colors = colors;
            cfg.stroke_mode = PaintMode::Multi;
        }

        if let Some(bg) = get("bg") {
            if bg == "transparent" {
                cfg.bg_transparent = true;
            } else {
                cfg.bg_transparent = false;
                cfg.bg = with_hash(bg);
            }
        }
        if let Some(c) = get("bg2") {
            cfg.bg2 = with_hash(c);
        }
        match get("bgMode") {
            Some("solid") => cfg.bg_mode = BgMode::Solid,
            Some("gradient") => cfg.bg_mode = BgMode::Gradient,
            _ => {}
        }
        match get("bgSizeMode") {
            Some("auto") => cfg.bg_size_mode = BgSizeMode::Auto,
            Some("custom") => cfg.bg_size_mode = BgSizeMode::Custom,
            _ => {}
        }
        if let Some(v) = get("bgWidth").and_then(parse_positive) {
            cfg.bg_width = Some(v);
        }
        if let Some(v) = get("bgHeight").and_then(parse_positive) {
            cfg.bg_height = Some(v);
        }
        if let Some(v) = get("borderRadius").and_then(parse_number) {
            cfg.border_radius = v;
        }
        if let Some(v) = get("cardPadding").and_then(parse_number) {
            cfg.card_padding = v;
        }

        if let Some(kind) = get("texture").and_then(|v| v.parse::<TextureKind>().ok()) {
            cfg.texture = kind;
        }
        if let Some(c) = get("texColor") {
            cfg.tex_color = with_hash(c);
        }
        if let Some(v) = get("texSize").and_then(parse_positive) {
            cfg.tex_size = v;
        }
        if let Some(v) = get("texThickness").and_then(parse_positive) {
            cfg.tex_thickness = v;
        }
        if let Some(v) = get("texOpacity").and_then(parse_number) {
            cfg.tex_opacity = v;
        }

        if let Some(v) = get("glow").and_then(parse_flag) {
            cfg.use_glow = v;
        }
        if let Some(v) = get("shadow").and_then(parse_flag) {
            cfg.use_shadow = v;
        }
        if let Some(v) = get("hanzi").and_then(parse_flag) {
            cfg.use_hanzi_data = v;
        }

        cfg.backfill_char_colors();
        cfg.sanitized()
    }

    /// Minimal query string that [`StyleConfig::from_query`] maps back to an
    /// equivalent config. Default-valued fields are omitted.
    pub fn to_query(&self) -> String {
        let defaults = StyleConfig::default();
        let mut q = form_urlencoded::Serializer::new(String::new());
        q.append_pair("text", &self.text);
        q.append_pair("font", &self.font);

        if self.font_size != defaults.font_size {
            q.append_pair("fontSize", &self.font_size.to_string());
        }
        if self.speed != defaults.speed {
            q.append_pair("speed", &self.speed.to_string());
        }
        if self.char_spacing != 0.0 {
            q.append_pair("charSpacing", &self.char_spacing.to_string());
        }
        if self.fill_mode != PaintMode::Single {
            q.append_pair("fill", self.fill_mode.as_str());
        }
        if self.texture != TextureKind::None {
            q.append_pair("texture", self.texture.as_str());
        }
        if self.bg_transparent {
            q.append_pair("bg", "transparent");
        } else if self.bg != defaults.bg {
            q.append_pair("bg", self.bg.trim_start_matches('#'));
        }
        if self.bg_size_mode == BgSizeMode::Custom {
            q.append_pair("bgSizeMode", "custom");
            if let Some(w) = self.bg_width {
                q.append_pair("bgWidth", &w.to_string());
            }
            if let Some(h) = self.bg_height {
                q.append_pair("bgHeight", &h.to_string());
            }
        }
        if self.fill_mode == PaintMode::Multi && !self.text.is_empty() {
            let colors: Vec<&str> = (0..self.text.chars().count())
                .map(|i| color_for(&self.char_colors, i, &self.fill1).trim_start_matches('#'))
                .collect();
            q.append_pair("colors", &colors.join("-"));
        }
        if self.use_hanzi_data {
            q.append_pair("hanzi", "1");
        }
        q.finish()
    }

    /// Absolute URL of the image endpoint rendering this config.
    pub fn sign_api_url(&self, origin: &str, format: Option<&str>) -> String {
        let mut query = self.to_query();
        if let Some(format) = format {
            let mut q = form_urlencoded::Serializer::new(String::new());
            q.append_pair("format", format);
            query.push('&');
            query.push_str(&q.finish());
        }
        format!("{}/api/sign?{query}", origin.trim_end_matches('/'))
    }
}

fn parse_number(v: &str) -> Option<f64> {
    v.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_positive(v: &str) -> Option<f64> {
    parse_number(v).filter(|v| *v > 0.0)
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn with_hash(c: &str) -> String {
    let c = c.trim();
    if c.starts_with('#') {
        c.to_string()
    } else {
        format!("#{c}")
    }
}

/// Split a `,` or `-` separated color list, dropping blanks and adding `#`.
pub fn parse_color_list(raw: &str) -> Vec<String> {
    raw.split([',', '-'])
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(with_hash)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/style/query.rs"]
mod tests;
