//! Hex color handling for style configuration.

/// Rainbow palette used to backfill per-character color lists.
pub const DEFAULT_CHAR_COLORS: [&str; 9] = [
    "#ef4444", "#f97316", "#f59e0b", "#84cc16", "#10b981", "#06b6d4", "#3b82f6", "#8b5cf6",
    "#d946ef",
];

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Lowercase `#rrggbb` form, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
pub fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, c) in out.iter_mut().zip(s.chars()) {
                let pair: String = [c, c].iter().collect();
                *slot = hex_byte(&pair)?;
            }
            Ok(Rgba8 {
                r: out[0],
                g: out[1],
                b: out[2],
                a: 255,
            })
        }
        6 => Ok(Rgba8 {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
            a: 255,
        }),
        8 => Ok(Rgba8 {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
            a: hex_byte(&s[6..8])?,
        }),
        _ => Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

/// Canonicalize a user color to lowercase hex, or `None` when unparseable.
pub fn normalize_hex(s: &str) -> Option<String> {
    parse_hex(s).ok().map(Rgba8::to_hex)
}

/// Per-character color lookup with fallback.
///
/// Lists shorter than the text fall back to `fallback` for missing indices.
pub fn color_for<'a>(list: &'a [String], index: usize, fallback: &'a str) -> &'a str {
    match list.get(index) {
        Some(c) if !c.is_empty() => c.as_str(),
        _ => fallback,
    }
}

/// Cycle [`DEFAULT_CHAR_COLORS`] over `len` characters.
pub fn rainbow_colors(len: usize) -> Vec<String> {
    (0..len)
        .map(|i| DEFAULT_CHAR_COLORS[i % DEFAULT_CHAR_COLORS.len()].to_string())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
