/// Identifier of the font used when a request names an unknown one.
pub const DEFAULT_FONT_ID: &str = "great-vibes";

/// One downloadable font known to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontEntry {
    /// Stable identifier used in [`crate::StyleConfig::font`].
    pub id: &'static str,
    /// Human readable family name.
    pub label: &'static str,
    /// Editor grouping.
    pub category: &'static str,
    /// Location of a TrueType file for this family.
    pub url: &'static str,
}

macro_rules! google_fonts {
    () => {
        "https://raw.githubusercontent.com/google/fonts/main"
    };
}

const GOOGLE_FONTS: &str = google_fonts!();

macro_rules! font {
    ($id:literal, $label:literal, $category:literal, $path:literal) => {
        FontEntry {
            id: $id,
            label: $label,
            category: $category,
            url: concat!(google_fonts!(), $path),
        }
    };
}

static ENTRIES: [FontEntry; 8] = [
    font!("great-vibes", "Great Vibes", "script", "/ofl/greatvibes/GreatVibes-Regular.ttf"),
    font!("dancing-script", "Dancing Script", "script", "/ofl/dancingscript/DancingScript%5Bwght%5D.ttf"),
    font!("allura", "Allura", "script", "/ofl/allura/Allura-Regular.ttf"),
    font!("sacramento", "Sacramento", "script", "/ofl/sacramento/Sacramento-Regular.ttf"),
    font!("lobster", "Lobster", "brand", "/ofl/lobster/Lobster-Regular.ttf"),
    font!("pacifico", "Pacifico", "brand", "/ofl/pacifico/Pacifico-Regular.ttf"),
    font!("permanent-marker", "Permanent Marker", "brand", "/apache/permanentmarker/PermanentMarker-Regular.ttf"),
    font!("ma-shan-zheng", "Ma Shan Zheng", "local", "/ofl/mashanzheng/MaShanZheng-Regular.ttf"),
];

/// Static catalog of known fonts.
#[derive(Clone, Copy, Debug, Default)]
pub struct FontCatalog;

impl FontCatalog {
    /// All known fonts, in editor order.
    pub fn entries() -> &'static [FontEntry] {
        &ENTRIES
    }

    /// Exact lookup.
    pub fn get(id: &str) -> Option<&'static FontEntry> {
        ENTRIES.iter().find(|e| e.id == id)
    }

    /// Lookup with fallback to [`DEFAULT_FONT_ID`].
    pub fn resolve(id: &str) -> &'static FontEntry {
        Self::get(id).unwrap_or(&ENTRIES[0])
    }

    /// Root all catalog URLs share.
    pub fn base_url() -> &'static str {
        GOOGLE_FONTS
    }
}
