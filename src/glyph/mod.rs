//! Glyph outlines, CJK stroke data and path extraction.

/// Text to path records.
pub mod extract;
/// Network-backed stroke data and font downloads.
#[cfg(feature = "remote")]
pub mod remote;
/// Font seam and the `skrifa`-backed implementation.
pub mod source;
/// Stroke seam, in-memory source and LRU cache.
pub mod strokes;
