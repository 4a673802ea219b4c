//! Rasterization and raster encoders.
//!
//! Frames are rendered one at a time and pushed to a [`sink::FrameSink`] in order.

/// Frame sampling and PNG/GIF export.
pub mod export;
/// Frame sink trait and built-in sinks.
pub mod sink;
/// `usvg` parsing and `resvg` rasterization.
pub mod svg_raster;
