//! SVG document synthesis.

/// Identifier scoping, gradients, filters and paint resolution.
pub mod paint;
/// Layer composition and path animation.
pub mod synth;
/// Texture tile patterns.
pub mod texture;
