/// Geometry re-exports, frame rates and number formatting.
pub mod core;
/// Hex colors and per-character color lists.
pub mod color;
/// Error and result types.
pub mod error;
