/// Bounding-box accumulation and the padded view window.
pub mod bounds;
/// Canvas sizing around a custom background card.
pub mod canvas;
