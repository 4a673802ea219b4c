/// Convenience result type used across Autograph.
pub type AutographResult<T> = Result<T, AutographError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum AutographError {
    /// Invalid user-provided style or geometry data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font bytes could not be read or lack required tables.
    #[error("font error: {0}")]
    Font(String),

    /// Stroke data lookup failed for a character.
    #[error("stroke data error: {0}")]
    StrokeData(String),

    /// A document could not be parsed or rasterized.
    #[error("raster error: {0}")]
    Raster(String),

    /// An image or animation encoder rejected a frame.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AutographError {
    /// Build a [`AutographError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`AutographError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`AutographError::StrokeData`] value.
    pub fn stroke_data(msg: impl Into<String>) -> Self {
        Self::StrokeData(msg.into())
    }

    /// Build a [`AutographError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`AutographError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
