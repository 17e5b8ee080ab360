/// Convenience result type used throughout the crate.
pub type ExtrudeResult<T> = Result<T, ExtrudeError>;

/// Errors reported by the extrusion engine and its mask/depth-map collaborators.
#[derive(thiserror::Error, Debug)]
pub enum ExtrudeError {
    /// Grid shape is unusable (zero-sized, buffer length mismatch, size overflow).
    #[error("shape error: {0}")]
    Shape(String),

    /// Parameter outside its accepted range.
    #[error("validation error: {0}")]
    Validation(String),

    /// Parameter file could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Mask decode or depth-map encode failed.
    #[error("image error: {0}")]
    Image(String),

    /// Anything else, usually I/O with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExtrudeError {
    /// Build a [`ExtrudeError::Shape`].
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`ExtrudeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ExtrudeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ExtrudeError::Image`].
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
