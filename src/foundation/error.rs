/// Convenience result type used across the collage engine.
pub type CollageResult<T> = Result<T, CollageError>;

/// Top-level error taxonomy for the fallible surfaces of the engine.
///
/// Mask resolution and style synthesis never fail; errors only come from loading
/// documents, validating custom geometry and rasterizing previews.
#[derive(thiserror::Error, Debug)]
pub enum CollageError {
    /// Invalid user-provided pattern, layer or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a mask descriptor.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CollageError {
    /// Build a [`CollageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CollageError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CollageError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CollageError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
