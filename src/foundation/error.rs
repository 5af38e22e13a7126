/// Convenience result type used across snapmark.
pub type SnapmarkResult<T> = Result<T, SnapmarkError>;

/// Top-level error taxonomy used by the rasterizer, encoder and exporter.
#[derive(thiserror::Error, Debug)]
pub enum SnapmarkError {
    /// Invalid user-provided configuration or buffer geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while producing the PNG byte stream.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem or stream failure, surfaced unchanged.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SnapmarkError {
    /// Build a [`SnapmarkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SnapmarkError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
