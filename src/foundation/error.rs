/// Convenience result type used across chapter-ir.
pub type IrResult<T> = Result<T, IrError>;

/// Top-level error taxonomy for the loading, batch and CLI boundaries.
///
/// Structural problems inside a chapter are never reported through this type; they are
/// collected as [`crate::Diagnostic`] values in a [`crate::ValidationReport`].
#[derive(thiserror::Error, Debug)]
pub enum IrError {
    /// A chapter failed structural validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when decoding chapter or options JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Invalid validator or batch configuration.
    #[error("config error: {0}")]
    Config(String),

    /// IO failure while reading chapter files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IrError {
    /// Build an [`IrError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`IrError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build an [`IrError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
