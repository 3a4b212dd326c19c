/// Convenience result type used across the callout crate.
pub type CalloutResult<T> = Result<T, CalloutError>;

/// Error taxonomy for the fallible surfaces of the crate.
///
/// Geometry resolution never fails; only configuration loading and validation do.
#[derive(thiserror::Error, Debug)]
pub enum CalloutError {
    /// Invalid user-provided metrics or configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CalloutError {
    /// Build a [`CalloutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CalloutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
