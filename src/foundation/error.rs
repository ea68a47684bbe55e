/// Convenience result type used across copyreveal.
pub type RevealResult<T> = Result<T, RevealError>;

/// Top-level error taxonomy used by the orchestrator APIs.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid caller-provided configuration or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or sampling reveal tweens.
    #[error("animation error: {0}")]
    Animation(String),

    /// Invalid operations against the document tree (stale ids, cycles, wrong node kind).
    #[error("document error: {0}")]
    Document(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`RevealError::Document`] value.
    pub fn document(msg: impl Into<String>) -> Self {
        Self::Document(msg.into())
    }

    /// Build a [`RevealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RevealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
