/// Convenience result type used across chiasm.
pub type ChiasmResult<T> = Result<T, ChiasmError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ChiasmError {
    /// Invalid user input (bad range, empty text, malformed dataset).
    #[error("validation error: {0}")]
    Validation(String),

    /// A valid request that produced nothing to render.
    #[error("empty result: {0}")]
    EmptyResult(String),

    /// Network, HTTP or decoding failure inside a verse source.
    #[error("source error: {0}")]
    Source(String),

    /// SVG construction or rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// PDF/PNG export failure.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChiasmError {
    /// Build a [`ChiasmError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChiasmError::EmptyResult`] value.
    pub fn empty_result(msg: impl Into<String>) -> Self {
        Self::EmptyResult(msg.into())
    }

    /// Build a [`ChiasmError::Source`] value.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Build a [`ChiasmError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChiasmError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`ChiasmError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
