use std::path::PathBuf;

/// Convenience result type used across osbforge.
pub type OsbResult<T> = Result<T, OsbError>;

/// Top-level error taxonomy used by the compile pipeline and its building blocks.
#[derive(thiserror::Error, Debug)]
pub enum OsbError {
    /// A script failed while populating the storyboard.
    #[error("script evaluation error: {0}")]
    ScriptEvaluation(String),

    /// A library or script source could not be read.
    #[error("source read error: '{}': {source}", path.display())]
    SourceRead {
        /// Path of the source that failed.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Invalid user-provided options or script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when deserializing script documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OsbError {
    /// Build an [`OsbError::ScriptEvaluation`] value.
    pub fn script(msg: impl Into<String>) -> Self {
        Self::ScriptEvaluation(msg.into())
    }

    /// Build an [`OsbError::SourceRead`] value.
    pub fn source_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceRead {
            path: path.into(),
            source,
        }
    }

    /// Build an [`OsbError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OsbError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
