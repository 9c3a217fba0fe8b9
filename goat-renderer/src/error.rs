//! Error types for goat-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while looking up raw template text.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No resource is registered under this identifier.
    #[error("template resource not found: {id}")]
    ResourceNotFound { id: String },

    /// Filesystem error while loading override templates.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while parsing or executing a template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ResolveError {
    ResolveError::Io {
        path: path.into(),
        source,
    }
}
