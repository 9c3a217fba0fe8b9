//! Error types for goat-generator.

use std::path::PathBuf;

use thiserror::Error;

use goat_core::ConfigError;
use goat_renderer::{RenderError, ResolveError};

/// All errors that can abort a project generation.
///
/// None are retried; files written before the failure stay on disk.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The config failed validation; nothing was touched.
    #[error("invalid project config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The project directory is already present.
    #[error("project directory {path} already exists")]
    DirectoryExists { path: PathBuf },

    /// Any other failure creating the project directory.
    #[error("failed to create project directory {path}: {source}")]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two template identifiers derive the same output file.
    #[error("templates {first} and {second} both map to {destination}")]
    DuplicateDestination {
        first: String,
        second: String,
        destination: PathBuf,
    },

    /// The resolver could not supply the template text.
    #[error("failed to resolve template {id}: {source}")]
    TemplateResolutionFailed {
        id: String,
        #[source]
        source: ResolveError,
    },

    /// The template text is not a valid template.
    #[error("failed to parse template {id}: {source}")]
    TemplateParseFailed {
        id: String,
        #[source]
        source: RenderError,
    },

    /// The output file could not be created.
    #[error("failed to create output file {path}: {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendering failed, e.g. a reference to an undefined variable.
    #[error("failed to execute template {id}: {source}")]
    TemplateExecutionFailed {
        id: String,
        #[source]
        source: RenderError,
    },
}

impl GenerateError {
    /// True when the underlying cause is an unknown template identifier.
    pub fn is_resource_not_found(&self) -> bool {
        matches!(
            self,
            GenerateError::TemplateResolutionFailed {
                source: ResolveError::ResourceNotFound { .. },
                ..
            }
        )
    }
}
