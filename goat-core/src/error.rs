//! Error types for goat-core.

use thiserror::Error;

/// Reasons a [`ProjectConfig`](crate::ProjectConfig) is rejected before any
/// filesystem work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required name field was empty.
    #[error("{field} is required")]
    EmptyField { field: &'static str },
}
