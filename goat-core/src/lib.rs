//! goat core library: project configuration and stack definitions.
//!
//! - [`types`]: [`ProjectConfig`] and [`Stack`]
//! - [`error`]: [`ConfigError`]

pub mod error;
pub mod types;

pub use error::ConfigError;
pub use types::{ProjectConfig, Stack};
