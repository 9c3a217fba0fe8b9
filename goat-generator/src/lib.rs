//! # goat-generator
//!
//! Turns a [`ProjectConfig`](goat_core::ProjectConfig) and a
//! [`TemplateResolver`](goat_renderer::TemplateResolver) into a project
//! directory on disk.
//!
//! Call [`generate_project`] to generate relative to the working directory,
//! or [`generate_project_at`] to choose the parent directory.

pub mod error;
pub mod mapping;
pub mod project;

pub use error::GenerateError;
pub use mapping::{map_templates, MappedTemplate, TemplateMapping};
pub use project::{
    generate_project, generate_project_at, generate_project_with_progress, GenerationEvent,
    GenerationReport,
};
