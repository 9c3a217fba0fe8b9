//! # goat-renderer
//!
//! Template resources and the Tera-based substitution engine used to turn
//! them into project files.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use goat_core::ProjectConfig;
//! use goat_renderer::{EmbeddedTemplates, ParsedTemplate, TemplateContext, TemplateResolver};
//!
//! fn render_go_mod(config: &ProjectConfig) -> Option<String> {
//!     let id = "templates/fiber/go.mod.tmpl";
//!     let source = EmbeddedTemplates.resolve(id).ok()?;
//!     let template = ParsedTemplate::parse(id, source).ok()?;
//!     template.render(&TemplateContext::from_config(config)).ok()
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod resolver;

pub use context::TemplateContext;
pub use engine::ParsedTemplate;
pub use error::{RenderError, ResolveError};
pub use resolver::{EmbeddedTemplates, TemplateResolver, TemplateSet};
