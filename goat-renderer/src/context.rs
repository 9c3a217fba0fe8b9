//! Template context: the values a template may reference.

use serde::Serialize;

use goat_core::ProjectConfig;

use crate::error::RenderError;

/// Rendering payload built from a [`ProjectConfig`].
///
/// Serialised in PascalCase, so templates use `{{.ProjectName}}` and
/// `{{.ModuleName}}` (or the undotted Tera form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateContext {
    pub project_name: String,
    pub module_name: String,
}

impl TemplateContext {
    pub fn from_config(config: &ProjectConfig) -> Self {
        TemplateContext {
            project_name: config.project_name.clone(),
            module_name: config.module_name.clone(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
