//! Domain types for project generation.
//!
//! [`ProjectConfig`] is the single record handed to the generation engine.
//! [`Stack`] names the fixed template lists shipped with the binary.

use std::fmt;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Template identifiers
// ---------------------------------------------------------------------------

pub const GITIGNORE_TEMPLATE: &str = "templates/base/gitignore.tmpl";
pub const FIBER_MAIN_TEMPLATE: &str = "templates/fiber/main.go.tmpl";
pub const FIBER_GO_MOD_TEMPLATE: &str = "templates/fiber/go.mod.tmpl";
pub const GIN_MAIN_TEMPLATE: &str = "templates/gin/main.go.tmpl";
pub const GIN_GO_MOD_TEMPLATE: &str = "templates/gin/go.mod.tmpl";

// ---------------------------------------------------------------------------
// Stack
// ---------------------------------------------------------------------------

/// Web framework a generated project is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stack {
    #[default]
    Fiber,
    Gin,
}

impl Stack {
    /// All stacks in a stable order.
    pub fn all() -> &'static [Stack] {
        &[Stack::Fiber, Stack::Gin]
    }

    /// Template identifiers rendered for this stack, in generation order.
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Stack::Fiber => &[GITIGNORE_TEMPLATE, FIBER_MAIN_TEMPLATE, FIBER_GO_MOD_TEMPLATE],
            Stack::Gin => &[GITIGNORE_TEMPLATE, GIN_MAIN_TEMPLATE, GIN_GO_MOD_TEMPLATE],
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stack::Fiber => write!(f, "fiber"),
            Stack::Gin => write!(f, "gin"),
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectConfig
// ---------------------------------------------------------------------------

/// Everything the engine needs to materialise one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Output directory name, also exposed to templates.
    pub project_name: String,
    /// Module path (e.g. `github.com/user/project`), exposed to templates.
    pub module_name: String,
    /// Logical template identifiers, in caller order.
    pub templates: Vec<String>,
}

impl ProjectConfig {
    pub fn new(
        project_name: impl Into<String>,
        module_name: impl Into<String>,
        templates: Vec<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            module_name: module_name.into(),
            templates,
        }
    }

    /// Build a config whose template list is the stack's fixed list.
    pub fn for_stack(
        project_name: impl Into<String>,
        module_name: impl Into<String>,
        stack: Stack,
    ) -> Self {
        let templates = stack.templates().iter().map(|t| (*t).to_string()).collect();
        Self::new(project_name, module_name, templates)
    }

    /// Check that both name fields are non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_name.is_empty() {
            return Err(ConfigError::EmptyField { field: "project name" });
        }
        if self.module_name.is_empty() {
            return Err(ConfigError::EmptyField { field: "module name" });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
