//! Template resolver: maps a logical identifier to raw template text.
//!
//! Identifiers are matched exactly; `templates/fiber/main.go.tmpl` and
//! `./templates/fiber/main.go.tmpl` are different resources.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{io_err, ResolveError};

// ---------------------------------------------------------------------------
// Embedded templates: baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const EMBEDDED: &[(&str, &str)] = &[
    (
        "templates/base/gitignore.tmpl",
        include_str!("templates/base/gitignore.tmpl"),
    ),
    (
        "templates/fiber/main.go.tmpl",
        include_str!("templates/fiber/main.go.tmpl"),
    ),
    (
        "templates/fiber/go.mod.tmpl",
        include_str!("templates/fiber/go.mod.tmpl"),
    ),
    (
        "templates/gin/main.go.tmpl",
        include_str!("templates/gin/main.go.tmpl"),
    ),
    (
        "templates/gin/go.mod.tmpl",
        include_str!("templates/gin/go.mod.tmpl"),
    ),
];

const TEMPLATE_EXTENSION: &str = "tmpl";
const ID_PREFIX: &str = "templates";

// ---------------------------------------------------------------------------
// TemplateResolver
// ---------------------------------------------------------------------------

/// Read-only lookup of template text by identifier.
pub trait TemplateResolver {
    /// Return the raw, unrendered text registered under `id`.
    fn resolve(&self, id: &str) -> Result<&str, ResolveError>;
}

/// The template set compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    /// Identifiers of every embedded template.
    pub fn ids() -> impl Iterator<Item = &'static str> {
        EMBEDDED.iter().map(|(id, _)| *id)
    }
}

impl TemplateResolver for EmbeddedTemplates {
    fn resolve(&self, id: &str) -> Result<&str, ResolveError> {
        EMBEDDED
            .iter()
            .find(|(name, _)| *name == id)
            .map(|(_, content)| *content)
            .ok_or_else(|| not_found(id))
    }
}

// ---------------------------------------------------------------------------
// TemplateSet
// ---------------------------------------------------------------------------

/// Owned in-memory template table.
///
/// Starts empty ([`TemplateSet::new`]) or from the embedded templates
/// ([`TemplateSet::embedded`]); entries can be added or replaced from disk
/// with [`TemplateSet::with_overrides`].
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: HashMap<String, String>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn embedded() -> Self {
        EMBEDDED.iter().map(|(id, content)| (*id, *content)).collect()
    }

    /// Register or replace a template.
    pub fn insert(&mut self, id: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(id.into(), content.into());
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Load every `*.tmpl` file under `dir`, keyed as
    /// `templates/<relative path>`, replacing entries with the same id.
    ///
    /// A missing `dir` adds nothing.
    pub fn with_overrides(mut self, dir: &Path) -> Result<Self, ResolveError> {
        for (id, content) in load_override_templates(dir)? {
            self.templates.insert(id, content);
        }
        Ok(self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = TemplateSet::new();
        for (id, content) in iter {
            set.insert(id, content);
        }
        set
    }
}

impl TemplateResolver for TemplateSet {
    fn resolve(&self, id: &str) -> Result<&str, ResolveError> {
        self.templates
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &str) -> ResolveError {
    ResolveError::ResourceNotFound { id: id.to_string() }
}

// ---------------------------------------------------------------------------
// Override loading helpers
// ---------------------------------------------------------------------------

fn override_id(rel: &Path) -> String {
    let rel = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("{ID_PREFIX}/{rel}")
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), ResolveError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_override_templates(dir: &Path) -> Result<Vec<(String, String)>, ResolveError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    files.sort();

    let mut templates = Vec::with_capacity(files.len());
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some(TEMPLATE_EXTENSION) {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let id = override_id(rel);
        let content = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((id, content));
    }
    Ok(templates)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
