//! Output path derivation.
//!
//! A template identifier maps to a file directly under the project
//! directory: take the last `/`-separated segment, strip `.tmpl`, and prefix
//! invisible names with a dot (`gitignore.tmpl` → `.gitignore`).
//! Identifiers without the `.tmpl` suffix are skipped.

use std::path::{Path, PathBuf};

use crate::error::GenerateError;

pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Base names written as dotfiles.
pub const INVISIBLE_FILES: &[&str] = &["gitignore"];

/// One template and the file it renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedTemplate {
    pub template_id: String,
    pub destination: PathBuf,
}

/// Ordered template → destination pairs for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateMapping {
    entries: Vec<MappedTemplate>,
}

impl TemplateMapping {
    pub fn entries(&self) -> &[MappedTemplate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn destination_of(&self, template_id: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|e| e.template_id == template_id)
            .map(|e| e.destination.as_path())
    }
}

impl IntoIterator for TemplateMapping {
    type Item = MappedTemplate;
    type IntoIter = std::vec::IntoIter<MappedTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

pub fn is_invisible_file(name: &str) -> bool {
    INVISIBLE_FILES.contains(&name)
}

/// Apply the invisible-file rule to a derived base name.
pub fn destination_file_name(name: &str) -> String {
    if is_invisible_file(name) {
        format!(".{name}")
    } else {
        name.to_string()
    }
}

/// Output file name for `template_id`, or `None` if it is not a template.
pub fn derive_file_name(template_id: &str) -> Option<String> {
    let segment = template_id
        .rsplit_once('/')
        .map_or(template_id, |(_, last)| last);
    let stem = segment.strip_suffix(TEMPLATE_SUFFIX)?;
    if stem.is_empty() {
        return None;
    }
    Some(destination_file_name(stem))
}

/// Build the mapping for `templates` rooted at `project_dir`.
///
/// Caller order is preserved. Two identifiers landing on the same file is
/// [`GenerateError::DuplicateDestination`].
pub fn map_templates<S: AsRef<str>>(
    templates: &[S],
    project_dir: &Path,
) -> Result<TemplateMapping, GenerateError> {
    let mut entries: Vec<MappedTemplate> = Vec::with_capacity(templates.len());
    for id in templates {
        let id = id.as_ref();
        let Some(file_name) = derive_file_name(id) else {
            tracing::debug!("skipping non-template identifier: {id}");
            continue;
        };
        let destination = project_dir.join(file_name);
        if let Some(prev) = entries.iter().find(|e| e.destination == destination) {
            return Err(GenerateError::DuplicateDestination {
                first: prev.template_id.clone(),
                second: id.to_string(),
                destination,
            });
        }
        entries.push(MappedTemplate {
            template_id: id.to_string(),
            destination,
        });
    }
    Ok(TemplateMapping { entries })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
