//! Project generation.
//!
//! ## `generate_project_at`: steps
//!
//! 1. Validate the config (no filesystem access yet).
//! 2. Derive the template → destination mapping.
//! 3. Create `<root>/<project_name>` (mode 0755); an existing path fails.
//! 4. For each mapping entry: resolve, parse, create the file, render into it.
//!
//! Any failure aborts the remaining steps. Nothing already written is
//! removed, so rerunning with the same name fails at step 3 until the
//! partial output is deleted by hand.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use goat_core::ProjectConfig;
use goat_renderer::{ParsedTemplate, TemplateContext, TemplateResolver};

use crate::error::GenerateError;
use crate::mapping::{map_templates, MappedTemplate};

#[cfg(unix)]
const PROJECT_DIR_MODE: u32 = 0o755;

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// The directory that was created.
    pub project_dir: PathBuf,
    /// Files written, in generation order.
    pub files: Vec<MappedTemplate>,
}

/// Progress reported while a project is generated.
///
/// Events fire as each step completes, so a caller still sees what reached
/// the disk when a later step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationEvent<'a> {
    DirectoryCreated(&'a Path),
    FileWritten(&'a MappedTemplate),
}

/// Generate the project relative to the current working directory.
pub fn generate_project<R>(
    config: &ProjectConfig,
    resolver: &R,
) -> Result<GenerationReport, GenerateError>
where
    R: TemplateResolver + ?Sized,
{
    generate_project_at(Path::new(""), config, resolver)
}

/// Generate the project as `root/<project_name>`.
pub fn generate_project_at<R>(
    root: &Path,
    config: &ProjectConfig,
    resolver: &R,
) -> Result<GenerationReport, GenerateError>
where
    R: TemplateResolver + ?Sized,
{
    generate_project_with_progress(root, config, resolver, |_| {})
}

/// Like [`generate_project_at`], calling `on_event` after each step.
pub fn generate_project_with_progress<R, F>(
    root: &Path,
    config: &ProjectConfig,
    resolver: &R,
    mut on_event: F,
) -> Result<GenerationReport, GenerateError>
where
    R: TemplateResolver + ?Sized,
    F: FnMut(GenerationEvent<'_>),
{
    config.validate()?;
    tracing::info!(
        "creating project '{}' with module '{}'",
        config.project_name,
        config.module_name
    );

    let project_dir = root.join(&config.project_name);
    let mapping = map_templates(&config.templates, &project_dir)?;

    create_project_dir(&project_dir)?;
    tracing::info!("created directory: {}", project_dir.display());
    on_event(GenerationEvent::DirectoryCreated(&project_dir));

    let ctx = TemplateContext::from_config(config);
    let mut files = Vec::with_capacity(mapping.len());
    for entry in mapping {
        write_template(resolver, &entry, &ctx)?;
        tracing::info!(
            "created file: {} from template {}",
            entry.destination.display(),
            entry.template_id
        );
        on_event(GenerationEvent::FileWritten(&entry));
        files.push(entry);
    }

    Ok(GenerationReport { project_dir, files })
}

fn create_project_dir(path: &Path) -> Result<(), GenerateError> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(PROJECT_DIR_MODE);
    }
    builder.create(path).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => GenerateError::DirectoryExists {
            path: path.to_path_buf(),
        },
        _ => GenerateError::DirectoryCreateFailed {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn write_template<R>(
    resolver: &R,
    entry: &MappedTemplate,
    ctx: &TemplateContext,
) -> Result<(), GenerateError>
where
    R: TemplateResolver + ?Sized,
{
    let id = entry.template_id.as_str();
    let source = resolver
        .resolve(id)
        .map_err(|source| GenerateError::TemplateResolutionFailed {
            id: id.to_string(),
            source,
        })?;

    let template =
        ParsedTemplate::parse(id, source).map_err(|source| GenerateError::TemplateParseFailed {
            id: id.to_string(),
            source,
        })?;

    let file = File::create(&entry.destination).map_err(|source| {
        GenerateError::OutputWriteFailed {
            path: entry.destination.clone(),
            source,
        }
    })?;

    template
        .render_to(ctx, file)
        .map_err(|source| GenerateError::TemplateExecutionFailed {
            id: id.to_string(),
            source,
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
