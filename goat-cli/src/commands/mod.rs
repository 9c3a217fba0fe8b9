pub mod create;
pub mod interactive;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use goat_core::ProjectConfig;
use goat_generator::{generate_project_with_progress, GenerationEvent};
use goat_renderer::TemplateSet;

use crate::tidy;

/// Flags shared by every generating subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateOpts {
    /// Do not run `go mod tidy` after generating.
    #[arg(long)]
    pub skip_tidy: bool,

    /// Directory of `.tmpl` files overriding the built-in templates
    /// (`<dir>/fiber/main.go.tmpl` replaces `templates/fiber/main.go.tmpl`).
    #[arg(long, value_name = "DIR", env = "GOAT_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,
}

impl GenerateOpts {
    fn templates(&self) -> Result<TemplateSet> {
        let set = TemplateSet::embedded();
        match &self.templates_dir {
            Some(dir) => set
                .with_overrides(dir)
                .with_context(|| format!("failed to load templates from '{}'", dir.display())),
            None => Ok(set),
        }
    }
}

/// Generate `config`, optionally tidy, and print next steps.
pub(crate) fn generate(config: &ProjectConfig, opts: &GenerateOpts) -> Result<()> {
    let templates = opts.templates()?;

    println!(
        "Creating project '{}' with module '{}'...",
        config.project_name, config.module_name
    );
    let report =
        generate_project_with_progress(Path::new(""), config, &templates, |event| match event {
            GenerationEvent::DirectoryCreated(dir) => {
                println!("  Created directory: {}", dir.display())
            }
            GenerationEvent::FileWritten(file) => println!(
                "  ✎  {} (from {})",
                file.destination.display(),
                file.template_id
            ),
        })
        .with_context(|| format!("failed to generate project '{}'", config.project_name))?;

    if !opts.skip_tidy {
        tidy::go_mod_tidy(&report.project_dir)?;
    }

    println!(
        "{} Project '{}' created successfully!",
        "✓".green().bold(),
        config.project_name
    );
    println!("Next steps:");
    println!("  cd {}", config.project_name);
    println!("  go run main.go");
    Ok(())
}
