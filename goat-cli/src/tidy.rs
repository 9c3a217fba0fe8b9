//! Post-generation build step.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

pub const GO: &str = "go";
pub const TIDY_ARGS: &[&str] = &["mod", "tidy"];

/// Run `program args…` inside `dir`, failing with its combined output.
pub fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let cmdline = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    println!("Running '{cmdline}'...");
    tracing::debug!("running '{cmdline}' in {}", dir.display());

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("failed to run '{cmdline}'"))?;

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        bail!(
            "'{cmdline}' failed (status {}): {} {}",
            output.status,
            stdout,
            stderr
        );
    }

    println!("'{cmdline}' completed successfully.");
    Ok(())
}

/// `go mod tidy` in the generated project.
pub fn go_mod_tidy(project_dir: &Path) -> Result<()> {
    run_in(project_dir, GO, TIDY_ARGS)
}
