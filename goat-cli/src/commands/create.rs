//! `goat create --name <name> --module <module> [--stack fiber|gin]`

use anyhow::Result;
use clap::Args;

use goat_core::ProjectConfig;

use super::{generate, GenerateOpts};
use crate::StackArg;

/// Generate a project from flags, without prompting.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the project; also the directory created.
    #[arg(long, short = 'n')]
    pub name: String,

    /// Go module path (e.g. github.com/user/project).
    #[arg(long, short = 'm')]
    pub module: String,

    /// Framework: fiber | gin. Defaults to fiber.
    #[arg(long, short = 's', value_name = "STACK", default_value_t)]
    pub stack: StackArg,

    #[command(flatten)]
    pub opts: GenerateOpts,
}

impl CreateArgs {
    pub fn run(self) -> Result<()> {
        let config = ProjectConfig::for_stack(self.name, self.module, self.stack.into());
        generate(&config, &self.opts)
    }
}
