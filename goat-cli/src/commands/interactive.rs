//! `goat create-fiber` / `goat create-gin`: prompt, then generate.

use std::io;

use anyhow::{Context, Result};
use clap::Args;

use goat_core::Stack;

use super::{generate, GenerateOpts};
use crate::wizard;

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub opts: GenerateOpts,
}

impl InteractiveArgs {
    pub fn run(self, stack: Stack) -> Result<()> {
        let stdin = io::stdin();
        let outcome = wizard::run(stdin.lock(), io::stdout()).context("failed to read input")?;

        match outcome.into_config(stack) {
            Some(config) => generate(&config, &self.opts),
            None => {
                tracing::debug!("wizard cancelled; nothing generated");
                println!("Cancelled.");
                Ok(())
            }
        }
    }
}
