//! goat: Go application template generator.
//!
//! # Usage
//!
//! ```text
//! goat create --name <name> --module <module> [--stack fiber|gin]
//! goat create-fiber
//! goat create-gin
//! ```
//!
//! Every generating command accepts `--skip-tidy` and
//! `--templates-dir <dir>` (or `GOAT_TEMPLATES_DIR`).

mod commands;
mod tidy;
mod wizard;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{create::CreateArgs, interactive::InteractiveArgs};
use goat_core::Stack;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "goat",
    version,
    about = "A CLI tool to generate Go application templates",
    long_about = "goat is a simple command-line interface to help you quickly bootstrap Go applications.",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new project from flags.
    Create(CreateArgs),

    /// Create a new Go Fiber project, prompting for names.
    CreateFiber(InteractiveArgs),

    /// Create a new Go Gin project, prompting for names.
    CreateGin(InteractiveArgs),
}

// ---------------------------------------------------------------------------
// Shared Stack argument: parsed from CLI strings, converts to core type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `Stack` from CLI args.
#[derive(Debug, Clone, Default)]
pub struct StackArg(pub Stack);

impl FromStr for StackArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fiber" => Ok(Self(Stack::Fiber)),
            "gin" => Ok(Self(Stack::Gin)),
            other => Err(format!("unknown stack '{other}'; expected: fiber, gin")),
        }
    }
}

impl fmt::Display for StackArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<StackArg> for Stack {
    fn from(s: StackArg) -> Self {
        s.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Create(args) => args.run(),
        Commands::CreateFiber(args) => args.run(Stack::Fiber),
        Commands::CreateGin(args) => args.run(Stack::Gin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn stack_arg_parses_case_insensitively() {
        assert_eq!(Stack::from("GIN".parse::<StackArg>().unwrap()), Stack::Gin);
        assert_eq!(Stack::from("fiber".parse::<StackArg>().unwrap()), Stack::Fiber);
        assert!("echo".parse::<StackArg>().is_err());
    }

    #[test]
    fn create_defaults_to_fiber() {
        let cli = Cli::try_parse_from(["goat", "create", "-n", "demo", "-m", "example.com/demo"])
            .expect("parse");
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.stack.0, Stack::Fiber);
                assert!(!args.opts.skip_tidy);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn create_requires_name_and_module() {
        assert!(Cli::try_parse_from(["goat", "create", "-n", "demo"]).is_err());
        assert!(Cli::try_parse_from(["goat", "create", "-m", "example.com/demo"]).is_err());
    }
}
