//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod demo;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace words in text, files or stdin
    Process(process::ProcessArgs),

    /// Run the built-in sample through the replacer
    Demo,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Demo => demo::execute(),
        }
    }
}
