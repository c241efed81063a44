//! fizzword command-line entry point

use clap::Parser;
use fizzword_cli::commands::Commands;

/// Replace every third word with Fizz and every fifth with Buzz
#[derive(Debug, Parser)]
#[command(name = "fizzword", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
