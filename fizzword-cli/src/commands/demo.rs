//! Demo command implementation

use anyhow::Result;
use fizzword_core::WordReplacer;
use std::io::{self, Write};

/// Fixed sample fed to the replacer by `fizzword demo`
pub const DEMO_INPUT: &str = "1 2 &*! 3 4 %%% 5 6";

/// Execute the demo command against stdout
pub fn execute() -> Result<()> {
    let stdout = io::stdout();
    run(&mut stdout.lock())
}

/// Process the sample and print the result to `writer`
pub fn run<W: Write>(writer: &mut W) -> Result<()> {
    let result = WordReplacer::new().process(DEMO_INPUT)?;

    writeln!(writer, "output string: ")?;
    writeln!(writer, "{result}")?;
    writeln!(writer, "count: {}", result.count)?;
    writer.flush()?;
    Ok(())
}
