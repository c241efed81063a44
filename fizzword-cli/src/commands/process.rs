//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, split_items, FileReader, InputItem};
use crate::output::{formatter_for, OutputFormat, OutputFormatter, Record};
use anyhow::{Context, Result};
use clap::Args;
use fizzword_core::{ReplaceError, WordReplacer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Literal text to process (repeatable)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Treat every line of a file or stdin as a separate input
    #[arg(long)]
    pub lines: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip rejected inputs instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting word replacement");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let replacer = WordReplacer::with_config(cli_config.core_config()?)?;
        let format = self.format.unwrap_or(cli_config.output.default_format);

        let items = self.collect_items()?;
        log::info!("Collected {} input(s)", items.len());

        let mut formatter = self.create_formatter(format, cli_config.output.pretty_json)?;
        self.run(&replacer, &items, &mut *formatter)
    }

    /// Process `items` through `replacer`, feeding results to `formatter`
    pub fn run(
        &self,
        replacer: &WordReplacer,
        items: &[InputItem],
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        let mut processed = 0;
        let mut rejected = 0;

        for item in items {
            match replacer.process(item.text.as_str()) {
                Ok(result) => {
                    log::debug!(
                        "{}: {} of {} words replaced",
                        item.source,
                        result.count,
                        result.words
                    );
                    formatter.format_record(&Record {
                        source: item.source.clone(),
                        input: item.text.clone(),
                        output: result.output,
                        count: result.count,
                        words: result.words,
                    })?;
                    processed += 1;
                }
                Err(e) if self.keep_going && e.is_validation() => {
                    log::warn!("Skipping {}: {}", item.source, e);
                    rejected += 1;
                }
                Err(e) => {
                    return Err(CliError::Rejected {
                        source: item.source.clone(),
                        reason: e.to_string(),
                    }
                    .into());
                }
            }
        }

        formatter.finish()?;

        if processed == 0 && rejected > 0 {
            return Err(CliError::NothingProcessed(rejected).into());
        }

        log::info!("Processed {processed} input(s), rejected {rejected}");
        Ok(())
    }

    /// Gather inputs from --text, --input and, failing both, stdin
    fn collect_items(&self) -> Result<Vec<InputItem>> {
        let mut items: Vec<InputItem> = self
            .text
            .iter()
            .map(|text| InputItem::new("<text>", text.as_str()))
            .collect();

        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                let content = FileReader::read_text(&path)?;
                items.extend(split_items(&path.display().to_string(), &content, self.lines));
            }
        }

        if self.text.is_empty() && self.input.is_empty() {
            log::debug!("No text or files given, reading stdin");
            let content = FileReader::read_stdin()?;
            items.extend(split_items("<stdin>", &content, self.lines));
        }

        // Line mode drops blank lines, so blank-only content leaves nothing to run
        if items.is_empty() {
            return Err(CliError::Rejected {
                source: self.source_label(),
                reason: ReplaceError::InvalidInput.to_string(),
            }
            .into());
        }

        Ok(items)
    }

    /// Name of the inputs for error messages
    fn source_label(&self) -> String {
        if self.input.is_empty() {
            "<stdin>".to_string()
        } else {
            self.input.join(", ")
        }
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(formatter_for(format, writer, pretty_json))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running under the test harness
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
