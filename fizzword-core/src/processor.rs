//! The word replacer
//!
//! A single left-to-right pass over validated input. Words are held back
//! until the run ends, then emitted either verbatim or as their positional
//! replacement. Separator runs are copied through as soon as they are seen.

use crate::config::Config;
use crate::error::Result;
use crate::output::Output;
use crate::rule::Replacement;
use crate::tokenizer::{Segment, Tokenizer};
use crate::validate::validate;

/// Replaces every third word with "Fizz", every fifth with "Buzz" and every
/// fifteenth with "FizzBuzz"
///
/// The replacer holds only its configuration and can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct WordReplacer {
    config: Config,
    tokenizer: Tokenizer,
}

impl WordReplacer {
    /// Create a replacer with the default 7..=100 length bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a replacer with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tokenizer: Tokenizer::new(),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate and process `input`
    ///
    /// Accepts `&str` as well as `Option<&str>`; `None` stands for an absent
    /// input and is rejected with [`ReplaceError::InvalidInput`].
    ///
    /// [`ReplaceError::InvalidInput`]: crate::ReplaceError::InvalidInput
    pub fn process<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<Output> {
        let text = validate(input.into(), &self.config.limits)?;
        Ok(self.replace(text))
    }

    /// Apply the replacement rule to `text` without validating it
    pub fn replace(&self, text: &str) -> Output {
        let mut state = ScanState::with_capacity(text.len());

        for segment in self.tokenizer.segments(text) {
            match segment {
                Segment::Word(word) => state.close_word(word),
                Segment::Separator(run) => state.output.push_str(run),
            }
        }

        state.finish()
    }
}

/// Mutable state local to one pass
struct ScanState {
    output: String,
    words: usize,
    replaced: usize,
}

impl ScanState {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            words: 0,
            replaced: 0,
        }
    }

    fn close_word(&mut self, word: &str) {
        self.words += 1;

        match Replacement::for_position(self.words) {
            Some(replacement) => {
                log::trace!("word {} {word:?} -> {replacement}", self.words);
                self.output.push_str(replacement.as_str());
                self.replaced += 1;
            }
            None => self.output.push_str(word),
        }
    }

    fn finish(self) -> Output {
        log::debug!("replaced {} of {} words", self.replaced, self.words);
        Output::new(self.output, self.replaced, self.words)
    }
}
