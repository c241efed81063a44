//! Positional Fizz/Buzz word replacement
//!
//! This crate splits a short string into words (maximal runs of ASCII
//! letters, digits and apostrophes) and replaces every third word with
//! `Fizz`, every fifth with `Buzz` and every fifteenth with `FizzBuzz`.
//! Punctuation, whitespace and every other separator character stays exactly
//! where it was.
//!
//! The rule is purely positional: the word's text never matters, only its
//! ordinal among all words in the input.
//!
//! # Example
//!
//! ```rust
//! use fizzword_core::WordReplacer;
//!
//! let replacer = WordReplacer::new();
//! let result = replacer.process("1 2 &*! 3 4 %%% 5 6").unwrap();
//!
//! assert_eq!(result.output, "1 2 &*! Fizz 4 %%% Buzz Fizz");
//! assert_eq!(result.count, 3);
//! ```
//!
//! Running the replacer over its own output is not idempotent: `Fizz` is a
//! word like any other and gets renumbered.

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod error;
pub mod output;
pub mod processor;
pub mod rule;
pub mod tokenizer;
pub mod validate;

// Re-export key types
pub use config::{Config, ConfigBuilder, LengthLimits};
pub use error::{ReplaceError, Result};
pub use output::Output;
pub use processor::WordReplacer;
pub use rule::Replacement;
pub use tokenizer::{Segment, Tokenizer};

/// Process text with the default configuration
pub fn process<'a>(input: impl Into<Option<&'a str>>) -> Result<Output> {
    WordReplacer::new().process(input)
}
