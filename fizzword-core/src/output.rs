//! Processing result

use std::fmt;

/// Result of a successful replacement pass
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Input text with Fizz/Buzz substitutions applied
    pub output: String,
    /// Number of words replaced by Fizz, Buzz or FizzBuzz
    pub count: usize,
    /// Total number of words scanned
    pub words: usize,
}

impl Output {
    /// Create a new output record
    pub fn new(output: String, count: usize, words: usize) -> Self {
        Self {
            output,
            count,
            words,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}
