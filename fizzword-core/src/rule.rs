//! Positional replacement rule

use std::fmt;

/// Literal substituted for a word at a Fizz/Buzz position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Replacement {
    /// Position divisible by 3 only
    Fizz,
    /// Position divisible by 5 only
    Buzz,
    /// Position divisible by both 3 and 5
    FizzBuzz,
}

impl Replacement {
    /// Replacement for the word at 1-based `position`, if any
    ///
    /// Only the ordinal position matters; the word's own text is never
    /// consulted.
    pub fn for_position(position: usize) -> Option<Self> {
        match (position % 3 == 0, position % 5 == 0) {
            (true, true) => Some(Replacement::FizzBuzz),
            (true, false) => Some(Replacement::Fizz),
            (false, true) => Some(Replacement::Buzz),
            (false, false) => None,
        }
    }

    /// The literal emitted in place of the word
    pub fn as_str(&self) -> &'static str {
        match self {
            Replacement::Fizz => "Fizz",
            Replacement::Buzz => "Buzz",
            Replacement::FizzBuzz => "FizzBuzz",
        }
    }
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of replaced positions among the first `words` words
pub fn expected_replacements(words: usize) -> usize {
    words / 3 + words / 5 - words / 15
}
