//! Word/separator segmentation
//!
//! Splits text into alternating runs of word characters and separators.
//! Segments borrow from the input and, concatenated in order, reproduce it
//! exactly.

use crate::classify::is_word_char;

/// A maximal run of either word characters or separators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Letters, digits and apostrophes
    Word(&'a str),
    /// Anything else, copied through untouched
    Separator(&'a str),
}

impl<'a> Segment<'a> {
    /// The text covered by this segment
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Word(s) | Segment::Separator(s) => s,
        }
    }
}

/// Iterator over the segments of a string
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let word = is_word_char(first);

        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| is_word_char(c) != word)
            .map_or(self.rest.len(), |(i, _)| i);

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;

        Some(if word {
            Segment::Word(run)
        } else {
            Segment::Separator(run)
        })
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Stateless tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Segment `text` into words and separator runs
    pub fn segments<'a>(&self, text: &'a str) -> Segments<'a> {
        Segments { rest: text }
    }

    /// Iterate over the words of `text` only
    pub fn words<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.segments(text).filter_map(|segment| match segment {
            Segment::Word(word) => Some(word),
            Segment::Separator(_) => None,
        })
    }

    /// Number of words in `text`
    pub fn count_words(&self, text: &str) -> usize {
        self.words(text).count()
    }
}
