//! Character classification
//!
//! Words are built from ASCII letters, ASCII digits and the straight
//! apostrophe. Everything else, including non-ASCII letters and typographic
//! apostrophes such as U+2019, is a separator.

/// The only apostrophe that joins words (code point 39)
pub const APOSTROPHE: char = '\'';

/// Whether `c` belongs to a word
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == APOSTROPHE
}

/// Whether `c` is a separator
#[inline]
pub fn is_separator(c: char) -> bool {
    !is_word_char(c)
}
