//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// A single string to run through the replacer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputItem {
    /// Human-readable origin used in records and error messages
    pub source: String,
    /// The text to process
    pub text: String,
}

impl InputItem {
    /// Create a new input item
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// Split raw content from `source` into input items
///
/// In whole-content mode one trailing line ending is dropped. In line mode
/// every non-blank line becomes its own item, tagged `source:line`.
pub fn split_items(source: &str, content: &str, lines: bool) -> Vec<InputItem> {
    if !lines {
        return vec![InputItem::new(source, strip_line_ending(content))];
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| InputItem::new(format!("{source}:{}", i + 1), line))
        .collect()
}

fn strip_line_ending(content: &str) -> &str {
    content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(content)
}
