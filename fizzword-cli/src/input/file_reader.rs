//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of stdin as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "one two three four five\nsix seven";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.bin");
        fs::write(&file_path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        assert!(FileReader::read_text(&file_path).is_err());
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        let content = FileReader::read_text(&file_path).unwrap();
        assert_eq!(content, "");
    }
}
