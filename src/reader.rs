use crate::sniffer::EncodingSniffer;
use std::fs;
use std::path::Path;

/// Outcome of reading one file. Per-file failures never propagate; the
/// caller decides between silence and an inline placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    /// Decoded text; undecodable byte sequences were replaced with U+FFFD.
    Text(String),
    /// The sniffer found no usable encoding; rendered as the empty-file
    /// placeholder downstream.
    Unreadable,
    /// The read itself failed; carries the message that becomes the visible
    /// content in the export.
    Failed(String),
}

impl FileContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            FileContent::Failed(message) => Some(message),
            FileContent::Unreadable => None,
        }
    }
}

/// Whole-file reader. No streaming: simplicity over memory footprint.
pub struct ContentReader;

impl ContentReader {
    pub fn read(path: &Path) -> FileContent {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => return FileContent::Failed(format!("[Error reading file: {}]", e)),
        };

        match EncodingSniffer::sniff(&bytes) {
            Some(encoding) => {
                let (decoded, _, _) = encoding.decode(&bytes);
                FileContent::Text(decoded.into_owned())
            }
            None => FileContent::Unreadable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_utf8_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "print(1)").unwrap();

        let content = ContentReader::read(temp_file.path());
        assert_eq!(content, FileContent::Text("print(1)".to_string()));
    }

    #[test]
    fn test_read_latin1_file_decodes() {
        let mut temp_file = NamedTempFile::new().unwrap();
        // "café" in ISO-8859-1
        temp_file.write_all(&[b'c', b'a', b'f', 0xE9]).unwrap();

        match ContentReader::read(temp_file.path()) {
            FileContent::Text(text) => assert!(text.starts_with("caf")),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_read_empty_file_is_unreadable() {
        let temp_file = NamedTempFile::new().unwrap();
        let content = ContentReader::read(temp_file.path());
        assert_eq!(content, FileContent::Unreadable);
    }

    #[test]
    fn test_read_binary_is_unreadable() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0x00, 0x01, 0xFF, 0x00]).unwrap();

        let content = ContentReader::read(temp_file.path());
        assert_eq!(content, FileContent::Unreadable);
    }

    #[test]
    fn test_read_missing_file_is_failed() {
        let content = ContentReader::read(Path::new("/no/such/file.py"));
        match content {
            FileContent::Failed(message) => {
                assert!(message.starts_with("[Error reading file:"));
                assert!(message.ends_with(']'));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_as_text() {
        assert_eq!(
            FileContent::Text("x".to_string()).as_text(),
            Some("x")
        );
        assert_eq!(FileContent::Unreadable.as_text(), None);
        assert_eq!(
            FileContent::Failed("[Error reading file: boom]".to_string()).as_text(),
            Some("[Error reading file: boom]")
        );
    }
}
