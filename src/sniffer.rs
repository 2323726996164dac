use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Prefix size used for the "is this plausibly text?" existence check.
pub const SNIFF_SAMPLE_SIZE: usize = 512;

/// Best-effort encoding detection. A heuristic, not an exact decoder:
/// ambiguous byte sequences may be misidentified, and callers are expected
/// to decode with replacement rather than trust the guess blindly.
pub struct EncodingSniffer;

impl EncodingSniffer {
    /// Guess the encoding of a byte buffer. Returns `None` when the bytes
    /// do not look like text in any encoding.
    pub fn sniff(bytes: &[u8]) -> Option<&'static Encoding> {
        // Zero bytes carry no encoding evidence; empty files are excluded
        // from the export entirely.
        if bytes.is_empty() {
            return None;
        }

        if Self::looks_binary(bytes) {
            return None;
        }

        // Valid UTF-8 needs no detector; chardetng would otherwise report a
        // legacy encoding for plain ASCII.
        if std::str::from_utf8(bytes).is_ok() {
            return Some(UTF_8);
        }

        let mut detector = EncodingDetector::new();
        detector.feed(bytes, true);
        Some(detector.guess(None, false))
    }

    /// Existence check: sniff a small prefix of the file. Any error while
    /// opening or reading counts as "not text" and the caller moves on.
    pub fn is_text_file(path: &Path) -> bool {
        match Self::read_sample(path) {
            Ok(sample) => Self::sniff(&sample).is_some(),
            Err(_) => false,
        }
    }

    fn read_sample(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut buffer = vec![0u8; SNIFF_SAMPLE_SIZE];
        let bytes_read = file.read(&mut buffer)?;
        buffer.truncate(bytes_read);
        Ok(buffer)
    }

    // NUL bytes never appear in text files; they are the cheapest reliable
    // marker of binary content.
    fn looks_binary(sample: &[u8]) -> bool {
        sample.contains(&0)
    }
}
