use crate::error::{ExportError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Counters accumulated over one export run.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub files_scanned: usize,
    pub files_exported: usize,
    pub bytes_written: u64,
    pub start_time: Instant,
}

impl ExportSummary {
    pub fn new(files_scanned: usize) -> Self {
        Self {
            files_scanned,
            files_exported: 0,
            bytes_written: 0,
            start_time: Instant::now(),
        }
    }

    pub fn record_export(&mut self) {
        self.files_exported += 1;
    }

    pub fn set_bytes_written(&mut self, bytes: u64) {
        self.bytes_written = bytes;
    }

    pub fn files_skipped(&self) -> usize {
        self.files_scanned - self.files_exported
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Writes the joined export blocks to a single UTF-8 text file, overwriting
/// any existing file of the same name.
pub struct ExportWriter {
    output_path: PathBuf,
}

impl ExportWriter {
    pub fn new<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Join all blocks with a single newline and write them in one shot.
    /// Returns the number of bytes written.
    pub fn write(&self, entries: &[String]) -> Result<u64> {
        let joined = entries.join("\n");

        fs::write(&self.output_path, joined.as_bytes()).map_err(|e| {
            ExportError::WriteFailed {
                path: self.output_path.display().to_string(),
                source: e,
            }
        })?;

        Ok(joined.len() as u64)
    }
}
