use crate::error::{ExportError, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A regular file discovered by the walk, before any content inspection.
#[derive(Debug, Clone)]
pub struct CollectedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl CollectedFile {
    pub fn new(path: PathBuf, size: u64) -> Self {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        Self {
            path,
            file_name,
            size,
        }
    }
}

/// Recursive descent over a project tree, skipping hidden entries.
pub struct FileCollector;

impl FileCollector {
    pub fn new() -> Self {
        Self
    }

    /// Every regular file reachable under `root`, excluding any file or
    /// directory whose name starts with a period. Pruned directories are
    /// never entered, so their descendants are skipped at any depth.
    /// Entries the walk cannot read are skipped silently.
    pub fn collect<P: AsRef<Path>>(&self, root: P) -> Result<Vec<CollectedFile>> {
        let root_path = root.as_ref();

        if !root_path.is_dir() {
            return Err(ExportError::InvalidRoot {
                path: root_path.display().to_string(),
            });
        }

        let mut files = Vec::new();

        let walker = WalkDir::new(root_path)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(_) => continue,
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            files.push(CollectedFile::new(entry.path().to_path_buf(), size));
        }

        // Stable ordering keeps repeated exports byte-identical.
        files.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(files)
    }
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
