use crate::config::FilterConfig;
use std::path::Path;

/// Extension allow-list built once from defaults plus user additions and
/// passed by value into the filtering step.
pub struct FileFilter {
    extensions: Vec<String>,
    max_file_size: u64,
}

impl FileFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            extensions: config
                .extensions
                .iter()
                .map(|e| e.to_lowercase())
                .collect(),
            max_file_size: config.max_file_size,
        }
    }

    /// Case-insensitive check of the file's suffix against the allow-list.
    /// Files without an extension never match.
    pub fn is_allowed_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(extension) => {
                let ext = format!(".{}", extension.to_lowercase());
                self.extensions.contains(&ext)
            }
            None => false,
        }
    }

    pub fn is_size_allowed(&self, size: u64) -> bool {
        size <= self.max_file_size
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        let config = FilterConfig::default();
        Self::new(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> FilterConfig {
        FilterConfig {
            extensions: vec![".py".to_string(), ".md".to_string(), ".toml".to_string()],
            max_file_size: 1024 * 1024, // 1MB
        }
    }

    #[test]
    fn test_extension_matching() {
        let filter = FileFilter::new(&create_test_config());

        assert!(filter.is_allowed_extension(Path::new("main.py")));
        assert!(filter.is_allowed_extension(Path::new("README.md")));
        assert!(filter.is_allowed_extension(Path::new("deep/nested/Cargo.toml")));

        assert!(!filter.is_allowed_extension(Path::new("image.png")));
        assert!(!filter.is_allowed_extension(Path::new("binary.bin")));
    }

    #[test]
    fn test_case_insensitive_extensions() {
        let filter = FileFilter::new(&create_test_config());

        assert!(filter.is_allowed_extension(Path::new("Main.PY")));
        assert!(filter.is_allowed_extension(Path::new("readme.Md")));
        assert!(filter.is_allowed_extension(Path::new("config.TOML")));
    }

    #[test]
    fn test_uppercase_allow_list_entries() {
        let config = FilterConfig {
            extensions: vec![".PY".to_string()],
            max_file_size: 1024,
        };
        let filter = FileFilter::new(&config);
        assert!(filter.is_allowed_extension(Path::new("main.py")));
        assert!(filter.is_allowed_extension(Path::new("main.PY")));
    }

    #[test]
    fn test_extensionless_files_never_match() {
        let filter = FileFilter::new(&create_test_config());

        assert!(!filter.is_allowed_extension(Path::new("README")));
        assert!(!filter.is_allowed_extension(Path::new("Makefile")));
    }

    #[test]
    fn test_size_limits() {
        let filter = FileFilter::new(&create_test_config());

        assert!(filter.is_size_allowed(1024));
        assert!(filter.is_size_allowed(1024 * 1024));
        assert!(!filter.is_size_allowed(2 * 1024 * 1024));
    }
}
