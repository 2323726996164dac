use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub filters: FilterConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Allowed extensions, each with a leading period, compared case-insensitively.
    pub extensions: Vec<String>,
    pub max_file_size: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Base name of the export file; ".txt" is appended.
    pub base_name: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extensions: vec![
                ".py".to_string(),
                ".java".to_string(),
                ".cpp".to_string(),
                ".c".to_string(),
                ".kt".to_string(),
                ".toml".to_string(),
                ".js".to_string(),
                ".html".to_string(),
                ".md".to_string(),
                ".css".to_string(),
            ],
            max_file_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_name: "Project_Code_Export".to_string(),
        }
    }
}

/// Normalize a user-supplied extension: trim, lowercase, ensure a leading period.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "." {
        return None;
    }
    let lower = trimmed.to_lowercase();
    if lower.starts_with('.') {
        Some(lower)
    } else {
        Some(format!(".{}", lower))
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ExportError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ExportError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ExportError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["codexport.toml", ".codexport.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, overrides: &CliOverrides) {
        if let Some(ref output_name) = overrides.output_name {
            self.output.base_name = output_name.clone();
        }

        if let Some(ref extensions) = overrides.add_extensions {
            self.add_extensions(extensions.iter().map(String::as_str));
        }

        if let Some(max_size) = overrides.max_file_size {
            self.filters.max_file_size = max_size;
        }
    }

    /// Append user-supplied extensions, normalized. Duplicates are allowed
    /// in the working list and only collapsed for display.
    pub fn add_extensions<'a, I: IntoIterator<Item = &'a str>>(&mut self, extensions: I) {
        for raw in extensions {
            if let Some(ext) = normalize_extension(raw) {
                self.filters.extensions.push(ext);
            }
        }
    }

    /// Sorted, deduplicated allow-list for display purposes.
    pub fn display_extensions(&self) -> Vec<String> {
        let mut extensions = self.filters.extensions.clone();
        extensions.sort();
        extensions.dedup();
        extensions
    }

    pub fn output_file_name(&self) -> String {
        format!("{}.txt", self.output.base_name)
    }

    pub fn output_file_path(&self) -> PathBuf {
        PathBuf::from(self.output_file_name())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| ExportError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| ExportError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.filters.extensions.is_empty() {
            return Err(ExportError::Config {
                message: "At least one file extension must be specified".to_string(),
            });
        }

        if self
            .filters
            .extensions
            .iter()
            .any(|ext| !ext.starts_with('.'))
        {
            return Err(ExportError::Config {
                message: "Extensions must include a leading period (e.g., \".py\")".to_string(),
            });
        }

        if self.filters.max_file_size == 0 {
            return Err(ExportError::Config {
                message: "Maximum file size must be greater than 0".to_string(),
            });
        }

        if self.output.base_name.trim().is_empty() {
            return Err(ExportError::Config {
                message: "Output base name must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

/// Immutable record of the full export run, built once during the
/// configuration-gathering phase before any file is touched.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub root: PathBuf,
    pub config: Config,
}

impl ExportSettings {
    pub fn new(root: PathBuf, config: Config) -> Result<Self> {
        if !root.is_dir() {
            return Err(ExportError::InvalidRoot {
                path: root.display().to_string(),
            });
        }

        config.validate()?;

        Ok(Self { root, config })
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub output_name: Option<String>,
    pub add_extensions: Option<Vec<String>>,
    pub max_file_size: Option<u64>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_name(mut self, output_name: Option<String>) -> Self {
        self.output_name = output_name;
        self
    }

    pub fn with_add_extensions(mut self, extensions: Option<Vec<String>>) -> Self {
        self.add_extensions = extensions;
        self
    }

    pub fn with_max_file_size(mut self, max_size: Option<u64>) -> Self {
        self.max_file_size = max_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.filters.extensions.len(), 10);
        assert!(config.filters.extensions.contains(&".py".to_string()));
        assert_eq!(config.output.base_name, "Project_Code_Export");
        assert_eq!(config.output_file_name(), "Project_Code_Export.txt");
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("xml"), Some(".xml".to_string()));
        assert_eq!(normalize_extension(".gradle"), Some(".gradle".to_string()));
        assert_eq!(normalize_extension("  RS  "), Some(".rs".to_string()));
        assert_eq!(normalize_extension(""), None);
        assert_eq!(normalize_extension("   "), None);
        assert_eq!(normalize_extension("."), None);
    }

    #[test]
    fn test_add_extensions_keeps_duplicates() {
        let mut config = Config::default();
        config.add_extensions(["py", ".py", "xml"]);

        let py_count = config
            .filters
            .extensions
            .iter()
            .filter(|e| *e == ".py")
            .count();
        assert_eq!(py_count, 3);

        let display = config.display_extensions();
        assert_eq!(display.iter().filter(|e| *e == ".py").count(), 1);
        assert!(display.contains(&".xml".to_string()));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.filters.extensions.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.filters.extensions.push("py".to_string());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.output.base_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_operations() {
        let config = Config::default();
        let temp_file = NamedTempFile::new().unwrap();

        config.save_to_file(temp_file.path()).unwrap();

        let loaded_config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.filters.extensions,
            loaded_config.filters.extensions
        );
        assert_eq!(config.output.base_name, loaded_config.output.base_name);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();

        let overrides = CliOverrides::new()
            .with_output_name(Some("my_export".to_string()))
            .with_add_extensions(Some(vec!["xml".to_string(), ".gradle".to_string()]));

        config.merge_with_cli_args(&overrides);

        assert_eq!(config.output.base_name, "my_export");
        assert!(config.filters.extensions.contains(&".xml".to_string()));
        assert!(config.filters.extensions.contains(&".gradle".to_string()));
    }

    #[test]
    fn test_settings_reject_missing_root() {
        let result = ExportSettings::new(PathBuf::from("/definitely/not/there"), Config::default());
        assert!(matches!(result, Err(ExportError::InvalidRoot { .. })));
    }

    #[test]
    fn test_settings_reject_file_root() {
        let temp_file = NamedTempFile::new().unwrap();
        let result =
            ExportSettings::new(temp_file.path().to_path_buf(), Config::default());
        assert!(matches!(result, Err(ExportError::InvalidRoot { .. })));
    }

    #[test]
    fn test_settings_accept_directory_root() {
        let temp_dir = TempDir::new().unwrap();
        let settings =
            ExportSettings::new(temp_dir.path().to_path_buf(), Config::default()).unwrap();
        assert_eq!(settings.root, temp_dir.path());
    }

    #[test]
    fn test_sample_config_generation() {
        let sample = Config::create_sample_config();
        assert!(!sample.is_empty());
        assert!(sample.contains("[filters]"));
        assert!(sample.contains("[output]"));
    }
}
