pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod reader;
pub mod scanner;
pub mod sniffer;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, ExportSettings, FilterConfig, OutputConfig};
pub use error::{ExportError, Result, UserFriendlyError};

// Core functionality re-exports
pub use export::{format_entry, ExportSummary, ExportWriter};
pub use reader::{ContentReader, FileContent};
pub use scanner::{CollectedFile, FileCollector, FileFilter};
pub use sniffer::EncodingSniffer;
pub use ui::{gather_settings, OutputFormatter, OutputMode, ProgressManager};

use std::path::PathBuf;

/// Main library interface: drives the straight-line export pipeline over an
/// immutable settings record.
pub struct CodeExport {
    settings: ExportSettings,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl CodeExport {
    pub fn new(settings: ExportSettings, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager =
            ProgressManager::new(!quiet && output_mode == OutputMode::Human);

        Self {
            settings,
            output_formatter,
            progress_manager,
        }
    }

    /// Run the pipeline: collect paths, filter by extension and text sniff,
    /// read and format each qualifying file, join the blocks, write one file.
    pub fn export(&self) -> Result<ExportSummary> {
        let root = &self.settings.root;
        let config = &self.settings.config;

        self.output_formatter
            .start_operation(&format!("Scanning folder: {}", root.display()));
        self.output_formatter.status(&format!(
            "Accepted extensions: {}",
            config.display_extensions().join(", ")
        ));

        let files = FileCollector::new().collect(root)?;
        self.output_formatter
            .status(&format!("Found {} files", files.len()));

        let filter = FileFilter::new(&config.filters);
        let mut summary = ExportSummary::new(files.len());
        let mut entries = Vec::new();

        let progress = self
            .progress_manager
            .create_file_progress(files.len() as u64);

        for file in &files {
            progress.set_message(file.file_name.clone());

            if filter.is_allowed_extension(&file.path)
                && filter.is_size_allowed(file.size)
                && EncodingSniffer::is_text_file(&file.path)
            {
                let content = ContentReader::read(&file.path);
                entries.push(format_entry(
                    &file.path.display().to_string(),
                    &file.file_name,
                    content.as_text(),
                ));
                summary.record_export();
            }
            // Non-qualifying files are skipped without a trace.

            progress.inc(1);
        }

        progress.finish_and_clear();

        let writer = ExportWriter::new(self.output_path());
        let bytes_written = writer.write(&entries)?;
        summary.set_bytes_written(bytes_written);

        self.output_formatter.success(&format!(
            "Export complete! Output saved to: {}",
            writer.output_path().display()
        ));
        self.output_formatter
            .print_export_summary(&summary, &writer.output_path().display().to_string());

        Ok(summary)
    }

    pub fn output_path(&self) -> PathBuf {
        self.settings.config.output_file_path()
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn handle_error(&self, error: &ExportError) {
        self.output_formatter.print_user_friendly_error(error);
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<std::path::Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(ExportError::Io)?;
        Ok(())
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
