use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codexport")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Concatenate a project's text files into a single annotated export")]
#[command(
    long_about = "codexport walks a project directory, detects text files by extension and \
                  content sniffing, and concatenates their contents into one annotated .txt \
                  file for downstream review. Any value not supplied on the command line is \
                  gathered interactively."
)]
#[command(after_help = "EXAMPLES:\n  \
    codexport\n  \
    codexport --root ~/myproject --output myproject_export\n  \
    codexport --root . --add-extensions xml,gradle --non-interactive\n  \
    codexport --config codexport.toml --root src")]
pub struct Cli {
    /// Root folder to scan (prompted for when omitted)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Name for the output file, without extension
    #[arg(short, long)]
    pub output: Option<String>,

    /// Additional extensions to allow (comma-separated, e.g. xml,gradle)
    #[arg(short = 'e', long, value_delimiter = ',')]
    pub add_extensions: Option<Vec<String>>,

    /// Maximum file size to process (in MB)
    #[arg(long)]
    pub max_size: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never prompt; missing values fall back to defaults (--root required)
    #[arg(long)]
    pub non_interactive: bool,

    /// Generate a sample configuration file
    #[arg(long)]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        let max_file_size = self.max_size.map(|size| size * 1024 * 1024);

        CliOverrides::new()
            .with_output_name(self.output.clone())
            .with_add_extensions(self.add_extensions.clone())
            .with_max_file_size(max_file_size)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
