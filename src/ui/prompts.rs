use crate::config::{Config, ExportSettings};
use crate::error::{ExportError, Result};
use console::style;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;

/// Interactive configuration gathering. Runs once before the scan phase and
/// produces the immutable settings record the pipeline operates on.
///
/// Each prompt is skipped when the corresponding value was already supplied
/// on the command line; with `non_interactive` set, missing values fall back
/// to defaults and a missing root is a configuration error.
pub fn gather_settings(
    mut config: Config,
    root: Option<PathBuf>,
    output_given: bool,
    extensions_given: bool,
    non_interactive: bool,
) -> Result<ExportSettings> {
    if !output_given && !non_interactive {
        let output_name: String = Input::new()
            .with_prompt("Enter name for the output file (without extension)")
            .default(config.output.base_name.clone())
            .interact_text()?;

        let trimmed = output_name.trim();
        if !trimmed.is_empty() {
            config.output.base_name = trimmed.to_string();
        }
    }

    let root = match root {
        Some(root) => root,
        None => {
            if non_interactive {
                return Err(ExportError::Config {
                    message: "--root is required in non-interactive mode".to_string(),
                });
            }

            let folder: String = Input::new()
                .with_prompt("Enter full path of your project folder")
                .interact_text()?;
            PathBuf::from(folder.trim())
        }
    };

    if !extensions_given && !non_interactive {
        println!();
        println!("{}", style("Default allowed file types:").bold());
        println!("{}", config.display_extensions().join(", "));

        let add_more = Confirm::new()
            .with_prompt("Do you want to add more extensions?")
            .default(false)
            .interact()?;

        if add_more {
            let extra: String = Input::new()
                .with_prompt("Enter additional extensions (comma-separated, e.g. .xml,.gradle)")
                .allow_empty(true)
                .interact_text()?;

            if !extra.trim().is_empty() {
                config.add_extensions(extra.split(','));
            }
        }
    }

    ExportSettings::new(root, config)
}
