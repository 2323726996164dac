use clap::Parser;
use codexport::{
    gather_settings, Cli, CodeExport, ExportError, OutputFormatter, OutputMode, UserFriendlyError,
};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let output_mode = match cli.output_format {
        codexport::cli::OutputFormat::Human => OutputMode::Human,
        codexport::cli::OutputFormat::Json => OutputMode::Json,
        codexport::cli::OutputFormat::Plain => OutputMode::Plain,
    };
    let formatter = OutputFormatter::new(output_mode, cli.verbosity_level(), cli.quiet);

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            formatter.print_user_friendly_error(&e);
            return 1;
        }
    };

    formatter.print_header("Project Code Exporter – prepare your codebase for review");

    // Configuration-gathering phase: everything interactive happens here,
    // before any file under the root is touched.
    let settings = match gather_settings(
        config,
        cli.root.clone(),
        cli.output.is_some(),
        cli.add_extensions.is_some(),
        cli.non_interactive,
    ) {
        Ok(settings) => settings,
        Err(e) => {
            formatter.print_user_friendly_error(&e);
            return match e {
                ExportError::InvalidRoot { .. } => 2,
                _ => 1,
            };
        }
    };

    let app = CodeExport::new(settings, output_mode, cli.verbosity_level(), cli.quiet);

    match app.export() {
        Ok(_summary) => 0,
        Err(e) => {
            app.handle_error(&e);
            match e {
                ExportError::InvalidRoot { .. } => 2,
                _ => 1,
            }
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "codexport.toml".to_string());

    match CodeExport::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  codexport --config {}", config_path);
            println!("\nEdit the file to customize settings for your needs.");
            0
        }
        Err(e) => {
            eprintln!(
                "Failed to generate configuration file: {}",
                e.user_message()
            );
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let cli = Cli::parse_from([
            "codexport",
            "--generate-config",
            "--config",
            config_path.to_str().unwrap(),
        ]);

        let exit_code = handle_generate_config(&cli);
        assert_eq!(exit_code, 0);
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[filters]"));
    }
}
