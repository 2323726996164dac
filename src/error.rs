use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid root folder: {path}")]
    InvalidRoot { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to write export file {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for ExportError {
    fn user_message(&self) -> String {
        match self {
            ExportError::InvalidRoot { path } => {
                format!("Invalid folder path: {}", path)
            }
            ExportError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            ExportError::Prompt(e) => {
                format!("Could not read input: {}", e)
            }
            ExportError::WriteFailed { path, source } => {
                format!("Failed to save output to {}: {}", path, source)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ExportError::InvalidRoot { .. } => Some(
                "Provide the full path of an existing project directory (e.g., /home/me/myproject)."
                    .to_string(),
            ),
            ExportError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present."
                    .to_string(),
            ),
            ExportError::WriteFailed { .. } => Some(
                "Ensure the output location is writable and has enough free space, or choose a different output name."
                    .to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ExportError {
    fn from(error: toml::de::Error) -> Self {
        ExportError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
