pub mod output;
pub mod progress;
pub mod prompts;

pub use output::{OutputFormatter, OutputMode};
pub use progress::ProgressManager;
pub use prompts::gather_settings;
